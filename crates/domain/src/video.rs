//! Video generation vocabulary: modes and the default render configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Generation mode forwarded to the video provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenerationMode {
    /// Text-to-video
    #[serde(rename = "t2v")]
    TextToVideo,
    /// Image-to-video
    #[serde(rename = "i2v")]
    ImageToVideo,
    /// Reference-to-video
    #[serde(rename = "r2v")]
    ReferenceToVideo,
}

/// An extra input the provider expects for a given mode, sourced from the
/// caller's free-form parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeInput {
    /// Key inside the upstream `input` object.
    pub input_key: &'static str,
    /// Key inside the caller's `params` object that supplies the value.
    pub param_key: &'static str,
}

impl GenerationMode {
    pub const ALL: [GenerationMode; 3] = [
        GenerationMode::TextToVideo,
        GenerationMode::ImageToVideo,
        GenerationMode::ReferenceToVideo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextToVideo => "t2v",
            Self::ImageToVideo => "i2v",
            Self::ReferenceToVideo => "r2v",
        }
    }

    /// Upstream model name for this mode.
    pub fn model(&self) -> &'static str {
        match self {
            Self::TextToVideo => "wanx-video-v2",
            Self::ImageToVideo => "wanx-image-video",
            Self::ReferenceToVideo => "wanx-ref-video",
        }
    }

    /// Service path relative to the provider's API base URL.
    pub fn service_path(&self) -> &'static str {
        match self {
            Self::TextToVideo => "services/aigc/text2video/video-generation",
            Self::ImageToVideo => "services/aigc/image2video/video-generation",
            Self::ReferenceToVideo => "services/aigc/ref2video/video-generation",
        }
    }

    /// The mode-specific input, if any.
    pub fn extra_input(&self) -> Option<ModeInput> {
        match self {
            Self::TextToVideo => None,
            Self::ImageToVideo => Some(ModeInput {
                input_key: "image",
                param_key: "image_url",
            }),
            Self::ReferenceToVideo => Some(ModeInput {
                input_key: "reference",
                param_key: "reference_url",
            }),
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "t2v" => Ok(Self::TextToVideo),
            "i2v" => Ok(Self::ImageToVideo),
            "r2v" => Ok(Self::ReferenceToVideo),
            _ => Err(DomainError::unsupported("video generation type", s)),
        }
    }
}

/// Default render configuration applied before caller overrides.
///
/// Portrait 1080x1920, five seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoConfig {
    pub duration: u32,
    pub width: u32,
    pub height: u32,
}

impl VideoConfig {
    pub const DEFAULT_DURATION_SECS: u32 = 5;
    pub const DEFAULT_WIDTH: u32 = 1080;
    pub const DEFAULT_HEIGHT: u32 = 1920;
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            duration: Self::DEFAULT_DURATION_SECS,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}
