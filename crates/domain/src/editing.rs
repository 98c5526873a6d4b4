//! Video edit options and the ordered plan derived from them.
//!
//! The gateway does not transcode anything itself. The plan exists so that
//! option validation and step ordering are decided in one place, whatever
//! processor eventually executes it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Frame size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse `"WIDTHxHEIGHT"` (e.g. `"1080x1920"`) or a `"<lines>p"` preset
    /// (e.g. `"720p"`, assumed 16:9 landscape).
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let raw = input.trim().to_ascii_lowercase();
        if raw.is_empty() {
            return Err(DomainError::parse("Empty resolution"));
        }

        if let Some(lines) = raw.strip_suffix('p') {
            let height: u32 = lines
                .parse()
                .map_err(|_| DomainError::parse(format!("Invalid resolution: '{}'", input)))?;
            if height == 0 {
                return Err(DomainError::parse(format!("Invalid resolution: '{}'", input)));
            }
            // Round to the nearest even width, encoders reject odd sizes.
            let width = height
                .checked_mul(16)
                .and_then(|scaled| (scaled / 9).checked_add(1))
                .map(|w| w & !1)
                .ok_or_else(|| DomainError::parse(format!("Invalid resolution: '{}'", input)))?;
            return Ok(Self { width, height });
        }

        let (w, h) = raw
            .split_once('x')
            .ok_or_else(|| DomainError::parse(format!("Invalid resolution: '{}'", input)))?;
        let width: u32 = w
            .trim()
            .parse()
            .map_err(|_| DomainError::parse(format!("Invalid resolution width: '{}'", w)))?;
        let height: u32 = h
            .trim()
            .parse()
            .map_err(|_| DomainError::parse(format!("Invalid resolution height: '{}'", h)))?;
        if width == 0 || height == 0 {
            return Err(DomainError::parse(format!("Invalid resolution: '{}'", input)));
        }
        Ok(Self { width, height })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Corner (or center) a watermark is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WatermarkPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
    Center,
}

impl WatermarkPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::Center => "center",
        }
    }
}

impl FromStr for WatermarkPosition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "top-left" => Ok(Self::TopLeft),
            "top-right" => Ok(Self::TopRight),
            "bottom-left" => Ok(Self::BottomLeft),
            "bottom-right" => Ok(Self::BottomRight),
            "center" | "centre" => Ok(Self::Center),
            _ => Err(DomainError::unsupported("watermark position", s)),
        }
    }
}

/// A watermark overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Watermark {
    pub path: String,
    pub position: WatermarkPosition,
}

/// Validated edit options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditOptions {
    pub remove_audio: bool,
    pub add_subtitles: bool,
    pub watermark: Option<Watermark>,
    pub target_resolution: Option<Resolution>,
    pub target_frame_rate: Option<f32>,
    /// Maximum output duration in seconds.
    pub duration_limit: Option<u32>,
}

impl EditOptions {
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(fps) = self.target_frame_rate {
            if !fps.is_finite() || fps <= 0.0 {
                return Err(DomainError::validation(format!(
                    "targetFrameRate must be positive, got {}",
                    fps
                )));
            }
        }
        if self.duration_limit == Some(0) {
            return Err(DomainError::validation("durationLimit must be positive"));
        }
        if let Some(watermark) = &self.watermark {
            if watermark.path.trim().is_empty() {
                return Err(DomainError::validation("watermarkPath cannot be empty"));
            }
        }
        Ok(())
    }
}

/// A single processing step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOperation {
    Trim { max_seconds: u32 },
    RemoveAudio,
    Resize { resolution: Resolution },
    SetFrameRate { fps: f32 },
    Watermark { path: String, position: WatermarkPosition },
    BurnSubtitles,
}

impl fmt::Display for EditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trim { max_seconds } => write!(f, "trim to {}s", max_seconds),
            Self::RemoveAudio => f.write_str("remove audio"),
            Self::Resize { resolution } => write!(f, "resize to {}", resolution),
            Self::SetFrameRate { fps } => write!(f, "set frame rate to {}fps", fps),
            Self::Watermark { path, position } => {
                write!(f, "overlay watermark {} at {}", path, position.as_str())
            }
            Self::BurnSubtitles => f.write_str("burn subtitles"),
        }
    }
}

/// Ordered processing steps for one edit request.
///
/// Trimming runs first so later steps touch fewer frames; overlays run after
/// scaling so they are positioned against the final frame size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditPlan {
    pub operations: Vec<EditOperation>,
}

impl EditPlan {
    pub fn from_options(options: &EditOptions) -> Result<Self, DomainError> {
        options.validate()?;

        let mut operations = Vec::new();
        if let Some(max_seconds) = options.duration_limit {
            operations.push(EditOperation::Trim { max_seconds });
        }
        if options.remove_audio {
            operations.push(EditOperation::RemoveAudio);
        }
        if let Some(resolution) = options.target_resolution {
            operations.push(EditOperation::Resize { resolution });
        }
        if let Some(fps) = options.target_frame_rate {
            operations.push(EditOperation::SetFrameRate { fps });
        }
        if let Some(watermark) = &options.watermark {
            operations.push(EditOperation::Watermark {
                path: watermark.path.clone(),
                position: watermark.position,
            });
        }
        if options.add_subtitles {
            operations.push(EditOperation::BurnSubtitles);
        }

        Ok(Self { operations })
    }

    /// True when the output is a plain copy of the input.
    pub fn is_passthrough(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
