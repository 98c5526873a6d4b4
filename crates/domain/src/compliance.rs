//! YouTube upload compliance rules.

use serde::{Deserialize, Serialize};

use crate::editing::Resolution;

const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * MIB;

/// Upload limits checked by [`ComplianceReport::evaluate`].
pub mod limits {
    use super::GIB;

    /// Tallest accepted frame, in lines.
    pub const MAX_HEIGHT: u32 = 1080;
    /// Hard frame-rate ceiling.
    pub const MAX_FRAME_RATE: f32 = 60.0;
    /// Above this a lower frame rate is recommended but not required.
    pub const RECOMMENDED_FRAME_RATE: f32 = 30.0;
    /// Shorts duration ceiling (15 minutes).
    pub const MAX_DURATION_SECS: u32 = 15 * 60;
    pub const MAX_FILE_SIZE_BYTES: u64 = 128 * GIB;
}

/// Media properties a compliance check looks at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    /// Duration in seconds.
    pub duration: u32,
    pub width: u32,
    pub height: u32,
    pub frame_rate: f32,
    /// Size in bytes.
    pub file_size: u64,
    pub format: String,
    pub has_audio: bool,
    #[serde(default)]
    pub has_copyright_issues: bool,
}

impl VideoMetadata {
    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }

    /// The fixed metadata used while no real media analyzer exists:
    /// a 2 minute 1080x1920 30fps mp4 of 50 MiB.
    pub fn simulated() -> Self {
        Self {
            duration: 120,
            width: 1080,
            height: 1920,
            frame_rate: 30.0,
            file_size: 50 * MIB,
            format: "mp4".to_string(),
            has_audio: true,
            has_copyright_issues: false,
        }
    }
}

/// Outcome of a compliance check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub compliant: bool,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ComplianceReport {
    pub fn evaluate(metadata: &VideoMetadata) -> Self {
        let mut issues = Vec::new();
        let mut recommendations = Vec::new();

        if metadata.height > limits::MAX_HEIGHT {
            issues.push(format!(
                "Resolution too high: {} (max {}p)",
                metadata.resolution(),
                limits::MAX_HEIGHT
            ));
            recommendations.push(format!("Resize video to {}p or lower", limits::MAX_HEIGHT));
        }

        if metadata.frame_rate > limits::MAX_FRAME_RATE {
            issues.push(format!(
                "Frame rate too high: {}fps (max {}fps)",
                metadata.frame_rate,
                limits::MAX_FRAME_RATE
            ));
            recommendations.push(format!(
                "Reduce frame rate to {}fps or lower",
                limits::MAX_FRAME_RATE
            ));
        } else if metadata.frame_rate > limits::RECOMMENDED_FRAME_RATE {
            recommendations.push(format!(
                "Consider reducing frame rate to {}fps for better compatibility",
                limits::RECOMMENDED_FRAME_RATE
            ));
        }

        if metadata.duration > limits::MAX_DURATION_SECS {
            issues.push(format!(
                "Video too long: {}m{}s (max 15 minutes for Shorts)",
                metadata.duration / 60,
                metadata.duration % 60
            ));
            recommendations.push("Trim video to under 15 minutes".to_string());
        }

        if metadata.file_size > limits::MAX_FILE_SIZE_BYTES {
            issues.push(format!(
                "File size too large: {:.2}GB (max 128GB)",
                metadata.file_size as f64 / GIB as f64
            ));
            recommendations.push("Compress video to reduce file size".to_string());
        }

        if metadata.has_copyright_issues {
            issues.push("Potential copyright issues detected".to_string());
            recommendations.push("Review content for copyright compliance".to_string());
        }

        Self {
            compliant: issues.is_empty(),
            issues,
            recommendations,
        }
    }
}
