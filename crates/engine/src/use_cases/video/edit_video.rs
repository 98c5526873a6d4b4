//! Edit a video.
//!
//! Request options are validated and planned here; the processor only sees
//! an ordered [`EditPlan`].

use std::sync::Arc;

use reelgate_domain::{DomainError, EditOptions, EditPlan, Resolution, Watermark};
use reelgate_shared::{VideoEditOptions, VideoEditRequest, VideoEditResponse};

use crate::infrastructure::correlation::CorrelationId;
use crate::infrastructure::ports::{EditJob, MediaProcessorPort};
use crate::use_cases::validation::{present, ValidationError};

use super::VideoError;

pub struct EditVideo {
    media: Arc<dyn MediaProcessorPort>,
}

impl EditVideo {
    pub fn new(media: Arc<dyn MediaProcessorPort>) -> Self {
        Self { media }
    }

    pub async fn execute(&self, request: VideoEditRequest) -> Result<VideoEditResponse, VideoError> {
        let (Some(input_path), Some(output_path)) = (
            present(request.input_path.as_deref()),
            present(request.output_path.as_deref()),
        ) else {
            return Err(ValidationError::MissingFields(&["inputPath", "outputPath"]).into());
        };

        let options = edit_options(&request.options)?;
        let plan = EditPlan::from_options(&options)?;

        let correlation_id = CorrelationId::new();
        tracing::info!(
            correlation_id = %correlation_id.short(),
            input = %input_path,
            output = %output_path,
            steps = plan.len(),
            "Starting video edit"
        );

        let job = EditJob {
            input_path: input_path.to_string(),
            output_path: output_path.to_string(),
            plan,
            extra: request.options.extra.clone(),
        };
        let success = self.media.process(job).await.inspect_err(|e| {
            tracing::error!(correlation_id = %correlation_id.short(), error = %e, "Video edit failed");
        })?;

        if !success {
            tracing::warn!(correlation_id = %correlation_id.short(), "Processor reported failure");
        }
        Ok(VideoEditResponse::from_outcome(success))
    }
}

/// Convert wire options into validated domain options.
fn edit_options(options: &VideoEditOptions) -> Result<EditOptions, DomainError> {
    let watermark = match present(options.watermark_path.as_deref()) {
        Some(path) => {
            let position = match present(options.watermark_position.as_deref()) {
                Some(position) => position.parse()?,
                None => Default::default(),
            };
            Some(Watermark {
                path: path.to_string(),
                position,
            })
        }
        None => None,
    };

    let target_resolution = present(options.target_resolution.as_deref())
        .map(Resolution::parse)
        .transpose()?;

    Ok(EditOptions {
        remove_audio: options.remove_audio.unwrap_or(false),
        add_subtitles: options.add_subtitles.unwrap_or(false),
        watermark,
        target_resolution,
        target_frame_rate: options.target_frame_rate,
        duration_limit: options.duration_limit,
    })
}
