//! YouTube compliance check.

use std::sync::Arc;

use reelgate_domain::ComplianceReport;
use reelgate_shared::{ComplianceRequest, ComplianceResponse};

use crate::infrastructure::ports::MediaProcessorPort;
use crate::use_cases::validation::{present, ValidationError};

use super::VideoError;

pub struct CheckCompliance {
    media: Arc<dyn MediaProcessorPort>,
}

impl CheckCompliance {
    pub fn new(media: Arc<dyn MediaProcessorPort>) -> Self {
        Self { media }
    }

    pub async fn execute(&self, request: ComplianceRequest) -> Result<ComplianceResponse, VideoError> {
        let video_path = present(request.video_path.as_deref())
            .ok_or(ValidationError::MissingParameter("videoPath"))?;

        let metadata = self.media.read_metadata(video_path).await?;
        let report = ComplianceReport::evaluate(&metadata);

        tracing::info!(
            path = %video_path,
            compliant = report.compliant,
            issues = report.issues.len(),
            "Compliance check finished"
        );
        Ok(report.into())
    }
}
