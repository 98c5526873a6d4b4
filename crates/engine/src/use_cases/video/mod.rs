//! Video use cases.
//!
//! Generation and status are relayed to the video provider; editing and
//! compliance checks run against the media processor.

use std::sync::Arc;

mod check_compliance;
mod edit_video;
mod error;
mod generate_video;
mod get_status;

pub use check_compliance::CheckCompliance;
pub use edit_video::EditVideo;
pub use error::VideoError;
pub use generate_video::GenerateVideo;
pub use get_status::GetVideoStatus;

/// Container for video use cases.
pub struct VideoUseCases {
    pub generate: Arc<GenerateVideo>,
    pub status: Arc<GetVideoStatus>,
    pub edit: Arc<EditVideo>,
    pub compliance: Arc<CheckCompliance>,
}

impl VideoUseCases {
    pub fn new(
        generate: Arc<GenerateVideo>,
        status: Arc<GetVideoStatus>,
        edit: Arc<EditVideo>,
        compliance: Arc<CheckCompliance>,
    ) -> Self {
        Self {
            generate,
            status,
            edit,
            compliance,
        }
    }
}
