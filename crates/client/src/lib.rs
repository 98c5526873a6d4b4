//! Reelgate Client.
//!
//! Typed access to every gateway endpoint, plus [`TaskPoller`] for waiting
//! on a video generation task.

mod client;
mod error;
mod poller;

pub use client::GatewayClient;
pub use error::ClientError;
pub use poller::{PollConfig, TaskPoller, TaskStatusSource};
