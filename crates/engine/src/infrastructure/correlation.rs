//! Correlation IDs tying an inbound request to the upstream calls it makes.

use std::fmt;
use uuid::Uuid;

/// Correlation ID for one gateway operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First 8 hex characters, enough to grep logs by.
    pub fn short(&self) -> String {
        let mut id = self.0.simple().to_string();
        id.truncate(8);
        id
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
