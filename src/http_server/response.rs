//! # Response Formatting

use serde::Serialize;

/// Acknowledgement body for writes. Never echoes the record or its id.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
