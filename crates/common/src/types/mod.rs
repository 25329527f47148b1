use serde::{Deserialize, Serialize};

/// `{"status": "..."}` acknowledgement body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self { status: status.into() }
    }

    pub fn ok() -> Self { Self::new("ok") }

    pub fn seeded() -> Self { Self::new("seeded") }
}

/// `{"message": "..."}` body served by the root route.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
