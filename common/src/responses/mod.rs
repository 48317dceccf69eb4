use serde::{Deserialize, Serialize};

/// Acknowledgement returned by every mutating endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// JSON body of a failed API call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Payload of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// `"ok"` or `"error"`.
    pub status: String,
    /// `"connected"` when the store answered, `"unavailable"` otherwise.
    pub database: String,
    pub teachers: usize,
    pub records: usize,
    /// Server time, RFC 3339.
    pub time: String,
}
