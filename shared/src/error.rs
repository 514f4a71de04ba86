use thiserror::Error;

pub const BACKEND_UNREACHABLE: &str =
    "Cannot connect to backend. Make sure the backend is running and try again.";

/// Failure of one upload request. `Display` is the text shown on screen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never reached the server. The reason is logged, not shown.
    #[error("{}", BACKEND_UNREACHABLE)]
    Unreachable { reason: String },

    #[error("{body}")]
    Rejected { status: u16, body: String },

    /// The server answered but its body could not be read.
    #[error("Failed to read response (status {status}): {reason}")]
    Unreadable { status: u16, reason: String },

    #[error("Failed to parse response: {0}")]
    Malformed(String),

    #[error("Failed to build request: {0}")]
    Request(String),
}

impl ApiError {
    /// Text for the inline error block.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}
