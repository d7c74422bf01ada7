use serde::{Deserialize, Serialize};

/// The body returned by the lessons API when a request fails
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}
