use serde::{Deserialize, Serialize};

/// Success body for join and leave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Failure body. Every rejected request carries a single human readable `detail`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
