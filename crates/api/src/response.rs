//! Shared response bodies for API handlers.

use serde::Serialize;

/// `{ "success": true }`, returned by every successful DELETE.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
