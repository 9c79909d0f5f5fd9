//! Word Study Data Types

use serde::{Deserialize, Serialize};

/// One word-study record tied to a Strong's number.
#[derive(Debug, Clone, Serialize)]
pub struct WordStudy {
    pub id: u32,
    pub strongs_number: String,
    pub title: String,
    pub notes: String,
    /// Unix milliseconds.
    pub created_at: u64,
    pub updated_at: u64,
}

#[derive(Debug, Deserialize)]
pub struct CreateStudyRequest {
    pub strongs_number: String,
    pub title: String,
    #[serde(default)]
    pub notes: String,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Deserialize)]
pub struct UpdateStudyRequest {
    pub strongs_number: Option<String>,
    pub title: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteStudyResponse {
    pub success: bool,
}

/// Helper to get the current system time in milliseconds.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
