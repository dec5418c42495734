use crate::domain::report::BatchReport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SendRequest {
    pub message: String,
    pub recipients: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub sent: usize,
    pub failed: usize,
    pub results: BatchReport,
}
