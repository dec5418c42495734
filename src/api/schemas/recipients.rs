use crate::domain::recipient::RecipientList;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub recipients: RecipientList,
    pub joined: String,
}
