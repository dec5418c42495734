use crate::domain::recipient::RecipientList;

/// One submit action: a message body and the recipients it goes to.
///
/// Construction does not validate; `DispatchService` enforces the
/// preconditions (non-empty body, at least one recipient) before any
/// network call is issued.
#[derive(Debug, Clone)]
pub struct MessageRequest {
    pub body: String,
    pub recipients: RecipientList,
}
