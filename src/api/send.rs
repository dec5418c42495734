use crate::api::AppState;
use crate::api::schemas::send::{SendRequest, SendResponse};
use crate::domain::message::MessageRequest;
use crate::domain::recipient::RecipientList;
use crate::error::Result;
use axum::{Json, extract::State};

/// Dispatches one message to every recipient and reports per-recipient
/// outcomes. Partial failures are data in the response, never an error.
///
/// # Errors
/// Returns `AppError::Validation` if the body is empty or too long, or no
/// recipients remain after normalization.
pub async fn send_batch(
    State(state): State<AppState>,
    Json(request): Json<SendRequest>,
) -> Result<Json<SendResponse>> {
    let recipients =
        RecipientList::normalized(&request.recipients, &state.config.dispatch.country_prefix);
    let message = MessageRequest { body: request.message, recipients };

    let report = state.dispatch_service.dispatch(&message).await?;

    Ok(Json(SendResponse {
        sent: report.sent_count(),
        failed: report.failed_count(),
        results: report,
    }))
}
