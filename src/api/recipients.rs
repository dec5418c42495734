use crate::api::AppState;
use crate::api::schemas::recipients::ExtractResponse;
use crate::domain::recipient::RecipientList;
use crate::error::Result;
use axum::{Json, extract::State};
use bytes::Bytes;

/// Extracts recipients from an uploaded spreadsheet.
///
/// The response carries both the normalized list and its comma-joined form;
/// the latter feeds the free-text recipients field and round-trips through
/// the comma parser.
///
/// # Errors
/// Returns `AppError::Extract` when the bytes are not a readable workbook;
/// an unreadable file yields zero recipients, never a partial list.
pub async fn extract_recipients(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ExtractResponse>> {
    let candidates = state.extraction.extract(&body)?;
    let recipients =
        RecipientList::normalized(&candidates, &state.config.dispatch.country_prefix);

    tracing::info!(
        candidates = candidates.len(),
        recipients = recipients.len(),
        "Spreadsheet imported"
    );

    Ok(Json(ExtractResponse { joined: recipients.to_comma_separated(), recipients }))
}
