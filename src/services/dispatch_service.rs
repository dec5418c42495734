use crate::config::DispatchConfig;
use crate::domain::message::MessageRequest;
use crate::domain::report::{BatchReport, DispatchResult};
use crate::error::{AppError, Result};
use crate::services::gateway::SmsGateway;
use futures::future::join_all;
use std::sync::Arc;

/// Dispatches one message to every recipient in a batch.
///
/// The footer and body-length cap are presentation policy carried in
/// configuration; the dispatch algorithm itself only fans out, joins, and
/// aggregates.
#[derive(Clone, Debug)]
pub struct DispatchService {
    gateway: Arc<dyn SmsGateway>,
    footer: String,
    max_body_len: usize,
}

impl DispatchService {
    #[must_use]
    pub fn new(gateway: Arc<dyn SmsGateway>, config: &DispatchConfig) -> Self {
        Self {
            gateway,
            footer: config.footer.clone(),
            max_body_len: config.max_body_len,
        }
    }

    /// Builds the outbound body shared by every send in the batch.
    /// Deterministic for equal input.
    fn shape_body(&self, body: &str) -> String {
        format!("{body}{}", self.footer)
    }

    fn validate(&self, request: &MessageRequest) -> Result<()> {
        if request.body.trim().is_empty() {
            return Err(AppError::Validation("message body must not be empty".into()));
        }
        if request.body.chars().count() > self.max_body_len {
            return Err(AppError::Validation(format!(
                "message body exceeds {} characters",
                self.max_body_len
            )));
        }
        if request.recipients.is_empty() {
            return Err(AppError::Validation("at least one recipient is required".into()));
        }
        Ok(())
    }

    /// Sends the message to every recipient concurrently and reports
    /// per-recipient outcomes.
    ///
    /// All sends are issued at once and the report is produced only after
    /// every one has settled; a failing recipient never aborts its siblings.
    /// Results are re-associated with recipients by position, so the report
    /// is index-aligned with the input list regardless of which responses
    /// arrive first.
    ///
    /// # Errors
    /// Returns `AppError::Validation`, before any gateway call, when the body
    /// is empty or too long or the recipient list is empty.
    #[tracing::instrument(skip(self, request), fields(recipients = request.recipients.len()))]
    pub async fn dispatch(&self, request: &MessageRequest) -> Result<BatchReport> {
        self.validate(request)?;

        let body = self.shape_body(&request.body);
        let sends = request
            .recipients
            .iter()
            .map(|recipient| self.gateway.send_one(recipient.as_str(), &body));
        let outcomes = join_all(sends).await;

        let results: Vec<DispatchResult> = request
            .recipients
            .iter()
            .cloned()
            .zip(outcomes)
            .map(|(recipient, outcome)| DispatchResult { recipient, outcome: outcome.into() })
            .collect();

        let report = BatchReport::new(results);
        tracing::info!(
            sent = report.sent_count(),
            failed = report.failed_count(),
            "Batch dispatch settled"
        );
        Ok(report)
    }
}
