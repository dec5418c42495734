use crate::domain::recipient::Recipient;
use serde::Serialize;

/// Why one send failed. Gateway rejections and transport breakdowns are kept
/// distinct so the operator can tell a bad number from a network problem.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureDetail {
    /// The gateway answered with a non-success status and a structured reason.
    Gateway {
        http_status: u16,
        payload: serde_json::Value,
    },
    /// The call broke down before a structured gateway answer existed:
    /// connect failure, timeout, or an undecodable response body.
    Transport { message: String },
}

/// Terminal state of one per-recipient send.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Sent { payload: serde_json::Value },
    Failed { error: FailureDetail },
}

impl Outcome {
    #[must_use]
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DispatchResult {
    pub recipient: Recipient,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Per-recipient results for one dispatched batch, index-aligned with the
/// input recipient list. Created only once every send has settled; immutable
/// afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct BatchReport(Vec<DispatchResult>);

impl BatchReport {
    #[must_use]
    pub(crate) fn new(results: Vec<DispatchResult>) -> Self {
        Self(results)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries the gateway accepted.
    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.0.iter().filter(|r| r.outcome.is_sent()).count()
    }

    /// Number of entries that failed, at the gateway or in transport.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.0.len() - self.sent_count()
    }

    #[must_use]
    pub fn results(&self) -> &[DispatchResult] {
        &self.0
    }
}
