use crate::domain::report::{FailureDetail, Outcome};
use async_trait::async_trait;

/// Terminal result of a single gateway call.
///
/// Every call settles into one of these; a binding must never hang
/// indefinitely, or the dispatcher's join never completes.
#[derive(Debug, Clone)]
pub enum SendOutcome {
    /// The gateway accepted the message and returned a structured payload.
    Accepted(serde_json::Value),
    /// The gateway answered with a non-success status and a structured reason.
    Rejected {
        http_status: u16,
        payload: serde_json::Value,
    },
    /// The call failed before a structured gateway answer existed.
    Transport(String),
}

impl From<SendOutcome> for Outcome {
    fn from(outcome: SendOutcome) -> Self {
        match outcome {
            SendOutcome::Accepted(payload) => Self::Sent { payload },
            SendOutcome::Rejected { http_status, payload } => Self::Failed {
                error: FailureDetail::Gateway { http_status, payload },
            },
            SendOutcome::Transport(message) => Self::Failed {
                error: FailureDetail::Transport { message },
            },
        }
    }
}

/// Capability to send one message to one destination.
///
/// Sender identity and credentials belong to the implementation; callers only
/// supply the destination and the already-shaped body.
#[async_trait]
pub trait SmsGateway: Send + Sync + std::fmt::Debug {
    async fn send_one(&self, to: &str, body: &str) -> SendOutcome;
}
