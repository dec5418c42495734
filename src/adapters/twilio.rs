use crate::config::TwilioConfig;
use crate::services::gateway::{SendOutcome, SmsGateway};
use async_trait::async_trait;
use std::time::Duration;

/// `SmsGateway` binding for the Twilio Messages REST API.
///
/// One form-encoded POST per message, HTTP basic auth with the account SID
/// and auth token. The client carries a request timeout so a hung gateway
/// call still settles and the batch join completes.
#[derive(Debug, Clone)]
pub struct TwilioGateway {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
    messages_url: String,
}

impl TwilioGateway {
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &TwilioConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from_number: config.from_number.clone(),
            messages_url: format!(
                "{}/2010-04-01/Accounts/{}/Messages.json",
                config.base_url.trim_end_matches('/'),
                config.account_sid
            ),
        })
    }
}

#[async_trait]
impl SmsGateway for TwilioGateway {
    async fn send_one(&self, to: &str, body: &str) -> SendOutcome {
        let response = match self
            .client
            .post(&self.messages_url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("From", self.from_number.as_str()), ("To", to), ("Body", body)])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(to = %to, error = %e, "Gateway request failed in transport");
                return SendOutcome::Transport(e.to_string());
            }
        };

        let http_status = response.status();
        match response.json::<serde_json::Value>().await {
            Ok(payload) if http_status.is_success() => {
                tracing::debug!(to = %to, "Gateway accepted message");
                SendOutcome::Accepted(payload)
            }
            Ok(payload) => {
                tracing::warn!(to = %to, status = %http_status, "Gateway rejected message");
                SendOutcome::Rejected { http_status: http_status.as_u16(), payload }
            }
            Err(e) => {
                tracing::warn!(to = %to, status = %http_status, error = %e, "Gateway response body was not decodable");
                SendOutcome::Transport(e.to_string())
            }
        }
    }
}
