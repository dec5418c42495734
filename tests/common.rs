#![allow(clippy::unwrap_used, clippy::missing_panics_doc, clippy::must_use_candidate, missing_debug_implementations, unreachable_pub, dead_code)]

use async_trait::async_trait;
use groupcast_server::api::{self, AppState};
use groupcast_server::config::{
    Config, DispatchConfig, ExtractionConfig, LogFormat, ServerConfig, TelemetryConfig,
    TwilioConfig,
};
use groupcast_server::services::dispatch_service::DispatchService;
use groupcast_server::services::extract_service::ExtractionPolicy;
use groupcast_server::services::gateway::{SendOutcome, SmsGateway};
use serde_json::json;
use std::sync::{Arc, Mutex, Once};

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("groupcast_server=debug".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

/// In-process gateway double: records every call, rejects scripted
/// destinations with a Twilio-shaped error payload.
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    calls: Mutex<Vec<(String, String)>>,
    reject: Vec<String>,
}

impl ScriptedGateway {
    pub fn rejecting(destinations: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reject: destinations.iter().map(ToString::to_string).collect(),
        }
    }

    /// Recorded `(destination, body)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SmsGateway for ScriptedGateway {
    async fn send_one(&self, to: &str, body: &str) -> SendOutcome {
        self.calls.lock().unwrap().push((to.to_string(), body.to_string()));
        if self.reject.iter().any(|d| d == to) {
            SendOutcome::Rejected {
                http_status: 400,
                payload: json!({"code": 21211, "message": "Invalid 'To' number"}),
            }
        } else {
            SendOutcome::Accepted(json!({"status": "queued", "to": to}))
        }
    }
}

pub fn get_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
        },
        twilio: TwilioConfig {
            account_sid: "AC00000000000000000000000000000000".to_string(),
            auth_token: "test_token".to_string(),
            from_number: "+15550000".to_string(),
            base_url: "https://api.twilio.com".to_string(),
            timeout_secs: 5,
        },
        dispatch: DispatchConfig {
            country_prefix: "+1".to_string(),
            footer: "\n\n - Groupcast — Send Group SMS (Demo)".to_string(),
            max_body_len: 1600,
        },
        extraction: ExtractionConfig { header_rows: 1, recipient_column: 1 },
        telemetry: TelemetryConfig { log_format: LogFormat::Text },
    }
}

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub gateway: Arc<ScriptedGateway>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_gateway(Arc::new(ScriptedGateway::default())).await
    }

    pub async fn spawn_with_gateway(gateway: Arc<ScriptedGateway>) -> Self {
        setup_tracing();

        let config = get_test_config();
        let dispatch_service =
            DispatchService::new(Arc::clone(&gateway) as Arc<dyn SmsGateway>, &config.dispatch);
        let extraction = ExtractionPolicy::from(&config.extraction);
        let router = api::app_router(AppState { config, dispatch_service, extraction });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
            gateway,
        }
    }
}
