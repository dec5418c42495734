use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub twilio: TwilioConfig,

    #[command(flatten)]
    pub dispatch: DispatchConfig,

    #[command(flatten)]
    pub extraction: ExtractionConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "GROUPCAST_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "GROUPCAST_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Inbound request timeout in seconds
    #[arg(long, env = "GROUPCAST_REQUEST_TIMEOUT_SECS", default_value_t = 60)]
    pub request_timeout_secs: u64,
}

#[derive(Clone, Debug, Args)]
pub struct TwilioConfig {
    /// Twilio account SID, used both for authentication and the request path
    #[arg(long, env = "TWILIO_ACCOUNT_SID")]
    pub account_sid: String,

    /// Twilio auth token
    #[arg(long, env = "TWILIO_AUTH_TOKEN")]
    pub auth_token: String,

    /// Sender phone number in international-dialing form
    #[arg(long, env = "TWILIO_FROM_NUMBER")]
    pub from_number: String,

    /// Base URL of the Twilio REST API (overridable for testing)
    #[arg(long, env = "GROUPCAST_TWILIO_BASE_URL", default_value = "https://api.twilio.com")]
    pub base_url: String,

    /// Per-call timeout in seconds; every gateway call must settle
    #[arg(long, env = "GROUPCAST_TWILIO_TIMEOUT_SECS", default_value_t = 15)]
    pub timeout_secs: u64,
}

#[derive(Clone, Debug, Args)]
pub struct DispatchConfig {
    /// Dialing prefix applied to recipients that lack one
    #[arg(long, env = "GROUPCAST_COUNTRY_PREFIX", default_value = "+1")]
    pub country_prefix: String,

    /// Footer appended to every outbound message body
    #[arg(
        long,
        env = "GROUPCAST_MESSAGE_FOOTER",
        default_value = "\n\n - Groupcast — Send Group SMS (Demo)"
    )]
    pub footer: String,

    /// Maximum accepted message body length in characters
    #[arg(long, env = "GROUPCAST_MAX_BODY_LEN", default_value_t = 1600)]
    pub max_body_len: usize,
}

#[derive(Clone, Copy, Debug, Args)]
pub struct ExtractionConfig {
    /// Number of leading spreadsheet rows treated as headers
    #[arg(long, env = "GROUPCAST_HEADER_ROWS", default_value_t = 1)]
    pub header_rows: usize,

    /// Zero-based column index holding the recipient phone number
    #[arg(long, env = "GROUPCAST_RECIPIENT_COLUMN", default_value_t = 1)]
    pub recipient_column: usize,
}

#[derive(Clone, Copy, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "GROUPCAST_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    pub fn load() -> Self {
        Self::parse()
    }
}
