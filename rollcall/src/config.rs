use std::path::PathBuf;
use std::time::Duration;

use rollcall_client::ClientConfig;

/// Rollcall 配置，从环境变量读取
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL
    pub api_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Where the login session is persisted
    pub session_file: PathBuf,
    /// Search quiescence window
    pub debounce: Duration,
    /// Daily-rolling log files go here when set
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
            session_file: PathBuf::from(".rollcall/session.json"),
            debounce: Duration::from_millis(300),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Read `ROLLCALL_*` variables. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: var("ROLLCALL_API_URL").unwrap_or(defaults.api_url),
            timeout_secs: var("ROLLCALL_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            session_file: var("ROLLCALL_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_file),
            debounce: var("ROLLCALL_DEBOUNCE_MS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.debounce),
            log_dir: var("ROLLCALL_LOG_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url).with_timeout(self.timeout_secs)
    }
}
