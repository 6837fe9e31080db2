use clap::{ArgGroup, Parser};
use std::time::Duration;

use crate::config::PersistAction;

use super::defaults::{DEFAULT_BASE_URL, DEFAULT_TASK_PAUSE_MS, DEFAULT_TIMEOUT_SECS};
use super::parsers::parse_timeout_secs;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Quick smoke tester for the ESP32 temperature & humidity poster HTTP API."
)]
#[command(group(
    ArgGroup::new("patch_source")
        .args(["config_json", "config_inline"])
        .multiple(false)
))]
pub struct TesterArgs {
    /// Base URL of the device (e.g., http://192.168.10.42)
    #[arg(long = "base-url", env = "ESPCHECK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP API key sent as a Bearer token in the Authorization header
    #[arg(long = "api-key", env = "ESPCHECK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds (fractions allowed)
    #[arg(
        long = "timeout",
        env = "ESPCHECK_TIMEOUT",
        default_value = DEFAULT_TIMEOUT_SECS,
        value_parser = parse_timeout_secs
    )]
    pub timeout: Duration,

    /// Also exercise /task suspend/resume/restart for SensorPostTask
    #[arg(long = "task-tests")]
    pub task_tests: bool,

    /// Pause between task actions in milliseconds
    #[arg(long = "task-pause-ms", default_value_t = DEFAULT_TASK_PAUSE_MS)]
    pub task_pause_ms: u64,

    /// Path to a JSON file to POST to /config (partial patch)
    #[arg(long = "config-json")]
    pub config_json: Option<String>,

    /// Inline JSON to POST to /config (partial patch)
    #[arg(long = "config-inline")]
    pub config_inline: Option<String>,

    /// Save or discard the patched config on the device after POST /config
    #[arg(long = "persist", value_enum, requires = "patch_source")]
    pub persist: Option<PersistAction>,

    /// Enable debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl TesterArgs {
    #[must_use]
    pub const fn task_pause(&self) -> Duration {
        Duration::from_millis(self.task_pause_ms)
    }
}
