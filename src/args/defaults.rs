pub const DEFAULT_BASE_URL: &str = "http://esp.local";
pub const DEFAULT_TIMEOUT_SECS: &str = "5.0";
/// Gives the device task time to settle after suspend before resume arrives.
pub const DEFAULT_TASK_PAUSE_MS: u64 = 500;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("espcheck/", env!("CARGO_PKG_VERSION"));
