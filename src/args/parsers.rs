use std::time::Duration;

/// Parses a timeout given in (possibly fractional) seconds.
pub(crate) fn parse_timeout_secs(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|err| format!("invalid timeout '{}': {}", s, err))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("timeout must be > 0 seconds, got '{}'", s));
    }
    Duration::try_from_secs_f64(secs).map_err(|err| format!("invalid timeout '{}': {}", s, err))
}
