use std::process::ExitCode;

/// Outcome of a full run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: usize,
    pub failures: usize,
}

impl RunSummary {
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.failures == 0
    }

    #[must_use]
    pub fn message(&self) -> String {
        if self.passed() {
            "All checks passed.".to_owned()
        } else {
            format!("Completed with {} failure(s).", self.failures)
        }
    }

    /// `0` when every step passed, `1` otherwise.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.passed() { 0 } else { 1 }
    }
}

impl From<RunSummary> for ExitCode {
    fn from(summary: RunSummary) -> Self {
        Self::from(summary.exit_code())
    }
}
