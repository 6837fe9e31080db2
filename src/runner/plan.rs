use std::time::Duration;

use crate::args::{DEFAULT_TASK_PAUSE_MS, TesterArgs};
use crate::config::{ConfigPatch, PersistAction};

/// The optional parts of the script. Status, read, config and metrics always
/// run.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub config_patch: Option<ConfigPatch>,
    pub persist: Option<PersistAction>,
    pub task_tests: bool,
    pub task_pause: Duration,
}

impl RunPlan {
    #[must_use]
    pub fn from_args(args: &TesterArgs, config_patch: Option<ConfigPatch>) -> Self {
        Self {
            config_patch,
            persist: args.persist,
            task_tests: args.task_tests,
            task_pause: args.task_pause(),
        }
    }
}

impl Default for RunPlan {
    fn default() -> Self {
        Self {
            config_patch: None,
            persist: None,
            task_tests: false,
            task_pause: Duration::from_millis(DEFAULT_TASK_PAUSE_MS),
        }
    }
}
