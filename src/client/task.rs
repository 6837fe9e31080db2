use serde::Serialize;
use std::fmt;

/// The only device task the smoke test drives.
pub const SENSOR_POST_TASK: &str = "SensorPostTask";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskAction {
    Suspend,
    Resume,
    Restart,
}

impl TaskAction {
    /// Order matters: resume must follow suspend so the task is left running.
    pub const ALL: [Self; 3] = [Self::Suspend, Self::Resume, Self::Restart];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Suspend => "suspend",
            Self::Resume => "resume",
            Self::Restart => "restart",
        }
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /task`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskCommand {
    pub name: &'static str,
    pub action: TaskAction,
}

impl TaskCommand {
    #[must_use]
    pub const fn sensor_post(action: TaskAction) -> Self {
        Self {
            name: SENSOR_POST_TASK,
            action,
        }
    }
}

impl fmt::Display for TaskCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{name:{}, action:{}}}", self.name, self.action)
    }
}
