use crate::client::{Endpoint, TaskCommand};

/// One reported call: what the header line shows and how a failure is named.
#[derive(Debug, Clone)]
pub struct Step {
    endpoint: Endpoint,
    detail: Option<String>,
    label: String,
}

impl Step {
    #[must_use]
    pub fn plain(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            detail: None,
            label: endpoint.label.to_owned(),
        }
    }

    #[must_use]
    pub fn config_patch() -> Self {
        Self {
            detail: Some("(patch)".to_owned()),
            ..Self::plain(Endpoint::CONFIG_POST)
        }
    }

    #[must_use]
    pub fn task(command: TaskCommand) -> Self {
        Self {
            endpoint: Endpoint::TASK_POST,
            detail: Some(command.to_string()),
            label: format!("{} {}", Endpoint::TASK_POST.label, command.action),
        }
    }

    #[must_use]
    pub const fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn header(&self) -> String {
        let mut header = format!("{} {}", self.endpoint.method, self.endpoint.path);
        if let Some(detail) = self.detail.as_deref() {
            header.push(' ');
            header.push_str(detail);
        }
        header
    }
}
