use std::fmt;

const ACCEPT_JSON: &str = "application/json";
const ACCEPT_TEXT: &str = "text/plain";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }

    pub(crate) const fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed device endpoint: method, path, the representation asked for in
/// `Accept`, and the label used when reporting a failed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
    pub accept: &'static str,
    pub label: &'static str,
}

impl Endpoint {
    pub const STATUS: Self = Self::get("/status", ACCEPT_JSON, "/status");
    pub const READ: Self = Self::get("/read", ACCEPT_JSON, "/read");
    pub const CONFIG_GET: Self = Self::get("/config", ACCEPT_JSON, "/config (GET)");
    pub const METRICS: Self = Self::get("/metrics", ACCEPT_TEXT, "/metrics");
    pub const CONFIG_POST: Self = Self::post("/config", "/config (POST)");
    pub const TASK_POST: Self = Self::post("/task", "/task");
    pub const CONFIG_SAVE: Self = Self::post("/config/save", "/config/save");
    pub const CONFIG_DISCARD: Self = Self::post("/config/discard", "/config/discard");

    const fn get(path: &'static str, accept: &'static str, label: &'static str) -> Self {
        Self {
            method: HttpMethod::Get,
            path,
            accept,
            label,
        }
    }

    const fn post(path: &'static str, label: &'static str) -> Self {
        Self {
            method: HttpMethod::Post,
            path,
            accept: ACCEPT_JSON,
            label,
        }
    }

    /// Metrics are a plaintext exposition and never rendered as JSON.
    #[must_use]
    pub fn expects_text(&self) -> bool {
        self.accept == ACCEPT_TEXT
    }
}
