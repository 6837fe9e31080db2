use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde_json::{Map, Value};

use crate::error::ClientError;

/// A fully read device response. Non-2xx statuses are kept as data; call
/// [`ApiResponse::error_for_status`] to turn them into an error.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
    url: String,
}

impl ApiResponse {
    pub(crate) async fn read(url: &str, response: reqwest::Response) -> Result<Self, ClientError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|err| ClientError::transport(url, err))?;
        Ok(Self {
            status,
            headers,
            body,
            url: url.to_owned(),
        })
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    /// Whether the device declared a JSON body.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type().is_some_and(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("application/json")
        })
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error when the body is not valid JSON.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Renders the body for display: pretty JSON with sorted keys when the
    /// response is JSON, the raw text otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error when the response declares JSON but the body does not
    /// parse.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        if self.is_json() {
            pretty_json(&self.json()?)
        } else {
            Ok(self.body.clone())
        }
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for any status outside 2xx.
    pub fn error_for_status(&self) -> Result<(), ClientError> {
        if self.status.is_success() {
            Ok(())
        } else {
            Err(ClientError::Status {
                status: self.status,
                url: self.url.clone(),
            })
        }
    }
}

/// Pretty-prints JSON with two-space indentation and keys sorted at every
/// level, regardless of how `serde_json` orders its maps.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn pretty_json(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&sorted(value))
}

fn sorted(value: &Value) -> Value {
    match value {
        Value::Object(fields) => {
            let mut entries: Vec<(&String, &Value)> = fields.iter().collect();
            entries.sort_by(|left, right| left.0.cmp(right.0));
            let map: Map<String, Value> = entries
                .into_iter()
                .map(|(key, inner)| (key.clone(), sorted(inner)))
                .collect();
            Value::Object(map)
        }
        Value::Array(items) => Value::Array(items.iter().map(sorted).collect()),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value.clone(),
    }
}

#[cfg(test)]
impl ApiResponse {
    pub(crate) fn from_parts(status: u16, content_type: Option<&str>, body: &str) -> Self {
        let mut headers = HeaderMap::new();
        if let Some(value) = content_type
            && let Ok(value) = reqwest::header::HeaderValue::from_str(value)
        {
            headers.insert(CONTENT_TYPE, value);
        }
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            headers,
            body: body.to_owned(),
            url: "http://device.test/".to_owned(),
        }
    }
}
