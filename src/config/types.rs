use clap::ValueEnum;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::Endpoint;

/// Partial device configuration, forwarded verbatim as the `POST /config` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigPatch(Map<String, Value>);

impl ConfigPatch {
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// What to do with a patched config once the device has accepted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PersistAction {
    /// Write the running config to non-volatile storage
    Save,
    /// Drop the running changes and reload the stored config
    Discard,
}

impl PersistAction {
    #[must_use]
    pub const fn endpoint(self) -> Endpoint {
        match self {
            Self::Save => Endpoint::CONFIG_SAVE,
            Self::Discard => Endpoint::CONFIG_DISCARD,
        }
    }
}
