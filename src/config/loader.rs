use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigPatch;

/// Where a config patch comes from. The CLI guarantees at most one source.
#[derive(Debug, Clone, Copy)]
pub enum PatchSource<'src> {
    File(&'src Path),
    Inline(&'src str),
}

impl<'src> PatchSource<'src> {
    #[must_use]
    pub fn from_args(config_json: Option<&'src str>, config_inline: Option<&'src str>) -> Option<Self> {
        config_json
            .map(|path| Self::File(Path::new(path)))
            .or_else(|| config_inline.map(Self::Inline))
    }
}

/// Loads and validates a config patch.
///
/// Returns `Ok(None)` when no source was given or the patch is an empty
/// object, since there is nothing to send.
///
/// # Errors
///
/// Returns an error when the file cannot be read, the JSON is malformed, or
/// the document is not a JSON object.
pub fn load_patch(source: Option<PatchSource<'_>>) -> AppResult<Option<ConfigPatch>> {
    let value = match source {
        None => return Ok(None),
        Some(PatchSource::File(path)) => read_patch_file(path)?,
        Some(PatchSource::Inline(text)) => serde_json::from_str(text)
            .map_err(|err| AppError::config(ConfigError::ParseInline { source: err }))?,
    };

    let patch = into_patch(value)?;
    if patch.is_empty() {
        tracing::warn!("Config patch is empty, skipping POST /config");
        return Ok(None);
    }
    tracing::debug!(fields = patch.len(), "Config patch loaded");
    Ok(Some(patch))
}

fn read_patch_file(path: &Path) -> AppResult<Value> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadPatch {
            path: PathBuf::from(path),
            source: err,
        })
    })?;
    serde_json::from_str(&content).map_err(|err| {
        AppError::config(ConfigError::ParseFile {
            path: PathBuf::from(path),
            source: err,
        })
    })
}

fn into_patch(value: Value) -> AppResult<ConfigPatch> {
    match value {
        Value::Object(fields) => Ok(ConfigPatch::new(fields)),
        Value::Null => Err(not_an_object("null")),
        Value::Bool(_) => Err(not_an_object("a boolean")),
        Value::Number(_) => Err(not_an_object("a number")),
        Value::String(_) => Err(not_an_object("a string")),
        Value::Array(_) => Err(not_an_object("an array")),
    }
}

const fn not_an_object(found: &'static str) -> AppError {
    AppError::Config(ConfigError::NotAnObject { found })
}
