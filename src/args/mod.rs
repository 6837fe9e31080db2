//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;


pub use cli::TesterArgs;
pub use defaults::{DEFAULT_BASE_URL, DEFAULT_TASK_PAUSE_MS, DEFAULT_TIMEOUT_SECS};

pub(crate) use defaults::DEFAULT_USER_AGENT;
