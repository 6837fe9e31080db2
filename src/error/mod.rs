mod app;
mod client;
mod config;
mod step;

pub use app::{AppError, AppResult};
pub use client::{ClientError, TransportKind};
pub use config::ConfigError;
pub use step::StepError;
