//! Core library for the `espcheck` CLI.
//!
//! `espcheck` smoke-tests the HTTP API of the ESP32 temperature & humidity
//! poster: it calls `/status`, `/read`, `/config` and `/metrics`, optionally
//! posts a config patch and drives `SensorPostTask` through
//! suspend/resume/restart, printing each response and a pass/fail verdict.
pub mod args;
pub mod client;
pub mod config;
pub mod entry;
pub mod error;
pub mod logger;
pub mod runner;

#[cfg(test)]
mod test_support;
