//! Config patch sources and the follow-up action applied on the device.
mod loader;
mod types;


pub use loader::{PatchSource, load_patch};
pub use types::{ConfigPatch, PersistAction};
