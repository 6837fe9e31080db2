//! Typed client for the device HTTP API.
mod device;
mod endpoint;
mod response;
mod task;


pub use device::DeviceClient;
pub use endpoint::{Endpoint, HttpMethod};
pub use response::{ApiResponse, pretty_json};
pub use task::{SENSOR_POST_TASK, TaskAction, TaskCommand};
