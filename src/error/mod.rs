mod app_error;
mod host_error;

pub use app_error::{AppError, AppResult};
pub use host_error::HostError;
