pub mod error;
pub mod models;

pub use error::{ErrorCode, ErrorMessage};
pub use models::*;
