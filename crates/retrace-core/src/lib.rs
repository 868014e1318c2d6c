pub mod body;
pub mod curl;
pub mod error;
pub mod har;
pub mod metrics;
pub mod session;

pub use error::{Error, Result};
