pub mod error;
pub mod input;
pub mod report;

pub use error::{DwStatusError, Result};
