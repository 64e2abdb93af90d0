pub mod error;

pub use error::{NormalizeError, Result};
