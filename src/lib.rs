pub mod models;
pub mod mrz_normalizer;
pub mod normalization;
pub mod utils;

pub use mrz_normalizer::{MrzNormalizer, NormalizedRecord};
pub use utils::error::{NormalizeError, Result};
