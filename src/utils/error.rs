use thiserror::Error;

/// Errors surfaced by the normalization pipeline.
///
/// Malformed MRZ field content is never an error here: every correction
/// stage degrades to a pass-through or an empty value. The only hard
/// failures are a missing or unparsable country code table, which signal
/// a deployment defect rather than a data problem.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("country code table unreadable: {0}")]
    TableIo(#[from] std::io::Error),

    #[error("country code table malformed: {0}")]
    TableFormat(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
