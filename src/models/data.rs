use serde::{Deserialize, Serialize};

/// Raw field mapping produced by the external OCR/MRZ reader.
///
/// No key is guaranteed present in the reader's output; absent keys
/// deserialize to the empty string and degrade gracefully downstream.
/// Values are carried exactly as read, filler characters included.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMrzFields {
    #[serde(default)]
    pub names: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub number: String,
}

/// Assembled identity record before pruning.
///
/// Correction stages record absent data as `None` or an empty string
/// rather than omitting fields, so the final pruning stage is the single
/// place the no-empty-values invariant is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IdentityRecord {
    pub nationality: Option<String>,
    pub surname: Option<String>,
    pub given_name: Option<String>,
    pub sex: Option<String>,
    pub dob: Option<String>,
    pub passport_no: Option<String>,
}
