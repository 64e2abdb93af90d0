use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use once_cell::sync::OnceCell;

use crate::utils::error::Result;

/// Environment variable overriding the default table location.
pub const NATIONALITY_MAP_ENV: &str = "NATIONALITY_MAP";

/// Default table resource, resolved against the working directory.
pub const DEFAULT_NATIONALITY_MAP: &str = "nationality_map.json";

static COUNTRY_TABLE: OnceCell<CountryCodeTable> = OnceCell::new();

/// Static mapping from 3-letter document country/nationality codes to
/// display names. Loaded once per process and immutable afterwards, so
/// concurrent callers can read it without locking.
#[derive(Debug, Clone)]
pub struct CountryCodeTable {
    entries: HashMap<String, String>,
}

impl CountryCodeTable {
    /// Load the table from a flat JSON object of code -> name pairs.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let entries: HashMap<String, String> = serde_json::from_reader(BufReader::new(file))?;
        log::debug!(
            "loaded {} country codes from {}",
            entries.len(),
            path.as_ref().display()
        );
        Ok(CountryCodeTable { entries })
    }

    /// Build a table from in-memory pairs, for callers that manage the
    /// resource themselves.
    pub fn from_entries(entries: &[(&str, &str)]) -> Self {
        CountryCodeTable {
            entries: entries
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        }
    }

    /// Process-wide table, initialized at most once. An unreadable or
    /// missing resource is a deployment defect and is surfaced to the
    /// caller instead of being recovered here; retrying is the caller's
    /// decision.
    pub fn global() -> Result<&'static CountryCodeTable> {
        COUNTRY_TABLE.get_or_try_init(|| {
            let path = std::env::var(NATIONALITY_MAP_ENV)
                .unwrap_or_else(|_| DEFAULT_NATIONALITY_MAP.to_string());
            Self::from_path(path)
        })
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_flat_json_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"NPL": "Nepal", "IND": "India"}}"#).unwrap();

        let table = CountryCodeTable::from_path(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("NPL"), Some("Nepal"));
        assert_eq!(table.get("FRA"), None);
    }

    #[test]
    fn missing_resource_is_an_error() {
        let result = CountryCodeTable::from_path("no/such/table.json");
        assert!(result.is_err());
    }

    #[test]
    fn malformed_resource_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        assert!(CountryCodeTable::from_path(file.path()).is_err());
    }

    #[test]
    fn global_table_loads_shipped_resource() {
        // cargo runs tests from the package root, where the default
        // resource lives.
        let table = CountryCodeTable::global().unwrap();
        assert_eq!(table.get("NPL"), Some("Nepal"));
    }
}
