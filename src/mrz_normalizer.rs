use serde_json::{Map, Value};

use crate::models::{CountryCodeTable, IdentityRecord, RawMrzFields};
use crate::normalization::{
    DateNormalizer, DocumentNumberCorrector, EmptyFieldPruner, NameResolver, NationalityResolver,
};
use crate::utils::error::Result;

/// Pruned output mapping handed to form-filling callers. Carries no
/// null, empty-string, or empty-container values; may be empty.
pub type NormalizedRecord = Map<String, Value>;

pub struct MrzNormalizer;

impl MrzNormalizer {
    pub fn new() -> Self {
        MrzNormalizer
    }

    /// Run the full pipeline against the process-wide country table.
    ///
    /// The only possible failure is an unusable table resource.
    /// Malformed field content never errors; each stage degrades to a
    /// pass-through or an empty value.
    pub fn normalize(&self, raw: &RawMrzFields) -> Result<NormalizedRecord> {
        let table = CountryCodeTable::global()?;
        Ok(self.normalize_with_table(table, raw))
    }

    /// Same pipeline with a caller-managed table; infallible.
    ///
    /// The correction stages are pure and order-independent; only the
    /// pruning step has to run last.
    pub fn normalize_with_table(
        &self,
        table: &CountryCodeTable,
        raw: &RawMrzFields,
    ) -> NormalizedRecord {
        // Step 1: reconcile the two name lines
        let (surname, given_name) = NameResolver::resolve(&raw.names, &raw.surname);

        // Step 2: birth date into ISO form
        let dob = DateNormalizer::normalize(&raw.date_of_birth, true);

        // Step 3: undo OCR damage in the document number
        let passport_no = DocumentNumberCorrector::correct(&raw.number);

        // Step 4: nationality code to display name
        let nationality = NationalityResolver::resolve(table, &raw.nationality);

        let record = IdentityRecord {
            nationality: Some(nationality),
            surname: Some(surname),
            given_name: Some(given_name),
            sex: Some(raw.sex.clone()),
            dob,
            passport_no: Some(passport_no),
        };

        log::debug!("assembled record before pruning: {:?}", record);

        // Step 5: drop empty fields
        let assembled = serde_json::to_value(&record).unwrap_or(Value::Null);
        match EmptyFieldPruner::prune(assembled) {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

impl Default for MrzNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> CountryCodeTable {
        CountryCodeTable::from_entries(&[("NPL", "Nepal"), ("IND", "India")])
    }

    fn normalize(raw: RawMrzFields) -> NormalizedRecord {
        MrzNormalizer::new().normalize_with_table(&table(), &raw)
    }

    #[test]
    fn number_only_record_corrects_and_prunes() {
        let record = normalize(RawMrzFields {
            number: "AB1O2O45".to_string(),
            ..Default::default()
        });
        assert_eq!(Value::Object(record), json!({"passport_no": "AB102045"}));
    }

    #[test]
    fn all_empty_input_normalizes_to_empty_mapping() {
        let record = normalize(RawMrzFields::default());
        assert!(record.is_empty());
    }

    #[test]
    fn full_record_round_trip() {
        let record = normalize(RawMrzFields {
            names: "RAM<KUMAR".to_string(),
            surname: "SHRESTHA".to_string(),
            nationality: "NPI".to_string(),
            sex: "M".to_string(),
            date_of_birth: "150609".to_string(),
            number: "PA12345O".to_string(),
        });

        assert_eq!(
            Value::Object(record),
            json!({
                "nationality": "Nepal",
                "surname": "SHRESTHA",
                "given_name": "RAM KUMAR",
                "sex": "M",
                "dob": "2015-06-09",
                "passport_no": "PA123450",
            })
        );
    }

    #[test]
    fn surname_fallback_flows_through_the_pipeline() {
        let record = normalize(RawMrzFields {
            surname: "SHARMA".to_string(),
            ..Default::default()
        });
        // The surname output is empty and pruned; only the given name
        // survives.
        assert_eq!(Value::Object(record), json!({"given_name": "SHARMA"}));
    }

    #[test]
    fn unparseable_date_passes_through_unchanged() {
        let record = normalize(RawMrzFields {
            date_of_birth: "901335".to_string(),
            ..Default::default()
        });
        assert_eq!(Value::Object(record), json!({"dob": "901335"}));
    }

    #[test]
    fn normalization_is_stateless_across_calls() {
        let normalizer = MrzNormalizer::new();
        let raw = RawMrzFields {
            number: "AB1O2O45".to_string(),
            ..Default::default()
        };
        let first = normalizer.normalize_with_table(&table(), &raw);
        let second = normalizer.normalize_with_table(&table(), &raw);
        assert_eq!(first, second);
    }
}
