/// Two-digit birth years below this cutoff resolve to 20xx, the rest to
/// 19xx. Tuned to the issuing era of the documents this pipeline sees;
/// preserved as-is rather than re-derived.
pub const BIRTH_CENTURY_CUTOFF: u32 = 30;

pub struct DateNormalizer;

impl DateNormalizer {
    /// Normalize a six-digit `YYMMDD` MRZ date into `YYYY-MM-DD`.
    ///
    /// Anything that is not exactly six characters yields `None`.
    /// Content of the right length that is non-numeric or fails the
    /// month/day range checks comes back unchanged, so the caller can
    /// surface it for manual inspection instead of losing it.
    pub fn normalize(raw: &str, is_birth: bool) -> Option<String> {
        if raw.chars().count() != 6 {
            return None;
        }

        let (year, month, day) = match parse_components(raw) {
            Some(components) => components,
            None => return Some(raw.to_string()),
        };

        let year = if is_birth {
            if year < BIRTH_CENTURY_CUTOFF {
                2000 + year
            } else {
                1900 + year
            }
        } else {
            // Expiry-style dates always land in the current century.
            2000 + year
        };

        // Flat bounds, not calendar validation; out-of-range dates pass
        // through for manual inspection.
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Some(raw.to_string());
        }

        Some(format!("{}-{:02}-{:02}", year, month, day))
    }
}

fn parse_components(raw: &str) -> Option<(u32, u32, u32)> {
    let year = raw.get(0..2)?.parse().ok()?;
    let month = raw.get(2..4)?.parse().ok()?;
    let day = raw.get(4..6)?.parse().ok()?;
    Some((year, month, day))
}
