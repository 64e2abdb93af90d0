use std::cmp::Ordering;

use crate::models::CountryCodeTable;

/// Minimum normalized edit similarity for accepting a fuzzy candidate.
/// Tolerates single-character OCR damage in a 3-letter code without
/// mapping to an unrelated country on weak evidence.
pub const MIN_MATCH_SCORE: f64 = 0.6;

pub struct NationalityResolver;

impl NationalityResolver {
    /// Resolve a document nationality code to a display name.
    ///
    /// Exact table lookup first; otherwise the best approximate match
    /// over the table's keys, accepted only at or above
    /// [`MIN_MATCH_SCORE`]. Anything weaker echoes the raw code back
    /// unchanged.
    pub fn resolve(table: &CountryCodeTable, code: &str) -> String {
        if let Some(name) = table.get(code) {
            return name.to_string();
        }

        let best = table
            .codes()
            .map(|candidate| (candidate, similarity(code, candidate)))
            .max_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(Ordering::Equal)
                    // Deterministic pick on tied scores.
                    .then_with(|| b.0.cmp(a.0))
            });

        match best {
            Some((candidate, score)) if score >= MIN_MATCH_SCORE => {
                log::debug!(
                    "fuzzy nationality match: {} -> {} (score {:.2})",
                    code,
                    candidate,
                    score
                );
                table.get(candidate).unwrap_or(code).to_string()
            }
            _ => code.to_string(),
        }
    }
}

/// Normalized edit similarity: 1.0 for equal strings, 0.0 for strings
/// with nothing in common.
fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + substitution);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
