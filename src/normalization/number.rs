use std::collections::HashMap;

use lazy_static::lazy_static;

use super::clean_field;

/// Leading characters of a document number assumed to be letters and
/// left uncorrected.
pub const PREFIX_LEN: usize = 2;

lazy_static! {
    // Single-character confusions for digit positions, covering the
    // glyph pairs this reader actually misreads. Applied exactly, never
    // fuzzily.
    static ref DIGIT_CONFUSIONS: HashMap<char, char> = {
        let mut m = HashMap::new();
        m.insert('O', '0');
        m.insert('Q', '0');
        m.insert('D', '0');
        m.insert('I', '1');
        m.insert('L', '1');
        m.insert('Z', '2');
        m.insert('S', '5');
        m.insert('B', '8');
        m.insert('G', '6');
        m
    };
}

pub struct DocumentNumberCorrector;

impl DocumentNumberCorrector {
    /// Clean a raw document number and undo OCR errors in its digit
    /// positions.
    ///
    /// The first two characters form the letter prefix and are kept as
    /// read; the remainder is assumed numeric and run through the
    /// confusion table. Non-alphanumeric leftovers are dropped from the
    /// combined result.
    pub fn correct(raw: &str) -> String {
        let number = clean_field(raw).to_uppercase();
        if number.is_empty() {
            return String::new();
        }

        number
            .chars()
            .enumerate()
            .map(|(position, c)| {
                if position < PREFIX_LEN {
                    c
                } else {
                    *DIGIT_CONFUSIONS.get(&c).unwrap_or(&c)
                }
            })
            .filter(|c| c.is_ascii_alphanumeric())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrects_confused_digits_in_suffix() {
        assert_eq!(DocumentNumberCorrector::correct("AB1O2O45"), "AB102045");
    }

    #[test]
    fn prefix_letters_are_left_as_read() {
        // S and B would be digit corrections anywhere else.
        assert_eq!(DocumentNumberCorrector::correct("SB1S3456"), "SB153456");
    }

    #[test]
    fn strips_filler_and_uppercases() {
        assert_eq!(DocumentNumberCorrector::correct("pa12345o<<<"), "PA123450");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(DocumentNumberCorrector::correct(""), "");
        assert_eq!(DocumentNumberCorrector::correct("<<<<<<<<"), "");
    }

    #[test]
    fn confusion_table_image_is_outside_its_domain() {
        // The correction only maps letters to digits, so its output can
        // never be corrected again. This is what makes `correct`
        // idempotent.
        for replacement in DIGIT_CONFUSIONS.values() {
            assert!(!DIGIT_CONFUSIONS.contains_key(replacement));
        }
    }

    #[test]
    fn correction_is_idempotent() {
        for raw in ["AB1O2O45", "PA<<OQD12", "X", "", "S5SSS5", "A-B12S", "ab<oq"] {
            let once = DocumentNumberCorrector::correct(raw);
            assert_eq!(DocumentNumberCorrector::correct(&once), once);
        }
    }
}
