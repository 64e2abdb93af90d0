use lazy_static::lazy_static;
use regex::Regex;

use super::clean_field;

lazy_static! {
    // Trailing run of capital K characters appended to the given-name
    // field by some reader/format combinations.
    static ref TRAILING_K: Regex = Regex::new(r"K+$").unwrap();
}

pub struct NameResolver;

impl NameResolver {
    /// Resolve the two MRZ name lines into `(surname, given_name)`.
    ///
    /// When the `names` line carries a usable given name it is taken as
    /// such. Otherwise the surname line becomes the given name and the
    /// surname output stays empty, because some source documents only
    /// populate one of the two name lines.
    pub fn resolve(names: &str, surname: &str) -> (String, String) {
        let names = clean_field(names);
        let surname = clean_field(surname);

        let first_token_len = names
            .split_whitespace()
            .next()
            .map(|token| token.chars().count())
            .unwrap_or(0);

        if first_token_len > 1 {
            let given_name = TRAILING_K.replace(&names, "").trim_end().to_string();
            (surname, given_name)
        } else {
            // A one-character first token is a filler-collapse artifact,
            // not a given name.
            (String::new(), surname)
        }
    }
}
