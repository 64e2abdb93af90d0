pub mod dates;
pub mod names;
pub mod nationality;
pub mod number;
pub mod pruning;

pub use dates::DateNormalizer;
pub use names::NameResolver;
pub use nationality::NationalityResolver;
pub use number::DocumentNumberCorrector;
pub use pruning::EmptyFieldPruner;

/// Replace MRZ filler characters with spaces and strip surrounding
/// whitespace. Runs of filler inside a field stay as the spaces they
/// become.
pub(crate) fn clean_field(raw: &str) -> String {
    raw.replace('<', " ").trim().to_string()
}
