pub mod countries;
pub mod data;

pub use countries::CountryCodeTable;
pub use data::{IdentityRecord, RawMrzFields};
