pub mod domain;
pub mod error;
pub mod filter;

pub use domain::{Country, NameField};
pub use filter::{apply_filters, distinct_regions, CurrencyCategory, FilterCriteria};
