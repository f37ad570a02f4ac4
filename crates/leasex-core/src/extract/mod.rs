//! Lease field extraction module.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, LeaseParser};
pub use rules::{extract_amounts, extract_dates, extract_tenant, property_label, FieldExtractor};
