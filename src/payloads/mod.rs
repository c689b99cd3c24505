mod types;
mod loader;
mod catalog;

pub use catalog::{matches_query, PayloadBrowser, PayloadFilter};
pub use loader::{fallback_records, load_or_fallback, load_payloads, DataOrigin, Dataset};
pub use types::{PayloadDocument, PayloadRecord, UNKNOWN};
