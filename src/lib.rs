//! Contributor and payload aggregation for the XSSNow payload catalog.
//!
//! Records flow from the YAML data source through [`contributors::aggregate`],
//! [`contributors::rank`] / [`contributors::period_view`] and finally
//! [`pagination`] for display.

pub mod commands;
pub mod contributors;
pub mod dates;
pub mod display;
pub mod error;
pub mod pagination;
pub mod payloads;

pub use error::DataSourceError;
