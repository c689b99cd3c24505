use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, warn};

use crate::dates::{days_before, format_day_month_year};
use crate::error::DataSourceError;
use crate::payloads::types::{PayloadDocument, PayloadRecord};

/// Where the records of a [`Dataset`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataOrigin {
    File(PathBuf),
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<PayloadRecord>,
    pub origin: DataOrigin,
}

impl Dataset {
    pub fn is_fallback(&self) -> bool {
        self.origin == DataOrigin::Fallback
    }
}

/// Read and validate a payload YAML file.
pub fn load_payloads(path: &Path) -> Result<Vec<PayloadRecord>, DataSourceError> {
    let text = fs::read_to_string(path).map_err(|source| DataSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_payloads(path, &text)
}

fn parse_payloads(path: &Path, text: &str) -> Result<Vec<PayloadRecord>, DataSourceError> {
    if text.trim().is_empty() {
        return Err(DataSourceError::Empty(path.to_path_buf()));
    }

    let document: PayloadDocument = serde_yaml::from_str(text).map_err(|source| DataSourceError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;

    match document.payloads {
        Some(payloads) if !payloads.is_empty() => Ok(payloads),
        _ => Err(DataSourceError::MissingPayloads(path.to_path_buf())),
    }
}

/// Load `path`, substituting the built-in dataset on any failure.
pub fn load_or_fallback(path: &Path, today: NaiveDate) -> Dataset {
    match load_payloads(path) {
        Ok(records) => {
            debug!("loaded {} payload records from {}", records.len(), path.display());
            Dataset {
                records,
                origin: DataOrigin::File(path.to_path_buf()),
            }
        }
        Err(err) => {
            warn!("{err}; using built-in payload data");
            Dataset {
                records: fallback_records(today),
                origin: DataOrigin::Fallback,
            }
        }
    }
}

/// Small fixed dataset dated relative to `today`.
pub fn fallback_records(today: NaiveDate) -> Vec<PayloadRecord> {
    let days_ago = |n: u64| format_day_month_year(days_before(today, n));

    let sid = |category: &str, tags: &[&str], date: String| PayloadRecord {
        contributor: "Sid Joshi".to_string(),
        github_username: Some("dr34mhacks".to_string()),
        country: Some("India".to_string()),
        category: Some(category.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        date_added: Some(date),
        ..Default::default()
    };
    let sandeep = |category: &str, tags: &[&str], date: String| PayloadRecord {
        contributor: "Sandeep Wawdane".to_string(),
        github_username: Some("thecybersandeep".to_string()),
        country: Some("India".to_string()),
        category: Some(category.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        date_added: Some(date),
        ..Default::default()
    };

    vec![
        sid("basic", &["alert", "basic", "script"], days_ago(0)),
        sandeep("advanced", &["bypass", "encoding"], days_ago(1)),
        sid("basic", &["research", "payloads"], days_ago(7)),
        sandeep("advanced", &["waf-bypass", "obfuscation"], days_ago(14)),
        sid("advanced", &["dom-xss", "research"], days_ago(0)),
        sandeep("advanced", &["security", "research"], days_ago(7)),
    ]
}
