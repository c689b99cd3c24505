use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

pub const UNKNOWN: &str = "Unknown";

/// Top-level shape of `payloads.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayloadDocument {
    #[serde(default)]
    pub payloads: Option<Vec<PayloadRecord>>,
}

/// One entry of the payload catalog.
///
/// Only `contributor` is meaningful for every record; everything else is
/// optional and read through accessors that apply the documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PayloadRecord {
    #[serde(default)]
    pub contributor: String,
    #[serde(default)]
    pub github_username: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub date_added: Option<String>,

    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "payload")]
    pub code: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub difficulty: String,
}

impl PayloadRecord {
    pub fn new(contributor: &str) -> Self {
        PayloadRecord {
            contributor: contributor.to_string(),
            ..Default::default()
        }
    }

    pub fn with_date(mut self, date_added: &str) -> Self {
        self.date_added = Some(date_added.to_string());
        self
    }

    pub fn has_contributor(&self) -> bool {
        !self.contributor.is_empty()
    }

    /// GitHub handle, or the contributor name lowercased with whitespace removed.
    pub fn username(&self) -> String {
        match self.github_username.as_deref().map(str::trim) {
            Some(handle) if !handle.is_empty() => handle.to_string(),
            _ => normalize_handle(&self.contributor),
        }
    }

    pub fn country(&self) -> &str {
        non_empty(self.country.as_deref()).unwrap_or(UNKNOWN)
    }

    pub fn category(&self) -> Option<&str> {
        non_empty(self.category.as_deref())
    }

    pub fn date_added(&self) -> Option<&str> {
        non_empty(self.date_added.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn normalize_handle(name: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let re = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
    re.replace_all(name, "").to_lowercase()
}
