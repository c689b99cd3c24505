use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use log::debug;

use crate::contributors::types::ContributorAggregate;
use crate::dates;
use crate::payloads::{PayloadRecord, UNKNOWN};

const SPECIALTY_LIMIT: usize = 3;

/// Running totals for one contributor while a pass is in progress.
struct ContributorTally {
    name: String,
    username: String,
    payloads_contributed: u32,
    last_contribution: String,
    join_date: String,
    location: String,
    categories: Vec<String>,
    tags: HashSet<String>,
}

impl ContributorTally {
    /// The join date is the first record's raw date and never changes.
    fn new(record: &PayloadRecord) -> Self {
        let seed = record.date_added().unwrap_or(UNKNOWN).to_string();
        ContributorTally {
            name: record.contributor.clone(),
            username: record.username(),
            payloads_contributed: 0,
            last_contribution: seed.clone(),
            join_date: seed,
            location: record.country().to_string(),
            categories: Vec::new(),
            tags: HashSet::new(),
        }
    }

    fn update(&mut self, record: &PayloadRecord) {
        self.payloads_contributed += 1;

        if self.location == UNKNOWN {
            self.location = record.country().to_string();
        }

        if let Some(category) = record.category() {
            if !self.categories.iter().any(|c| c == category) {
                self.categories.push(category.to_string());
            }
        }
        self.tags.extend(record.tags.iter().cloned());

        if let (Some(raw), Some(added)) = (record.date_added(), dates::parse_opt(record.date_added())) {
            if replaces(dates::parse(&self.last_contribution), added, |new, old| new > old) {
                self.last_contribution = raw.to_string();
            }
        }
    }

    fn finish(mut self) -> ContributorAggregate {
        debug!(
            "{}: {} payloads, {} categories, {} tags",
            self.name,
            self.payloads_contributed,
            self.categories.len(),
            self.tags.len()
        );
        self.categories.truncate(SPECIALTY_LIMIT);
        ContributorAggregate {
            name: self.name,
            username: self.username,
            payloads_contributed: self.payloads_contributed,
            last_contribution: self.last_contribution,
            join_date: self.join_date,
            location: self.location,
            specialties: self.categories,
        }
    }
}

fn replaces(stored: Option<NaiveDate>, candidate: NaiveDate, better: impl Fn(NaiveDate, NaiveDate) -> bool) -> bool {
    match stored {
        Some(stored) => better(candidate, stored),
        None => true,
    }
}

/// Group payload records by exact contributor name.
///
/// Records with an empty contributor are skipped. The result keeps the order
/// in which contributors first appear; use [`rank`](super::rank) to sort.
pub fn aggregate(records: &[PayloadRecord]) -> Vec<ContributorAggregate> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<ContributorTally> = Vec::new();

    for record in records.iter().filter(|r| r.has_contributor()) {
        let slot = *index.entry(record.contributor.as_str()).or_insert_with(|| {
            tallies.push(ContributorTally::new(record));
            tallies.len() - 1
        });
        tallies[slot].update(record);
    }

    debug!("aggregated {} records into {} contributors", records.len(), tallies.len());
    tallies.into_iter().map(ContributorTally::finish).collect()
}
