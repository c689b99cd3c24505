use clap::ValueEnum;

use crate::pagination::{paginate, Page, DEFAULT_PAGE_SIZE};
use crate::payloads::types::PayloadRecord;

/// Quick filters offered above the payload grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PayloadFilter {
    #[default]
    All,
    Basic,
    Advanced,
    Bypass,
    Polyglot,
    // Reachable only through category cards.
    #[value(skip)]
    Csp,
    #[value(skip)]
    Waf,
}

impl PayloadFilter {
    /// Filter selected by clicking a category card.
    pub fn for_category(category: &str) -> Self {
        match category {
            "reflected" => PayloadFilter::Basic,
            "stored" | "dom" => PayloadFilter::Advanced,
            "csp" => PayloadFilter::Csp,
            "waf" => PayloadFilter::Waf,
            "polyglot" => PayloadFilter::Polyglot,
            _ => PayloadFilter::All,
        }
    }

    pub fn matches(self, record: &PayloadRecord) -> bool {
        let has_tag = |tag: &str| record.tags.iter().any(|t| t == tag);
        match self {
            PayloadFilter::Basic => record.difficulty == "Basic",
            PayloadFilter::Advanced => matches!(record.difficulty.as_str(), "Advanced" | "Expert"),
            PayloadFilter::Bypass => has_tag("bypass") || has_tag("waf"),
            PayloadFilter::Polyglot => has_tag("polyglot"),
            // No dedicated rule for these; the grid shows everything.
            PayloadFilter::All | PayloadFilter::Csp | PayloadFilter::Waf => true,
        }
    }
}

/// Case-insensitive substring match across the searchable payload fields.
pub fn matches_query(record: &PayloadRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    let contains = |field: &str| field.to_lowercase().contains(&query);

    contains(&record.name)
        || contains(&record.description)
        || contains(&record.code)
        || record.tags.iter().any(|tag| contains(tag))
        || contains(&record.context)
}

/// Search/filter state of the payload grid with "load more" paging.
#[derive(Debug, Clone)]
pub struct PayloadBrowser {
    records: Vec<PayloadRecord>,
    filtered: Vec<usize>,
    query: String,
    filter: PayloadFilter,
    page: usize,
    page_size: usize,
}

impl PayloadBrowser {
    pub fn new(records: Vec<PayloadRecord>) -> Self {
        Self::with_page_size(records, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(records: Vec<PayloadRecord>, page_size: usize) -> Self {
        let mut browser = PayloadBrowser {
            records,
            filtered: Vec::new(),
            query: String::new(),
            filter: PayloadFilter::All,
            page: 1,
            page_size: page_size.max(1),
        };
        browser.refilter();
        browser
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.refilter();
    }

    pub fn set_filter(&mut self, filter: PayloadFilter) {
        self.filter = filter;
        self.refilter();
    }

    pub fn select_category(&mut self, category: &str) {
        self.set_filter(PayloadFilter::for_category(category));
    }

    pub fn load_more(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Jump straight to `pages` cumulative pages, as if "load more" had been
    /// pressed `pages - 1` times.
    pub fn reveal(&mut self, pages: usize) {
        self.page = pages.max(1);
    }

    pub fn page_number(&self) -> usize {
        self.page
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Records currently revealed, in catalog order.
    pub fn visible(&self) -> Vec<&PayloadRecord> {
        let page = paginate(&self.filtered, self.page_size, self.page);
        page.items.iter().map(|&i| &self.records[i]).collect()
    }

    pub fn page(&self) -> Page<'_, usize> {
        paginate(&self.filtered, self.page_size, self.page)
    }

    pub fn results_summary(&self) -> String {
        let page = self.page();
        format!("Showing {} of {} payloads", page.shown(), page.total)
    }

    fn refilter(&mut self) {
        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| matches_query(record, &self.query) && self.filter.matches(record))
            .map(|(i, _)| i)
            .collect();
        self.page = 1;
    }
}
