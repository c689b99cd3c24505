use std::io::Write;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use tempfile::NamedTempFile;

use xssnow::contributors::{
    aggregate, period_view, rank, top_contributors, CommunityStats, LeaderboardScope, LeaderboardView, Period,
};
use xssnow::dates::{self, format_day_month_year};
use xssnow::pagination::{paginate, tier, ELITE_TIER, RISING_STARS};
use xssnow::payloads::{load_or_fallback, PayloadBrowser, PayloadFilter, PayloadRecord};

const CATALOG: &str = r#"
payloads:
  - name: SVG onload
    payload: "<svg onload=alert(1)>"
    difficulty: Basic
    context: html
    tags: [svg, events]
    category: basic
    contributor: Sid Joshi
    github_username: dr34mhacks
    country: India
    date_added: 01-01-2024
  - name: Cloudflare bypass
    payload: "<a href=javas&#99;ript:alert(1)>x</a>"
    difficulty: Expert
    tags: [bypass, waf]
    category: waf
    contributor: Sandeep Wawdane
    country: India
    date_added: 2024-01-02
  - name: Polyglot
    payload: "jaVasCript:/*-/*`/*\\`/*'/*\"/**/(/* */oNcliCk=alert() )//"
    difficulty: Advanced
    tags: [polyglot]
    category: polyglot
    contributor: Sid Joshi
    github_username: dr34mhacks
    date_added: 03/01/2024
  - name: Anonymous entry
    payload: "<img src=x onerror=alert(1)>"
"#;

fn catalog_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();
    file
}

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 20).unwrap().and_hms_opt(10, 0, 0).unwrap()
}

#[test]
fn yaml_catalog_to_ranked_contributors() {
    let file = catalog_file();
    let dataset = load_or_fallback(file.path(), reference().date());
    assert!(!dataset.is_fallback());
    assert_eq!(dataset.records.len(), 4);

    let contributors = aggregate(&dataset.records);
    let total: u32 = contributors.iter().map(|c| c.payloads_contributed).sum();
    assert_eq!(total, 3);

    let ranked = rank(contributors);
    assert_eq!(ranked[0].name, "Sid Joshi");
    assert_eq!(ranked[0].username, "dr34mhacks");
    assert_eq!(ranked[0].last_contribution, "03/01/2024");
    assert_eq!(ranked[0].specialties, ["basic", "polyglot"].map(String::from).to_vec());
    assert_eq!(ranked[1].username, "sandeepwawdane");

    let stats = CommunityStats::from_contributors(&ranked);
    assert_eq!((stats.contributors, stats.payloads, stats.countries), (2, 3, 1));
}

#[test]
fn window_filter_boundaries() {
    let reference = reference();
    let on_edge = format_day_month_year(reference.date() - Duration::days(30));
    let too_old = format_day_month_year(reference.date() - Duration::days(31));
    let records = vec![
        PayloadRecord::new("edge").with_date(&on_edge),
        PayloadRecord::new("old").with_date(&too_old),
    ];

    let contributors = aggregate(&records);
    let view = period_view(&contributors, Period::Window(30), reference);
    let names: Vec<&str> = view.contributors().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["edge"]);
}

#[test]
fn empty_catalog_signals_empty_states() {
    let contributors = aggregate(&[]);
    assert!(contributors.is_empty());
    assert_eq!(period_view(&contributors, Period::AllTime, reference()), LeaderboardView::NoContributors);
    assert!(paginate(&contributors, 12, 1).is_empty());
    assert!(top_contributors(&[], reference()).is_empty());
}

#[test]
fn month_toggle_does_not_disturb_all_time() {
    let file = catalog_file();
    let dataset = load_or_fallback(file.path(), reference().date());
    let contributors = aggregate(&dataset.records);

    let month = period_view(&contributors, Period::this_month(), reference());
    let all_time = period_view(&contributors, Period::AllTime, reference());
    let month_again = period_view(&contributors, Period::this_month(), reference());

    assert_eq!(month, month_again);
    assert_eq!(all_time.contributors().len(), 2);
    assert_eq!(contributors.len(), 2);
}

#[test]
fn fallback_dataset_feeds_the_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let today = reference().date();
    let dataset = load_or_fallback(&dir.path().join("missing.yaml"), today);
    assert!(dataset.is_fallback());

    let ranked = rank(aggregate(&dataset.records));
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].name, "Sid Joshi");
    assert_eq!(ranked[0].payloads_contributed, 3);
    assert_eq!(ranked[0].last_contribution_date(), Some(today));
    assert_eq!(ranked[1].last_contribution_date(), Some(today - Duration::days(1)));

    let board = top_contributors(&dataset.records, reference());
    assert_eq!(board.scope, LeaderboardScope::Recent);
}

#[test]
fn browser_over_loaded_catalog() {
    let file = catalog_file();
    let dataset = load_or_fallback(file.path(), reference().date());
    let mut browser = PayloadBrowser::with_page_size(dataset.records, 2);

    assert_eq!(browser.visible().len(), 2);
    assert!(browser.page().has_more);

    browser.set_filter(PayloadFilter::Bypass);
    let names: Vec<&str> = browser.visible().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Cloudflare bypass"]);

    browser.set_filter(PayloadFilter::All);
    browser.set_query("ONERROR");
    assert_eq!(browser.results_summary(), "Showing 1 of 1 payloads");
}

#[test]
fn tiers_over_ranked_list() {
    let records: Vec<PayloadRecord> = (0..12)
        .flat_map(|i| std::iter::repeat(PayloadRecord::new(&format!("c{i:02}"))).take(12 - i))
        .collect();
    let ranked = rank(aggregate(&records));

    let elite: Vec<&str> = tier(&ranked, ELITE_TIER).iter().map(|c| c.name.as_str()).collect();
    assert_eq!(elite, vec!["c00", "c01", "c02"]);
    assert_eq!(tier(&ranked, RISING_STARS).len(), 7);
    assert_eq!(tier(&ranked, RISING_STARS)[0].name, "c03");
}

#[test]
fn documented_date_equivalence() {
    let expected = NaiveDate::from_ymd_opt(2024, 3, 5);
    for input in ["2024-03-05", "05-03-2024", "05/03/2024"] {
        assert_eq!(dates::parse(input), expected, "{input}");
    }
}
