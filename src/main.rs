use colored::*;
use env_logger::Env;
use log::info;

use xssnow::commands::{parse_cli_args, Action, Config};
use xssnow::contributors::{
    achievements, aggregate, display_leaderboard, display_top_contributors, period_view, rank, top_contributors,
    CommunityStats,
};
use xssnow::display::{print_achievements, print_payloads, print_stats};
use xssnow::payloads::{load_or_fallback, PayloadBrowser};

fn main() {
    let config = parse_cli_args();
    init_logging(config.verbosity);
    run(&config);
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(config: &Config) {
    let dataset = load_or_fallback(&config.data_path, config.today());
    if dataset.is_fallback() {
        eprintln!(
            "{}",
            format!("Could not load '{}'; showing built-in sample data.", config.data_path.display()).red()
        );
    }
    info!("{} payload records, reference date {}", dataset.records.len(), config.today());

    match &config.action {
        Action::Leaderboard { period } => {
            let contributors = aggregate(&dataset.records);
            let view = period_view(&contributors, *period, config.reference);
            display_leaderboard(&view, config.today());
        }
        Action::Top => {
            let board = top_contributors(&dataset.records, config.reference);
            display_top_contributors(&board);
        }
        Action::Payloads { search, filter, page, page_size } => {
            let mut browser = PayloadBrowser::with_page_size(dataset.records, *page_size);
            browser.set_query(search);
            browser.set_filter(*filter);
            browser.reveal(*page);
            print_payloads(&browser);
        }
        Action::Stats => {
            let ranked = rank(aggregate(&dataset.records));
            print_stats(&CommunityStats::from_contributors(&ranked));
            print_achievements(&achievements(&ranked, config.reference));
        }
    }
}
