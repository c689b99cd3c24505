use std::path::PathBuf;

use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand, ValueEnum};

use crate::contributors::{Period, MONTH_WINDOW_DAYS};
use crate::dates;
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::payloads::PayloadFilter;

#[derive(Parser)]
#[command(author, version, about = "Browse the XSSNow payload catalog and its contributors", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Payload data file
    #[arg(short, long, default_value = "data/payloads.yaml")]
    pub data: PathBuf,

    /// Reference date for "this month" views (e.g. "2024-03-05", "05-03-2024")
    #[arg(short, long, value_parser = parse_reference_date)]
    pub today: Option<NaiveDate>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PeriodArg {
    AllTime,
    ThisMonth,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the contributor podium and rising stars
    Leaderboard {
        /// Time period to rank
        #[arg(short, long, value_enum, default_value = "all-time")]
        period: PeriodArg,
        /// Length of the "this month" window in days
        #[arg(short, long, default_value_t = MONTH_WINDOW_DAYS)]
        window_days: u32,
    },
    /// Show the top contributors of the last month
    Top,
    /// Search and browse payloads
    Payloads {
        /// Case-insensitive search text
        #[arg(short, long, default_value = "")]
        search: String,
        /// Quick filter
        #[arg(short, long, value_enum, default_value = "all")]
        filter: PayloadFilter,
        /// Category card (reflected, stored, dom, csp, waf, polyglot)
        #[arg(short, long, conflicts_with = "filter")]
        category: Option<String>,
        /// Number of "load more" pages to reveal
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Payloads per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
    /// Show community stats and achievements
    Stats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Leaderboard { period: Period },
    Top,
    Payloads {
        search: String,
        filter: PayloadFilter,
        page: usize,
        page_size: usize,
    },
    Stats,
}

#[derive(Debug)]
pub struct Config {
    pub data_path: PathBuf,
    pub reference: NaiveDateTime,
    pub verbosity: u8,
    pub action: Action,
}

impl Config {
    pub fn today(&self) -> NaiveDate {
        self.reference.date()
    }
}

pub fn parse_cli_args() -> Config {
    Cli::parse().into_config()
}

impl Cli {
    pub fn into_config(self) -> Config {
        let reference = match self.today {
            Some(day) => day.and_time(Local::now().time()),
            None => Local::now().naive_local(),
        };

        let action = match self.command {
            Commands::Leaderboard { period, window_days } => Action::Leaderboard {
                period: match period {
                    PeriodArg::AllTime => Period::AllTime,
                    PeriodArg::ThisMonth => Period::Window(window_days),
                },
            },
            Commands::Top => Action::Top,
            Commands::Payloads { search, filter, category, page, page_size } => Action::Payloads {
                search,
                filter: category.as_deref().map_or(filter, PayloadFilter::for_category),
                page: page.max(1),
                page_size: page_size.max(1),
            },
            Commands::Stats => Action::Stats,
        };

        Config {
            data_path: self.data,
            reference,
            verbosity: self.verbose,
            action,
        }
    }
}

fn parse_reference_date(value: &str) -> Result<NaiveDate, String> {
    dates::parse(value).ok_or_else(|| format!("'{value}' is not a recognised date"))
}
