use colored::*;
use tabled::{
    Table, Tabled,
    Style, Disable,
    Modify,
    object::Segment,
    Alignment
};
use crate::contributors::{Achievements, CommunityStats, ContributorAggregate};
use crate::payloads::{PayloadBrowser, PayloadRecord};

#[derive(Tabled)]
struct StatsRow {
    label: String,
    value: String,
}

pub fn print_payload(payload: &PayloadRecord) {
    let title = if payload.name.is_empty() { "(untitled)" } else { payload.name.as_str() };
    let difficulty = if payload.difficulty.is_empty() { "-" } else { payload.difficulty.as_str() };
    println!(
        "{} [{}] {}",
        title.yellow().bold(),
        difficulty.green(),
        payload.contributor.magenta()
    );
    if !payload.code.is_empty() {
        println!("    {}", payload.code.cyan());
    }
    if !payload.tags.is_empty() {
        println!("    {}", payload.tags.join(" · ").bright_black());
    }
}

pub fn print_payloads(browser: &PayloadBrowser) {
    if browser.page().is_empty() {
        println!("{}", "No payloads match the current search and filter.".yellow());
        return;
    }

    for payload in browser.visible() {
        print_payload(payload);
    }

    println!();
    println!("{}", browser.results_summary().bold());
    if browser.page().has_more {
        println!(
            "{}",
            format!("More available: re-run with --page {}", browser.page_number() + 1).bright_black()
        );
    }
}

pub fn print_stats(stats: &CommunityStats) {
    let stats_data = vec![
        StatsRow {
            label: "Payloads".bold().to_string(),
            value: format!("🔥 {}+", stats.payloads).yellow().bold().to_string(),
        },
        StatsRow {
            label: "Contributors".bold().to_string(),
            value: format!("🌍 {}", stats.contributors).green().bold().to_string(),
        },
        StatsRow {
            label: "Countries".bold().to_string(),
            value: format!("🚀 {}+", stats.countries).cyan().bold().to_string(),
        },
    ];

    let table = Table::new(stats_data)
        .with(Style::modern())
        .with(Disable::Row(..1))
        .with(Modify::new(Segment::all()).with(Alignment::left()));

    println!();
    println!("{}", "================= COMMUNITY IMPACT =================".bold());
    println!();
    println!("{table}");
}

pub fn print_achievements(achievements: &Achievements<'_>) {
    println!();
    print_achievement("Top Researcher", achievements.top_researcher, "Be the first contributor");
    print_achievement("Most Active", achievements.most_active, "Be the first contributor");
    print_achievement("Rising Star", achievements.rising_star, "New Contributors");
}

fn print_achievement(title: &str, holder: Option<&ContributorAggregate>, vacant: &str) {
    match holder {
        Some(contributor) => println!(
            "{} {} {}",
            format!("{title}:").bold(),
            contributor.name.green(),
            format!("({} Payloads)", contributor.payloads_contributed).cyan()
        ),
        None => println!("{} {}", format!("{title}:").bold(), vacant.bright_black()),
    }
}
