use chrono::NaiveDate;
use colored::*;

use crate::contributors::leaderboard::{score, Leaderboard, LeaderboardScope};
use crate::contributors::ranking::LeaderboardView;
use crate::contributors::types::ContributorAggregate;
use crate::pagination::{ranked_tier, ELITE_TIER, RISING_STARS};

pub fn display_leaderboard(view: &LeaderboardView, today: NaiveDate) {
    let ranked = match view {
        LeaderboardView::NoContributors => {
            println!("{}", "No contributors found.".yellow());
            return;
        }
        LeaderboardView::NoRecentActivity => {
            println!("\n{}", "No Recent Contributors".bold());
            println!(
                "{}",
                "No contributors found for this month. Switch to --period all-time to see all contributors.".yellow()
            );
            return;
        }
        LeaderboardView::Ranked(ranked) => ranked,
    };

    println!("\n{}\n", "Elite Tier".bold());
    for (rank, contributor) in ranked_tier(ranked, ELITE_TIER) {
        print_elite_card(rank, contributor, today);
    }

    let mut stars = ranked_tier(ranked, RISING_STARS).peekable();
    if stars.peek().is_some() {
        println!("{}\n", "Rising Stars".bold());
        for (rank, contributor) in stars {
            print_rising_star(rank, contributor);
        }
    }
}

fn print_elite_card(rank: usize, contributor: &ContributorAggregate, today: NaiveDate) {
    let crown = if rank == 1 { " 👑" } else { "" };
    println!(
        "{}. {}{} {}",
        rank.to_string().yellow(),
        contributor.name.green().bold(),
        crown,
        format!("@{}", contributor.username).bright_black()
    );
    println!(
        "   {} {}",
        "•".bright_black(),
        format!("Payloads: {}", contributor.payloads_contributed).cyan()
    );
    println!(
        "   {} {} {}",
        "•".bright_black(),
        contributor.flag(),
        contributor.location.blue()
    );
    if !contributor.specialties.is_empty() {
        println!(
            "   {} {}",
            "•".bright_black(),
            format!("Specialties: {}", contributor.specialties.join(", ")).yellow()
        );
    }
    println!(
        "   {} {}",
        "•".bright_black(),
        format!("Badges: {}", contributor.badges().join(", ")).bright_white()
    );
    println!(
        "   {} {}",
        "•".bright_black(),
        format!("Last Contribution: {}", contributor.format_last_contribution(today)).magenta()
    );
    println!("   {} {}\n", "•".bright_black(), contributor.profile_url().underline());
}

fn print_rising_star(rank: usize, contributor: &ContributorAggregate) {
    println!(
        "  #{} {} {} {} {}",
        rank.to_string().yellow(),
        contributor.name.green(),
        format!("@{}", contributor.username).bright_black(),
        format!("{} {}", contributor.flag(), contributor.location).blue(),
        format!("{} payloads", contributor.payloads_contributed).cyan()
    );
}

pub fn display_top_contributors(board: &Leaderboard) {
    if board.is_empty() {
        println!("{}", "No contributors found".yellow());
        return;
    }

    let heading = match board.scope {
        LeaderboardScope::Recent => "Top Contributors This Month",
        LeaderboardScope::AllTime => "Top Contributors (All Time)",
    };
    println!("\n{}\n", heading.bold());

    for (i, contributor) in board.entries.iter().enumerate() {
        let count = contributor.payloads_contributed;
        let plural = if count == 1 { "" } else { "s" };
        println!(
            "{} {} {} {}",
            format!("#{}", i + 1).yellow(),
            contributor.name.green().bold(),
            format!("{} payload{} • @{}", count, plural, contributor.username).bright_black(),
            score(contributor).to_string().cyan().bold()
        );
    }
}
