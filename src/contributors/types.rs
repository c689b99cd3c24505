use chrono::NaiveDate;

use crate::dates;

/// Per-contributor totals derived from the payload catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorAggregate {
    pub name: String,
    pub username: String,
    pub payloads_contributed: u32,
    /// Raw `date_added` of the most recent contribution, or `"Unknown"`.
    pub last_contribution: String,
    /// Raw `date_added` of the first record seen, or `"Unknown"`.
    pub join_date: String,
    pub location: String,
    /// Up to three categories, in the order first seen.
    pub specialties: Vec<String>,
}

impl ContributorAggregate {
    pub fn last_contribution_date(&self) -> Option<NaiveDate> {
        dates::parse(&self.last_contribution)
    }

    pub fn join_date_parsed(&self) -> Option<NaiveDate> {
        dates::parse(&self.join_date)
    }

    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.username)
    }

    pub fn avatar_url(&self) -> String {
        format!("https://github.com/{}.png", self.username)
    }

    pub fn badges(&self) -> &'static [&'static str] {
        badges_for(&self.username)
    }

    pub fn flag(&self) -> &'static str {
        country_flag(&self.location)
    }

    pub fn format_last_contribution(&self, today: NaiveDate) -> String {
        let Some(last) = self.last_contribution_date() else {
            return "unknown".to_string();
        };
        let days = today.signed_duration_since(last).num_days();

        if days <= 0 {
            "today".to_string()
        } else if days < 7 {
            format!("{} days ago", days)
        } else if days < 30 {
            format!("{} weeks ago", days / 7)
        } else if days < 365 {
            format!("{} months ago", days / 30)
        } else {
            format!("{} years ago", days / 365)
        }
    }
}

pub fn badges_for(username: &str) -> &'static [&'static str] {
    match username {
        "dr34mhacks" => &["contributor", "researcher", "expert", "ninja", "legend", "founder"],
        "mathiasbynens" => &["contributor", "researcher", "expert", "ninja", "legend"],
        "portswigger" | "brutelogic" | "garethheyes" | "cure53" => {
            &["contributor", "researcher", "expert", "ninja"]
        }
        "security_researcher" | "white_hat" => &["contributor", "researcher"],
        _ => &["contributor"],
    }
}

pub fn country_flag(country: &str) -> &'static str {
    match country {
        "USA" | "United States" => "🇺🇸",
        "Canada" => "🇨🇦",
        "Mexico" => "🇲🇽",
        "United Kingdom" | "UK" => "🇬🇧",
        "Germany" => "🇩🇪",
        "France" => "🇫🇷",
        "Netherlands" => "🇳🇱",
        "Belgium" => "🇧🇪",
        "Switzerland" => "🇨🇭",
        "Sweden" => "🇸🇪",
        "Norway" => "🇳🇴",
        "Denmark" => "🇩🇰",
        "Finland" => "🇫🇮",
        "Italy" => "🇮🇹",
        "Spain" => "🇪🇸",
        "Portugal" => "🇵🇹",
        "Poland" => "🇵🇱",
        "Czech Republic" => "🇨🇿",
        "Austria" => "🇦🇹",
        "Romania" => "🇷🇴",
        "Bulgaria" => "🇧🇬",
        "Estonia" => "🇪🇪",
        "Latvia" => "🇱🇻",
        "Lithuania" => "🇱🇹",
        "Russia" => "🇷🇺",
        "Ukraine" => "🇺🇦",
        "India" => "🇮🇳",
        "China" => "🇨🇳",
        "Japan" => "🇯🇵",
        "South Korea" => "🇰🇷",
        "Singapore" => "🇸🇬",
        "Australia" => "🇦🇺",
        "New Zealand" => "🇳🇿",
        "Malaysia" => "🇲🇾",
        "Thailand" => "🇹🇭",
        "Vietnam" => "🇻🇳",
        "Philippines" => "🇵🇭",
        "Indonesia" => "🇮🇩",
        "Taiwan" => "🇹🇼",
        "Hong Kong" => "🇭🇰",
        "Israel" => "🇮🇱",
        "Turkey" => "🇹🇷",
        "UAE" => "🇦🇪",
        "Saudi Arabia" => "🇸🇦",
        "South Africa" => "🇿🇦",
        "Nigeria" => "🇳🇬",
        "Egypt" => "🇪🇬",
        "Kenya" => "🇰🇪",
        "Brazil" => "🇧🇷",
        "Argentina" => "🇦🇷",
        "Chile" => "🇨🇱",
        "Colombia" => "🇨🇴",
        "Peru" => "🇵🇪",
        "Venezuela" => "🇻🇪",
        _ => "🌐",
    }
}
