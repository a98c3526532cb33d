//! Small presentational pieces shared by the pages.

use dioxus::prelude::*;
use store::Difficulty;

use crate::icons::FaSeedling;
use crate::Icon;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "spinner-wrap",
            div { class: "spinner", role: "status", aria_label: "Loading" }
        }
    }
}

/// Shown instead of a list when nothing matches. `children` holds the
/// follow-up action, typically a "Clear filters" button.
#[component]
pub fn EmptyState(title: String, message: String, children: Element) -> Element {
    rsx! {
        div { class: "empty-state",
            Icon { icon: FaSeedling, width: 40, height: 40 }
            h3 { "{title}" }
            p { "{message}" }
            {children}
        }
    }
}

#[component]
pub fn DifficultyBadge(level: Difficulty) -> Element {
    let class = match level {
        Difficulty::Easy => "badge badge-easy",
        Difficulty::Medium => "badge badge-medium",
        Difficulty::Hard => "badge badge-hard",
        Difficulty::Unknown => "badge",
    };
    rsx! {
        span { class, "{level}" }
    }
}

/// `text` cut to at most `max` characters, with an ellipsis when cut.
pub fn excerpt(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// `2025-01-15T12:00:00Z` as `January 15, 2025`. Anything unparseable is
/// returned unchanged.
pub fn format_date(timestamp: &str) -> String {
    long_date(timestamp).unwrap_or_else(|| timestamp.to_string())
}

fn long_date(timestamp: &str) -> Option<String> {
    let date = timestamp.split('T').next()?;
    let mut parts = date.splitn(3, '-');
    let year: u32 = parts.next()?.parse().ok()?;
    let month: usize = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    let name = MONTHS.get(month.checked_sub(1)?)?;
    Some(format!("{name} {day}, {year}"))
}
