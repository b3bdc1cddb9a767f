// File: crates/dashboard-core/src/sync.rs
// Summary: Human readable "last synced" label from an elapsed duration.

use chrono::TimeDelta;

/// `just now`, `N minute(s) ago`, `N hour(s) ago` or `N day(s) ago`.
/// Negative deltas (clock skew) read as `just now`.
pub fn relative_label(elapsed: TimeDelta) -> String {
    if elapsed.num_seconds() < 60 {
        return "just now".to_string();
    }
    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }
    plural(elapsed.num_days(), "day")
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 { format!("1 {unit} ago") } else { format!("{n} {unit}s ago") }
}
