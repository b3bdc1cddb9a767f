// File: crates/dashboard-core/tests/sync.rs
// Purpose: Relative "last synced" label boundaries.

use chrono::TimeDelta;
use dashboard_core::relative_label;

#[test]
fn label_boundaries() {
    assert_eq!(relative_label(TimeDelta::seconds(-5)), "just now");
    assert_eq!(relative_label(TimeDelta::seconds(59)), "just now");
    assert_eq!(relative_label(TimeDelta::seconds(60)), "1 minute ago");
    assert_eq!(relative_label(TimeDelta::minutes(3)), "3 minutes ago");
    assert_eq!(relative_label(TimeDelta::minutes(59)), "59 minutes ago");
    assert_eq!(relative_label(TimeDelta::minutes(60)), "1 hour ago");
    assert_eq!(relative_label(TimeDelta::hours(23)), "23 hours ago");
    assert_eq!(relative_label(TimeDelta::hours(24)), "1 day ago");
    assert_eq!(relative_label(TimeDelta::days(12)), "12 days ago");
}
