// File: crates/dashboard-core/tests/tones.rs
// Purpose: Lookup-table resolution and the fail-fast policy for unknown keys.

use dashboard_core::{Dashboard, DashboardError, DeltaTone, ToneTables};

#[test]
fn standard_tables_resolve_every_sample_key() {
    let tones = ToneTables::standard();
    assert_eq!(tones.task_status("In Review").unwrap(), "bg-blue-100 text-blue-700");
    assert_eq!(tones.task_status("Blocked").unwrap(), "bg-rose-100 text-rose-700");
    assert_eq!(tones.task_status("In Progress").unwrap(), "bg-amber-100 text-amber-700");
    assert_eq!(tones.task_status("Scheduled").unwrap(), "bg-emerald-100 text-emerald-700");
    assert_eq!(tones.timeline("success").unwrap(), "bg-emerald-500");
    assert_eq!(tones.timeline("warning").unwrap(), "bg-amber-500");
    assert_eq!(tones.timeline("info").unwrap(), "bg-sky-500");
    assert_eq!(tones.delta(DeltaTone::Positive), "bg-emerald-100 text-emerald-700");
    assert_eq!(tones.delta(DeltaTone::Negative), "bg-rose-100 text-rose-700");
    tones.validate(&Dashboard::sample()).expect("sample dashboard is fully styled");
}

#[test]
fn lookup_is_exact_match() {
    let tones = ToneTables::standard();
    let err = tones.task_status("in review").unwrap_err();
    assert_eq!(
        err,
        DashboardError::UnknownToneKey { table: "task status", key: "in review".to_string() }
    );
    assert!(tones.timeline("Success").is_err());
}

#[test]
fn validate_reports_first_unstyled_timeline_kind() {
    let mut dashboard = Dashboard::sample();
    dashboard.timeline[2].kind = "critical".to_string();
    let err = ToneTables::standard().validate(&dashboard).unwrap_err();
    assert_eq!(err, DashboardError::UnknownToneKey { table: "timeline", key: "critical".to_string() });
    assert_eq!(err.to_string(), "no style token for key \"critical\" in the timeline table");
}

#[test]
fn injected_tables_replace_builtins() {
    let mut tones = ToneTables::standard();
    tones.timeline.insert("critical".into(), "bg-red-600".into());
    assert_eq!(tones.timeline("critical").unwrap(), "bg-red-600");
    tones.task_status.remove("Blocked");
    assert!(tones.validate(&Dashboard::sample()).is_err());
}
