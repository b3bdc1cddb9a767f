// File: crates/dashboard-core/tests/page.rs
// Purpose: Whole-page projection: sections, order, escaping and tone application.

use dashboard_core::{render_html, trend_sparkline, Dashboard, DashboardError, RenderOptions, Surface};

fn sample_html() -> String {
    render_html(&Dashboard::sample(), &RenderOptions::default()).expect("render")
}

#[test]
fn document_shell_and_escaped_title() {
    let html = sample_html();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Growth &amp; Retention Dashboard</title>"));
    assert!(html.contains(">Growth &amp; Retention Dashboard</h1>"));
    assert!(!html.contains("Growth & Retention"));
    assert!(html.contains("Last synced · 3 minutes ago"));
    assert!(html.contains("https://cdn.tailwindcss.com"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn sections_render_in_layout_order() {
    let html = sample_html();
    let order = [
        "Monthly Revenue",
        "Avg. Response Time",
        "ARR trend · last 12 months",
        "Top clients by ARR",
        "Team priorities",
        "Sync timeline",
    ];
    let positions: Vec<usize> = order.iter().map(|s| html.find(s).unwrap_or_else(|| panic!("missing {s}"))).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
fn one_unit_per_item_with_resolved_tokens() {
    let html = sample_html();
    assert_eq!(html.matches("hover:-translate-y-0.5").count(), 4);
    assert_eq!(html.matches("Enterprise tier").count(), 4);
    assert_eq!(html.matches(" · Due ").count(), 4);
    assert_eq!(html.matches("uppercase tracking-wide").count(), 4);
    assert!(html.contains(r#"text-xs font-semibold bg-rose-100 text-rose-700">Blocked</span>"#));
    assert!(html.contains(r#"text-xs font-semibold bg-blue-100 text-blue-700">In Review</span>"#));
    assert_eq!(html.matches("w-2.5 rounded-full bg-emerald-500").count(), 2);
    assert_eq!(html.matches("w-2.5 rounded-full bg-amber-500").count(), 1);
    assert_eq!(html.matches("w-2.5 rounded-full bg-sky-500").count(), 1);
    assert!(html.contains("SLA breach risk detected (West Coast)"));
    assert!(html.contains("+$68.7K"));
}

#[test]
fn trend_chart_is_inlined() {
    let html = sample_html();
    assert!(html.contains(r#"aria-label="Revenue trend line chart" viewBox="0 0 320 140""#));
    assert!(html.contains(r#"fill="url(#trend-fill)""#));
    assert_eq!(html.matches("<circle ").count(), 12);
}

#[test]
fn negative_delta_uses_negative_token() {
    let mut dashboard = Dashboard::sample();
    dashboard.metrics[0].tone = dashboard_core::DeltaTone::Negative;
    let html = render_html(&dashboard, &RenderOptions::default()).expect("render");
    assert_eq!(html.matches("text-xs font-semibold bg-rose-100 text-rose-700\">").count(), 2);
}

#[test]
fn user_text_is_escaped() {
    let mut dashboard = Dashboard::sample();
    dashboard.clients[0].company = "<script>alert('x')</script>".to_string();
    let html = render_html(&dashboard, &RenderOptions::default()).expect("render");
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(!html.contains("<script>alert"));
}

#[test]
fn unknown_status_aborts_render() {
    let mut dashboard = Dashboard::sample();
    dashboard.tasks[3].status = "Archived".to_string();
    let err = render_html(&dashboard, &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, DashboardError::UnknownToneKey { table: "task status", ref key } if key == "Archived"));
}

#[test]
fn empty_trend_aborts_render() {
    let dashboard = Dashboard::sample().with_trend_samples(Vec::new());
    assert_eq!(render_html(&dashboard, &RenderOptions::default()).unwrap_err(), DashboardError::EmptySeries);
}

#[test]
fn long_series_is_downsampled_when_asked() {
    let samples: Vec<f64> = (0..500).map(|i| (i as f64 * 0.1).sin() * 10.0 + i as f64 * 0.05).collect();
    let dashboard = Dashboard::sample().with_trend_samples(samples);

    let full = trend_sparkline(&dashboard, &RenderOptions::default()).expect("full");
    assert_eq!(full.points().len(), 500);

    let opts = RenderOptions { downsample_to: Some(60), surface: Surface::new(600.0, 200.0), ..RenderOptions::default() };
    let reduced = trend_sparkline(&dashboard, &opts).expect("reduced");
    assert_eq!(reduced.points().len(), 60);
    assert!((reduced.points()[59].x - 600.0).abs() < 1e-9);
}

#[test]
fn cdn_script_is_optional() {
    let opts = RenderOptions { tailwind_cdn: false, ..RenderOptions::default() };
    let html = render_html(&Dashboard::sample(), &opts).expect("render");
    assert!(!html.contains("<script"));
}
