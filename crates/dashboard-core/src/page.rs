// File: crates/dashboard-core/src/page.rs
// Summary: Whole-page rendering pipeline: dashboard data + injected tones -> HTML document.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::downsample::lttb;
use crate::error::Result;
use crate::html;
use crate::model::Dashboard;
use crate::sparkline::Sparkline;
use crate::svg::sparkline_svg;
use crate::tones::ToneTables;
use crate::types::Surface;

pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub surface: Surface,
    pub tones: ToneTables,
    /// Emit the Tailwind play CDN script so the classes resolve when opened in a browser.
    pub tailwind_cdn: bool,
    /// Reduce the trend series to at most this many points (LTTB) before projecting it.
    pub downsample_to: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            surface: Surface::default(),
            tones: ToneTables::standard(),
            tailwind_cdn: true,
            downsample_to: None,
        }
    }
}

/// Project the dashboard's trend series onto `opts.surface`, downsampling first if asked.
pub fn trend_sparkline(dashboard: &Dashboard, opts: &RenderOptions) -> Result<Sparkline> {
    let samples = &dashboard.trend.samples;
    let sparkline = match opts.downsample_to {
        Some(max_points) if max_points >= 2 && samples.len() > max_points => {
            Sparkline::compute(&lttb(samples, max_points), opts.surface)?
        }
        _ => Sparkline::compute(samples, opts.surface)?,
    };
    debug!(
        samples = samples.len(),
        points = sparkline.points().len(),
        width = opts.surface.width,
        height = opts.surface.height,
        "projected trend sparkline"
    );
    Ok(sparkline)
}

/// Render the full HTML document. Fails before emitting anything if a task status
/// or timeline kind has no style token.
pub fn render_html(dashboard: &Dashboard, opts: &RenderOptions) -> Result<String> {
    opts.tones.validate(dashboard)?;
    let chart = sparkline_svg(&trend_sparkline(dashboard, opts)?)?;

    let mut out = String::with_capacity(16 * 1024);
    write!(
        out,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
"#,
        title = html::html_escape(&dashboard.header.title),
    )?;
    if opts.tailwind_cdn {
        writeln!(out, r#"<script src="{TAILWIND_CDN}"></script>"#)?;
    }
    out.push_str("</head>\n<body>\n<div class=\"min-h-screen bg-slate-50 pb-12 text-slate-900\">\n");

    html::header(&mut out, &dashboard.header)?;
    out.push_str("<main class=\"mx-auto grid max-w-6xl grid-cols-1 gap-6 px-6 pt-8 md:grid-cols-12\">\n");
    html::metric_cards(&mut out, &dashboard.metrics, &opts.tones)?;
    html::trend_panel(&mut out, &dashboard.trend, &chart)?;
    html::client_list(&mut out, &dashboard.clients)?;
    html::task_list(&mut out, &dashboard.tasks, &opts.tones)?;
    html::timeline(&mut out, &dashboard.timeline, &opts.tones)?;
    out.push_str("</main>\n</div>\n</body>\n</html>\n");

    debug!(bytes = out.len(), "rendered dashboard page");
    Ok(out)
}

/// Render the dashboard and write it to `output_path`, creating parent directories.
pub fn render_to_file(
    dashboard: &Dashboard,
    opts: &RenderOptions,
    output_path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let html = render_html(dashboard, opts)?;
    write_file(output_path.as_ref(), html.as_bytes())
}

/// Write the trend chart alone as an `.svg` file.
pub fn render_trend_svg_to_file(
    dashboard: &Dashboard,
    opts: &RenderOptions,
    output_path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let svg = sparkline_svg(&trend_sparkline(dashboard, opts)?)?;
    write_file(output_path.as_ref(), svg.as_bytes())
}

fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
