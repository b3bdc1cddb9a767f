// File: crates/demo/src/main.rs
// Summary: Demo renders the sample dashboard (optionally with a trend series from CSV) to HTML and SVG.

use anyhow::{Context, Result};
use dashboard_core::{load_dashboard_config, render_to_file, render_trend_svg_to_file, Dashboard};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = load_dashboard_config()?;
    let opts = cfg.render_options();
    info!(width = opts.surface.width, height = opts.surface.height, output_dir = %cfg.output_dir.display(), "configuration loaded");

    let mut dashboard = Dashboard::sample();

    // Optional trend series from CLI (supports .csv/.cvs swap)
    if let Some(raw) = std::env::args().nth(1) {
        let (path, used_alt) = resolve_path(&raw)?;
        if used_alt {
            info!(path = %path.display(), "extension swapped between .csv/.cvs");
        }
        let samples = load_series_csv(&path)
            .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        if samples.is_empty() {
            anyhow::bail!("no samples loaded from {}; check headers/delimiter", path.display());
        }
        info!(path = %path.display(), samples = samples.len(), "loaded trend series");
        dashboard = dashboard.with_trend_samples(samples);
    }

    let out_html = cfg.output_dir.join("dashboard.html");
    render_to_file(&dashboard, &opts, &out_html)?;
    info!(path = %out_html.display(), "wrote dashboard page");

    let out_svg = cfg.output_dir.join("trend.svg");
    render_trend_svg_to_file(&dashboard, &opts, &out_svg)?;
    info!(path = %out_svg.display(), "wrote trend chart");

    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load one numeric column as the trend series. The column is picked by header
/// name, falling back to the first column; unparsable rows are skipped.
fn load_series_csv(path: &Path) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let column = value_column(&headers);
    if column.is_none() {
        warn!("no value/arr/revenue/close/y column; using the first column");
    }
    let column = column.unwrap_or(0);

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        match rec.get(column).and_then(|s| s.trim().parse::<f64>().ok()).filter(|v| v.is_finite()) {
            Some(v) => out.push(v),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "skipped rows without a numeric value");
    }
    Ok(out)
}

fn value_column(headers: &[String]) -> Option<usize> {
    const NAMES: [&str; 5] = ["value", "arr", "revenue", "close", "y"];
    NAMES.iter().find_map(|want| headers.iter().position(|h| h == want))
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn csv_file(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("series.csv");
        std::fs::File::create(&path).and_then(|mut f| f.write_all(contents.as_bytes())).expect("write csv");
        (dir, path)
    }

    #[test]
    fn picks_named_column_and_skips_bad_rows() {
        let (_dir, path) = csv_file("month,ARR\n1,32\n2,n/a\n3,36.5\n");
        assert_eq!(load_series_csv(&path).unwrap(), vec![32.0, 36.5]);
    }

    #[test]
    fn falls_back_to_first_column() {
        let (_dir, path) = csv_file("amount,note\n5,a\n7,b\n");
        assert_eq!(load_series_csv(&path).unwrap(), vec![5.0, 7.0]);
    }

    #[test]
    fn resolves_swapped_extension() {
        let (_dir, path) = csv_file("value\n1\n");
        let typo = path.with_extension("cvs");
        let (found, used_alt) = resolve_path(typo.to_str().unwrap()).unwrap();
        assert_eq!(found, path);
        assert!(used_alt);
    }
}
