// File: crates/dashboard-core/src/svg.rs
// Summary: Standalone SVG markup for a computed sparkline (gradient area, line, point markers).

use std::fmt::Write as _;

use crate::error::Result;
use crate::sparkline::Sparkline;

/// Id of the vertical fade used under the line; referenced by the area path.
pub const FILL_GRADIENT_ID: &str = "trend-fill";

/// Render `sparkline` as an inline `<svg>` element drawn in `currentColor`.
pub fn sparkline_svg(sparkline: &Sparkline) -> Result<String> {
    let surface = sparkline.surface();
    let mut out = String::new();

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" role="img" aria-label="Revenue trend line chart" viewBox="0 0 {w} {h}" class="w-full text-sky-500">"#,
        w = surface.width,
        h = surface.height,
    )?;
    writeln!(out, r#"  <defs>"#)?;
    writeln!(out, r#"    <linearGradient id="{FILL_GRADIENT_ID}" x1="0" x2="0" y1="0" y2="1">"#)?;
    writeln!(out, r#"      <stop offset="0%" stop-color="currentColor" stop-opacity="0.2" />"#)?;
    writeln!(out, r#"      <stop offset="100%" stop-color="currentColor" stop-opacity="0" />"#)?;
    writeln!(out, r#"    </linearGradient>"#)?;
    writeln!(out, r#"  </defs>"#)?;
    writeln!(
        out,
        r#"  <path d="{area}" fill="url(#{FILL_GRADIENT_ID})" class="transition-all duration-500" />"#,
        area = sparkline.area_path(),
    )?;
    writeln!(
        out,
        r#"  <path d="{line}" stroke="currentColor" stroke-width="3" fill="none" stroke-linejoin="round" stroke-linecap="round" />"#,
        line = sparkline.line_path(),
    )?;
    for p in sparkline.points() {
        writeln!(
            out,
            r#"  <circle cx="{x}" cy="{y}" r="4" class="fill-white stroke-current stroke-2" />"#,
            x = p.x,
            y = p.y,
        )?;
    }
    out.push_str("</svg>\n");
    Ok(out)
}
