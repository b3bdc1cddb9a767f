// File: crates/dashboard-core/src/lib.rs
// Summary: Core library entry point; exports the sparkline transform and dashboard rendering API.

pub mod downsample;
pub mod error;
pub mod geometry;
pub mod html;
pub mod model;
pub mod page;
pub mod scale;
pub mod settings;
pub mod sparkline;
pub mod svg;
pub mod sync;
pub mod tones;
pub mod types;

pub use downsample::lttb;
pub use error::{DashboardError, Result};
pub use geometry::Point;
pub use model::{Client, Dashboard, DeltaTone, Header, Highlight, MetricCard, Task, TimelineEvent, TrendPanel};
pub use page::{render_html, render_to_file, render_trend_svg_to_file, trend_sparkline, RenderOptions};
pub use settings::{load_dashboard_config, load_dashboard_config_from, DashboardConfig};
pub use sparkline::{Path, PathCommand, Sparkline};
pub use svg::sparkline_svg;
pub use sync::relative_label;
pub use tones::ToneTables;
pub use types::Surface;
