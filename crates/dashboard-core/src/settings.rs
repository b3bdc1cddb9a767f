// File: crates/dashboard-core/src/settings.rs
// Summary: Optional file/env configuration for rendering (surface, tones, output location).

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::page::RenderOptions;
use crate::tones::ToneTables;
use crate::types::Surface;

/// Default config file stem, resolved relative to the working directory (`.toml`, `.yaml`, `.json`, ...).
pub const DEFAULT_CONFIG_STEM: &str = "config/dashboard";
pub const ENV_PREFIX: &str = "PULSEBOARD";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub surface: Surface,
    pub tailwind_cdn: bool,
    pub downsample_to: Option<usize>,
    pub output_dir: PathBuf,
    /// A table given here replaces the built-in one wholesale.
    pub tones: ToneTables,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let opts = RenderOptions::default();
        Self {
            surface: opts.surface,
            tailwind_cdn: opts.tailwind_cdn,
            downsample_to: opts.downsample_to,
            output_dir: PathBuf::from("target/out"),
            tones: opts.tones,
        }
    }
}

impl DashboardConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            surface: self.surface,
            tones: self.tones.clone(),
            tailwind_cdn: self.tailwind_cdn,
            downsample_to: self.downsample_to,
        }
    }
}

/// Load `config/dashboard.*` if present, then `PULSEBOARD__*` environment overrides.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(DEFAULT_CONFIG_STEM).required(false))
        .add_source(env_source())
        .build()
        .context("building dashboard configuration")?;

    Ok(settings.try_deserialize()?)
}

/// Load an explicit config file; unlike the default location it must exist.
pub fn load_dashboard_config_from(path: &Path) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(env_source())
        .build()
        .with_context(|| format!("reading config {}", path.display()))?;

    Ok(settings.try_deserialize()?)
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
