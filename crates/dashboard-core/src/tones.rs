// File: crates/dashboard-core/src/tones.rs
// Summary: Category -> style token lookup tables (task status, timeline event type, delta tone).

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{DashboardError, Result};
use crate::model::{Dashboard, DeltaTone};

pub const TASK_STATUS_TABLE: &str = "task status";
pub const TIMELINE_TABLE: &str = "timeline";

/// Style tokens handed to the page renderer. Lookups match keys exactly;
/// a missing key is an error rather than a silent default.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToneTables {
    pub task_status: BTreeMap<String, String>,
    pub timeline: BTreeMap<String, String>,
    pub delta_positive: String,
    pub delta_negative: String,
}

impl ToneTables {
    /// Tailwind tokens of the stock dashboard.
    pub fn standard() -> Self {
        let table = |pairs: &[(&str, &str)]| {
            pairs.iter().map(|&(k, v)| (k.to_string(), v.to_string())).collect::<BTreeMap<_, _>>()
        };
        Self {
            task_status: table(&[
                ("In Review", "bg-blue-100 text-blue-700"),
                ("Blocked", "bg-rose-100 text-rose-700"),
                ("In Progress", "bg-amber-100 text-amber-700"),
                ("Scheduled", "bg-emerald-100 text-emerald-700"),
            ]),
            timeline: table(&[
                ("success", "bg-emerald-500"),
                ("warning", "bg-amber-500"),
                ("info", "bg-sky-500"),
            ]),
            delta_positive: "bg-emerald-100 text-emerald-700".to_string(),
            delta_negative: "bg-rose-100 text-rose-700".to_string(),
        }
    }

    pub fn task_status(&self, status: &str) -> Result<&str> {
        lookup(&self.task_status, TASK_STATUS_TABLE, status)
    }

    pub fn timeline(&self, kind: &str) -> Result<&str> {
        lookup(&self.timeline, TIMELINE_TABLE, kind)
    }

    pub fn delta(&self, tone: DeltaTone) -> &str {
        match tone {
            DeltaTone::Positive => self.delta_positive.as_str(),
            DeltaTone::Negative => self.delta_negative.as_str(),
        }
    }

    /// Report the first task status or timeline kind in `dashboard` with no token.
    pub fn validate(&self, dashboard: &Dashboard) -> Result<()> {
        for task in &dashboard.tasks {
            self.task_status(&task.status)?;
        }
        for event in &dashboard.timeline {
            self.timeline(&event.kind)?;
        }
        Ok(())
    }
}

impl Default for ToneTables {
    fn default() -> Self {
        Self::standard()
    }
}

fn lookup<'a>(table: &'a BTreeMap<String, String>, name: &'static str, key: &str) -> Result<&'a str> {
    table
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| DashboardError::UnknownToneKey { table: name, key: key.to_string() })
}
