// File: crates/dashboard-core/src/model.rs
// Summary: Dashboard data model and the built-in sample dataset.

use chrono::TimeDelta;

/// Sentiment of a metric delta, picks the badge colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeltaTone {
    Positive,
    Negative,
}

#[derive(Clone, Debug)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub delta: String,
    pub tone: DeltaTone,
    pub sublabel: String,
}

#[derive(Clone, Debug)]
pub struct Highlight {
    pub label: String,
    pub value: String,
}

/// The chart panel: copy around the sparkline plus the series itself.
#[derive(Clone, Debug)]
pub struct TrendPanel {
    pub eyebrow: String,
    pub title: String,
    pub legend: String,
    pub badge: String,
    pub samples: Vec<f64>,
    pub highlights: Vec<Highlight>,
}

#[derive(Clone, Debug)]
pub struct Client {
    pub company: String,
    pub spend: String,
    pub growth: String,
}

#[derive(Clone, Debug)]
pub struct Task {
    pub title: String,
    pub owner: String,
    pub due: String,
    /// Key into the task status tone table.
    pub status: String,
}

#[derive(Clone, Debug)]
pub struct TimelineEvent {
    pub time: String,
    pub title: String,
    /// Key into the timeline tone table.
    pub kind: String,
}

#[derive(Clone, Debug)]
pub struct Header {
    pub eyebrow: String,
    pub title: String,
    pub synced_ago: TimeDelta,
    pub action: String,
}

#[derive(Clone, Debug)]
pub struct Dashboard {
    pub header: Header,
    pub metrics: Vec<MetricCard>,
    pub trend: TrendPanel,
    pub clients: Vec<Client>,
    pub tasks: Vec<Task>,
    pub timeline: Vec<TimelineEvent>,
}

pub const SAMPLE_TREND: [f64; 12] = [32.0, 36.0, 44.0, 38.0, 41.0, 47.0, 52.0, 49.0, 55.0, 61.0, 68.0, 74.0];

impl Dashboard {
    /// The growth & retention dashboard with its hardcoded sample data.
    pub fn sample() -> Self {
        Self {
            header: Header {
                eyebrow: "Operational hub".into(),
                title: "Growth & Retention Dashboard".into(),
                synced_ago: TimeDelta::minutes(3),
                action: "Export Report".into(),
            },
            metrics: vec![
                metric("Monthly Revenue", "$128.4K", "+12.4%", DeltaTone::Positive, "vs. last period"),
                metric("Active Customers", "5,209", "+4.8%", DeltaTone::Positive, "90 day rolling"),
                metric("Support Tickets", "42", "-18.6%", DeltaTone::Positive, "resolved this week"),
                metric("Avg. Response Time", "1h 12m", "-23m", DeltaTone::Positive, "SLA 2 hours"),
            ],
            trend: TrendPanel {
                eyebrow: "Net revenue progression".into(),
                title: "ARR trend · last 12 months".into(),
                legend: "ARR".into(),
                badge: "+27.3% YoY".into(),
                samples: SAMPLE_TREND.to_vec(),
                highlights: vec![
                    Highlight { label: "Peak revenue".into(), value: "$312K".into() },
                    Highlight { label: "Average retention".into(), value: "91.2%".into() },
                    Highlight { label: "Expansion revenue".into(), value: "+$68.7K".into() },
                ],
            },
            clients: vec![
                client("Acme Robotics", "$24,900", "+18%"),
                client("Lumen Analytics", "$19,430", "+11%"),
                client("Northwind Labs", "$17,280", "+9%"),
                client("Sierra Ventures", "$14,120", "+7%"),
            ],
            tasks: vec![
                task("Finalize Q3 forecast model", "Finance", "Today", "In Review"),
                task("Roll out customer health scoring", "Success", "Tomorrow", "Blocked"),
                task("Refresh marketing automation journeys", "Growth", "Friday", "In Progress"),
                task("Security posture audit", "Engineering", "Monday", "Scheduled"),
            ],
            timeline: vec![
                event("09:10", "Lead-to-order sync completed", "success"),
                event("10:25", "SLA breach risk detected (West Coast)", "warning"),
                event("11:40", "42 new product trials activated", "info"),
                event("12:05", "Billing reconciliation cleared", "success"),
            ],
        }
    }

    /// Swap the trend series, keeping the rest of the copy.
    pub fn with_trend_samples(mut self, samples: Vec<f64>) -> Self {
        self.trend.samples = samples;
        self
    }
}

// ---- sample builders ---------------------------------------------------------

fn metric(label: &str, value: &str, delta: &str, tone: DeltaTone, sublabel: &str) -> MetricCard {
    MetricCard { label: label.into(), value: value.into(), delta: delta.into(), tone, sublabel: sublabel.into() }
}

fn client(company: &str, spend: &str, growth: &str) -> Client {
    Client { company: company.into(), spend: spend.into(), growth: growth.into() }
}

fn task(title: &str, owner: &str, due: &str, status: &str) -> Task {
    Task { title: title.into(), owner: owner.into(), due: due.into(), status: status.into() }
}

fn event(time: &str, title: &str, kind: &str) -> TimelineEvent {
    TimelineEvent { time: time.into(), title: title.into(), kind: kind.into() }
}
