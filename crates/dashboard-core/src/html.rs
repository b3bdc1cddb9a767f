// File: crates/dashboard-core/src/html.rs
// Summary: HTML escaping and the per-section projections (data items -> markup units).

use std::fmt::Write as _;

use crate::error::Result;
use crate::model::{Client, Header, MetricCard, Task, TimelineEvent, TrendPanel};
use crate::sync::relative_label;
use crate::tones::ToneTables;

pub const CARD: &str = "rounded-3xl border border-slate-200 bg-white p-6 shadow-sm shadow-slate-200/60";
const EYEBROW: &str = "text-sm font-medium text-slate-500";
const CARD_TITLE: &str = "text-xl font-semibold text-slate-900";
const GHOST_BUTTON: &str =
    "rounded-full border border-slate-200 px-3 py-1 text-sm font-medium text-slate-600 transition hover:border-slate-300";

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn header(out: &mut String, header: &Header) -> Result<()> {
    write!(
        out,
        r#"<header class="border-b border-slate-200 bg-white/80 backdrop-blur">
  <div class="mx-auto flex max-w-6xl items-center justify-between px-6 py-6">
    <div>
      <p class="{EYEBROW}">{eyebrow}</p>
      <h1 class="text-2xl font-semibold tracking-tight text-slate-900">{title}</h1>
    </div>
    <div class="flex items-center gap-3 text-sm">
      <div class="rounded-full border border-slate-200 bg-white px-4 py-2 font-medium text-slate-600 shadow-sm">Last synced · {synced}</div>
      <button class="rounded-full bg-slate-900 px-4 py-2 font-medium text-white shadow-lg shadow-slate-900/20 transition hover:bg-slate-700">{action}</button>
    </div>
  </div>
</header>
"#,
        eyebrow = html_escape(&header.eyebrow),
        title = html_escape(&header.title),
        synced = html_escape(&relative_label(header.synced_ago)),
        action = html_escape(&header.action),
    )?;
    Ok(())
}

pub fn metric_cards(out: &mut String, metrics: &[MetricCard], tones: &ToneTables) -> Result<()> {
    out.push_str("<section class=\"md:col-span-12\">\n<div class=\"grid gap-4 sm:grid-cols-2 xl:grid-cols-4\">\n");
    for m in metrics {
        write!(
            out,
            r#"<article class="{CARD} transition hover:-translate-y-0.5 hover:shadow-md">
  <header class="flex items-start justify-between text-sm font-medium text-slate-500">
    <span>{label}</span>
    <span class="rounded-full px-2 py-0.5 text-xs font-semibold {tone}">{delta}</span>
  </header>
  <p class="mt-4 text-3xl font-semibold tracking-tight text-slate-900">{value}</p>
  <p class="mt-1 text-sm text-slate-500">{sublabel}</p>
</article>
"#,
            label = html_escape(&m.label),
            tone = html_escape(tones.delta(m.tone)),
            delta = html_escape(&m.delta),
            value = html_escape(&m.value),
            sublabel = html_escape(&m.sublabel),
        )?;
    }
    out.push_str("</div>\n</section>\n");
    Ok(())
}

/// Trend card; `chart_svg` is the already rendered sparkline element.
pub fn trend_panel(out: &mut String, panel: &TrendPanel, chart_svg: &str) -> Result<()> {
    write!(
        out,
        r#"<section class="md:col-span-7">
<article class="flex h-full flex-col {CARD}">
  <header class="flex items-center justify-between">
    <div>
      <p class="{EYEBROW}">{eyebrow}</p>
      <h2 class="{CARD_TITLE}">{title}</h2>
    </div>
    <div class="flex items-center gap-3 text-sm text-slate-500">
      <span class="inline-flex items-center gap-2 rounded-full border border-slate-200 px-3 py-1"><span class="h-2 w-2 rounded-full bg-sky-500"></span>{legend}</span>
      <span class="rounded-full bg-emerald-100 px-3 py-1 font-semibold text-emerald-700">{badge}</span>
    </div>
  </header>
  <div class="mt-6 flex flex-1 flex-col justify-between gap-6">
{chart_svg}    <div class="grid grid-cols-3 gap-4 text-sm">
"#,
        eyebrow = html_escape(&panel.eyebrow),
        title = html_escape(&panel.title),
        legend = html_escape(&panel.legend),
        badge = html_escape(&panel.badge),
    )?;
    for h in &panel.highlights {
        write!(
            out,
            r#"      <div class="rounded-2xl bg-slate-50 p-4">
        <p class="text-slate-500">{label}</p>
        <p class="mt-1 text-lg font-semibold text-slate-900">{value}</p>
      </div>
"#,
            label = html_escape(&h.label),
            value = html_escape(&h.value),
        )?;
    }
    out.push_str("    </div>\n  </div>\n</article>\n</section>\n");
    Ok(())
}

pub fn client_list(out: &mut String, clients: &[Client]) -> Result<()> {
    write!(
        out,
        r#"<section class="md:col-span-5">
<article class="flex h-full flex-col {CARD}">
  <header class="flex items-center justify-between">
    <div>
      <p class="{EYEBROW}">Strategic accounts</p>
      <h2 class="{CARD_TITLE}">Top clients by ARR</h2>
    </div>
    <button class="{GHOST_BUTTON}">View all</button>
  </header>
  <ul class="mt-6 flex flex-1 flex-col gap-4">
"#
    )?;
    for c in clients {
        write!(
            out,
            r#"    <li class="flex items-center justify-between rounded-2xl bg-slate-50 px-4 py-3">
      <div>
        <p class="text-sm font-semibold text-slate-900">{company}</p>
        <p class="text-sm text-slate-500">Enterprise tier</p>
      </div>
      <div class="text-right">
        <p class="text-sm font-semibold text-slate-900">{spend}</p>
        <p class="text-xs font-medium text-emerald-600">{growth}</p>
      </div>
    </li>
"#,
            company = html_escape(&c.company),
            spend = html_escape(&c.spend),
            growth = html_escape(&c.growth),
        )?;
    }
    out.push_str("  </ul>\n</article>\n</section>\n");
    Ok(())
}

pub fn task_list(out: &mut String, tasks: &[Task], tones: &ToneTables) -> Result<()> {
    write!(
        out,
        r#"<section class="md:col-span-7">
<article class="{CARD}">
  <header class="flex items-center justify-between">
    <div>
      <p class="{EYEBROW}">Delivery</p>
      <h2 class="{CARD_TITLE}">Team priorities</h2>
    </div>
    <button class="{GHOST_BUTTON}">Prioritize</button>
  </header>
  <div class="mt-6 space-y-3">
"#
    )?;
    for t in tasks {
        write!(
            out,
            r#"    <div class="flex items-center justify-between rounded-2xl border border-slate-200 px-4 py-3 transition hover:border-slate-300">
      <div>
        <p class="text-sm font-semibold text-slate-900">{title}</p>
        <p class="text-xs text-slate-500">{owner} · Due {due}</p>
      </div>
      <span class="rounded-full px-3 py-1 text-xs font-semibold {tone}">{status}</span>
    </div>
"#,
            title = html_escape(&t.title),
            owner = html_escape(&t.owner),
            due = html_escape(&t.due),
            tone = html_escape(tones.task_status(&t.status)?),
            status = html_escape(&t.status),
        )?;
    }
    out.push_str("  </div>\n</article>\n</section>\n");
    Ok(())
}

pub fn timeline(out: &mut String, events: &[TimelineEvent], tones: &ToneTables) -> Result<()> {
    write!(
        out,
        r#"<section class="md:col-span-5">
<article class="{CARD}">
  <header>
    <p class="{EYEBROW}">System highlights</p>
    <h2 class="{CARD_TITLE}">Sync timeline</h2>
  </header>
  <ol class="mt-6 space-y-4">
"#
    )?;
    for e in events {
        write!(
            out,
            r#"    <li class="flex gap-4">
      <div class="flex h-full flex-col items-center">
        <div class="mt-1 h-2.5 w-2.5 rounded-full {tone}"></div>
        <div class="flex-1 bg-slate-200"></div>
      </div>
      <div>
        <p class="text-xs font-medium uppercase tracking-wide text-slate-400">{time}</p>
        <p class="text-sm font-semibold text-slate-900">{title}</p>
      </div>
    </li>
"#,
            tone = html_escape(tones.timeline(&e.kind)?),
            time = html_escape(&e.time),
            title = html_escape(&e.title),
        )?;
    }
    out.push_str("  </ol>\n</article>\n</section>\n");
    Ok(())
}
