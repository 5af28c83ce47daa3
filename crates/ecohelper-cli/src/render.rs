//! Plain-text rendering of the dashboard panels.

use chrono::{DateTime, Local, Utc};
use ecohelper_core::dashboard::{CountCard, MetricCard};
use ecohelper_core::storage::DisplayConfig;
use ecohelper_core::{ActivityTypeDescriptor, Dashboard, RecentEntry, TipCard};
use std::fmt::Write;

/// Print whole numbers without a trailing ".0".
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

pub fn format_timestamp(ts: DateTime<Utc>, display: &DisplayConfig) -> String {
    if display.local_time {
        ts.with_timezone(&Local)
            .format(&display.time_format)
            .to_string()
    } else {
        ts.format(&display.time_format).to_string()
    }
}

fn metric_line(out: &mut String, card: &MetricCard) {
    let _ = write!(out, "  {}: {} {}", card.title, format_amount(card.value), card.unit);
    if card.shows_saving() {
        let _ = write!(out, "  (potential saving: {} {})", card.potential_saving, card.unit);
    }
    out.push('\n');
}

fn count_line(out: &mut String, card: &CountCard) {
    let _ = writeln!(out, "  {}: {}  ({})", card.title, card.count, card.note);
}

pub fn summary(dashboard: &Dashboard) -> String {
    let mut out = String::from("Your Impact Today\n");
    metric_line(&mut out, &dashboard.water);
    metric_line(&mut out, &dashboard.energy);
    count_line(&mut out, &dashboard.activities);
    out
}

pub fn recent(entries: &[RecentEntry], display: &DisplayConfig) -> String {
    if entries.is_empty() {
        return String::from("No activities logged yet.\n");
    }
    let mut out = String::from("Recent Activities\n");
    for entry in entries {
        let _ = writeln!(
            out,
            "  {}  {:<18} {} {}",
            format_timestamp(entry.timestamp, display),
            entry.label,
            format_amount(entry.amount),
            entry.unit
        );
    }
    out
}

pub fn tips(cards: &[TipCard]) -> String {
    let mut out = String::from("Personalized Tips\n");
    for card in cards {
        let tip = &card.tip;
        let _ = writeln!(out, "  [{}] {}  <{}>", tip.badge(), tip.title, card.icon.as_str());
        let _ = writeln!(out, "      {}", tip.description);
    }
    out
}

pub fn dashboard(dashboard: &Dashboard, display: &DisplayConfig) -> String {
    let mut out = summary(dashboard);
    out.push('\n');
    out.push_str(&recent(&dashboard.recent, display));
    out.push('\n');
    out.push_str(&tips(&dashboard.tips));
    out
}

pub fn types<'a>(descriptors: impl IntoIterator<Item = &'a ActivityTypeDescriptor>) -> String {
    let mut out = String::new();
    for d in descriptors {
        let _ = writeln!(
            out,
            "  {:<8} {:<12} {:<18} ~{} {}",
            d.category.as_str(),
            d.value,
            d.label,
            format_amount(d.avg_magnitude),
            d.category.short_unit()
        );
    }
    out
}
