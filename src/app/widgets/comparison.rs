//! Side-by-side device comparison.
//!
//! Two devices, one metric, last 24 hours of the demo series. The delta
//! column is right minus left, so positive means the right device runs
//! hotter, damper, louder.

use dioxus::prelude::*;

use crate::content::devices::{self, format_tenths, METRICS};

const WINDOW_HOURS: usize = 24;

/// Min, mean and max over a series, in tenths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesSummary {
    pub min_tenths: i64,
    pub avg_tenths: i64,
    pub max_tenths: i64,
}

/// None on an empty series. The mean rounds half away from zero to stay
/// in tenths.
pub fn summarize(series: &[i64]) -> Option<SeriesSummary> {
    let first = *series.first()?;
    let mut min = first;
    let mut max = first;
    let mut sum: i64 = 0;
    for &v in series {
        min = min.min(v);
        max = max.max(v);
        sum += v;
    }
    let len = series.len() as i64;
    let avg = (2 * sum + len * sum.signum()) / (2 * len);
    Some(SeriesSummary {
        min_tenths: min,
        avg_tenths: avg,
        max_tenths: max,
    })
}

fn delta_label(right: i64, left: i64, unit: &str) -> String {
    let diff = right - left;
    if diff > 0 {
        format!("+{}", format_tenths(diff, unit))
    } else {
        format_tenths(diff, unit)
    }
}

#[component]
pub fn DeviceComparison() -> Element {
    let fleet = devices::fleet();
    let mut left_id = use_signal(|| fleet[0].id.to_string());
    let mut right_id = use_signal(|| fleet[1].id.to_string());
    let mut metric_key = use_signal(|| "temperature".to_string());

    let left = left_id();
    let right = right_id();
    let key = metric_key();

    let metric = devices::metric(&key);
    let unit = metric.map(|m| m.unit).unwrap_or("");
    let left_name = devices::device(&left).map(|d| d.name).unwrap_or("?");
    let right_name = devices::device(&right).map(|d| d.name).unwrap_or("?");

    let left_summary = summarize(&devices::series_tenths(&left, &key, WINDOW_HOURS));
    let right_summary = summarize(&devices::series_tenths(&right, &key, WINDOW_HOURS));

    let rows: Vec<(&'static str, String, String, String)> =
        match (left_summary, right_summary) {
            (Some(a), Some(b)) => vec![
                (
                    "Minimum",
                    format_tenths(a.min_tenths, unit),
                    format_tenths(b.min_tenths, unit),
                    delta_label(b.min_tenths, a.min_tenths, unit),
                ),
                (
                    "Average",
                    format_tenths(a.avg_tenths, unit),
                    format_tenths(b.avg_tenths, unit),
                    delta_label(b.avg_tenths, a.avg_tenths, unit),
                ),
                (
                    "Maximum",
                    format_tenths(a.max_tenths, unit),
                    format_tenths(b.max_tenths, unit),
                    delta_label(b.max_tenths, a.max_tenths, unit),
                ),
            ],
            _ => Vec::new(),
        };

    let device_options: Vec<(String, String)> = fleet
        .iter()
        .map(|d| (d.id.to_string(), format!("{} ({})", d.name, d.site)))
        .collect();
    let left_options = device_options.clone();
    let right_options = device_options;
    let metric_options: Vec<(&'static str, &'static str)> =
        METRICS.iter().map(|m| (m.key, m.label)).collect();

    rsx! {
        section { class: "widget device-comparison",
            header { class: "widget-header",
                h3 { "Compare devices" }
                p { class: "text-muted", "Last {WINDOW_HOURS} hours, demo telemetry." }
            }
            div { class: "comparison-controls",
                label {
                    "Left device"
                    select {
                        onchange: move |e| left_id.set(e.value()),
                        for (value, label) in left_options {
                            option {
                                value: "{value}",
                                selected: value == left,
                                "{label}"
                            }
                        }
                    }
                }
                label {
                    "Right device"
                    select {
                        onchange: move |e| right_id.set(e.value()),
                        for (value, label) in right_options {
                            option {
                                value: "{value}",
                                selected: value == right,
                                "{label}"
                            }
                        }
                    }
                }
                label {
                    "Metric"
                    select {
                        onchange: move |e| metric_key.set(e.value()),
                        for (value, label) in metric_options {
                            option {
                                value: "{value}",
                                selected: value == key,
                                "{label}"
                            }
                        }
                    }
                }
            }
            if rows.is_empty() {
                p { class: "text-muted", "No data for this selection." }
            } else {
                table { class: "comparison-table",
                    thead {
                        tr {
                            th { "" }
                            th { "{left_name}" }
                            th { "{right_name}" }
                            th { "Delta" }
                        }
                    }
                    tbody {
                        for (label, left_value, right_value, delta) in rows {
                            tr {
                                th { "{label}" }
                                td { "{left_value}" }
                                td { "{right_value}" }
                                td { class: "comparison-delta", "{delta}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
