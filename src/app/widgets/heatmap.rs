//! Week-by-hour telemetry heatmap.
//!
//! A 7×24 grid of demo readings for one device and metric. Cell shading
//! comes from the normalized intensity; the exact reading is in the cell
//! title and in the readout under the grid once a cell is hovered.

use dioxus::prelude::*;

use crate::content::devices::{self, format_tenths, METRICS};

const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[component]
pub fn TelemetryHeatmap() -> Element {
    let fleet = devices::fleet();
    let mut device_id = use_signal(|| fleet[0].id.to_string());
    let mut metric_key = use_signal(|| "temperature".to_string());
    let mut hovered = use_signal(|| Option::<(usize, usize)>::None);

    let id = device_id();
    let key = metric_key();

    let metric = devices::metric(&key);
    let unit = metric.map(|m| m.unit).unwrap_or("");
    let min_label = metric
        .map(|m| format_tenths(m.min_tenths, m.unit))
        .unwrap_or_default();
    let max_label = metric
        .map(|m| format_tenths(m.max_tenths, m.unit))
        .unwrap_or_default();

    let grid = devices::heatmap_grid(&id, &key);
    let rows: Vec<(usize, &'static str, Vec<(usize, u8, String)>)> = grid
        .iter()
        .enumerate()
        .map(|(day, cells)| {
            let cells = cells
                .iter()
                .enumerate()
                .map(|(hour, &intensity)| {
                    let tenths = devices::sample_tenths(&id, &key, (day * 24 + hour) as u64);
                    let title = format!(
                        "{} {:02}:00 {}",
                        DAY_LABELS[day],
                        hour,
                        format_tenths(tenths, unit)
                    );
                    (hour, intensity, title)
                })
                .collect();
            (day, DAY_LABELS[day], cells)
        })
        .collect();

    let readout = hovered().map(|(day, hour)| {
        let tenths = devices::sample_tenths(&id, &key, (day * 24 + hour) as u64);
        format!(
            "{} {:02}:00 {}",
            DAY_LABELS[day],
            hour,
            format_tenths(tenths, unit)
        )
    });
    let readout_text = readout.unwrap_or_else(|| "Hover a cell for the reading.".to_string());

    let device_options: Vec<(String, String)> = fleet
        .iter()
        .map(|d| (d.id.to_string(), format!("{} ({})", d.name, d.site)))
        .collect();
    let metric_options: Vec<(&'static str, &'static str)> =
        METRICS.iter().map(|m| (m.key, m.label)).collect();

    rsx! {
        section { class: "widget telemetry-heatmap",
            header { class: "widget-header",
                h3 { "Weekly heatmap" }
                p { class: "text-muted", "Hourly readings over the demo week." }
            }
            div { class: "heatmap-controls",
                label {
                    "Device"
                    select {
                        onchange: move |e| device_id.set(e.value()),
                        for (value, label) in device_options {
                            option {
                                value: "{value}",
                                selected: value == id,
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
            div { class: "heatmap-grid", role: "img", aria_label: "Readings by day and hour",
                for (day, day_label, cells) in rows {
                    div { class: "heatmap-row",
                        span { class: "heatmap-day", "{day_label}" }
                        for (hour, intensity, title) in cells {
                            span {
                                key: "{day}-{hour}",
                                class: "heatmap-cell",
                                style: "--intensity:{intensity};",
                                title: "{title}",
                                onmouseenter: move |_| hovered.set(Some((day, hour))),
                            }
                        }
                    }
                }
            }
            div { class: "heatmap-legend",
                span { "{min_label}" }
                span { class: "heatmap-scale" }
                span { "{max_label}" }
            }
            p { class: "heatmap-readout", role: "status", "{readout_text}" }
        }
    }
}
