//! Demo fleet and telemetry for the dashboard widgets.
//!
//! The dashboard renders against this fixture data; live telemetry is a
//! backend concern and out of scope for the site. Values are generated
//! with integer arithmetic from a keyed mixer so the server render and
//! the hydrated client agree byte-for-byte, every session, on every
//! platform.

use sha2::{Digest, Sha256};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Device {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub site: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub online: bool,
}

pub fn fleet() -> &'static [Device] {
    FLEET
}

pub fn device(id: &str) -> Option<&'static Device> {
    FLEET.iter().find(|d| d.id == id)
}

static FLEET: &[Device] = &[
    Device {
        id: "dev-pn-001",
        name: "Chiller intake",
        kind: "temperature",
        site: "Pune plant",
        latitude: 18.5204,
        longitude: 73.8567,
        online: true,
    },
    Device {
        id: "dev-pn-002",
        name: "Compressor bearing",
        kind: "vibration",
        site: "Pune plant",
        latitude: 18.5209,
        longitude: 73.8571,
        online: true,
    },
    Device {
        id: "dev-pn-003",
        name: "Cold room",
        kind: "temperature",
        site: "Pune plant",
        latitude: 18.5199,
        longitude: 73.8560,
        online: false,
    },
    Device {
        id: "dev-mb-001",
        name: "Warehouse ambient",
        kind: "humidity",
        site: "Mumbai warehouse",
        latitude: 19.0760,
        longitude: 72.8777,
        online: true,
    },
    Device {
        id: "dev-mb-002",
        name: "Dock door meter",
        kind: "power",
        site: "Mumbai warehouse",
        latitude: 19.0765,
        longitude: 72.8781,
        online: true,
    },
    Device {
        id: "dev-bl-001",
        name: "Server room rack",
        kind: "temperature",
        site: "Bengaluru office",
        latitude: 12.9716,
        longitude: 77.5946,
        online: true,
    },
];

/// One measurable quantity. Ranges are in tenths of a unit so every
/// derived value stays integral until display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub min_tenths: i64,
    pub max_tenths: i64,
}

pub const METRICS: &[Metric] = &[
    Metric {
        key: "temperature",
        label: "Temperature",
        unit: "°C",
        min_tenths: 150,
        max_tenths: 420,
    },
    Metric {
        key: "humidity",
        label: "Humidity",
        unit: "%",
        min_tenths: 250,
        max_tenths: 880,
    },
    Metric {
        key: "vibration",
        label: "Vibration",
        unit: "mm/s",
        min_tenths: 2,
        max_tenths: 115,
    },
    Metric {
        key: "power",
        label: "Power draw",
        unit: "kW",
        min_tenths: 6,
        max_tenths: 92,
    },
];

pub fn metric(key: &str) -> Option<&'static Metric> {
    METRICS.iter().find(|m| m.key == key)
}

// splitmix64 finalizer; keyed, stateless, identical on wasm and native.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn seed_for(device_id: &str, metric_key: &str) -> u64 {
    let digest = Sha256::digest(format!("{}#{}", device_id, metric_key).as_bytes());
    u64::from_le_bytes(digest[..8].try_into().unwrap_or([0; 8]))
}

/// Reading at hour `index` for a device and metric, in tenths of the
/// metric's unit. A daily triangle wave plus keyed noise, clamped to the
/// metric range.
pub fn sample_tenths(device_id: &str, metric_key: &str, index: u64) -> i64 {
    let Some(metric) = metric(metric_key) else {
        return 0;
    };
    let span = metric.max_tenths - metric.min_tenths;
    let seed = seed_for(device_id, metric_key);

    let hour = (index % 24) as i64;
    // Peaks mid-afternoon, troughs before dawn.
    let wave = (12 - (hour - 14).rem_euclid(24).min(24 - (hour - 14).rem_euclid(24))) * span / 36;
    let noise = (mix(seed ^ index) % (span / 4 + 1).unsigned_abs()) as i64;

    (metric.min_tenths + span / 4 + wave + noise).clamp(metric.min_tenths, metric.max_tenths)
}

/// Hourly series ending "now", oldest first.
pub fn series_tenths(device_id: &str, metric_key: &str, len: usize) -> Vec<i64> {
    (0..len as u64)
        .map(|i| sample_tenths(device_id, metric_key, i))
        .collect()
}

/// Week-by-hour intensity grid for the heatmap: 7 rows (days) of 24
/// columns (hours), each cell 0..=100.
pub fn heatmap_grid(device_id: &str, metric_key: &str) -> Vec<Vec<u8>> {
    let Some(metric) = metric(metric_key) else {
        return vec![vec![0; 24]; 7];
    };
    let span = (metric.max_tenths - metric.min_tenths).max(1);
    (0..7u64)
        .map(|day| {
            (0..24u64)
                .map(|hour| {
                    let v = sample_tenths(device_id, metric_key, day * 24 + hour);
                    (((v - metric.min_tenths) * 100) / span).clamp(0, 100) as u8
                })
                .collect()
        })
        .collect()
}

/// Renders tenths as a display value, e.g. `234` with `°C` becomes
/// `23.4 °C`.
pub fn format_tenths(tenths: i64, unit: &str) -> String {
    let sign = if tenths < 0 { "-" } else { "" };
    let abs = tenths.abs();
    format!("{}{}.{} {}", sign, abs / 10, abs % 10, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_ids_are_unique() {
        let mut ids: Vec<_> = fleet().iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), fleet().len());
    }

    #[test]
    fn samples_are_deterministic() {
        let a = series_tenths("dev-pn-001", "temperature", 48);
        let b = series_tenths("dev-pn-001", "temperature", 48);
        assert_eq!(a, b);
    }

    #[test]
    fn different_devices_get_different_series() {
        let a = series_tenths("dev-pn-001", "temperature", 24);
        let b = series_tenths("dev-bl-001", "temperature", 24);
        assert_ne!(a, b);
    }

    #[test]
    fn samples_stay_inside_the_metric_range() {
        for metric in METRICS {
            for device in fleet() {
                for v in series_tenths(device.id, metric.key, 72) {
                    assert!(
                        (metric.min_tenths..=metric.max_tenths).contains(&v),
                        "{} out of range for {}/{}",
                        v,
                        device.id,
                        metric.key
                    );
                }
            }
        }
    }

    #[test]
    fn heatmap_is_seven_days_by_24_hours() {
        let grid = heatmap_grid("dev-mb-001", "humidity");
        assert_eq!(grid.len(), 7);
        for row in &grid {
            assert_eq!(row.len(), 24);
            for &cell in row {
                assert!(cell <= 100);
            }
        }
    }

    #[test]
    fn unknown_metric_yields_a_flat_grid() {
        let grid = heatmap_grid("dev-pn-001", "loudness");
        assert!(grid.iter().flatten().all(|&c| c == 0));
    }

    #[test]
    fn tenths_formatting() {
        assert_eq!(format_tenths(234, "°C"), "23.4 °C");
        assert_eq!(format_tenths(-15, "°C"), "-1.5 °C");
        assert_eq!(format_tenths(9, "kW"), "0.9 kW");
    }
}
