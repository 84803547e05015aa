//! Dashboard shell and its tool pages.
//!
//! Everything under /dashboard sits behind `RequireAuth`. The widgets
//! run on the demo fleet; account data (plan, payments) is the only
//! live state.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::hooks::{use_active_plan, use_auth, RequireAuth};
use crate::app::widgets::{DeviceComparison, ReportBuilder, RuleBuilder, TelemetryHeatmap};
use crate::app::Route;
use crate::content::devices;

/// Second-level nav shared by the dashboard pages.
#[component]
pub(crate) fn DashboardNav(active: &'static str) -> Element {
    let tabs: Vec<(&'static str, &'static str, Route)> = vec![
        ("overview", "Overview", Route::Dashboard {}),
        ("rules", "Rules", Route::DashboardRules {}),
        ("reports", "Reports", Route::DashboardReports {}),
        ("compare", "Compare", Route::DashboardCompare {}),
        ("heatmap", "Heatmap", Route::DashboardHeatmap {}),
        ("billing", "Billing", Route::Billing {}),
    ];

    rsx! {
        nav { class: "dashboard-nav", aria_label: "Dashboard sections",
            ul {
                for (id, label, route) in tabs {
                    li {
                        Link {
                            to: route,
                            class: if id == active { "active" },
                            aria_current: if id == active { "page" },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PlanBanner() -> Element {
    let plan = use_active_plan();

    match plan {
        Some(plan) => rsx! {
            p { class: "plan-banner",
                "You're on the "
                strong { "{plan.name}" }
                " plan. "
                Link { to: Route::Billing {}, "Manage billing" }
            }
        },
        None => rsx! {
            p { class: "plan-banner plan-banner-free",
                "You're on the free tier. "
                Link { to: Route::Pricing {}, "Pick a plan" }
                " to unlock alerting and reports for your own fleet."
            }
        },
    }
}

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let first_name = auth
        .user()
        .map(|u| {
            u.name
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string()
        })
        .unwrap_or_default();

    let fleet = devices::fleet();
    let online = fleet.iter().filter(|d| d.online).count();
    let offline = fleet.len() - online;

    let device_rows: Vec<(&'static str, &'static str, &'static str, bool, String)> = fleet
        .iter()
        .map(|d| {
            let latest = devices::metric(d.kind)
                .map(|m| devices::format_tenths(devices::sample_tenths(d.id, d.kind, 23), m.unit))
                .unwrap_or_default();
            (d.name, d.site, d.kind, d.online, latest)
        })
        .collect();

    rsx! {
        Layout {
            title: "Dashboard".to_string(),
            nav_active: "dashboard".to_string(),

            RequireAuth {
                DashboardNav { active: "overview" }

                section { class: "dashboard-header",
                    h1 { "Welcome back, {first_name}" }
                    PlanBanner {}
                }

                section { class: "fleet-summary",
                    div { class: "stat-cards",
                        article { class: "stat-card",
                            strong { class: "stat-value", "{fleet.len()}" }
                            span { class: "stat-label", "devices" }
                        }
                        article { class: "stat-card stat-ok",
                            strong { class: "stat-value", "{online}" }
                            span { class: "stat-label", "online" }
                        }
                        article {
                            class: "stat-card",
                            class: if offline > 0 { "stat-warn" },
                            strong { class: "stat-value", "{offline}" }
                            span { class: "stat-label", "offline" }
                        }
                    }

                    table { class: "fleet-table",
                        thead {
                            tr {
                                th { "Device" }
                                th { "Site" }
                                th { "Measures" }
                                th { "Status" }
                                th { "Last hour" }
                            }
                        }
                        tbody {
                            for (name, site, kind, online, latest) in device_rows {
                                tr {
                                    td { "{name}" }
                                    td { "{site}" }
                                    td { "{kind}" }
                                    td {
                                        if online {
                                            span { class: "status-ok", "online" }
                                        } else {
                                            span { class: "status-err", "offline" }
                                        }
                                    }
                                    td { "{latest}" }
                                }
                            }
                        }
                    }
                }

                section { class: "dashboard-tools",
                    h2 { "Tools" }
                    div { class: "tool-grid",
                        article { class: "tool-card",
                            h3 { Link { to: Route::DashboardRules {}, "Rule builder" } }
                            p { class: "text-muted", "Wire triggers, conditions and actions into alert rules." }
                        }
                        article { class: "tool-card",
                            h3 { Link { to: Route::DashboardReports {}, "Report builder" } }
                            p { class: "text-muted", "Arrange the blocks of the weekly report." }
                        }
                        article { class: "tool-card",
                            h3 { Link { to: Route::DashboardCompare {}, "Compare devices" } }
                            p { class: "text-muted", "Two devices side by side over the last day." }
                        }
                        article { class: "tool-card",
                            h3 { Link { to: Route::DashboardHeatmap {}, "Heatmap" } }
                            p { class: "text-muted", "A week of readings in one grid." }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn DashboardRules() -> Element {
    rsx! {
        Layout {
            title: "Rule builder".to_string(),
            nav_active: "dashboard".to_string(),

            RequireAuth {
                DashboardNav { active: "rules" }
                RuleBuilder {}
            }
        }
    }
}

#[component]
pub fn DashboardReports() -> Element {
    rsx! {
        Layout {
            title: "Report builder".to_string(),
            nav_active: "dashboard".to_string(),

            RequireAuth {
                DashboardNav { active: "reports" }
                ReportBuilder {}
            }
        }
    }
}

#[component]
pub fn DashboardCompare() -> Element {
    rsx! {
        Layout {
            title: "Compare devices".to_string(),
            nav_active: "dashboard".to_string(),

            RequireAuth {
                DashboardNav { active: "compare" }
                DeviceComparison {}
            }
        }
    }
}

#[component]
pub fn DashboardHeatmap() -> Element {
    rsx! {
        Layout {
            title: "Heatmap".to_string(),
            nav_active: "dashboard".to_string(),

            RequireAuth {
                DashboardNav { active: "heatmap" }
                TelemetryHeatmap {}
            }
        }
    }
}
