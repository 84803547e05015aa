//! Interactive dashboard widgets.
//!
//! Every widget here runs on local component state and the demo fleet in
//! [`crate::content::devices`]. Nothing is persisted and nothing talks to
//! the backend; these are the product's workbench surfaces.

mod comparison;
mod heatmap;
mod report_builder;
mod rule_builder;

pub use comparison::DeviceComparison;
pub use heatmap::TelemetryHeatmap;
pub use report_builder::ReportBuilder;
pub use rule_builder::RuleBuilder;
