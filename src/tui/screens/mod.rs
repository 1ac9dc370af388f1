//! TUI screen implementations, one per dashboard tab.

pub mod about;
pub mod metrics;
pub mod vehicle_form;

pub use about::{AboutState, draw_about};
pub use metrics::{MetricsState, draw_metrics};
pub use vehicle_form::{VehicleFormState, draw_vehicle_form};
