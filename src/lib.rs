//! Terminal vehicle-data entry form.
//!
//! A three-tab dashboard (Dashboard / Form / About Us) around a schema-driven
//! form whose values are posted as JSON to a local vehicle service.

pub mod client;
pub mod config;
pub mod logging;
pub mod model;
pub mod tui;
