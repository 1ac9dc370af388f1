//! Reusable TUI widgets.

pub mod form;
pub mod tab_bar;

pub use form::{Form, draw_form};
pub use tab_bar::draw_tab_bar;
