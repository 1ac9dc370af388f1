//! Actions returned by screen event handlers.

use crossterm::event::KeyEvent;

use crate::model::FormState;

use super::app::Tab;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to switch tabs and start network requests.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Make the given tab visible.
    SelectTab(Tab),
    /// Post this form snapshot to the vehicle service.
    Submit(FormState),
    /// Re-fetch the stored vehicle count.
    RefreshMetrics,
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}
