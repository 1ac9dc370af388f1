use std::fmt;
use std::time::Duration;

use chrono::Utc;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use serde_json::Value;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

use crate::client::{ClientError, VehicleClient};
use crate::model::FormState;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{
    AboutState, MetricsState, VehicleFormState, draw_about, draw_metrics, draw_vehicle_form,
};
use super::widgets::draw_tab_bar;

/// How long the event loop waits for a key before checking client results.
const TICK: Duration = Duration::from_millis(100);

/// The dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Submission and vehicle counters.
    #[default]
    Metrics,
    /// The vehicle entry form.
    Form,
    /// Description and keybindings.
    About,
}

static ALL_TABS: &[Tab] = &[Tab::Metrics, Tab::Form, Tab::About];

impl Tab {
    /// Returns all tabs in button order.
    pub fn all() -> &'static [Tab] {
        ALL_TABS
    }

    /// Internal identifier.
    pub fn key(self) -> &'static str {
        match self {
            Self::Metrics => "metrics",
            Self::Form => "form",
            Self::About => "about",
        }
    }

    /// Label shown on the tab button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Metrics => "Dashboard",
            Self::Form => "Form",
            Self::About => "About Us",
        }
    }

    fn position(self) -> usize {
        self as usize
    }

    /// The tab to the right, wrapping.
    pub fn next(self) -> Self {
        ALL_TABS[(self.position() + 1) % ALL_TABS.len()]
    }

    /// The tab to the left, wrapping.
    pub fn prev(self) -> Self {
        ALL_TABS[(self.position() + ALL_TABS.len() - 1) % ALL_TABS.len()]
    }
}

#[mutants::skip]
impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Result of a network task, delivered back to the UI loop.
#[derive(Debug)]
pub enum ClientEvent {
    /// A form submission finished.
    Submitted(Result<Value, ClientError>),
    /// A vehicle listing finished.
    Listed(Result<Vec<Value>, ClientError>),
}

/// Top-level application state.
///
/// All three tab views are owned here for the life of the app; switching
/// tabs only changes which one is drawn.
pub struct App {
    active_tab: Tab,
    metrics: MetricsState,
    vehicle_form: VehicleFormState,
    about: AboutState,
    client: VehicleClient,
    runtime: Handle,
    events_tx: UnboundedSender<ClientEvent>,
    events_rx: UnboundedReceiver<ClientEvent>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` on the [`Tab::Metrics`] tab.
    ///
    /// Network requests are spawned on `runtime`.
    pub fn new(client: VehicleClient, runtime: Handle) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            active_tab: Tab::default(),
            metrics: MetricsState::new(),
            vehicle_form: VehicleFormState::new(),
            about: AboutState::new(),
            client,
            runtime,
            events_tx,
            events_rx,
            should_quit: false,
        }
    }

    /// Main event loop: draw → poll key → dispatch → apply client results.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
            self.drain_client_events();
        }
        Ok(())
    }

    /// Renders the tab bar and the active tab.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [tab_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

        draw_tab_bar(self.active_tab, frame, tab_area);
        match self.active_tab {
            Tab::Metrics => draw_metrics(&self.metrics, frame, body_area),
            Tab::Form => draw_vehicle_form(&self.vehicle_form, frame, body_area),
            Tab::About => draw_about(&self.about, frame, body_area),
        }
    }

    /// Handles a key event: global keys first, then the active tab.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if let KeyCode::F(n @ 1..=3) = key.code {
            self.select_tab(ALL_TABS[usize::from(n) - 1]);
            return;
        }

        // The form consumes printable keys and arrows as input.
        if self.active_tab != Tab::Form {
            match key.code {
                KeyCode::Char(ch @ '1'..='3') => {
                    let index = ch as usize - '1' as usize;
                    self.select_tab(ALL_TABS[index]);
                    return;
                }
                KeyCode::Left => {
                    self.select_tab(self.active_tab.prev());
                    return;
                }
                KeyCode::Right => {
                    self.select_tab(self.active_tab.next());
                    return;
                }
                _ => {}
            }
        }

        let action = self.active_screen_mut().handle_key(key);
        self.apply(action);
    }

    fn active_screen_mut(&mut self) -> &mut dyn ScreenState {
        match self.active_tab {
            Tab::Metrics => &mut self.metrics,
            Tab::Form => &mut self.vehicle_form,
            Tab::About => &mut self.about,
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::SelectTab(tab) => self.select_tab(tab),
            Action::Submit(snapshot) => self.spawn_submit(snapshot),
            Action::RefreshMetrics => self.request_vehicle_count(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Makes `tab` the visible tab. Unconditional.
    pub fn select_tab(&mut self, tab: Tab) {
        debug!(from = %self.active_tab, to = %tab, "tab selected");
        self.active_tab = tab;
    }

    /// Starts a background fetch of the stored vehicle count.
    pub fn request_vehicle_count(&mut self) {
        self.metrics.start_refresh();
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = client.list().await;
            let _ = tx.send(ClientEvent::Listed(result));
        });
    }

    /// Posts a snapshot in the background. Overlapping submissions are allowed.
    fn spawn_submit(&mut self, snapshot: FormState) {
        self.metrics.record_sent();
        info!(endpoint = self.client.endpoint(), "submitting vehicle");
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = client.submit(&snapshot).await;
            let _ = tx.send(ClientEvent::Submitted(result));
        });
    }

    /// Applies every client result that has arrived. Returns how many.
    pub fn drain_client_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_client_event(event);
            applied += 1;
        }
        applied
    }

    /// Applies one client result.
    ///
    /// A successful submission clears the form; a failed one is logged and
    /// leaves the form as the user left it.
    pub fn apply_client_event(&mut self, event: ClientEvent) {
        match event {
            ClientEvent::Submitted(Ok(body)) => {
                info!(response = %body, "vehicle submitted");
                self.vehicle_form.reset();
                self.metrics.record_success(Utc::now());
                self.request_vehicle_count();
            }
            ClientEvent::Submitted(Err(e)) => {
                error!(error = %e, "vehicle submission failed");
                self.metrics.record_failure(e.to_string());
            }
            ClientEvent::Listed(Ok(vehicles)) => {
                debug!(count = vehicles.len(), "vehicle list fetched");
                self.metrics.set_vehicle_count(vehicles.len());
            }
            ClientEvent::Listed(Err(e)) => {
                error!(error = %e, "vehicle list fetch failed");
                self.metrics.refresh_failed(e.to_string());
            }
        }
    }

    /// Returns the visible tab.
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Returns `true` if `tab` is the one being drawn.
    pub fn is_visible(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn metrics(&self) -> &MetricsState {
        &self.metrics
    }

    pub fn vehicle_form(&self) -> &VehicleFormState {
        &self.vehicle_form
    }

    pub fn about(&self) -> &AboutState {
        &self.about
    }
}
