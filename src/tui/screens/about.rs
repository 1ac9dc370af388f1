//! About screen: what the app does and a scrollable keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::{Action, ScreenState};

static ABOUT_TEXT: &[&str] = &[
    "vehform collects the details of a vehicle and sends them to the",
    "vehicle service as JSON. Every field is required; numbers must be",
    "inside the range shown next to their label.",
];

static GLOBAL_KEYS: &[(&str, &str)] = &[
    ("F1 / F2 / F3", "Dashboard / Form / About Us"),
    ("Ctrl+C", "quit"),
];

static DASHBOARD_KEYS: &[(&str, &str)] = &[
    ("r", "refresh vehicle count"),
    ("1 / 2 / 3", "switch tab"),
    ("\u{2190} / \u{2192}", "previous / next tab"),
    ("q / Esc", "quit"),
];

static FORM_KEYS: &[(&str, &str)] = &[
    ("Tab / \u{2193}", "next field"),
    ("Shift-Tab / \u{2191}", "previous field"),
    ("\u{2190} / \u{2192} / Space", "choose option"),
    ("letter", "jump to option"),
    ("Backspace", "delete / clear choice"),
    ("Enter", "submit"),
    ("Esc", "back to Dashboard"),
];

static ABOUT_KEYS: &[(&str, &str)] = &[("\u{2191} / \u{2193}", "scroll"), ("q / Esc", "quit")];

/// State for the About screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AboutState {
    scroll: u16,
}

impl AboutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Scroll offset to render in a viewport `height` rows tall, so the last
    /// line never scrolls above the bottom of the view.
    pub fn capped_scroll(&self, height: u16) -> u16 {
        self.scroll.min(line_count().saturating_sub(height))
    }
}

fn line_count() -> u16 {
    u16::try_from(build_lines().len()).unwrap_or(u16::MAX)
}

impl ScreenState for AboutState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = (self.scroll + 1).min(line_count().saturating_sub(1));
                Action::None
            }
            KeyCode::Home => {
                self.scroll = 0;
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Builds every line of the About page.
fn build_lines() -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Cyan);

    let mut lines: Vec<Line<'static>> = ABOUT_TEXT.iter().map(|&t| Line::from(t)).collect();

    for (title, keys) in [
        ("Everywhere", GLOBAL_KEYS),
        ("Dashboard", DASHBOARD_KEYS),
        ("Form", FORM_KEYS),
        ("About Us", ABOUT_KEYS),
    ] {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(title, heading)));
        for &(key, desc) in keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<24}"), key_style),
                Span::raw(desc),
            ]));
        }
    }
    lines
}

/// Renders the About screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_about(state: &AboutState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" About Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let scroll = state.capped_scroll(body_area.height);
    let paragraph = Paragraph::new(build_lines()).scroll((scroll, 0));
    frame.render_widget(paragraph, body_area);

    let footer = Paragraph::new(Line::from("\u{2191}/\u{2193}: scroll  q: quit"))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
