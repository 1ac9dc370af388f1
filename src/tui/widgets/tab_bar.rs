//! Tab bar widget: one button per dashboard tab, active one highlighted.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::Tab;

/// Renders the tab buttons in [`Tab::all`] order.
///
/// Display format: ` F1 Dashboard │ F2 Form │ F3 About Us `, with the active
/// tab in black on cyan and the others in dark gray.
#[mutants::skip]
pub fn draw_tab_bar(active: Tab, frame: &mut Frame, area: Rect) {
    let active_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let inactive_style = Style::default().fg(Color::DarkGray);
    let separator = Style::default().fg(Color::DarkGray);

    let mut spans: Vec<Span> = Vec::new();
    for (i, tab) in Tab::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("\u{2502}", separator));
        }
        let style = if *tab == active {
            active_style
        } else {
            inactive_style
        };
        spans.push(Span::styled(format!(" F{} {} ", i + 1, tab.label()), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
