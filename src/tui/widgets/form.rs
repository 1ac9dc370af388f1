//! Schema-driven form widget: one control per [`FieldSpec`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{FIELD_COUNT, FieldId, FieldKind, FieldSpec, FormState, VEHICLE_FIELDS};

/// Number of controls per row when drawing.
const COLUMNS: usize = 3;

/// A form over the vehicle schema with focus and per-field error tracking.
///
/// Every edit writes exactly one field of the underlying [`FormState`].
#[derive(Debug, Clone)]
pub struct Form {
    schema: &'static [FieldSpec; FIELD_COUNT],
    state: FormState,
    errors: [Option<String>; FIELD_COUNT],
    focus: usize,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Creates an empty form over [`VEHICLE_FIELDS`]. Focus starts on the first field.
    pub fn new() -> Self {
        Self {
            schema: &VEHICLE_FIELDS,
            state: FormState::new(),
            errors: Default::default(),
            focus: 0,
        }
    }

    /// Returns the current field values.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns the focused field.
    pub fn focus(&self) -> FieldId {
        self.schema[self.focus].id
    }

    /// Moves focus to a specific field.
    pub fn set_focus(&mut self, id: FieldId) {
        self.focus = id.index();
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.schema.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.schema.len() - 1) % self.schema.len();
    }

    /// Returns the value of a field.
    pub fn value(&self, id: FieldId) -> &str {
        self.state.get(id)
    }

    /// Writes a single field.
    #[cfg(test)]
    pub(crate) fn set_value(&mut self, id: FieldId, value: impl Into<String>) {
        self.state.set(id, value);
    }

    /// Applies a typed character to the focused control.
    ///
    /// Text takes any character. Numbers take digits and `-`, plus `.` unless
    /// the field is whole-number only. Selects jump to the next option
    /// starting with `ch`.
    pub fn insert_char(&mut self, ch: char) {
        let spec = self.schema[self.focus];
        match spec.kind {
            FieldKind::Text => self.push_char(spec.id, ch),
            FieldKind::Number { integer, .. } => {
                if ch.is_ascii_digit() || ch == '-' || (ch == '.' && !integer) {
                    self.push_char(spec.id, ch);
                }
            }
            FieldKind::Select { options } => {
                if let Some(opt) = next_option_with_initial(options, self.state.get(spec.id), ch)
                {
                    self.write(spec.id, opt);
                }
            }
        }
    }

    /// Deletes the last character, or returns a select to its placeholder.
    pub fn delete_char(&mut self) {
        let spec = self.schema[self.focus];
        match spec.kind {
            FieldKind::Select { .. } => self.write(spec.id, ""),
            _ => {
                let mut value = self.state.get(spec.id).to_string();
                value.pop();
                self.write(spec.id, value);
            }
        }
    }

    /// Cycles the focused select through placeholder and options.
    ///
    /// No-op on text and number controls.
    pub fn cycle_option(&mut self, forward: bool) {
        let spec = self.schema[self.focus];
        if let FieldKind::Select { options } = spec.kind {
            let next = cycle_select(options, self.state.get(spec.id), forward);
            self.write(spec.id, next);
        }
    }

    /// Sets an error message on a field.
    pub fn set_error(&mut self, id: FieldId, error: String) {
        self.errors[id.index()] = Some(error);
    }

    /// Returns the error message on a field, if any.
    pub fn error(&self, id: FieldId) -> Option<&str> {
        self.errors[id.index()].as_deref()
    }

    /// Clears all field errors.
    pub fn clear_errors(&mut self) {
        self.errors = Default::default();
    }

    /// Returns `true` if any field has an error set.
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(Option::is_some)
    }

    /// Resets all values and errors, and focuses the first field.
    pub fn reset(&mut self) {
        self.state.reset();
        self.clear_errors();
        self.focus = 0;
    }

    fn push_char(&mut self, id: FieldId, ch: char) {
        let mut value = self.state.get(id).to_string();
        value.push(ch);
        self.write(id, value);
    }

    /// Stores a user edit. An edited field drops its stale error.
    fn write(&mut self, id: FieldId, value: impl Into<String>) {
        self.state.set(id, value);
        self.errors[id.index()] = None;
    }
}

/// Steps through `["", options...]` from `current`, wrapping.
fn cycle_select(options: &'static [&'static str], current: &str, forward: bool) -> &'static str {
    // Slot 0 is the empty placeholder.
    let slots = options.len() + 1;
    let pos = options
        .iter()
        .position(|&o| o == current)
        .map_or(0, |i| i + 1);
    let next = if forward {
        (pos + 1) % slots
    } else {
        (pos + slots - 1) % slots
    };
    if next == 0 { "" } else { options[next - 1] }
}

/// Finds the next option after `current` whose first letter matches `ch`.
fn next_option_with_initial(
    options: &'static [&'static str],
    current: &str,
    ch: char,
) -> Option<&'static str> {
    let start = options
        .iter()
        .position(|&o| o == current)
        .map_or(0, |i| i + 1);
    (0..options.len())
        .map(|offset| options[(start + offset) % options.len()])
        .find(|opt| {
            opt.chars()
                .next()
                .is_some_and(|first| first.eq_ignore_ascii_case(&ch))
        })
}

/// Title for a control: label, range hint for numbers, required marker.
fn control_title(spec: &FieldSpec) -> String {
    match spec.kind {
        FieldKind::Number { min, max, .. } => format!(" {} ({min}-{max}) * ", spec.label),
        _ => format!(" {} * ", spec.label),
    }
}

/// Renders the form as a grid of bordered controls.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let row_height = 3_u16;
    let row_count = form.schema.len().div_ceil(COLUMNS);
    let rows = Layout::vertical(vec![Constraint::Length(row_height); row_count]).split(area);

    for (i, spec) in form.schema.iter().enumerate() {
        let row = rows[i / COLUMNS];
        let cells = Layout::horizontal([Constraint::Ratio(1, COLUMNS as u32); COLUMNS]).split(row);
        let cell = cells[i % COLUMNS];

        let is_focused = i == form.focus;
        let error = form.error(spec.id);
        let border_color = if error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .title(control_title(spec))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let value = form.value(spec.id);
        let mut spans = Vec::new();
        let is_select = matches!(spec.kind, FieldKind::Select { .. });
        if is_select {
            spans.push(Span::styled("\u{25c2} ", Style::default().fg(Color::DarkGray)));
        }
        if value.is_empty() {
            spans.push(Span::styled(
                spec.placeholder(),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::raw(value));
        }
        if is_select {
            spans.push(Span::styled(" \u{25b8}", Style::default().fg(Color::DarkGray)));
        } else if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), cell);

        // Error overlaps the bottom border of the control.
        if let Some(err) = error {
            let err_area = Rect {
                x: cell.x + 1,
                y: cell.y + row_height.saturating_sub(1),
                width: cell.width.saturating_sub(2),
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Span::styled(err, Style::default().fg(Color::Red))),
                err_area,
            );
        }
    }
}
