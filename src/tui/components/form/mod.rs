//! # Form Component
//!
//! The apartment entry form: one field per attribute, Tab/arrow keys to
//! move focus, Left/Right to adjust the slider-style fields, Enter to
//! submit the whole thing as a [`RecordDraft`].
//!
//! ## State Management
//!
//! Field buffers are internal state. Bounds come from the record module,
//! default values from the resolved config. The form never talks to the
//! store: it emits `FormEvent::Submit` and the event loop runs the draft
//! through the reducer. On success the loop calls [`Form::reset`]; on a
//! validation failure it does nothing, so the user's input is preserved.

mod field;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::config::FormDefaults;
use crate::core::record::{AGE_RANGE, FLOOR_RANGE, RATING_RANGE, RecordDraft};
use crate::tui::event::TuiEvent;
use crate::tui::{Component, EventHandler};

use field::{NumberField, Stepper, TextField};

/// High-level events emitted by the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// User pressed Enter; the draft is ready for the reducer.
    Submit(RecordDraft),
    /// A field changed (parent only needs this for redraw).
    ContentChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Rent,
    StationMin,
    Floor,
    Age,
    Sunlight,
    Noise,
    Note,
}

impl FieldId {
    const ORDER: [FieldId; 8] = [
        FieldId::Name,
        FieldId::Rent,
        FieldId::StationMin,
        FieldId::Floor,
        FieldId::Age,
        FieldId::Sunlight,
        FieldId::Noise,
        FieldId::Note,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> FieldId {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> FieldId {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Label column width inside the form block.
const LABEL_WIDTH: u16 = 10;
/// Row of the note body within the block's inner area.
const NOTE_BODY_ROW: u16 = 8;

pub struct Form {
    pub focus: FieldId,
    /// Prop: false while an overlay owns the keyboard.
    pub active: bool,
    name: TextField,
    rent: NumberField,
    station_min: NumberField,
    floor: Stepper,
    age: Stepper,
    sunlight: Stepper,
    noise: Stepper,
    note: TextField,
}

impl Form {
    pub fn new(defaults: &FormDefaults) -> Self {
        Self {
            focus: FieldId::Name,
            active: true,
            name: TextField::new(false),
            rent: NumberField::new(defaults.rent),
            station_min: NumberField::new(defaults.station_min),
            floor: Stepper::new(defaults.floor.into(), FLOOR_RANGE),
            age: Stepper::new(defaults.age.into(), AGE_RANGE),
            sunlight: Stepper::new(defaults.sunlight.into(), RATING_RANGE),
            noise: Stepper::new(defaults.noise.into(), RATING_RANGE),
            note: TextField::new(true),
        }
    }

    /// Return every field to its configured default and refocus the name.
    /// Called by the event loop on `Effect::ResetForm`, never from here.
    pub fn reset(&mut self, defaults: &FormDefaults) {
        self.name.clear();
        self.rent.set(defaults.rent);
        self.station_min.set(defaults.station_min);
        self.floor.set(defaults.floor.into());
        self.age.set(defaults.age.into());
        self.sunlight.set(defaults.sunlight.into());
        self.noise.set(defaults.noise.into());
        self.note.clear();
        self.focus = FieldId::Name;
    }

    /// Snapshot the current field values as a draft for the reducer.
    pub fn draft(&self) -> RecordDraft {
        RecordDraft {
            name: self.name.buffer.clone(),
            rent: self.rent.value(),
            station_min: self.station_min.value(),
            floor: self.floor.value() as i32,
            sunlight: self.sunlight.value() as u8,
            noise: self.noise.value() as u8,
            age: self.age.value() as u32,
            note: self.note.buffer.clone(),
        }
    }

    fn focused_text(&mut self) -> Option<&mut TextField> {
        match self.focus {
            FieldId::Name => Some(&mut self.name),
            FieldId::Note => Some(&mut self.note),
            _ => None,
        }
    }

    fn focused_number(&mut self) -> Option<&mut NumberField> {
        match self.focus {
            FieldId::Rent => Some(&mut self.rent),
            FieldId::StationMin => Some(&mut self.station_min),
            _ => None,
        }
    }

    fn focused_stepper(&mut self) -> Option<&mut Stepper> {
        match self.focus {
            FieldId::Floor => Some(&mut self.floor),
            FieldId::Age => Some(&mut self.age),
            FieldId::Sunlight => Some(&mut self.sunlight),
            FieldId::Noise => Some(&mut self.noise),
            _ => None,
        }
    }

    fn row_line(&self, id: FieldId, label: &str, value: Vec<Span<'static>>) -> Line<'static> {
        let focused = self.active && self.focus == id;
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut spans = vec![Span::styled(
            format!("{label:<width$}", width = LABEL_WIDTH as usize),
            label_style,
        )];
        spans.extend(value);
        Line::from(spans)
    }

    fn stepper_spans(value: i64, preview: Option<String>) -> Vec<Span<'static>> {
        let mut spans = vec![Span::raw(format!("◂ {value:>2} ▸"))];
        if let Some(preview) = preview {
            spans.push(Span::styled(
                format!("  {preview}"),
                Style::default().fg(Color::Yellow),
            ));
        }
        spans
    }

    /// Screen cell for the terminal cursor, relative to the block's inner
    /// area. Only text-entry fields place a cursor. The note cursor is
    /// located within the same wrapped layout the render pass draws, so
    /// it stays on the glyph being edited when lines wrap.
    fn cursor_cell(&self, wrap_width: usize) -> Option<(u16, u16)> {
        match self.focus {
            FieldId::Name => {
                let (cx, _) = self.name.cursor_cell();
                Some((LABEL_WIDTH + cx, 0))
            }
            FieldId::Rent => Some((LABEL_WIDTH + self.rent.text().len() as u16, 1)),
            FieldId::StationMin => Some((LABEL_WIDTH + self.station_min.text().len() as u16, 2)),
            FieldId::Note => {
                let (cx, cy) = wrapped_cursor(&self.note.buffer, self.note.cursor, wrap_width);
                Some((cx, NOTE_BODY_ROW + cy))
            }
            _ => None,
        }
    }
}

/// Locate a byte cursor within the wrapped layout `textwrap::wrap`
/// produces for `buffer`, as (column, row) in display cells.
///
/// Wrapping only drops whitespace at break points, so each wrapped line
/// occurs in order in the original text; a cursor that falls in dropped
/// whitespace maps to the start of the following line.
fn wrapped_cursor(buffer: &str, cursor: usize, wrap_width: usize) -> (u16, u16) {
    let lines = textwrap::wrap(buffer, wrap_width.max(1));
    let mut search = 0;
    for (row, line) in lines.iter().enumerate() {
        let Some(offset) = buffer[search..].find(line.as_ref()) else {
            break;
        };
        let start = search + offset;
        let end = start + line.len();
        search = end;
        if cursor <= end {
            let col = buffer[start..cursor.max(start)].width();
            return (col as u16, row as u16);
        }
    }
    let row = lines.len().saturating_sub(1);
    let col = lines.last().map(|l| l.width()).unwrap_or(0);
    (col as u16, row as u16)
}

impl Component for Form {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" New viewing ")
            .title_bottom(Line::from(" Enter Add  Tab Field  ^D Delete  ^L Clear ").centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            self.row_line(
                FieldId::Name,
                "Name",
                vec![Span::raw(self.name.buffer.clone())],
            ),
            self.row_line(
                FieldId::Rent,
                "Rent",
                vec![Span::raw(self.rent.text().to_string())],
            ),
            self.row_line(
                FieldId::StationMin,
                "Station",
                vec![
                    Span::raw(self.station_min.text().to_string()),
                    Span::styled(" min walk", Style::default().fg(Color::DarkGray)),
                ],
            ),
            self.row_line(
                FieldId::Floor,
                "Floor",
                Self::stepper_spans(self.floor.value(), None),
            ),
            self.row_line(
                FieldId::Age,
                "Age",
                Self::stepper_spans(self.age.value(), None),
            ),
            self.row_line(
                FieldId::Sunlight,
                "Sunlight",
                Self::stepper_spans(
                    self.sunlight.value(),
                    Some("★".repeat(self.sunlight.value() as usize)),
                ),
            ),
            self.row_line(
                FieldId::Noise,
                "Noise",
                Self::stepper_spans(
                    self.noise.value(),
                    Some("▮".repeat(self.noise.value() as usize)),
                ),
            ),
            self.row_line(FieldId::Note, "Note", vec![Span::styled(
                "(Ctrl+J for newline)",
                Style::default().fg(Color::DarkGray),
            )]),
        ];
        let wrap_width = inner.width.max(1) as usize;
        for note_line in textwrap::wrap(&self.note.buffer, wrap_width) {
            lines.push(Line::from(note_line.into_owned()));
        }

        frame.render_widget(Paragraph::new(lines), inner);

        if self.active
            && let Some((cx, cy)) = self.cursor_cell(wrap_width)
        {
            // Long notes can wrap past the pane; keep the cursor inside it.
            frame.set_cursor_position((
                (inner.x + cx).min(inner.right().saturating_sub(1)),
                (inner.y + cy).min(inner.bottom().saturating_sub(1)),
            ));
        }
    }
}

impl EventHandler for Form {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.focus = self.focus.next();
                Some(FormEvent::ContentChanged)
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.focus = self.focus.prev();
                Some(FormEvent::ContentChanged)
            }
            TuiEvent::Submit => Some(FormEvent::Submit(self.draft())),
            TuiEvent::InputChar(c) => {
                if let Some(text) = self.focused_text() {
                    text.insert(*c);
                    Some(FormEvent::ContentChanged)
                } else if let Some(number) = self.focused_number() {
                    number.insert(*c);
                    Some(FormEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Paste(data) => {
                if let Some(text) = self.focused_text() {
                    text.insert_str(data);
                    Some(FormEvent::ContentChanged)
                } else if let Some(number) = self.focused_number() {
                    for c in data.chars() {
                        number.insert(c);
                    }
                    Some(FormEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Backspace => {
                if let Some(text) = self.focused_text() {
                    text.backspace();
                    Some(FormEvent::ContentChanged)
                } else if let Some(number) = self.focused_number() {
                    number.backspace();
                    Some(FormEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => self.focused_text().map(|text| {
                text.delete();
                FormEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => {
                if let Some(stepper) = self.focused_stepper() {
                    stepper.decrement();
                    Some(FormEvent::ContentChanged)
                } else {
                    self.focused_text().map(|text| {
                        text.cursor_left();
                        FormEvent::ContentChanged
                    })
                }
            }
            TuiEvent::CursorRight => {
                if let Some(stepper) = self.focused_stepper() {
                    stepper.increment();
                    Some(FormEvent::ContentChanged)
                } else {
                    self.focused_text().map(|text| {
                        text.cursor_right();
                        FormEvent::ContentChanged
                    })
                }
            }
            TuiEvent::CursorHome => self.focused_text().map(|text| {
                text.cursor_home();
                FormEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => self.focused_text().map(|text| {
                text.cursor_end();
                FormEvent::ContentChanged
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn form() -> Form {
        Form::new(&FormDefaults::default())
    }

    fn type_str(form: &mut Form, text: &str) {
        for c in text.chars() {
            form.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_new_form_seeds_defaults() {
        let form = form();
        let draft = form.draft();
        assert_eq!(draft.rent, 80_000);
        assert_eq!(draft.station_min, 5);
        assert_eq!(draft.floor, 3);
        assert_eq!(draft.age, 10);
        assert_eq!(draft.sunlight, 7);
        assert_eq!(draft.noise, 3);
        assert!(draft.name.is_empty());
    }

    #[test]
    fn test_tab_cycles_fields() {
        let mut form = form();
        assert_eq!(form.focus, FieldId::Name);
        for _ in 0..8 {
            form.handle_event(&TuiEvent::NextField);
        }
        assert_eq!(form.focus, FieldId::Name);

        form.handle_event(&TuiEvent::PrevField);
        assert_eq!(form.focus, FieldId::Note);
    }

    #[test]
    fn test_steppers_clamp_at_bounds() {
        let mut form = form();
        form.focus = FieldId::Sunlight;
        for _ in 0..20 {
            form.handle_event(&TuiEvent::CursorRight);
        }
        assert_eq!(form.draft().sunlight, 10);

        for _ in 0..20 {
            form.handle_event(&TuiEvent::CursorLeft);
        }
        assert_eq!(form.draft().sunlight, 1);
    }

    #[test]
    fn test_typed_draft_roundtrip() {
        let mut form = form();
        type_str(&mut form, "Maison 102");
        form.focus = FieldId::Rent;
        form.handle_event(&TuiEvent::Backspace);
        form.handle_event(&TuiEvent::Backspace);
        form.handle_event(&TuiEvent::Backspace);
        form.handle_event(&TuiEvent::Backspace);
        form.handle_event(&TuiEvent::Backspace);
        type_str(&mut form, "92000");
        form.focus = FieldId::Note;
        type_str(&mut form, "bright corner unit");

        let draft = form.draft();
        assert_eq!(draft.name, "Maison 102");
        assert_eq!(draft.rent, 92_000);
        assert_eq!(draft.note, "bright corner unit");
    }

    #[test]
    fn test_submit_emits_current_draft() {
        let mut form = form();
        type_str(&mut form, "A");
        match form.handle_event(&TuiEvent::Submit) {
            Some(FormEvent::Submit(draft)) => assert_eq!(draft.name, "A"),
            other => panic!("expected Submit, got {other:?}"),
        }
        // The buffer survives submission; only an explicit reset clears it,
        // so failed validation preserves the user's input.
        assert_eq!(form.draft().name, "A");
    }

    #[test]
    fn test_reset_restores_defaults_and_focus() {
        let mut form = form();
        type_str(&mut form, "Maison 102");
        form.focus = FieldId::Noise;
        form.handle_event(&TuiEvent::CursorRight);

        form.reset(&FormDefaults::default());
        let draft = form.draft();
        assert!(draft.name.is_empty());
        assert_eq!(draft.noise, 3);
        assert_eq!(form.focus, FieldId::Name);
    }

    #[test]
    fn test_letters_ignored_in_number_fields() {
        let mut form = form();
        form.focus = FieldId::Rent;
        type_str(&mut form, "abc");
        assert_eq!(form.draft().rent, 80_000);
    }

    #[test]
    fn test_wrapped_cursor_follows_wrap_points() {
        // At width 7 the text wraps as "one two" / "three" / "four".
        let text = "one two three four";
        assert_eq!(wrapped_cursor(text, 0, 7), (0, 0));
        // Cursor on the 't' of "three" lands at the start of row 1.
        assert_eq!(wrapped_cursor(text, 8, 7), (0, 1));
        // End of the buffer is the end of the last wrapped row.
        assert_eq!(wrapped_cursor(text, text.len(), 7), (4, 2));
        // A cursor on whitespace dropped at a break point sticks to the
        // end of its row; one past it starts the next row.
        assert_eq!(wrapped_cursor(text, 13, 7), (5, 1));
        assert_eq!(wrapped_cursor(text, 14, 7), (0, 2));
    }

    #[test]
    fn test_wrapped_cursor_counts_wide_chars() {
        let text = "日当たり";
        let end = text.len();
        assert_eq!(wrapped_cursor(text, end, 20), (8, 0));
    }

    #[test]
    fn test_note_cursor_tracks_wrapped_row() {
        let mut form = form();
        form.focus = FieldId::Note;
        type_str(&mut form, "a fairly long note that wraps onto more rows");

        let (cx, cy) = form.cursor_cell(20).expect("note places a cursor");
        assert!(cy > NOTE_BODY_ROW, "cursor should sit below the first note row");
        assert!((cx as usize) < 20, "cursor column must stay inside the wrap width");
    }

    #[test]
    fn test_render_shows_labels() {
        let backend = TestBackend::new(44, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut form = form();

        terminal.draw(|f| form.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Name"));
        assert!(text.contains("Sunlight"));
        assert!(text.contains("80000"));
    }
}
