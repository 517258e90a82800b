//! # Comparison Component
//!
//! Scrollable view of the ranked comparison: summary statistics on top,
//! then one table row per record, best score first. The ranking itself
//! comes from [`crate::core::report`]; this component only turns it into
//! widgets.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ComparisonState` (scroll offset) lives in `TuiState`
//! - `Comparison` is created each frame with borrowed records

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::UnicodeWidthStr;

use crate::core::record::Record;
use crate::core::report::{self, Medal, RankedRow, Report, Summary};
use crate::tui::event::TuiEvent;
use crate::tui::{Component, EventHandler};

/// Lines occupied by the summary block, including its trailing blank.
const SUMMARY_HEIGHT: u16 = 4;

/// Scroll state for the comparison pane. Persisted in `TuiState`.
#[derive(Default)]
pub struct ComparisonState {
    pub scroll_state: ScrollViewState,
}

impl EventHandler for ComparisonState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        Some(())
    }
}

/// Transient render wrapper over the persistent scroll state.
pub struct Comparison<'a> {
    state: &'a mut ComparisonState,
    records: &'a [Record],
    currency: &'a str,
}

impl<'a> Comparison<'a> {
    pub fn new(state: &'a mut ComparisonState, records: &'a [Record], currency: &'a str) -> Self {
        Self {
            state,
            records,
            currency,
        }
    }

    fn summary_lines(&self, summary: &Summary) -> Vec<Line<'static>> {
        let label = Style::default().fg(Color::DarkGray);
        vec![
            Line::from(vec![
                Span::styled("Apartments   ", label),
                Span::raw(summary.count.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Average rent ", label),
                Span::raw(format!("{}{}", self.currency, group_digits(summary.avg_rent))),
            ]),
            Line::from(vec![
                Span::styled("Top pick     ", label),
                Span::styled(
                    summary.top_name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" ({:.1})", summary.top_score)),
            ]),
        ]
    }

    /// Returns the row widget plus its height (2 when a note snippet is
    /// shown under the name).
    fn table_row(&self, row: &RankedRow<'_>) -> (Row<'static>, u16) {
        let record = row.record;
        let rank_style = match row.medal {
            Some(Medal::Gold) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Some(Medal::Silver) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            Some(Medal::Bronze) => Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
            None => Style::default().fg(Color::DarkGray),
        };

        let mut name_lines = vec![Line::from(Span::styled(
            record.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if !record.note.is_empty() {
            name_lines.push(Line::from(Span::styled(
                truncate_str(record.note.lines().next().unwrap_or(""), 18),
                Style::default().fg(Color::DarkGray),
            )));
        }
        let height = name_lines.len() as u16;

        let row_widget = Row::new(vec![
            Cell::from(Span::styled(format!("{:>2}", row.rank), rank_style)),
            Cell::from(Text::from(name_lines)),
            Cell::from(format!("{}{}", self.currency, group_digits(record.rent))),
            Cell::from(format!("{} min", record.station_min)),
            Cell::from(format!("{}F", record.floor)),
            Cell::from(Span::styled(
                "★".repeat(record.sunlight as usize),
                Style::default().fg(Color::Yellow),
            )),
            Cell::from("♪".repeat(10usize.saturating_sub(record.noise as usize))),
            Cell::from(format!("{}y", record.age)),
            Cell::from(Span::styled(
                format!("{:.1}", record.score),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Cell::from(Span::styled(
                record.added.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .height(height);

        (row_widget, height)
    }
}

const TABLE_WIDTHS: [Constraint; 10] = [
    Constraint::Length(2),  // rank
    Constraint::Min(14),    // name + note
    Constraint::Length(9),  // rent
    Constraint::Length(6),  // station walk
    Constraint::Length(4),  // floor
    Constraint::Length(10), // sunlight
    Constraint::Length(10), // quietness
    Constraint::Length(4),  // age
    Constraint::Length(5),  // score
    Constraint::Length(11), // added
];

impl Component for Comparison<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Comparison ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match report::build_report(self.records) {
            Report::Empty => {
                let empty = Paragraph::new("No apartments recorded yet.\nFill in the form and press Enter.")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center);
                frame.render_widget(empty, inner);
            }
            Report::Ranked { summary, rows } => {
                let mut table_rows = Vec::with_capacity(rows.len());
                let mut rows_height: u16 = 0;
                for row in &rows {
                    let (widget, height) = self.table_row(row);
                    table_rows.push(widget);
                    rows_height += height;
                }
                // header + rows, below the summary block
                let table_height = rows_height + 1;
                let content_height = SUMMARY_HEIGHT + table_height;
                let content_width = inner.width.saturating_sub(1);

                let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
                    .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
                    .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

                scroll_view.render_widget(
                    Paragraph::new(self.summary_lines(&summary)),
                    Rect::new(0, 0, content_width, SUMMARY_HEIGHT),
                );

                let header = Row::new(vec![
                    "#", "Name", "Rent", "Walk", "Flr", "Sun", "Quiet", "Age", "Score", "Added",
                ])
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::UNDERLINED));

                let table = Table::new(table_rows, TABLE_WIDTHS).header(header);
                scroll_view.render_widget(
                    table,
                    Rect::new(0, SUMMARY_HEIGHT, content_width, table_height),
                );

                frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
            }
        }
    }
}

/// Insert thousands separators: 82501 → "82,501".
fn group_digits(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Truncate to `max_width` display cells, appending "…" when cut.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.to_string().width();
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
