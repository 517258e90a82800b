//! # Delete Picker Component
//!
//! Centered overlay for removing a mis-entered record. Opened with
//! Ctrl+D, dismissed with Esc. The choices are the `"{id}: {name}"`
//! labels from [`crate::core::report::delete_choices`]; on Enter the
//! highlighted label goes back to the reducer, which parses the id out
//! of it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DeletePickerState` lives in `TuiState` (as an `Option`, None = hidden)
//! - `DeletePicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};

use crate::tui::event::TuiEvent;
use crate::tui::EventHandler;

/// Persistent state for the delete overlay.
pub struct DeletePickerState {
    pub choices: Vec<String>,
    pub selected: usize,
    pub list_state: ListState,
}

impl DeletePickerState {
    pub fn new(choices: Vec<String>) -> Self {
        let mut list_state = ListState::default();
        if !choices.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            choices,
            selected: 0,
            list_state,
        }
    }
}

/// Events emitted by the delete picker.
#[derive(Debug, PartialEq)]
pub enum PickerEvent {
    /// Delete the record behind this selection label.
    Delete(String),
    Dismiss,
}

impl EventHandler for DeletePickerState {
    type Event = PickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PickerEvent> {
        match event {
            TuiEvent::Escape => Some(PickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                if !self.choices.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.choices.is_empty() {
                    self.selected = (self.selected + 1).min(self.choices.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => self
                .choices
                .get(self.selected)
                .map(|label| PickerEvent::Delete(label.clone())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the delete overlay.
pub struct DeletePicker<'a> {
    state: &'a mut DeletePickerState,
}

impl<'a> DeletePicker<'a> {
    pub fn new(state: &'a mut DeletePickerState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 50, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Delete apartment ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Delete  Esc Cancel ").centered())
            .padding(Padding::horizontal(1));

        if self.state.choices.is_empty() {
            let empty = Paragraph::new("Nothing to delete.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .choices
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::styled(label.clone(), style))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
