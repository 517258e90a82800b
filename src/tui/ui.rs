//! Frame layout: title bar across the top, entry form on the left,
//! comparison pane on the right, delete overlay above everything when
//! open.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::components::{Comparison, DeletePicker, TitleBar};
use crate::tui::{Component, TuiState};

/// Width of the form column; the comparison pane takes the rest.
const FORM_WIDTH: u16 = 44;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());
    let [form_area, comparison_area] =
        Layout::horizontal([Length(FORM_WIDTH), Min(0)]).areas(main_area);

    TitleBar {
        count: app.store.len(),
        status_message: app.status_message.clone(),
    }
    .render(frame, title_area);

    tui.form.render(frame, form_area);

    Comparison::new(&mut tui.comparison, app.store.records(), &app.config.currency)
        .render(frame, comparison_area);

    if let Some(picker) = &mut tui.delete_picker {
        DeletePicker::new(picker).render(frame, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::report;
    use crate::test_support::{test_app, test_draft};
    use crate::tui::components::DeletePickerState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_empty() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new(&app.config.defaults);

        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("naiken"));
        assert!(text.contains("New viewing"));
        assert!(text.contains("No apartments recorded yet"));
    }

    #[test]
    fn test_draw_ui_with_records_and_picker() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        update(&mut app, Action::AddRecord(test_draft("Corpo 301")));

        let mut tui = TuiState::new(&app.config.defaults);
        tui.delete_picker = Some(DeletePickerState::new(report::delete_choices(
            app.store.records(),
        )));

        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("(1 viewings)"));
        assert!(text.contains("Delete apartment"));
        assert!(text.contains("1: Corpo 301"));
    }
}
