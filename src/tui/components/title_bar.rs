//! # TitleBar Component
//!
//! Single-line status bar: app name, how many apartments are recorded,
//! and the status message from the last action. Stateless — all three
//! values arrive as props from the event loop.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::Component;

pub struct TitleBar {
    /// Number of records currently in the store.
    pub count: usize,
    /// Outcome of the last action (add/delete/clear/validation).
    pub status_message: String,
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                " naiken ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("({} viewings) ", self.count),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("| "),
            Span::raw(self.status_message.clone()),
        ]);
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_shows_count_and_status() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut title_bar = TitleBar {
            count: 2,
            status_message: "Added Maison 102 (score 6.0)".to_string(),
        };

        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("(2 viewings)"));
        assert!(text.contains("Added Maison 102"));
    }
}
