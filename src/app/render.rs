use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::{App, Focus, input_block};

const HELP_TEXT: &str = "type to search · click a suggestion · Tab/click elsewhere to leave · Esc quits";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Input field
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

        self.render_title(frame, layout[0]);
        self.render_input_field(frame, layout[1]);
        self.render_footer(frame, layout[3]);

        // Dropdown last so it layers over the body
        self.input_area = layout[1];
        self.autocomplete
            .renderer_mut()
            .render(frame, layout[1]);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(
                " suggestbox ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(title), area);
    }

    fn render_input_field(&mut self, frame: &mut Frame, area: Rect) {
        let focus = self.focus;
        let textarea = self.autocomplete.input_mut();
        textarea.set_block(input_block(focus));
        if focus == Focus::InputField {
            textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        } else {
            textarea.set_cursor_style(Style::default());
        }
        frame.render_widget(&*textarea, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let status = self.status.borrow();
        let line = match status.as_deref() {
            Some(message) => Line::from(Span::styled(
                format!(" {}", message),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(Span::styled(
                format!(" {} suggestions", self.autocomplete.suggestions().len()),
                Style::default().fg(Color::DarkGray),
            )),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
