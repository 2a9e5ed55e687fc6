use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::state::{App, Focus};
use crate::controller::FocusDirective;
use crate::widgets::popup;

impl App {
    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::FocusLost => self.blur_input(),
            Event::Paste(text) if self.focus == Focus::InputField => {
                // Single-line input: drop line breaks from pasted text
                let text = text.replace(['\r', '\n'], " ");
                self.edit_input(|textarea| {
                    textarea.insert_str(&text);
                });
            }
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                match self.focus {
                    Focus::InputField => self.blur_input(),
                    Focus::Outside => self.focus_input(),
                }
                return;
            }
            _ => {}
        }

        if self.focus != Focus::InputField || inserts_newline(&key) {
            return;
        }

        self.edit_input(|textarea| {
            textarea.input(key);
        });
    }

    /// Mouse routing
    ///
    /// The dropdown sees every event first. A press it claims keeps input
    /// focus; any other press outside the input blurs it.
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let action = self.autocomplete.renderer_mut().handle_mouse(mouse);
        let directive = action.map(|action| self.autocomplete.handle_action(action));

        if mouse.kind != MouseEventKind::Down(MouseButton::Left)
            || directive == Some(FocusDirective::KeepFocus)
        {
            return;
        }

        if popup::contains(self.input_area, mouse.column, mouse.row) {
            self.focus_input();
        } else {
            self.blur_input();
        }
    }

    /// Apply an edit and report a changed value to the controller
    fn edit_input(&mut self, edit: impl FnOnce(&mut tui_textarea::TextArea<'static>)) {
        let before = self.query();
        edit(self.autocomplete.input_mut());
        let after = self.query();

        if before != after {
            self.status.borrow_mut().take();
            self.autocomplete.on_query_changed(&after);
        }
    }

    fn focus_input(&mut self) {
        self.focus = Focus::InputField;
    }

    fn blur_input(&mut self) {
        if self.focus == Focus::InputField {
            self.focus = Focus::Outside;
            self.autocomplete.on_input_focus_lost();
        }
    }
}

/// Keys the editor would turn into a line break
fn inserts_newline(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
