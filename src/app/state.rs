use std::cell::RefCell;
use std::rc::Rc;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use crate::controller::{Autocomplete, DropdownOptions};
use crate::error::SuggestError;
use crate::provider::SuggestionProvider;
use crate::render::TuiDropdown;

/// Which part of the screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    Outside,
}

/// Demo application state: one input with an attached dropdown
pub struct App {
    pub autocomplete: Autocomplete<TextArea<'static>, TuiDropdown>,
    pub focus: Focus,
    pub should_quit: bool,
    /// Area of the input in the last frame, for click routing
    pub input_area: Rect,
    /// Last provider failure or config warning, shown in the footer
    pub status: Rc<RefCell<Option<String>>>,
}

impl App {
    /// Create the app and attach the dropdown to its input
    ///
    /// Must run inside a tokio runtime.
    pub fn new<P: SuggestionProvider>(
        provider: P,
        options: DropdownOptions,
    ) -> Result<Self, SuggestError> {
        let mut textarea = TextArea::default();
        textarea.set_block(input_block(Focus::InputField));
        textarea.set_cursor_line_style(Style::default());

        let dropdown = TuiDropdown::new(&options);
        let mut autocomplete = Autocomplete::attach(textarea, dropdown, provider, options)?;

        let status = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&status);
        autocomplete.set_error_hook(move |e| {
            *sink.borrow_mut() = Some(e.to_string());
        });

        Ok(Self {
            autocomplete,
            focus: Focus::InputField,
            should_quit: false,
            input_area: Rect::default(),
            status,
        })
    }

    /// Current text of the input
    pub fn query(&self) -> String {
        self.autocomplete.input().lines().join("")
    }

    pub fn set_status(&self, message: impl Into<String>) {
        *self.status.borrow_mut() = Some(message.into());
    }
}

/// Border block for the input, colored by focus
pub(super) fn input_block(focus: Focus) -> Block<'static> {
    let border_color = match focus {
        Focus::InputField => Color::Cyan,
        Focus::Outside => Color::DarkGray,
    };
    Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .border_style(Style::default().fg(border_color))
}
