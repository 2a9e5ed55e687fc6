//! Terminal dropdown adapter
//!
//! Draws the suggestion list below an input with ratatui and turns crossterm
//! mouse events on it into [`DropdownAction`]s.

use ratatui::{
    Frame,
    crossterm::event::{MouseButton, MouseEvent, MouseEventKind},
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem},
};

use super::row::{RowRenderer, row_renderer_for};
use super::style::parse_style;
use super::{DropdownAction, Renderer};
use crate::controller::DropdownOptions;
use crate::error::SuggestError;
use crate::widgets::popup;

const BORDER_HEIGHT: u16 = 2;
const SCROLL_STEP: usize = 1;

/// ratatui implementation of [`Renderer`]
pub struct TuiDropdown {
    rows: Vec<String>,
    visible: bool,
    attached: bool,
    row_renderer: Box<dyn RowRenderer>,
    row_style: Style,
    hover_style: Style,
    max_height: u16,
    scroll: usize,
    hovered: Option<usize>,
    /// Row under the last left-button press, if the press landed on one
    pressed: Option<usize>,
    /// Area drawn in the last frame, used for hit testing
    area: Option<Rect>,
}

impl std::fmt::Debug for TuiDropdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TuiDropdown")
            .field("rows", &self.rows)
            .field("visible", &self.visible)
            .field("attached", &self.attached)
            .field("scroll", &self.scroll)
            .field("area", &self.area)
            .finish_non_exhaustive()
    }
}

impl TuiDropdown {
    pub fn new(options: &DropdownOptions) -> Self {
        let built_in = Style::default().fg(Color::White).bg(Color::Black);
        let row_style = match options.custom_style.as_deref() {
            Some(custom) => built_in.patch(parse_style(custom)),
            None => built_in,
        };

        Self {
            rows: Vec::new(),
            visible: false,
            attached: false,
            row_renderer: row_renderer_for(options),
            row_style,
            hover_style: row_style.bg(Color::DarkGray),
            max_height: options.max_height.max(1),
            scroll: 0,
            hovered: None,
            pressed: None,
            area: None,
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    /// Draw the dropdown below `input_area`
    ///
    /// Nothing is drawn while hidden. An empty visible list still draws its
    /// bordered container.
    pub fn render(&mut self, frame: &mut Frame, input_area: Rect) {
        if !self.visible {
            self.area = None;
            return;
        }

        let shown_rows = self.rows.len().min(self.max_height as usize) as u16;
        let wanted = shown_rows + BORDER_HEIGHT;
        let area = popup::popup_below_anchor(input_area, frame.area(), wanted);
        if area.height == 0 || area.width == 0 {
            self.area = None;
            return;
        }
        self.area = Some(area);
        self.clamp_scroll();

        let inner = popup::inset_rect(area, 1, 1);
        let items: Vec<ListItem> = self
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(inner.height as usize)
            .map(|(i, row)| {
                let style = if Some(i) == self.hovered {
                    self.hover_style
                } else {
                    self.row_style
                };
                ListItem::new(self.row_renderer.render(row, inner.width)).style(style)
            })
            .collect();

        popup::clear_area(frame, area);

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray))
                .style(self.row_style),
        );

        frame.render_widget(list, area);
    }

    /// Translate a mouse event into a dropdown action
    ///
    /// Returns `AreaPressed` for any left press inside the drawn surface and
    /// `CandidatePressed` when the release lands on the row that was pressed.
    /// Wheel events scroll the list and report nothing.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<DropdownAction> {
        let area = self.area?;
        let inside = popup::contains(area, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !inside {
                    self.pressed = None;
                    return None;
                }
                self.pressed = self.row_at(mouse.column, mouse.row);
                Some(DropdownAction::AreaPressed)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let pressed = self.pressed.take()?;
                if inside && self.row_at(mouse.column, mouse.row) == Some(pressed) {
                    self.rows
                        .get(pressed)
                        .cloned()
                        .map(DropdownAction::CandidatePressed)
                } else {
                    None
                }
            }
            MouseEventKind::Moved => {
                self.hovered = if inside {
                    self.row_at(mouse.column, mouse.row)
                } else {
                    None
                };
                None
            }
            MouseEventKind::ScrollDown if inside => {
                self.scroll = self.scroll.saturating_add(SCROLL_STEP);
                self.clamp_scroll();
                None
            }
            MouseEventKind::ScrollUp if inside => {
                self.scroll = self.scroll.saturating_sub(SCROLL_STEP);
                None
            }
            _ => None,
        }
    }

    /// Index of the row drawn at the given cell
    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = popup::inset_rect(self.area?, 1, 1);
        if !popup::contains(inner, column, row) {
            return None;
        }
        let index = self.scroll + (row - inner.y) as usize;
        (index < self.rows.len()).then_some(index)
    }

    fn visible_rows(&self) -> usize {
        self.area
            .map(|area| area.height.saturating_sub(BORDER_HEIGHT) as usize)
            .unwrap_or(self.max_height as usize)
    }

    fn clamp_scroll(&mut self) {
        let max_scroll = self.rows.len().saturating_sub(self.visible_rows());
        self.scroll = self.scroll.min(max_scroll);
    }

    fn reset_interaction(&mut self) {
        self.scroll = 0;
        self.hovered = None;
        self.pressed = None;
    }
}

impl Renderer for TuiDropdown {
    fn attach(&mut self) -> Result<(), SuggestError> {
        if self.attached {
            return Err(SuggestError::MountUnavailable(
                "dropdown is already attached to another input".to_string(),
            ));
        }
        self.attached = true;
        Ok(())
    }

    fn show(&mut self, candidates: &[String]) {
        self.rows = candidates.to_vec();
        self.visible = true;
        self.reset_interaction();
    }

    fn hide(&mut self) {
        self.rows.clear();
        self.visible = false;
        self.area = None;
        self.reset_interaction();
    }

    fn detach(&mut self) {
        self.hide();
        self.attached = false;
    }
}

#[cfg(test)]
#[path = "dropdown_tests.rs"]
mod dropdown_tests;
