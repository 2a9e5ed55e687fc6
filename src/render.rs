//! Rendering seam between the controller and a UI toolkit
//!
//! The controller drives a [`Renderer`] through `show`/`hide` and never looks
//! at what was drawn. Pointer activity flows the other way as
//! [`DropdownAction`]s, which the host forwards to the controller.

mod dropdown;
mod row;
mod style;

pub use dropdown::TuiDropdown;
pub use row::{IconRow, PlainRow, RowRenderer, row_renderer_for};
pub use style::parse_style;

use crate::error::SuggestError;

/// Pointer events reported by a renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownAction {
    /// Pointer went down anywhere on the suggestion surface
    ///
    /// Hosts must deliver this before applying any focus change the same
    /// press would otherwise cause.
    AreaPressed,
    /// A row was clicked (pressed and released on the same row)
    CandidatePressed(String),
}

/// Display surface for the suggestion list
pub trait Renderer {
    /// Claim the mount point; called once when the controller attaches
    fn attach(&mut self) -> Result<(), SuggestError> {
        Ok(())
    }

    /// Replace the rows and make the surface visible
    fn show(&mut self, candidates: &[String]);

    /// Remove all rows and hide the surface
    fn hide(&mut self);

    /// Release the mount point; called once on dispose
    fn detach(&mut self) {}
}
