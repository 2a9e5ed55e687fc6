//! Attachable suggestion dropdown for single-line inputs
//!
//! [`Autocomplete`] watches an input's text, asks a [`SuggestionProvider`]
//! for candidates, and drives a [`Renderer`] showing them below the input.
//! The last issued query always wins, a focus loss clears the list after a
//! short delay unless the user is pressing on the list, and every background
//! task dies with the controller.

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod provider;
pub mod render;
pub mod widgets;


pub use controller::{Autocomplete, ControllerEvent, DropdownOptions, FetchState, FocusDirective};
pub use error::SuggestError;
pub use input::{InputTarget, LineInput};
pub use provider::{FnProvider, ProviderError, SuggestionProvider, WordListProvider};
pub use render::{DropdownAction, Renderer, TuiDropdown};
