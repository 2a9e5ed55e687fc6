use std::time::Duration;

use crate::config::{DEFAULT_CLEAR_DELAY_MS, DEFAULT_MAX_HEIGHT};

/// Presentation and timing options, fixed for a controller's lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOptions {
    /// Glyph drawn at the start of each row
    pub left_icon: Option<String>,
    /// Glyph drawn at the end of each row
    pub right_icon: Option<String>,
    /// Style text applied after the built-in row style
    pub custom_style: Option<String>,
    /// How long a focus-loss waits before clearing the list
    pub clear_delay: Duration,
    /// Rows shown before the list scrolls
    pub max_height: u16,
}

impl Default for DropdownOptions {
    fn default() -> Self {
        Self {
            left_icon: None,
            right_icon: None,
            custom_style: None,
            clear_delay: Duration::from_millis(DEFAULT_CLEAR_DELAY_MS),
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl DropdownOptions {
    pub fn with_left_icon(mut self, icon: impl Into<String>) -> Self {
        self.left_icon = Some(icon.into());
        self
    }

    pub fn with_right_icon(mut self, icon: impl Into<String>) -> Self {
        self.right_icon = Some(icon.into());
        self
    }

    pub fn with_custom_style(mut self, style: impl Into<String>) -> Self {
        self.custom_style = Some(style.into());
        self
    }

    pub fn with_clear_delay(mut self, delay: Duration) -> Self {
        self.clear_delay = delay;
        self
    }

    pub fn with_max_height(mut self, rows: u16) -> Self {
        self.max_height = rows.max(1);
        self
    }
}
