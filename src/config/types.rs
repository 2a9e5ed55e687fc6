// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::controller::DropdownOptions;

/// Default delay before a focus-loss clears the dropdown
pub const DEFAULT_CLEAR_DELAY_MS: u64 = 100;

/// Default number of rows shown before the dropdown scrolls
pub const DEFAULT_MAX_HEIGHT: u16 = 10;

/// Dropdown presentation section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Glyph drawn at the start of every row
    pub left_icon: Option<String>,
    /// Glyph drawn at the end of every row
    pub right_icon: Option<String>,
    /// Style text applied after the built-in row style
    pub custom_style: Option<String>,
    /// Focus-loss clear delay in milliseconds
    pub clear_delay_ms: u64,
    /// Maximum visible rows before scrolling
    pub max_height: u16,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        DropdownConfig {
            left_icon: None,
            right_icon: None,
            custom_style: None,
            clear_delay_ms: DEFAULT_CLEAR_DELAY_MS,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl DropdownConfig {
    /// Convert into controller options
    pub fn to_options(&self) -> DropdownOptions {
        DropdownOptions {
            left_icon: self.left_icon.clone().filter(|s| !s.is_empty()),
            right_icon: self.right_icon.clone().filter(|s| !s.is_empty()),
            custom_style: self.custom_style.clone().filter(|s| !s.trim().is_empty()),
            clear_delay: Duration::from_millis(self.clear_delay_ms),
            max_height: self.max_height.max(1),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dropdown: DropdownConfig,
}
