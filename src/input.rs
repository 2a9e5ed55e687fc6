//! Attached input targets
//!
//! The controller only needs to read the line count once (to refuse
//! multi-line editors) and to write a committed candidate back.

use tui_textarea::TextArea;

/// A single-line text input the dropdown attaches to
pub trait InputTarget {
    /// Current text of the input
    fn value(&self) -> String;

    /// Replace the whole text of the input
    fn set_value(&mut self, value: &str);

    /// Number of lines the input currently holds
    fn line_count(&self) -> usize {
        1
    }
}

/// Minimal string-backed input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInput {
    value: String,
}

impl LineInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl InputTarget for LineInput {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

impl InputTarget for TextArea<'_> {
    fn value(&self) -> String {
        self.lines().join("\n")
    }

    fn set_value(&mut self, value: &str) {
        self.select_all();
        self.cut();
        self.insert_str(value);
    }

    fn line_count(&self) -> usize {
        self.lines().len()
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;
