//! Tests for input targets

use super::*;

#[test]
fn test_line_input_set_value_replaces_text() {
    let mut input = LineInput::new("ca");
    input.set_value("car");
    assert_eq!(input.value(), "car");
    assert_eq!(input.line_count(), 1);
}

#[test]
fn test_textarea_set_value_replaces_text() {
    let mut textarea = TextArea::default();
    textarea.insert_str("ca");

    textarea.set_value("car");

    assert_eq!(InputTarget::value(&textarea), "car");
    assert_eq!(textarea.cursor(), (0, 3));
}

#[test]
fn test_textarea_set_value_on_empty_input() {
    let mut textarea = TextArea::default();
    textarea.set_value("dog");
    assert_eq!(InputTarget::value(&textarea), "dog");
}

#[test]
fn test_textarea_reports_line_count() {
    let textarea = TextArea::new(vec!["one".to_string(), "two".to_string()]);
    assert_eq!(textarea.line_count(), 2);
}
