//! Tests for row strategies

use super::*;

fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn test_plain_row_is_candidate_text() {
    let line = PlainRow.render("car", 20);
    assert_eq!(line_text(&line), "car");
}

#[test]
fn test_plain_row_truncates_to_width() {
    let line = PlainRow.render("caterpillar", 5);
    assert_eq!(line_text(&line), "cater");
}

#[test]
fn test_truncate_respects_double_width_chars() {
    // Each CJK char is two columns wide
    let line = PlainRow.render("猫猫猫", 5);
    assert_eq!(line_text(&line), "猫猫");
}

#[test]
fn test_left_icon_prefixes_row() {
    let row = IconRow {
        left: Some(">".to_string()),
        right: None,
    };
    assert_eq!(line_text(&row.render("cat", 20)), "> cat");
}

#[test]
fn test_right_icon_is_right_aligned() {
    let row = IconRow {
        left: None,
        right: Some("*".to_string()),
    };
    let text = line_text(&row.render("cat", 10));
    assert_eq!(text, "cat      *");
    assert_eq!(text.width(), 10);
}

#[test]
fn test_both_icons_leave_room_for_text() {
    let row = IconRow {
        left: Some("<".to_string()),
        right: Some(">".to_string()),
    };
    let text = line_text(&row.render("caterpillar", 9));
    assert_eq!(text, "< cater >");
}

#[test]
fn test_row_renderer_for_picks_plain_without_icons() {
    let renderer = row_renderer_for(&DropdownOptions::default());
    assert_eq!(line_text(&renderer.render("dog", 10)), "dog");
}

#[test]
fn test_row_renderer_for_picks_icons_when_configured() {
    let options = DropdownOptions::default().with_left_icon("#");
    let renderer = row_renderer_for(&options);
    assert_eq!(line_text(&renderer.render("dog", 10)), "# dog");
}
