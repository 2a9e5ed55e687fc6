//! Tests for demo app rendering

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::app::App;
use crate::controller::DropdownOptions;
use crate::provider::ProviderError;
use crate::test_utils::test_helpers::{ScriptedProvider, settle};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 12;

fn screen_lines(app: &mut App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..HEIGHT)
        .map(|y| (0..WIDTH).map(|x| buffer[(x, y)].symbol().to_string()).collect())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_initial_screen_has_input_and_no_dropdown() {
    let mut app = App::new(ScriptedProvider::new(), DropdownOptions::default()).unwrap();

    let lines = screen_lines(&mut app);

    assert!(lines[0].contains("suggestbox"));
    assert!(lines[1].contains("Search"));
    assert!(lines[4].trim().is_empty());
    assert!(lines[HEIGHT as usize - 1].contains("0 suggestions"));
}

#[tokio::test(start_paused = true)]
async fn test_dropdown_rows_render_below_input() {
    let provider = ScriptedProvider::new();
    let mut app = App::new(provider.clone(), DropdownOptions::default().with_left_icon("»")).unwrap();
    app.autocomplete.on_query_changed("ca");
    provider.resolve_ok(0, &["cat", "car"]);
    settle().await;
    app.autocomplete.poll_events();

    let lines = screen_lines(&mut app);

    assert!(lines[4].starts_with('┌'));
    assert!(lines[5].contains("» cat"));
    assert!(lines[6].contains("» car"));
    assert!(lines[7].starts_with('└'));
    assert_eq!(app.input_area.y, 1);
    assert!(lines[HEIGHT as usize - 1].contains("2 suggestions"));
}

#[tokio::test(start_paused = true)]
async fn test_provider_failure_shows_in_footer() {
    let provider = ScriptedProvider::new();
    let mut app = App::new(provider.clone(), DropdownOptions::default()).unwrap();
    app.autocomplete.on_query_changed("ca");
    provider.resolve(0, Err(ProviderError::Failed("offline".to_string())));
    settle().await;
    app.autocomplete.poll_events();

    let lines = screen_lines(&mut app);

    assert!(lines[HEIGHT as usize - 1].contains("offline"));
    // Empty but visible container
    assert!(lines[4].starts_with('┌'));
    assert!(lines[5].starts_with('└'));
}
