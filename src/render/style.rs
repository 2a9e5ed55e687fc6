use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

/// Parse a custom style text such as `"fg=yellow bg=#202020 bold"`
///
/// Tokens are whitespace or `;` separated. Unknown tokens are skipped with a
/// warning.
pub fn parse_style(text: &str) -> Style {
    let mut style = Style::default();

    for token in text
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|t| !t.is_empty())
    {
        match token.split_once('=') {
            Some(("fg", value)) => match Color::from_str(value) {
                Ok(color) => style = style.fg(color),
                Err(_) => log::warn!("Ignoring unknown color '{}' in custom style", value),
            },
            Some(("bg", value)) => match Color::from_str(value) {
                Ok(color) => style = style.bg(color),
                Err(_) => log::warn!("Ignoring unknown color '{}' in custom style", value),
            },
            Some(_) => log::warn!("Ignoring unknown style rule '{}'", token),
            None => match parse_modifier(token) {
                Some((modifier, true)) => style = style.add_modifier(modifier),
                Some((modifier, false)) => style = style.remove_modifier(modifier),
                None => log::warn!("Ignoring unknown style modifier '{}'", token),
            },
        }
    }

    style
}

/// Map a modifier token to its flag; a leading `!` removes it
fn parse_modifier(token: &str) -> Option<(Modifier, bool)> {
    let (name, add) = match token.strip_prefix('!') {
        Some(rest) => (rest, false),
        None => (token, true),
    };
    let modifier = match name.to_ascii_lowercase().as_str() {
        "bold" => Modifier::BOLD,
        "dim" => Modifier::DIM,
        "italic" => Modifier::ITALIC,
        "underlined" | "underline" => Modifier::UNDERLINED,
        "reversed" => Modifier::REVERSED,
        "crossed_out" | "strikethrough" => Modifier::CROSSED_OUT,
        _ => return None,
    };
    Some((modifier, add))
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod style_tests;
