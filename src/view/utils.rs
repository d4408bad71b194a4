//! Utility functions for rendering UI components

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

pub const ELLIPSIS: char = '…';

/// Shorten text to at most `max_len` characters.
///
/// Text that already fits is returned unchanged; longer text becomes exactly
/// `max_len` characters followed by the ellipsis marker.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let mut shortened: String = text.chars().take(max_len).collect();
        shortened.push(ELLIPSIS);
        shortened
    }
}

pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: usize,
    block: Block,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Release year column text, "N/A" when the date is absent or malformed.
pub fn format_year(year: Option<i32>) -> String {
    year.map_or_else(|| "N/A".to_string(), |y| y.to_string())
}

/// "x.x / 10" rating text, "N/A" when the catalog has no votes.
pub fn format_rating(vote_average: Option<f64>) -> String {
    vote_average.map_or_else(|| "N/A".to_string(), |v| format!("{:.1} / 10", v))
}

/// "N mins" runtime text, "N/A" when the catalog doesn't report one.
pub fn format_runtime(runtime: Option<u32>) -> String {
    runtime.map_or_else(|| "N/A".to_string(), |m| format!("{m} mins"))
}

/// Uppercased language code, "N/A" when absent.
pub fn format_language(language: Option<&str>) -> String {
    language.map_or_else(|| "N/A".to_string(), str::to_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate("Dune", 18), "Dune");
        assert_eq!(truncate("Exactly thirteen!", 17), "Exactly thirteen!");
    }

    #[test]
    fn long_text_keeps_max_len_chars_plus_ellipsis() {
        let out = truncate("The Shawshank Redemption", 13);
        assert_eq!(out, "The Shawshank…");
        assert_eq!(out.chars().count(), 14);
        assert!(out.ends_with(ELLIPSIS));
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(truncate("", 18), "");
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        assert_eq!(truncate("Amélie à Paris", 6), "Amélie…");
    }

    #[test]
    fn fallback_formatting_never_renders_blank() {
        assert_eq!(format_year(None), "N/A");
        assert_eq!(format_year(Some(2021)), "2021");
        assert_eq!(format_rating(None), "N/A");
        assert_eq!(format_rating(Some(7.85)), "7.8 / 10");
        assert_eq!(format_runtime(None), "N/A");
        assert_eq!(format_runtime(Some(155)), "155 mins");
        assert_eq!(format_language(None), "N/A");
        assert_eq!(format_language(Some("en")), "EN");
    }
}
