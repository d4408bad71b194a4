//! Overlay rendering (movie detail modal, error notification, help popup)

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{poster_url, MovieDetail, UiState};
use crate::theme::Palette;

use super::utils::{format_language, format_rating, format_runtime};

/// Content rectangle of the detail modal for a given screen size.
///
/// Everything outside this rectangle is backdrop; a mouse press there
/// dismisses the modal.
pub fn modal_area(screen: Rect) -> Rect {
    let width = 76.min(screen.width.saturating_sub(4));
    let height = 20.min(screen.height.saturating_sub(4));
    Rect {
        x: screen.width.saturating_sub(width) / 2,
        y: screen.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

pub fn render_movie_modal(frame: &mut Frame, movie: &MovieDetail, palette: &Palette) {
    let popup_area = modal_area(frame.area());

    // Clear the area behind the popup first
    frame.render_widget(Clear, popup_area);

    let rating = {
        let mut spans = vec![
            Span::styled("⭐ Rating: ", Style::default().fg(palette.rating)),
            Span::styled(
                format_rating(movie.vote_average),
                Style::default().fg(palette.text),
            ),
        ];
        if let Some(votes) = movie.vote_count {
            spans.push(Span::styled(
                format!("  ({votes} votes)"),
                Style::default().fg(palette.dim),
            ));
        }
        Line::from(spans)
    };

    let genre_names = if movie.genres.is_empty() {
        "N/A".to_string()
    } else {
        movie
            .genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let detail_line = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(
                format!("{label}: "),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, Style::default().fg(palette.text)),
        ])
    };

    let poster = poster_url(movie.poster_path.as_deref())
        .unwrap_or_else(|| "no poster available".to_string());

    let mut lines = vec![
        Line::from(Span::styled(
            movie.title.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        rating,
        Line::from(""),
        Line::from(Span::styled(
            "Overview",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            movie
                .overview
                .clone()
                .unwrap_or_else(|| "No overview available.".to_string()),
            Style::default().fg(palette.text),
        )),
        Line::from(""),
        detail_line(
            "🗓 Released",
            movie
                .release_date
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
        ),
        detail_line(
            "🗣 Language",
            format_language(movie.original_language.as_deref()),
        ),
        detail_line("⏱ Runtime", format_runtime(movie.runtime)),
        detail_line("🎭 Genres", genre_names),
    ];
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        poster,
        Style::default().fg(palette.dim),
    )));

    let modal = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(" Movie Details (Esc or click outside to close) ")
                .title_style(
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                )
                .padding(Padding::horizontal(1))
                .style(Style::default().bg(palette.background)),
        );

    frame.render_widget(modal, popup_area);
}

pub fn render_error_notification(frame: &mut Frame, ui_state: &UiState, palette: &Palette) {
    if let Some(ref error_msg) = ui_state.error_message {
        let area = frame.area();

        // Fixed width popup (responsive to screen size)
        let popup_width = 52.min(area.width.saturating_sub(4));
        let inner_width = popup_width.saturating_sub(4) as usize; // account for borders

        // Calculate how many lines the error message will take when wrapped
        let error_line_count =
            ((error_msg.chars().count() as f32) / (inner_width as f32)).ceil() as u16;

        // Height: top border (1) + error lines + bottom border (1)
        let popup_height = (2 + error_line_count.max(1)).min(area.height.saturating_sub(4));

        let popup_area = Rect {
            x: area.width.saturating_sub(popup_width) / 2,
            y: area.height.saturating_sub(popup_height) / 2,
            width: popup_width,
            height: popup_height,
        };

        // Clear the area behind the popup first
        frame.render_widget(Clear, popup_area);

        let error_widget = Paragraph::new(error_msg.to_string())
            .style(Style::default().fg(palette.error))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.error))
                    .title(" Error (Esc to dismiss) ")
                    .title_style(
                        Style::default()
                            .fg(palette.error)
                            .add_modifier(Modifier::BOLD),
                    )
                    .style(Style::default().bg(palette.background)),
            );

        frame.render_widget(error_widget, popup_area);
    }
}

pub fn render_help_popup(frame: &mut Frame, palette: &Palette) {
    let area = frame.area();

    // Keybindings organized by category
    let keybindings = vec![
        ("", "── Navigation ──"),
        ("Tab / Shift+Tab", "Cycle sections"),
        ("↑ / ↓", "Move selection"),
        ("← / →", "Previous / next page"),
        ("Enter", "Open selection"),
        ("Esc / Backspace", "Back to trending"),
        ("/", "Focus search"),
        ("G", "Focus genres"),
        ("", ""),
        ("", "── General ──"),
        ("T", "Toggle light/dark theme"),
        ("H", "Toggle this help"),
        ("Q", "Quit"),
    ];

    let popup_width = 56;
    let popup_height = (keybindings.len() as u16 + 2).min(area.height.saturating_sub(4));

    let popup_area = Rect {
        x: area.width.saturating_sub(popup_width) / 2,
        y: area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    };

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                // Section header or empty line
                Line::from(Span::styled(
                    format!("{:^34}", desc),
                    Style::default()
                        .fg(palette.rating)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default()
                            .fg(palette.focus)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(palette.text)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(" Help (H or Esc to close) ")
                .title_style(
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                )
                .style(Style::default().bg(palette.background)),
        )
        .style(Style::default().bg(palette.background));

    frame.render_widget(help_text, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    #[test]
    fn modal_is_centered_within_the_screen() {
        let screen = Rect::new(0, 0, 120, 40);
        let modal = modal_area(screen);
        assert_eq!(modal.width, 76);
        assert_eq!(modal.height, 20);
        assert_eq!(modal.x, (120 - 76) / 2);
        assert_eq!(modal.y, (40 - 20) / 2);
    }

    #[test]
    fn backdrop_hit_test_distinguishes_inside_from_outside() {
        let screen = Rect::new(0, 0, 120, 40);
        let modal = modal_area(screen);

        let inside = Position {
            x: modal.x + 1,
            y: modal.y + 1,
        };
        let outside = Position { x: 0, y: 0 };

        assert!(modal.contains(inside));
        assert!(!modal.contains(outside));
    }

    #[test]
    fn modal_shrinks_to_fit_small_screens() {
        let screen = Rect::new(0, 0, 40, 12);
        let modal = modal_area(screen);
        assert!(modal.width <= 36);
        assert!(modal.height <= 8);
    }
}
