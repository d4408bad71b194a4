//! Main content area rendering (hero panel, movie listings, paging bar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{
    backdrop_url, poster_url, ActiveSection, BrowseState, MoviePage, MovieSummary, Route, UiState,
};
use crate::theme::Palette;

use super::utils::{format_rating, format_year, render_scrollable_list, truncate};

const TITLE_WIDTH: usize = 18;

pub fn render_content(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    browse: &BrowseState,
    palette: &Palette,
) {
    let is_focused = ui_state.active_section == ActiveSection::Results;
    let border_style = if is_focused {
        Style::default().fg(palette.focus)
    } else {
        Style::default().fg(palette.dim)
    };

    let title = page_title(ui_state, browse);

    let Some(results) = &browse.results else {
        // Nothing loaded yet: a pending fetch shows the loading placeholder,
        // anything else the idle hint
        let text = if browse.is_loading {
            "Loading..."
        } else {
            "Press Enter on a genre, or type a search and press Enter"
        };
        let placeholder = Paragraph::new(text)
            .style(Style::default().fg(palette.dim))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {title} "))
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
        frame.render_widget(placeholder, area);
        return;
    };

    let searching = !browse.search_term.is_empty();
    let show_hero = ui_state.route == Route::Home && !searching && !results.movies.is_empty();

    let chunks = if show_hero {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(10), // Hero panel
                Constraint::Min(0),     // Movie list
                Constraint::Length(1),  // Paging bar
            ])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Movie list
                Constraint::Length(1), // Paging bar
            ])
            .split(area)
    };

    let (list_area, paging_area) = if show_hero {
        render_hero(frame, chunks[0], &results.movies[0], palette);
        (chunks[1], chunks[2])
    } else {
        (chunks[0], chunks[1])
    };

    if searching && results.movies.is_empty() {
        let empty = Paragraph::new("No movies found for your search.")
            .style(Style::default().fg(palette.dim))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {title} "))
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
        frame.render_widget(empty, list_area);
    } else {
        render_movie_list(
            frame,
            list_area,
            &title,
            results,
            browse.selected,
            browse.is_loading,
            is_focused,
            border_style,
            palette,
        );
    }

    render_paging_bar(frame, paging_area, browse, palette);
}

fn page_title(ui_state: &UiState, browse: &BrowseState) -> String {
    match ui_state.route {
        Route::Home if browse.search_term.is_empty() => "Trending Movies".to_string(),
        Route::Home => format!("Search Results for \"{}\"", browse.search_term),
        Route::Genre(id) => {
            let name = ui_state
                .genres
                .iter()
                .find(|g| g.id == id)
                .map_or("Genre", |g| g.name.as_str());
            format!("{name} Movies")
        }
    }
}

/// Large-format panel for the top-ranked trending movie.
fn render_hero(frame: &mut Frame, area: Rect, movie: &MovieSummary, palette: &Palette) {
    let title = if movie.title.is_empty() {
        "Featured Movie"
    } else {
        &movie.title
    };

    let mut meta = vec![Span::styled(
        format_year(movie.release_year()),
        Style::default().fg(palette.text),
    )];
    if let Some(rating) = movie.vote_average {
        meta.push(Span::raw("   "));
        meta.push(Span::styled(
            format!("⭐ {:.1} / 10", rating),
            Style::default().fg(palette.rating),
        ));
    }
    if let Some(lang) = &movie.original_language {
        meta.push(Span::raw("   "));
        meta.push(Span::styled(
            lang.to_uppercase(),
            Style::default().fg(palette.accent),
        ));
    }

    let overview = movie
        .overview
        .as_deref()
        .unwrap_or("No overview available for this title.");
    let backdrop = backdrop_url(movie.backdrop_path.as_deref())
        .or_else(|| poster_url(movie.poster_path.as_deref()))
        .unwrap_or_else(|| "no backdrop available".to_string());

    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(meta),
        Line::from(""),
        Line::from(Span::styled(
            overview.to_string(),
            Style::default().fg(palette.text),
        )),
        Line::from(Span::styled(
            backdrop,
            Style::default().fg(palette.dim),
        )),
    ];

    let hero = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Featured ")
                .padding(Padding::horizontal(1))
                .border_style(Style::default().fg(palette.accent)),
        );
    frame.render_widget(hero, area);
}

fn render_movie_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    results: &MoviePage,
    selected: usize,
    is_loading: bool,
    is_focused: bool,
    border_style: Style,
    palette: &Palette,
) {
    let items: Vec<ListItem> = results
        .movies
        .iter()
        .enumerate()
        .map(|(i, movie)| {
            let is_selected = i == selected;

            let row = format!(
                " {:<width$}   {:>4}   ⭐ {}",
                truncate(&movie.title, TITLE_WIDTH),
                format_year(movie.release_year()),
                format_rating(movie.vote_average),
                width = TITLE_WIDTH + 1,
            );

            let style = if is_selected && is_focused {
                Style::default()
                    .fg(palette.highlight_fg)
                    .bg(palette.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };

            ListItem::new(row).style(style)
        })
        .collect();

    let heading = if is_loading {
        format!(" {title} (loading...) ")
    } else {
        format!(" {title} ")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(heading)
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    render_scrollable_list(frame, area, items, selected, block);
}

fn render_paging_bar(frame: &mut Frame, area: Rect, browse: &BrowseState, palette: &Palette) {
    let Some(results) = &browse.results else {
        return;
    };
    if results.total_pages <= 1 {
        return;
    }

    let at_first = browse.page == 1;
    let at_last = browse.page >= results.total_pages;

    let control = |label: &str, disabled: bool| {
        Span::styled(
            label.to_string(),
            if disabled {
                Style::default().fg(palette.dim)
            } else {
                Style::default().fg(palette.accent)
            },
        )
    };

    let line = Line::from(vec![
        control("← Previous", at_first),
        Span::styled(
            format!("   Page {} of {}   ", browse.page, results.total_pages),
            Style::default().fg(palette.text),
        ),
        control("Next →", at_last),
    ]);

    let bar = Paragraph::new(line).centered();
    frame.render_widget(bar, area);
}
