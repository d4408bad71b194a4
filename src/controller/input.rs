//! Key and mouse event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::model::ActiveSection;
use crate::view::modal_area;

use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;

        // Handle error message first (blocks all other interactions)
        if model.has_error().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    model.clear_error().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        // Handle help popup
        if model.is_help_popup_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
                    model.hide_help_popup().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        // Handle detail modal
        if model.is_modal_open().await {
            return match key.code {
                KeyCode::Esc => {
                    model.close_modal().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        let ui_state = model.get_ui_state().await;

        // Handle search input when in search section
        if ui_state.active_section == ActiveSection::Search {
            match key.code {
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        model.cycle_section_backward().await;
                    } else {
                        model.cycle_section_forward().await;
                    }
                    return Ok(());
                }
                KeyCode::Enter => {
                    drop(model);
                    self.submit_search().await;
                    return Ok(());
                }
                KeyCode::Esc => {
                    model.clear_search_input().await;
                    return Ok(());
                }
                KeyCode::Backspace => {
                    model.backspace_search().await;
                    return Ok(());
                }
                KeyCode::Char(c) => {
                    // Q still quits even in search mode when Ctrl is pressed
                    if (c == 'q' || c == 'Q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        model.set_should_quit(true).await;
                        return Ok(());
                    }
                    model.append_to_search(c).await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Results section: selection, paging, opening details
        if ui_state.active_section == ActiveSection::Results {
            match key.code {
                KeyCode::Up => {
                    model.results_move_up().await;
                    return Ok(());
                }
                KeyCode::Down => {
                    model.results_move_down().await;
                    return Ok(());
                }
                KeyCode::Left => {
                    drop(model);
                    self.prev_page().await;
                    return Ok(());
                }
                KeyCode::Right => {
                    drop(model);
                    self.next_page().await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    drop(model);
                    self.open_selected_movie().await;
                    return Ok(());
                }
                KeyCode::Backspace | KeyCode::Esc => {
                    drop(model);
                    self.go_home().await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Genre rail: pick a genre to browse
        if ui_state.active_section == ActiveSection::Genres {
            match key.code {
                KeyCode::Up => {
                    model.genre_move_up().await;
                    return Ok(());
                }
                KeyCode::Down => {
                    model.genre_move_down().await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    drop(model);
                    self.open_selected_genre().await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    model.cycle_section_backward().await;
                } else {
                    model.cycle_section_forward().await;
                }
            }
            KeyCode::BackTab => {
                model.cycle_section_backward().await;
            }
            // Toggle light/dark theme
            KeyCode::Char('t') | KeyCode::Char('T') => {
                model.toggle_theme().await;
            }
            // Back to the landing feed
            KeyCode::Home => {
                drop(model);
                self.go_home().await;
            }
            // Focus search
            KeyCode::Char('/') => {
                model.set_active_section(ActiveSection::Search).await;
            }
            // Focus genre rail
            KeyCode::Char('g') | KeyCode::Char('G') => {
                model.set_active_section(ActiveSection::Genres).await;
            }
            // Show help popup
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup().await;
            }
            _ => {}
        }
        Ok(())
    }

    /// A mouse press on the modal's backdrop (anywhere outside its content
    /// area) dismisses it; presses inside the modal are ignored.
    pub async fn handle_mouse_event(&self, mouse: MouseEvent, screen: Rect) -> Result<()> {
        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return Ok(());
        }

        let model = self.model.lock().await;
        if !model.is_modal_open().await {
            return Ok(());
        }

        let click = Position {
            x: mouse.column,
            y: mouse.row,
        };
        if !modal_area(screen).contains(click) {
            model.close_modal().await;
        }
        Ok(())
    }
}
