//! Light/dark theme preference with disk persistence
//!
//! The preference is a single key persisted under `.cache/`, resolved once at
//! startup (saved value, then the terminal's reported background, then dark)
//! and written back on every toggle.

use std::path::PathBuf;

use anyhow::Result;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

const THEME_FILE: &str = ".cache/theme.json";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::Black,
                text: Color::White,
                dim: Color::DarkGray,
                accent: Color::Cyan,
                focus: Color::Green,
                highlight_fg: Color::Black,
                highlight_bg: Color::Green,
                rating: Color::Yellow,
                error: Color::Red,
            },
            Theme::Light => Palette {
                background: Color::White,
                text: Color::Black,
                dim: Color::Gray,
                accent: Color::Blue,
                focus: Color::Magenta,
                highlight_fg: Color::White,
                highlight_bg: Color::Magenta,
                rating: Color::LightRed,
                error: Color::Red,
            },
        }
    }
}

/// Colors used by all views, derived from the active theme.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub focus: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub rating: Color,
    pub error: Color,
}

/// Initial theme resolution order: saved preference, then the terminal's
/// background, then the default.
pub fn resolve_initial(saved: Option<Theme>, terminal: Option<Theme>) -> Theme {
    saved.or(terminal).unwrap_or_default()
}

/// Best-effort read of the terminal background from `COLORFGBG` ("fg;bg").
///
/// Background indices 0-6 and 8 are the dark half of the classic 16-color
/// palette; everything else counts as light.
pub fn detect_terminal_theme() -> Option<Theme> {
    let var = std::env::var("COLORFGBG").ok()?;
    theme_from_colorfgbg(&var)
}

fn theme_from_colorfgbg(var: &str) -> Option<Theme> {
    let bg: u8 = var.rsplit(';').next()?.trim().parse().ok()?;
    if bg <= 6 || bg == 8 {
        Some(Theme::Dark)
    } else {
        Some(Theme::Light)
    }
}

/// On-disk store for the theme preference.
#[derive(Clone, Debug)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(THEME_FILE),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Option<Theme> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    pub fn save(&self, theme: Theme) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let content = serde_json::to_string(&theme)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_a_strict_two_state_cycle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn n_toggles_preserve_parity() {
        for initial in [Theme::Light, Theme::Dark] {
            let mut theme = initial;
            for n in 1..=8 {
                theme = theme.toggle();
                if n % 2 == 0 {
                    assert_eq!(theme, initial);
                } else {
                    assert_eq!(theme, initial.toggle());
                }
            }
        }
    }

    #[test]
    fn resolution_prefers_saved_then_terminal_then_default() {
        assert_eq!(
            resolve_initial(Some(Theme::Light), Some(Theme::Dark)),
            Theme::Light
        );
        assert_eq!(resolve_initial(None, Some(Theme::Light)), Theme::Light);
        assert_eq!(resolve_initial(None, None), Theme::Dark);
    }

    #[test]
    fn colorfgbg_maps_background_index() {
        assert_eq!(theme_from_colorfgbg("15;0"), Some(Theme::Dark));
        assert_eq!(theme_from_colorfgbg("0;15"), Some(Theme::Light));
        assert_eq!(theme_from_colorfgbg("12;8"), Some(Theme::Dark));
        assert_eq!(theme_from_colorfgbg("0;default;7"), Some(Theme::Light));
        assert_eq!(theme_from_colorfgbg("garbage"), None);
    }

    #[test]
    fn store_round_trips_and_missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::with_path(dir.path().join("theme.json"));

        assert_eq!(store.load(), None);
        store.save(Theme::Light).unwrap();
        assert_eq!(store.load(), Some(Theme::Light));
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Some(Theme::Dark));
    }
}
