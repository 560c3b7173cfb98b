//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── tab strip ──────────────────────────────────────────────
    pub fn tab_style() -> Style {
        Style::default().bg(Color::Gray).fg(Color::Black)
    }

    pub fn tab_selected_style() -> Style {
        Style::default()
            .bg(Color::Cyan)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_subtitle_style() -> Style {
        Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM)
    }

    // ── pages ──────────────────────────────────────────────────
    pub fn page_text_style() -> Style {
        Style::default().fg(Color::White)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
