//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `layout`: Sidebar lists and the playback status bar
//! - `content`: Reader pane (Arabic text, translation, surah/ayah info)
//! - `overlays`: Modal overlays (error, range editor, help)

mod content;
mod layout;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Color,
    Frame,
};

use crate::model::{ContentState, PlaybackState, UiState};
use crate::theme::ResolvedTheme;

/// Colors derived from the resolved theme.
#[derive(Clone, Copy)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub accent: Color,
    pub dim: Color,
}

impl Palette {
    pub fn for_theme(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                accent: Color::Green,
                dim: Color::DarkGray,
            },
            ResolvedTheme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                accent: Color::Blue,
                dim: Color::Gray,
            },
        }
    }
}

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        playback: &PlaybackState,
        ui_state: &UiState,
        content_state: &ContentState,
    ) {
        let palette = Palette::for_theme(
            ui_state.theme.resolve(crate::theme::system_prefers_dark()),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Sidebar + reader
                Constraint::Length(3), // Playback status bar
            ])
            .split(frame.area());

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(32), // Sidebar (surahs + editions + reciters)
                Constraint::Percentage(68), // Reader
            ])
            .split(chunks[0]);

        layout::render_sidebar(frame, main_chunks[0], ui_state, content_state, &palette);
        content::render_reader(frame, main_chunks[1], ui_state, content_state, &palette);
        layout::render_status_bar(frame, chunks[1], playback, ui_state, &palette);

        if ui_state.error_message.is_some() {
            overlays::render_error_notification(frame, ui_state);
        }

        if let Some(draft) = &ui_state.range_draft {
            overlays::render_range_editor(frame, draft, playback, &palette);
        }

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame, &palette);
        }
    }
}
