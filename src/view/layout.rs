//! Layout rendering (sidebar lists and the playback status bar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, ContentState, PlaybackState, UiState};

use super::Palette;

pub fn render_sidebar(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    content_state: &ContentState,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),     // Surahs (fills remaining space)
            Constraint::Length(8),  // Tafsir editions
            Constraint::Length(8),  // Reciters
        ])
        .split(area);

    render_selectable_list(
        frame,
        chunks[0],
        " Surahs ",
        content_state.surahs.iter().map(|s| s.label()).collect(),
        ui_state.surah_selected,
        ui_state.active_section == ActiveSection::Surahs,
        palette,
    );

    render_selectable_list(
        frame,
        chunks[1],
        " Tafsir ",
        content_state
            .text_editions
            .iter()
            .map(|e| e.name.clone())
            .collect(),
        ui_state.edition_selected,
        ui_state.active_section == ActiveSection::Editions,
        palette,
    );

    render_selectable_list(
        frame,
        chunks[2],
        " Reciters ",
        content_state
            .audio_editions
            .iter()
            .map(|e| e.name.clone())
            .collect(),
        ui_state.reciter_selected,
        ui_state.active_section == ActiveSection::Reciters,
        palette,
    );
}

fn render_selectable_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    labels: Vec<String>,
    selected: usize,
    active: bool,
    palette: &Palette,
) {
    let items: Vec<ListItem> = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let style = if i == selected && active {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else if i == selected {
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg)
            };
            ListItem::new(label).style(style)
        })
        .collect();

    let border_style = if active {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        )
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    frame.render_stateful_widget(list, area, &mut list_state);
}

pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    playback: &PlaybackState,
    ui_state: &UiState,
    palette: &Palette,
) {
    let position = match (playback.surah, playback.ayah) {
        (Some(surah), Some(ayah)) => {
            format!(" {}:{} / {}", surah, ayah, playback.total_ayahs)
        }
        _ => " No ayah loaded".to_string(),
    };

    let autoplay = if playback.autoplay_enabled { "Autoplay: On" } else { "Autoplay: Off" };
    let loop_text = if playback.loop_enabled { "Loop: On" } else { "Loop: Off" };
    let surah_loop = if playback.surah_loop_enabled { "Surah loop: On" } else { "Surah loop: Off" };
    let range = if playback.range_mode_enabled {
        format!("Range: {}-{}", playback.range_start, playback.range_end)
    } else {
        "Range: Off".to_string()
    };
    let theme = format!("Theme: {}", ui_state.theme);

    let controls = format!(
        " {} | {} | {} | {} | {} ",
        autoplay, loop_text, surah_loop, range, theme
    );

    let status = Paragraph::new(position)
        .style(Style::default().fg(palette.fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Playback ")
                .title_bottom(Line::from(controls).right_aligned())
                .border_style(Style::default().fg(palette.dim)),
        );
    frame.render_widget(status, area);
}
