//! Reader pane rendering (Arabic ayah text, translation, surah info)

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{ActiveSection, ContentState, UiState};

use super::Palette;

pub fn render_reader(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    content_state: &ContentState,
    palette: &Palette,
) {
    let is_focused = ui_state.active_section == ActiveSection::Reader;
    let border_style = if is_focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    };

    if content_state.is_loading {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Reader ")
                    .border_style(border_style),
            );
        frame.render_widget(loading, area);
        return;
    }

    let Some(ayah) = &content_state.current else {
        let content = Paragraph::new(
            "Select a surah and press Enter to start reading\n\n\
             Use Tab to navigate between sections\n\
             Use ↑/↓ to select items\n\
             Press h for all key bindings",
        )
        .style(Style::default().fg(palette.dim))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Reader ")
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        );
        frame.render_widget(content, area);
        return;
    };

    let title = format!(
        " {} ({}) ",
        ayah.surah_english_name, ayah.surah_arabic_name
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::new(2, 2, 1, 1))
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Ayah position
            Constraint::Length(1),
            Constraint::Percentage(45), // Arabic text
            Constraint::Min(0),         // Translation
        ])
        .split(inner);

    let info = Paragraph::new(format!(
        "الأية {} من {}",
        ayah.number_in_surah, ayah.total_ayahs
    ))
    .alignment(Alignment::Right)
    .style(Style::default().fg(palette.dim));
    frame.render_widget(info, chunks[0]);

    // Arabic reads right to left, keep it right-aligned.
    let arabic = Paragraph::new(ayah.arabic_text.as_str())
        .alignment(Alignment::Right)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(palette.fg).add_modifier(Modifier::BOLD));
    frame.render_widget(arabic, chunks[2]);

    render_translation(frame, chunks[3], ayah, palette);
}

fn render_translation(
    frame: &mut Frame,
    area: Rect,
    ayah: &crate::model::AyahContent,
    palette: &Palette,
) {
    let Some(text) = &ayah.translation_text else {
        return;
    };

    let mut lines = Vec::new();
    if let Some(edition) = &ayah.translation_edition {
        lines.push(
            Line::from(edition.as_str())
                .right_aligned()
                .style(Style::default().fg(palette.accent)),
        );
        lines.push(Line::default());
    }
    lines.push(Line::from(text.as_str()).right_aligned());

    let translation = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(palette.fg));
    frame.render_widget(translation, area);
}
