//! Overlay rendering (error notification, range editor, help popup)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::{PlaybackState, RangeDraft, RangeField, UiState};

use super::Palette;

pub fn render_error_notification(frame: &mut Frame, ui_state: &UiState) {
    if let Some(ref error_msg) = ui_state.error_message {
        let area = frame.area();

        // Fixed width popup (responsive to screen size)
        let popup_width = 52.min(area.width.saturating_sub(4));
        let inner_width = popup_width.saturating_sub(4) as usize; // account for borders

        // Calculate how many lines the error message will take when wrapped
        let error_line_count =
            ((error_msg.chars().count() as f32) / (inner_width as f32)).ceil() as u16;

        // Height: top border (1) + error lines + bottom border (1)
        let popup_height = (2 + error_line_count.max(1)).min(area.height - 4);

        let popup_area = centered_rect(area, popup_width, popup_height);

        // Clear the area behind the popup first
        frame.render_widget(Clear, popup_area);

        let error_widget = Paragraph::new(error_msg.to_string())
            .style(Style::default().fg(Color::Red))
            .wrap(ratatui::widgets::Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Error (Esc to dismiss) ")
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .style(Style::default().bg(Color::Black)),
            );

        frame.render_widget(error_widget, popup_area);
    }
}

pub fn render_range_editor(
    frame: &mut Frame,
    draft: &RangeDraft,
    playback: &PlaybackState,
    palette: &Palette,
) {
    let area = frame.area();
    let popup_area = centered_rect(area, 40.min(area.width.saturating_sub(4)), 7);

    frame.render_widget(Clear, popup_area);

    let field_line = |label: &str, value: &str, active: bool| {
        let style = if active {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.fg)
        };
        let cursor = if active { "_" } else { "" };
        Line::from(vec![
            Span::styled(format!("{:>10}: ", label), Style::default().fg(palette.dim)),
            Span::styled(format!("{}{}", value, cursor), style),
        ])
    };

    let lines = vec![
        field_line("From ayah", &draft.start, draft.field == RangeField::Start),
        field_line("To ayah", &draft.end, draft.field == RangeField::End),
        Line::default(),
        Line::from(Span::styled(
            format!("   Surah has {} ayahs", playback.total_ayahs),
            Style::default().fg(palette.dim),
        )),
        Line::from(Span::styled(
            "   Tab switch | Enter apply | Esc cancel",
            Style::default().fg(palette.dim),
        )),
    ];

    let editor = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Ayah Range ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(editor, popup_area);
}

pub fn render_help_popup(frame: &mut Frame, _palette: &Palette) {
    let area = frame.area();

    // Define keybindings organized by category
    let keybindings = vec![
        ("", "── Navigation ──"),
        ("Tab / Shift+Tab", "Cycle sections"),
        ("↑ / ↓", "Move selection"),
        ("Enter", "Select surah / edition / reciter"),
        ("", ""),
        ("", "── Playback ──"),
        ("Space", "Play current ayah"),
        ("N / →", "Next ayah"),
        ("P / ←", "Previous ayah"),
        ("A", "Toggle autoplay"),
        ("L", "Toggle ayah loop"),
        ("S", "Toggle surah loop"),
        ("", ""),
        ("", "── Range ──"),
        ("R", "Toggle range mode"),
        ("B", "Edit range bounds"),
        ("", ""),
        ("", "── General ──"),
        ("T", "Cycle theme (auto → dark → light)"),
        ("H", "Toggle this help"),
        ("Q", "Quit"),
    ];

    let popup_width = 62;
    let popup_height = (keybindings.len() as u16 + 2).min(area.height - 4);
    let popup_area = centered_rect(area, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                // Section header or empty line
                Line::from(Span::styled(
                    format!("{:^38}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (H or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.width.saturating_sub(width) / 2,
        y: area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}
