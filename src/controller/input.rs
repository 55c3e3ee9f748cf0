//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::model::{ActiveSection, RangeDraft, RangeField};

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

        // Handle the range editor while it is open
        let ui_state = model.get_ui_state().await;
        if let Some(mut draft) = ui_state.range_draft.clone() {
            match key.code {
                KeyCode::Char(c @ '0'..='9') => {
                    draft.active_field_mut().push(c);
                    model.set_range_draft(Some(draft)).await;
                }
                KeyCode::Backspace => {
                    draft.active_field_mut().pop();
                    model.set_range_draft(Some(draft)).await;
                }
                KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                    draft.field = match draft.field {
                        RangeField::Start => RangeField::End,
                        RangeField::End => RangeField::Start,
                    };
                    model.set_range_draft(Some(draft)).await;
                }
                KeyCode::Enter => {
                    // Empty fields keep out-of-range sentinels; commit clamps.
                    let start = draft.start.parse::<i64>().unwrap_or(1);
                    let end = draft.end.parse::<i64>().unwrap_or(i64::MAX);
                    model.set_range_draft(None).await;
                    drop(model);
                    self.commit_range(start, end).await;
                }
                KeyCode::Esc => {
                    model.set_range_draft(None).await;
                }
                _ => {}
            }
            return Ok(());
        }

        // List sections: move and select
        match ui_state.active_section {
            ActiveSection::Surahs | ActiveSection::Editions | ActiveSection::Reciters => {
                match key.code {
                    KeyCode::Up => {
                        model.move_selection_up().await;
                        return Ok(());
                    }
                    KeyCode::Down => {
                        model.move_selection_down().await;
                        return Ok(());
                    }
                    KeyCode::Enter => {
                        let section = ui_state.active_section;
                        drop(model);
                        match section {
                            ActiveSection::Surahs => {
                                self.select_surah(ui_state.surah_selected).await;
                            }
                            ActiveSection::Editions => {
                                self.select_text_edition(ui_state.edition_selected).await;
                            }
                            ActiveSection::Reciters => {
                                self.select_audio_edition(ui_state.reciter_selected).await;
                            }
                            ActiveSection::Reader => {}
                        }
                        return Ok(());
                    }
                    _ => {}
                }
            }
            ActiveSection::Reader => {}
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Tab => {
                model.cycle_section_forward().await;
            }
            KeyCode::BackTab => {
                model.cycle_section_backward().await;
            }
            // Next / previous ayah
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Right => {
                drop(model);
                self.next_ayah().await;
            }
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Left => {
                drop(model);
                self.prev_ayah().await;
            }
            // Play the current ayah's audio
            KeyCode::Char(' ') => {
                drop(model);
                self.play_current().await;
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                drop(model);
                self.toggle_autoplay().await;
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                drop(model);
                self.toggle_loop().await;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                drop(model);
                self.toggle_surah_loop().await;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                drop(model);
                self.toggle_range_mode().await;
            }
            // Edit the range bounds (only meaningful with range mode on)
            KeyCode::Char('b') | KeyCode::Char('B') => {
                let playback = model.playback_snapshot().await;
                if playback.range_mode_enabled {
                    let draft = RangeDraft::from_bounds(playback.range_start, playback.range_end);
                    model.set_range_draft(Some(draft)).await;
                }
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                drop(model);
                self.cycle_theme().await;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup().await;
            }
            _ => {}
        }
        Ok(())
    }
}
