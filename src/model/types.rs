//! Core type definitions for the application

use std::time::Instant;

use crate::theme::Theme;

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Surahs,
    Editions,
    Reciters,
    Reader,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Surahs => ActiveSection::Editions,
            ActiveSection::Editions => ActiveSection::Reciters,
            ActiveSection::Reciters => ActiveSection::Reader,
            ActiveSection::Reader => ActiveSection::Surahs,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::Surahs => ActiveSection::Reader,
            ActiveSection::Editions => ActiveSection::Surahs,
            ActiveSection::Reciters => ActiveSection::Editions,
            ActiveSection::Reader => ActiveSection::Reciters,
        }
    }
}

/// Which of the two range bound fields is being edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeField {
    Start,
    End,
}

/// In-progress range input, committed with Enter.
#[derive(Clone, Debug)]
pub struct RangeDraft {
    pub start: String,
    pub end: String,
    pub field: RangeField,
}

impl RangeDraft {
    pub fn from_bounds(start: u32, end: u32) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            field: RangeField::Start,
        }
    }

    pub fn active_field_mut(&mut self) -> &mut String {
        match self.field {
            RangeField::Start => &mut self.start,
            RangeField::End => &mut self.end,
        }
    }
}

/// UI state for the application
#[derive(Clone, Debug)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub surah_selected: usize,
    pub edition_selected: usize,
    pub reciter_selected: usize,
    pub range_draft: Option<RangeDraft>,
    pub theme: Theme,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Surahs,
            surah_selected: 0,
            edition_selected: 0,
            reciter_selected: 0,
            range_draft: None,
            theme: Theme::Auto,
            error_message: None,
            error_timestamp: None,
            show_help_popup: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_cycle_is_a_ring() {
        let mut section = ActiveSection::Surahs;
        for _ in 0..4 {
            section = section.next();
        }
        assert_eq!(section, ActiveSection::Surahs);
        assert_eq!(ActiveSection::Surahs.prev(), ActiveSection::Reader);
    }
}
