//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the
//! application. It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (enums, UI state, etc.)
//! - `playback`: Playback position, flags and the advance/range decisions
//! - `content`: Resolved ayah content and catalogs
//! - `app_model`: Main application model with state management methods

mod app_model;
mod content;
mod playback;
mod types;

// Re-export all public types for convenient access
pub use types::{ActiveSection, RangeDraft, RangeField, UiState};

pub use playback::{NextAction, PlaybackState, RangeCommit, RangeSeed};

pub use content::{AyahContent, ContentState, Edition, SurahInfo};

pub use app_model::AppModel;
