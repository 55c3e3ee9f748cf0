//! Playback position, flags and the advance/range decision logic

use serde::{Deserialize, Serialize};

/// How `range_start` is seeded when range mode is switched on.
///
/// The web versions of this app disagreed on this: one seeded from the first
/// ayah, the others from the current one. Both behaviors are kept and the
/// choice is made in the config file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeSeed {
    Start,
    #[default]
    Current,
}

/// What to do when the current ayah's audio finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextAction {
    /// Restart the current ayah's audio without reloading content.
    Replay,
    /// Load (and play) the given ayah.
    LoadAyah(u32),
    Stop,
}

/// Result of committing a playback range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeCommit {
    pub start: u32,
    pub end: u32,
    /// The current ayah fell outside the committed range; the caller must
    /// load `start` to snap playback back into the range.
    pub relocate: bool,
}

/// The whole persisted playback state: position, range and the four flags.
///
/// Every field round-trips through the on-disk snapshot. Mutation happens
/// through the methods below so the range invariants hold whenever a range
/// is committed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackState {
    pub surah: Option<u32>,
    /// 1-based position within the surah.
    pub ayah: Option<u32>,
    /// Verse count of the selected surah, learned from the loader.
    pub total_ayahs: u32,
    pub range_start: u32,
    pub range_end: u32,
    pub autoplay_enabled: bool,
    pub loop_enabled: bool,
    pub surah_loop_enabled: bool,
    pub range_mode_enabled: bool,
    pub edition: Option<String>,
    pub audio_edition: Option<String>,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            surah: None,
            ayah: None,
            total_ayahs: 1,
            range_start: 1,
            range_end: 1,
            autoplay_enabled: false,
            loop_enabled: false,
            surah_loop_enabled: false,
            range_mode_enabled: false,
            edition: None,
            audio_edition: None,
        }
    }
}

impl PlaybackState {
    /// Navigable interval: the committed range when range mode is on,
    /// otherwise the whole surah.
    pub fn nav_bounds(&self) -> (u32, u32) {
        if self.range_mode_enabled {
            (self.range_start, self.range_end)
        } else {
            (1, self.total_ayahs)
        }
    }

    pub fn can_go_prev(&self) -> bool {
        let (min, _) = self.nav_bounds();
        self.ayah.is_some_and(|a| a > min)
    }

    pub fn can_go_next(&self) -> bool {
        let (_, max) = self.nav_bounds();
        self.ayah.is_some_and(|a| a < max)
    }

    /// Decide what happens when the current ayah's audio ends.
    ///
    /// Precedence: single-ayah loop beats autoplay, autoplay advances within
    /// the effective bounds and wraps on surah loop, and surah loop without
    /// autoplay only wraps when the playhead is already at the upper bound.
    /// Range mode swaps the surah bounds for the committed range and changes
    /// nothing else.
    pub fn advance_on_audio_end(&self) -> NextAction {
        if self.loop_enabled {
            return NextAction::Replay;
        }

        let Some(current) = self.ayah else {
            return NextAction::Stop;
        };
        let (lower, upper) = self.nav_bounds();

        if self.autoplay_enabled {
            if current < upper {
                NextAction::LoadAyah(current + 1)
            } else if self.surah_loop_enabled {
                NextAction::LoadAyah(lower)
            } else {
                NextAction::Stop
            }
        } else if self.surah_loop_enabled && current >= upper {
            NextAction::LoadAyah(lower)
        } else {
            NextAction::Stop
        }
    }

    /// Commit a user-entered range: clamp both ends into `[1, total_ayahs]`
    /// and swap them if inverted. Reports whether the current ayah fell
    /// outside the committed range, in which case the caller loads `start`.
    pub fn commit_range(&mut self, raw_start: i64, raw_end: i64) -> RangeCommit {
        let clamp = |v: i64| v.clamp(1, i64::from(self.total_ayahs.max(1))) as u32;
        let (mut start, mut end) = (clamp(raw_start), clamp(raw_end));
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }

        self.range_start = start;
        self.range_end = end;

        let relocate = match self.ayah {
            Some(a) => a < start || a > end,
            None => true,
        };
        RangeCommit { start, end, relocate }
    }

    /// Flip range mode. Enabling seeds the bounds per `seed`; disabling keeps
    /// the committed bounds around for the next time the mode is switched on.
    pub fn toggle_range_mode(&mut self, seed: RangeSeed) {
        self.range_mode_enabled = !self.range_mode_enabled;
        if self.range_mode_enabled {
            self.range_start = match seed {
                RangeSeed::Start => 1,
                RangeSeed::Current => self.ayah.unwrap_or(1),
            };
            self.range_end = self.total_ayahs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(
        autoplay: bool,
        looped: bool,
        surah_loop: bool,
        range_mode: bool,
        ayah: u32,
    ) -> PlaybackState {
        PlaybackState {
            surah: Some(2),
            ayah: Some(ayah),
            total_ayahs: 10,
            range_start: 3,
            range_end: 7,
            autoplay_enabled: autoplay,
            loop_enabled: looped,
            surah_loop_enabled: surah_loop,
            range_mode_enabled: range_mode,
            edition: Some("ar.muyassar".to_string()),
            audio_edition: Some("ar.alafasy".to_string()),
        }
    }

    #[test]
    fn advance_matrix_all_flag_combinations() {
        use NextAction::*;

        // (autoplay, loop, surah_loop, range_mode, at_upper_bound) -> expected.
        // Mid position is ayah 4; the upper bound is 7 in range mode, 10 otherwise.
        let cases = [
            ((false, false, false, false), false, Stop),
            ((false, false, false, false), true, Stop),
            ((false, false, false, true), false, Stop),
            ((false, false, false, true), true, Stop),
            ((false, false, true, false), false, Stop),
            ((false, false, true, false), true, LoadAyah(1)),
            ((false, false, true, true), false, Stop),
            ((false, false, true, true), true, LoadAyah(3)),
            ((false, true, false, false), false, Replay),
            ((false, true, false, false), true, Replay),
            ((false, true, false, true), false, Replay),
            ((false, true, false, true), true, Replay),
            ((false, true, true, false), false, Replay),
            ((false, true, true, false), true, Replay),
            ((false, true, true, true), false, Replay),
            ((false, true, true, true), true, Replay),
            ((true, false, false, false), false, LoadAyah(5)),
            ((true, false, false, false), true, Stop),
            ((true, false, false, true), false, LoadAyah(5)),
            ((true, false, false, true), true, Stop),
            ((true, false, true, false), false, LoadAyah(5)),
            ((true, false, true, false), true, LoadAyah(1)),
            ((true, false, true, true), false, LoadAyah(5)),
            ((true, false, true, true), true, LoadAyah(3)),
            ((true, true, false, false), false, Replay),
            ((true, true, false, false), true, Replay),
            ((true, true, false, true), false, Replay),
            ((true, true, false, true), true, Replay),
            ((true, true, true, false), false, Replay),
            ((true, true, true, false), true, Replay),
            ((true, true, true, true), false, Replay),
            ((true, true, true, true), true, Replay),
        ];

        for ((autoplay, looped, surah_loop, range_mode), at_bound, expected) in cases {
            let ayah = match (at_bound, range_mode) {
                (false, _) => 4,
                (true, true) => 7,
                (true, false) => 10,
            };
            let s = state(autoplay, looped, surah_loop, range_mode, ayah);
            assert_eq!(
                s.advance_on_audio_end(),
                expected,
                "autoplay={autoplay} loop={looped} surah_loop={surah_loop} \
                 range_mode={range_mode} at_bound={at_bound}"
            );
        }
    }

    #[test]
    fn advance_with_no_ayah_stops() {
        let mut s = state(true, false, true, false, 1);
        s.ayah = None;
        assert_eq!(s.advance_on_audio_end(), NextAction::Stop);
    }

    #[test]
    fn commit_range_swaps_inverted_bounds() {
        let mut s = state(false, false, false, true, 4);
        s.total_ayahs = 10;
        let commit = s.commit_range(5, 2);
        assert_eq!((commit.start, commit.end), (2, 5));
        assert_eq!((s.range_start, s.range_end), (2, 5));
        assert!(!commit.relocate, "ayah 4 is inside 2..=5");
    }

    #[test]
    fn commit_range_clamps_out_of_bounds_input() {
        let mut s = state(false, false, false, true, 4);
        s.total_ayahs = 50;
        let commit = s.commit_range(-3, 999);
        assert_eq!((commit.start, commit.end), (1, 50));
    }

    #[test]
    fn commit_range_reports_relocation_when_ayah_outside() {
        let mut s = state(false, false, false, true, 9);
        let commit = s.commit_range(3, 7);
        assert!(commit.relocate);

        s.ayah = None;
        let commit = s.commit_range(3, 7);
        assert!(commit.relocate, "no current ayah also snaps to start");
    }

    #[test]
    fn nav_bounds_gate_prev_and_next() {
        let s = state(false, false, false, true, 3);
        assert!(!s.can_go_prev());
        assert!(s.can_go_next());

        let s = state(false, false, false, true, 7);
        assert!(s.can_go_prev());
        assert!(!s.can_go_next());

        // Without range mode the whole surah is navigable.
        let s = state(false, false, false, false, 7);
        assert!(s.can_go_next());
    }

    #[test]
    fn toggle_seeds_from_start_policy() {
        let mut s = state(false, false, false, false, 5);
        s.toggle_range_mode(RangeSeed::Start);
        assert!(s.range_mode_enabled);
        assert_eq!((s.range_start, s.range_end), (1, 10));
    }

    #[test]
    fn toggle_seeds_from_current_policy() {
        let mut s = state(false, false, false, false, 5);
        s.toggle_range_mode(RangeSeed::Current);
        assert_eq!((s.range_start, s.range_end), (5, 10));

        s.range_mode_enabled = false;
        s.ayah = None;
        s.toggle_range_mode(RangeSeed::Current);
        assert_eq!(s.range_start, 1, "no ayah falls back to 1");
    }

    #[test]
    fn disabling_range_mode_retains_committed_bounds() {
        let mut s = state(false, false, false, true, 4);
        s.commit_range(2, 6);
        s.toggle_range_mode(RangeSeed::Start);
        assert!(!s.range_mode_enabled);
        assert_eq!((s.range_start, s.range_end), (2, 6));
        assert_eq!(s.nav_bounds(), (1, 10), "bounds ignored while disabled");
    }

    #[test]
    fn snapshot_round_trip_preserves_every_field() {
        let s = state(true, false, true, true, 6);
        let json = serde_json::to_string(&s).unwrap();
        let restored: PlaybackState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, s);
    }
}
