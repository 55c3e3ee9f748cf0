//! Color theme selection with an `auto` mode following the system preference

use std::fmt;
use std::str::FromStr;

/// Persisted theme choice. `Auto` defers to the system preference at the
/// moment it is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    Dark,
    Light,
    #[default]
    Auto,
}

/// A theme with `Auto` already reconciled, ready for the palette lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedTheme {
    Dark,
    Light,
}

impl Theme {
    pub fn resolve(self, system_prefers_dark: bool) -> ResolvedTheme {
        match self {
            Theme::Dark => ResolvedTheme::Dark,
            Theme::Light => ResolvedTheme::Light,
            Theme::Auto if system_prefers_dark => ResolvedTheme::Dark,
            Theme::Auto => ResolvedTheme::Light,
        }
    }

    /// Cycle order matches the web app's toggle: auto -> dark -> light.
    pub fn next(self) -> Theme {
        match self {
            Theme::Auto => Theme::Dark,
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Auto,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Auto => "auto",
        };
        f.write_str(s)
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            "auto" => Ok(Theme::Auto),
            _ => Err(()),
        }
    }
}

/// Best-effort system dark-mode detection for terminals. `COLORFGBG` is the
/// only widely set hint; its last field is the background color index.
pub fn system_prefers_dark() -> bool {
    match std::env::var("COLORFGBG") {
        Ok(value) => {
            let bg = value.rsplit(';').next().unwrap_or("");
            !matches!(bg, "7" | "15")
        }
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_round_trip() {
        for theme in [Theme::Dark, Theme::Light, Theme::Auto] {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
        assert!("solarized".parse::<Theme>().is_err());
    }

    #[test]
    fn auto_follows_system_preference() {
        assert_eq!(Theme::Auto.resolve(true), ResolvedTheme::Dark);
        assert_eq!(Theme::Auto.resolve(false), ResolvedTheme::Light);
        // Explicit choices win over the system.
        assert_eq!(Theme::Light.resolve(true), ResolvedTheme::Light);
        assert_eq!(Theme::Dark.resolve(false), ResolvedTheme::Dark);
    }

    #[test]
    fn cycle_visits_every_mode() {
        assert_eq!(Theme::Auto.next(), Theme::Dark);
        assert_eq!(Theme::Dark.next(), Theme::Light);
        assert_eq!(Theme::Light.next(), Theme::Auto);
    }
}
