use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Cosmetic colour scheme. Decoupled from quiz logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[serde(rename = "theme-light-blue")]
    LightBlue,
    #[serde(rename = "theme-light-green")]
    LightGreen,
    #[serde(rename = "theme-light-purple")]
    LightPurple,
    #[serde(rename = "theme-dark-cyan")]
    DarkCyan,
    #[serde(rename = "theme-dark-bw")]
    DarkBw,
    #[serde(rename = "theme-dark-orange")]
    DarkOrange,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::LightBlue,
        Theme::LightGreen,
        Theme::LightPurple,
        Theme::DarkCyan,
        Theme::DarkBw,
        Theme::DarkOrange,
    ];

    /// Identifier, also used as the CSS class on the app root.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Theme::LightBlue => "theme-light-blue",
            Theme::LightGreen => "theme-light-green",
            Theme::LightPurple => "theme-light-purple",
            Theme::DarkCyan => "theme-dark-cyan",
            Theme::DarkBw => "theme-dark-bw",
            Theme::DarkOrange => "theme-dark-orange",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Theme::LightBlue => "Light Blue",
            Theme::LightGreen => "Light Green",
            Theme::LightPurple => "Light Purple",
            Theme::DarkCyan => "Dark Cyan",
            Theme::DarkBw => "Dark B&W",
            Theme::DarkOrange => "Dark Orange",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeError(pub String);

impl fmt::Display for UnknownThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme: {}", self.0)
    }
}

impl std::error::Error for UnknownThemeError {}

impl FromStr for Theme {
    type Err = UnknownThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.id() == s)
            .ok_or_else(|| UnknownThemeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for theme in Theme::ALL {
            assert_eq!(theme.id().parse::<Theme>(), Ok(theme));
        }
        assert!("theme-neon".parse::<Theme>().is_err());
    }

    #[test]
    fn serializes_as_identifier() {
        let json = serde_json::to_string(&Theme::DarkBw).unwrap();
        assert_eq!(json, "\"theme-dark-bw\"");
        let parsed: Theme = serde_json::from_str("\"theme-light-green\"").unwrap();
        assert_eq!(parsed, Theme::LightGreen);
    }
}
