use serde::{Deserialize, Serialize};

use crate::app::services::persisted::Persisted;

/// Storage key the preference lives under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse the stored literal. Only the exact strings `"light"` and
    /// `"dark"` are accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Persisted for ThemePreference {
    const KEY: &'static str = THEME_KEY;

    fn to_stored(&self) -> &str {
        self.as_str()
    }

    fn from_stored(value: &str) -> Option<Self> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemePreference::default(), ThemePreference::Light);
    }

    #[test]
    fn test_parse_exact_literals_only() {
        assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::parse("light"), Some(ThemePreference::Light));
        assert_eq!(ThemePreference::parse("Dark"), None);
        assert_eq!(ThemePreference::parse(" dark"), None);
        assert_eq!(ThemePreference::parse(""), None);
    }

    #[test]
    fn test_toggled_is_involution() {
        for pref in [ThemePreference::Light, ThemePreference::Dark] {
            assert_ne!(pref.toggled(), pref);
            assert_eq!(pref.toggled().toggled(), pref);
        }
    }

    #[test]
    fn test_serialization_matches_stored_literal() {
        let json = serde_json::to_string(&ThemePreference::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        assert_eq!(ThemePreference::Dark.to_stored(), "dark");
    }
}
