//! Light/dark color scheme, persisted under the `theme` localStorage key
//! and applied as a `data-theme` attribute on the document element.

/// Site color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value stored in localStorage and set on `data-theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Decode a stored value. Anything but `"dark"` (including a missing
    /// or mangled entry) falls back to light.
    pub fn from_stored(raw: Option<&str>) -> Theme {
        match raw {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// The other scheme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_storage_values() {
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some(Theme::Dark.as_str())), Theme::Dark);
    }

    #[test]
    fn test_missing_or_mangled_value_defaults_to_light() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("blue")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
    }

    #[test]
    fn test_toggle_flips_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
