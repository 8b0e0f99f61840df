//! Theme preference and chart colours.

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light surfaces.
    #[default]
    Light,
    /// Dark surfaces.
    Dark,
}

impl ThemeMode {
    /// Identifier used in the `data-theme` attribute and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; unknown values fall back to light.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Primary accent used by bars and active menu entries.
pub const PRIMARY: &str = "#1976D2";
/// Fill for revenue chart bars.
pub const CHART_BAR: &str = "#42A5F5";
/// Growth badge colour for non-negative change.
pub const GROWTH_UP: &str = "#2E7D32";
/// Growth badge colour for negative change.
pub const GROWTH_DOWN: &str = "#D32F2F";

#[cfg(test)]
mod tests {
    use super::ThemeMode;

    #[test]
    fn theme_mode_round_trips_through_storage_value() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::parse(mode.as_str()), mode);
        }
        assert_eq!(ThemeMode::parse("neon"), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }
}
