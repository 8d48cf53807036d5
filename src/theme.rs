use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Root class consumed by the `dark:` variant in the stylesheet.
    pub fn class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon for the toggle button: shows the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "moon",
            Self::Dark => "sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let theme = Theme::default();
        assert_eq!(theme, Theme::Light);
        assert!(theme.toggled().is_dark());
        assert_eq!(theme.toggled().toggled(), theme);
    }

    #[test]
    fn test_classes_and_icons() {
        assert_eq!(Theme::Light.class(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.toggle_icon(), "moon");
        assert_eq!(Theme::Dark.toggle_icon(), "sun");
    }
}
