pub const FONT_FAMILY: &str = "Arial, sans-serif";

/// Colours applied to the page body and navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background_color: &'static str,
    pub text_color: &'static str,
}

const LIGHT: Palette = Palette {
    background_color: "#ffffff",
    text_color: "#000000",
};

const DARK: Palette = Palette {
    background_color: "#333333",
    text_color: "#ffffff",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    /// Inline style for the root element
    pub fn page_style(self) -> String {
        let palette = self.palette();
        format!(
            "background-color: {}; color: {}; font-family: {};",
            palette.background_color, palette.text_color, FONT_FAMILY
        )
    }

    /// Inline style for the navigation bar
    pub fn nav_style(self) -> String {
        format!("background-color: {};", self.palette().background_color)
    }
}
