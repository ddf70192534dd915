use crate::state::ThemePreference;
use ratatui::style::Color;

/// Theme color palette defining all colors used on the page.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    // Brand colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// A 24-bit color.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Theme {
    /// Palette for the given preference.
    ///
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
        }
    }

    /// Light palette: indigo on near-white.
    ///
    pub fn light() -> Self {
        Theme {
            primary: ColorSpec::rgb(99, 102, 241),    // Indigo
            secondary: ColorSpec::rgb(139, 92, 246),  // Violet
            accent: ColorSpec::rgb(236, 72, 153),     // Pink
            text: ColorSpec::rgb(31, 41, 55),         // Gray 800
            text_secondary: ColorSpec::rgb(75, 85, 99),
            text_muted: ColorSpec::rgb(156, 163, 175),
            background: ColorSpec::rgb(255, 255, 255),
            surface: ColorSpec::rgb(243, 244, 246),
            success: ColorSpec::rgb(16, 185, 129),    // Emerald
            error: ColorSpec::rgb(239, 68, 68),       // Red
            border_active: ColorSpec::rgb(99, 102, 241),
            border_normal: ColorSpec::rgb(209, 213, 219),
            highlight_bg: ColorSpec::rgb(99, 102, 241),
            highlight_fg: ColorSpec::rgb(255, 255, 255),
        }
    }

    /// Dark palette: lighter indigo on slate.
    ///
    pub fn dark() -> Self {
        Theme {
            primary: ColorSpec::rgb(129, 140, 248),   // Indigo 400
            secondary: ColorSpec::rgb(167, 139, 250), // Violet 400
            accent: ColorSpec::rgb(244, 114, 182),    // Pink 400
            text: ColorSpec::rgb(243, 244, 246),
            text_secondary: ColorSpec::rgb(209, 213, 219),
            text_muted: ColorSpec::rgb(107, 114, 128),
            background: ColorSpec::rgb(17, 24, 39),   // Slate 900
            surface: ColorSpec::rgb(31, 41, 55),
            success: ColorSpec::rgb(52, 211, 153),
            error: ColorSpec::rgb(248, 113, 113),
            border_active: ColorSpec::rgb(129, 140, 248),
            border_normal: ColorSpec::rgb(75, 85, 99),
            highlight_bg: ColorSpec::rgb(129, 140, 248),
            highlight_fg: ColorSpec::rgb(17, 24, 39),
        }
    }
}
