#![forbid(unsafe_code)]

//! Theme with semantic color slots.
//!
//! The timeline never picks raw colors; it reads named slots off a resolved
//! theme handed in by the caller. Slot names follow the design-system roles
//! the screen uses: label tiers, the accent used for the in-progress
//! connector, the completed-row fill, and the neutral section fill.

use std::env;

use vtl_render::cell::PackedRgba;

/// A color that can differ between light and dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveColor {
    /// A fixed color that doesn't change with mode.
    Fixed(PackedRgba),
    /// A color with light/dark variants.
    Adaptive {
        /// Color for light mode.
        light: PackedRgba,
        /// Color for dark mode.
        dark: PackedRgba,
    },
}

impl AdaptiveColor {
    /// Create an adaptive color with light/dark variants.
    #[inline]
    pub const fn adaptive(light: PackedRgba, dark: PackedRgba) -> Self {
        Self::Adaptive { light, dark }
    }

    /// Resolve the color for the given mode.
    #[inline]
    pub const fn resolve(&self, is_dark: bool) -> PackedRgba {
        match self {
            Self::Fixed(c) => *c,
            Self::Adaptive { light, dark } => {
                if is_dark { *dark } else { *light }
            }
        }
    }
}

impl From<PackedRgba> for AdaptiveColor {
    fn from(color: PackedRgba) -> Self {
        Self::Fixed(color)
    }
}

/// Semantic color slots for the timeline screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary label color (headlines, timestamps).
    pub text: AdaptiveColor,
    /// Secondary label color (subheadlines, section headers).
    pub text_muted: AdaptiveColor,
    /// Tertiary label color (placeholders, hints).
    pub text_subtle: AdaptiveColor,
    /// Accent / tint color (in-progress connector and dot).
    pub accent: AdaptiveColor,
    /// Background fill for completed rows.
    pub completed_fill: AdaptiveColor,
    /// Neutral fill for section footer bands.
    pub section_fill: AdaptiveColor,
    /// Separator line color.
    pub separator: AdaptiveColor,
    /// Emergency status glyph color.
    pub emergency: AdaptiveColor,
}

impl Default for Theme {
    fn default() -> Self {
        themes::standard()
    }
}

impl Theme {
    /// Create a new theme builder, seeded from the default theme.
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }

    /// Detect whether dark mode should be used.
    ///
    /// Reads `COLORFGBG` (format `"fg;bg"`); high background indices mean a
    /// light terminal. Defaults to dark, the common terminal case.
    #[must_use]
    pub fn detect_dark_mode() -> bool {
        Self::dark_mode_from_colorfgbg(env::var("COLORFGBG").ok().as_deref())
    }

    fn dark_mode_from_colorfgbg(colorfgbg: Option<&str>) -> bool {
        if let Some(value) = colorfgbg
            && let Some(bg_part) = value.split(';').next_back()
            && let Ok(bg) = bg_part.trim().parse::<u8>()
        {
            return bg != 7 && bg != 15;
        }
        true
    }

    /// Flatten all adaptive colors for a specific mode.
    #[must_use]
    pub fn resolve(&self, is_dark: bool) -> ResolvedTheme {
        ResolvedTheme {
            text: self.text.resolve(is_dark),
            text_muted: self.text_muted.resolve(is_dark),
            text_subtle: self.text_subtle.resolve(is_dark),
            accent: self.accent.resolve(is_dark),
            completed_fill: self.completed_fill.resolve(is_dark),
            section_fill: self.section_fill.resolve(is_dark),
            separator: self.separator.resolve(is_dark),
            emergency: self.emergency.resolve(is_dark),
        }
    }
}

/// A theme with every slot resolved to a fixed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTheme {
    /// Primary label color.
    pub text: PackedRgba,
    /// Secondary label color.
    pub text_muted: PackedRgba,
    /// Tertiary label color.
    pub text_subtle: PackedRgba,
    /// Accent / tint color.
    pub accent: PackedRgba,
    /// Completed-row background fill.
    pub completed_fill: PackedRgba,
    /// Section footer band fill.
    pub section_fill: PackedRgba,
    /// Separator line color.
    pub separator: PackedRgba,
    /// Emergency status glyph color.
    pub emergency: PackedRgba,
}

/// Builder for custom themes, starting from the default palette.
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    /// Create a builder seeded from the default theme.
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Set the primary label color.
    pub fn text(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.text = color.into();
        self
    }

    /// Set the secondary label color.
    pub fn text_muted(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.text_muted = color.into();
        self
    }

    /// Set the tertiary label color.
    pub fn text_subtle(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.text_subtle = color.into();
        self
    }

    /// Set the accent / tint color.
    pub fn accent(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.accent = color.into();
        self
    }

    /// Set the completed-row fill color.
    pub fn completed_fill(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.completed_fill = color.into();
        self
    }

    /// Set the section footer fill color.
    pub fn section_fill(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.section_fill = color.into();
        self
    }

    /// Set the separator color.
    pub fn separator(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.separator = color.into();
        self
    }

    /// Set the emergency glyph color.
    pub fn emergency(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.emergency = color.into();
        self
    }

    /// Finish and return the theme.
    pub fn build(self) -> Theme {
        self.theme
    }
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in palettes.
pub mod themes {
    use super::{AdaptiveColor, Theme};
    use vtl_render::cell::PackedRgba;

    /// The default palette: a light/dark pair of label tiers, accent, and fills.
    pub fn standard() -> Theme {
        Theme {
            text: AdaptiveColor::adaptive(
                PackedRgba::rgb(0x22, 0x2a, 0x33),
                PackedRgba::rgb(0xea, 0xec, 0xee),
            ),
            text_muted: AdaptiveColor::adaptive(
                PackedRgba::rgb(0x55, 0x5e, 0x67),
                PackedRgba::rgb(0xa9, 0xb4, 0xbe),
            ),
            text_subtle: AdaptiveColor::adaptive(
                PackedRgba::rgb(0x78, 0x83, 0x8d),
                PackedRgba::rgb(0x8c, 0x97, 0xa1),
            ),
            accent: AdaptiveColor::adaptive(
                PackedRgba::rgb(0x0a, 0x6e, 0xd1),
                PackedRgba::rgb(0x4d, 0xb1, 0xff),
            ),
            completed_fill: AdaptiveColor::adaptive(
                PackedRgba::rgb(0xea, 0xec, 0xee),
                PackedRgba::rgb(0x2b, 0x33, 0x3b),
            ),
            section_fill: AdaptiveColor::adaptive(
                PackedRgba::rgb(0xf2, 0xf2, 0xf7),
                PackedRgba::rgb(0x1c, 0x22, 0x28),
            ),
            separator: AdaptiveColor::adaptive(
                PackedRgba::rgb(0xd9, 0xd9, 0xd9),
                PackedRgba::rgb(0x3a, 0x42, 0x4a),
            ),
            emergency: AdaptiveColor::adaptive(
                PackedRgba::rgb(0xbb, 0x00, 0x00),
                PackedRgba::rgb(0xff, 0x45, 0x3a),
            ),
        }
    }
}
