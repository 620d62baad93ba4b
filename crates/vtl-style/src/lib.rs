#![forbid(unsafe_code)]

//! Styling for VisitLine: the [`Style`] overlay type and the semantic
//! [`theme`] slots the timeline consumes.

pub mod theme;

pub use theme::{AdaptiveColor, ResolvedTheme, Theme, ThemeBuilder};

use vtl_render::cell::{PackedRgba, StyleFlags};

/// A partial style: unset fields leave the target cell untouched.
///
/// Styles are overlays, not full cell states. Merging keeps `self`'s fields
/// and fills gaps from the other style, so widget code can layer a highlight
/// over a base style without clobbering it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color, if set.
    pub fg: Option<PackedRgba>,
    /// Background color, if set.
    pub bg: Option<PackedRgba>,
    /// Attribute flags, if set.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// Create an empty style.
    #[inline]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[inline]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[inline]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set the attribute flags.
    #[inline]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Add bold to the attribute flags.
    #[inline]
    pub fn bold(mut self) -> Self {
        self.attrs = Some(self.attrs.unwrap_or(StyleFlags::empty()) | StyleFlags::BOLD);
        self
    }

    /// Check if no field is set.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Merge with another style; fields set on `self` win.
    #[must_use]
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            fg: self.fg.or(other.fg),
            bg: self.bg.or(other.bg),
            attrs: self.attrs.or(other.attrs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Style;
    use vtl_render::cell::{PackedRgba, StyleFlags};

    #[test]
    fn empty_style_has_no_fields() {
        assert!(Style::new().is_empty());
        assert!(Style::default().is_empty());
        assert!(!Style::new().fg(PackedRgba::WHITE).is_empty());
    }

    #[test]
    fn merge_prefers_self() {
        let a = Style::new().fg(PackedRgba::rgb(1, 1, 1));
        let b = Style::new()
            .fg(PackedRgba::rgb(2, 2, 2))
            .bg(PackedRgba::rgb(3, 3, 3));
        let merged = a.merge(&b);
        assert_eq!(merged.fg, Some(PackedRgba::rgb(1, 1, 1)));
        assert_eq!(merged.bg, Some(PackedRgba::rgb(3, 3, 3)));
    }

    #[test]
    fn bold_accumulates_attrs() {
        let style = Style::new().attrs(StyleFlags::UNDERLINE).bold();
        let attrs = style.attrs.unwrap();
        assert!(attrs.contains(StyleFlags::BOLD));
        assert!(attrs.contains(StyleFlags::UNDERLINE));
    }
}
