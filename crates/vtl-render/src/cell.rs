#![forbid(unsafe_code)]

//! A single styled terminal cell.

/// A compact RGBA color, laid out as `0xRRGGBBAA`.
///
/// Alpha only distinguishes "set" from "unset" here: the timeline renderer
/// treats `TRANSPARENT` as "inherit whatever is underneath" (e.g. a row
/// background that was never filled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// Fully transparent (alpha = 0).
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create an opaque RGB color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an RGBA color with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Whether this color should be painted at all.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a() == 255
    }
}

bitflags::bitflags! {
    /// 8-bit cell style flags, one per SGR attribute the presenter emits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD      = 0b0000_0001;
        /// Dim / decreased intensity.
        const DIM       = 0b0000_0010;
        /// Italic text.
        const ITALIC    = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE = 0b0000_1000;
        /// Reverse video (swap fg/bg).
        const REVERSE   = 0b0001_0000;
    }
}

/// One cell of the grid: a character plus its colors and attributes.
///
/// The default cell is a blank space with transparent background and white
/// foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Displayed character.
    pub ch: char,
    /// Foreground color.
    pub fg: PackedRgba,
    /// Background color.
    pub bg: PackedRgba,
    /// Style attributes.
    pub attrs: StyleFlags,
}

impl Cell {
    /// Create a cell from a single character with default colors.
    #[inline]
    pub const fn from_char(ch: char) -> Self {
        Self {
            ch,
            fg: PackedRgba::WHITE,
            bg: PackedRgba::TRANSPARENT,
            attrs: StyleFlags::empty(),
        }
    }

    /// Check if this cell holds no visible content.
    #[inline]
    pub const fn is_blank(&self) -> bool {
        self.ch == ' ' && !self.bg.is_opaque()
    }

    /// Set the foreground color.
    #[inline]
    pub const fn with_fg(mut self, fg: PackedRgba) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color.
    #[inline]
    pub const fn with_bg(mut self, bg: PackedRgba) -> Self {
        self.bg = bg;
        self
    }

    /// Set the style attributes.
    #[inline]
    pub const fn with_attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = attrs;
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::from_char(' ')
    }
}
