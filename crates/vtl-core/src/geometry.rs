#![forbid(unsafe_code)]

//! Rectangles and edge insets.
//!
//! Terminal coordinates: 0-indexed, origin at top-left, right/bottom edges
//! exclusive.

/// A rectangular region of the cell grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns an empty rectangle if the rectangles don't overlap.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Rect::new(x, y, right - x, bottom - y)
        } else {
            Rect::default()
        }
    }

    /// Create a new rectangle inside the current one with the given insets.
    pub fn inner(&self, insets: Sides) -> Rect {
        Rect {
            x: self.x.saturating_add(insets.left),
            y: self.y.saturating_add(insets.top),
            width: self
                .width
                .saturating_sub(insets.left)
                .saturating_sub(insets.right),
            height: self
                .height
                .saturating_sub(insets.top)
                .saturating_sub(insets.bottom),
        }
    }
}

/// Edge insets for separators and padding.
///
/// The timeline uses these for separator insets: a data-row separator keeps a
/// fixed right inset, a section-header separator is inset symmetrically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Sides {
    /// Create insets with specific values.
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Equal insets on all four edges.
    pub const fn all(val: u16) -> Self {
        Self::new(val, val, val, val)
    }

    /// Left/right insets only.
    pub const fn horizontal(val: u16) -> Self {
        Self::new(0, val, 0, val)
    }

    /// Right inset only.
    pub const fn right_only(val: u16) -> Self {
        Self::new(0, val, 0, 0)
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> u16 {
        self.left.saturating_add(self.right)
    }
}

impl From<u16> for Sides {
    fn from(val: u16) -> Self {
        Self::all(val)
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, Sides};

    #[test]
    fn rect_edges_exclusive() {
        let r = Rect::new(2, 3, 4, 5);
        assert_eq!(r.right(), 6);
        assert_eq!(r.bottom(), 8);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 3));
        assert!(!r.contains(2, 8));
    }

    #[test]
    fn rect_edges_saturate_near_max() {
        let r = Rect::new(u16::MAX - 2, u16::MAX - 2, 10, 10);
        assert_eq!(r.right(), u16::MAX);
        assert_eq!(r.bottom(), u16::MAX);
    }

    #[test]
    fn rect_is_empty() {
        assert!(Rect::new(1, 1, 0, 4).is_empty());
        assert!(Rect::new(1, 1, 4, 0).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
        assert!(!Rect::default().contains(0, 0));
    }

    #[test]
    fn rect_intersection_overlap_and_disjoint() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 2, 4, 4);
        assert_eq!(a.intersection(&b), Rect::new(2, 2, 2, 2));

        let c = Rect::new(10, 10, 2, 2);
        assert!(a.intersection(&c).is_empty());
        // Shared edge is not an overlap (right edge exclusive).
        let d = Rect::new(4, 0, 2, 4);
        assert!(a.intersection(&d).is_empty());
    }

    #[test]
    fn rect_inner_applies_insets() {
        let r = Rect::new(0, 0, 20, 4);
        let inner = r.inner(Sides::horizontal(2));
        assert_eq!(inner, Rect::new(2, 0, 16, 4));

        let inner = r.inner(Sides::right_only(2));
        assert_eq!(inner, Rect::new(0, 0, 18, 4));
    }

    #[test]
    fn rect_inner_clamps_oversized_insets() {
        let r = Rect::new(0, 0, 4, 4);
        let inner = r.inner(Sides::all(10));
        assert!(inner.is_empty());
    }

    #[test]
    fn sides_constructors() {
        assert_eq!(Sides::all(3), Sides::from(3));
        assert_eq!(Sides::horizontal(2), Sides::new(0, 2, 0, 2));
        assert_eq!(Sides::right_only(5), Sides::new(0, 5, 0, 0));
        assert_eq!(Sides::horizontal(2).horizontal_sum(), 4);
    }
}
