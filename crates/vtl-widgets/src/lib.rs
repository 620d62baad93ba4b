#![forbid(unsafe_code)]

//! Timeline widgets for VisitLine.
//!
//! The store-visit timeline is rendered by [`timeline::TimelineView`], which
//! binds a read-only [`view_model::TimelineViewModel`] snapshot to pooled
//! [`timeline_cell::TimelineCell`]s and paints them into a buffer.

pub mod cell_pool;
pub mod timeline;
pub mod timeline_cell;
pub mod view_model;

pub use cell_pool::{CellKind, CellPool};
pub use timeline::{PreparedCell, TimelineSource, TimelineView};
pub use timeline_cell::{HeaderFooterView, SeparatorEdges, TimelineCell};
pub use view_model::{NodeIcon, RowViewModel, SectionViewModel, TimelineViewModel, VisitStatus};

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;
use vtl_core::Rect;
use vtl_render::buffer::Buffer;
use vtl_render::cell::Cell;
use vtl_style::Style;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Buffer` within a given `Rect`.
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// A `StatefulWidget` renders with mutable state carried between frames.
///
/// The timeline uses this for its cell pool: recycled cell instances survive
/// across renders, which is exactly the reuse the binding code must be
/// robust against.
pub trait StatefulWidget {
    type State;

    /// Render the widget into the buffer with mutable state.
    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State);
}

/// Helper to apply a style overlay to a cell.
pub(crate) fn apply_style(cell: &mut Cell, style: Style) {
    if let Some(fg) = style.fg {
        cell.fg = fg;
    }
    if let Some(bg) = style.bg {
        cell.bg = bg;
    }
    if let Some(attrs) = style.attrs {
        cell.attrs = attrs;
    }
}

/// Apply a style to all cells in a rectangular area.
///
/// This modifies existing cells, preserving their content.
pub(crate) fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                apply_style(cell, style);
            }
        }
    }
}

/// Draw a text span into a buffer at the given position.
///
/// Returns the x position after the last drawn grapheme.
/// Stops at `max_x` (exclusive).
pub(crate) fn draw_text_span(
    buf: &mut Buffer,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x + w as u16 > max_x {
            break;
        }
        if let Some(c) = grapheme.chars().next() {
            let mut cell = Cell::from_char(c);
            apply_style(&mut cell, style);
            buf.set(x, y, cell);
        }
        x = x.saturating_add(w as u16);
    }
    x
}

/// Draw a text span right-aligned against `right_x` (exclusive).
///
/// Truncates from the left if the span is wider than the space between
/// `min_x` and `right_x`. Returns the x position where drawing started.
pub(crate) fn draw_text_span_right(
    buf: &mut Buffer,
    min_x: u16,
    y: u16,
    content: &str,
    style: Style,
    right_x: u16,
) -> u16 {
    let width = UnicodeWidthStr::width(content) as u16;
    let start = right_x.saturating_sub(width).max(min_x);
    draw_text_span(buf, start, y, content, style, right_x);
    start
}
