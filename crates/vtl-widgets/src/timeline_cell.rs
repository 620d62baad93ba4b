#![forbid(unsafe_code)]

//! Pooled cell views for the timeline.
//!
//! [`TimelineCell`] is the reusable data-row view: bound text fields,
//! separator state, optional background fill, and two explicit overlay slots
//! for the in-progress connector. Overlay cleanup is by slot ownership, not
//! by searching children: a recycled cell keeps whatever was in its slots
//! until the binder clears them.

use vtl_core::{Rect, Sides};
use vtl_render::buffer::Buffer;
use vtl_render::cell::{Cell, PackedRgba, StyleFlags};
use vtl_style::{ResolvedTheme, Style};

use crate::view_model::NodeIcon;
use crate::{draw_text_span, draw_text_span_right, set_style_area};

/// Width of the leading node column.
pub const NODE_COL_WIDTH: u16 = 4;
/// Right inset of a data-row separator (20pt in the source design).
pub const SEPARATOR_RIGHT_INSET: u16 = 2;
/// Symmetric inset of the section-header bottom separator (16pt in the
/// source design).
pub const HEADER_SEPARATOR_INSET: u16 = 2;
/// Height of the section footer band (30pt in the source design).
pub const FOOTER_HEIGHT: u16 = 2;
/// Fixed anchor column of the in-progress dot marker.
pub const OVERLAY_DOT_X: u16 = 1;
/// Fixed height of the in-progress connector line.
pub const OVERLAY_LINE_HEIGHT: u16 = 1;

/// The in-progress connector line slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorLine {
    /// Tint, taken from the theme accent when the slot is set.
    pub tint: PackedRgba,
}

/// The in-progress dot marker slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotMarker {
    /// Tint, taken from the theme accent when the slot is set.
    pub tint: PackedRgba,
}

bitflags::bitflags! {
    /// Which edges of a header/footer view carry a separator.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SeparatorEdges: u8 {
        const TOP    = 0b01;
        const BOTTOM = 0b10;
    }
}

/// Reusable data-row cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineCell {
    /// Headline text (store name).
    pub headline: String,
    /// Subheadline text (store address).
    pub subheadline: String,
    /// Primary timestamp.
    pub timestamp: String,
    /// Secondary timestamp (interval).
    pub secondary_timestamp: String,
    /// Sub-attribute text (contact).
    pub sub_attribute: String,
    /// Emergency status glyph indicator.
    pub emergency: bool,
    /// Leading node icon.
    pub node_icon: NodeIcon,
    /// Background fill; `None` leaves the buffer untouched.
    pub background: Option<PackedRgba>,
    /// Whether the separator line is hidden.
    pub separator_hidden: bool,
    /// Separator insets.
    pub separator_inset: Sides,
    /// Disclosure indicator at the trailing edge.
    pub accessory: bool,
    /// In-progress connector line slot.
    pub connector: Option<ConnectorLine>,
    /// In-progress dot marker slot.
    pub dot: Option<DotMarker>,
}

impl TimelineCell {
    /// Clear both overlay slots.
    ///
    /// Must run before re-binding a recycled cell, otherwise a prior row's
    /// overlay leaks into the new one.
    pub fn clear_overlay(&mut self) {
        self.connector = None;
        self.dot = None;
    }

    /// Whether either overlay slot is set.
    pub fn has_overlay(&self) -> bool {
        self.connector.is_some() || self.dot.is_some()
    }

    /// Intrinsic height in rows: two text lines, a contact line when bound,
    /// and the separator row.
    pub fn height(&self) -> u16 {
        let contact = u16::from(!self.sub_attribute.is_empty());
        2 + contact + 1
    }

    /// Paint the cell into `area`. Rows beyond the area are clipped by the
    /// buffer.
    pub fn paint(&self, area: Rect, buf: &mut Buffer, theme: &ResolvedTheme) {
        if area.is_empty() {
            return;
        }

        if let Some(bg) = self.background {
            set_style_area(buf, area, Style::new().bg(bg));
        }
        let base_bg = self.background;
        let with_bg = |style: Style| match base_bg {
            Some(bg) => style.bg(bg),
            None => style,
        };

        let content_x = area.x.saturating_add(NODE_COL_WIDTH);
        let right = area.right();
        let y0 = area.y;

        // Node column.
        let node_style = with_bg(Style::new().fg(theme.accent));
        draw_text_span(
            buf,
            area.x.saturating_add(1),
            y0,
            &self.node_icon.glyph().to_string(),
            node_style,
            content_x,
        );

        // First line: headline, emergency glyph, timestamp, accessory.
        let mut text_right = right;
        if self.accessory {
            text_right = right.saturating_sub(1);
            draw_text_span(
                buf,
                text_right,
                y0,
                "›",
                with_bg(Style::new().fg(theme.text_subtle)),
                right,
            );
            text_right = text_right.saturating_sub(1);
        }
        let ts_style = with_bg(Style::new().fg(theme.text).attrs(StyleFlags::BOLD));
        let mut ts_start = text_right;
        if !self.timestamp.is_empty() {
            ts_start = draw_text_span_right(buf, content_x, y0, &self.timestamp, ts_style, text_right);
        }
        if self.emergency {
            ts_start = ts_start.saturating_sub(2);
            draw_text_span(
                buf,
                ts_start,
                y0,
                "!",
                with_bg(Style::new().fg(theme.emergency).attrs(StyleFlags::BOLD)),
                text_right,
            );
        }
        let headline_style = with_bg(Style::new().fg(theme.text).attrs(StyleFlags::BOLD));
        draw_text_span(
            buf,
            content_x,
            y0,
            &self.headline,
            headline_style,
            ts_start.saturating_sub(1),
        );

        // Second line: subheadline and secondary timestamp.
        let y1 = y0.saturating_add(1);
        if y1 >= area.bottom() {
            return;
        }
        if !self.secondary_timestamp.is_empty() {
            draw_text_span_right(
                buf,
                content_x,
                y1,
                &self.secondary_timestamp,
                with_bg(Style::new().fg(theme.text)),
                text_right,
            );
        }
        draw_text_span(
            buf,
            content_x,
            y1,
            &self.subheadline,
            with_bg(Style::new().fg(theme.text_muted)),
            text_right,
        );

        // Optional contact line.
        if !self.sub_attribute.is_empty() && y1.saturating_add(1) < area.bottom() {
            draw_text_span(
                buf,
                content_x,
                y1.saturating_add(1),
                &self.sub_attribute,
                with_bg(Style::new().fg(theme.text_muted)),
                text_right,
            );
        }

        // Last row: overlay connector, or the separator line.
        let sep_y = area.y.saturating_add(self.height().saturating_sub(1));
        if sep_y >= area.bottom() {
            return;
        }
        if self.has_overlay() {
            self.paint_overlay(area, sep_y, buf);
        } else if !self.separator_hidden {
            let sep_area = Rect::new(area.x, sep_y, area.width, 1).inner(self.separator_inset);
            for x in sep_area.x..sep_area.right() {
                buf.set(x, sep_y, self.decorated('─', theme.separator));
            }
        }
    }

    fn paint_overlay(&self, area: Rect, y: u16, buf: &mut Buffer) {
        let dot_x = area.x.saturating_add(OVERLAY_DOT_X);
        if let Some(dot) = self.dot {
            buf.set(dot_x, y, self.decorated('●', dot.tint));
        }
        if let Some(line) = self.connector {
            for row in 0..OVERLAY_LINE_HEIGHT {
                let ly = y.saturating_add(row);
                for x in dot_x.saturating_add(1)..area.right() {
                    buf.set(x, ly, self.decorated('─', line.tint));
                }
            }
        }
    }

    /// A decoration cell that keeps the row's background fill.
    fn decorated(&self, ch: char, fg: PackedRgba) -> Cell {
        let cell = Cell::from_char(ch).with_fg(fg);
        match self.background {
            Some(bg) => cell.with_bg(bg),
            None => cell,
        }
    }
}

/// Visual style of a reusable header/footer view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderFooterStyle {
    /// Title line plus optional separators.
    #[default]
    Title,
    /// Visually empty band, used for section footers.
    Empty,
}

/// Reusable section header/footer view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderFooterView {
    /// Title text (headers only).
    pub title: String,
    /// Title or empty band.
    pub style: HeaderFooterStyle,
    /// Background fill; `None` leaves the buffer untouched.
    pub background: Option<PackedRgba>,
    /// Which edges carry a separator.
    pub separators: SeparatorEdges,
    /// Separator insets.
    pub separator_inset: Sides,
}

impl HeaderFooterView {
    /// Height in rows for this view's style.
    pub fn height(&self) -> u16 {
        match self.style {
            HeaderFooterStyle::Title => 2,
            HeaderFooterStyle::Empty => FOOTER_HEIGHT,
        }
    }

    /// Paint into `area`.
    pub fn paint(&self, area: Rect, buf: &mut Buffer, theme: &ResolvedTheme) {
        if area.is_empty() {
            return;
        }
        if let Some(bg) = self.background {
            set_style_area(
                buf,
                Rect::new(area.x, area.y, area.width, self.height()).intersection(&area),
                Style::new().bg(bg),
            );
        }
        if self.style == HeaderFooterStyle::Empty {
            return;
        }

        draw_text_span(
            buf,
            area.x.saturating_add(1),
            area.y,
            &self.title,
            Style::new().fg(theme.text_muted).attrs(StyleFlags::BOLD),
            area.right(),
        );

        if self.separators.contains(SeparatorEdges::BOTTOM) {
            let y = area.y.saturating_add(self.height().saturating_sub(1));
            if y >= area.bottom() {
                return;
            }
            let sep_area = Rect::new(area.x, y, area.width, 1).inner(self.separator_inset);
            for x in sep_area.x..sep_area.right() {
                buf.set(x, y, Cell::from_char('─').with_fg(theme.separator));
            }
        }
    }
}
