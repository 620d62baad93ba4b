#![forbid(unsafe_code)]

//! The timeline data source and view.
//!
//! [`TimelineSource`] is the binding layer: it maps `(section, row)` indices
//! of a view-model snapshot to prepared, fully-bound cells, applying the
//! separator, background, accessory, and overlay rules. [`TimelineView`]
//! drives the source over a buffer area, recycling cells through a
//! [`CellPool`] carried as widget state.

use unicode_width::UnicodeWidthStr;
use vtl_core::{Rect, Sides};
use vtl_render::buffer::Buffer;
use vtl_style::{ResolvedTheme, Style};

use crate::cell_pool::CellPool;
use crate::timeline_cell::{
    ConnectorLine, DotMarker, HEADER_SEPARATOR_INSET, HeaderFooterStyle, HeaderFooterView,
    SEPARATOR_RIGHT_INSET, SeparatorEdges, TimelineCell,
};
use crate::view_model::{TimelineViewModel, VisitStatus};
use crate::{StatefulWidget, Widget, draw_text_span};

/// Caption shown for a section with no visits.
pub const EMPTY_SECTION_CAPTION: &str = "There are no scheduled store visits";

/// Height of the placeholder row.
pub const PLACEHOLDER_HEIGHT: u16 = 2;

/// A cell prepared for one `(section, row)` slot.
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedCell {
    /// Empty-section placeholder: centered caption, non-interactive.
    Placeholder(PlaceholderCell),
    /// A bound data row.
    Data(TimelineCell),
    /// Minimal fallback when the pool cannot supply a data cell.
    Fallback,
}

impl PreparedCell {
    /// Whether the row responds to selection. Only data rows do.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Data(_))
    }

    /// Height in rows.
    pub fn height(&self) -> u16 {
        match self {
            Self::Placeholder(_) => PLACEHOLDER_HEIGHT,
            Self::Data(cell) => cell.height(),
            Self::Fallback => 1,
        }
    }

    /// Paint into `area`.
    pub fn paint(&self, area: Rect, buf: &mut Buffer, theme: &ResolvedTheme) {
        match self {
            Self::Placeholder(placeholder) => placeholder.paint(area, buf, theme),
            Self::Data(cell) => cell.paint(area, buf, theme),
            Self::Fallback => {}
        }
    }
}

/// Non-interactive placeholder for an empty section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderCell {
    /// Caption text, centered in the row.
    pub caption: String,
}

impl PlaceholderCell {
    /// Paint the centered caption.
    pub fn paint(&self, area: Rect, buf: &mut Buffer, theme: &ResolvedTheme) {
        if area.is_empty() {
            return;
        }
        let width = UnicodeWidthStr::width(self.caption.as_str()) as u16;
        let x = area
            .x
            .saturating_add(area.width.saturating_sub(width) / 2);
        draw_text_span(
            buf,
            x,
            area.y,
            &self.caption,
            Style::new().fg(theme.text_subtle),
            area.right(),
        );
    }
}

/// The binding layer between a view-model snapshot and pooled cells.
///
/// Pure with respect to its inputs: the same indices, snapshot, and theme
/// always produce the same prepared cell, apart from which pool instance
/// gets reused.
#[derive(Debug, Clone, Copy)]
pub struct TimelineSource<'a> {
    view_model: &'a TimelineViewModel,
    theme: &'a ResolvedTheme,
}

impl<'a> TimelineSource<'a> {
    /// Create a source over a snapshot and a resolved theme.
    pub fn new(view_model: &'a TimelineViewModel, theme: &'a ResolvedTheme) -> Self {
        Self { view_model, theme }
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.view_model.sections.len()
    }

    /// Number of row slots in a section: at least one, so slot 0 can show
    /// the empty-section placeholder.
    pub fn row_count(&self, section: usize) -> usize {
        self.view_model
            .sections
            .get(section)
            .map_or(0, |s| s.rows.len().max(1))
    }

    /// Bind the cell for `(section, row)`.
    ///
    /// Dequeues from the pool and applies the styling rules; a pool miss
    /// yields [`PreparedCell::Fallback`] so a render pass never fails.
    pub fn prepare_row(&self, pool: &mut CellPool, section: usize, row: usize) -> PreparedCell {
        let Some(section_vm) = self.view_model.sections.get(section) else {
            return PreparedCell::Fallback;
        };

        // A section flagged empty shows the placeholder; so does a section
        // whose row list is empty despite the flag, since slot 0 is reserved
        // either way.
        if section_vm.is_empty_section || section_vm.rows.is_empty() {
            return PreparedCell::Placeholder(PlaceholderCell {
                caption: EMPTY_SECTION_CAPTION.to_string(),
            });
        }

        let Some(row_vm) = section_vm.rows.get(row) else {
            return PreparedCell::Fallback;
        };
        let Some(mut cell) = pool.dequeue_timeline() else {
            return PreparedCell::Fallback;
        };

        cell.separator_hidden = false;

        cell.headline = row_vm.store_name.clone();
        cell.subheadline = row_vm.store_address.clone();
        cell.timestamp = row_vm.time.clone();
        cell.secondary_timestamp = row_vm.time_interval.clone();
        cell.emergency = row_vm.is_emergency;
        cell.sub_attribute = row_vm.contact.clone();
        cell.node_icon = row_vm.status_icon;

        cell.background = match row_vm.status {
            VisitStatus::Complete => Some(self.theme.completed_fill),
            _ => None,
        };

        // No separator above the first row of a section.
        if row == 0 {
            cell.separator_hidden = true;
        }

        cell.clear_overlay();
        if row_vm.status == VisitStatus::InProgress {
            cell.connector = Some(ConnectorLine {
                tint: self.theme.accent,
            });
            cell.dot = Some(DotMarker {
                tint: self.theme.accent,
            });
            cell.separator_hidden = true;
        }

        cell.accessory = true;
        cell.separator_inset = Sides::right_only(SEPARATOR_RIGHT_INSET);

        PreparedCell::Data(cell)
    }

    /// Bind the header view for a section, or `None` on pool miss (the
    /// header is suppressed, same as the footer).
    pub fn prepare_header(&self, pool: &mut CellPool, section: usize) -> Option<HeaderFooterView> {
        let mut header = pool.dequeue_header_footer()?;
        header.title = self
            .view_model
            .sections
            .get(section)
            .map(|s| s.header.clone())
            .unwrap_or_default();
        header.style = HeaderFooterStyle::Title;
        header.background = None;
        header.separators = SeparatorEdges::BOTTOM;
        header.separator_inset = Sides::horizontal(HEADER_SEPARATOR_INSET);
        Some(header)
    }

    /// Bind the footer band shared by every section, or `None` on pool miss.
    pub fn prepare_footer(&self, pool: &mut CellPool) -> Option<HeaderFooterView> {
        let mut footer = pool.dequeue_header_footer()?;
        footer.title.clear();
        footer.style = HeaderFooterStyle::Empty;
        footer.background = Some(self.theme.section_fill);
        footer.separators = SeparatorEdges::empty();
        footer.separator_inset = Sides::default();
        Some(footer)
    }
}

/// The timeline screen as a widget.
///
/// Renders every section (header, rows, footer band) top to bottom until the
/// area is exhausted. The cell pool travels as widget state so instances are
/// recycled across frames.
#[derive(Debug, Clone, Copy)]
pub struct TimelineView<'a> {
    view_model: &'a TimelineViewModel,
    theme: ResolvedTheme,
}

impl<'a> TimelineView<'a> {
    /// Create a view over a snapshot with a resolved theme.
    pub fn new(view_model: &'a TimelineViewModel, theme: ResolvedTheme) -> Self {
        Self { view_model, theme }
    }
}

impl StatefulWidget for TimelineView<'_> {
    type State = CellPool;

    fn render(&self, area: Rect, buf: &mut Buffer, pool: &mut CellPool) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "TimelineView",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }

        let theme = self.theme;
        let source = TimelineSource::new(self.view_model, &theme);
        let mut y = area.y;

        for section in 0..source.section_count() {
            if y >= area.bottom() {
                break;
            }

            if let Some(header) = source.prepare_header(pool, section) {
                y = self.paint_slice(buf, area, y, header.height(), |slice, buf| {
                    header.paint(slice, buf, &theme);
                });
                pool.recycle_header_footer(header);
            }

            for row in 0..source.row_count(section) {
                if y >= area.bottom() {
                    break;
                }
                let prepared = source.prepare_row(pool, section, row);
                y = self.paint_slice(buf, area, y, prepared.height(), |slice, buf| {
                    prepared.paint(slice, buf, &theme);
                });
                if let PreparedCell::Data(cell) = prepared {
                    pool.recycle_timeline(cell);
                }
            }

            if y >= area.bottom() {
                break;
            }
            if let Some(footer) = source.prepare_footer(pool) {
                y = self.paint_slice(buf, area, y, footer.height(), |slice, buf| {
                    footer.paint(slice, buf, &theme);
                });
                pool.recycle_header_footer(footer);
            }
        }
    }
}

impl Widget for TimelineView<'_> {
    /// Render with a throwaway pool. Hosts that keep cells alive across
    /// frames should use the `StatefulWidget` form instead.
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut pool = CellPool::for_timeline();
        StatefulWidget::render(self, area, buf, &mut pool);
    }
}

impl TimelineView<'_> {
    /// Paint one vertical slice of `height` rows starting at `y`, clipped to
    /// the area, and return the y after it.
    fn paint_slice(
        &self,
        buf: &mut Buffer,
        area: Rect,
        y: u16,
        height: u16,
        paint: impl FnOnce(Rect, &mut Buffer),
    ) -> u16 {
        let avail = area.bottom().saturating_sub(y);
        let slice = Rect::new(area.x, y, area.width, height.min(avail));
        if !slice.is_empty() {
            paint(slice, buf);
        }
        y.saturating_add(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_model::{NodeIcon, RowViewModel, SectionViewModel};
    use proptest::prelude::*;
    use vtl_style::Theme;

    fn theme() -> ResolvedTheme {
        Theme::default().resolve(true)
    }

    fn section_of(statuses: &[VisitStatus]) -> SectionViewModel {
        let rows = statuses
            .iter()
            .enumerate()
            .map(|(i, &status)| {
                RowViewModel::new(format!("Store {i}"))
                    .address(format!("{i} Main St"))
                    .time(format!("0{i}:00"))
                    .time_interval("30 min")
                    .status(status)
            })
            .collect();
        SectionViewModel::new("Today", rows)
    }

    fn data_cell(prepared: PreparedCell) -> TimelineCell {
        match prepared {
            PreparedCell::Data(cell) => cell,
            other => panic!("expected data cell, got {other:?}"),
        }
    }

    fn row_string(buf: &Buffer, y: u16) -> String {
        buf.row_cells(y).iter().map(|c| c.ch).collect()
    }

    #[test]
    fn row_count_reserves_placeholder_slot() {
        let vm = TimelineViewModel::new(vec![
            SectionViewModel::empty("Today"),
            section_of(&[VisitStatus::Planned, VisitStatus::Planned]),
        ]);
        let t = theme();
        let source = TimelineSource::new(&vm, &t);
        assert_eq!(source.section_count(), 2);
        assert_eq!(source.row_count(0), 1);
        assert_eq!(source.row_count(1), 2);
        assert_eq!(source.row_count(99), 0);
    }

    #[test]
    fn empty_section_yields_placeholder() {
        let vm = TimelineViewModel::new(vec![SectionViewModel::empty("Today")]);
        let t = theme();
        let source = TimelineSource::new(&vm, &t);
        let mut pool = CellPool::for_timeline();

        let prepared = source.prepare_row(&mut pool, 0, 0);
        let PreparedCell::Placeholder(placeholder) = &prepared else {
            panic!("expected placeholder, got {prepared:?}");
        };
        assert_eq!(placeholder.caption, EMPTY_SECTION_CAPTION);
        assert!(!prepared.is_interactive());
    }

    #[test]
    fn mismatched_flag_with_no_rows_also_yields_placeholder() {
        // is_empty_section == false but rows empty: slot 0 must still render
        // something, and the placeholder is the only honest option.
        let section = SectionViewModel::new("Today", Vec::new());
        assert!(!section.is_empty_section);
        let vm = TimelineViewModel::new(vec![section]);
        let t = theme();
        let source = TimelineSource::new(&vm, &t);
        assert_eq!(source.row_count(0), 1);

        let prepared = source.prepare_row(&mut CellPool::for_timeline(), 0, 0);
        assert!(matches!(prepared, PreparedCell::Placeholder(_)));
    }

    #[test]
    fn first_row_hides_separator() {
        let vm = TimelineViewModel::new(vec![section_of(&[
            VisitStatus::Planned,
            VisitStatus::Planned,
        ])]);
        let t = theme();
        let source = TimelineSource::new(&vm, &t);
        let mut pool = CellPool::for_timeline();

        let first = data_cell(source.prepare_row(&mut pool, 0, 0));
        assert!(first.separator_hidden);

        let second = data_cell(source.prepare_row(&mut pool, 0, 1));
        assert!(!second.separator_hidden);
        assert_eq!(second.separator_inset, Sides::right_only(SEPARATOR_RIGHT_INSET));
    }

    #[test]
    fn in_progress_sets_overlay_and_hides_separator() {
        let vm = TimelineViewModel::new(vec![section_of(&[
            VisitStatus::Planned,
            VisitStatus::InProgress,
        ])]);
        let t = theme();
        let source = TimelineSource::new(&vm, &t);
        let mut pool = CellPool::for_timeline();

        let cell = data_cell(source.prepare_row(&mut pool, 0, 1));
        assert!(cell.separator_hidden, "overlay supersedes the separator");
        assert_eq!(cell.connector.map(|c| c.tint), Some(t.accent));
        assert_eq!(cell.dot.map(|d| d.tint), Some(t.accent));
    }

    #[test]
    fn rebinding_a_recycled_cell_clears_stale_overlay() {
        let vm = TimelineViewModel::new(vec![section_of(&[
            VisitStatus::InProgress,
            VisitStatus::Planned,
        ])]);
        let t = theme();
        let source = TimelineSource::new(&vm, &t);
        let mut pool = CellPool::for_timeline();

        let in_progress = data_cell(source.prepare_row(&mut pool, 0, 0));
        assert!(in_progress.has_overlay());
        pool.recycle_timeline(in_progress);

        // The same instance comes back for a different row.
        let reused = data_cell(source.prepare_row(&mut pool, 0, 1));
        assert!(!reused.has_overlay());

        // And back again for the in-progress row: exactly one line + one dot.
        pool.recycle_timeline(reused);
        let again = data_cell(source.prepare_row(&mut pool, 0, 0));
        assert!(again.connector.is_some());
        assert!(again.dot.is_some());
    }

    #[test]
    fn complete_rows_get_the_completed_fill() {
        let vm = TimelineViewModel::new(vec![section_of(&[
            VisitStatus::Complete,
            VisitStatus::Planned,
        ])]);
        let t = theme();
        let source = TimelineSource::new(&vm, &t);
        let mut pool = CellPool::for_timeline();

        let complete = data_cell(source.prepare_row(&mut pool, 0, 0));
        assert_eq!(complete.background, Some(t.completed_fill));

        let planned = data_cell(source.prepare_row(&mut pool, 0, 1));
        assert_eq!(planned.background, None);
    }

    #[test]
    fn recycled_completed_cell_background_is_reset() {
        let vm = TimelineViewModel::new(vec![section_of(&[
            VisitStatus::Complete,
            VisitStatus::Planned,
        ])]);
        let t = theme();
        let source = TimelineSource::new(&vm, &t);
        let mut pool = CellPool::for_timeline();

        let complete = data_cell(source.prepare_row(&mut pool, 0, 0));
        pool.recycle_timeline(complete);
        let planned = data_cell(source.prepare_row(&mut pool, 0, 1));
        assert_eq!(planned.background, None);
    }

    #[test]
    fn data_rows_carry_the_disclosure_accessory() {
        let vm = TimelineViewModel::new(vec![section_of(&[VisitStatus::Planned])]);
        let t = theme();
        let source = TimelineSource::new(&vm, &t);
        let mut pool = CellPool::for_timeline();

        let prepared = source.prepare_row(&mut pool, 0, 0);
        assert!(prepared.is_interactive());
        assert!(data_cell(prepared).accessory);
    }

    #[test]
    fn binding_maps_all_fields() {
        let row = RowViewModel::new("Acme Market")
            .address("12 High St")
            .time("09:00")
            .time_interval("45 min")
            .contact("J. Doe")
            .emergency(true)
            .icon(NodeIcon::Warning);
        let vm = TimelineViewModel::new(vec![SectionViewModel::new("Today", vec![row])]);
        let t = theme();
        let source = TimelineSource::new(&vm, &t);

        let cell = data_cell(source.prepare_row(&mut CellPool::for_timeline(), 0, 0));
        assert_eq!(cell.headline, "Acme Market");
        assert_eq!(cell.subheadline, "12 High St");
        assert_eq!(cell.timestamp, "09:00");
        assert_eq!(cell.secondary_timestamp, "45 min");
        assert_eq!(cell.sub_attribute, "J. Doe");
        assert!(cell.emergency);
        assert_eq!(cell.node_icon, NodeIcon::Warning);
        assert_eq!(cell.height(), 4, "contact line adds a row");
    }

    #[test]
    fn pool_miss_degrades_to_fallback() {
        let vm = TimelineViewModel::new(vec![section_of(&[VisitStatus::Planned])]);
        let t = theme();
        let source = TimelineSource::new(&vm, &t);
        let mut empty_pool = CellPool::new();

        let prepared = source.prepare_row(&mut empty_pool, 0, 0);
        assert_eq!(prepared, PreparedCell::Fallback);
        assert!(!prepared.is_interactive());

        // Header and footer are both suppressed on a miss.
        assert!(source.prepare_header(&mut empty_pool, 0).is_none());
        assert!(source.prepare_footer(&mut empty_pool).is_none());
    }

    #[test]
    fn header_pool_miss_suppresses_header_rows() {
        let vm = TimelineViewModel::new(vec![section_of(&[VisitStatus::Planned])]);
        let t = theme();
        let view = TimelineView::new(&vm, t);
        let mut empty_pool = CellPool::new();
        let mut buf = Buffer::new(40, 10);
        StatefulWidget::render(&view, buf.bounds(), &mut buf, &mut empty_pool);

        // No header title, no leftover header rows: the section paints
        // nothing when every dequeue misses.
        assert!(!row_string(&buf, 0).contains("Today"));
    }

    #[test]
    fn widget_form_renders_with_a_throwaway_pool() {
        let vm = TimelineViewModel::new(vec![section_of(&[VisitStatus::Planned])]);
        let t = theme();
        let view = TimelineView::new(&vm, t);
        let mut buf = Buffer::new(40, 10);
        Widget::render(&view, buf.bounds(), &mut buf);
        assert!(row_string(&buf, 0).contains("Today"));
    }

    #[test]
    fn header_and_footer_binding() {
        let vm = TimelineViewModel::new(vec![section_of(&[VisitStatus::Planned])]);
        let t = theme();
        let source = TimelineSource::new(&vm, &t);
        let mut pool = CellPool::for_timeline();

        let header = source.prepare_header(&mut pool, 0).unwrap();
        assert_eq!(header.title, "Today");
        assert_eq!(header.style, HeaderFooterStyle::Title);
        assert!(header.separators.contains(SeparatorEdges::BOTTOM));
        assert_eq!(
            header.separator_inset,
            Sides::horizontal(HEADER_SEPARATOR_INSET)
        );

        let footer = source.prepare_footer(&mut pool).unwrap();
        assert_eq!(footer.style, HeaderFooterStyle::Empty);
        assert_eq!(footer.background, Some(t.section_fill));
        assert!(footer.title.is_empty());
    }

    #[test]
    fn recycled_footer_rebinds_cleanly_as_header() {
        let vm = TimelineViewModel::new(vec![section_of(&[VisitStatus::Planned])]);
        let t = theme();
        let source = TimelineSource::new(&vm, &t);
        let mut pool = CellPool::for_timeline();

        let footer = source.prepare_footer(&mut pool).unwrap();
        pool.recycle_header_footer(footer);
        let header = source.prepare_header(&mut pool, 0).unwrap();
        assert_eq!(header.style, HeaderFooterStyle::Title);
        assert_eq!(header.background, None);
        assert_eq!(header.title, "Today");
    }

    // Example scenario from the screen's acceptance notes: one section with
    // statuses [Complete, InProgress, Planned].
    #[test]
    fn mixed_status_section_scenario() {
        let vm = TimelineViewModel::new(vec![section_of(&[
            VisitStatus::Complete,
            VisitStatus::InProgress,
            VisitStatus::Planned,
        ])]);
        let t = theme();
        let source = TimelineSource::new(&vm, &t);
        let mut pool = CellPool::for_timeline();

        let row0 = data_cell(source.prepare_row(&mut pool, 0, 0));
        assert!(row0.separator_hidden);
        assert_eq!(row0.background, Some(t.completed_fill));
        assert!(!row0.has_overlay());

        let row1 = data_cell(source.prepare_row(&mut pool, 0, 1));
        assert!(row1.separator_hidden);
        assert!(row1.has_overlay());
        assert_eq!(row1.background, None);

        let row2 = data_cell(source.prepare_row(&mut pool, 0, 2));
        assert!(!row2.separator_hidden);
        assert!(!row2.has_overlay());
        assert_eq!(row2.background, None);
    }

    #[test]
    fn view_paints_sections_in_order() {
        let vm = TimelineViewModel::new(vec![
            SectionViewModel::new(
                "Today",
                vec![
                    RowViewModel::new("Acme Market").time("09:00"),
                    RowViewModel::new("Beta Stores")
                        .time("11:00")
                        .status(VisitStatus::InProgress),
                ],
            ),
            SectionViewModel::empty("Tomorrow"),
        ]);
        let t = theme();
        let view = TimelineView::new(&vm, t);
        let mut pool = CellPool::for_timeline();
        let mut buf = Buffer::new(50, 20);
        StatefulWidget::render(&view, buf.bounds(), &mut buf, &mut pool);

        // Header (2 rows), then two 3-row cells, footer band, second header,
        // placeholder.
        assert!(row_string(&buf, 0).contains("Today"));
        assert!(row_string(&buf, 2).contains("Acme Market"));
        // First row's separator row is blank.
        assert!(!row_string(&buf, 4).contains('─'));
        assert!(row_string(&buf, 5).contains("Beta Stores"));
        // In-progress connector on the second row's last line.
        assert_eq!(buf.get(1, 7).map(|c| c.ch), Some('●'));
        assert_eq!(buf.get(1, 7).map(|c| c.fg), Some(t.accent));
        assert_eq!(buf.get(30, 7).map(|c| c.ch), Some('─'));
        // Footer band.
        assert_eq!(buf.get(0, 8).map(|c| c.bg), Some(t.section_fill));
        assert_eq!(buf.get(49, 9).map(|c| c.bg), Some(t.section_fill));
        // Second section.
        assert!(row_string(&buf, 10).contains("Tomorrow"));
        assert!(row_string(&buf, 12).contains(EMPTY_SECTION_CAPTION));
    }

    #[test]
    fn view_reuses_pool_across_frames() {
        let vm = TimelineViewModel::new(vec![section_of(&[
            VisitStatus::InProgress,
            VisitStatus::Planned,
        ])]);
        let t = theme();
        let view = TimelineView::new(&vm, t);
        let mut pool = CellPool::for_timeline();
        let mut buf = Buffer::new(40, 12);

        StatefulWidget::render(&view, buf.bounds(), &mut buf, &mut pool);
        let free_after_first = pool.free_count(crate::cell_pool::CellKind::Timeline);
        assert!(free_after_first >= 1);

        buf.clear();
        StatefulWidget::render(&view, buf.bounds(), &mut buf, &mut pool);
        // Steady state: the second frame reuses instead of growing the pool.
        assert_eq!(
            pool.free_count(crate::cell_pool::CellKind::Timeline),
            free_after_first
        );
    }

    proptest! {
        #[test]
        fn row_count_is_always_max_one(len in 0usize..8, flagged_empty in any::<bool>()) {
            let rows = (0..len)
                .map(|i| RowViewModel::new(format!("s{i}")))
                .collect::<Vec<_>>();
            let mut section = SectionViewModel::new("h", rows);
            section.is_empty_section = flagged_empty;
            let vm = TimelineViewModel::new(vec![section]);
            let t = Theme::default().resolve(true);
            let source = TimelineSource::new(&vm, &t);
            prop_assert_eq!(source.row_count(0), len.max(1));
        }

        #[test]
        fn render_never_panics_on_small_areas(w in 0u16..30, h in 0u16..30) {
            let vm = TimelineViewModel::new(vec![
                section_of(&[VisitStatus::Complete, VisitStatus::InProgress]),
                SectionViewModel::empty("Later"),
            ]);
            let t = Theme::default().resolve(true);
            let view = TimelineView::new(&vm, t);
            let mut pool = CellPool::for_timeline();
            let mut buf = Buffer::new(w, h);
            StatefulWidget::render(&view, buf.bounds(), &mut buf, &mut pool);
        }
    }
}
