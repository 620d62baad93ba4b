#![forbid(unsafe_code)]

//! Reusable cell pool.
//!
//! The host framework's stringly-keyed dequeue becomes a typed registry:
//! [`CellKind`] is the compile-time key, and each kind has its own free list.
//! Dequeuing an unregistered kind is the pool-miss case the renderer must
//! degrade gracefully on.
//!
//! Recycled instances are returned as-is: clearing stale state (in
//! particular the overlay slots) is the binder's responsibility, which
//! mirrors how recycled cells behave in the host list widget.

use crate::timeline_cell::{HeaderFooterView, TimelineCell};

/// The cell kinds the timeline screen registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Data-row cell.
    Timeline,
    /// Section header/footer view.
    HeaderFooter,
}

/// A typed pool of recyclable cell instances.
#[derive(Debug, Default)]
pub struct CellPool {
    timeline_registered: bool,
    header_footer_registered: bool,
    timeline_free: Vec<TimelineCell>,
    header_footer_free: Vec<HeaderFooterView>,
}

impl CellPool {
    /// Create an empty pool with no kinds registered.
    ///
    /// Dequeues on an unregistered pool miss, which exercises the fallback
    /// paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool with every kind the timeline uses registered.
    pub fn for_timeline() -> Self {
        let mut pool = Self::new();
        pool.register(CellKind::Timeline);
        pool.register(CellKind::HeaderFooter);
        pool
    }

    /// Register a cell kind so it can be dequeued.
    pub fn register(&mut self, kind: CellKind) {
        match kind {
            CellKind::Timeline => self.timeline_registered = true,
            CellKind::HeaderFooter => self.header_footer_registered = true,
        }
    }

    /// Check whether a kind is registered.
    pub fn is_registered(&self, kind: CellKind) -> bool {
        match kind {
            CellKind::Timeline => self.timeline_registered,
            CellKind::HeaderFooter => self.header_footer_registered,
        }
    }

    /// Dequeue a data-row cell: a recycled instance if one is free, a fresh
    /// one otherwise. `None` if the kind was never registered.
    pub fn dequeue_timeline(&mut self) -> Option<TimelineCell> {
        if !self.timeline_registered {
            return None;
        }
        Some(self.timeline_free.pop().unwrap_or_default())
    }

    /// Dequeue a header/footer view. `None` if the kind was never
    /// registered.
    pub fn dequeue_header_footer(&mut self) -> Option<HeaderFooterView> {
        if !self.header_footer_registered {
            return None;
        }
        Some(self.header_footer_free.pop().unwrap_or_default())
    }

    /// Return a data-row cell for reuse. The cell is not cleared.
    pub fn recycle_timeline(&mut self, cell: TimelineCell) {
        self.timeline_free.push(cell);
    }

    /// Return a header/footer view for reuse. The view is not cleared.
    pub fn recycle_header_footer(&mut self, view: HeaderFooterView) {
        self.header_footer_free.push(view);
    }

    /// Number of free instances of a kind.
    pub fn free_count(&self, kind: CellKind) -> usize {
        match kind {
            CellKind::Timeline => self.timeline_free.len(),
            CellKind::HeaderFooter => self.header_footer_free.len(),
        }
    }
}
