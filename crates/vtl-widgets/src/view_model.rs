#![forbid(unsafe_code)]

//! View-model snapshot for the store-visit timeline.
//!
//! These types are produced upstream (per screen load or refresh) and handed
//! to the renderer as an immutable snapshot. The renderer never mutates them;
//! rows are positional, addressed by `(section, row)`, with no stable IDs.

/// Status of a single store visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitStatus {
    /// Scheduled but not yet started.
    #[default]
    Planned,
    /// The active visit; rendered with the connector overlay.
    InProgress,
    /// Finished; rendered with the completed background fill.
    Complete,
}

/// Glyph for the leading timeline node of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeIcon {
    /// Open circle: visit not started.
    #[default]
    Open,
    /// Filled circle: visit underway.
    Active,
    /// Check mark: visit done.
    Done,
    /// Warning marker.
    Warning,
}

impl NodeIcon {
    /// The glyph drawn in the node column.
    pub const fn glyph(self) -> char {
        match self {
            Self::Open => '○',
            Self::Active => '●',
            Self::Done => '✓',
            Self::Warning => '▲',
        }
    }
}

/// The data bound to one visible timeline entry (a store visit).
#[derive(Debug, Clone, Default)]
pub struct RowViewModel {
    /// Store name (headline).
    pub store_name: String,
    /// Store address (subheadline).
    pub store_address: String,
    /// Primary timestamp.
    pub time: String,
    /// Secondary timestamp (duration / interval).
    pub time_interval: String,
    /// Contact shown as a sub-attribute.
    pub contact: String,
    /// Whether the visit is flagged as an emergency.
    pub is_emergency: bool,
    /// Leading node icon.
    pub status_icon: NodeIcon,
    /// Visit status driving background and overlay rules.
    pub status: VisitStatus,
}

impl RowViewModel {
    /// Create a row for the given store.
    pub fn new(store_name: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
            ..Self::default()
        }
    }

    /// Set the store address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.store_address = address.into();
        self
    }

    /// Set the primary timestamp.
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Set the secondary timestamp.
    pub fn time_interval(mut self, interval: impl Into<String>) -> Self {
        self.time_interval = interval.into();
        self
    }

    /// Set the contact sub-attribute.
    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    /// Flag the visit as an emergency.
    pub fn emergency(mut self, is_emergency: bool) -> Self {
        self.is_emergency = is_emergency;
        self
    }

    /// Set the node icon.
    pub fn icon(mut self, icon: NodeIcon) -> Self {
        self.status_icon = icon;
        self
    }

    /// Set the visit status.
    pub fn status(mut self, status: VisitStatus) -> Self {
        self.status = status;
        self
    }
}

/// A visually grouped block of rows with its own header and footer.
#[derive(Debug, Clone, Default)]
pub struct SectionViewModel {
    /// Section header text.
    pub header: String,
    /// When true the section shows a single placeholder row; `rows` is
    /// ignored.
    pub is_empty_section: bool,
    /// Row view-models, in display order.
    pub rows: Vec<RowViewModel>,
}

impl SectionViewModel {
    /// Create a section with the given header and rows.
    pub fn new(header: impl Into<String>, rows: Vec<RowViewModel>) -> Self {
        Self {
            header: header.into(),
            is_empty_section: false,
            rows,
        }
    }

    /// Create an empty section (single placeholder row).
    pub fn empty(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            is_empty_section: true,
            rows: Vec::new(),
        }
    }
}

/// Ordered sections for one timeline screen.
#[derive(Debug, Clone, Default)]
pub struct TimelineViewModel {
    /// Section view-models, in display order.
    pub sections: Vec<SectionViewModel>,
}

impl TimelineViewModel {
    /// Create a view-model from sections.
    pub fn new(sections: Vec<SectionViewModel>) -> Self {
        Self { sections }
    }
}
