#![forbid(unsafe_code)]

//! Renders one frame of a sample store-visit timeline to stdout.

use std::io::{self, Write};

use vtl_render::Buffer;
use vtl_render::ansi::encode_frame;
use vtl_style::Theme;
use vtl_widgets::{
    CellPool, NodeIcon, RowViewModel, SectionViewModel, StatefulWidget, TimelineView,
    TimelineViewModel, VisitStatus,
};

fn sample_view_model() -> TimelineViewModel {
    TimelineViewModel::new(vec![
        SectionViewModel::new(
            "Today",
            vec![
                RowViewModel::new("Acme Market")
                    .address("12 High St")
                    .time("09:00")
                    .time_interval("45 min")
                    .contact("J. Doe")
                    .icon(NodeIcon::Done)
                    .status(VisitStatus::Complete),
                RowViewModel::new("Beta Stores")
                    .address("4 Station Rd")
                    .time("11:30")
                    .time_interval("30 min")
                    .icon(NodeIcon::Active)
                    .status(VisitStatus::InProgress),
                RowViewModel::new("Corner Shop")
                    .address("88 Park Ave")
                    .time("14:00")
                    .time_interval("20 min")
                    .emergency(true)
                    .icon(NodeIcon::Warning),
            ],
        ),
        SectionViewModel::empty("Tomorrow"),
    ])
}

fn main() -> io::Result<()> {
    let theme = Theme::default().resolve(Theme::detect_dark_mode());
    let view_model = sample_view_model();
    let view = TimelineView::new(&view_model, theme);

    let mut buf = Buffer::new(60, 24);
    let mut pool = CellPool::for_timeline();
    view.render(buf.bounds(), &mut buf, &mut pool);

    let mut stdout = io::stdout().lock();
    encode_frame(&buf, &mut stdout)?;
    stdout.flush()
}
