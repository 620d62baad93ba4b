#![forbid(unsafe_code)]

//! Render kernel for VisitLine: styled cells, the cell buffer, and an ANSI
//! presenter that serializes one frame for display.

pub mod ansi;
pub mod buffer;
pub mod cell;

pub use buffer::Buffer;
pub use cell::{Cell, PackedRgba, StyleFlags};
