#![forbid(unsafe_code)]

//! Geometry primitives for VisitLine.

pub mod geometry;

pub use geometry::{Rect, Sides};
