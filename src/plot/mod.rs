//! scatter rendering of a cluster set, one color per cluster
pub mod scatter;

pub use scatter::{PALETTE, ScatterPlot, color_for};
