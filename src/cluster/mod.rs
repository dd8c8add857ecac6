//! This module defines clusters as found in the partitioning dump file:
//! a cluster identifier and its ordered list of 2D integer points.
//! No clustering is computed here, affectation comes from the file.
pub mod load;
pub mod points;

pub use load::{load_clusters, parse_lines};
pub use points::{ClusterId, ClusterSet, Point};
