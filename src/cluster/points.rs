//! defines data description

use indexmap::IndexMap;

/// cluster identifier as it appears in the dump file
pub type ClusterId = u32;

/// a 2D point with integer coordinates
pub type Point = (i64, i64);

/// Clusters keyed by their identifier.
/// Iteration order is insertion order, so plotting follows file order.
/// Inserting an identifier already present replaces its points but keeps its rank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterSet {
    clusters: IndexMap<ClusterId, Vec<Point>>,
}

impl ClusterSet {
    pub fn new() -> Self {
        ClusterSet {
            clusters: IndexMap::new(),
        }
    }

    /// insert a cluster. A repeated identifier keeps only the last points given
    pub fn insert(&mut self, id: ClusterId, points: Vec<Point>) {
        self.clusters.insert(id, points);
    }

    /// get the points of a cluster
    pub fn get_points(&self, id: ClusterId) -> Option<&[Point]> {
        self.clusters.get(&id).map(|p| p.as_slice())
    }

    pub fn get_nb_cluster(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// iterate clusters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ClusterId, &[Point])> {
        self.clusters.iter().map(|(id, p)| (*id, p.as_slice()))
    }

    /// get minima and maxima of coordinates over all clusters, None if there is no point
    pub fn get_minmax(&self) -> Option<(Point, Point)> {
        let mut points = self.clusters.values().flatten().copied();
        let first = points.next()?;
        let minmax = points.fold((first, first), |(min, max), (x, y)| {
            ((min.0.min(x), min.1.min(y)), (max.0.max(x), max.1.max(y)))
        });
        Some(minmax)
    }
} // end of impl ClusterSet

//========================================================

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_insertion_order() {
        log_init_test();
        //
        let mut clusters = ClusterSet::new();
        clusters.insert(5, vec![(0, 0)]);
        clusters.insert(0, vec![(1, 1)]);
        clusters.insert(3, vec![(2, 2)]);
        let ids: Vec<ClusterId> = clusters.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![5, 0, 3]);
    } // end of test_insertion_order

    #[test]
    fn test_overwrite_keeps_rank() {
        log_init_test();
        //
        let mut clusters = ClusterSet::new();
        clusters.insert(2, vec![(10, 20)]);
        clusters.insert(7, vec![(30, 40)]);
        clusters.insert(2, vec![(50, 60), (70, 80)]);
        assert_eq!(clusters.get_nb_cluster(), 2);
        assert_eq!(clusters.get_points(2).unwrap(), &[(50, 60), (70, 80)]);
        let ids: Vec<ClusterId> = clusters.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![2, 7]);
    } // end of test_overwrite_keeps_rank

    #[test]
    fn test_minmax() {
        log_init_test();
        //
        let mut clusters = ClusterSet::new();
        assert!(clusters.get_minmax().is_none());
        clusters.insert(0, vec![(-5, 3), (12, -7)]);
        // an empty cluster must not perturb the bounds
        clusters.insert(1, vec![]);
        clusters.insert(2, vec![(4, 40)]);
        let ((xmin, ymin), (xmax, ymax)) = clusters.get_minmax().unwrap();
        assert_eq!((xmin, ymin), (-5, -7));
        assert_eq!((xmax, ymax), (12, 40));
    } // end of test_minmax
} // end of mod tests
