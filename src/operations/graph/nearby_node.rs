use crate::model::{StoreLayout, WallNode};

/// Finds a node to snap onto near a point.
///
/// Scans nodes in layout order and returns the first one strictly closer
/// than the threshold, not necessarily the nearest.
pub struct FindNearbyNode {
    x: f64,
    y: f64,
    threshold: f64,
}

impl FindNearbyNode {
    /// Creates a new `FindNearbyNode` query.
    #[must_use]
    pub fn new(x: f64, y: f64, threshold: f64) -> Self {
        Self { x, y, threshold }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute<'a>(&self, layout: &'a StoreLayout) -> Option<&'a WallNode> {
        layout
            .nodes
            .iter()
            .find(|node| node.distance_to(self.x, self.y) < self.threshold)
    }
}
