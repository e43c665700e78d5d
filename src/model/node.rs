use serde::{Deserialize, Serialize};

use super::ids::NodeId;
use crate::math::Point2;

/// A 2D point anchoring one or more wall segment endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallNode {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

impl WallNode {
    /// Creates a node with a fresh id at `(x, y)`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            id: NodeId::new(),
            x,
            y,
        }
    }

    /// Returns the node position.
    #[must_use]
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Euclidean distance from this node to `(x, y)`.
    #[must_use]
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        nalgebra::distance(&self.position(), &Point2::new(x, y))
    }

    /// Merges the fields present in `patch` into this node.
    pub fn apply(&mut self, patch: &NodePatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
    }
}

/// Partial update for a [`WallNode`]. `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodePatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl NodePatch {
    /// Patch moving a node to `(x, y)`.
    #[must_use]
    pub fn moved_to(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }
}
