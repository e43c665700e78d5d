use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fixture::PlacedFixture;
use super::ids::{FixtureId, LayoutId, NodeId, WallId};
use super::node::WallNode;
use super::wall::{WallCoordinates, WallSegment};
use crate::error::LayoutError;
use crate::math::Point2;

/// A store floor plan: wall graph plus placed fixtures.
///
/// Owns every node, wall and fixture by value. Vector order is meaningful:
/// node order drives snapping and the floor walk, fixture order is z-order
/// (earlier = further back).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreLayout {
    pub id: LayoutId,
    pub name: String,
    /// Canvas width in document units.
    pub width: f64,
    /// Canvas height in document units.
    pub height: f64,
    pub nodes: Vec<WallNode>,
    pub walls: Vec<WallSegment>,
    pub fixtures: Vec<PlacedFixture>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoreLayout {
    /// Creates an empty layout with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        let now = Utc::now();
        Self {
            id: LayoutId::new(),
            name: name.into(),
            width,
            height,
            nodes: Vec::new(),
            walls: Vec::new(),
            fixtures: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Stamps `updated_at` with the current time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    // --- Node lookups ---

    /// Returns the node with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the layout.
    pub fn node(&self, id: &NodeId) -> Result<&WallNode, LayoutError> {
        self.nodes
            .iter()
            .find(|n| n.id == *id)
            .ok_or_else(|| LayoutError::EntityNotFound(format!("node {id}")))
    }

    /// Returns a mutable reference to the node with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the layout.
    pub fn node_mut(&mut self, id: &NodeId) -> Result<&mut WallNode, LayoutError> {
        self.nodes
            .iter_mut()
            .find(|n| n.id == *id)
            .ok_or_else(|| LayoutError::EntityNotFound(format!("node {id}")))
    }

    /// Returns `true` if a node with the given id exists.
    #[must_use]
    pub fn has_node(&self, id: &NodeId) -> bool {
        self.nodes.iter().any(|n| n.id == *id)
    }

    /// Returns the position of a node, or `None` if it does not exist.
    #[must_use]
    pub fn node_position(&self, id: &NodeId) -> Option<Point2> {
        self.node(id).ok().map(WallNode::position)
    }

    // --- Wall lookups ---

    /// Returns the wall with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not in the layout.
    pub fn wall(&self, id: &WallId) -> Result<&WallSegment, LayoutError> {
        self.walls
            .iter()
            .find(|w| w.id == *id)
            .ok_or_else(|| LayoutError::EntityNotFound(format!("wall {id}")))
    }

    /// Returns a mutable reference to the wall with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not in the layout.
    pub fn wall_mut(&mut self, id: &WallId) -> Result<&mut WallSegment, LayoutError> {
        self.walls
            .iter_mut()
            .find(|w| w.id == *id)
            .ok_or_else(|| LayoutError::EntityNotFound(format!("wall {id}")))
    }

    /// Resolves both endpoints of `wall`. `None` if the wall is dangling.
    #[must_use]
    pub fn wall_coordinates(&self, wall: &WallSegment) -> Option<WallCoordinates> {
        let start = self.node(&wall.start_node_id).ok()?;
        let end = self.node(&wall.end_node_id).ok()?;
        Some(WallCoordinates {
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
        })
    }

    /// Returns `true` if both endpoints of `wall` exist and differ.
    #[must_use]
    pub fn is_wall_resolvable(&self, wall: &WallSegment) -> bool {
        !wall.is_degenerate()
            && self.has_node(&wall.start_node_id)
            && self.has_node(&wall.end_node_id)
    }

    /// Iterates over walls whose endpoints both resolve to distinct nodes.
    pub fn resolvable_walls(&self) -> impl Iterator<Item = &WallSegment> {
        self.walls.iter().filter(|w| self.is_wall_resolvable(w))
    }

    // --- Fixture lookups ---

    /// Returns the fixture with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture is not in the layout.
    pub fn fixture(&self, id: &FixtureId) -> Result<&PlacedFixture, LayoutError> {
        self.fixtures
            .iter()
            .find(|f| f.id == *id)
            .ok_or_else(|| LayoutError::EntityNotFound(format!("fixture {id}")))
    }

    /// Returns a mutable reference to the fixture with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture is not in the layout.
    pub fn fixture_mut(&mut self, id: &FixtureId) -> Result<&mut PlacedFixture, LayoutError> {
        self.fixtures
            .iter_mut()
            .find(|f| f.id == *id)
            .ok_or_else(|| LayoutError::EntityNotFound(format!("fixture {id}")))
    }

    /// Returns the z-order index of a fixture.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture is not in the layout.
    pub fn fixture_index(&self, id: &FixtureId) -> Result<usize, LayoutError> {
        self.fixtures
            .iter()
            .position(|f| f.id == *id)
            .ok_or_else(|| LayoutError::EntityNotFound(format!("fixture {id}")))
    }
}
