use serde::{Deserialize, Serialize};

use super::ids::{NodeId, WallId};

/// Default thickness of a structural wall, in document units.
pub const WALL_THICKNESS: f64 = 15.0;

/// Default thickness of a door or window opening, in document units.
pub const OPENING_THICKNESS: f64 = 10.0;

/// The kind of a wall segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureType {
    Wall,
    Door,
    Window,
}

/// How a door leaf opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorSwing {
    #[default]
    Left,
    Right,
    Sliding,
}

/// An edge between two wall nodes.
///
/// `door_swing` is only meaningful for doors and is kept `None` for every
/// other kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallSegment {
    pub id: WallId,
    pub start_node_id: NodeId,
    pub end_node_id: NodeId,
    pub thickness: f64,
    #[serde(rename = "type")]
    pub kind: StructureType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_swing: Option<DoorSwing>,
}

impl WallSegment {
    /// Creates a segment with a fresh id. Doors start with a left swing.
    #[must_use]
    pub fn new(start: NodeId, end: NodeId, kind: StructureType, thickness: f64) -> Self {
        let mut wall = Self {
            id: WallId::new(),
            start_node_id: start,
            end_node_id: end,
            thickness,
            kind,
            door_swing: None,
        };
        wall.normalize_swing();
        wall
    }

    /// Returns `true` if either endpoint is `node`.
    #[must_use]
    pub fn touches(&self, node: &NodeId) -> bool {
        self.start_node_id == *node || self.end_node_id == *node
    }

    /// Returns the endpoint opposite to `node`, or `None` if the wall does
    /// not touch it.
    #[must_use]
    pub fn opposite(&self, node: &NodeId) -> Option<&NodeId> {
        if self.start_node_id == *node {
            Some(&self.end_node_id)
        } else if self.end_node_id == *node {
            Some(&self.start_node_id)
        } else {
            None
        }
    }

    /// Returns `true` if both endpoints are the same node.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start_node_id == self.end_node_id
    }

    /// Merges the fields present in `patch` into this segment.
    pub fn apply(&mut self, patch: &WallPatch) {
        if let Some(start) = &patch.start_node_id {
            self.start_node_id.clone_from(start);
        }
        if let Some(end) = &patch.end_node_id {
            self.end_node_id.clone_from(end);
        }
        if let Some(thickness) = patch.thickness {
            self.thickness = thickness;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(swing) = patch.door_swing {
            self.door_swing = Some(swing);
        }
        self.normalize_swing();
    }

    fn normalize_swing(&mut self) {
        match self.kind {
            StructureType::Door => {
                self.door_swing.get_or_insert(DoorSwing::default());
            }
            StructureType::Wall | StructureType::Window => self.door_swing = None,
        }
    }
}

/// Partial update for a [`WallSegment`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WallPatch {
    pub start_node_id: Option<NodeId>,
    pub end_node_id: Option<NodeId>,
    pub thickness: Option<f64>,
    pub kind: Option<StructureType>,
    pub door_swing: Option<DoorSwing>,
}

/// Resolved endpoint coordinates of a wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallCoordinates {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl WallCoordinates {
    /// Length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }
}
