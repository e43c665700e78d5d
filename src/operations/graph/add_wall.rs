use crate::error::{LayoutError, Result};
use crate::model::{
    NodeId, StoreLayout, StructureType, WallId, WallSegment, OPENING_THICKNESS, WALL_THICKNESS,
};

/// Connects two existing nodes with a wall, door or window.
pub struct AddWall {
    start: NodeId,
    end: NodeId,
    kind: StructureType,
    thickness: Option<f64>,
}

impl AddWall {
    /// Creates a new `AddWall` operation with the kind's default thickness.
    #[must_use]
    pub fn new(start: NodeId, end: NodeId, kind: StructureType) -> Self {
        Self {
            start,
            end,
            kind,
            thickness: None,
        }
    }

    /// Overrides the thickness of the new segment.
    #[must_use]
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = Some(thickness);
        self
    }

    /// Executes the operation, appending the segment to the layout.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ZeroLengthWall` if both endpoints are the same
    /// node, or `LayoutError::DanglingEndpoint` if either endpoint is not in
    /// the layout.
    pub fn execute(&self, layout: &mut StoreLayout) -> Result<WallId> {
        if self.start == self.end {
            return Err(LayoutError::ZeroLengthWall.into());
        }
        for endpoint in [&self.start, &self.end] {
            if !layout.has_node(endpoint) {
                return Err(LayoutError::DanglingEndpoint(endpoint.to_string()).into());
            }
        }

        let thickness = self.thickness.unwrap_or(match self.kind {
            StructureType::Wall => WALL_THICKNESS,
            StructureType::Door | StructureType::Window => OPENING_THICKNESS,
        });
        let wall = WallSegment::new(self.start.clone(), self.end.clone(), self.kind, thickness);
        let id = wall.id.clone();
        layout.walls.push(wall);
        Ok(id)
    }
}
