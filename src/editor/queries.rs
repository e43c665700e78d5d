use crate::catalog::TemplateCatalog;
use crate::math::Point2;
use crate::model::{NodeId, WallCoordinates, WallSegment};
use crate::operations::floor::{FloorArea, FloorPolygon, IsFloorClosed};

use super::EditorStore;

impl<C: TemplateCatalog> EditorStore<C> {
    /// Position of a node of the current layout.
    #[must_use]
    pub fn node_position(&self, id: &NodeId) -> Option<Point2> {
        self.current.as_ref()?.node_position(id)
    }

    /// Endpoint coordinates of `wall`, or `None` if it is dangling.
    #[must_use]
    pub fn wall_coordinates(&self, wall: &WallSegment) -> Option<WallCoordinates> {
        self.current.as_ref()?.wall_coordinates(wall)
    }

    /// Whether the walls of the current layout enclose a floor, under the
    /// configured closure rule.
    #[must_use]
    pub fn is_floor_closed(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|layout| IsFloorClosed::new(self.config.closure_rule).execute(layout))
    }

    /// Walked outline of the floor, if it is closed.
    #[must_use]
    pub fn floor_polygon(&self) -> Option<Vec<Point2>> {
        FloorPolygon::new(self.config.closure_rule).execute(self.current.as_ref()?)
    }

    /// Area of the walked floor outline, in square document units.
    #[must_use]
    pub fn floor_area(&self) -> Option<f64> {
        FloorArea::new(self.config.closure_rule).execute(self.current.as_ref()?)
    }
}
