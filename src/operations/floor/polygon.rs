use std::collections::HashSet;

use crate::config::ClosureRule;
use crate::math::Point2;
use crate::model::StoreLayout;

use super::IsFloorClosed;

/// Walks the wall graph to derive the floor outline.
///
/// Best effort: starts at the first node in layout order and greedily steps
/// along the first wall (in wall order) that reaches an unvisited node, with
/// no backtracking. On plans with partition walls the walk may cut across the
/// floor or stop early.
pub struct FloorPolygon {
    rule: ClosureRule,
}

impl FloorPolygon {
    /// Creates a new `FloorPolygon` query.
    #[must_use]
    pub fn new(rule: ClosureRule) -> Self {
        Self { rule }
    }

    /// Executes the walk. Returns `None` unless the floor is closed and the
    /// walk visits at least three nodes.
    #[must_use]
    pub fn execute(&self, layout: &StoreLayout) -> Option<Vec<Point2>> {
        if !IsFloorClosed::new(self.rule).execute(layout) {
            return None;
        }

        let mut current = &layout.nodes.first()?.id;
        let mut visited = HashSet::new();
        let mut polygon = Vec::new();

        while visited.insert(current) {
            let Some(position) = layout.node_position(current) else {
                break;
            };
            polygon.push(position);

            let next = layout
                .resolvable_walls()
                .find_map(|wall| wall.opposite(current).filter(|n| !visited.contains(*n)));
            match next {
                Some(node) => current = node,
                None => break,
            }
        }

        (polygon.len() >= 3).then_some(polygon)
    }
}
