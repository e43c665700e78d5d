use crate::error::{LayoutError, Result};
use crate::model::{NodeId, StoreLayout, WallId};

/// Removes a node together with every wall that references it.
pub struct DeleteNode {
    node: NodeId,
}

impl DeleteNode {
    /// Creates a new `DeleteNode` operation.
    #[must_use]
    pub fn new(node: NodeId) -> Self {
        Self { node }
    }

    /// Executes the deletion and returns the ids of the cascaded walls.
    ///
    /// Walls that still reference `node` are pruned even when the node itself
    /// is already gone.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::EntityNotFound` if neither the node nor any wall
    /// referencing it exists.
    pub fn execute(&self, layout: &mut StoreLayout) -> Result<Vec<WallId>> {
        let node_count = layout.nodes.len();
        let mut removed = Vec::new();
        layout.walls.retain(|wall| {
            let keep = !wall.touches(&self.node);
            if !keep {
                removed.push(wall.id.clone());
            }
            keep
        });
        layout.nodes.retain(|n| n.id != self.node);

        if removed.is_empty() && layout.nodes.len() == node_count {
            return Err(LayoutError::EntityNotFound(format!("node {}", self.node)).into());
        }
        Ok(removed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{StructureType, WallNode, WallSegment};

    #[test]
    fn cascades_to_touching_walls_only() {
        let mut layout = StoreLayout::new("L", 500.0, 500.0);
        let nodes: Vec<WallNode> = (0..4_i32)
            .map(|i| WallNode::new(f64::from(i) * 100.0, 0.0))
            .collect();
        let ids: Vec<NodeId> = nodes.iter().map(|n| n.id.clone()).collect();
        layout.nodes = nodes;
        for (s, e) in [(0, 1), (1, 2), (2, 3), (3, 1)] {
            layout
                .walls
                .push(WallSegment::new(ids[s].clone(), ids[e].clone(), StructureType::Wall, 15.0));
        }

        let removed = DeleteNode::new(ids[1].clone()).execute(&mut layout).unwrap();
        assert_eq!(removed.len(), 3);
        assert_eq!(layout.nodes.len(), 3);
        assert_eq!(layout.walls.len(), 1);
        assert!(layout.walls.iter().all(|w| !w.touches(&ids[1])));
    }

    #[test]
    fn prunes_walls_of_already_missing_node() {
        let mut layout = StoreLayout::new("L", 500.0, 500.0);
        let a = WallNode::new(0.0, 0.0);
        let ghost = NodeId::new();
        layout
            .walls
            .push(WallSegment::new(a.id.clone(), ghost.clone(), StructureType::Wall, 15.0));
        layout.nodes.push(a);

        let removed = DeleteNode::new(ghost).execute(&mut layout).unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(layout.nodes.len(), 1);
    }

    #[test]
    fn unknown_node_is_an_error() {
        let mut layout = StoreLayout::new("L", 500.0, 500.0);
        assert!(DeleteNode::new(NodeId::new()).execute(&mut layout).is_err());
    }
}
