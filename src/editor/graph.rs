use tracing::{debug, warn};

use crate::catalog::TemplateCatalog;
use crate::error::{LayoutError, Result};
use crate::model::{NodeId, NodePatch, StructureType, WallId, WallNode, WallPatch};
use crate::operations::graph::{AddWall, DeleteNode, FindNearbyNode};

use super::{EditorStore, Selection};

impl<C: TemplateCatalog> EditorStore<C> {
    // --- Nodes ---

    /// Appends a node to the current layout.
    pub fn add_node(&mut self, x: f64, y: f64) -> Option<NodeId> {
        self.apply("add_node", |layout| {
            let node = WallNode::new(x, y);
            let id = node.id.clone();
            layout.nodes.push(node);
            Ok(id)
        })
    }

    /// Merges `patch` into a node.
    pub fn update_node(&mut self, id: &NodeId, patch: NodePatch) -> bool {
        self.apply("update_node", |layout| {
            layout.node_mut(id)?.apply(&patch);
            Ok(())
        })
        .is_some()
    }

    /// Deletes a node and every wall attached to it.
    pub fn delete_node(&mut self, id: &NodeId) -> bool {
        let Some(removed) = self.apply("delete_node", |layout| {
            DeleteNode::new(id.clone()).execute(layout)
        }) else {
            return false;
        };
        debug!(node = %id, walls = removed.len(), "deleted node");
        self.deselect(&Selection::Node(id.clone()));
        for wall in removed {
            self.deselect(&Selection::Wall(wall));
        }
        true
    }

    /// First node strictly within the configured snap radius of `(x, y)`.
    #[must_use]
    pub fn find_nearby_node(&self, x: f64, y: f64) -> Option<&WallNode> {
        self.find_nearby_node_within(x, y, self.config.snap_radius)
    }

    /// First node, in layout order, strictly within `threshold` of `(x, y)`.
    #[must_use]
    pub fn find_nearby_node_within(&self, x: f64, y: f64, threshold: f64) -> Option<&WallNode> {
        FindNearbyNode::new(x, y, threshold).execute(self.current.as_ref()?)
    }

    // --- Walls ---

    /// Connects two nodes of the current layout and selects the new segment.
    ///
    /// # Errors
    ///
    /// Returns an error if no layout is open, if an endpoint does not exist,
    /// or if both endpoints are the same node.
    pub fn add_wall(&mut self, start: NodeId, end: NodeId, kind: StructureType) -> Result<WallId> {
        let thickness = match kind {
            StructureType::Wall => self.config.wall_thickness,
            StructureType::Door | StructureType::Window => self.config.opening_thickness,
        };
        let layout = self.current.as_mut().ok_or(LayoutError::NoCurrentLayout)?;
        let op = AddWall::new(start, end, kind).with_thickness(thickness);
        let id = op
            .execute(layout)
            .inspect_err(|err| warn!(%err, "wall rejected"))?;
        self.selection = Selection::Wall(id.clone());
        Ok(id)
    }

    /// Merges `patch` into a wall. A patch moving an endpoint onto a missing
    /// node is ignored as a whole.
    pub fn update_wall(&mut self, id: &WallId, patch: &WallPatch) -> bool {
        self.apply("update_wall", |layout| {
            for endpoint in [&patch.start_node_id, &patch.end_node_id].into_iter().flatten() {
                if !layout.has_node(endpoint) {
                    return Err(LayoutError::DanglingEndpoint(endpoint.to_string()).into());
                }
            }
            layout.wall_mut(id)?.apply(patch);
            Ok(())
        })
        .is_some()
    }

    /// Removes a wall.
    pub fn delete_wall(&mut self, id: &WallId) -> bool {
        let removed = self
            .apply("delete_wall", |layout| {
                layout.wall(id)?;
                layout.walls.retain(|w| w.id != *id);
                Ok(())
            })
            .is_some();
        if removed {
            self.deselect(&Selection::Wall(id.clone()));
        }
        removed
    }
}
