use tracing::{debug, warn};

use crate::catalog::TemplateCatalog;
use crate::model::{NodeId, WallId};

use super::EditorStore;

/// Click-to-start, click-to-finish wall gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WallDrawing {
    #[default]
    Idle,
    Drawing { start: NodeId },
}

impl WallDrawing {
    /// The node the pending wall starts from.
    #[must_use]
    pub fn start_node(&self) -> Option<&NodeId> {
        match self {
            Self::Idle => None,
            Self::Drawing { start } => Some(start),
        }
    }
}

impl<C: TemplateCatalog> EditorStore<C> {
    /// The wall-drawing state.
    #[must_use]
    pub fn wall_drawing(&self) -> &WallDrawing {
        &self.drawing
    }

    #[must_use]
    pub fn is_drawing_wall(&self) -> bool {
        matches!(self.drawing, WallDrawing::Drawing { .. })
    }

    /// Begins a wall at `node`.
    pub fn start_drawing_wall(&mut self, node: NodeId) {
        self.drawing = WallDrawing::Drawing { start: node };
    }

    /// Completes the pending wall at `end`, typed after the active tool.
    ///
    /// Always returns to idle. Nothing is created when no wall was started or
    /// when `end` is the start node.
    pub fn finish_drawing_wall(&mut self, end: NodeId) -> Option<WallId> {
        let start = match std::mem::take(&mut self.drawing) {
            WallDrawing::Drawing { start } if start != end => start,
            WallDrawing::Drawing { .. } => {
                debug!(%end, "wall drawing aborted: zero-length wall");
                return None;
            }
            WallDrawing::Idle => {
                debug!(%end, "wall drawing aborted: no start node");
                return None;
            }
        };

        let kind = self.view.active_tool.structure_type();
        match self.add_wall(start, end, kind) {
            Ok(id) => Some(id),
            Err(err) => {
                warn!(%err, "wall drawing rejected");
                None
            }
        }
    }

    /// Abandons the pending wall.
    pub fn cancel_drawing_wall(&mut self) {
        self.drawing = WallDrawing::Idle;
    }
}
