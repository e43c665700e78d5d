use crate::catalog::TemplateCatalog;
use crate::model::{FixtureId, NodeId, WallId};

use super::EditorStore;

/// The single selected entity. Selecting one kind replaces any other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Node(NodeId),
    Wall(WallId),
    Fixture(FixtureId),
}

impl Selection {
    #[must_use]
    pub fn node(&self) -> Option<&NodeId> {
        match self {
            Self::Node(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn wall(&self) -> Option<&WallId> {
        match self {
            Self::Wall(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn fixture(&self) -> Option<&FixtureId> {
        match self {
            Self::Fixture(id) => Some(id),
            _ => None,
        }
    }
}

impl<C: TemplateCatalog> EditorStore<C> {
    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Selects a node, or clears the selection with `None`.
    pub fn select_node(&mut self, id: Option<NodeId>) {
        self.selection = id.map_or(Selection::None, Selection::Node);
    }

    /// Selects a wall, or clears the selection with `None`.
    pub fn select_wall(&mut self, id: Option<WallId>) {
        self.selection = id.map_or(Selection::None, Selection::Wall);
    }

    /// Selects a fixture, or clears the selection with `None`.
    pub fn select_fixture(&mut self, id: Option<FixtureId>) {
        self.selection = id.map_or(Selection::None, Selection::Fixture);
    }

    /// Clears the selection if it points at the given entity.
    pub(super) fn deselect(&mut self, entity: &Selection) {
        if self.selection == *entity {
            self.selection = Selection::None;
        }
    }
}
