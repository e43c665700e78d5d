//! The layout document store driven by the editor UI.
//!
//! [`EditorStore`] owns the open layout, the saved-layout collection and the
//! passthrough UI state. Every operation degrades to a no-op when its
//! preconditions fail (no open layout, stale ids, bad indices); the reason
//! is reported as a `tracing` debug event instead of an error.

mod drawing;
mod fixtures;
mod graph;
mod queries;
mod selection;
mod snapshot;
mod view;

pub use drawing::WallDrawing;
pub use selection::Selection;
pub use view::{LibraryCategory, PanOffset, ToolType, ViewMode, ViewState};

use tracing::debug;

use crate::catalog::{TemplateCatalog, TemplateLibrary};
use crate::config::EditorConfig;
use crate::error::Result;
use crate::model::{LayoutId, StoreLayout};

/// Owner of the current layout document and the editing session state.
#[derive(Debug)]
pub struct EditorStore<C = TemplateLibrary> {
    config: EditorConfig,
    catalog: C,
    current: Option<StoreLayout>,
    saved: Vec<StoreLayout>,
    selection: Selection,
    drawing: WallDrawing,
    view: ViewState,
}

impl<C: TemplateCatalog> EditorStore<C> {
    /// Creates a store with default configuration and no open layout.
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, EditorConfig::default())
    }

    /// Creates a store with the given configuration.
    #[must_use]
    pub fn with_config(catalog: C, config: EditorConfig) -> Self {
        Self {
            config,
            catalog,
            current: None,
            saved: Vec::new(),
            selection: Selection::None,
            drawing: WallDrawing::Idle,
            view: ViewState::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// The layout being edited, if any.
    #[must_use]
    pub fn current_layout(&self) -> Option<&StoreLayout> {
        self.current.as_ref()
    }

    /// The saved-layout collection, in save order.
    #[must_use]
    pub fn saved_layouts(&self) -> &[StoreLayout] {
        &self.saved
    }

    // --- Layout lifecycle ---

    /// Starts a fresh layout, makes it current and registers it in the
    /// saved collection.
    pub fn create_new_layout(
        &mut self,
        name: impl Into<String>,
        width: f64,
        height: f64,
    ) -> LayoutId {
        let layout = StoreLayout::new(name, width, height);
        let id = layout.id.clone();
        debug!(%id, name = %layout.name, "created layout");
        self.saved.push(layout.clone());
        self.open(layout);
        id
    }

    /// Replaces the current layout with a copy of a saved one.
    pub fn load_layout(&mut self, id: &LayoutId) -> bool {
        let Some(layout) = self.saved.iter().find(|l| l.id == *id).cloned() else {
            debug!(%id, "load ignored: unknown layout");
            return false;
        };
        debug!(%id, "loaded layout");
        self.open(layout);
        true
    }

    /// Stamps the current layout and writes it into the saved collection,
    /// replacing the entry with the same id or appending a new one.
    pub fn save_current_layout(&mut self) -> bool {
        let Some(layout) = self.current.as_mut() else {
            debug!("save ignored: no layout open");
            return false;
        };
        layout.touch();
        let snapshot = layout.clone();
        debug!(id = %snapshot.id, "saved layout");
        match self.saved.iter_mut().find(|l| l.id == snapshot.id) {
            Some(entry) => *entry = snapshot,
            None => self.saved.push(snapshot),
        }
        true
    }

    /// Removes a saved layout, closing it if it is the current one.
    pub fn delete_layout(&mut self, id: &LayoutId) -> bool {
        let before = self.saved.len();
        self.saved.retain(|l| l.id != *id);
        let removed = self.saved.len() != before;
        if self.current.as_ref().is_some_and(|l| l.id == *id) {
            self.current = None;
            self.reset_session();
        }
        debug!(%id, removed, "deleted layout");
        removed
    }

    /// Resizes the canvas of the current layout.
    pub fn update_layout_dimensions(&mut self, width: f64, height: f64) -> bool {
        self.apply("update_layout_dimensions", |layout| {
            layout.width = width;
            layout.height = height;
            Ok(())
        })
        .is_some()
    }

    fn open(&mut self, layout: StoreLayout) {
        self.current = Some(layout);
        self.reset_session();
    }

    /// Drops per-document session state that would refer to stale ids.
    fn reset_session(&mut self) {
        self.selection = Selection::None;
        self.drawing = WallDrawing::Idle;
        self.view.close_product_editor();
    }

    /// Runs `op` on the current layout, swallowing expected failures.
    fn apply<T>(
        &mut self,
        action: &'static str,
        op: impl FnOnce(&mut StoreLayout) -> Result<T>,
    ) -> Option<T> {
        let Some(layout) = self.current.as_mut() else {
            debug!(action, "ignored: no layout open");
            return None;
        };
        match op(layout) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(action, %err, "ignored");
                None
            }
        }
    }
}

impl<C: TemplateCatalog + Default> Default for EditorStore<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::NodePatch;

    fn store() -> EditorStore {
        EditorStore::default()
    }

    #[test]
    fn starts_without_layout() {
        let mut store = store();
        assert!(store.current_layout().is_none());
        assert!(store.add_node(1.0, 1.0).is_none());
        assert!(!store.save_current_layout());
        assert!(!store.update_layout_dimensions(10.0, 10.0));
    }

    #[test]
    fn create_registers_and_opens() {
        let mut store = store();
        let id = store.create_new_layout("Main store", 2000.0, 1200.0);
        assert_eq!(store.current_layout().unwrap().id, id);
        assert_eq!(store.saved_layouts().len(), 1);
        assert_eq!(store.saved_layouts()[0].name, "Main store");
    }

    #[test]
    fn saved_copy_is_independent_until_save() {
        let mut store = store();
        let id = store.create_new_layout("A", 100.0, 100.0);
        store.add_node(5.0, 5.0).unwrap();
        assert!(store.saved_layouts()[0].nodes.is_empty());

        let stamped = store.saved_layouts()[0].updated_at;
        assert!(store.save_current_layout());
        let saved = &store.saved_layouts()[0];
        assert_eq!(saved.id, id);
        assert_eq!(saved.nodes.len(), 1);
        assert!(saved.updated_at >= stamped);
        assert_eq!(saved, store.current_layout().unwrap());
    }

    #[test]
    fn load_replaces_current_with_copy() {
        let mut store = store();
        let first = store.create_new_layout("A", 100.0, 100.0);
        let node = store.add_node(1.0, 2.0).unwrap();
        store.save_current_layout();
        let second = store.create_new_layout("B", 100.0, 100.0);
        assert_eq!(store.current_layout().unwrap().id, second);

        assert!(store.load_layout(&first));
        assert_eq!(store.current_layout().unwrap().id, first);
        assert!(store.update_node(&node, NodePatch::moved_to(9.0, 9.0)));
        assert!((store.saved_layouts()[0].nodes[0].x - 1.0).abs() < f64::EPSILON);

        assert!(!store.load_layout(&LayoutId::new()));
        assert_eq!(store.current_layout().unwrap().id, first);
    }

    #[test]
    fn deleting_current_layout_closes_it() {
        let mut store = store();
        let a = store.create_new_layout("A", 100.0, 100.0);
        let b = store.create_new_layout("B", 100.0, 100.0);
        assert!(store.delete_layout(&a));
        assert_eq!(store.current_layout().unwrap().id, b);
        assert!(store.delete_layout(&b));
        assert!(store.current_layout().is_none());
        assert!(store.saved_layouts().is_empty());
        assert!(!store.delete_layout(&b));
    }

    #[test]
    fn save_reinserts_deleted_entry() {
        let mut store = store();
        let a = store.create_new_layout("A", 100.0, 100.0);
        store.create_new_layout("B", 100.0, 100.0);
        store.load_layout(&a);
        store.saved.retain(|l| l.id != a);
        store.save_current_layout();
        assert_eq!(store.saved_layouts().len(), 2);
        assert_eq!(store.saved_layouts()[1].id, a);
    }

    #[test]
    fn update_dimensions() {
        let mut store = store();
        store.create_new_layout("A", 100.0, 100.0);
        assert!(store.update_layout_dimensions(3000.0, 1800.0));
        let layout = store.current_layout().unwrap();
        assert!((layout.width - 3000.0).abs() < f64::EPSILON);
        assert!((layout.height - 1800.0).abs() < f64::EPSILON);
    }
}
