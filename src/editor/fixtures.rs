use tracing::debug;

use crate::catalog::TemplateCatalog;
use crate::model::{
    FixtureContents, FixtureId, FixturePatch, Rotation, ShelfSlot, SlotId, SlotPatch, TemplateId,
};
use crate::operations::fixture::{
    AddShelfSlot, DuplicateFixture, PlaceFixture, RemoveShelfSlot, ReorderFixture,
    ReplaceContents, RotateFixture, UpdateShelfSlot,
};

use super::{EditorStore, Selection};

impl<C: TemplateCatalog> EditorStore<C> {
    /// Places a fixture from the catalog, selects it and closes the library.
    pub fn add_fixture(&mut self, template: &TemplateId, x: f64, y: f64) -> Option<FixtureId> {
        let Some(layout) = self.current.as_mut() else {
            debug!(%template, "add_fixture ignored: no layout open");
            return None;
        };
        let placed = PlaceFixture::new(template.clone(), x, y)
            .with_default_shelf_count(self.config.default_shelf_count)
            .execute(&self.catalog, layout);
        match placed {
            Ok(id) => {
                self.selection = Selection::Fixture(id.clone());
                self.view.is_library_open = false;
                Some(id)
            }
            Err(err) => {
                debug!(%template, %err, "add_fixture ignored");
                None
            }
        }
    }

    /// Merges `patch` into a fixture.
    pub fn update_fixture(&mut self, id: &FixtureId, patch: &FixturePatch) -> bool {
        self.apply("update_fixture", |layout| {
            layout.fixture_mut(id)?.apply(patch);
            Ok(())
        })
        .is_some()
    }

    /// Removes a fixture. Closes the product editor if it was showing it.
    pub fn delete_fixture(&mut self, id: &FixtureId) -> bool {
        let removed = self
            .apply("delete_fixture", |layout| {
                let index = layout.fixture_index(id)?;
                layout.fixtures.remove(index);
                Ok(())
            })
            .is_some();
        if removed {
            self.deselect(&Selection::Fixture(id.clone()));
            if self.view.editing_fixture.as_ref() == Some(id) {
                self.view.close_product_editor();
            }
        }
        removed
    }

    /// Copies a fixture on top of the stack and selects the copy.
    pub fn duplicate_fixture(&mut self, id: &FixtureId) -> Option<FixtureId> {
        let offset = self.config.duplicate_offset;
        let copy = self.apply("duplicate_fixture", |layout| {
            DuplicateFixture::new(id.clone())
                .with_offset(offset)
                .execute(layout)
        })?;
        self.selection = Selection::Fixture(copy.clone());
        Some(copy)
    }

    /// Turns a fixture a quarter clockwise, swapping its footprint.
    pub fn rotate_fixture(&mut self, id: &FixtureId) -> Option<Rotation> {
        self.apply("rotate_fixture", |layout| {
            RotateFixture::new(id.clone()).execute(layout)
        })
    }

    /// Moves a fixture to the back of the draw order.
    pub fn move_fixture_to_back(&mut self, id: &FixtureId) -> bool {
        self.apply("move_fixture_to_back", |layout| {
            ReorderFixture::to_back(id.clone()).execute(layout)
        })
        .unwrap_or(false)
    }

    /// Moves a fixture to the front of the draw order.
    pub fn move_fixture_to_front(&mut self, id: &FixtureId) -> bool {
        self.apply("move_fixture_to_front", |layout| {
            ReorderFixture::to_front(id.clone()).execute(layout)
        })
        .unwrap_or(false)
    }

    // --- Shelf contents ---

    /// Merges `patch` into the slot at `(level, slot)` of a fixture.
    pub fn update_shelf_slot(
        &mut self,
        fixture: &FixtureId,
        level: usize,
        slot: usize,
        patch: SlotPatch,
    ) -> bool {
        self.apply("update_shelf_slot", |layout| {
            UpdateShelfSlot::new(fixture.clone(), level, slot, patch).execute(layout)
        })
        .is_some()
    }

    /// Appends an empty slot to a shelf level.
    pub fn add_shelf_slot(&mut self, fixture: &FixtureId, level: usize) -> Option<SlotId> {
        self.apply("add_shelf_slot", |layout| {
            AddShelfSlot::new(fixture.clone(), level).execute(layout)
        })
    }

    /// Removes the slot at `(level, slot)`. Later slots shift down, so slot
    /// indices held by the caller are stale afterwards.
    pub fn remove_shelf_slot(
        &mut self,
        fixture: &FixtureId,
        level: usize,
        slot: usize,
    ) -> Option<ShelfSlot> {
        self.apply("remove_shelf_slot", |layout| {
            RemoveShelfSlot::new(fixture.clone(), level, slot).execute(layout)
        })
    }

    /// Replaces the shelving of a fixture.
    pub fn update_fixture_contents(
        &mut self,
        fixture: &FixtureId,
        contents: FixtureContents,
    ) -> bool {
        self.apply("update_fixture_contents", |layout| {
            ReplaceContents::new(fixture.clone(), contents).execute(layout)
        })
        .is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::catalog::{FixtureCategory, FixtureTemplate, TemplateLibrary};
    use crate::editor::LibraryCategory;
    use crate::model::ProductId;

    fn store() -> EditorStore {
        let library: TemplateLibrary = [
            FixtureTemplate::new(
                "shelf-template-4",
                "Gondola",
                FixtureCategory::Shelves,
                120.0,
                40.0,
            )
            .with_shelves(4),
            FixtureTemplate::new("bench", "Bench", FixtureCategory::Furniture, 150.0, 45.0),
        ]
        .into_iter()
        .collect();
        let mut store = EditorStore::new(library);
        store.create_new_layout("L", 2000.0, 2000.0);
        store
    }

    fn ids(store: &EditorStore) -> Vec<FixtureId> {
        store
            .current_layout()
            .unwrap()
            .fixtures
            .iter()
            .map(|f| f.id.clone())
            .collect()
    }

    #[test]
    fn add_fixture_selects_and_closes_library() {
        let mut store = store();
        store.open_library(LibraryCategory::Category(FixtureCategory::Shelves));
        let id = store
            .add_fixture(&TemplateId::from("shelf-template-4"), 10.0, 10.0)
            .unwrap();
        assert_eq!(store.selection(), &Selection::Fixture(id.clone()));
        assert!(!store.view().is_library_open);

        let fixture = store.current_layout().unwrap().fixture(&id).unwrap();
        let levels = &fixture.contents.as_ref().unwrap().levels;
        assert_eq!(levels.len(), 4);
        assert!(levels.iter().all(|l| l.slots.len() == 1
            && l.slots[0].product_id.is_none()
            && l.slots[0].facings == 1
            && !l.slots[0].price_label));
    }

    #[test]
    fn unknown_template_is_ignored() {
        let mut store = store();
        store.open_library(LibraryCategory::All);
        assert!(store.add_fixture(&TemplateId::from("ghost"), 0.0, 0.0).is_none());
        assert!(store.view().is_library_open);
        assert!(store.current_layout().unwrap().fixtures.is_empty());
    }

    #[test]
    fn duplicate_selects_copy_on_top() {
        let mut store = store();
        let a = store.add_fixture(&TemplateId::from("bench"), 40.0, 60.0).unwrap();
        let b = store.add_fixture(&TemplateId::from("bench"), 400.0, 60.0).unwrap();
        let copy = store.duplicate_fixture(&a).unwrap();
        assert_eq!(ids(&store), [&a, &b, &copy].map(Clone::clone));
        assert_eq!(store.selection(), &Selection::Fixture(copy.clone()));
        let f = store.current_layout().unwrap().fixture(&copy).unwrap();
        assert_relative_eq!(f.x, 60.0);
        assert_relative_eq!(f.y, 80.0);
        assert!(store.duplicate_fixture(&FixtureId::new()).is_none());
    }

    #[test]
    fn rotate_once_and_four_times() {
        let mut store = store();
        let id = store.add_fixture(&TemplateId::from("bench"), 0.0, 0.0).unwrap();
        assert_eq!(store.rotate_fixture(&id), Some(Rotation::Deg90));
        let f = store.current_layout().unwrap().fixture(&id).unwrap();
        assert_relative_eq!(f.width, 45.0);
        assert_relative_eq!(f.height, 150.0);
        for _ in 0..3 {
            store.rotate_fixture(&id);
        }
        let f = store.current_layout().unwrap().fixture(&id).unwrap();
        assert_eq!(f.rotation, Rotation::Deg0);
        assert_relative_eq!(f.width, 150.0);
        assert_relative_eq!(f.height, 45.0);
        assert!(store.rotate_fixture(&FixtureId::new()).is_none());
    }

    #[test]
    fn z_order_moves() {
        let mut store = store();
        let a = store.add_fixture(&TemplateId::from("bench"), 0.0, 0.0).unwrap();
        let b = store.add_fixture(&TemplateId::from("bench"), 0.0, 0.0).unwrap();
        let c = store.add_fixture(&TemplateId::from("bench"), 0.0, 0.0).unwrap();

        assert!(store.move_fixture_to_front(&a));
        assert_eq!(ids(&store), [&b, &c, &a].map(Clone::clone));
        assert!(store.move_fixture_to_back(&a));
        assert_eq!(ids(&store), [&a, &b, &c].map(Clone::clone));
        assert!(!store.move_fixture_to_back(&a));
        assert!(!store.move_fixture_to_front(&FixtureId::new()));
    }

    #[test]
    fn update_and_delete_fixture() {
        let mut store = store();
        let id = store.add_fixture(&TemplateId::from("bench"), 0.0, 0.0).unwrap();
        let patch = FixturePatch {
            x: Some(250.0),
            custom_color: Some(Some("#336699".into())),
            ..FixturePatch::default()
        };
        assert!(store.update_fixture(&id, &patch));
        let f = store.current_layout().unwrap().fixture(&id).unwrap();
        assert_relative_eq!(f.x, 250.0);
        assert_eq!(f.custom_color.as_deref(), Some("#336699"));

        assert!(store.delete_fixture(&id));
        assert_eq!(store.selection(), &Selection::None);
        assert!(!store.delete_fixture(&id));
        assert!(!store.update_fixture(&id, &patch));
    }

    #[test]
    fn deleting_edited_fixture_closes_product_editor() {
        let mut store = store();
        let id = store
            .add_fixture(&TemplateId::from("shelf-template-4"), 0.0, 0.0)
            .unwrap();
        assert!(store.open_product_editor(id.clone()));
        assert_eq!(store.view().editing_fixture.as_ref(), Some(&id));
        store.delete_fixture(&id);
        assert!(!store.view().is_product_editor_open());
    }

    #[test]
    fn shelf_editing_round() {
        let mut store = store();
        let id = store
            .add_fixture(&TemplateId::from("shelf-template-4"), 0.0, 0.0)
            .unwrap();
        let added = store.add_shelf_slot(&id, 2).unwrap();
        assert!(store.update_shelf_slot(
            &id,
            2,
            1,
            SlotPatch {
                product_id: Some(Some(ProductId::from("soap-250"))),
                price_label: Some(true),
                ..SlotPatch::default()
            }
        ));
        let fixture = store.current_layout().unwrap().fixture(&id).unwrap();
        let level = &fixture.contents.as_ref().unwrap().levels[2];
        assert_eq!(level.slots[1].id, added);
        assert!(level.slots[1].price_label);

        let removed = store.remove_shelf_slot(&id, 2, 0).unwrap();
        assert!(removed.product_id.is_none());
        assert!(store.remove_shelf_slot(&id, 2, 5).is_none());
        assert!(!store.update_shelf_slot(&id, 9, 0, SlotPatch::default()));

        let bench = store.add_fixture(&TemplateId::from("bench"), 0.0, 0.0).unwrap();
        assert!(store.add_shelf_slot(&bench, 0).is_none());
        assert!(store.update_fixture_contents(&bench, FixtureContents::with_levels(1)));
        assert!(store.add_shelf_slot(&bench, 0).is_some());
    }
}
