use crate::catalog::{FixtureTemplate, TemplateCatalog};
use crate::config::DEFAULT_SHELF_COUNT;
use crate::error::{LayoutError, Result};
use crate::model::{FixtureContents, FixtureId, PlacedFixture, Rotation, StoreLayout, TemplateId};

/// Instantiates a catalog template as a fixture on the plan.
pub struct PlaceFixture {
    template: TemplateId,
    x: f64,
    y: f64,
    default_shelf_count: u32,
}

impl PlaceFixture {
    /// Creates a new `PlaceFixture` operation at `(x, y)`.
    #[must_use]
    pub fn new(template: TemplateId, x: f64, y: f64) -> Self {
        Self {
            template,
            x,
            y,
            default_shelf_count: DEFAULT_SHELF_COUNT,
        }
    }

    /// Shelf count for shelf-bearing templates that do not declare one.
    #[must_use]
    pub fn with_default_shelf_count(mut self, count: u32) -> Self {
        self.default_shelf_count = count;
        self
    }

    /// Executes the operation, appending the fixture on top of the z-order.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::EntityNotFound` if the catalog has no such
    /// template.
    pub fn execute<C>(&self, catalog: &C, layout: &mut StoreLayout) -> Result<FixtureId>
    where
        C: TemplateCatalog + ?Sized,
    {
        let template = catalog
            .template(&self.template)
            .ok_or_else(|| LayoutError::EntityNotFound(format!("template {}", self.template)))?;

        let fixture = PlacedFixture {
            id: FixtureId::new(),
            template_id: self.template.clone(),
            x: self.x,
            y: self.y,
            rotation: Rotation::Deg0,
            width: template.width,
            height: template.height,
            height_3d: template.total_height,
            custom_color: None,
            contents: self.initial_contents(template),
        };
        let id = fixture.id.clone();
        layout.fixtures.push(fixture);
        Ok(id)
    }

    fn initial_contents(&self, template: &FixtureTemplate) -> Option<FixtureContents> {
        if !template.category.is_shelf_bearing() {
            return None;
        }
        if let Some(defaults) = &template.default_contents {
            return Some(defaults.with_fresh_ids());
        }
        let count = match template.shelves {
            Some(n) if n > 0 => n,
            _ => self.default_shelf_count,
        };
        Some(FixtureContents::with_levels(count as usize))
    }
}
