use serde::{Deserialize, Serialize};

use crate::model::{FixtureContents, TemplateId};

/// Catalog grouping of fixture templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FixtureCategory {
    Shelves,
    Fridges,
    Checkout,
    Structures,
    Furniture,
    MyTemplates,
}

impl FixtureCategory {
    /// Returns `true` for categories whose fixtures carry shelf contents.
    #[must_use]
    pub fn is_shelf_bearing(self) -> bool {
        matches!(self, Self::Shelves | Self::Fridges)
    }
}

/// A read-only catalog entry describing a fixture's default geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureTemplate {
    pub id: TemplateId,
    pub name: String,
    pub category: FixtureCategory,
    /// Footprint width in cm.
    pub width: f64,
    /// Footprint depth in cm (height in top view).
    pub height: f64,
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelves: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doors: Option<u32>,
    /// Physical height in cm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_contents: Option<FixtureContents>,
}

impl FixtureTemplate {
    /// Creates a template with only the required fields set.
    #[must_use]
    pub fn new(
        id: impl Into<TemplateId>,
        name: impl Into<String>,
        category: FixtureCategory,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            width,
            height,
            color: String::new(),
            shelves: None,
            doors: None,
            total_height: None,
            description: None,
            default_contents: None,
        }
    }

    /// Sets the declared shelf count.
    #[must_use]
    pub fn with_shelves(mut self, shelves: u32) -> Self {
        self.shelves = Some(shelves);
        self
    }

    /// Sets the physical height.
    #[must_use]
    pub fn with_total_height(mut self, total_height: f64) -> Self {
        self.total_height = Some(total_height);
        self
    }
}

/// Lookup seam for fixture templates, owned outside the editor core.
pub trait TemplateCatalog {
    /// Returns the template registered under `id`, if any.
    fn template(&self, id: &TemplateId) -> Option<&FixtureTemplate>;
}

/// In-memory template catalog preserving registration order.
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    templates: Vec<FixtureTemplate>,
}

impl TemplateLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template, replacing any previous entry with the same id.
    pub fn insert(&mut self, template: FixtureTemplate) {
        if let Some(existing) = self.templates.iter_mut().find(|t| t.id == template.id) {
            *existing = template;
        } else {
            self.templates.push(template);
        }
    }

    /// Iterates over the templates in a category.
    pub fn by_category(&self, category: FixtureCategory) -> impl Iterator<Item = &FixtureTemplate> {
        self.templates.iter().filter(move |t| t.category == category)
    }

    /// Number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns `true` if no templates are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<FixtureTemplate> for TemplateLibrary {
    fn from_iter<I: IntoIterator<Item = FixtureTemplate>>(iter: I) -> Self {
        let mut library = Self::new();
        for template in iter {
            library.insert(template);
        }
        library
    }
}

impl TemplateCatalog for TemplateLibrary {
    fn template(&self, id: &TemplateId) -> Option<&FixtureTemplate> {
        self.templates.iter().find(|t| &t.id == id)
    }
}
