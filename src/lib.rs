pub mod catalog;
pub mod config;
pub mod editor;
pub mod error;
pub mod math;
pub mod model;
pub mod operations;

pub use catalog::{FixtureCategory, FixtureTemplate, TemplateCatalog, TemplateLibrary};
pub use config::{ClosureRule, EditorConfig};
pub use editor::EditorStore;
pub use error::{EditorError, Result};
