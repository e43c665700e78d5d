use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{FixtureCategory, TemplateCatalog};
use crate::model::{FixtureId, StructureType};

use super::{EditorStore, WallDrawing};

/// Editing tool picked in the toolbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolType {
    #[default]
    Select,
    Move,
    Rotate,
    Duplicate,
    Delete,
    DrawWall,
    DrawWindow,
    DrawDoor,
}

impl ToolType {
    /// Kind of segment created by a finished wall gesture under this tool.
    #[must_use]
    pub fn structure_type(self) -> StructureType {
        match self {
            Self::DrawDoor => StructureType::Door,
            Self::DrawWindow => StructureType::Window,
            _ => StructureType::Wall,
        }
    }
}

/// Plan projection shown on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Top,
    Face,
}

/// Filter of the template library panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LibraryCategory {
    #[default]
    All,
    Category(FixtureCategory),
}

/// Canvas pan offset in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanOffset {
    pub x: f64,
    pub y: f64,
}

/// UI state carried alongside the document. The core never interprets it
/// beyond the invariants enforced by the setters.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub active_tool: ToolType,
    pub zoom: f64,
    pub pan_offset: PanOffset,
    pub is_library_open: bool,
    pub library_category: LibraryCategory,
    /// Fixture whose shelves are open in the product editor.
    pub editing_fixture: Option<FixtureId>,
    pub view_mode: ViewMode,
    pub is_view_mode_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_tool: ToolType::default(),
            zoom: 1.0,
            pan_offset: PanOffset::default(),
            is_library_open: false,
            library_category: LibraryCategory::default(),
            editing_fixture: None,
            view_mode: ViewMode::default(),
            is_view_mode_open: false,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn is_product_editor_open(&self) -> bool {
        self.editing_fixture.is_some()
    }

    pub(super) fn close_product_editor(&mut self) {
        self.editing_fixture = None;
    }
}

impl<C: TemplateCatalog> EditorStore<C> {
    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn active_tool(&self) -> ToolType {
        self.view.active_tool
    }

    /// Switches tool. Any wall in progress is abandoned.
    pub fn set_active_tool(&mut self, tool: ToolType) {
        self.view.active_tool = tool;
        self.drawing = WallDrawing::Idle;
    }

    /// Sets the zoom factor, clamped to the configured range. NaN is ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_nan() {
            debug!("zoom ignored: NaN");
            return;
        }
        self.view.zoom = self.config.clamp_zoom(zoom);
    }

    pub fn set_pan_offset(&mut self, offset: PanOffset) {
        self.view.pan_offset = offset;
    }

    /// Opens the template library filtered to `category`.
    pub fn open_library(&mut self, category: LibraryCategory) {
        self.view.is_library_open = true;
        self.view.library_category = category;
    }

    pub fn close_library(&mut self) {
        self.view.is_library_open = false;
    }

    pub fn set_library_category(&mut self, category: LibraryCategory) {
        self.view.library_category = category;
    }

    /// Opens the shelf editor for a fixture of the current layout.
    pub fn open_product_editor(&mut self, fixture: FixtureId) -> bool {
        let exists = self
            .current
            .as_ref()
            .is_some_and(|layout| layout.fixture(&fixture).is_ok());
        if !exists {
            debug!(%fixture, "product editor ignored: unknown fixture");
            return false;
        }
        self.view.editing_fixture = Some(fixture);
        true
    }

    pub fn close_product_editor(&mut self) {
        self.view.close_product_editor();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view.view_mode = mode;
        self.view.is_view_mode_open = false;
    }

    pub fn open_view_mode_picker(&mut self) {
        self.view.is_view_mode_open = true;
    }

    pub fn close_view_mode_picker(&mut self) {
        self.view.is_view_mode_open = false;
    }
}
