use serde::{Deserialize, Serialize};

use crate::model::{OPENING_THICKNESS, WALL_THICKNESS};

/// Shelf count used when a shelf-bearing template does not declare one.
pub const DEFAULT_SHELF_COUNT: u32 = 4;

/// How the wall graph is judged to enclose a floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClosureRule {
    /// Every wall node has degree >= 2. Accepts disjoint loops.
    MinimumDegree,
    /// Every wall node has degree >= 2 and all wall nodes form one
    /// connected component.
    #[default]
    ConnectedLoop,
}

/// Tunables of the editor core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Radius used to snap a click onto an existing node.
    pub snap_radius: f64,
    /// Offset applied on both axes when duplicating a fixture.
    pub duplicate_offset: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub wall_thickness: f64,
    /// Thickness of doors and windows.
    pub opening_thickness: f64,
    pub default_shelf_count: u32,
    pub closure_rule: ClosureRule,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            snap_radius: 20.0,
            duplicate_offset: 20.0,
            min_zoom: 0.25,
            max_zoom: 3.0,
            wall_thickness: WALL_THICKNESS,
            opening_thickness: OPENING_THICKNESS,
            default_shelf_count: DEFAULT_SHELF_COUNT,
            closure_rule: ClosureRule::default(),
        }
    }
}

impl EditorConfig {
    /// Clamps a zoom factor into the configured range.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}
