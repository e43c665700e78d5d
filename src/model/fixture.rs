use serde::{Deserialize, Serialize};

use super::ids::{FixtureId, TemplateId};
use super::shelf::FixtureContents;
use crate::error::OperationError;
use crate::math::Point2;

/// Quarter-turn rotation of a fixture, in degrees clockwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Returns the rotation angle in degrees.
    #[must_use]
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Returns the rotation advanced by 90 degrees, wrapping at 360.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }

    /// Returns `true` if the footprint is turned sideways relative to the
    /// template.
    #[must_use]
    pub fn is_quarter_turn(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }
}

impl TryFrom<u16> for Rotation {
    type Error = OperationError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            other => Err(OperationError::InvalidInput(format!(
                "rotation must be 0, 90, 180 or 270, got {other}"
            ))),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// A fixture placed on the plan, instantiated from a catalog template.
///
/// `width`/`height` are the top-view footprint as currently rotated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedFixture {
    pub id: FixtureId,
    pub template_id: TemplateId,
    pub x: f64,
    pub y: f64,
    pub rotation: Rotation,
    pub width: f64,
    pub height: f64,
    #[serde(rename = "height3D", default, skip_serializing_if = "Option::is_none")]
    pub height_3d: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<FixtureContents>,
}

impl PlacedFixture {
    /// Returns the placement position.
    #[must_use]
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Turns the fixture a quarter and swaps its footprint in one step.
    pub fn rotate_quarter(&mut self) {
        self.rotation = self.rotation.next();
        std::mem::swap(&mut self.width, &mut self.height);
    }

    /// Deep copy under a new id, shifted by `(dx, dy)`.
    ///
    /// Shelf contents are copied by value, level and slot ids included; they
    /// are only meaningful inside their owning fixture.
    #[must_use]
    pub fn duplicated(&self, dx: f64, dy: f64) -> Self {
        Self {
            id: FixtureId::new(),
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    /// Merges the fields present in `patch` into this fixture.
    pub fn apply(&mut self, patch: &FixturePatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(height_3d) = patch.height_3d {
            self.height_3d = Some(height_3d);
        }
        if let Some(color) = &patch.custom_color {
            self.custom_color.clone_from(color);
        }
    }
}

/// Partial update for a [`PlacedFixture`]. `None` fields are left untouched.
///
/// Setting `rotation` here does not swap the footprint; use the rotate
/// command for that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixturePatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotation: Option<Rotation>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub height_3d: Option<f64>,
    /// `Some(None)` resets to the template color.
    pub custom_color: Option<Option<String>>,
}
