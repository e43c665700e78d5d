use crate::error::Result;
use crate::model::{FixtureId, Rotation, StoreLayout};

/// Turns a fixture by a quarter and swaps its footprint.
pub struct RotateFixture {
    fixture: FixtureId,
}

impl RotateFixture {
    /// Creates a new `RotateFixture` operation.
    #[must_use]
    pub fn new(fixture: FixtureId) -> Self {
        Self { fixture }
    }

    /// Executes the rotation and returns the new rotation.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture is not in the layout.
    pub fn execute(&self, layout: &mut StoreLayout) -> Result<Rotation> {
        let fixture = layout.fixture_mut(&self.fixture)?;
        fixture.rotate_quarter();
        Ok(fixture.rotation)
    }
}
