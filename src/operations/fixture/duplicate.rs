use crate::error::Result;
use crate::model::{FixtureId, StoreLayout};

/// Default offset, on both axes, of a duplicated fixture.
pub const DUPLICATE_OFFSET: f64 = 20.0;

/// Copies a fixture on top of the z-order, shifted diagonally.
pub struct DuplicateFixture {
    fixture: FixtureId,
    offset: f64,
}

impl DuplicateFixture {
    /// Creates a new `DuplicateFixture` operation.
    #[must_use]
    pub fn new(fixture: FixtureId) -> Self {
        Self {
            fixture,
            offset: DUPLICATE_OFFSET,
        }
    }

    /// Overrides the diagonal offset.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Executes the operation and returns the id of the copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture is not in the layout.
    pub fn execute(&self, layout: &mut StoreLayout) -> Result<FixtureId> {
        let copy = layout
            .fixture(&self.fixture)?
            .duplicated(self.offset, self.offset);
        let id = copy.id.clone();
        layout.fixtures.push(copy);
        Ok(id)
    }
}
