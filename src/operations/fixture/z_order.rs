use crate::error::Result;
use crate::model::{FixtureId, StoreLayout};

/// Target end of the fixture stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackEnd {
    /// Index 0, drawn first.
    Back,
    /// Last index, drawn on top.
    Front,
}

/// Moves a fixture to one end of the draw order.
///
/// The remaining fixtures keep their relative order.
pub struct ReorderFixture {
    fixture: FixtureId,
    to: StackEnd,
}

impl ReorderFixture {
    /// Creates a new `ReorderFixture` operation.
    #[must_use]
    pub fn new(fixture: FixtureId, to: StackEnd) -> Self {
        Self { fixture, to }
    }

    /// Shorthand for [`StackEnd::Back`].
    #[must_use]
    pub fn to_back(fixture: FixtureId) -> Self {
        Self::new(fixture, StackEnd::Back)
    }

    /// Shorthand for [`StackEnd::Front`].
    #[must_use]
    pub fn to_front(fixture: FixtureId) -> Self {
        Self::new(fixture, StackEnd::Front)
    }

    /// Executes the move. Returns `false` if the fixture already sat at the
    /// requested end.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture is not in the layout.
    pub fn execute(&self, layout: &mut StoreLayout) -> Result<bool> {
        let index = layout.fixture_index(&self.fixture)?;
        let last = layout.fixtures.len() - 1;
        match self.to {
            StackEnd::Back if index > 0 => layout.fixtures[..=index].rotate_right(1),
            StackEnd::Front if index < last => layout.fixtures[index..].rotate_left(1),
            _ => return Ok(false),
        }
        Ok(true)
    }
}
