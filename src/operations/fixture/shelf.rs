use crate::error::{OperationError, Result};
use crate::model::{
    FixtureContents, FixtureId, ShelfLevel, ShelfSlot, SlotId, SlotPatch, StoreLayout,
};

/// Fails if any slot of `contents` has zero facings.
pub(crate) fn check_facings(contents: &FixtureContents) -> Result<()> {
    let zero_facing = contents
        .levels
        .iter()
        .flat_map(|level| &level.slots)
        .any(|slot| slot.facings == 0);
    if zero_facing {
        return Err(
            OperationError::InvalidInput("a slot needs at least one facing".into()).into(),
        );
    }
    Ok(())
}

/// Resolves the shelf level at `level` of a fixture.
fn level_mut<'a>(
    layout: &'a mut StoreLayout,
    fixture: &FixtureId,
    level: usize,
) -> Result<&'a mut ShelfLevel> {
    let contents = layout
        .fixture_mut(fixture)?
        .contents
        .as_mut()
        .ok_or_else(|| OperationError::NoContents(fixture.to_string()))?;
    let len = contents.levels.len();
    contents
        .levels
        .get_mut(level)
        .ok_or_else(|| OperationError::IndexOutOfRange { index: level, len }.into())
}

/// Merges a patch into one shelf slot.
pub struct UpdateShelfSlot {
    fixture: FixtureId,
    level: usize,
    slot: usize,
    patch: SlotPatch,
}

impl UpdateShelfSlot {
    /// Creates a new `UpdateShelfSlot` operation.
    #[must_use]
    pub fn new(fixture: FixtureId, level: usize, slot: usize, patch: SlotPatch) -> Self {
        Self {
            fixture,
            level,
            slot,
            patch,
        }
    }

    /// Executes the update.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture is missing or has no contents, if an
    /// index is out of range, or if the patch sets zero facings.
    pub fn execute(&self, layout: &mut StoreLayout) -> Result<()> {
        if self.patch.facings == Some(0) {
            return Err(
                OperationError::InvalidInput("a slot needs at least one facing".into()).into(),
            );
        }
        let level = level_mut(layout, &self.fixture, self.level)?;
        let len = level.slots.len();
        let slot = level
            .slots
            .get_mut(self.slot)
            .ok_or(OperationError::IndexOutOfRange {
                index: self.slot,
                len,
            })?;
        slot.apply(&self.patch);
        Ok(())
    }
}

/// Appends an empty slot to a shelf level.
pub struct AddShelfSlot {
    fixture: FixtureId,
    level: usize,
}

impl AddShelfSlot {
    /// Creates a new `AddShelfSlot` operation.
    #[must_use]
    pub fn new(fixture: FixtureId, level: usize) -> Self {
        Self { fixture, level }
    }

    /// Executes the operation and returns the id of the new slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture is missing or has no contents, or if
    /// the level index is out of range.
    pub fn execute(&self, layout: &mut StoreLayout) -> Result<SlotId> {
        let level = level_mut(layout, &self.fixture, self.level)?;
        let slot = ShelfSlot::empty();
        let id = slot.id.clone();
        level.slots.push(slot);
        Ok(id)
    }
}

/// Removes a slot by position; later slots shift down by one.
pub struct RemoveShelfSlot {
    fixture: FixtureId,
    level: usize,
    slot: usize,
}

impl RemoveShelfSlot {
    /// Creates a new `RemoveShelfSlot` operation.
    #[must_use]
    pub fn new(fixture: FixtureId, level: usize, slot: usize) -> Self {
        Self {
            fixture,
            level,
            slot,
        }
    }

    /// Executes the removal and returns the removed slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture is missing or has no contents, or if
    /// an index is out of range.
    pub fn execute(&self, layout: &mut StoreLayout) -> Result<ShelfSlot> {
        let level = level_mut(layout, &self.fixture, self.level)?;
        let len = level.slots.len();
        if self.slot >= len {
            return Err(OperationError::IndexOutOfRange {
                index: self.slot,
                len,
            }
            .into());
        }
        Ok(level.slots.remove(self.slot))
    }
}

/// Replaces a fixture's shelving wholesale.
pub struct ReplaceContents {
    fixture: FixtureId,
    contents: FixtureContents,
}

impl ReplaceContents {
    /// Creates a new `ReplaceContents` operation.
    #[must_use]
    pub fn new(fixture: FixtureId, contents: FixtureContents) -> Self {
        Self { fixture, contents }
    }

    /// Executes the replacement.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture is not in the layout, or if any slot
    /// has zero facings.
    pub fn execute(self, layout: &mut StoreLayout) -> Result<()> {
        check_facings(&self.contents)?;
        layout.fixture_mut(&self.fixture)?.contents = Some(self.contents);
        Ok(())
    }
}
