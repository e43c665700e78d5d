use serde::{Deserialize, Serialize};

use super::ids::{LevelId, ProductId, SlotId};

/// A product placement on a shelf level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfSlot {
    pub id: SlotId,
    /// `None` is an empty space on the shelf.
    pub product_id: Option<ProductId>,
    /// Number of product units placed side by side. Always at least 1.
    pub facings: u32,
    pub price_label: bool,
}

impl ShelfSlot {
    /// An empty slot: no product, one facing, no price label.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: SlotId::new(),
            product_id: None,
            facings: 1,
            price_label: false,
        }
    }

    /// Merges the fields present in `patch` into this slot.
    pub fn apply(&mut self, patch: &SlotPatch) {
        if let Some(product) = &patch.product_id {
            self.product_id.clone_from(product);
        }
        if let Some(facings) = patch.facings {
            self.facings = facings;
        }
        if let Some(label) = patch.price_label {
            self.price_label = label;
        }
    }
}

/// Partial update for a [`ShelfSlot`].
///
/// `product_id: Some(None)` empties the slot; `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotPatch {
    pub product_id: Option<Option<ProductId>>,
    pub facings: Option<u32>,
    pub price_label: Option<bool>,
}

/// One shelf of a fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfLevel {
    pub id: LevelId,
    pub slots: Vec<ShelfSlot>,
    /// Height from the fixture bottom, in cm, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl ShelfLevel {
    /// A level holding a single empty slot.
    #[must_use]
    pub fn with_empty_slot() -> Self {
        Self {
            id: LevelId::new(),
            slots: vec![ShelfSlot::empty()],
            height: None,
        }
    }
}

/// Shelving of a fixture: levels in definition order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureContents {
    pub levels: Vec<ShelfLevel>,
}

impl FixtureContents {
    /// `count` levels, each with one empty slot.
    #[must_use]
    pub fn with_levels(count: usize) -> Self {
        Self {
            levels: (0..count).map(|_| ShelfLevel::with_empty_slot()).collect(),
        }
    }

    /// Deep copy with freshly generated level and slot ids.
    #[must_use]
    pub fn with_fresh_ids(&self) -> Self {
        let levels = self
            .levels
            .iter()
            .map(|level| ShelfLevel {
                id: LevelId::new(),
                slots: level
                    .slots
                    .iter()
                    .map(|slot| ShelfSlot {
                        id: SlotId::new(),
                        ..slot.clone()
                    })
                    .collect(),
                height: level.height,
            })
            .collect();
        Self { levels }
    }

    /// Total facing count across all levels.
    #[must_use]
    pub fn total_facings(&self) -> u32 {
        self.levels
            .iter()
            .flat_map(|level| &level.slots)
            .filter(|slot| slot.product_id.is_some())
            .map(|slot| slot.facings)
            .sum()
    }
}
