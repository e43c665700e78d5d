mod duplicate;
mod place;
mod rotate;
mod shelf;
mod z_order;

pub use duplicate::{DuplicateFixture, DUPLICATE_OFFSET};
pub use place::PlaceFixture;
pub use rotate::RotateFixture;
pub(crate) use shelf::check_facings;
pub use shelf::{AddShelfSlot, RemoveShelfSlot, ReplaceContents, UpdateShelfSlot};
pub use z_order::{ReorderFixture, StackEnd};
