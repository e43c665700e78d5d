pub mod fixture;
pub mod ids;
pub mod layout;
pub mod node;
pub mod shelf;
pub mod wall;

pub use fixture::{FixturePatch, PlacedFixture, Rotation};
pub use ids::{FixtureId, LayoutId, LevelId, NodeId, ProductId, SlotId, TemplateId, WallId};
pub use layout::StoreLayout;
pub use node::{NodePatch, WallNode};
pub use shelf::{FixtureContents, ShelfLevel, ShelfSlot, SlotPatch};
pub use wall::{
    DoorSwing, StructureType, WallCoordinates, WallPatch, WallSegment, OPENING_THICKNESS,
    WALL_THICKNESS,
};
