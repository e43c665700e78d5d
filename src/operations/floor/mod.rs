mod area;
mod closure;
mod polygon;

#[cfg(test)]
pub(crate) mod test_layouts;

pub use area::FloorArea;
pub use closure::{IsFloorClosed, MIN_FLOOR_WALLS};
pub use polygon::FloorPolygon;
