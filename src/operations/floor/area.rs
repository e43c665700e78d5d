use crate::config::ClosureRule;
use crate::math::polygon_2d::polygon_area;
use crate::model::StoreLayout;

use super::FloorPolygon;

/// Computes the floor area enclosed by the walked floor polygon.
pub struct FloorArea {
    rule: ClosureRule,
}

impl FloorArea {
    /// Creates a new `FloorArea` query.
    #[must_use]
    pub fn new(rule: ClosureRule) -> Self {
        Self { rule }
    }

    /// Executes the query, in square document units.
    #[must_use]
    pub fn execute(&self, layout: &StoreLayout) -> Option<f64> {
        FloorPolygon::new(self.rule)
            .execute(layout)
            .map(|polygon| polygon_area(&polygon))
    }
}
