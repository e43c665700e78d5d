//! Commands and queries over a [`StoreLayout`](crate::model::StoreLayout).
//!
//! Each operation is a small struct built with `new` and run with
//! `execute`. Commands return [`Result`](crate::error::Result) so callers
//! decide whether a failed precondition is worth reporting.

pub mod fixture;
pub mod floor;
pub mod graph;
