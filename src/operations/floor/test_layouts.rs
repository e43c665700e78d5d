//! Wall graphs shared by the floor analysis tests.

use crate::model::{NodeId, StoreLayout, StructureType, WallNode, WallSegment};

/// Appends nodes at `points` and returns their ids.
pub fn add_nodes(layout: &mut StoreLayout, points: &[(f64, f64)]) -> Vec<NodeId> {
    points
        .iter()
        .map(|&(x, y)| {
            let node = WallNode::new(x, y);
            let id = node.id.clone();
            layout.nodes.push(node);
            id
        })
        .collect()
}

/// Appends a wall between each pair of node indices.
pub fn connect(layout: &mut StoreLayout, ids: &[NodeId], pairs: &[(usize, usize)]) {
    for &(s, e) in pairs {
        layout
            .walls
            .push(WallSegment::new(ids[s].clone(), ids[e].clone(), StructureType::Wall, 15.0));
    }
}

/// A(0,0) B(100,0) C(100,100) D(0,100) joined A-B, B-C, C-D, D-A.
pub fn square() -> (StoreLayout, Vec<NodeId>) {
    let mut layout = StoreLayout::new("Square", 500.0, 500.0);
    let ids = add_nodes(
        &mut layout,
        &[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)],
    );
    connect(&mut layout, &ids, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    (layout, ids)
}

/// Two triangles that share no node.
pub fn two_disjoint_triangles() -> StoreLayout {
    let mut layout = StoreLayout::new("Islands", 1000.0, 1000.0);
    let ids = add_nodes(
        &mut layout,
        &[
            (0.0, 0.0),
            (100.0, 0.0),
            (50.0, 80.0),
            (500.0, 0.0),
            (600.0, 0.0),
            (550.0, 80.0),
        ],
    );
    connect(
        &mut layout,
        &ids,
        &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)],
    );
    layout
}
