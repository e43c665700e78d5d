use std::collections::{HashMap, HashSet, VecDeque};

use crate::model::{NodeId, StoreLayout};

/// Undirected node adjacency derived from a layout's walls.
///
/// Only walls whose endpoints both resolve to distinct nodes contribute.
/// Parallel walls between the same pair of nodes count once per wall.
#[derive(Debug, Default)]
pub struct Adjacency {
    neighbors: HashMap<NodeId, Vec<NodeId>>,
    edge_count: usize,
}

impl Adjacency {
    /// Builds the adjacency of every resolvable wall in `layout`.
    #[must_use]
    pub fn build(layout: &StoreLayout) -> Self {
        let mut adjacency = Self::default();
        for wall in layout.resolvable_walls() {
            adjacency
                .neighbors
                .entry(wall.start_node_id.clone())
                .or_default()
                .push(wall.end_node_id.clone());
            adjacency
                .neighbors
                .entry(wall.end_node_id.clone())
                .or_default()
                .push(wall.start_node_id.clone());
            adjacency.edge_count += 1;
        }
        adjacency
    }

    /// Number of walls that contributed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of nodes touched by at least one wall.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Degree of `node`; 0 if no wall touches it.
    #[must_use]
    pub fn degree(&self, node: &NodeId) -> usize {
        self.neighbors.get(node).map_or(0, Vec::len)
    }

    /// Neighbors of `node`, one entry per connecting wall.
    #[must_use]
    pub fn neighbors(&self, node: &NodeId) -> &[NodeId] {
        self.neighbors.get(node).map_or(&[], Vec::as_slice)
    }

    /// Smallest degree among wall nodes, or `None` for an empty graph.
    #[must_use]
    pub fn min_degree(&self) -> Option<usize> {
        self.neighbors.values().map(Vec::len).min()
    }

    /// Number of connected components among wall nodes.
    #[must_use]
    pub fn component_count(&self) -> usize {
        let mut seen: HashSet<&NodeId> = HashSet::with_capacity(self.neighbors.len());
        let mut components = 0;
        for root in self.neighbors.keys() {
            if !seen.insert(root) {
                continue;
            }
            components += 1;
            let mut queue = VecDeque::from([root]);
            while let Some(node) = queue.pop_front() {
                for next in self.neighbors(node) {
                    if seen.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }
        components
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StructureType, WallNode, WallSegment};

    fn chain(layout: &mut StoreLayout, points: &[(f64, f64)]) -> Vec<NodeId> {
        let ids: Vec<NodeId> = points
            .iter()
            .map(|&(x, y)| {
                let node = WallNode::new(x, y);
                let id = node.id.clone();
                layout.nodes.push(node);
                id
            })
            .collect();
        for pair in ids.windows(2) {
            layout
                .walls
                .push(WallSegment::new(
                    pair[0].clone(),
                    pair[1].clone(),
                    StructureType::Wall,
                    15.0,
                ));
        }
        ids
    }

    #[test]
    fn degrees_of_open_chain() {
        let mut layout = StoreLayout::new("L", 500.0, 500.0);
        let ids = chain(&mut layout, &[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
        let adjacency = Adjacency::build(&layout);
        assert_eq!(adjacency.edge_count(), 2);
        assert_eq!(adjacency.node_count(), 3);
        assert_eq!(adjacency.degree(&ids[0]), 1);
        assert_eq!(adjacency.degree(&ids[1]), 2);
        assert_eq!(adjacency.min_degree(), Some(1));
        assert_eq!(adjacency.component_count(), 1);
    }

    #[test]
    fn dangling_and_degenerate_walls_are_skipped() {
        let mut layout = StoreLayout::new("L", 500.0, 500.0);
        let ids = chain(&mut layout, &[(0.0, 0.0), (100.0, 0.0)]);
        layout
            .walls
            .push(WallSegment::new(ids[0].clone(), NodeId::new(), StructureType::Wall, 15.0));
        layout.walls.push(WallSegment::new(
            ids[1].clone(),
            ids[1].clone(),
            StructureType::Wall,
            15.0,
        ));
        let adjacency = Adjacency::build(&layout);
        assert_eq!(adjacency.edge_count(), 1);
        assert_eq!(adjacency.degree(&ids[0]), 1);
        assert_eq!(adjacency.degree(&ids[1]), 1);
    }

    #[test]
    fn separate_chains_are_separate_components() {
        let mut layout = StoreLayout::new("L", 500.0, 500.0);
        chain(&mut layout, &[(0.0, 0.0), (10.0, 0.0)]);
        chain(&mut layout, &[(50.0, 0.0), (60.0, 0.0)]);
        assert_eq!(Adjacency::build(&layout).component_count(), 2);
        assert_eq!(Adjacency::default().component_count(), 0);
    }
}
