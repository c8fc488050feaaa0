//! Solution-graph construction from the final edge list
//!
//! Nodes live in an arena addressed by stable index; neighbor lists store
//! indices, never references, so the graph owns its structure outright.
//!
//! One node is created per edge occurrence, in list order: node count
//! equals edge count, not cell count, and linkage is the linear chain with
//! a dead-end cutoff. Cells touched by several edges therefore appear as
//! several chain-linked nodes. That shape is inherited from the generator
//! this pipeline reproduces and is preserved as observable behavior.

use crate::algorithm::carver::EdgeList;
use crate::spatial::geometry::Point;
use crate::spatial::grid::WallGrid;

/// One navigable node of the solution graph
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    /// World position (source-cell center of the corresponding edge)
    pub position: Point,
    /// Arena indices of linked nodes
    pub neighbors: Vec<usize>,
}

/// Index-addressed solution graph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolutionGraph {
    nodes: Vec<GraphNode>,
}

impl SolutionGraph {
    /// All nodes in arena order
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Node at an arena index
    pub fn node(&self, index: usize) -> Option<&GraphNode> {
        self.nodes.get(index)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Test whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Unique links as ordered index pairs (low index first)
    ///
    /// Mutual links collapse to one pair; one-way links (into a dead-end
    /// node) are kept as well.
    pub fn neighbor_pairs(&self) -> Vec<(usize, usize)> {
        let mut seen = std::collections::HashSet::new();
        let mut pairs = Vec::new();
        for (index, node) in self.nodes.iter().enumerate() {
            for &neighbor in &node.neighbors {
                let key = if index < neighbor {
                    (index, neighbor)
                } else {
                    (neighbor, index)
                };
                if seen.insert(key) {
                    pairs.push(key);
                }
            }
        }
        pairs
    }
}

/// Build the solution graph from the final edge list
///
/// Node `i` takes the world center of edge `i`'s source cell. Links go to
/// the previous node (unless first) and to the next node (unless last, or
/// unless the source cell has exactly one open wall; a dead end keeps
/// only its backward link).
pub fn build_solution_graph(edges: &EdgeList, grid: &WallGrid) -> SolutionGraph {
    let count = edges.len();
    let mut nodes = Vec::with_capacity(count);

    for (index, edge) in edges.edges().iter().enumerate() {
        let mut neighbors = Vec::new();
        if index > 0 {
            neighbors.push(index - 1);
        }
        let is_dead_end = grid.open_wall_count(edge.from) == 1;
        if index + 1 < count && !is_dead_end {
            neighbors.push(index + 1);
        }
        nodes.push(GraphNode {
            position: edge.from.center(),
            neighbors,
        });
    }

    SolutionGraph { nodes }
}

#[cfg(test)]
mod tests {
    use super::build_solution_graph;
    use crate::algorithm::carver::{EdgeList, SolutionEdge};
    use crate::spatial::grid::{Direction, GridPos, WallGrid};

    #[test]
    fn node_count_equals_edge_count() {
        let mut grid = WallGrid::new(3);
        let mut edges = EdgeList::new();
        let a = GridPos::new(0, 0);
        let b = GridPos::new(1, 0);
        let c = GridPos::new(1, 1);
        let _ = grid.open_between(a, Direction::East);
        let _ = grid.open_between(b, Direction::South);
        edges.push(SolutionEdge::new(a, b));
        edges.push(SolutionEdge::new(b, c));

        let graph = build_solution_graph(&edges, &grid);
        assert_eq!(graph.len(), edges.len());
    }

    #[test]
    fn chain_links_with_dead_end_cutoff() {
        let mut grid = WallGrid::new(3);
        let mut edges = EdgeList::new();
        let a = GridPos::new(0, 0);
        let b = GridPos::new(1, 0);
        let c = GridPos::new(2, 0);
        let _ = grid.open_between(a, Direction::East);
        let _ = grid.open_between(b, Direction::East);
        edges.push(SolutionEdge::new(a, b));
        edges.push(SolutionEdge::new(b, c));

        let graph = build_solution_graph(&edges, &grid);
        // edge 0 starts at cell a with a single open wall: backward link only,
        // and node 0 has no backward link either
        assert_eq!(graph.node(0).map(|node| node.neighbors.clone()), Some(vec![]));
        assert_eq!(
            graph.node(1).map(|node| node.neighbors.clone()),
            Some(vec![0])
        );
        // positions are source-cell centers
        assert_eq!(
            graph.node(1).map(|node| node.position),
            Some(GridPos::new(1, 0).center())
        );
    }

    #[test]
    fn through_cells_link_forward_and_backward() {
        let mut grid = WallGrid::new(3);
        let mut edges = EdgeList::new();
        let a = GridPos::new(0, 0);
        let b = GridPos::new(1, 0);
        let c = GridPos::new(1, 1);
        let _ = grid.open_between(a, Direction::East);
        let _ = grid.open_between(b, Direction::South);
        edges.push(SolutionEdge::new(a, b));
        edges.push(SolutionEdge::new(b, c));

        let graph = build_solution_graph(&edges, &grid);
        // edge 1 starts at cell b, which has two open walls
        assert_eq!(
            graph.node(1).map(|node| node.neighbors.clone()),
            Some(vec![0])
        );
        assert_eq!(graph.neighbor_pairs(), vec![(0, 1)]);
    }
}
