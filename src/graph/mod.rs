
mod builder;

pub use builder::GraphBuilder;

use crate::collections::FxIndexMap;
use crate::geometry::Point;


/// Location on the graph
/// Immutable once the graph is built
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    id: String,
    coords: Point,
    neighbors: Vec<(String, f64)>, // (neighbor id, edge cost), in insertion order
}

impl Node {

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn coords(&self) -> Point {
        self.coords
    }

    /// Outgoing edges with their traversal cost
    pub fn neighbors(&self) -> &[(String, f64)] {
        &self.neighbors
    }
}


/// Read-only store of named locations and directed weighted edges
///
/// Nodes are kept in an index map so every node also has a dense index
/// (its insertion position). Searches key their private state by that index.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: FxIndexMap<String, Node>,
}

impl Graph {

    /// Start building a new graph
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Lookup a node by id
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Neighbor list of a node, `None` if the id is unknown
    pub fn neighbors(&self, id: &str) -> Option<&[(String, f64)]> {
        self.nodes.get(id).map(Node::neighbors)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Total edge cost along a sequence of node ids
    /// Returns None if two consecutive ids are not joined by an edge.
    /// When parallel edges exist the cheapest one is used.
    pub fn path_cost<S: AsRef<str>>(&self, path: &[S]) -> Option<f64> {
        let mut total = 0.0;
        for pair in path.windows(2) {
            let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
            let cost = self.neighbors(from)?
                .iter()
                .filter(|(n, _)| n == to)
                .map(|&(_, c)| c)
                .min_by(f64::total_cmp)?;
            total += cost;
        }
        if path.len() == 1 && !self.contains(path[0].as_ref()) {
            return None;
        }
        Some(total)
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.get_index_of(id)
    }

    pub(crate) fn node_at(&self, index: usize) -> &Node {
        &self.nodes[index]
    }
}
