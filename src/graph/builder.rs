use crate::collections::FxIndexMap;
use crate::errors::GraphError;
use crate::geometry::Point;
use super::{Graph, Node};

use indexmap::map::Entry::{Occupied, Vacant};
use log::trace;


/// Builds a [`Graph`] from external data
/// Nodes must be added before any edge that references them
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: FxIndexMap<String, Node>,
}

impl GraphBuilder {

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location with its coordinates
    pub fn add_node(&mut self, id: impl Into<String>, x: f64, y: f64) -> Result<&mut Self, GraphError> {
        let id = id.into();
        match self.nodes.entry(id) {
            Occupied(e) => return Err(GraphError::DuplicateNode(e.key().clone())),
            Vacant(e) => {
                let node = Node {
                    id: e.key().clone(),
                    coords: Point::new(x, y),
                    neighbors: Vec::new(),
                };
                e.insert(node);
            }
        }
        Ok(self)
    }

    /// Add a directed edge `from -> to`
    /// Parallel edges are kept, the search simply prefers the cheaper one
    pub fn add_edge(&mut self, from: &str, to: &str, cost: f64) -> Result<&mut Self, GraphError> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(GraphError::InvalidCost {
                from: from.to_string(),
                to: to.to_string(),
                cost,
            });
        }
        if !self.nodes.contains_key(to) {
            return Err(GraphError::UnknownNode(to.to_string()));
        }

        let node = self.nodes.get_mut(from)
            .ok_or_else(|| GraphError::UnknownNode(from.to_string()))?;
        node.neighbors.push((to.to_string(), cost));
        trace!("edge {from} -> {to} ({cost})");

        Ok(self)
    }

    /// Add a road usable in both directions
    pub fn add_road(&mut self, a: &str, b: &str, cost: f64) -> Result<&mut Self, GraphError> {
        self.add_edge(a, b, cost)?;
        self.add_edge(b, a, cost)
    }

    pub fn build(self) -> Graph {
        Graph { nodes: self.nodes }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chains() {
        let mut builder = GraphBuilder::new();
        builder
            .add_node("A", 0.0, 0.0).unwrap()
            .add_node("B", 1.0, 0.0).unwrap()
            .add_road("A", "B", 1.0).unwrap();
        let graph = builder.build();

        assert_eq!(graph.neighbors("A").unwrap(), &[("B".to_string(), 1.0)]);
        assert_eq!(graph.neighbors("B").unwrap(), &[("A".to_string(), 1.0)]);
    }

    #[test]
    fn test_rejects_duplicate_node() {
        let mut builder = GraphBuilder::new();
        builder.add_node("A", 0.0, 0.0).unwrap();

        let err = builder.add_node("A", 5.0, 5.0).unwrap_err();
        assert_eq!(err, GraphError::DuplicateNode("A".to_string()));
    }

    #[test]
    fn test_rejects_dangling_edge() {
        let mut builder = GraphBuilder::new();
        builder.add_node("A", 0.0, 0.0).unwrap();

        assert_eq!(
            builder.add_edge("A", "B", 1.0).unwrap_err(),
            GraphError::UnknownNode("B".to_string())
        );
        assert_eq!(
            builder.add_edge("B", "A", 1.0).unwrap_err(),
            GraphError::UnknownNode("B".to_string())
        );
        // nothing was half-inserted
        assert!(builder.build().neighbors("A").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_invalid_cost() {
        let mut builder = GraphBuilder::new();
        builder.add_node("A", 0.0, 0.0).unwrap();
        builder.add_node("B", 1.0, 0.0).unwrap();

        for cost in [-1.0, f64::NAN, f64::INFINITY] {
            let err = builder.add_edge("A", "B", cost).unwrap_err();
            assert!(matches!(err, GraphError::InvalidCost { .. }), "{cost} should be rejected");
        }
        assert!(builder.add_edge("A", "B", 0.0).is_ok());
    }
}
