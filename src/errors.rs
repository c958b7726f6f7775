use std::fmt;


/// Errors reported by the path planners
///
/// An unreachable goal is not an error: planners return `Ok(None)` for that case
#[derive(Debug, Clone, PartialEq)]
pub enum PathPlannerError {
    UnknownNode(String), // start or goal is not part of the graph
    Graph(GraphError), // graph could not be built
}

/// Errors raised while building a graph
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    DuplicateNode(String), // id added twice
    UnknownNode(String), // edge endpoint was never added
    InvalidCost { from: String, to: String, cost: f64 }, // negative or non-finite
}


impl fmt::Display for PathPlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPlannerError::UnknownNode(id) => write!(f, "unknown node `{id}`"),
            PathPlannerError::Graph(e) => write!(f, "invalid graph: {e}"),
        }
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::DuplicateNode(id) => write!(f, "node `{id}` already exists"),
            GraphError::UnknownNode(id) => write!(f, "edge references unknown node `{id}`"),
            GraphError::InvalidCost { from, to, cost } => {
                write!(f, "edge `{from}` -> `{to}` has invalid cost {cost}")
            }
        }
    }
}

impl std::error::Error for PathPlannerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PathPlannerError::Graph(e) => Some(e),
            PathPlannerError::UnknownNode(_) => None,
        }
    }
}

impl std::error::Error for GraphError {}


impl From<GraphError> for PathPlannerError {
    fn from(error: GraphError) -> Self {
        PathPlannerError::Graph(error)
    }
}
