use crate::collections::FxHashMap;
use crate::graph::Graph;

/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered path as a vector of node ids from start to goal
/// came_from: FxHashMap<usize, usize> - node index -> index of its predecessor
/// goal_index: usize - index of the goal node in the graph
pub(crate) fn shortest_path(graph: &Graph, came_from: &FxHashMap<usize, usize>, goal_index: usize) -> Vec<String> {

    let mut path = vec![graph.node_at(goal_index).id().to_string()];
    let mut current_index = goal_index;

    // Trace back from goal to start, the start node has no predecessor
    while let Some(&parent_index) = came_from.get(&current_index) {
        path.push(graph.node_at(parent_index).id().to_string());
        current_index = parent_index;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    path
}
