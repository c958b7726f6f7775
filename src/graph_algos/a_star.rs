use crate::errors::PathPlannerError;
use crate::collections::{FxHashMap, FxHashSet};
use crate::graph::Graph;
use super::shortest_path;

use std::{
    collections::BinaryHeap,
    cmp::Ordering
};
use log::{debug, trace};



/// Entry on the open list
/// Stale entries (node closed since the push) are discarded when popped
#[derive(Debug)]
struct OpenNode {
    index: usize, // index of the node in the graph
    f_cost: f64, // g_score + heuristic at the time of the push
    seq: u64, // push order, breaks ties between equal f_cost
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse both keys so the smallest f_cost,
        // then the earliest push, comes out first
        other.f_cost.total_cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for OpenNode {}


/// Counters collected during a single search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize, // nodes moved to the closed set
    pub pushed: usize, // entries pushed onto the open list
    pub stale: usize, // popped entries discarded because their node was already closed
}

/// Successful search result
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub path: Vec<String>, // node ids, start first, goal last
    pub cost: f64, // sum of edge costs along path
    pub stats: SearchStats,
}


/// State private to one invocation of the search
/// Every map is keyed by the node's index in the graph
#[derive(Debug, Default)]
struct SearchState {
    g_score: FxHashMap<usize, f64>, // best known cost from start
    f_score: FxHashMap<usize, f64>, // g_score + heuristic to goal
    came_from: FxHashMap<usize, usize>, // predecessor on the best known path
    open: BinaryHeap<OpenNode>,
    closed: FxHashSet<usize>, // g_score is final for these
    next_seq: u64,
    stats: SearchStats,
}

impl SearchState {

    /// Best known cost from start, infinite if never reached
    fn g(&self, index: usize) -> f64 {
        self.g_score.get(&index).copied().unwrap_or(f64::INFINITY)
    }

    fn push(&mut self, index: usize, f_cost: f64) {
        self.open.push(OpenNode { index, f_cost, seq: self.next_seq });
        self.next_seq += 1;
        self.stats.pushed += 1;
    }
}


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The heuristic is the straight-line distance between node coordinates.
/// The returned path is optimal as long as no edge is cheaper than the
/// straight-line distance between its endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct AStar {}

impl AStar {

    /// Search for the cheapest path from `start` to `goal`
    /// Returns Ok(None) if the goal is unreachable from start
    /// Returns UnknownNode if either id is not in the graph, no search is done in that case
    pub fn search(&self, graph: &Graph, start: &str, goal: &str) -> Result<Option<Route>, PathPlannerError> {

        let start_index = graph.index_of(start)
            .ok_or_else(|| PathPlannerError::UnknownNode(start.to_string()))?;
        let goal_index = graph.index_of(goal)
            .ok_or_else(|| PathPlannerError::UnknownNode(goal.to_string()))?;

        let (state, found) = self.build_graph(graph, start_index, goal_index);

        debug!(
            "a* {start} -> {goal}: expanded {}, pushed {}, stale {}, found {}",
            state.stats.expanded, state.stats.pushed, state.stats.stale, found
        );

        if !found {
            return Ok(None);
        }

        let path = shortest_path(graph, &state.came_from, goal_index);
        Ok(Some(Route {
            path,
            cost: state.g(goal_index),
            stats: state.stats,
        }))
    }


    /// Traverses the graph using A* algorithm
    /// Returns the search state along with whether the goal was reached
    fn build_graph(&self, graph: &Graph, start_index: usize, goal_index: usize) -> (SearchState, bool) {

        let goal = graph.node_at(goal_index).coords();
        let heuristic = |index: usize| graph.node_at(index).coords().distance(&goal);

        let mut state = SearchState::default();

        let start_f = heuristic(start_index);
        state.g_score.insert(start_index, 0.0);
        state.f_score.insert(start_index, start_f);
        state.push(start_index, start_f);

        while let Some(OpenNode { index, .. }) = state.open.pop() {

            // Already finalized through a cheaper entry
            if state.closed.contains(&index) {
                state.stats.stale += 1;
                continue;
            }

            if index == goal_index {
                return (state, true);
            }

            state.closed.insert(index);
            state.stats.expanded += 1;

            let current = graph.node_at(index);
            let current_g = state.g(index);
            trace!("expand {} g={current_g}", current.id());

            for (neighbor, edge_cost) in current.neighbors() {

                // endpoints are checked when the graph is built
                let Some(neighbor_index) = graph.index_of(neighbor) else {
                    continue;
                };

                if state.closed.contains(&neighbor_index) {
                    continue;
                }

                let tentative_g = current_g + edge_cost;
                if tentative_g < state.g(neighbor_index) {
                    let f_cost = tentative_g + heuristic(neighbor_index);
                    state.came_from.insert(neighbor_index, index);
                    state.g_score.insert(neighbor_index, tentative_g);
                    state.f_score.insert(neighbor_index, f_cost);
                    state.push(neighbor_index, f_cost);
                }
            }
        }

        (state, false)
    }
}
