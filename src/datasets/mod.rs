//! Built-in road maps

use crate::errors::GraphError;
use crate::graph::Graph;


/// City coordinates on a flat projection of France
const FRANCE_CITIES: [(&str, f64, f64); 18] = [
    ("Avignon", 310.0, -730.0),
    ("Bordeaux", -740.0, -470.0),
    ("Brest", -1400.0, 560.0),
    ("Caen", -600.0, 730.0),
    ("Calais", -200.0, 1200.0),
    ("Dijon", 315.0, 220.0),
    ("Grenoble", 470.0, -370.0),
    ("Limoges", -380.0, -190.0),
    ("Lyon", 290.0, -215.0),
    ("Marseille", 430.0, -910.0),
    ("Montpellier", 120.0, -830.0),
    ("Nancy", 510.0, 600.0),
    ("Nantes", -910.0, 220.0),
    ("Nice", 810.0, -790.0),
    ("Paris", -190.0, 640.0),
    ("Rennes", -910.0, 480.0),
    ("Strasbourg", 800.0, 600.0),
    ("Toulouse", -350.0, -830.0),
];

/// Directed roads with their length in km
const FRANCE_ROADS: [(&str, &str, f64); 22] = [
    ("Avignon", "Lyon", 227.0),
    ("Bordeaux", "Nantes", 329.0),
    ("Bordeaux", "Toulouse", 259.0),
    ("Brest", "Rennes", 244.0),
    ("Caen", "Paris", 241.0),
    ("Calais", "Paris", 297.0),
    ("Dijon", "Lyon", 192.0),
    ("Grenoble", "Lyon", 104.0),
    ("Limoges", "Lyon", 396.0),
    ("Lyon", "Dijon", 192.0),
    ("Lyon", "Grenoble", 104.0),
    ("Lyon", "Marseille", 216.0),
    ("Marseille", "Lyon", 216.0),
    ("Marseille", "Nice", 158.0),
    ("Montpellier", "Lyon", 216.0),
    ("Nancy", "Paris", 372.0),
    ("Nantes", "Bordeaux", 329.0),
    ("Nice", "Marseille", 158.0),
    ("Paris", "Lyon", 241.0),
    ("Rennes", "Brest", 244.0),
    ("Strasbourg", "Nancy", 145.0),
    ("Toulouse", "Bordeaux", 259.0),
];


/// Eighteen French cities joined by a sparse, directed road network
///
/// Coordinates are in a projected unit that is not to scale with the road
/// lengths, so the straight-line heuristic can overestimate on this map.
pub fn france() -> Result<Graph, GraphError> {
    let mut builder = Graph::builder();
    for (city, x, y) in FRANCE_CITIES {
        builder.add_node(city, x, y)?;
    }
    for (from, to, km) in FRANCE_ROADS {
        builder.add_edge(from, to, km)?;
    }
    Ok(builder.build())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_algos::AStar;

    #[test]
    fn test_france_builds() {
        let graph = france().unwrap();

        assert_eq!(graph.len(), 18);
        assert_eq!(graph.nodes().map(|n| n.neighbors().len()).sum::<usize>(), 22);
        assert_eq!(
            graph.neighbors("Lyon").unwrap().iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>(),
            vec!["Dijon", "Grenoble", "Marseille"]
        );
    }

    #[test]
    fn test_lyon_to_nice() {
        let graph = france().unwrap();

        let route = AStar{}.search(&graph, "Lyon", "Nice").unwrap().unwrap();

        assert_eq!(route.path, vec!["Lyon", "Marseille", "Nice"]);
        assert_eq!(route.cost, 374.0);
    }

    #[test]
    fn test_caen_to_nice_crosses_paris() {
        let graph = france().unwrap();

        let route = AStar{}.search(&graph, "Caen", "Nice").unwrap().unwrap();

        assert_eq!(route.path, vec!["Caen", "Paris", "Lyon", "Marseille", "Nice"]);
        assert_eq!(route.cost, 856.0);
    }

    #[test]
    fn test_paris_to_lyon_is_direct() {
        let graph = france().unwrap();

        let route = AStar{}.search(&graph, "Paris", "Lyon").unwrap().unwrap();

        assert_eq!(route.path, vec!["Paris", "Lyon"]);
        assert_eq!(route.cost, 241.0);
    }

    #[test]
    fn test_brittany_is_isolated() {
        let graph = france().unwrap();

        assert!(AStar{}.search(&graph, "Brest", "Lyon").unwrap().is_none());
        assert!(AStar{}.search(&graph, "Lyon", "Rennes").unwrap().is_none());
        assert!(AStar{}.search(&graph, "Rennes", "Brest").unwrap().is_some());
    }
}
