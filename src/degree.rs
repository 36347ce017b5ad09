//! Degree statistics.
use crate::graph::{Graph, NodeIndex};
use crate::neighborhood::{closed_neighborhood, neighborhood};

/// The degree of every node, in node index order.
///
/// # Example
///
/// ```
/// # use graphinv::degree::degree_sequence;
/// # use graphinv::Graph;
/// assert_eq!(degree_sequence(&Graph::path(3)), vec![1, 2, 1]);
/// ```
pub fn degree_sequence(graph: &Graph) -> Vec<usize> {
    graph.node_indices().map(|v| graph.degree(v)).collect()
}

/// The smallest degree of any node, or `None` for the empty graph.
pub fn min_degree(graph: &Graph) -> Option<usize> {
    graph.node_indices().map(|v| graph.degree(v)).min()
}

/// The largest degree of any node, or `None` for the empty graph.
pub fn max_degree(graph: &Graph) -> Option<usize> {
    graph.node_indices().map(|v| graph.degree(v)).max()
}

/// The average of all node degrees, or `None` for the empty graph.
///
/// # Example
///
/// ```
/// # use graphinv::degree::average_degree;
/// # use graphinv::Graph;
/// assert_eq!(average_degree(&Graph::star(3)), Some(1.5));
/// ```
pub fn average_degree(graph: &Graph) -> Option<f64> {
    if graph.is_empty() {
        return None;
    }

    let total: usize = degree_sequence(graph).iter().sum();
    Some(total as f64 / graph.node_count() as f64)
}

/// The number of nodes with degree exactly `k`.
pub fn number_of_nodes_of_degree_k(graph: &Graph, k: usize) -> usize {
    graph
        .node_indices()
        .filter(|&v| graph.degree(v) == k)
        .count()
}

/// The number of leaves, i.e. nodes of degree one.
pub fn number_of_degree_one_nodes(graph: &Graph) -> usize {
    number_of_nodes_of_degree_k(graph, 1)
}

/// The number of nodes whose degree equals the minimum degree.
///
/// Zero for the empty graph.
pub fn number_of_min_degree_nodes(graph: &Graph) -> usize {
    match min_degree(graph) {
        Some(min) => number_of_nodes_of_degree_k(graph, min),
        None => 0,
    }
}

/// The number of nodes whose degree equals the maximum degree.
///
/// Zero for the empty graph.
pub fn number_of_max_degree_nodes(graph: &Graph) -> usize {
    match max_degree(graph) {
        Some(max) => number_of_nodes_of_degree_k(graph, max),
        None => 0,
    }
}

/// Whether all nodes have the same degree. Vacuously true for the empty graph.
pub fn is_regular(graph: &Graph) -> bool {
    min_degree(graph) == max_degree(graph)
}

/// Whether the maximum degree is at most three.
pub fn is_subcubic(graph: &Graph) -> bool {
    max_degree(graph).map_or(true, |max| max <= 3)
}

/// Whether every node has degree exactly three.
///
/// # Example
///
/// ```
/// # use graphinv::degree::is_cubic;
/// # use graphinv::Graph;
/// assert!(is_cubic(&Graph::petersen()));
/// assert!(!is_cubic(&Graph::path(4)));
/// ```
pub fn is_cubic(graph: &Graph) -> bool {
    is_regular(graph) && max_degree(graph) == Some(3)
}

/// The distinct degrees found in the open neighborhood of the given nodes,
/// in ascending order.
///
/// # Example
///
/// ```
/// # use graphinv::degree::neighborhood_degree_list;
/// # use graphinv::{Graph, NodeIndex};
/// let graph = Graph::path(3);
/// assert_eq!(
///     neighborhood_degree_list(&graph, [NodeIndex::new(1)]),
///     vec![1]
/// );
/// ```
pub fn neighborhood_degree_list(
    graph: &Graph,
    nodes: impl IntoIterator<Item = NodeIndex>,
) -> Vec<usize> {
    let mut degrees: Vec<_> = neighborhood(graph, nodes)
        .into_iter()
        .map(|v| graph.degree(v))
        .collect();
    degrees.sort_unstable();
    degrees.dedup();
    degrees
}

/// The distinct degrees found in the closed neighborhood of the given nodes,
/// in ascending order.
pub fn closed_neighborhood_degree_list(
    graph: &Graph,
    nodes: impl IntoIterator<Item = NodeIndex>,
) -> Vec<usize> {
    let mut degrees: Vec<_> = closed_neighborhood(graph, nodes)
        .into_iter()
        .map(|v| graph.degree(v))
        .collect();
    degrees.sort_unstable();
    degrees.dedup();
    degrees
}

#[cfg(test)]
mod test {
    use super::*;

    // Two triangles sharing structure: a triangle on {0, 1, 2} joined to a
    // star at node 3 with leaves 4 and 5.
    fn fixture() -> Graph {
        Graph::from_edges([(0, 1), (0, 2), (1, 2), (0, 3), (3, 4), (3, 5)])
    }

    fn node(index: usize) -> NodeIndex {
        NodeIndex::new(index)
    }

    #[test]
    fn degree_sequence_of_fixture() {
        assert_eq!(degree_sequence(&fixture()), vec![3, 2, 2, 3, 1, 1]);
    }

    #[test]
    fn degree_extremes() {
        let graph = fixture();
        assert_eq!(min_degree(&graph), Some(1));
        assert_eq!(max_degree(&graph), Some(3));
        assert_eq!(average_degree(&graph), Some(2.0));
    }

    #[test]
    fn empty_graph_has_no_extremes() {
        let graph = Graph::new();
        assert_eq!(min_degree(&graph), None);
        assert_eq!(max_degree(&graph), None);
        assert_eq!(average_degree(&graph), None);
        assert_eq!(number_of_min_degree_nodes(&graph), 0);
    }

    #[test]
    fn degree_counting() {
        let graph = fixture();
        assert_eq!(number_of_nodes_of_degree_k(&graph, 2), 2);
        assert_eq!(number_of_degree_one_nodes(&graph), 2);
        assert_eq!(number_of_min_degree_nodes(&graph), 2);
        assert_eq!(number_of_max_degree_nodes(&graph), 2);
    }

    #[test]
    fn regularity_predicates() {
        assert!(is_regular(&Graph::cycle(5)));
        assert!(!is_regular(&fixture()));
        assert!(is_subcubic(&fixture()));
        assert!(!is_subcubic(&Graph::complete(5)));
        assert!(is_cubic(&Graph::complete(4)));
        assert!(!is_cubic(&Graph::cycle(4)));
    }

    #[test]
    fn neighborhood_degree_lists() {
        let graph = fixture();
        assert_eq!(neighborhood_degree_list(&graph, [node(1)]), vec![2, 3]);
        assert_eq!(
            closed_neighborhood_degree_list(&graph, [node(4)]),
            vec![1, 3]
        );
    }
}
