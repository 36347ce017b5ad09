//! Disparity invariants.
//!
//! The disparity of a vertex is the number of distinct degrees among its
//! neighbours; most invariants here aggregate the disparity sequence.
use crate::degree::{closed_neighborhood_degree_list, neighborhood_degree_list};
use crate::graph::{Graph, NodeIndex};
use crate::paths::NodeNotFound;

/// The number of distinct degrees among the neighbours of `v`.
///
/// # Example
///
/// ```
/// # use graphinv::disparity::vertex_disparity;
/// # use graphinv::{Graph, NodeIndex};
/// let graph = Graph::path(3);
/// assert_eq!(vertex_disparity(&graph, NodeIndex::new(0)), Ok(1));
/// ```
pub fn vertex_disparity(graph: &Graph, v: NodeIndex) -> Result<usize, NodeNotFound> {
    if !graph.has_node(v) {
        return Err(NodeNotFound(v));
    }

    Ok(neighborhood_degree_list(graph, [v]).len())
}

/// The number of distinct degrees in the closed neighborhood of `v`.
pub fn closed_vertex_disparity(graph: &Graph, v: NodeIndex) -> Result<usize, NodeNotFound> {
    if !graph.has_node(v) {
        return Err(NodeNotFound(v));
    }

    Ok(closed_neighborhood_degree_list(graph, [v]).len())
}

/// The disparity of every node, in node index order.
pub fn disparity_sequence(graph: &Graph) -> Vec<usize> {
    graph
        .node_indices()
        .map(|v| neighborhood_degree_list(graph, [v]).len())
        .collect()
}

/// The closed disparity of every node, in node index order.
pub fn closed_disparity_sequence(graph: &Graph) -> Vec<usize> {
    graph
        .node_indices()
        .map(|v| closed_neighborhood_degree_list(graph, [v]).len())
        .collect()
}

/// The Caro-Wei disparity: Σ 1/(1 + disp(v)) over all nodes.
///
/// Named after the Caro-Wei bound on the independence number, which has the
/// same shape with degrees in place of disparities.
pub fn caro_wei_disparity(graph: &Graph) -> f64 {
    disparity_sequence(graph)
        .into_iter()
        .map(|d| 1.0 / (1.0 + d as f64))
        .sum()
}

/// The closed Caro-Wei disparity: Σ 1/(1 + cdisp(v)) over all nodes.
pub fn closed_caro_wei_disparity(graph: &Graph) -> f64 {
    closed_disparity_sequence(graph)
        .into_iter()
        .map(|d| 1.0 / (1.0 + d as f64))
        .sum()
}

/// The inverse disparity: Σ 1/disp(v) over all nodes.
///
/// Infinite when the graph has an isolated node, whose disparity is zero.
pub fn inverse_disparity(graph: &Graph) -> f64 {
    disparity_sequence(graph)
        .into_iter()
        .map(|d| 1.0 / d as f64)
        .sum()
}

/// The closed inverse disparity: Σ 1/cdisp(v) over all nodes.
pub fn closed_inverse_disparity(graph: &Graph) -> f64 {
    closed_disparity_sequence(graph)
        .into_iter()
        .map(|d| 1.0 / d as f64)
        .sum()
}

/// The mean of the disparity sequence, or `None` for the empty graph.
pub fn average_vertex_disparity(graph: &Graph) -> Option<f64> {
    let sequence = disparity_sequence(graph);
    if sequence.is_empty() {
        return None;
    }

    let total: usize = sequence.iter().sum();
    Some(total as f64 / sequence.len() as f64)
}

/// The mean of the closed disparity sequence, or `None` for the empty graph.
pub fn average_closed_vertex_disparity(graph: &Graph) -> Option<f64> {
    let sequence = closed_disparity_sequence(graph);
    if sequence.is_empty() {
        return None;
    }

    let total: usize = sequence.iter().sum();
    Some(total as f64 / sequence.len() as f64)
}

/// The k-disparity: (2 / k(k+1)) Σ_{i<k} (k-i)·D[i], where D is the
/// disparity sequence in descending order.
///
/// Returns `None` when `k` is zero or exceeds the number of nodes.
///
/// # Example
///
/// ```
/// # use graphinv::disparity::k_disparity;
/// # use graphinv::Graph;
/// let graph = Graph::from_edges([(0, 1), (0, 2), (1, 2), (0, 3), (3, 4), (3, 5)]);
/// assert_eq!(k_disparity(&graph, 5), Some(29.0 / 15.0));
/// ```
pub fn k_disparity(graph: &Graph, k: usize) -> Option<f64> {
    weighted_prefix(disparity_sequence(graph), k)
}

/// The closed k-disparity, computed over the closed disparity sequence.
pub fn closed_k_disparity(graph: &Graph, k: usize) -> Option<f64> {
    weighted_prefix(closed_disparity_sequence(graph), k)
}

/// The irregularity: the closed k-disparity with k equal to the node count.
///
/// Regular graphs score 1; `None` for the empty graph.
pub fn irregularity(graph: &Graph) -> Option<f64> {
    closed_k_disparity(graph, graph.node_count())
}

fn weighted_prefix(mut sequence: Vec<usize>, k: usize) -> Option<f64> {
    if k == 0 || k > sequence.len() {
        return None;
    }

    sequence.sort_unstable_by(|a, b| b.cmp(a));
    let weighted: usize = sequence[..k]
        .iter()
        .enumerate()
        .map(|(i, d)| (k - i) * d)
        .sum();

    Some(2.0 * weighted as f64 / (k * (k + 1)) as f64)
}

#[cfg(test)]
mod test {
    use super::*;

    fn fixture() -> Graph {
        Graph::from_edges([(0, 1), (0, 2), (1, 2), (0, 3), (3, 4), (3, 5)])
    }

    fn node(index: usize) -> NodeIndex {
        NodeIndex::new(index)
    }

    #[test]
    fn vertex_disparities_of_fixture() {
        let graph = fixture();
        for (v, expected) in [(0, 2), (1, 2), (2, 2), (3, 2), (4, 1), (5, 1)] {
            assert_eq!(vertex_disparity(&graph, node(v)), Ok(expected));
        }
    }

    #[test]
    fn closed_vertex_disparities_of_fixture() {
        let graph = fixture();
        for v in 0..6 {
            assert_eq!(closed_vertex_disparity(&graph, node(v)), Ok(2));
        }
    }

    #[test]
    fn unknown_node_is_an_error() {
        let graph = fixture();
        assert_eq!(vertex_disparity(&graph, node(9)), Err(NodeNotFound(node(9))));
        assert_eq!(
            closed_vertex_disparity(&graph, node(9)),
            Err(NodeNotFound(node(9)))
        );
    }

    #[test]
    fn sequences_of_fixture() {
        let graph = fixture();
        assert_eq!(disparity_sequence(&graph), vec![2, 2, 2, 2, 1, 1]);
        assert_eq!(closed_disparity_sequence(&graph), vec![2; 6]);
    }

    #[test]
    fn caro_wei_disparities() {
        let graph = fixture();
        let third = 1.0 / 3.0;
        let expected: f64 = [third, third, third, third, 0.5, 0.5].iter().sum();
        assert_eq!(caro_wei_disparity(&graph), expected);
        let expected_closed: f64 = [third; 6].iter().sum();
        assert_eq!(closed_caro_wei_disparity(&graph), expected_closed);
    }

    #[test]
    fn inverse_disparities() {
        let graph = fixture();
        assert_eq!(inverse_disparity(&graph), 4.0 * 0.5 + 2.0);
        assert_eq!(closed_inverse_disparity(&graph), 3.0);
    }

    #[test]
    fn average_disparities() {
        let graph = fixture();
        assert_eq!(average_vertex_disparity(&graph), Some(10.0 / 6.0));
        assert_eq!(average_closed_vertex_disparity(&graph), Some(2.0));
    }

    #[test]
    fn k_disparity_of_fixture() {
        let graph = fixture();
        for k in 1..=4 {
            assert_eq!(k_disparity(&graph, k), Some(2.0));
        }
        assert_eq!(k_disparity(&graph, 5), Some(29.0 / 15.0));
        assert_eq!(k_disparity(&graph, 6), Some(39.0 / 21.0));
        assert_eq!(k_disparity(&graph, 0), None);
        assert_eq!(k_disparity(&graph, 7), None);
    }

    #[test]
    fn regular_graphs_have_irregularity_one() {
        assert_eq!(irregularity(&Graph::cycle(5)), Some(1.0));
        assert_eq!(irregularity(&Graph::complete(4)), Some(1.0));
        assert_eq!(irregularity(&Graph::new()), None);
    }
}
