//! Structural predicates: freeness from small induced subgraphs.
//!
//! The checks enumerate every node subset of the pattern's size and every
//! injection onto it, so they are only meant for patterns of a handful of
//! nodes (the fixed patterns here have at most five).
use itertools::Itertools;

use crate::graph::{Graph, NodeIndex};

/// Whether no induced subgraph of `graph` is isomorphic to `pattern`.
///
/// Vacuously true when the pattern has more nodes than the graph.
///
/// # Example
///
/// ```
/// # use graphinv::structural::is_induced_subgraph_free;
/// # use graphinv::Graph;
/// let triangle = Graph::complete(3);
/// assert!(!is_induced_subgraph_free(&Graph::complete(4), &triangle));
/// assert!(is_induced_subgraph_free(&Graph::path(4), &triangle));
/// ```
pub fn is_induced_subgraph_free(graph: &Graph, pattern: &Graph) -> bool {
    let size = pattern.node_count();
    let pattern_nodes: Vec<NodeIndex> = pattern.node_indices().collect();

    for subset in graph.node_indices().combinations(size) {
        for image in subset.iter().copied().permutations(size) {
            let preserved = pattern_nodes.iter().enumerate().all(|(i, &p)| {
                pattern_nodes[i + 1..].iter().zip(&image[i + 1..]).all(
                    |(&q, &mapped)| {
                        pattern.contains_edge(p, q) == graph.contains_edge(image[i], mapped)
                    },
                )
            });

            if preserved {
                return false;
            }
        }
    }

    true
}

/// Whether the graph contains no triangle (induced K3).
///
/// # Example
///
/// ```
/// # use graphinv::structural::is_triangle_free;
/// # use graphinv::Graph;
/// assert!(!is_triangle_free(&Graph::complete(4)));
/// assert!(is_triangle_free(&Graph::cycle(5)));
/// ```
pub fn is_triangle_free(graph: &Graph) -> bool {
    is_induced_subgraph_free(graph, &Graph::complete(3))
}

/// Whether the graph contains no induced claw (K1,3).
pub fn is_claw_free(graph: &Graph) -> bool {
    is_induced_subgraph_free(graph, &Graph::star(3))
}

/// Whether the graph contains no induced bull: a triangle with pendant
/// vertices attached to two of its corners.
pub fn is_bull_free(graph: &Graph) -> bool {
    let bull = Graph::from_edges([(0, 1), (0, 2), (1, 2), (1, 3), (2, 4)]);
    is_induced_subgraph_free(graph, &bull)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn complete_graphs_have_triangles_but_no_claws_or_bulls() {
        let graph = Graph::complete(4);
        assert!(!is_triangle_free(&graph));
        assert!(is_claw_free(&graph));
        assert!(is_bull_free(&graph));
    }

    #[test]
    fn stars_are_triangle_free_but_not_claw_free() {
        let graph = Graph::star(4);
        assert!(is_triangle_free(&graph));
        assert!(!is_claw_free(&graph));
    }

    #[test]
    fn the_bull_is_not_bull_free() {
        let bull = Graph::from_edges([(0, 1), (0, 2), (1, 2), (1, 3), (2, 4)]);
        assert!(!is_bull_free(&bull));
        assert!(!is_triangle_free(&bull));
        assert!(is_claw_free(&bull));
    }

    #[test]
    fn long_cycles_avoid_all_three_patterns() {
        let graph = Graph::cycle(6);
        assert!(is_triangle_free(&graph));
        assert!(is_claw_free(&graph));
        assert!(is_bull_free(&graph));
    }

    #[test]
    fn small_graphs_are_vacuously_free() {
        assert!(is_triangle_free(&Graph::path(2)));
        assert!(is_bull_free(&Graph::complete(4)));
    }

    #[test]
    fn paw_contains_a_triangle_but_no_bull() {
        // Triangle with a single pendant.
        let paw = Graph::from_edges([(0, 1), (0, 2), (1, 2), (1, 3)]);
        assert!(!is_triangle_free(&paw));
        assert!(is_bull_free(&paw));
        assert!(is_claw_free(&paw));
    }
}
