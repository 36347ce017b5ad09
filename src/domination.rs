//! Domination invariants.
//!
//! All minimum-set searches are brute force over subsets in increasing
//! order of size; where a tractable lower bound on the answer is known
//! (the sub-domination numbers) the search starts there.
use std::collections::BTreeSet;

use bitvec::prelude::*;
use itertools::Itertools;

use crate::degree::degree_sequence;
use crate::forcing::is_k_forcing_set;
use crate::graph::{Graph, NodeIndex};
use crate::neighborhood::closed_neighborhood;

/// Whether every node is in the set or adjacent to a node of the set.
///
/// # Example
///
/// ```
/// # use graphinv::domination::is_dominating_set;
/// # use graphinv::{Graph, NodeIndex};
/// let star = Graph::star(4);
/// assert!(is_dominating_set(&star, [NodeIndex::new(0)]));
/// assert!(!is_dominating_set(&star, [NodeIndex::new(1)]));
/// ```
pub fn is_dominating_set(graph: &Graph, set: impl IntoIterator<Item = NodeIndex>) -> bool {
    is_k_dominating_set(graph, set, 1)
}

/// Whether every node outside the set is adjacent to at least `k` nodes of
/// the set. For `k = 1` this is ordinary domination.
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn is_k_dominating_set(
    graph: &Graph,
    set: impl IntoIterator<Item = NodeIndex>,
    k: usize,
) -> bool {
    assert!(k >= 1, "k must be a positive integer");

    let set: BTreeSet<NodeIndex> = set.into_iter().filter(|&n| graph.has_node(n)).collect();

    graph
        .node_indices()
        .filter(|v| !set.contains(v))
        .all(|v| graph.neighbours(v).filter(|next| set.contains(next)).count() >= k)
}

/// Whether every node of the graph, set members included, is adjacent to a
/// node of the set.
pub fn is_total_dominating_set(graph: &Graph, set: impl IntoIterator<Item = NodeIndex>) -> bool {
    let set: BTreeSet<NodeIndex> = set.into_iter().filter(|&n| graph.has_node(n)).collect();

    graph
        .node_indices()
        .all(|v| graph.neighbours(v).any(|next| set.contains(&next)))
}

/// Whether the set is k-dominating and induces a connected, non-empty
/// subgraph.
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn is_connected_k_dominating_set(
    graph: &Graph,
    set: impl IntoIterator<Item = NodeIndex>,
    k: usize,
) -> bool {
    assert!(k >= 1, "k must be a positive integer");

    let set: BTreeSet<NodeIndex> = set.into_iter().filter(|&n| graph.has_node(n)).collect();

    !set.is_empty()
        && induces_connected_subgraph(graph, &set)
        && is_k_dominating_set(graph, set, k)
}

fn induces_connected_subgraph(graph: &Graph, set: &BTreeSet<NodeIndex>) -> bool {
    let Some(&start) = set.iter().next() else {
        return true;
    };

    let mut seen = bitvec![0; graph.node_count()];
    seen.set(start.index(), true);
    let mut stack = vec![start];
    let mut count = 1;

    while let Some(v) = stack.pop() {
        for next in graph.neighbours(v) {
            if set.contains(&next) && !seen[next.index()] {
                seen.set(next.index(), true);
                count += 1;
                stack.push(next);
            }
        }
    }

    count == set.len()
}

/// The sub-k-domination number: the smallest `t` such that
/// `t + (sum of the t largest degrees) / k >= n`. A tractable lower bound
/// for the k-domination number.
///
/// Returns `None` only for `k = 0`; for the empty graph the answer is 0.
pub fn sub_k_domination_number(graph: &Graph, k: usize) -> Option<usize> {
    if k == 0 {
        return None;
    }

    let n = graph.node_count();
    let mut degrees = degree_sequence(graph);
    degrees.sort_unstable_by(|a, b| b.cmp(a));

    let mut degree_sum = 0;
    for t in 0..=n {
        if t > 0 {
            degree_sum += degrees[t - 1];
        }
        if t + degree_sum / k >= n {
            return Some(t);
        }
    }

    Some(n)
}

/// The sub-total-domination number: the smallest `t` such that the sum of
/// the `t` largest degrees is at least `n`. `None` when no prefix of the
/// degree sequence reaches `n`, e.g. in the presence of isolated vertices.
pub fn sub_total_domination_number(graph: &Graph) -> Option<usize> {
    let n = graph.node_count();
    let mut degrees = degree_sequence(graph);
    degrees.sort_unstable_by(|a, b| b.cmp(a));

    let mut degree_sum = 0;
    for t in 0..=n {
        if t > 0 {
            degree_sum += degrees[t - 1];
        }
        if degree_sum >= n {
            return Some(t);
        }
    }

    None
}

/// A smallest k-dominating set, found by brute force starting from the
/// sub-k-domination lower bound.
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn min_k_dominating_set(graph: &Graph, k: usize) -> Vec<NodeIndex> {
    assert!(k >= 1, "k must be a positive integer");

    let start = sub_k_domination_number(graph, k).unwrap_or(0);

    for size in start..=graph.node_count() {
        for set in graph.node_indices().combinations(size) {
            if is_k_dominating_set(graph, set.iter().copied(), k) {
                return set;
            }
        }
    }

    // The full node set dominates.
    graph.node_indices().collect()
}

/// A smallest dominating set.
pub fn min_dominating_set(graph: &Graph) -> Vec<NodeIndex> {
    min_k_dominating_set(graph, 1)
}

/// A smallest total dominating set, found by brute force starting from the
/// sub-total-domination lower bound. `None` when no total dominating set
/// exists (some node has no neighbour at all).
pub fn min_total_dominating_set(graph: &Graph) -> Option<Vec<NodeIndex>> {
    if graph.is_empty() {
        return Some(Vec::new());
    }

    let start = sub_total_domination_number(graph)?;

    for size in start..=graph.node_count() {
        for set in graph.node_indices().combinations(size) {
            if is_total_dominating_set(graph, set.iter().copied()) {
                return Some(set);
            }
        }
    }

    None
}

/// A smallest connected k-dominating set, or `None` when none exists
/// (e.g. the graph is disconnected).
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn min_connected_k_dominating_set(graph: &Graph, k: usize) -> Option<Vec<NodeIndex>> {
    assert!(k >= 1, "k must be a positive integer");

    if graph.is_empty() {
        return Some(Vec::new());
    }

    for size in 1..=graph.node_count() {
        for set in graph.node_indices().combinations(size) {
            if is_connected_k_dominating_set(graph, set.iter().copied(), k) {
                return Some(set);
            }
        }
    }

    None
}

/// A smallest connected dominating set, or `None` when none exists.
pub fn min_connected_dominating_set(graph: &Graph) -> Option<Vec<NodeIndex>> {
    min_connected_k_dominating_set(graph, 1)
}

/// The domination number: the size of a smallest dominating set.
///
/// # Example
///
/// ```
/// # use graphinv::domination::domination_number;
/// # use graphinv::Graph;
/// assert_eq!(domination_number(&Graph::star(5)), 1);
/// assert_eq!(domination_number(&Graph::path(4)), 2);
/// ```
pub fn domination_number(graph: &Graph) -> usize {
    min_dominating_set(graph).len()
}

/// The k-domination number: the size of a smallest k-dominating set.
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn k_domination_number(graph: &Graph, k: usize) -> usize {
    min_k_dominating_set(graph, k).len()
}

/// The total domination number, or `None` when no total dominating set
/// exists.
pub fn total_domination_number(graph: &Graph) -> Option<usize> {
    min_total_dominating_set(graph).map(|set| set.len())
}

/// The connected k-domination number, or `None` when no connected
/// k-dominating set exists.
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn connected_k_domination_number(graph: &Graph, k: usize) -> Option<usize> {
    min_connected_k_dominating_set(graph, k).map(|set| set.len())
}

/// The connected domination number, or `None` when no connected dominating
/// set exists.
pub fn connected_domination_number(graph: &Graph) -> Option<usize> {
    connected_k_domination_number(graph, 1)
}

/// Whether the closed neighborhood of the set is a k-forcing set. This is
/// the k-power domination condition: the set observes its closed
/// neighborhood directly and the forcing rule propagates observation.
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn is_k_power_dominating_set(
    graph: &Graph,
    set: impl IntoIterator<Item = NodeIndex>,
    k: usize,
) -> bool {
    is_k_forcing_set(graph, closed_neighborhood(graph, set), k)
}

/// A smallest k-power dominating set.
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn min_k_power_dominating_set(graph: &Graph, k: usize) -> Vec<NodeIndex> {
    assert!(k >= 1, "k must be a positive integer");

    if graph.is_empty() {
        return Vec::new();
    }

    for size in 1..=graph.node_count() {
        for set in graph.node_indices().combinations(size) {
            if is_k_power_dominating_set(graph, set.iter().copied(), k) {
                return set;
            }
        }
    }

    graph.node_indices().collect()
}

/// The k-power domination number.
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn k_power_domination_number(graph: &Graph, k: usize) -> usize {
    min_k_power_dominating_set(graph, k).len()
}

/// Whether the set is a power dominating set (`k = 1`).
pub fn is_power_dominating_set(graph: &Graph, set: impl IntoIterator<Item = NodeIndex>) -> bool {
    is_k_power_dominating_set(graph, set, 1)
}

/// A smallest power dominating set.
pub fn min_power_dominating_set(graph: &Graph) -> Vec<NodeIndex> {
    min_k_power_dominating_set(graph, 1)
}

/// The power domination number.
///
/// # Example
///
/// ```
/// # use graphinv::domination::power_domination_number;
/// # use graphinv::Graph;
/// assert_eq!(power_domination_number(&Graph::path(5)), 1);
/// ```
pub fn power_domination_number(graph: &Graph) -> usize {
    k_power_domination_number(graph, 1)
}

#[cfg(test)]
mod test {
    use super::*;

    fn node(index: usize) -> NodeIndex {
        NodeIndex::new(index)
    }

    #[test]
    fn star_center_dominates() {
        let star = Graph::star(4);
        assert!(is_dominating_set(&star, [node(0)]));
        assert!(!is_dominating_set(&star, [node(1)]));
        assert_eq!(domination_number(&star), 1);
    }

    #[test]
    fn k_domination_requires_k_neighbours() {
        let cycle = Graph::cycle(4);
        // Opposite nodes: each outside node has both as neighbours.
        assert!(is_k_dominating_set(&cycle, [node(0), node(2)], 2));
        assert!(!is_k_dominating_set(&cycle, [node(0), node(1)], 2));
        assert_eq!(k_domination_number(&cycle, 2), 2);
    }

    #[test]
    fn domination_number_of_path() {
        assert_eq!(domination_number(&Graph::path(4)), 2);
        assert_eq!(domination_number(&Graph::path(7)), 3);
    }

    #[test]
    fn total_domination_of_cycle() {
        assert!(is_total_dominating_set(&Graph::cycle(4), [node(0), node(1)]));
        assert_eq!(total_domination_number(&Graph::cycle(4)), Some(2));
    }

    #[test]
    fn total_domination_fails_with_isolated_vertices() {
        let mut graph = Graph::path(2);
        graph.add_node();
        assert_eq!(total_domination_number(&graph), None);
    }

    #[test]
    fn connected_domination() {
        let path = Graph::path(5);
        // The three interior nodes form the unique minimum connected
        // dominating set of P5.
        assert_eq!(
            min_connected_dominating_set(&path),
            Some(vec![node(1), node(2), node(3)])
        );

        let mut split = Graph::path(2);
        split.add_node();
        assert_eq!(connected_domination_number(&split), None);
    }

    #[test]
    fn sub_domination_bounds() {
        let star = Graph::star(4);
        assert_eq!(sub_k_domination_number(&star, 1), Some(1));
        assert_eq!(sub_total_domination_number(&star), Some(2));
        assert_eq!(sub_k_domination_number(&star, 0), None);
    }

    #[test]
    fn sub_domination_is_a_lower_bound_on_small_graphs() {
        for graph in [Graph::path(5), Graph::cycle(6), Graph::petersen()] {
            let bound = sub_k_domination_number(&graph, 1).unwrap();
            assert!(bound <= domination_number(&graph));
        }
    }

    #[test]
    fn power_domination_of_small_graphs() {
        assert_eq!(power_domination_number(&Graph::path(5)), 1);
        assert!(is_power_dominating_set(&Graph::star(5), [node(0)]));

        // No single closed neighborhood of the Petersen graph forces the
        // rest: every colored node keeps two uncolored neighbours.
        assert!(!is_power_dominating_set(&Graph::petersen(), [node(0)]));
        assert_eq!(power_domination_number(&Graph::petersen()), 2);
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn zero_k_panics_for_the_empty_connected_dominating_set() {
        is_connected_k_dominating_set(&Graph::path(2), [], 0);
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn zero_k_power_domination_panics_on_the_empty_graph() {
        min_k_power_dominating_set(&Graph::new(), 0);
    }
}
