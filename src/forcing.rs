//! Zero forcing and k-forcing invariants.
//!
//! A colored node *forces* when it has at least one and at most `k`
//! uncolored neighbours; forcing colors all of them. A set is k-forcing
//! when repeating this rule colors the whole graph. The minimum-set
//! searches are brute force over subsets of increasing size, so they are
//! only practical on small graphs.
use std::collections::BTreeSet;

use itertools::Itertools;

use crate::degree::min_degree;
use crate::graph::{Graph, NodeIndex};
use crate::neighborhood::neighborhood;

/// Whether `v` can force relative to the colored set.
///
/// True iff `v` is in the set and has between 1 and `k` neighbours outside
/// it. Set members outside the graph are ignored.
///
/// # Panics
///
/// Panics if `k` is zero.
///
/// # Example
///
/// ```
/// # use graphinv::forcing::is_k_forcing_vertex;
/// # use graphinv::{Graph, NodeIndex};
/// let star = Graph::star(2);
/// let leaf = NodeIndex::new(1);
/// assert!(is_k_forcing_vertex(&star, leaf, [leaf], 1));
/// ```
pub fn is_k_forcing_vertex(
    graph: &Graph,
    v: NodeIndex,
    set: impl IntoIterator<Item = NodeIndex>,
    k: usize,
) -> bool {
    assert!(k >= 1, "k must be a positive integer");

    let set: BTreeSet<NodeIndex> = set.into_iter().filter(|&n| graph.has_node(n)).collect();
    if !set.contains(&v) {
        return false;
    }

    let uncolored = graph
        .neighbours(v)
        .filter(|next| !set.contains(next))
        .count();
    (1..=k).contains(&uncolored)
}

/// Whether at least one node of the set can force.
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn is_k_forcing_active_set(
    graph: &Graph,
    set: impl IntoIterator<Item = NodeIndex>,
    k: usize,
) -> bool {
    assert!(k >= 1, "k must be a positive integer");

    let set: BTreeSet<NodeIndex> = set.into_iter().filter(|&n| graph.has_node(n)).collect();
    set.iter()
        .any(|&v| is_k_forcing_vertex(graph, v, set.iter().copied(), k))
}

/// Whether iterating the forcing rule from the set colors every node.
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn is_k_forcing_set(
    graph: &Graph,
    set: impl IntoIterator<Item = NodeIndex>,
    k: usize,
) -> bool {
    assert!(k >= 1, "k must be a positive integer");

    let mut colored: BTreeSet<NodeIndex> =
        set.into_iter().filter(|&n| graph.has_node(n)).collect();

    loop {
        let forcing: Vec<NodeIndex> = colored
            .iter()
            .copied()
            .filter(|&v| is_k_forcing_vertex(graph, v, colored.iter().copied(), k))
            .collect();

        if forcing.is_empty() {
            break;
        }

        for v in forcing {
            colored.extend(neighborhood(graph, [v]));
        }
    }

    colored.len() == graph.node_count()
}

/// A smallest k-forcing set, found by brute force over subsets of
/// increasing size. For `k = 1` the search starts at the minimum degree,
/// a lower bound for the zero forcing number.
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn min_k_forcing_set(graph: &Graph, k: usize) -> Vec<NodeIndex> {
    assert!(k >= 1, "k must be a positive integer");

    if graph.is_empty() {
        return Vec::new();
    }

    let start = if k == 1 {
        min_degree(graph).unwrap_or(1).max(1)
    } else {
        1
    };

    for size in start..=graph.node_count() {
        for set in graph.node_indices().combinations(size) {
            if is_k_forcing_set(graph, set.iter().copied(), k) {
                return set;
            }
        }
    }

    // The full node set always forces.
    graph.node_indices().collect()
}

/// The k-forcing number: the size of a smallest k-forcing set.
///
/// # Panics
///
/// Panics if `k` is zero.
///
/// # Example
///
/// ```
/// # use graphinv::forcing::k_forcing_number;
/// # use graphinv::Graph;
/// assert_eq!(k_forcing_number(&Graph::petersen(), 2), 2);
/// ```
pub fn k_forcing_number(graph: &Graph, k: usize) -> usize {
    min_k_forcing_set(graph, k).len()
}

/// Whether `v` can force with the standard rule (`k = 1`).
pub fn is_zero_forcing_vertex(
    graph: &Graph,
    v: NodeIndex,
    set: impl IntoIterator<Item = NodeIndex>,
) -> bool {
    is_k_forcing_vertex(graph, v, set, 1)
}

/// Whether at least one node of the set can force with the standard rule.
pub fn is_zero_forcing_active_set(
    graph: &Graph,
    set: impl IntoIterator<Item = NodeIndex>,
) -> bool {
    is_k_forcing_active_set(graph, set, 1)
}

/// Whether the set is a zero forcing set.
///
/// # Example
///
/// ```
/// # use graphinv::forcing::is_zero_forcing_set;
/// # use graphinv::{Graph, NodeIndex};
/// let path = Graph::path(3);
/// assert!(is_zero_forcing_set(&path, [NodeIndex::new(0)]));
/// ```
pub fn is_zero_forcing_set(graph: &Graph, set: impl IntoIterator<Item = NodeIndex>) -> bool {
    is_k_forcing_set(graph, set, 1)
}

/// A smallest zero forcing set.
pub fn min_zero_forcing_set(graph: &Graph) -> Vec<NodeIndex> {
    min_k_forcing_set(graph, 1)
}

/// The zero forcing number: the size of a smallest zero forcing set.
pub fn zero_forcing_number(graph: &Graph) -> usize {
    min_zero_forcing_set(graph).len()
}

/// Whether the set is a zero forcing set that induces no isolated vertex,
/// i.e. every member has a neighbour in the set.
pub fn is_total_forcing_set(graph: &Graph, set: impl IntoIterator<Item = NodeIndex>) -> bool {
    let set: BTreeSet<NodeIndex> = set.into_iter().filter(|&n| graph.has_node(n)).collect();

    let no_isolates = set
        .iter()
        .all(|&v| graph.neighbours(v).any(|next| set.contains(&next)));

    no_isolates && is_zero_forcing_set(graph, set)
}

/// A smallest total forcing set, found by brute force over subsets of
/// increasing size starting at two (a single node never has a neighbour in
/// the set). `None` when no total forcing set exists, e.g. when the graph
/// has an isolated vertex; the empty graph yields the empty set.
pub fn min_total_forcing_set(graph: &Graph) -> Option<Vec<NodeIndex>> {
    if graph.is_empty() {
        return Some(Vec::new());
    }

    for size in 2..=graph.node_count() {
        for set in graph.node_indices().combinations(size) {
            if is_total_forcing_set(graph, set.iter().copied()) {
                return Some(set);
            }
        }
    }

    None
}

/// The total forcing number: the size of a smallest total forcing set, or
/// `None` when no total forcing set exists.
pub fn total_forcing_number(graph: &Graph) -> Option<usize> {
    min_total_forcing_set(graph).map(|set| set.len())
}
