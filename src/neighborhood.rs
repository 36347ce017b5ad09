//! Open and closed neighborhoods of node sets.
use std::collections::BTreeSet;

use crate::graph::{Graph, NodeIndex};

/// The union of the open neighborhoods of the given nodes: every node
/// adjacent to at least one of them. Nodes outside the graph are ignored.
///
/// # Example
///
/// ```
/// # use graphinv::{neighborhood::neighborhood, Graph, NodeIndex};
/// let graph = Graph::path(3);
/// let hood = neighborhood(&graph, [NodeIndex::new(1)]);
/// assert!(hood.contains(&NodeIndex::new(0)));
/// assert!(hood.contains(&NodeIndex::new(2)));
/// assert!(!hood.contains(&NodeIndex::new(1)));
/// ```
pub fn neighborhood(
    graph: &Graph,
    nodes: impl IntoIterator<Item = NodeIndex>,
) -> BTreeSet<NodeIndex> {
    nodes
        .into_iter()
        .filter(|&v| graph.has_node(v))
        .flat_map(|v| graph.neighbours(v))
        .collect()
}

/// The closed neighborhood: the open neighborhood together with the nodes
/// themselves. Nodes outside the graph are ignored.
pub fn closed_neighborhood(
    graph: &Graph,
    nodes: impl IntoIterator<Item = NodeIndex>,
) -> BTreeSet<NodeIndex> {
    let mut hood = BTreeSet::new();

    for v in nodes.into_iter().filter(|&v| graph.has_node(v)) {
        hood.insert(v);
        hood.extend(graph.neighbours(v));
    }

    hood
}
