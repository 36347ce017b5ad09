//! Enumeration of simple paths.
//!
//! The number of simple paths between two nodes grows exponentially with
//! graph density, so these routines are meant for small graphs; callers
//! that need a bound must impose it themselves.
use std::iter::FusedIterator;

use bitvec::prelude::*;
use thiserror::Error;

use crate::graph::{Graph, Neighbours, NodeIndex};

/// A simple path: a sequence of distinct nodes in which each consecutive
/// pair is joined by an edge. A single node is a path of length zero.
pub type Path = Vec<NodeIndex>;

/// Error returned when a queried node is not part of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("node {0:?} is not in the graph")]
pub struct NodeNotFound(pub NodeIndex);

/// Returns a lazy iterator over all simple paths from `source` to `target`.
///
/// Paths are produced in depth-first order following adjacency insertion
/// order, so the enumeration is deterministic. When `source == target` the
/// single zero-length path `[source]` is produced.
///
/// # Example
///
/// ```
/// # use graphinv::{paths::simple_paths, Graph, NodeIndex};
/// let graph = Graph::from_edges([(0, 1), (1, 2), (0, 2)]);
/// let paths: Vec<_> = simple_paths(&graph, NodeIndex::new(0), NodeIndex::new(2))
///     .unwrap()
///     .collect();
///
/// assert_eq!(paths.len(), 2);
/// assert!(paths.contains(&vec![NodeIndex::new(0), NodeIndex::new(2)]));
/// assert!(paths.contains(&vec![
///     NodeIndex::new(0),
///     NodeIndex::new(1),
///     NodeIndex::new(2),
/// ]));
/// ```
pub fn simple_paths(
    graph: &Graph,
    source: NodeIndex,
    target: NodeIndex,
) -> Result<SimplePaths<'_>, NodeNotFound> {
    if !graph.has_node(source) {
        return Err(NodeNotFound(source));
    }

    if !graph.has_node(target) {
        return Err(NodeNotFound(target));
    }

    let mut on_path = bitvec![0; graph.node_count()];
    on_path.set(source.index(), true);

    Ok(SimplePaths {
        graph,
        target,
        trivial: source == target,
        path: vec![source],
        on_path,
        stack: vec![graph.neighbours(source)],
    })
}

/// Returns every simple path from `v` to every node of the graph.
///
/// Targets are visited in index order, `v` itself included, so the result
/// always contains the zero-length path `[v]` exactly once. The output is
/// deterministic: repeated calls yield the same sequence.
///
/// # Example
///
/// ```
/// # use graphinv::{paths::connecting_paths, Graph, NodeIndex};
/// let graph = Graph::path(3);
/// let paths = connecting_paths(&graph, NodeIndex::new(0)).unwrap();
///
/// let expected: Vec<Vec<_>> = vec![
///     vec![NodeIndex::new(0)],
///     vec![NodeIndex::new(0), NodeIndex::new(1)],
///     vec![NodeIndex::new(0), NodeIndex::new(1), NodeIndex::new(2)],
/// ];
/// assert_eq!(paths, expected);
/// ```
pub fn connecting_paths(graph: &Graph, v: NodeIndex) -> Result<Vec<Path>, NodeNotFound> {
    if !graph.has_node(v) {
        return Err(NodeNotFound(v));
    }

    let mut paths = Vec::new();

    for target in graph.node_indices() {
        // Both endpoints were just checked, so simple_paths cannot fail.
        paths.extend(simple_paths(graph, v, target)?);
    }

    Ok(paths)
}

/// Iterator created by [`simple_paths`].
///
/// Performs an iterative depth-first search. The bit mask tracks the nodes
/// of the current partial path so each candidate extension is an O(1) check.
pub struct SimplePaths<'a> {
    graph: &'a Graph,
    target: NodeIndex,
    trivial: bool,
    path: Vec<NodeIndex>,
    on_path: BitVec,
    stack: Vec<Neighbours<'a>>,
}

impl<'a> Iterator for SimplePaths<'a> {
    type Item = Path;

    fn next(&mut self) -> Option<Self::Item> {
        if self.trivial {
            // A path cannot revisit its source, so the zero-length path is
            // the only one from a node to itself.
            self.trivial = false;
            self.stack.clear();
            return Some(self.path.clone());
        }

        while let Some(children) = self.stack.last_mut() {
            match children.next() {
                Some(next) if next == self.target => {
                    let mut path = self.path.clone();
                    path.push(next);
                    return Some(path);
                }
                Some(next) if !self.on_path[next.index()] => {
                    self.on_path.set(next.index(), true);
                    self.path.push(next);
                    self.stack.push(self.graph.neighbours(next));
                }
                Some(_) => {}
                None => {
                    self.stack.pop();
                    if let Some(last) = self.path.pop() {
                        self.on_path.set(last.index(), false);
                    }
                }
            }
        }

        None
    }
}

impl<'a> FusedIterator for SimplePaths<'a> {}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    fn node(index: usize) -> NodeIndex {
        NodeIndex::new(index)
    }

    #[test]
    fn path_graph_paths_from_end() {
        let graph = Graph::path(3);
        let paths = connecting_paths(&graph, node(0)).unwrap();

        assert_eq!(
            paths,
            vec![
                vec![node(0)],
                vec![node(0), node(1)],
                vec![node(0), node(1), node(2)],
            ]
        );
    }

    #[test]
    fn source_equal_to_target_yields_single_trivial_path() {
        let graph = Graph::cycle(4);
        let paths: Vec<_> = simple_paths(&graph, node(1), node(1)).unwrap().collect();
        assert_eq!(paths, vec![vec![node(1)]]);
    }

    #[test]
    fn cycle_has_two_paths_between_any_pair() {
        let graph = Graph::cycle(5);
        let paths: Vec<_> = simple_paths(&graph, node(0), node(2)).unwrap().collect();

        assert_eq!(paths.len(), 2);
        for path in &paths {
            assert_eq!(path.first(), Some(&node(0)));
            assert_eq!(path.last(), Some(&node(2)));
        }
    }

    #[test]
    fn complete_graph_path_counts() {
        // K4: between two fixed nodes there is one path of length 1, two of
        // length 2 and two of length 3.
        let graph = Graph::complete(4);
        let paths: Vec<_> = simple_paths(&graph, node(0), node(3)).unwrap().collect();
        assert_eq!(paths.len(), 5);
    }

    #[test]
    fn isolated_node_has_only_the_trivial_path() {
        let mut graph = Graph::new();
        let v = graph.add_node();

        let paths = connecting_paths(&graph, v).unwrap();
        assert_eq!(paths, vec![vec![v]]);
    }

    #[test]
    fn unknown_source_is_an_error() {
        let graph = Graph::path(2);
        assert_eq!(
            connecting_paths(&graph, node(9)),
            Err(NodeNotFound(node(9)))
        );
        assert!(simple_paths(&graph, node(0), node(9)).is_err());
    }

    #[test]
    fn enumeration_is_deterministic() {
        let graph = Graph::petersen();
        let first = connecting_paths(&graph, node(0)).unwrap();
        let second = connecting_paths(&graph, node(0)).unwrap();
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn paths_are_simple_and_connected(edges in proptest::collection::vec((0u32..6, 0u32..6), 0..12)) {
            let edges: Vec<_> = edges.into_iter().filter(|(u, v)| u != v).collect();
            let mut graph = Graph::from_edges(edges);
            if graph.is_empty() {
                graph.add_node();
            }

            let source = node(0);
            for path in connecting_paths(&graph, source).unwrap() {
                prop_assert_eq!(path[0], source);

                let mut sorted = path.clone();
                sorted.sort();
                sorted.dedup();
                prop_assert_eq!(sorted.len(), path.len());

                for pair in path.windows(2) {
                    prop_assert!(graph.contains_edge(pair[0], pair[1]));
                }
            }
        }

        #[test]
        fn trivial_path_appears_exactly_once(n in 1usize..6) {
            let graph = Graph::complete(n);
            let source = node(0);
            let paths = connecting_paths(&graph, source).unwrap();
            let trivial = paths.iter().filter(|path| **path == vec![source]).count();
            prop_assert_eq!(trivial, 1);
        }
    }
}
