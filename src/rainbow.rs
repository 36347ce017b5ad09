//! Rainbow paths and rainbow connectivity.
//!
//! A path is *rainbow* under an edge coloring when no two of its edges share
//! a color. A vertex is rainbow connected when rainbow paths tie it to the
//! rest of the graph; the exact quantifier is chosen by [`RainbowCriterion`].
use std::collections::BTreeMap;

use thiserror::Error;

use crate::graph::{Graph, NodeIndex};
use crate::paths::{simple_paths, NodeNotFound};

/// An assignment of colors to undirected edges, keyed by unordered node pair.
///
/// The coloring is built and owned by the caller and may be partial; the
/// predicates in this module fail with [`MissingColor`] when they reach an
/// uncolored edge. Use [`EdgeColoring::covers`] to validate a coloring
/// against a graph ahead of time.
///
/// # Example
///
/// ```
/// # use graphinv::rainbow::EdgeColoring;
/// let coloring: EdgeColoring<&str> = [((0, 1), "red"), ((1, 2), "blue")]
///     .into_iter()
///     .collect();
///
/// assert_eq!(coloring.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeColoring<C> {
    colors: BTreeMap<(NodeIndex, NodeIndex), C>,
}

impl<C> EdgeColoring<C> {
    /// Creates an empty coloring.
    pub fn new() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    /// Assigns a color to the edge between `u` and `v`, replacing and
    /// returning any previous assignment. The endpoint order is irrelevant.
    pub fn insert(&mut self, u: NodeIndex, v: NodeIndex, color: C) -> Option<C> {
        self.colors.insert((u.min(v), u.max(v)), color)
    }

    /// The color of the edge between `u` and `v`, if assigned.
    pub fn get(&self, u: NodeIndex, v: NodeIndex) -> Option<&C> {
        self.colors.get(&(u.min(v), u.max(v)))
    }

    /// Number of colored edges.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no edge has been colored.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Whether every edge of `graph` has an assigned color.
    pub fn covers(&self, graph: &Graph) -> bool {
        graph
            .edge_indices()
            .filter_map(|e| graph.edge_endpoints(e))
            .all(|(u, v)| self.get(u, v).is_some())
    }
}

impl<C> FromIterator<((u32, u32), C)> for EdgeColoring<C> {
    fn from_iter<I: IntoIterator<Item = ((u32, u32), C)>>(iter: I) -> Self {
        let mut coloring = Self::new();
        for ((u, v), color) in iter {
            coloring.insert(NodeIndex::from(u), NodeIndex::from(v), color);
        }
        coloring
    }
}

/// Error returned when a path traverses an edge without an assigned color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("edge ({u:?}, {v:?}) has no assigned color")]
pub struct MissingColor {
    /// One endpoint of the uncolored edge.
    pub u: NodeIndex,
    /// The other endpoint of the uncolored edge.
    pub v: NodeIndex,
}

/// Error returned by the rainbow connectivity predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RainbowError {
    #[error(transparent)]
    NodeNotFound(#[from] NodeNotFound),
    #[error(transparent)]
    MissingColor(#[from] MissingColor),
}

/// Which paths count towards vertex rainbow connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainbowCriterion {
    /// Some path from the vertex to *any* node of the graph is rainbow.
    ///
    /// The zero-length path from a vertex to itself is vacuously rainbow, so
    /// under this criterion every vertex of a non-empty graph is rainbow
    /// connected. This reproduces the historical behavior of the connecting
    /// paths routine; prefer [`RainbowCriterion::EveryTarget`] for the
    /// textbook notion.
    AnyPath,
    /// For every *other* node of the graph, some path from the vertex to it
    /// is rainbow. Unreachable nodes make the vertex fail the criterion.
    EveryTarget,
}

/// Checks whether all edges of a simple path have pairwise distinct colors.
///
/// Paths with at most one edge are vacuously rainbow.
///
/// # Example
///
/// ```
/// # use graphinv::rainbow::{is_rainbow_path, EdgeColoring};
/// # use graphinv::NodeIndex;
/// let coloring: EdgeColoring<&str> = [((0, 1), "red"), ((1, 2), "blue")]
///     .into_iter()
///     .collect();
/// let path = [NodeIndex::new(0), NodeIndex::new(1), NodeIndex::new(2)];
///
/// assert_eq!(is_rainbow_path(&path, &coloring), Ok(true));
/// ```
pub fn is_rainbow_path<C: PartialEq>(
    path: &[NodeIndex],
    coloring: &EdgeColoring<C>,
) -> Result<bool, MissingColor> {
    let mut colors = Vec::with_capacity(path.len().saturating_sub(1));

    for pair in path.windows(2) {
        let color = coloring
            .get(pair[0], pair[1])
            .ok_or(MissingColor {
                u: pair[0].min(pair[1]),
                v: pair[0].max(pair[1]),
            })?;
        colors.push(color);
    }

    for (i, color) in colors.iter().enumerate() {
        if colors[i + 1..].iter().any(|other| other == color) {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Checks whether `v` is rainbow connected in `graph` under `coloring`.
///
/// Returns as soon as the criterion is decided: under
/// [`RainbowCriterion::AnyPath`] on the first rainbow path found, under
/// [`RainbowCriterion::EveryTarget`] on the first target with no rainbow
/// path. Any traversed edge without a color aborts with
/// [`RainbowError::MissingColor`].
pub fn is_vertex_rainbow_connected<C: PartialEq>(
    graph: &Graph,
    v: NodeIndex,
    coloring: &EdgeColoring<C>,
    criterion: RainbowCriterion,
) -> Result<bool, RainbowError> {
    if !graph.has_node(v) {
        return Err(NodeNotFound(v).into());
    }

    match criterion {
        RainbowCriterion::AnyPath => {
            for target in graph.node_indices() {
                for path in simple_paths(graph, v, target)? {
                    if is_rainbow_path(&path, coloring)? {
                        return Ok(true);
                    }
                }
            }
            Ok(false)
        }
        RainbowCriterion::EveryTarget => {
            for target in graph.node_indices().filter(|&w| w != v) {
                let mut found = false;
                for path in simple_paths(graph, v, target)? {
                    if is_rainbow_path(&path, coloring)? {
                        found = true;
                        break;
                    }
                }
                if !found {
                    return Ok(false);
                }
            }
            Ok(true)
        }
    }
}

/// Checks whether every vertex of `graph` is rainbow connected under
/// `coloring`, short-circuiting on the first vertex that is not.
///
/// # Example
///
/// ```
/// # use graphinv::rainbow::{is_graph_rainbow_connected, EdgeColoring, RainbowCriterion};
/// # use graphinv::Graph;
/// let graph = Graph::path(3);
/// let coloring: EdgeColoring<&str> = [((0, 1), "red"), ((1, 2), "blue")]
///     .into_iter()
///     .collect();
///
/// assert_eq!(
///     is_graph_rainbow_connected(&graph, &coloring, RainbowCriterion::EveryTarget),
///     Ok(true)
/// );
/// ```
pub fn is_graph_rainbow_connected<C: PartialEq>(
    graph: &Graph,
    coloring: &EdgeColoring<C>,
    criterion: RainbowCriterion,
) -> Result<bool, RainbowError> {
    for v in graph.node_indices() {
        if !is_vertex_rainbow_connected(graph, v, coloring, criterion)? {
            return Ok(false);
        }
    }

    Ok(true)
}
