//! Graph invariants over a compact undirected simple graph.
//!
//! The crate provides a minimal [`Graph`] type and a collection of
//! independent, pure invariant computations on top of it: degree
//! statistics, disparity measures, the Havel-Hakimi residue, zero forcing
//! and domination numbers, structural freeness predicates, simple-path
//! enumeration, and rainbow connectivity.
//!
//! Several of the searches (minimum forcing and dominating sets, path
//! enumeration) are brute force by nature and intended for small graphs;
//! none of them has a built-in cutoff, so callers bound the input instead.
//!
//! # Example
//!
//! ```
//! use graphinv::rainbow::{is_graph_rainbow_connected, EdgeColoring, RainbowCriterion};
//! use graphinv::Graph;
//!
//! let graph = Graph::path(3);
//! let coloring: EdgeColoring<&str> = [((0, 1), "red"), ((1, 2), "blue")]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(
//!     is_graph_rainbow_connected(&graph, &coloring, RainbowCriterion::EveryTarget),
//!     Ok(true)
//! );
//! ```

pub mod degree;
pub mod disparity;
pub mod domination;
pub mod forcing;
pub mod graph;
pub mod neighborhood;
pub mod paths;
pub mod rainbow;
pub mod residue;
pub mod structural;

pub use crate::graph::{EdgeIndex, Graph, GraphError, NodeIndex};
pub use crate::paths::{connecting_paths, simple_paths, NodeNotFound, Path};
pub use crate::rainbow::{
    is_graph_rainbow_connected, is_rainbow_path, is_vertex_rainbow_connected, EdgeColoring,
    MissingColor, RainbowCriterion, RainbowError,
};
