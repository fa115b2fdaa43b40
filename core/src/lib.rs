//! arcgraph-core: In-memory weighted directed graph engine.
//!
//! A pure Rust library that maintains per-vertex adjacency lists of
//! non-negatively weighted arcs and answers single-pair shortest-path
//! queries and directed-cycle checks. No I/O and no global state — this
//! crate compiles standalone.
//!
//! The shortest-path engine runs one Dijkstra relaxation loop behind a
//! pluggable frontier: callers pick a [`Strategy`] (binary heap, ordered
//! set, or linear scan) to trade extraction cost against simplicity, and
//! all three report identical distances. The `arcgraph-bench` binary
//! compares them on synthetic topologies.

mod cycle;
mod dijkstra;
mod graph;

pub use cycle::is_cyclic;
pub use dijkstra::{shortest_path, Distance, PathResult, Strategy};
pub use graph::{Arc, Graph, GraphError, VertexId, Weight};
