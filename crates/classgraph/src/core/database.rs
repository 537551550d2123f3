//! Core database trait for diagram data storage
//!
//! This trait is the seam a rendering host talks to: it reads nodes and
//! edges back out and pushes structural edits in.

use anyhow::Result;

/// Core trait for diagram databases
///
/// The associated types let each store define its own key, node and edge
/// structures. Iteration order is insertion order.
pub trait Database {
    /// The key type nodes are addressed by
    type Key: Copy + Eq;

    /// The node data type for this database
    type Node: Clone;

    /// The edge data type for this database
    type Edge: Clone;

    /// Add a node to the database
    fn add_node(&mut self, node: Self::Node) -> Result<()>;

    /// Add an edge to the database
    fn add_edge(&mut self, edge: Self::Edge) -> Result<()>;

    /// Get a node by key
    fn get_node(&self, key: Self::Key) -> Option<&Self::Node>;

    /// Iterate over all nodes
    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    /// Iterate over all edges
    fn edges(&self) -> impl Iterator<Item = &Self::Edge>;

    /// Clear all data from the database
    fn clear(&mut self);

    /// Get the number of nodes
    fn node_count(&self) -> usize;

    /// Get the number of edges
    fn edge_count(&self) -> usize;
}
