//! User actions a diagram page triggers
//!
//! Handlers take the model they act on explicitly; there is no shared
//! "current diagram".

use tracing::info;

use super::graph::ClassGraphModel;
use super::sample::person_node;
use super::types::NodeKey;
use crate::core::GraphResult;

/// Add the stock "Person" class under a fresh key
pub fn add_person(model: &mut ClassGraphModel) -> GraphResult<NodeKey> {
    let key = model.add_node_with_next_key(person_node(0))?;
    info!(key, "Added Person node");
    Ok(key)
}
