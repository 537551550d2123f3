//! Class graph model
//!
//! An insertion-ordered registry of class nodes and the relationship links
//! between them. The rendering host reads it back through [`Database`] or the
//! inherent query methods and reports user edits through the mutators.

use anyhow::Result;
use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use super::types::{ClassNode, NodeKey, RelationshipLink};
use crate::core::{Database, GraphError, GraphResult};

/// What to do with links whose endpoints are not (or no longer) in the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkPolicy {
    /// Reject unknown endpoints on insert and prune links of removed nodes
    #[default]
    Strict,
    /// Accept dangling links and leave them for [`ClassGraphModel::dangling_links`]
    Permissive,
}

/// Model configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModelConfig {
    pub link_policy: LinkPolicy,
}

impl ModelConfig {
    pub fn new(link_policy: LinkPolicy) -> Self {
        Self { link_policy }
    }

    pub fn permissive() -> Self {
        Self::new(LinkPolicy::Permissive)
    }
}

/// In-memory class graph
#[derive(Debug, Clone, Default)]
pub struct ClassGraphModel {
    config: ModelConfig,
    nodes: IndexMap<NodeKey, ClassNode>,
    links: Vec<RelationshipLink>,
    /// Highest key ever inserted, kept across removals so keys are never reused
    max_key: Option<NodeKey>,
}

impl ClassGraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ModelConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> ModelConfig {
        self.config
    }

    /// Insert a node, rejecting key collisions and missing names
    pub fn add_node(&mut self, node: ClassNode) -> GraphResult<()> {
        let key = node.key();
        if self.nodes.contains_key(&key) {
            warn!(key, "Rejected node with duplicate key");
            return Err(GraphError::duplicate_key(key));
        }
        node.validate()?;

        self.max_key = Some(self.max_key.map_or(key, |max| max.max(key)));
        debug!(key, name = %node.name, "Added node");
        self.nodes.insert(key, node);
        Ok(())
    }

    /// Insert a node under a freshly generated key, returning that key
    pub fn add_node_with_next_key(&mut self, node: ClassNode) -> GraphResult<NodeKey> {
        let key = self.next_key();
        self.add_node(node.with_key(key))?;
        Ok(key)
    }

    /// Insert a link; under the strict policy both endpoints must exist
    pub fn add_link(&mut self, link: RelationshipLink) -> GraphResult<()> {
        if self.config.link_policy == LinkPolicy::Strict {
            for key in [link.from, link.to] {
                if !self.nodes.contains_key(&key) {
                    warn!(from = link.from, to = link.to, missing = key, "Rejected link");
                    return Err(GraphError::unknown_key(key));
                }
            }
        }
        debug!(from = link.from, to = link.to, kind = %link.kind, "Added link");
        self.links.push(link);
        Ok(())
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &ClassNode> {
        self.nodes.values()
    }

    /// Links in insertion order
    pub fn links(&self) -> &[RelationshipLink] {
        &self.links
    }

    pub fn node(&self, key: NodeKey) -> Option<&ClassNode> {
        self.nodes.get(&key)
    }

    /// Mutable access for in-place edits such as renaming a property
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut ClassNode> {
        self.nodes.get_mut(&key)
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(&key)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// A key no node has ever used: one past the highest key seen
    ///
    /// Starts at 1 for an empty model and only grows, even across removals.
    /// Once `i64::MAX` has been seen there is nothing above it, so the
    /// highest key not currently in the graph is returned instead.
    pub fn next_key(&self) -> NodeKey {
        match self.max_key {
            None => 1,
            Some(max) => max.checked_add(1).unwrap_or_else(|| {
                // finds a free key within node_count() + 1 steps
                (NodeKey::MIN..=max)
                    .rev()
                    .find(|k| !self.nodes.contains_key(k))
                    .unwrap_or(max)
            }),
        }
    }

    /// Remove a node, keeping the order of the remaining nodes
    ///
    /// Under the strict policy links touching the node are removed as well.
    pub fn remove_node(&mut self, key: NodeKey) -> GraphResult<ClassNode> {
        let node = self
            .nodes
            .shift_remove(&key)
            .ok_or_else(|| GraphError::unknown_key(key))?;

        if self.config.link_policy == LinkPolicy::Strict {
            let before = self.links.len();
            self.links.retain(|link| !link.touches(key));
            debug!(key, pruned = before - self.links.len(), "Removed node");
        } else {
            debug!(key, "Removed node, links left in place");
        }
        Ok(node)
    }

    /// Remove the first link equal to `link`; returns whether one was found
    pub fn remove_link(&mut self, link: &RelationshipLink) -> bool {
        match self.links.iter().position(|l| l == link) {
            Some(index) => {
                self.links.remove(index);
                trace!(from = link.from, to = link.to, "Removed link");
                true
            }
            None => false,
        }
    }

    /// Links with `key` at either end
    pub fn links_of(&self, key: NodeKey) -> impl Iterator<Item = &RelationshipLink> {
        self.links.iter().filter(move |link| link.touches(key))
    }

    /// Links with at least one endpoint missing from the graph
    pub fn dangling_links(&self) -> Vec<&RelationshipLink> {
        self.links
            .iter()
            .filter(|link| !self.contains(link.from) || !self.contains(link.to))
            .collect()
    }

    /// Every validity problem currently in the graph
    pub fn validate(&self) -> Vec<GraphError> {
        let mut problems: Vec<GraphError> = self
            .nodes
            .values()
            .filter_map(|node| node.validate().err())
            .collect();

        for link in &self.links {
            for key in [link.from, link.to] {
                if !self.contains(key) {
                    problems.push(GraphError::unknown_key(key));
                }
            }
        }
        problems
    }

    /// Drop all nodes and links; the key counter is not reset
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.links.clear();
    }
}

/// Two models are equal when they hold the same nodes and links in the same order
impl PartialEq for ClassGraphModel {
    fn eq(&self, other: &Self) -> bool {
        self.nodes.values().eq(other.nodes.values()) && self.links == other.links
    }
}

impl Database for ClassGraphModel {
    type Key = NodeKey;
    type Node = ClassNode;
    type Edge = RelationshipLink;

    fn add_node(&mut self, node: Self::Node) -> Result<()> {
        Ok(ClassGraphModel::add_node(self, node)?)
    }

    fn add_edge(&mut self, edge: Self::Edge) -> Result<()> {
        Ok(self.add_link(edge)?)
    }

    fn get_node(&self, key: Self::Key) -> Option<&Self::Node> {
        self.node(key)
    }

    fn nodes(&self) -> impl Iterator<Item = &Self::Node> {
        ClassGraphModel::nodes(self)
    }

    fn edges(&self) -> impl Iterator<Item = &Self::Edge> {
        self.links.iter()
    }

    fn clear(&mut self) {
        ClassGraphModel::clear(self)
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.links.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Property, RelationshipKind};

    fn model_with(keys: &[NodeKey]) -> ClassGraphModel {
        let mut model = ClassGraphModel::new();
        for &key in keys {
            model.add_node(ClassNode::new(key, format!("C{}", key))).unwrap();
        }
        model
    }

    #[test]
    fn test_add_node_preserves_order() {
        let model = model_with(&[60, 1, 11]);
        let keys: Vec<_> = model.nodes().map(|n| n.key()).collect();
        assert_eq!(keys, vec![60, 1, 11]);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut model = model_with(&[1]);
        let err = model.add_node(ClassNode::new(1, "Other")).unwrap_err();
        assert_eq!(err, GraphError::duplicate_key(1));
        assert_eq!(model.node_count(), 1);
        assert_eq!(model.node(1).unwrap().name, "C1");
    }

    #[test]
    fn test_malformed_node_rejected() {
        let mut model = ClassGraphModel::new();
        let node = ClassNode::new(1, "A").with_property(Property::new(""));
        assert!(matches!(
            model.add_node(node),
            Err(GraphError::MalformedRecord { .. })
        ));
        assert_eq!(model.node_count(), 0);
        assert_eq!(model.next_key(), 1);
    }

    #[test]
    fn test_add_link_unknown_endpoint() {
        let mut model = model_with(&[1]);
        let err = model
            .add_link(RelationshipLink::new(1, 2, RelationshipKind::Association))
            .unwrap_err();
        assert_eq!(err, GraphError::unknown_key(2));
        assert_eq!(model.link_count(), 0);
    }

    #[test]
    fn test_next_key() {
        assert_eq!(ClassGraphModel::new().next_key(), 1);
        let model = model_with(&[1, 11, 60]);
        assert_eq!(model.next_key(), 61);
    }

    #[test]
    fn test_next_key_not_reused_after_remove() {
        let mut model = model_with(&[1, 61]);
        model.remove_node(61).unwrap();
        assert_eq!(model.next_key(), 62);
        model.clear();
        assert_eq!(model.next_key(), 62);
    }

    #[test]
    fn test_add_node_with_next_key() {
        let mut model = model_with(&[5]);
        let key = model
            .add_node_with_next_key(ClassNode::new(0, "Person"))
            .unwrap();
        assert_eq!(key, 6);
        assert_eq!(model.node(6).unwrap().name, "Person");
    }

    #[test]
    fn test_next_key_at_max_key() {
        let mut model = model_with(&[1, i64::MAX]);
        let next = model.next_key();
        assert!(!model.contains(next));
        assert_eq!(next, i64::MAX - 1);

        let key = model
            .add_node_with_next_key(ClassNode::new(0, "Person"))
            .unwrap();
        assert_eq!(key, i64::MAX - 1);
        let key = model
            .add_node_with_next_key(ClassNode::new(0, "Person"))
            .unwrap();
        assert_eq!(key, i64::MAX - 2);
        assert_eq!(model.node_count(), 4);
    }

    #[test]
    fn test_remove_node_prunes_links_when_strict() {
        let mut model = model_with(&[1, 2, 3]);
        model
            .add_link(RelationshipLink::new(1, 2, RelationshipKind::Aggregation))
            .unwrap();
        model
            .add_link(RelationshipLink::new(1, 3, RelationshipKind::Aggregation))
            .unwrap();

        let removed = model.remove_node(2).unwrap();
        assert_eq!(removed.key(), 2);
        assert_eq!(model.links(), &[RelationshipLink::new(1, 3, RelationshipKind::Aggregation)]);
        assert!(model.dangling_links().is_empty());
        assert_eq!(model.remove_node(2), Err(GraphError::unknown_key(2)));
    }

    #[test]
    fn test_permissive_keeps_dangling_links() {
        let mut model = ClassGraphModel::with_config(ModelConfig::permissive());
        model.add_node(ClassNode::new(1, "A")).unwrap();
        model
            .add_link(RelationshipLink::new(1, 9, RelationshipKind::Dependency))
            .unwrap();

        assert_eq!(model.dangling_links().len(), 1);
        assert_eq!(model.validate(), vec![GraphError::unknown_key(9)]);

        model.remove_node(1).unwrap();
        assert_eq!(model.link_count(), 1);
        assert_eq!(model.validate().len(), 2);
    }

    #[test]
    fn test_remove_link_and_links_of() {
        let mut model = model_with(&[1, 2, 3]);
        let a = RelationshipLink::new(1, 2, RelationshipKind::Composition);
        let b = RelationshipLink::new(2, 3, RelationshipKind::Generalization);
        model.add_link(a).unwrap();
        model.add_link(b).unwrap();

        assert_eq!(model.links_of(2).count(), 2);
        assert!(model.remove_link(&a));
        assert!(!model.remove_link(&a));
        assert_eq!(model.links_of(2).collect::<Vec<_>>(), vec![&b]);
    }

    #[test]
    fn test_node_mut_edits_in_place() {
        let mut model = model_with(&[1]);
        model
            .node_mut(1)
            .unwrap()
            .properties
            .push(Property::new("owner"));
        model.node_mut(1).unwrap().properties[0].name = "holder".to_string();
        assert_eq!(model.node(1).unwrap().properties[0].name, "holder");
    }

    #[test]
    fn test_database_trait() {
        let mut model = ClassGraphModel::new();
        Database::add_node(&mut model, ClassNode::new(1, "A")).unwrap();
        Database::add_node(&mut model, ClassNode::new(2, "B")).unwrap();
        Database::add_edge(
            &mut model,
            RelationshipLink::new(1, 2, RelationshipKind::Association),
        )
        .unwrap();
        assert!(Database::add_node(&mut model, ClassNode::new(2, "C")).is_err());

        assert_eq!(Database::node_count(&model), 2);
        assert_eq!(Database::edge_count(&model), 1);
        assert_eq!(model.get_node(2).unwrap().name, "B");
        assert_eq!(Database::nodes(&model).count(), 2);

        Database::clear(&mut model);
        assert_eq!(model.edges().count(), 0);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        assert_eq!(model_with(&[1, 2]), model_with(&[1, 2]));
        assert_ne!(model_with(&[1, 2]), model_with(&[2, 1]));
    }
}
