//! Bulk-load record form
//!
//! The serializable shape of a class graph, matching the node/link data
//! arrays a browser diagram model is fed with:
//!
//! ```json
//! {
//!   "nodeDataArray": [{ "key": 1, "name": "BankAccount", "properties": [...], "methods": [...] }],
//!   "linkDataArray": [{ "from": 1, "to": 11, "relationship": "Aggregation" }]
//! }
//! ```
//!
//! Loading never stops at the first bad record: every node and link record is
//! tried and the outcome collected in a [`LoadReport`].

use std::fmt;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, span, warn, Level};

use super::graph::{ClassGraphModel, ModelConfig};
use super::types::{
    ClassNode, Method, NodeKey, Parameter, Property, RelationshipKind, RelationshipLink,
    Visibility,
};
use crate::core::{GraphError, GraphResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<NodeKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodRecord>,
}

/// A link record; a missing `relationship` is the default tree link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NodeKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NodeKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

/// All records of one graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphRecords {
    #[serde(rename = "nodeDataArray", default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(rename = "linkDataArray", default)]
    pub links: Vec<LinkRecord>,
}

impl GraphRecords {
    /// Parse records from JSON text
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).context("Failed to parse class graph records")
    }

    /// Serialize records as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize class graph records")
    }
}

fn required(value: &Option<String>, what: impl FnOnce() -> String) -> GraphResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.clone()),
        _ => Err(GraphError::malformed(format!("{} is missing", what()))),
    }
}

impl TryFrom<&NodeRecord> for ClassNode {
    type Error = GraphError;

    fn try_from(record: &NodeRecord) -> GraphResult<Self> {
        let key = record
            .key
            .ok_or_else(|| GraphError::malformed("node key is missing"))?;
        let mut node = ClassNode::new(key, required(&record.name, || format!("node {} name", key))?);

        for (i, p) in record.properties.iter().enumerate() {
            node.properties.push(Property {
                name: required(&p.name, || format!("node {} property {} name", key, i))?,
                type_name: p.type_name.clone(),
                visibility: Visibility::from(p.visibility.clone()),
                default: p.default.clone(),
            });
        }

        for (i, m) in record.methods.iter().enumerate() {
            let name = required(&m.name, || format!("node {} method {} name", key, i))?;
            let parameters = m
                .parameters
                .iter()
                .enumerate()
                .map(|(j, param)| -> GraphResult<Parameter> {
                    Ok(Parameter::new(
                        required(&param.name, || format!("node {} method {} parameter {} name", key, name, j))?,
                        required(&param.type_name, || format!("node {} method {} parameter {} type", key, name, j))?,
                    ))
                })
                .collect::<GraphResult<Vec<_>>>()?;
            node.methods.push(Method {
                name,
                type_name: m.type_name.clone(),
                visibility: Visibility::from(m.visibility.clone()),
                parameters,
            });
        }

        Ok(node)
    }
}

fn visibility_record(v: &Visibility) -> Option<String> {
    (!v.is_absent()).then(|| v.as_literal().to_string())
}

impl From<&ClassNode> for NodeRecord {
    fn from(node: &ClassNode) -> Self {
        Self {
            key: Some(node.key()),
            name: Some(node.name.clone()),
            properties: node
                .properties
                .iter()
                .map(|p| PropertyRecord {
                    name: Some(p.name.clone()),
                    type_name: p.type_name.clone(),
                    visibility: visibility_record(&p.visibility),
                    default: p.default.clone(),
                })
                .collect(),
            methods: node
                .methods
                .iter()
                .map(|m| MethodRecord {
                    name: Some(m.name.clone()),
                    type_name: m.type_name.clone(),
                    visibility: visibility_record(&m.visibility),
                    parameters: m
                        .parameters
                        .iter()
                        .map(|param| ParameterRecord {
                            name: Some(param.name.clone()),
                            type_name: Some(param.type_name.clone()),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl TryFrom<&LinkRecord> for RelationshipLink {
    type Error = GraphError;

    fn try_from(record: &LinkRecord) -> GraphResult<Self> {
        let from = record
            .from
            .ok_or_else(|| GraphError::malformed("link source key is missing"))?;
        let to = record
            .to
            .ok_or_else(|| GraphError::malformed("link target key is missing"))?;
        let kind = match &record.relationship {
            Some(name) => name.parse()?,
            None => RelationshipKind::Generalization,
        };
        Ok(RelationshipLink::new(from, to, kind))
    }
}

impl From<&RelationshipLink> for LinkRecord {
    fn from(link: &RelationshipLink) -> Self {
        Self {
            from: Some(link.from),
            to: Some(link.to),
            relationship: (!link.kind.is_tree_link()).then(|| link.kind.as_str().to_string()),
        }
    }
}

/// Which array a rejected record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Node,
    Link,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Node => f.write_str("node"),
            RecordKind::Link => f.write_str("link"),
        }
    }
}

/// A record that could not be loaded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} record {index}: {error}")]
pub struct RecordError {
    pub kind: RecordKind,
    /// Position in the node or link array
    pub index: usize,
    pub error: GraphError,
}

/// Outcome of a bulk load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub accepted_nodes: Vec<NodeKey>,
    pub accepted_links: Vec<RelationshipLink>,
    pub errors: Vec<RecordError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

impl ClassGraphModel {
    /// Build a strict model from records
    pub fn load(records: &GraphRecords) -> (Self, LoadReport) {
        Self::load_with_config(records, ModelConfig::default())
    }

    pub fn load_with_config(records: &GraphRecords, config: ModelConfig) -> (Self, LoadReport) {
        let mut model = Self::with_config(config);
        let report = model.extend(records);
        (model, report)
    }

    /// Add every record to this model, nodes first so links may point forward
    pub fn extend(&mut self, records: &GraphRecords) -> LoadReport {
        let load_span = span!(
            Level::INFO,
            "load_records",
            nodes = records.nodes.len(),
            links = records.links.len()
        );
        let _enter = load_span.enter();

        let mut report = LoadReport::default();

        for (index, record) in records.nodes.iter().enumerate() {
            let outcome = ClassNode::try_from(record).and_then(|node| {
                let key = node.key();
                self.add_node(node).map(|_| key)
            });
            match outcome {
                Ok(key) => report.accepted_nodes.push(key),
                Err(error) => {
                    warn!(index, %error, "Skipped node record");
                    report.errors.push(RecordError {
                        kind: RecordKind::Node,
                        index,
                        error,
                    });
                }
            }
        }

        for (index, record) in records.links.iter().enumerate() {
            let outcome = RelationshipLink::try_from(record)
                .and_then(|link| self.add_link(link).map(|_| link));
            match outcome {
                Ok(link) => report.accepted_links.push(link),
                Err(error) => {
                    warn!(index, %error, "Skipped link record");
                    report.errors.push(RecordError {
                        kind: RecordKind::Link,
                        index,
                        error,
                    });
                }
            }
        }

        info!(
            nodes = report.accepted_nodes.len(),
            links = report.accepted_links.len(),
            errors = report.errors.len(),
            "Loaded records"
        );
        report
    }

    /// The record form of this model, in insertion order
    pub fn to_records(&self) -> GraphRecords {
        GraphRecords {
            nodes: self.nodes().map(NodeRecord::from).collect(),
            links: self.links().iter().map(LinkRecord::from).collect(),
        }
    }
}
