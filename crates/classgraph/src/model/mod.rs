//! Class graph model
//!
//! Value types, the graph registry, its record form, and the canned data
//! and actions a diagram page starts from.

pub mod actions;
mod graph;
mod records;
pub mod sample;
mod types;

pub use graph::{ClassGraphModel, LinkPolicy, ModelConfig};
pub use records::{
    GraphRecords, LinkRecord, LoadReport, MethodRecord, NodeRecord, ParameterRecord,
    PropertyRecord, RecordError, RecordKind,
};
pub use types::{
    key_from_f64, ArrowHead, ClassNode, LinkStyle, Method, NodeKey, Parameter, Property,
    RelationshipKind, RelationshipLink, Visibility,
};
