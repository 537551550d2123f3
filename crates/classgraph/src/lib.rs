//! Classgraph - UML class graph model for diagram hosts
//!
//! Holds class nodes (with property and method rows) and typed relationship
//! links, and formats the text a class diagram shows for them. Layout and
//! drawing belong to whichever host displays the diagram.
//!
//! # Quick Start
//!
//! ```rust
//! use classgraph::prelude::*;
//!
//! let mut model = ClassGraphModel::new();
//! model
//!     .add_node(
//!         ClassNode::new(1, "BankAccount").with_property(
//!             Property::new("balance")
//!                 .with_type("Currency")
//!                 .with_visibility(Visibility::Public)
//!                 .with_default("0"),
//!         ),
//!     )
//!     .unwrap();
//! model.add_node(ClassNode::new(11, "Person")).unwrap();
//! model
//!     .add_link(RelationshipLink::new(1, 11, RelationshipKind::Aggregation))
//!     .unwrap();
//!
//! let account = model.node(1).unwrap();
//! assert_eq!(property_label(&account.properties[0]), "+balance: Currency = 0");
//! assert_eq!(model.next_key(), 12);
//! ```
//!
//! # Bulk Loading
//!
//! ```rust
//! use classgraph::load_json;
//!
//! let json = r#"{
//!     "nodeDataArray": [{ "key": 1, "name": "A" }, { "key": 1, "name": "B" }],
//!     "linkDataArray": [{ "from": 1, "to": 2, "relationship": "Dependency" }]
//! }"#;
//! let (model, report) = load_json(json).unwrap();
//! assert_eq!(model.node_count(), 1);
//! assert_eq!(report.errors.len(), 2);
//! ```

pub mod core;
pub mod format;
pub mod model;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::*;
pub use crate::format::*;
pub use crate::model::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{Database, GraphError, GraphResult};
    pub use crate::format::{
        method_label, parameter_list, property_label, visibility_glyph, ClassLabels,
        PreviewStyle, TextPreview,
    };
    pub use crate::model::{
        ClassGraphModel, ClassNode, GraphRecords, LinkPolicy, LoadReport, Method, ModelConfig,
        NodeKey, Parameter, Property, RelationshipKind, RelationshipLink, Visibility,
    };
}

/// Load a strict model from JSON records
///
/// Fails only if the text is not valid record JSON; per-record problems are
/// returned in the [`LoadReport`].
pub fn load_json(input: &str) -> anyhow::Result<(ClassGraphModel, LoadReport)> {
    load_json_with_config(input, ModelConfig::default())
}

/// Load JSON records under the given model configuration
pub fn load_json_with_config(
    input: &str,
    config: ModelConfig,
) -> anyhow::Result<(ClassGraphModel, LoadReport)> {
    let records = GraphRecords::from_json(input)?;
    Ok(ClassGraphModel::load_with_config(&records, config))
}

/// Render JSON records as a text preview
///
/// # Example
/// ```rust
/// use classgraph::{preview_json, PreviewStyle};
///
/// let text = preview_json(r#"{"nodeDataArray": [{"key": 1, "name": "Person"}]}"#, PreviewStyle::Ascii).unwrap();
/// assert!(text.contains("| Person |"));
/// ```
pub fn preview_json(input: &str, style: PreviewStyle) -> anyhow::Result<String> {
    let (model, _) = load_json_with_config(input, ModelConfig::permissive())?;
    Ok(TextPreview::with_style(style).render(&model))
}
