//! Class graph value types
//!
//! Class nodes with their property and method rows, and the typed
//! relationships linking them.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::core::{GraphError, GraphResult};

/// Key identifying a class node within one graph
pub type NodeKey = i64;

/// Convert a host-supplied number into a key
///
/// Fails on NaN, infinities, fractions and values outside the `i64` range.
pub fn key_from_f64(value: f64) -> GraphResult<NodeKey> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if !value.is_finite()
        || value.fract() != 0.0
        || value < i64::MIN as f64
        || value >= i64::MAX as f64
    {
        return Err(GraphError::malformed(format!("invalid node key: {}", value)));
    }
    Ok(value as NodeKey)
}

/// UML access modifier of a property or method
///
/// Two visibilities are equal when they are written as the same literal, so
/// `Unspecified("public")` equals `Public`.
#[derive(Debug, Clone)]
pub enum Visibility {
    Public,    // +
    Private,   // -
    Protected, // #
    Package,   // ~
    /// Any other literal, kept verbatim. Empty when no visibility was given.
    Unspecified(String),
}

impl Visibility {
    /// Parse a visibility literal; unrecognized text is kept as `Unspecified`
    pub fn parse(literal: &str) -> Self {
        match literal {
            "public" => Visibility::Public,
            "private" => Visibility::Private,
            "protected" => Visibility::Protected,
            "package" => Visibility::Package,
            other => Visibility::Unspecified(other.to_string()),
        }
    }

    /// The literal this visibility was (or would be) written as
    pub fn as_literal(&self) -> &str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
            Visibility::Package => "package",
            Visibility::Unspecified(literal) => literal.as_str(),
        }
    }

    /// True when no visibility literal was supplied at all
    pub fn is_absent(&self) -> bool {
        matches!(self, Visibility::Unspecified(literal) if literal.is_empty())
    }
}

impl PartialEq for Visibility {
    fn eq(&self, other: &Self) -> bool {
        self.as_literal() == other.as_literal()
    }
}

impl Eq for Visibility {}

impl Hash for Visibility {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_literal().hash(state);
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Unspecified(String::new())
    }
}

impl From<Option<String>> for Visibility {
    fn from(value: Option<String>) -> Self {
        value.map(|v| Visibility::parse(&v)).unwrap_or_default()
    }
}

/// A named, typed method parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A property (attribute) row of a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub type_name: Option<String>,
    pub visibility: Visibility,
    pub default: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: None,
            visibility: Visibility::default(),
            default: None,
        }
    }

    pub fn with_type(mut self, t: impl Into<String>) -> Self {
        self.type_name = Some(t.into());
        self
    }

    pub fn with_visibility(mut self, v: Visibility) -> Self {
        self.visibility = v;
        self
    }

    pub fn with_default(mut self, d: impl Into<String>) -> Self {
        self.default = Some(d.into());
        self
    }
}

/// A method row of a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    /// Return type
    pub type_name: Option<String>,
    pub visibility: Visibility,
    pub parameters: Vec<Parameter>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: None,
            visibility: Visibility::default(),
            parameters: Vec::new(),
        }
    }

    pub fn with_type(mut self, t: impl Into<String>) -> Self {
        self.type_name = Some(t.into());
        self
    }

    pub fn with_visibility(mut self, v: Visibility) -> Self {
        self.visibility = v;
        self
    }

    pub fn with_parameter(mut self, p: Parameter) -> Self {
        self.parameters.push(p);
        self
    }
}

/// A class box in the diagram
///
/// The key is fixed at construction; everything else may be edited in
/// place through [`ClassGraphModel::node_mut`](super::ClassGraphModel::node_mut).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNode {
    key: NodeKey,
    pub name: String,
    pub properties: Vec<Property>,
    pub methods: Vec<Method>,
}

impl ClassNode {
    pub fn new(key: NodeKey, name: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn key(&self) -> NodeKey {
        self.key
    }

    /// Same node contents under a different key
    pub fn with_key(mut self, key: NodeKey) -> Self {
        self.key = key;
        self
    }

    pub fn with_property(mut self, p: Property) -> Self {
        self.properties.push(p);
        self
    }

    pub fn with_method(mut self, m: Method) -> Self {
        self.methods.push(m);
        self
    }

    /// Check that every required name is present
    pub fn validate(&self) -> GraphResult<()> {
        if self.name.is_empty() {
            return Err(GraphError::malformed(format!(
                "node {} has no name",
                self.key
            )));
        }
        for (i, p) in self.properties.iter().enumerate() {
            if p.name.is_empty() {
                return Err(GraphError::malformed(format!(
                    "node {}: property {} has no name",
                    self.key, i
                )));
            }
        }
        for (i, m) in self.methods.iter().enumerate() {
            if m.name.is_empty() {
                return Err(GraphError::malformed(format!(
                    "node {}: method {} has no name",
                    self.key, i
                )));
            }
            for (j, param) in m.parameters.iter().enumerate() {
                if param.name.is_empty() || param.type_name.is_empty() {
                    return Err(GraphError::malformed(format!(
                        "node {}: method {} parameter {} needs a name and a type",
                        self.key, m.name, j
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Relationship type between classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    Association,
    Realization,
    Dependency,
    Composition,
    Aggregation,
    /// The default tree link (inheritance)
    Generalization,
}

impl RelationshipKind {
    pub fn all() -> &'static [RelationshipKind] {
        &[
            RelationshipKind::Association,
            RelationshipKind::Realization,
            RelationshipKind::Dependency,
            RelationshipKind::Composition,
            RelationshipKind::Aggregation,
            RelationshipKind::Generalization,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipKind::Association => "Association",
            RelationshipKind::Realization => "Realization",
            RelationshipKind::Dependency => "Dependency",
            RelationshipKind::Composition => "Composition",
            RelationshipKind::Aggregation => "Aggregation",
            RelationshipKind::Generalization => "Generalization",
        }
    }

    /// Only generalization links drive the tree layout
    pub fn is_tree_link(self) -> bool {
        self == RelationshipKind::Generalization
    }

    /// Line and arrowhead styling for this kind of link
    pub fn style(self) -> LinkStyle {
        use ArrowHead::*;
        match self {
            RelationshipKind::Generalization => LinkStyle::new(false, None, Some(Triangle)),
            RelationshipKind::Association => LinkStyle::new(false, None, None),
            RelationshipKind::Realization => LinkStyle::new(true, None, Some(Triangle)),
            RelationshipKind::Dependency => LinkStyle::new(true, None, Some(OpenTriangle)),
            RelationshipKind::Composition => {
                LinkStyle::new(false, Some(Diamond), Some(OpenTriangle))
            }
            RelationshipKind::Aggregation => {
                LinkStyle::new(false, Some(HollowDiamond), Some(OpenTriangle))
            }
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationshipKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationshipKind::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| GraphError::malformed(format!("unknown relationship kind: {}", s)))
    }
}

/// Arrowhead shapes used at link ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowHead {
    /// Hollow closed triangle
    Triangle,
    /// Open (line-only) triangle
    OpenTriangle,
    /// Filled diamond
    Diamond,
    HollowDiamond,
}

/// How a relationship kind is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkStyle {
    pub dashed: bool,
    pub from_arrow: Option<ArrowHead>,
    pub to_arrow: Option<ArrowHead>,
}

impl LinkStyle {
    const fn new(dashed: bool, from_arrow: Option<ArrowHead>, to_arrow: Option<ArrowHead>) -> Self {
        Self {
            dashed,
            from_arrow,
            to_arrow,
        }
    }
}

/// A typed link between two class nodes, referenced by key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelationshipLink {
    pub from: NodeKey,
    pub to: NodeKey,
    pub kind: RelationshipKind,
}

impl RelationshipLink {
    pub fn new(from: NodeKey, to: NodeKey, kind: RelationshipKind) -> Self {
        Self { from, to, kind }
    }

    /// True if either end refers to `key`
    pub fn touches(&self, key: NodeKey) -> bool {
        self.from == key || self.to == key
    }
}
