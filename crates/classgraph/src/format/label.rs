//! Label formatting for class rows
//!
//! Pure functions turning structured members into the text a diagram shows,
//! e.g. `+balance: Currency = 0` or `+deposit(amount: Currency)`.

use crate::model::{ClassNode, Method, Parameter, Property, Visibility};

/// UML glyph for a visibility; unspecified literals pass through unchanged
pub fn visibility_glyph(v: &Visibility) -> &str {
    match v.as_literal() {
        "public" => "+",
        "private" => "-",
        "protected" => "#",
        "package" => "~",
        other => other,
    }
}

/// Some non-empty text, the only case that earns a separator
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// `{glyph}{name}[: type][ = default]`
pub fn property_label(p: &Property) -> String {
    let mut label = format!("{}{}", visibility_glyph(&p.visibility), p.name);
    if let Some(t) = present(&p.type_name) {
        label.push_str(": ");
        label.push_str(t);
    }
    if let Some(d) = present(&p.default) {
        label.push_str(" = ");
        label.push_str(d);
    }
    label
}

/// `(name: type, ...)`, or `()` when empty
pub fn parameter_list(params: &[Parameter]) -> String {
    let joined = params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.type_name))
        .collect::<Vec<_>>()
        .join(", ");
    format!("({})", joined)
}

/// `{glyph}{name}(params)[: type]`
pub fn method_label(m: &Method) -> String {
    let mut label = format!(
        "{}{}{}",
        visibility_glyph(&m.visibility),
        m.name,
        parameter_list(&m.parameters)
    );
    if let Some(t) = present(&m.type_name) {
        label.push_str(": ");
        label.push_str(t);
    }
    label
}

/// All display strings of one class box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLabels {
    pub name: String,
    pub properties: Vec<String>,
    pub methods: Vec<String>,
}

impl ClassLabels {
    pub fn for_node(node: &ClassNode) -> Self {
        Self {
            name: node.name.clone(),
            properties: node.properties.iter().map(property_label).collect(),
            methods: node.methods.iter().map(method_label).collect(),
        }
    }

    /// Every line of the box, header first
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.properties.iter().map(String::as_str))
            .chain(self.methods.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_glyphs() {
        assert_eq!(visibility_glyph(&Visibility::Public), "+");
        assert_eq!(visibility_glyph(&Visibility::Private), "-");
        assert_eq!(visibility_glyph(&Visibility::Protected), "#");
        assert_eq!(visibility_glyph(&Visibility::Package), "~");
        assert_eq!(visibility_glyph(&Visibility::parse("internal")), "internal");
        assert_eq!(visibility_glyph(&Visibility::default()), "");
    }

    #[test]
    fn test_visibility_glyph_for_built_literal() {
        let v = Visibility::Unspecified("public".to_string());
        assert_eq!(visibility_glyph(&v), "+");
        let p = Property::new("owner").with_visibility(v);
        assert_eq!(property_label(&p), "+owner");
    }

    #[test]
    fn test_property_label_full() {
        let p = Property::new("balance")
            .with_type("Currency")
            .with_visibility(Visibility::Public)
            .with_default("0");
        assert_eq!(property_label(&p), "+balance: Currency = 0");
    }

    #[test]
    fn test_property_label_bare() {
        assert_eq!(property_label(&Property::new("owner")), "owner");
        let p = Property::new("owner").with_type("").with_default("");
        assert_eq!(property_label(&p), "owner");
    }

    #[test]
    fn test_property_label_default_without_type() {
        let p = Property::new("count").with_default("1");
        assert_eq!(property_label(&p), "count = 1");
    }

    #[test]
    fn test_parameter_list() {
        assert_eq!(parameter_list(&[]), "()");
        assert_eq!(
            parameter_list(&[Parameter::new("amount", "Currency")]),
            "(amount: Currency)"
        );
        assert_eq!(
            parameter_list(&[Parameter::new("a", "int"), Parameter::new("b", "int")]),
            "(a: int, b: int)"
        );
    }

    #[test]
    fn test_method_label() {
        let m = Method::new("withdraw").with_visibility(Visibility::Public);
        assert_eq!(method_label(&m), "+withdraw()");

        let m = Method::new("getCurrentAge")
            .with_type("int")
            .with_visibility(Visibility::Public);
        assert_eq!(method_label(&m), "+getCurrentAge(): int");

        let m = Method::new("deposit")
            .with_visibility(Visibility::Protected)
            .with_parameter(Parameter::new("amount", "Currency"));
        assert_eq!(method_label(&m), "#deposit(amount: Currency)");
    }

    #[test]
    fn test_class_labels() {
        let node = ClassNode::new(1, "BankAccount")
            .with_property(Property::new("owner").with_type("String"))
            .with_method(Method::new("withdraw"));
        let labels = ClassLabels::for_node(&node);
        assert_eq!(
            labels.lines().collect::<Vec<_>>(),
            vec!["BankAccount", "owner: String", "withdraw()"]
        );
    }
}
