//! Startup data for the demo diagram

use super::records::{GraphRecords, LinkRecord, MethodRecord, NodeRecord, ParameterRecord, PropertyRecord};
use super::types::{ClassNode, Method, NodeKey, Visibility};

fn property(name: &str, type_name: &str, visibility: &str) -> PropertyRecord {
    PropertyRecord {
        name: Some(name.to_string()),
        type_name: Some(type_name.to_string()),
        visibility: Some(visibility.to_string()),
        default: None,
    }
}

fn get_current_age() -> MethodRecord {
    MethodRecord {
        name: Some("getCurrentAge".to_string()),
        type_name: Some("int".to_string()),
        visibility: Some("public".to_string()),
        parameters: Vec::new(),
    }
}

/// The four classes and two aggregation links the demo page opens with
pub fn sample_records() -> GraphRecords {
    let bank_account = NodeRecord {
        key: Some(1),
        name: Some("BankAccount".to_string()),
        properties: vec![
            property("owner", "String", "public"),
            PropertyRecord {
                default: Some("0".to_string()),
                ..property("balance", "Currency", "public")
            },
        ],
        methods: vec![
            MethodRecord {
                name: Some("deposit".to_string()),
                type_name: None,
                visibility: Some("public".to_string()),
                parameters: vec![ParameterRecord {
                    name: Some("amount".to_string()),
                    type_name: Some("Currency".to_string()),
                }],
            },
            MethodRecord {
                name: Some("withdraw".to_string()),
                ..Default::default()
            },
        ],
    };

    let person = NodeRecord {
        key: Some(11),
        name: Some("Person".to_string()),
        properties: vec![
            property("name", "String", "public"),
            property("birth", "Date", "protected"),
        ],
        methods: vec![get_current_age()],
    };

    let test = NodeRecord {
        key: Some(60),
        name: Some("Test".to_string()),
        properties: vec![
            property("name", "String", "public"),
            property("Date De Naissance", "Date", "protected"),
        ],
        methods: Vec::new(),
    };

    let second_person = NodeRecord {
        key: Some(10),
        name: Some("Person".to_string()),
        properties: Vec::new(),
        methods: vec![get_current_age()],
    };

    let aggregation = |to| LinkRecord {
        from: Some(1),
        to: Some(to),
        relationship: Some("Aggregation".to_string()),
    };

    GraphRecords {
        nodes: vec![bank_account, person, test, second_person],
        links: vec![aggregation(11), aggregation(60)],
    }
}

/// The class the "add node" button drops into the diagram
pub fn person_node(key: NodeKey) -> ClassNode {
    ClassNode::new(key, "Person").with_method(
        Method::new("getCurrentAge")
            .with_type("int")
            .with_visibility(Visibility::Public),
    )
}
