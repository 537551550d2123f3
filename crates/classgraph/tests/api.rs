//! Integration tests for the public API

use classgraph::prelude::*;
use classgraph::{actions, load_json, sample, RecordKind};

#[test]
fn test_sample_labels() {
    let (model, report) = ClassGraphModel::load(&sample::sample_records());
    assert!(report.is_clean());

    let account = ClassLabels::for_node(model.node(1).unwrap());
    assert_eq!(account.name, "BankAccount");
    assert_eq!(
        account.properties,
        vec!["+owner: String", "+balance: Currency = 0"]
    );
    assert_eq!(account.methods, vec!["+deposit(amount: Currency)", "withdraw()"]);

    let test = ClassLabels::for_node(model.node(60).unwrap());
    assert_eq!(test.properties[1], "#Date De Naissance: Date");
    assert!(test.methods.is_empty());

    let person = ClassLabels::for_node(model.node(10).unwrap());
    assert_eq!(person.methods, vec!["+getCurrentAge(): int"]);
}

#[test]
fn test_spec_examples() {
    let balance = Property::new("balance")
        .with_type("Currency")
        .with_visibility(Visibility::Public)
        .with_default("0");
    assert_eq!(property_label(&balance), "+balance: Currency = 0");

    let withdraw = Method::new("withdraw").with_visibility(Visibility::Public);
    assert_eq!(method_label(&withdraw), "+withdraw()");

    assert_eq!(
        parameter_list(&[Parameter::new("amount", "Currency")]),
        "(amount: Currency)"
    );
    assert_eq!(parameter_list(&[]), "()");
}

#[test]
fn test_next_key_after_sample_keys() {
    let mut model = ClassGraphModel::new();
    for key in [1, 11, 60] {
        model.add_node(ClassNode::new(key, "C")).unwrap();
    }
    assert_eq!(model.next_key(), 61);
}

#[test]
fn test_add_person_action_round_trips() {
    let (mut model, _) = ClassGraphModel::load(&sample::sample_records());
    let key = actions::add_person(&mut model).unwrap();

    let json = model.to_records().to_json().unwrap();
    let (reloaded, report) = load_json(&json).unwrap();
    assert!(report.is_clean());
    assert_eq!(reloaded, model);
    assert_eq!(reloaded.node(key).unwrap().name, "Person");
}

#[test]
fn test_bulk_load_reports_every_failure() {
    let json = r#"{
        "nodeDataArray": [
            { "key": 1, "name": "A" },
            { "key": 2, "name": "B", "properties": [{ "type": "int" }] },
            { "key": 1, "name": "C" },
            { "key": 3, "name": "D", "methods": [{ "name": "run", "parameters": [{ "name": "x" }] }] }
        ],
        "linkDataArray": [
            { "from": 1, "to": 2 },
            { "from": 1, "relationship": "Association" },
            { "from": 1, "to": 1, "relationship": "Association" }
        ]
    }"#;
    let (model, report) = load_json(json).unwrap();

    assert_eq!(report.accepted_nodes, vec![1]);
    assert_eq!(report.accepted_links.len(), 1);
    let kinds: Vec<_> = report.errors.iter().map(|e| (e.kind, e.index)).collect();
    assert_eq!(
        kinds,
        vec![
            (RecordKind::Node, 1),
            (RecordKind::Node, 2),
            (RecordKind::Node, 3),
            (RecordKind::Link, 0),
            (RecordKind::Link, 1),
        ]
    );
    assert_eq!(report.errors[3].error, GraphError::unknown_key(2));
    assert_eq!(model.node_count(), 1);
}

#[test]
fn test_permissive_load_flags_dangling_links() {
    let json = r#"{
        "nodeDataArray": [{ "key": 1, "name": "A" }],
        "linkDataArray": [{ "from": 1, "to": 2, "relationship": "Realization" }]
    }"#;
    let (model, report) =
        classgraph::load_json_with_config(json, ModelConfig::permissive()).unwrap();
    assert!(report.is_clean());
    assert_eq!(model.dangling_links().len(), 1);
    assert_eq!(model.validate(), vec![GraphError::unknown_key(2)]);
}

#[test]
fn test_preview_of_sample() {
    let (model, _) = ClassGraphModel::load(&sample::sample_records());
    let text = TextPreview::new().render(&model);
    assert!(text.contains("BankAccount"));
    assert!(text.contains("+balance: Currency = 0"));
    assert!(text.contains("BankAccount(1) ◇──> Test(60)  [Aggregation]"));
}
