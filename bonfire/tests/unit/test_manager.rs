//! Graph mutation tests

use std::collections::HashSet;
use std::sync::Arc;

use bonfire::models::integration::Integration;
use bonfire::models::workflow::{NewNode, NodeType, Position, Workflow, WorkflowUpdate};
use bonfire::store::memory::MemoryStore;
use bonfire::workflows::manager::WorkflowManager;

fn create_manager() -> WorkflowManager {
    WorkflowManager::new(
        Arc::new(MemoryStore::<Workflow>::new()),
        Arc::new(MemoryStore::<Integration>::new()),
    )
}

#[test]
fn test_node_ids_are_distinct() {
    let manager = create_manager();
    let workflow = manager.create_workflow("Many", None);

    let ids: HashSet<String> = (0..200)
        .map(|i| {
            manager
                .add_node(&workflow.id, NewNode::new(NodeType::Action, format!("step {}", i)))
                .unwrap()
                .id
        })
        .collect();

    assert_eq!(ids.len(), 200);
    assert_eq!(manager.get_workflow(&workflow.id).unwrap().nodes.len(), 200);
}

#[test]
fn test_connect_is_idempotent() {
    let manager = create_manager();
    let workflow = manager.create_workflow("Pair", None);
    let a = manager
        .add_node(&workflow.id, NewNode::new(NodeType::Trigger, "A"))
        .unwrap();
    let b = manager
        .add_node(&workflow.id, NewNode::new(NodeType::Action, "B"))
        .unwrap();

    manager.connect_nodes(&workflow.id, &a.id, &b.id).unwrap();
    let once = manager.get_workflow(&workflow.id).unwrap();

    manager.connect_nodes(&workflow.id, &a.id, &b.id).unwrap();
    let twice = manager.get_workflow(&workflow.id).unwrap();

    assert_eq!(once.nodes[0].connections, vec![b.id.clone()]);
    assert_eq!(twice.nodes[0].connections, once.nodes[0].connections);
    // The repeated connect is a no-op, so the timestamp does not move either
    assert_eq!(twice.updated_at, once.updated_at);
}

#[test]
fn test_update_preserves_identity() {
    let manager = create_manager();
    let workflow = manager.create_workflow("Before", Some("desc".to_string()));

    let updated = manager
        .update_workflow(
            &workflow.id,
            WorkflowUpdate {
                name: Some("After".to_string()),
                active: Some(true),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.id, workflow.id);
    assert_eq!(updated.name, "After");
    assert_eq!(updated.description.as_deref(), Some("desc"));
    assert!(updated.active);
    assert_eq!(updated.created_at, workflow.created_at);
    assert!(updated.updated_at >= workflow.updated_at);
}

#[test]
fn test_update_ignores_id_in_payload() {
    let manager = create_manager();
    let workflow = manager.create_workflow("W", None);

    let update: WorkflowUpdate =
        serde_json::from_value(serde_json::json!({"id": "hijacked", "name": "Renamed"})).unwrap();
    let updated = manager.update_workflow(&workflow.id, update).unwrap();

    assert_eq!(updated.id, workflow.id);
    assert!(manager.get_workflow("hijacked").is_none());
}

#[test]
fn test_delete_returns_true_once() {
    let manager = create_manager();
    let workflow = manager.create_workflow("Doomed", None);

    assert!(manager.delete_workflow(&workflow.id));
    assert!(!manager.delete_workflow(&workflow.id));
    assert!(!manager.delete_workflow(&workflow.id));
    assert!(manager.get_workflow(&workflow.id).is_none());
}

#[test]
fn test_list_workflows() {
    let manager = create_manager();
    manager.create_workflow("One", None);
    manager.create_workflow("Two", None);

    let mut names: Vec<String> = manager.list_workflows().into_iter().map(|w| w.name).collect();
    names.sort();
    assert_eq!(names, vec!["One".to_string(), "Two".to_string()]);
}

#[test]
fn test_node_keeps_layout_and_config() {
    let manager = create_manager();
    let workflow = manager.create_workflow("Layout", None);

    let node = manager
        .add_node(
            &workflow.id,
            NewNode::new(NodeType::Api, "Call")
                .with_config("url", "http://example.test")
                .at(Position::new(3.0, 2.0, 1.0)),
        )
        .unwrap();

    assert_eq!(node.position, Position::new(3.0, 2.0, 1.0));
    assert_eq!(node.config_str("url"), Some("http://example.test"));
    assert!(node.connections.is_empty());
}
