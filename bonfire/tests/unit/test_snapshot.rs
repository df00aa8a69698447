//! Snapshot persistence tests

use std::sync::Arc;

use tempfile::tempdir;

use bonfire::app::options::AppOptions;
use bonfire::app::state::AppState;
use bonfire::filesys::file::File;
use bonfire::models::integration::{
    Integration, IntegrationConfig, IntegrationStatus, McpConfig, NewIntegration,
};
use bonfire::models::workflow::{NewNode, NodeType, Workflow};
use bonfire::store::memory::MemoryStore;
use bonfire::store::snapshot::Snapshot;
use bonfire::store::{IntegrationRepository, WorkflowRepository};

#[tokio::test]
async fn test_missing_snapshot_file() {
    let dir = tempdir().unwrap();
    let file = File::new(dir.path().join("absent.json"));

    assert!(Snapshot::load(&file).await.unwrap().is_none());
}

#[tokio::test]
async fn test_snapshot_survives_restart() {
    let dir = tempdir().unwrap();
    let file = File::new(dir.path().join("state").join("bonfire.json"));
    let options = AppOptions {
        snapshot_file: Some(file.clone()),
        ..Default::default()
    };

    let state = AppState::init(&options).await.unwrap();
    let workflow = state.manager.create_workflow("Persisted", None);
    let node = state
        .manager
        .add_node(&workflow.id, NewNode::new(NodeType::Trigger, "Start"))
        .unwrap();
    let integration = state.manager.create_integration(NewIntegration::new(
        "Claude",
        IntegrationConfig::Mcp(McpConfig {
            api_key: "sk-1".to_string(),
            ..Default::default()
        }),
    ));
    assert!(state.tester.test(&integration.id).await.unwrap());
    state.shutdown().await.unwrap();

    assert!(file.exists().await);

    let restored = AppState::init(&options).await.unwrap();
    let reloaded = restored.manager.get_workflow(&workflow.id).unwrap();
    assert_eq!(reloaded.name, "Persisted");
    assert_eq!(reloaded.nodes[0].id, node.id);
    assert_eq!(reloaded.created_at, workflow.created_at);

    let reloaded = restored.manager.get_integration(&integration.id).unwrap();
    assert_eq!(reloaded.status, IntegrationStatus::Connected);
}

#[tokio::test]
async fn test_capture_is_sorted_and_restores() {
    let dir = tempdir().unwrap();
    let file = File::new(dir.path().join("snapshot.json"));

    let source: Arc<WorkflowRepository> = Arc::new(MemoryStore::<Workflow>::new());
    let source_integrations: Arc<IntegrationRepository> =
        Arc::new(MemoryStore::<Integration>::new());
    let options = AppOptions::default();
    let state = AppState::with_stores(source.clone(), source_integrations.clone(), &options).unwrap();
    for name in ["c", "a", "b"] {
        state.manager.create_workflow(name, None);
    }

    let snapshot = Snapshot::capture(source.as_ref(), source_integrations.as_ref());
    let ids: Vec<&str> = snapshot.workflows.iter().map(|w| w.id.as_str()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);

    snapshot.save(&file).await.unwrap();

    let target = MemoryStore::<Workflow>::new();
    let target_integrations = MemoryStore::<Integration>::new();
    Snapshot::load(&file)
        .await
        .unwrap()
        .unwrap()
        .restore(&target, &target_integrations);

    assert_eq!(target.len(), 3);
    assert!(target_integrations.is_empty());
}

#[tokio::test]
async fn test_corrupt_snapshot_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Snapshot::load(&File::new(path)).await.is_err());
}
