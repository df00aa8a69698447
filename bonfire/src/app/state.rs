//! Application state management

use std::sync::Arc;

use tracing::info;

use crate::app::options::AppOptions;
use crate::errors::BonfireError;
use crate::execution::executor::WorkflowExecutor;
use crate::execution::node_runner::NodeRunnerRegistry;
use crate::filesys::file::File;
use crate::integrations::tester::IntegrationTester;
use crate::models::integration::Integration;
use crate::models::workflow::Workflow;
use crate::store::memory::MemoryStore;
use crate::store::snapshot::Snapshot;
use crate::store::{IntegrationRepository, WorkflowRepository};
use crate::workflows::manager::WorkflowManager;

/// Main application state
pub struct AppState {
    /// Workflow store
    pub workflows: Arc<WorkflowRepository>,

    /// Integration store
    pub integrations: Arc<IntegrationRepository>,

    /// Graph mutation API
    pub manager: Arc<WorkflowManager>,

    /// Sequential executor
    pub executor: Arc<WorkflowExecutor>,

    /// Connectivity tester
    pub tester: Arc<IntegrationTester>,

    snapshot_file: Option<File>,
}

impl AppState {
    /// Initialize application state on fresh in-memory stores
    pub async fn init(options: &AppOptions) -> Result<Self, BonfireError> {
        info!("Initializing application state...");

        let workflows: Arc<WorkflowRepository> = Arc::new(MemoryStore::<Workflow>::new());
        let integrations: Arc<IntegrationRepository> = Arc::new(MemoryStore::<Integration>::new());

        if let Some(file) = &options.snapshot_file {
            if let Some(snapshot) = Snapshot::load(file).await? {
                snapshot.restore(workflows.as_ref(), integrations.as_ref());
            }
        }

        Self::with_stores(workflows, integrations, options)
    }

    /// Build the components on top of the given stores
    pub fn with_stores(
        workflows: Arc<WorkflowRepository>,
        integrations: Arc<IntegrationRepository>,
        options: &AppOptions,
    ) -> Result<Self, BonfireError> {
        let manager = Arc::new(WorkflowManager::new(workflows.clone(), integrations.clone()));
        let executor = Arc::new(WorkflowExecutor::new(
            workflows.clone(),
            NodeRunnerRegistry::default(),
        ));
        let tester = Arc::new(IntegrationTester::new(integrations.clone(), &options.tester)?);

        Ok(Self {
            workflows,
            integrations,
            manager,
            executor,
            tester,
            snapshot_file: options.snapshot_file.clone(),
        })
    }

    /// Shutdown application state, writing a snapshot if configured
    pub async fn shutdown(&self) -> Result<(), BonfireError> {
        info!("Shutting down application state...");
        if let Some(file) = &self.snapshot_file {
            Snapshot::capture(self.workflows.as_ref(), self.integrations.as_ref())
                .save(file)
                .await?;
        }
        Ok(())
    }
}
