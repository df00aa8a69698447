//! Server state

use std::sync::Arc;
use std::time::Instant;

use crate::app::state::AppState;
use crate::execution::executor::WorkflowExecutor;
use crate::integrations::tester::IntegrationTester;
use crate::workflows::manager::WorkflowManager;

/// Server state shared across handlers
pub struct ServerState {
    pub manager: Arc<WorkflowManager>,
    pub executor: Arc<WorkflowExecutor>,
    pub tester: Arc<IntegrationTester>,
    pub started_at: Instant,
}

impl ServerState {
    pub fn new(
        manager: Arc<WorkflowManager>,
        executor: Arc<WorkflowExecutor>,
        tester: Arc<IntegrationTester>,
    ) -> Self {
        Self {
            manager,
            executor,
            tester,
            started_at: Instant::now(),
        }
    }
}

impl From<&AppState> for ServerState {
    fn from(state: &AppState) -> Self {
        Self::new(
            state.manager.clone(),
            state.executor.clone(),
            state.tester.clone(),
        )
    }
}
