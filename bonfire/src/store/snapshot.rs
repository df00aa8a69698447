//! JSON snapshots of the stores

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::BonfireError;
use crate::filesys::file::File;
use crate::models::integration::Integration;
use crate::models::workflow::Workflow;
use crate::store::{IntegrationRepository, WorkflowRepository};

/// Point-in-time copy of every stored workflow and integration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub workflows: Vec<Workflow>,

    #[serde(default)]
    pub integrations: Vec<Integration>,
}

impl Snapshot {
    /// Copy the current contents of both stores
    pub fn capture(workflows: &WorkflowRepository, integrations: &IntegrationRepository) -> Self {
        let mut snapshot = Self {
            workflows: workflows.list(),
            integrations: integrations.list(),
        };
        // Stable output across saves
        snapshot.workflows.sort_by(|a, b| a.id.cmp(&b.id));
        snapshot.integrations.sort_by(|a, b| a.id.cmp(&b.id));
        snapshot
    }

    /// Put every entity back into the stores, overwriting on ID clashes
    pub fn restore(self, workflows: &WorkflowRepository, integrations: &IntegrationRepository) {
        debug!(
            "Restoring {} workflows and {} integrations",
            self.workflows.len(),
            self.integrations.len()
        );
        for workflow in self.workflows {
            workflows.put(workflow);
        }
        for integration in self.integrations {
            integrations.put(integration);
        }
    }

    /// Load a snapshot; `None` if the file does not exist yet
    pub async fn load(file: &File) -> Result<Option<Self>, BonfireError> {
        if !file.exists().await {
            return Ok(None);
        }
        let snapshot: Snapshot = file.read_json().await?;
        info!("Loaded snapshot from {}", file.path().display());
        Ok(Some(snapshot))
    }

    /// Write the snapshot as pretty JSON
    pub async fn save(&self, file: &File) -> Result<(), BonfireError> {
        file.write_json(self).await?;
        info!(
            "Saved snapshot ({} workflows, {} integrations) to {}",
            self.workflows.len(),
            self.integrations.len(),
            file.path().display()
        );
        Ok(())
    }
}
