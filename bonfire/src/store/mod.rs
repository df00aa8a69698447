//! Keyed entity storage
//!
//! Components take a [`Repository`] rather than reaching for shared global
//! state, so the in-memory store can be swapped for another backend.

pub mod memory;
pub mod snapshot;

use crate::models::integration::Integration;
use crate::models::workflow::Workflow;

/// An entity addressable by a string ID
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

impl Entity for Workflow {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Integration {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Keyed storage. Absence is a normal outcome, never an error.
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert or overwrite by ID
    fn put(&self, entity: T);

    /// Look up an entity by ID
    fn get(&self, id: &str) -> Option<T>;

    /// All entities, in unspecified order
    fn list(&self) -> Vec<T>;

    /// Remove an entity; true if it existed
    fn delete(&self, id: &str) -> bool;
}

pub type WorkflowRepository = dyn Repository<Workflow>;
pub type IntegrationRepository = dyn Repository<Integration>;
