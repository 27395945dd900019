use super::AppResult;
use crate::domain::ProjectsManager;
use crate::ports::{ProjectStore, StoreError};

/// The session facade: owns the project collection and the snapshot store,
/// restoring at startup and saving on exit.
pub struct Tracker {
    manager: ProjectsManager,
    store: Box<dyn ProjectStore>,
}

impl Tracker {
    pub fn new(store: Box<dyn ProjectStore>) -> Self {
        Self {
            manager: ProjectsManager::new(),
            store,
        }
    }

    /// Restore the saved snapshot. All-or-nothing: on any store failure the
    /// in-memory collection is left exactly as it was. A missing snapshot
    /// is not a failure; the session simply starts empty.
    pub fn load(&mut self) -> AppResult<()> {
        match self.store.load() {
            Ok(projects) => {
                tracing::info!("Restored {} projects", projects.len());
                self.manager.set_projects(projects);
                Ok(())
            }
            Err(StoreError::NotFound) => {
                tracing::info!("No saved snapshot, starting with an empty collection");
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to restore snapshot: {e}");
                Err(e.into())
            }
        }
    }

    /// Save the full collection through the store.
    pub fn save(&self) -> AppResult<()> {
        let snapshot = self.manager.projects();
        self.store.save(&snapshot)?;
        tracing::info!("Saved {} projects", snapshot.len());
        Ok(())
    }

    pub fn manager(&self) -> &ProjectsManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut ProjectsManager {
        &mut self.manager
    }
}
