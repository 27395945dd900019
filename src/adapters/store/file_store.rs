use crate::domain::Project;
use crate::ports::{ProjectStore, StoreError, StoreResult};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Stores the whole project collection as pretty-printed JSON in a single
/// file under the platform data directory.
pub struct FileProjectStore {
    data_path: PathBuf,
}

impl FileProjectStore {
    pub fn new() -> StoreResult<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| StoreError::Read("Cannot determine data directory".to_string()))?;

        let app_data_dir = data_dir.join("tracker-cli");
        Ok(Self {
            data_path: app_data_dir.join("projects.json"),
        })
    }

    pub fn with_path(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    fn ensure_data_dir(&self) -> StoreResult<()> {
        if let Some(parent) = self.data_path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Write(e.to_string()))?;
        }
        Ok(())
    }
}

impl ProjectStore for FileProjectStore {
    fn load(&self) -> StoreResult<Vec<Project>> {
        let content = match fs::read_to_string(&self.data_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StoreError::NotFound),
            Err(e) => return Err(StoreError::Read(e.to_string())),
        };

        let projects: Vec<Project> =
            serde_json::from_str(&content).map_err(|e| StoreError::InvalidFormat(e.to_string()))?;

        tracing::debug!(
            "Loaded {} projects from {}",
            projects.len(),
            self.data_path.display()
        );
        Ok(projects)
    }

    fn save(&self, projects: &[Project]) -> StoreResult<()> {
        self.ensure_data_dir()?;

        let content =
            serde_json::to_string_pretty(projects).map_err(|e| StoreError::Write(e.to_string()))?;
        fs::write(&self.data_path, content).map_err(|e| StoreError::Write(e.to_string()))?;

        tracing::debug!(
            "Saved {} projects to {}",
            projects.len(),
            self.data_path.display()
        );
        Ok(())
    }
}
