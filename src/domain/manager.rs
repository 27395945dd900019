use super::error::{DomainError, DomainResult};
use super::project::{Project, ProjectId};

/// Owns every project in the session and hands out their IDs.
///
/// Titles are unique (case-sensitive) at every point in time. IDs are
/// assigned sequentially from 1 and are never reused while the manager
/// lives, with the one exception documented on [`Self::set_projects`].
#[derive(Debug)]
pub struct ProjectsManager {
    projects: Vec<Project>,
    next_project_id: u32,
}

impl Default for ProjectsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectsManager {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            next_project_id: 1,
        }
    }

    pub fn is_title_unique(&self, title: &str) -> bool {
        !self.projects.iter().any(|p| p.title() == title)
    }

    /// Create a project with the next sequential ID. Fails when the title
    /// is already taken; the collection and counter are unchanged then.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> DomainResult<&Project> {
        let title = title.into();
        if !self.is_title_unique(&title) {
            return Err(DomainError::DuplicateTitle(title));
        }
        let project = Project::new(title, description.into(), ProjectId(self.next_project_id));
        self.next_project_id += 1;
        self.projects.push(project);
        Ok(self.projects.last().expect("project was just pushed"))
    }

    /// Remove a project by equality. A no-op returning false when absent.
    pub fn remove_project(&mut self, project: &Project) -> bool {
        match self.projects.iter().position(|p| p == project) {
            Some(idx) => {
                self.projects.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn project_by_id(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id() == id)
    }

    pub fn project_by_id_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id() == id)
    }

    /// Every project whose title contains `title`, case-sensitive, in
    /// collection order.
    pub fn find_projects(&self, title: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.title().contains(title))
            .collect()
    }

    /// A defensive copy of the whole collection; mutating it never touches
    /// manager state. This is the snapshot the persistence layer consumes.
    pub fn projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Replace the whole collection, as the persistence layer does on
    /// restore. The ID counter restarts at `len + 1`, so a snapshot whose
    /// projects carry higher IDs can collide with projects added later in
    /// the same session.
    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        self.next_project_id = self.projects.len() as u32 + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_project_assigns_sequential_ids() {
        let mut manager = ProjectsManager::new();
        let first = manager.add_project("Website", "").unwrap().id();
        let second = manager.add_project("Backend", "").unwrap().id();
        assert_eq!(first, ProjectId(1));
        assert_eq!(second, ProjectId(2));
    }

    #[test]
    fn duplicate_title_is_rejected_and_nothing_changes() {
        let mut manager = ProjectsManager::new();
        manager.add_project("Website", "first").unwrap();

        let err = manager.add_project("Website", "second").unwrap_err();
        assert_eq!(err, DomainError::DuplicateTitle("Website".to_string()));
        assert_eq!(manager.projects().len(), 1);

        // The counter did not advance on the failed attempt.
        assert_eq!(manager.add_project("Backend", "").unwrap().id(), ProjectId(2));
    }

    #[test]
    fn title_uniqueness_is_case_sensitive() {
        let mut manager = ProjectsManager::new();
        manager.add_project("Website", "").unwrap();
        assert!(manager.is_title_unique("website"));
        assert!(!manager.is_title_unique("Website"));
    }

    #[test]
    fn project_ids_are_not_reused_after_removal() {
        let mut manager = ProjectsManager::new();
        manager.add_project("Website", "").unwrap();
        let second = manager.add_project("Backend", "").unwrap().clone();

        assert!(manager.remove_project(&second));
        assert_eq!(manager.add_project("Mobile", "").unwrap().id(), ProjectId(3));
    }

    #[test]
    fn remove_project_is_a_no_op_when_absent() {
        let mut manager = ProjectsManager::new();
        let project = manager.add_project("Website", "").unwrap().clone();
        assert!(manager.remove_project(&project));
        assert!(!manager.remove_project(&project));
    }

    #[test]
    fn find_projects_matches_substrings_in_collection_order() {
        let mut manager = ProjectsManager::new();
        manager.add_project("Website relaunch", "").unwrap();
        manager.add_project("Backend", "").unwrap();
        manager.add_project("Internal site", "").unwrap();

        let titles: Vec<&str> = manager
            .find_projects("site")
            .into_iter()
            .map(Project::title)
            .collect();
        assert_eq!(titles, vec!["Internal site"]);

        let titles: Vec<&str> = manager
            .find_projects("e")
            .into_iter()
            .map(Project::title)
            .collect();
        assert_eq!(titles, vec!["Website relaunch", "Backend", "Internal site"]);
    }

    #[test]
    fn projects_returns_a_defensive_copy() {
        let mut manager = ProjectsManager::new();
        manager.add_project("Website", "").unwrap();

        let mut copy = manager.projects();
        copy.clear();
        assert_eq!(manager.projects().len(), 1);
    }

    #[test]
    fn set_projects_replaces_the_collection_and_resets_the_counter() {
        let mut donor = ProjectsManager::new();
        donor.add_project("Website", "").unwrap();
        donor.add_project("Backend", "").unwrap();
        let snapshot = donor.projects();

        let mut manager = ProjectsManager::new();
        manager.add_project("Scratch", "").unwrap();
        manager.set_projects(snapshot);

        assert_eq!(manager.projects().len(), 2);
        assert!(manager.project_by_id(ProjectId(1)).is_some());

        // Counter restarts at len + 1.
        assert_eq!(manager.add_project("Mobile", "").unwrap().id(), ProjectId(3));
    }
}
