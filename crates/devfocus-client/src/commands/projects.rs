use devfocus_shared::OwnerId;
use devfocus_store::{NewProject, Project, Result};
use uuid::Uuid;

use crate::events::StoreEvent;
use crate::facade::DataFacade;

impl DataFacade {
    pub fn create_project(&mut self, owner: &OwnerId, data: NewProject) -> Result<Project> {
        let project = self.store.create_project(owner, data)?;
        self.events.emit(StoreEvent::ProjectCreated(project.clone()));
        Ok(project)
    }

    pub fn update_project(&mut self, owner: &OwnerId, project: Project) -> Result<Project> {
        let project = self.store.update_project(owner, project)?;
        self.events.emit(StoreEvent::ProjectUpdated(project.clone()));
        Ok(project)
    }

    /// Delete a project and its tasks. Unknown ids are ignored.
    pub fn delete_project(&mut self, owner: &OwnerId, id: Uuid) {
        if let Some(removal) = self.store.delete_project(owner, id) {
            self.events.emit(StoreEvent::ProjectDeleted {
                project_id: removal.project.id,
                removed_tasks: removal.removed_tasks,
            });
        }
    }

    pub fn list_projects(&self, owner: &OwnerId) -> Vec<Project> {
        self.store.list_projects(owner)
    }

    pub fn project_progress(&self, owner: &OwnerId, project_id: Uuid) -> Result<u8> {
        self.store.project_progress(owner, project_id)
    }
}
