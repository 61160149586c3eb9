//! CRUD operations for [`Project`] records.

use devfocus_shared::error::require_text;
use devfocus_shared::{EntityKind, OwnerId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::models::{NewProject, Project};
use crate::store::EntityStore;

/// What a project delete removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRemoval {
    pub project: Project,
    /// Ids of the tasks removed with the project.
    pub removed_tasks: Vec<Uuid>,
}

impl EntityStore {
    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    pub fn create_project(&mut self, owner: &OwnerId, data: NewProject) -> Result<Project> {
        require_text("name", &data.name)?;

        let now = self.now();
        let project = Project {
            id: Uuid::new_v4(),
            name: data.name,
            description: data.description,
            owner: owner.clone(),
            created_at: now,
            updated_at: now,
        };
        self.projects.push(project.clone());

        tracing::info!(project_id = %project.id, %owner, "project created");
        Ok(project)
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    pub fn get_project(&self, owner: &OwnerId, id: Uuid) -> Result<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == id && &p.owner == owner)
            .ok_or_else(|| StoreError::not_found(EntityKind::Project, id))
    }

    /// The owner's projects in creation order.
    pub fn list_projects(&self, owner: &OwnerId) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|p| &p.owner == owner)
            .cloned()
            .collect()
    }

    /// Percentage of the project's tasks that are completed, rounded.
    /// A project without tasks is at 0.
    pub fn project_progress(&self, owner: &OwnerId, project_id: Uuid) -> Result<u8> {
        self.get_project(owner, project_id)?;

        let (total, completed) = self
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .fold((0usize, 0usize), |(total, done), t| {
                (total + 1, done + usize::from(t.status.is_completed()))
            });

        if total == 0 {
            return Ok(0);
        }
        let percent = (completed as f64 / total as f64 * 100.0).round();
        Ok(percent as u8)
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Replace the stored project with `project`, keeping its identity
    /// fields and refreshing `updated_at`.
    pub fn update_project(&mut self, owner: &OwnerId, project: Project) -> Result<Project> {
        require_text("name", &project.name)?;

        let now = self.now();
        let slot = self
            .projects
            .iter_mut()
            .find(|p| p.id == project.id && &p.owner == owner)
            .ok_or_else(|| StoreError::not_found(EntityKind::Project, project.id))?;

        let updated = Project {
            owner: slot.owner.clone(),
            created_at: slot.created_at,
            updated_at: now,
            ..project
        };
        *slot = updated.clone();

        tracing::debug!(project_id = %updated.id, "project updated");
        Ok(updated)
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Delete a project and every task that references it.
    ///
    /// Returns `None` when the id is unknown to this owner; deleting is
    /// forgiving and never fails.
    pub fn delete_project(&mut self, owner: &OwnerId, id: Uuid) -> Option<ProjectRemoval> {
        let Some(index) = self
            .projects
            .iter()
            .position(|p| p.id == id && &p.owner == owner)
        else {
            tracing::debug!(project_id = %id, "delete of unknown project ignored");
            return None;
        };

        let project = self.projects.remove(index);

        let mut removed_tasks = Vec::new();
        self.tasks.retain(|t| {
            if t.project_id == id {
                removed_tasks.push(t.id);
                false
            } else {
                true
            }
        });

        tracing::info!(
            project_id = %id,
            cascaded_tasks = removed_tasks.len(),
            "project deleted"
        );
        Some(ProjectRemoval {
            project,
            removed_tasks,
        })
    }
}
