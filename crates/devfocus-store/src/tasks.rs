//! CRUD operations for [`Task`] records, plus the completion transition.

use chrono::{DateTime, Utc};
use devfocus_shared::error::require_text;
use devfocus_shared::{EntityKind, OwnerId, TaskStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::models::{NewTask, Task};
use crate::store::EntityStore;

/// Outcome of [`EntityStore::complete_task`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskCompletion {
    pub task: Task,
    /// `false` when the task was already completed and nothing changed.
    pub newly_completed: bool,
}

impl EntityStore {
    pub fn create_task(&mut self, owner: &OwnerId, data: NewTask) -> Result<Task> {
        require_text("title", &data.title)?;
        self.get_project(owner, data.project_id)?;

        let now = self.now();
        let task = Task {
            id: Uuid::new_v4(),
            title: data.title,
            project_id: data.project_id,
            due_date: data.due_date,
            priority: data.priority,
            status: data.status,
            owner: owner.clone(),
            github_issue_id: data.github_issue_id,
            created_at: now,
            updated_at: now,
        };
        self.tasks.push(task.clone());

        tracing::info!(task_id = %task.id, project_id = %task.project_id, "task created");
        Ok(task)
    }

    pub fn get_task(&self, owner: &OwnerId, id: Uuid) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id && &t.owner == owner)
            .ok_or_else(|| StoreError::not_found(EntityKind::Task, id))
    }

    pub fn list_tasks(&self, owner: &OwnerId) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| &t.owner == owner)
            .cloned()
            .collect()
    }

    /// Tasks of one project in creation order.
    pub fn tasks_for_project(&self, owner: &OwnerId, project_id: Uuid) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.project_id == project_id && &t.owner == owner)
            .cloned()
            .collect()
    }

    /// Open tasks due after `now`, soonest first.
    pub fn upcoming_tasks(&self, owner: &OwnerId, now: DateTime<Utc>, limit: usize) -> Vec<Task> {
        let mut upcoming: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| &t.owner == owner && !t.status.is_completed() && t.due_date > now)
            .cloned()
            .collect();
        upcoming.sort_by_key(|t| t.due_date);
        upcoming.truncate(limit);
        upcoming
    }

    /// Replace a stored task. Never evaluates rewards, even when the new
    /// status is `completed`.
    pub fn update_task(&mut self, owner: &OwnerId, task: Task) -> Result<Task> {
        require_text("title", &task.title)?;
        self.get_project(owner, task.project_id)?;

        let now = self.now();
        let slot = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task.id && &t.owner == owner)
            .ok_or_else(|| StoreError::not_found(EntityKind::Task, task.id))?;

        let updated = Task {
            owner: slot.owner.clone(),
            created_at: slot.created_at,
            updated_at: now,
            ..task
        };
        *slot = updated.clone();

        tracing::debug!(task_id = %updated.id, status = updated.status.as_str(), "task updated");
        Ok(updated)
    }

    /// Move a task to `completed`.
    ///
    /// Completing an already completed task is not an error: the stored
    /// record is returned untouched with `newly_completed == false`, so the
    /// caller can skip the reward step.
    pub fn complete_task(&mut self, owner: &OwnerId, id: Uuid) -> Result<TaskCompletion> {
        let now = self.now();
        let slot = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id && &t.owner == owner)
            .ok_or_else(|| StoreError::not_found(EntityKind::Task, id))?;

        if slot.status.is_completed() {
            tracing::debug!(task_id = %id, "task already completed");
            return Ok(TaskCompletion {
                task: slot.clone(),
                newly_completed: false,
            });
        }

        let completed = Task {
            status: TaskStatus::Completed,
            updated_at: now,
            ..slot.clone()
        };
        *slot = completed.clone();

        tracing::info!(task_id = %id, %owner, "task completed");
        Ok(TaskCompletion {
            task: completed,
            newly_completed: true,
        })
    }

    /// Returns the removed task, or `None` if there was nothing to delete.
    pub fn delete_task(&mut self, owner: &OwnerId, id: Uuid) -> Option<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id && &t.owner == owner)?;
        let task = self.tasks.remove(index);
        tracing::info!(task_id = %id, "task deleted");
        Some(task)
    }
}
