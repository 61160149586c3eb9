use devfocus_rewards::Snapshot;
use devfocus_shared::OwnerId;
use devfocus_store::{NewTask, Result, Task};
use uuid::Uuid;

use crate::events::StoreEvent;
use crate::facade::DataFacade;

impl DataFacade {
    pub fn create_task(&mut self, owner: &OwnerId, data: NewTask) -> Result<Task> {
        let task = self.store.create_task(owner, data)?;
        self.events.emit(StoreEvent::TaskCreated(task.clone()));
        Ok(task)
    }

    /// Plain replacement; setting `completed` here awards nothing.
    pub fn update_task(&mut self, owner: &OwnerId, task: Task) -> Result<Task> {
        let task = self.store.update_task(owner, task)?;
        self.events.emit(StoreEvent::TaskUpdated(task.clone()));
        Ok(task)
    }

    pub fn delete_task(&mut self, owner: &OwnerId, id: Uuid) {
        if let Some(task) = self.store.delete_task(owner, id) {
            self.events.emit(StoreEvent::TaskDeleted { task_id: task.id });
        }
    }

    /// Complete a task and award its points.
    ///
    /// A task that is already completed is returned as stored and earns
    /// nothing further.
    pub fn complete_task(&mut self, owner: &OwnerId, id: Uuid) -> Result<Task> {
        let completion = self.store.complete_task(owner, id)?;
        if !completion.newly_completed {
            return Ok(completion.task);
        }
        self.events.emit(StoreEvent::TaskCompleted(completion.task.clone()));

        let now = self.store.now();
        let proposal = self
            .engine
            .on_task_completed(Snapshot::from(&self.store), id, owner, now);
        self.apply(proposal);

        Ok(completion.task)
    }

    pub fn list_tasks(&self, owner: &OwnerId) -> Vec<Task> {
        self.store.list_tasks(owner)
    }

    pub fn tasks_for_project(&self, owner: &OwnerId, project_id: Uuid) -> Vec<Task> {
        self.store.tasks_for_project(owner, project_id)
    }
}
