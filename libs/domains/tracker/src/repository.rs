use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{CreateProject, CreateTask, Project, Task, TaskStatus, UpdateTask};

/// Repository trait for project and task storage
///
/// Ids are allocated by the implementation: sequential from 1, one counter
/// for projects and one for tasks, never reused.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackerRepository: Send + Sync {
    /// Create a project with the next project id
    async fn create_project(&self, input: CreateProject) -> TrackerResult<Project>;

    /// List all projects in creation order
    async fn list_projects(&self) -> TrackerResult<Vec<Project>>;

    /// Get a project by ID
    async fn get_project(&self, id: u64) -> TrackerResult<Option<Project>>;

    /// Create a task under an existing project
    async fn create_task(&self, project_id: u64, input: CreateTask) -> TrackerResult<Task>;

    /// List a project's tasks in creation order, optionally by exact status
    async fn list_tasks(
        &self,
        project_id: u64,
        status: Option<TaskStatus>,
    ) -> TrackerResult<Vec<Task>>;

    /// Get a task by ID
    async fn get_task(&self, id: u64) -> TrackerResult<Option<Task>>;

    /// Apply a partial update to a task
    async fn update_task(&self, id: u64, input: UpdateTask) -> TrackerResult<Task>;
}

#[derive(Debug)]
struct TrackerState {
    projects: BTreeMap<u64, Project>,
    tasks: BTreeMap<u64, Task>,
    next_project_id: u64,
    next_task_id: u64,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            projects: BTreeMap::new(),
            tasks: BTreeMap::new(),
            next_project_id: 1,
            next_task_id: 1,
        }
    }
}

/// In-memory implementation of TrackerRepository
///
/// A single lock guards both collections and both counters, so an id is
/// allocated and its record inserted in one critical section. Ids only grow,
/// which makes `BTreeMap` key order the creation order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTrackerRepository {
    state: Arc<RwLock<TrackerState>>,
}

impl InMemoryTrackerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TrackerRepository for InMemoryTrackerRepository {
    async fn create_project(&self, input: CreateProject) -> TrackerResult<Project> {
        let mut state = self.state.write().await;

        let id = state.next_project_id;
        state.next_project_id += 1;

        let project = Project {
            id,
            name: input.name,
        };
        state.projects.insert(id, project.clone());

        tracing::info!(project_id = id, "Created project");
        Ok(project)
    }

    async fn list_projects(&self) -> TrackerResult<Vec<Project>> {
        let state = self.state.read().await;
        Ok(state.projects.values().cloned().collect())
    }

    async fn get_project(&self, id: u64) -> TrackerResult<Option<Project>> {
        let state = self.state.read().await;
        Ok(state.projects.get(&id).cloned())
    }

    async fn create_task(&self, project_id: u64, input: CreateTask) -> TrackerResult<Task> {
        let mut state = self.state.write().await;

        if !state.projects.contains_key(&project_id) {
            return Err(TrackerError::ProjectNotFound(project_id));
        }

        let id = state.next_task_id;
        state.next_task_id += 1;

        let task = Task::new(id, project_id, input);
        state.tasks.insert(id, task.clone());

        tracing::info!(task_id = id, project_id, "Created task");
        Ok(task)
    }

    async fn list_tasks(
        &self,
        project_id: u64,
        status: Option<TaskStatus>,
    ) -> TrackerResult<Vec<Task>> {
        let state = self.state.read().await;

        if !state.projects.contains_key(&project_id) {
            return Err(TrackerError::ProjectNotFound(project_id));
        }

        let tasks = state
            .tasks
            .values()
            .filter(|t| t.project_id == project_id)
            .filter(|t| status.is_none_or(|s| t.status == s))
            .cloned()
            .collect();

        Ok(tasks)
    }

    async fn get_task(&self, id: u64) -> TrackerResult<Option<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn update_task(&self, id: u64, input: UpdateTask) -> TrackerResult<Task> {
        let mut state = self.state.write().await;

        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TrackerError::TaskNotFound(id))?;
        task.apply_update(input);
        let updated = task.clone();

        tracing::info!(task_id = id, "Updated task");
        Ok(updated)
    }
}
