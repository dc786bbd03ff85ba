use std::sync::Arc;
use validator::Validate;

use crate::error::{TrackerError, TrackerResult};
use crate::intake::IntakeClassifier;
use crate::models::{
    CreateProject, CreateTask, IntakeSuggestion, Project, Task, TaskListQuery, UpdateTask,
};
use crate::repository::TrackerRepository;

/// Service layer for project and task business logic
pub struct TrackerService<R: TrackerRepository> {
    repository: Arc<R>,
    classifier: IntakeClassifier,
}

impl<R: TrackerRepository> Clone for TrackerService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            classifier: self.classifier,
        }
    }
}

impl<R: TrackerRepository> TrackerService<R> {
    pub fn new(repository: R, classifier: IntakeClassifier) -> Self {
        Self {
            repository: Arc::new(repository),
            classifier,
        }
    }

    /// List every project in creation order
    pub async fn list_projects(&self) -> TrackerResult<Vec<Project>> {
        self.repository.list_projects().await
    }

    /// Create a new project
    pub async fn create_project(&self, input: CreateProject) -> TrackerResult<Project> {
        validate(&input)?;
        self.repository.create_project(input).await
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: u64) -> TrackerResult<Project> {
        self.repository
            .get_project(id)
            .await?
            .ok_or(TrackerError::ProjectNotFound(id))
    }

    /// List a project's tasks, optionally filtered by status
    pub async fn list_tasks(
        &self,
        project_id: u64,
        query: TaskListQuery,
    ) -> TrackerResult<Vec<Task>> {
        self.repository.list_tasks(project_id, query.status).await
    }

    /// Create a task under an existing project
    pub async fn create_task(&self, project_id: u64, input: CreateTask) -> TrackerResult<Task> {
        validate(&input)?;
        self.repository.create_task(project_id, input).await
    }

    /// Get a task by ID
    pub async fn get_task(&self, id: u64) -> TrackerResult<Task> {
        self.repository
            .get_task(id)
            .await?
            .ok_or(TrackerError::TaskNotFound(id))
    }

    /// Apply a partial update; only fields present in `input` change
    pub async fn update_task(&self, id: u64, input: UpdateTask) -> TrackerResult<Task> {
        validate(&input)?;
        self.repository.update_task(id, input).await
    }

    /// Suggest a title and priority for free text
    pub fn intake(&self, input: &str) -> IntakeSuggestion {
        let suggestion = self.classifier.classify(input);
        tracing::debug!(priority = %suggestion.priority, "Classified intake text");
        suggestion
    }
}

fn validate<T: Validate>(input: &T) -> TrackerResult<()> {
    input.validate()?;
    Ok(())
}
