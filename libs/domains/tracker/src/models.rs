use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Task workflow status. Wire values are `Todo`, `In-Progress` and `Done`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default, ToSchema,
)]
pub enum TaskStatus {
    /// Task not started
    #[default]
    Todo,
    /// Task in progress
    #[serde(rename = "In-Progress")]
    #[strum(serialize = "In-Progress")]
    InProgress,
    /// Task completed
    Done,
}

/// Task priority levels. Wire values are `Low`, `Med` and `High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default, ToSchema,
)]
pub enum TaskPriority {
    Low,
    /// Default priority
    #[default]
    Med,
    High,
}

/// A named grouping of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    /// Sequential identifier, starting at 1
    pub id: u64,
    pub name: String,
}

/// A unit of work belonging to exactly one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Sequential identifier, starting at 1, independent of project ids
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Owning project; fixed at creation
    pub project_id: u64,
}

/// DTO for creating a new project
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProject {
    #[validate(length(min = 1))]
    pub name: String,
}

/// DTO for creating a new task under a project
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(length(min = 1))]
    pub title: String,
    /// Defaults to an empty string; an explicit `null` stores no description
    #[serde(default = "empty_description")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
}

fn empty_description() -> Option<String> {
    Some(String::new())
}

/// DTO for partially updating a task.
///
/// Absent fields are left untouched. `description` additionally tells an
/// absent key apart from an explicit `null`, which clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTask {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

/// Marks a key that was present in the payload, even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Query filters for listing a project's tasks
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TaskListQuery {
    /// Exact status match
    pub status: Option<TaskStatus>,
}

/// Free-text input for the intake helper
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct IntakeRequest {
    pub input: String,
}

/// Title and priority derived from free text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IntakeSuggestion {
    pub title: String,
    pub priority: TaskPriority,
}

impl Task {
    /// Build a task from its creation DTO once ids have been allocated
    pub fn new(id: u64, project_id: u64, input: CreateTask) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            status: input.status,
            priority: input.priority,
            project_id,
        }
    }

    /// Apply only the fields present in the UpdateTask DTO
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
    }
}
