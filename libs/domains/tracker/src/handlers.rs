use axum::{
    Json, Router,
    extract::State,
    routing::{get, patch, post},
};
use axum_helpers::{
    ParsedPath, ParsedQuery, ValidatedJson,
    errors::responses::{NotFoundResponse, ValidationErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TrackerResult;
use crate::models::{
    CreateProject, CreateTask, IntakeRequest, IntakeSuggestion, Project, Task, TaskListQuery,
    TaskPriority, TaskStatus, UpdateTask,
};
use crate::repository::TrackerRepository;
use crate::service::TrackerService;

pub const PROJECTS_TAG: &str = "projects";
pub const TASKS_TAG: &str = "tasks";
pub const INTAKE_TAG: &str = "intake";

/// OpenAPI documentation for the tracker API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_projects,
        create_project,
        list_tasks,
        create_task,
        update_task,
        intake,
    ),
    components(
        schemas(
            Project,
            Task,
            TaskStatus,
            TaskPriority,
            CreateProject,
            CreateTask,
            UpdateTask,
            IntakeRequest,
            IntakeSuggestion
        ),
        responses(NotFoundResponse, ValidationErrorResponse)
    ),
    tags(
        (name = PROJECTS_TAG, description = "Project management endpoints"),
        (name = TASKS_TAG, description = "Task management endpoints"),
        (name = INTAKE_TAG, description = "Free-text task intake")
    )
)]
pub struct ApiDoc;

/// Create the tracker router; mount it under `/api`
pub fn router<R: TrackerRepository + 'static>(service: TrackerService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{project_id}/tasks",
            get(list_tasks).post(create_task),
        )
        .route("/tasks/{task_id}", patch(update_task))
        .route("/ai/intake", post(intake))
        .with_state(shared_service)
}

/// List all projects
#[utoipa::path(
    get,
    path = "/projects",
    tag = PROJECTS_TAG,
    responses(
        (status = 200, description = "Projects in creation order", body = Vec<Project>)
    )
)]
async fn list_projects<R: TrackerRepository>(
    State(service): State<Arc<TrackerService<R>>>,
) -> TrackerResult<Json<Vec<Project>>> {
    let projects = service.list_projects().await?;
    Ok(Json(projects))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "/projects",
    tag = PROJECTS_TAG,
    request_body = CreateProject,
    responses(
        (status = 200, description = "Project created", body = Project),
        (status = 422, response = ValidationErrorResponse)
    )
)]
async fn create_project<R: TrackerRepository>(
    State(service): State<Arc<TrackerService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> TrackerResult<Json<Project>> {
    let project = service.create_project(input).await?;
    Ok(Json(project))
}

/// List a project's tasks
#[utoipa::path(
    get,
    path = "/projects/{project_id}/tasks",
    tag = TASKS_TAG,
    params(
        ("project_id" = u64, Path, description = "Project ID"),
        TaskListQuery
    ),
    responses(
        (status = 200, description = "Tasks in creation order", body = Vec<Task>),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationErrorResponse)
    )
)]
async fn list_tasks<R: TrackerRepository>(
    State(service): State<Arc<TrackerService<R>>>,
    ParsedPath(project_id): ParsedPath<u64>,
    ParsedQuery(query): ParsedQuery<TaskListQuery>,
) -> TrackerResult<Json<Vec<Task>>> {
    let tasks = service.list_tasks(project_id, query).await?;
    Ok(Json(tasks))
}

/// Create a task under a project
#[utoipa::path(
    post,
    path = "/projects/{project_id}/tasks",
    tag = TASKS_TAG,
    params(
        ("project_id" = u64, Path, description = "Project ID")
    ),
    request_body = CreateTask,
    responses(
        (status = 200, description = "Task created", body = Task),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationErrorResponse)
    )
)]
async fn create_task<R: TrackerRepository>(
    State(service): State<Arc<TrackerService<R>>>,
    ParsedPath(project_id): ParsedPath<u64>,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> TrackerResult<Json<Task>> {
    let task = service.create_task(project_id, input).await?;
    Ok(Json(task))
}

/// Partially update a task
#[utoipa::path(
    patch,
    path = "/tasks/{task_id}",
    tag = TASKS_TAG,
    params(
        ("task_id" = u64, Path, description = "Task ID")
    ),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Task updated", body = Task),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationErrorResponse)
    )
)]
async fn update_task<R: TrackerRepository>(
    State(service): State<Arc<TrackerService<R>>>,
    ParsedPath(task_id): ParsedPath<u64>,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> TrackerResult<Json<Task>> {
    let task = service.update_task(task_id, input).await?;
    Ok(Json(task))
}

/// Suggest a task title and priority from free text
#[utoipa::path(
    post,
    path = "/ai/intake",
    tag = INTAKE_TAG,
    request_body = IntakeRequest,
    responses(
        (status = 200, description = "Derived suggestion", body = IntakeSuggestion)
    )
)]
async fn intake<R: TrackerRepository>(
    State(service): State<Arc<TrackerService<R>>>,
    ValidatedJson(input): ValidatedJson<IntakeRequest>,
) -> Json<IntakeSuggestion> {
    Json(service.intake(&input.input))
}
