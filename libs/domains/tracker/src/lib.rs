//! Tracker Domain
//!
//! Projects, their tasks, and a keyword-based intake helper, served over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌──────────────────┐
//! │   Service   │ ──▶ │ IntakeClassifier │  ← pure text rules
//! └──────┬──────┘     └──────────────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Store: trait + in-memory implementation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tracker::{
//!     handlers,
//!     intake::IntakeClassifier,
//!     repository::InMemoryTrackerRepository,
//!     service::TrackerService,
//! };
//!
//! let repository = InMemoryTrackerRepository::new();
//! let service = TrackerService::new(repository, IntakeClassifier::default());
//!
//! // Mount under /api
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod intake;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{TrackerError, TrackerResult};
pub use handlers::ApiDoc;
pub use intake::{DEFAULT_TITLE_MAX_CHARS, IntakeClassifier, IntakeConfig};
pub use models::{
    CreateProject, CreateTask, IntakeRequest, IntakeSuggestion, Project, Task, TaskListQuery,
    TaskPriority, TaskStatus, UpdateTask,
};
pub use repository::{InMemoryTrackerRepository, TrackerRepository};
pub use service::TrackerService;
