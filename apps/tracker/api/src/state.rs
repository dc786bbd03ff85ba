//! Application state shared by the route builders.

use domain_tracker::{InMemoryTrackerRepository, IntakeClassifier, TrackerService};

/// Everything the routers need, built once at startup.
///
/// The store lives inside `tracker`; cloning the state clones an `Arc`, so
/// every handler sees the same projects and tasks.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub tracker: TrackerService<InMemoryTrackerRepository>,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        let classifier = IntakeClassifier::new(&config.intake);
        let tracker = TrackerService::new(InMemoryTrackerRepository::new(), classifier);
        Self { config, tracker }
    }
}
