//! Server infrastructure module.
//!
//! - Router composition with OpenAPI documentation and shared middleware
//! - `/healthz` liveness endpoint
//! - Graceful shutdown on SIGINT/SIGTERM
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router};
//!
//! let app = create_router::<ApiDoc>(api_routes, &config.cors)?;
//! create_app(app, &config.server).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
