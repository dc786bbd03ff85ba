//! Custom extractors for Axum handlers.
//!
//! Each one rejects with [`AppError`](crate::errors::AppError), so bad input in
//! the path, the query string or the body always gets the standard error body.

pub mod path;
pub mod query;
pub mod validated_json;

pub use path::ParsedPath;
pub use query::ParsedQuery;
pub use validated_json::ValidatedJson;
