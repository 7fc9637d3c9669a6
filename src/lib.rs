//! # linksnip
//!
//! A small and fast URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Concrete link store
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Guarantees
//!
//! - Re-submitting a URL returns its existing code (idempotent, also under
//!   concurrent first-time submission)
//! - Short codes are unique by construction: the store's atomic
//!   insert-if-absent closes the check-then-act race
//! - Click counting never loses updates; stats reads never count
//!
//! ## Quick Start
//!
//! ```bash
//! BASE_URL="https://lsn.ip" cargo run
//!
//! curl -X POST localhost:3000/api/shorten \
//!   -H 'content-type: application/json' \
//!   -d '{"url": "https://example.com/a"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::repositories::{InsertOutcome, LinkRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::MemoryLinkRepository;
    pub use crate::state::AppState;
}
