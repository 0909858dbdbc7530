//! Users Domain
//!
//! Lifecycle orchestration for users: list, fetch, create and delete, each
//! wrapped with structured timing logs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, duplicate-name rule, timing logs
//! └──┬───────┬──┘
//!    │       │
//! ┌──▼───┐ ┌─▼──────────┐
//! │Logger│ │ Repository │  ← Ports (traits + implementations)
//! └──────┘ └─────┬──────┘
//!                │
//!         ┌──────▼──────┐
//!         │   Models    │  ← Entity, request DTO
//!         └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{
//!     handlers,
//!     logging::TracingLogger,
//!     repository::InMemoryUserRepository,
//!     service::UserService,
//! };
//!
//! let repository = InMemoryUserRepository::new();
//! let service = UserService::new(repository, TracingLogger::default());
//!
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod cancellation;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use cancellation::{Cancellation, CancellationSource};
pub use error::{StorageError, StorageResult, UserError, UserResult};
pub use handlers::ApiDoc;
pub use logging::{LogArg, LoggerAdapter, TracingLogger};
pub use models::{CreateUserRequest, OperationResult, User};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
pub use validation::validate_create_user;
