//! Core domain logic for the book inventory service.
//! This crate is the single source of truth for record validation invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{init_logging, logging_status};
pub use model::book::{BookDraft, BookId, BookPatch, BookRecord};
pub use model::validate::{isbn10_checksum_ok, validate_draft, BookValidationError};
pub use repo::book_repo::{BookRepository, MemoryBookRepository, RepoError, RepoResult};
pub use service::book_service::{BookService, ServiceError, ServiceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
