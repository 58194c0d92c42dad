//! Repository layer contracts and the in-memory store.
//!
//! # Responsibility
//! - Define the store contract consumed by services.
//! - Keep storage bookkeeping isolated from validation and orchestration.
//!
//! # Invariants
//! - Repositories are bookkeeping structures, not gatekeepers: they never
//!   validate field content.
//! - The only semantic error a repository reports is `NotFound`.

pub mod book_repo;
