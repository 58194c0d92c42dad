//! Book inventory domain model.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store and API layers.
//! - Hold the field-level validation contract for prospective records.
//!
//! # Invariants
//! - Every record accepted into a repository has passed `validate_draft`.
//! - `id` is assigned by the store, never by callers.

pub mod book;
pub mod validate;
