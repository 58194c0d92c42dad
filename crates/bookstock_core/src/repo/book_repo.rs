//! Book repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the process-local record sequence.
//! - Own identifier assignment and timestamp stamping.
//!
//! # Invariants
//! - Records are kept in insertion order; lookups are linear scans for the
//!   first matching id.
//! - Ids come from a monotonic counter that never regresses, so an id is
//!   never reused after a deletion.
//! - `created_at` is stamped exactly once, `updated_at` on every update.
//! - No field validation happens here; callers go through the service
//!   layer for that contract.

use crate::model::book::{BookDraft, BookId, BookPatch, BookRecord};
use chrono::Utc;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for book store operations.
///
/// Every failing lookup or mutation collapses to the one `NotFound`
/// condition; store operations on well-formed input do not otherwise fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(BookId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "book not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Store contract for book CRUD operations.
pub trait BookRepository {
    /// Returns all records in insertion order.
    fn list(&self) -> Vec<BookRecord>;
    /// Returns the first record whose id matches.
    fn get(&self, id: BookId) -> RepoResult<BookRecord>;
    /// Assigns the next id, stamps `created_at`, appends and returns the
    /// new record.
    fn insert(&mut self, draft: BookDraft) -> BookRecord;
    /// Shallow-merges `patch` over the record in place, stamps
    /// `updated_at`, returns the updated record.
    fn update(&mut self, id: BookId, patch: &BookPatch) -> RepoResult<BookRecord>;
    /// Removes and returns the record.
    fn delete(&mut self, id: BookId) -> RepoResult<BookRecord>;
}

/// Vec-backed repository holding the records for the process lifetime.
///
/// Constructed once at startup and handed to request handlers by the
/// embedding binary; never ambient global state.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Vec<BookRecord>,
    next_id: BookId,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }
}

impl BookRepository for MemoryBookRepository {
    fn list(&self) -> Vec<BookRecord> {
        self.books.clone()
    }

    fn get(&self, id: BookId) -> RepoResult<BookRecord> {
        self.books
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or(RepoError::NotFound(id))
    }

    fn insert(&mut self, draft: BookDraft) -> BookRecord {
        self.next_id += 1;
        let record = draft.into_record(self.next_id, Utc::now());
        self.books.push(record.clone());
        record
    }

    fn update(&mut self, id: BookId, patch: &BookPatch) -> RepoResult<BookRecord> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        let book = &mut self.books[index];
        book.apply(patch);
        book.updated_at = Some(Utc::now());
        Ok(book.clone())
    }

    fn delete(&mut self, id: BookId) -> RepoResult<BookRecord> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        Ok(self.books.remove(index))
    }
}
