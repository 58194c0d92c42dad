//! Book use-case service.
//!
//! # Responsibility
//! - Provide create/get/list/update/delete entry points for callers.
//! - Act as the validation gatekeeper in front of the store.
//!
//! # Invariants
//! - No record reaches the repository without passing `validate_draft`.
//! - Updates validate the post-merge field set, so a patch can never
//!   degrade a stored record below the validation contract.
//! - The service stays storage-agnostic behind `BookRepository`.

use crate::model::book::{BookDraft, BookId, BookPatch, BookRecord};
use crate::model::validate::{validate_draft, BookValidationError};
use crate::repo::book_repo::{BookRepository, RepoError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for book use-cases: exactly the two kinds callers see.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// A field failed the validation contract; blocks the mutation.
    Validation(BookValidationError),
    /// The id does not resolve to a stored record.
    NotFound(BookId),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "book not found: {id}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<BookValidationError> for ServiceError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
        }
    }
}

/// Use-case service wrapper over a book repository.
pub struct BookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and inserts a new record.
    ///
    /// # Contract
    /// - Returns the stored record with its assigned id and `created_at`.
    /// - A draft failing any field rule never reaches the repository.
    pub fn create(&mut self, draft: BookDraft) -> ServiceResult<BookRecord> {
        validate_draft(&draft)?;
        let record = self.repo.insert(draft);
        info!("event=book_created module=service id={}", record.id);
        Ok(record)
    }

    /// Returns one record by id.
    pub fn get(&self, id: BookId) -> ServiceResult<BookRecord> {
        Ok(self.repo.get(id)?)
    }

    /// Returns all records in insertion order.
    pub fn list(&self) -> Vec<BookRecord> {
        self.repo.list()
    }

    /// Validates the merged state, then applies the patch.
    ///
    /// # Contract
    /// - An empty patch changes only `updated_at`.
    /// - The merge preview is validated before the store mutates, so a
    ///   rejected patch leaves the record untouched.
    pub fn update(&mut self, id: BookId, patch: &BookPatch) -> ServiceResult<BookRecord> {
        let mut preview = self.repo.get(id)?;
        preview.apply(patch);
        validate_draft(&preview.to_draft())?;
        let record = self.repo.update(id, patch)?;
        debug!("event=book_updated module=service id={id}");
        Ok(record)
    }

    /// Removes and returns the record.
    pub fn delete(&mut self, id: BookId) -> ServiceResult<BookRecord> {
        let record = self.repo.delete(id)?;
        info!("event=book_deleted module=service id={id}");
        Ok(record)
    }
}
