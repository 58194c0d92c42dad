//! Book record model.
//!
//! # Responsibility
//! - Define the canonical inventory record and its wire shape.
//! - Provide the draft/patch companions used by insert and update paths.
//!
//! # Invariants
//! - `id` is stable for the lifetime of a record and store-assigned.
//! - `created_at` is stamped once on insert and never modified.
//! - `updated_at` stays `None` until the first update.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a book record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BookId = u64;

/// Canonical inventory record for one book.
///
/// Wire field names are camelCase to stay compatible with the existing API
/// consumers (`publishedDate`, `createdAt`, `updatedAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// Store-assigned, monotonically increasing, never reused.
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub published_date: NaiveDate,
    pub isbn: String,
    pub price: f64,
    pub quantity: u32,
    pub overview: String,
    /// Stamped on insert.
    pub created_at: DateTime<Utc>,
    /// Stamped on every update; absent until the first one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Caller-supplied field set for inserting a new record.
///
/// All fields are required; the store supplies `id` and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub published_date: NaiveDate,
    pub isbn: String,
    pub price: f64,
    pub quantity: u32,
    pub overview: String,
}

/// Shallow-merge field set for updating an existing record.
///
/// Absent fields keep their current value; an empty patch only bumps
/// `updated_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
}

impl BookRecord {
    /// Projects the user-editable fields back into draft shape.
    ///
    /// Used by update paths to validate the post-merge state before any
    /// store mutation happens.
    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            publisher: self.publisher.clone(),
            published_date: self.published_date,
            isbn: self.isbn.clone(),
            price: self.price,
            quantity: self.quantity,
            overview: self.overview.clone(),
        }
    }

    /// Shallow-merges supplied patch fields over this record.
    ///
    /// Does not touch `id`, `created_at` or `updated_at`; timestamp
    /// stamping is the store's job.
    pub fn apply(&mut self, patch: &BookPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(author) = &patch.author {
            self.author = author.clone();
        }
        if let Some(publisher) = &patch.publisher {
            self.publisher = publisher.clone();
        }
        if let Some(published_date) = patch.published_date {
            self.published_date = published_date;
        }
        if let Some(isbn) = &patch.isbn {
            self.isbn = isbn.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(overview) = &patch.overview {
            self.overview = overview.clone();
        }
    }
}

impl BookDraft {
    /// Builds the stored record from this draft plus store-assigned fields.
    pub fn into_record(self, id: BookId, created_at: DateTime<Utc>) -> BookRecord {
        BookRecord {
            id,
            title: self.title,
            author: self.author,
            publisher: self.publisher,
            published_date: self.published_date,
            isbn: self.isbn,
            price: self.price,
            quantity: self.quantity,
            overview: self.overview,
            created_at,
            updated_at: None,
        }
    }
}
