//! REST handlers for the book inventory API.
//!
//! # Responsibility
//! - Translate HTTP requests into `BookService` calls and back.
//! - Keep the wire surface compatible with existing API consumers.
//!
//! # Invariants
//! - All store access goes through the mutex-guarded service, so each
//!   operation runs to completion before the next mutation.
//! - A non-numeric `:id` segment never matches a record and yields the
//!   same 404 as a missing id.

use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use bookstock_core::{BookDraft, BookId, BookPatch, BookService, MemoryBookRepository};
use std::sync::{Mutex, MutexGuard};

type ApiResult = Result<HttpResponse, ApiError>;

/// Shared application state, constructed once at startup in `main` and
/// handed to every handler; the store is never ambient global state.
pub(crate) struct AppState {
    service: Mutex<BookService<MemoryBookRepository>>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            service: Mutex::new(BookService::new(MemoryBookRepository::new())),
        }
    }

    fn service(&self) -> Result<MutexGuard<'_, BookService<MemoryBookRepository>>, ApiError> {
        // A poisoned lock means a handler panicked mid-operation; report
        // it generically rather than crashing every later request.
        self.service.lock().map_err(|_| ApiError::Internal)
    }
}

/// Registers the route table; shared between `main` and handler tests.
pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/books", web::get().to(list_books))
        .route("/api/books", web::post().to(create_book))
        .route("/api/books/{id}", web::get().to(get_book))
        .route("/api/books/{id}", web::put().to(update_book))
        .route("/api/books/{id}", web::delete().to(delete_book))
        .route("/health", web::get().to(health))
        .route("/version", web::get().to(version));
}

fn parse_id(raw: &str) -> Result<BookId, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

async fn list_books(state: web::Data<AppState>) -> ApiResult {
    let books = state.service()?.list();
    Ok(HttpResponse::Ok().json(books))
}

async fn get_book(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let id = parse_id(&path)?;
    let book = state.service()?.get(id)?;
    Ok(HttpResponse::Ok().json(book))
}

async fn create_book(state: web::Data<AppState>, draft: web::Json<BookDraft>) -> ApiResult {
    let book = state.service()?.create(draft.into_inner())?;
    Ok(HttpResponse::Created().json(book))
}

async fn update_book(
    state: web::Data<AppState>,
    path: web::Path<String>,
    patch: web::Json<BookPatch>,
) -> ApiResult {
    let id = parse_id(&path)?;
    let book = state.service()?.update(id, &patch)?;
    Ok(HttpResponse::Ok().json(book))
}

async fn delete_book(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let id = parse_id(&path)?;
    let book = state.service()?.delete(id)?;
    Ok(HttpResponse::Ok().json(book))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

async fn version() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
