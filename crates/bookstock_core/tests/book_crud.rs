use bookstock_core::{
    BookDraft, BookPatch, BookRepository, BookService, BookValidationError, MemoryBookRepository,
    RepoError, ServiceError,
};
use chrono::NaiveDate;

fn draft(title: &str) -> BookDraft {
    BookDraft {
        title: title.to_string(),
        author: "Frank Herbert".to_string(),
        publisher: "Chilton".to_string(),
        published_date: NaiveDate::from_ymd_opt(1965, 1, 1).unwrap(),
        isbn: "0441013597".to_string(),
        price: 12.99,
        quantity: 3,
        overview: "Set on the desert planet Arrakis, Dune tells the story of \
                   young Paul Atreides and the spice melange."
            .to_string(),
    }
}

#[test]
fn insert_and_get_roundtrip() {
    let mut repo = MemoryBookRepository::new();
    let inserted = repo.insert(draft("Dune"));

    assert_eq!(inserted.id, 1);
    assert_eq!(inserted.updated_at, None);

    let loaded = repo.get(inserted.id).unwrap();
    assert_eq!(loaded, inserted);
    assert_eq!(loaded.to_draft(), draft("Dune"));
}

#[test]
fn list_preserves_insertion_order() {
    let mut repo = MemoryBookRepository::new();
    repo.insert(draft("Dune"));
    repo.insert(draft("Dune Messiah"));
    repo.insert(draft("Children of Dune"));

    let titles: Vec<String> = repo.list().into_iter().map(|b| b.title).collect();
    assert_eq!(titles, ["Dune", "Dune Messiah", "Children of Dune"]);
}

#[test]
fn empty_patch_changes_only_updated_at() {
    let mut repo = MemoryBookRepository::new();
    let inserted = repo.insert(draft("Dune"));

    let updated = repo.update(inserted.id, &BookPatch::default()).unwrap();
    assert!(updated.updated_at.is_some());
    assert_eq!(updated.created_at, inserted.created_at);

    let mut expected = inserted;
    expected.updated_at = updated.updated_at;
    assert_eq!(updated, expected);
}

#[test]
fn update_merges_in_place() {
    let mut repo = MemoryBookRepository::new();
    let inserted = repo.insert(draft("Dune"));

    let patch = BookPatch {
        quantity: Some(12),
        ..BookPatch::default()
    };
    repo.update(inserted.id, &patch).unwrap();

    let loaded = repo.get(inserted.id).unwrap();
    assert_eq!(loaded.quantity, 12);
    assert_eq!(loaded.title, "Dune");
    assert!(loaded.updated_at.is_some());
}

#[test]
fn delete_then_get_is_not_found() {
    let mut repo = MemoryBookRepository::new();
    let inserted = repo.insert(draft("Dune"));

    let removed = repo.delete(inserted.id).unwrap();
    assert_eq!(removed, inserted);
    assert_eq!(repo.get(inserted.id), Err(RepoError::NotFound(inserted.id)));
}

#[test]
fn unknown_id_collapses_to_not_found_everywhere() {
    let mut repo = MemoryBookRepository::new();
    assert_eq!(repo.get(42), Err(RepoError::NotFound(42)));
    assert_eq!(
        repo.update(42, &BookPatch::default()),
        Err(RepoError::NotFound(42))
    );
    assert_eq!(repo.delete(42), Err(RepoError::NotFound(42)));
}

#[test]
fn ids_are_never_reused_after_deletion() {
    let mut repo = MemoryBookRepository::new();
    let first = repo.insert(draft("Dune"));
    let second = repo.insert(draft("Dune Messiah"));

    repo.delete(second.id).unwrap();
    // count+1 would collide with the surviving record here; the counter
    // keeps advancing instead.
    let third = repo.insert(draft("Children of Dune"));

    assert_eq!(first.id, 1);
    assert_eq!(third.id, 3);
    assert_eq!(repo.len(), 2);
}

#[test]
fn service_create_assigns_first_id() {
    let mut service = BookService::new(MemoryBookRepository::new());
    let record = service.create(draft("Dune")).unwrap();

    assert_eq!(record.id, 1);
    assert_eq!(record.updated_at, None);
    assert_eq!(service.get(record.id).unwrap(), record);
}

#[test]
fn service_rejects_invalid_draft_before_store() {
    let mut service = BookService::new(MemoryBookRepository::new());
    let mut bad = draft("Dune");
    bad.isbn = "0441013593".to_string();

    let err = service.create(bad).unwrap_err();
    assert_eq!(
        err,
        ServiceError::Validation(BookValidationError::IsbnChecksum)
    );
    assert!(service.list().is_empty());
}

#[test]
fn service_rejects_patch_that_degrades_record() {
    let mut service = BookService::new(MemoryBookRepository::new());
    let record = service.create(draft("Dune")).unwrap();

    let patch = BookPatch {
        author: Some("4uthor".to_string()),
        ..BookPatch::default()
    };
    let err = service.update(record.id, &patch).unwrap_err();
    assert_eq!(
        err,
        ServiceError::Validation(BookValidationError::InvalidCharset { field: "author" })
    );

    // Rejected patch leaves the stored record untouched.
    assert_eq!(service.get(record.id).unwrap(), record);
}

#[test]
fn service_maps_missing_ids_to_not_found() {
    let mut service = BookService::new(MemoryBookRepository::new());
    assert_eq!(service.get(9), Err(ServiceError::NotFound(9)));
    assert_eq!(
        service.update(9, &BookPatch::default()),
        Err(ServiceError::NotFound(9))
    );
    assert_eq!(service.delete(9), Err(ServiceError::NotFound(9)));
}

#[test]
fn service_delete_returns_removed_record() {
    let mut service = BookService::new(MemoryBookRepository::new());
    let record = service.create(draft("Dune")).unwrap();

    let removed = service.delete(record.id).unwrap();
    assert_eq!(removed, record);
    assert_eq!(service.get(record.id), Err(ServiceError::NotFound(record.id)));
}
