// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{PersistenceError, SqliteStore};
use pestaway_domain::ContactSubmission;
use time::macros::datetime;

fn sample_submission() -> ContactSubmission {
    ContactSubmission::new(
        String::from("Jane Doe"),
        String::from("jane@example.com"),
        Some(String::from("555-0100")),
        Some(String::from("Quarterly service")),
        String::from("Seeing ants again near the garage."),
        datetime!(2026-03-10 14:30:00 UTC),
    )
}

#[test]
fn test_insert_returns_sequential_identifiers() {
    let store = SqliteStore::new_in_memory().unwrap();
    let submission = sample_submission();

    let first = store.insert_contact_submission(&submission).unwrap();
    let second = store.insert_contact_submission(&submission).unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
}

#[test]
fn test_inserted_submission_reads_back_verbatim() {
    let store = SqliteStore::new_in_memory().unwrap();
    let submission = sample_submission();

    let id = store.insert_contact_submission(&submission).unwrap();
    let record = store.get_contact_submission(id).unwrap();

    assert_eq!(record.id, id);
    assert_eq!(record.submission, submission);
}

#[test]
fn test_optional_fields_persist_as_null() {
    let store = SqliteStore::new_in_memory().unwrap();
    let submission = ContactSubmission::new(
        String::from("A"),
        String::from("a@b.com"),
        None,
        None,
        String::from("hi"),
        datetime!(2026-03-10 09:00:00 UTC),
    );

    let id = store.insert_contact_submission(&submission).unwrap();
    let record = store.get_contact_submission(id).unwrap();

    assert!(record.submission.phone.is_none());
    assert!(record.submission.subject.is_none());
}

#[test]
fn test_missing_identifier_is_not_found() {
    let store = SqliteStore::new_in_memory().unwrap();

    let result = store.get_contact_submission(42);

    assert!(matches!(
        result,
        Err(PersistenceError::SubmissionNotFound(42))
    ));
}

#[test]
fn test_count_tracks_inserts() {
    let store = SqliteStore::new_in_memory().unwrap();
    assert_eq!(store.count_contact_submissions().unwrap(), 0);

    store
        .insert_contact_submission(&sample_submission())
        .unwrap();
    store
        .insert_contact_submission(&sample_submission())
        .unwrap();

    assert_eq!(store.count_contact_submissions().unwrap(), 2);
}

#[test]
fn test_in_memory_stores_are_isolated() {
    let first = SqliteStore::new_in_memory().unwrap();
    let second = SqliteStore::new_in_memory().unwrap();

    first
        .insert_contact_submission(&sample_submission())
        .unwrap();

    assert_eq!(second.count_contact_submissions().unwrap(), 0);
}
