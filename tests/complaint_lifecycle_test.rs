//! Store and lifecycle behaviour independent of the UI.

mod common;

use common::sample_complaint;
use suvidha::adapters::mock::InMemoryStore;
use suvidha::error::{KioskError, StorageError};
use suvidha::lifecycle::{self, Advance, RequestIdGenerator};
use suvidha::models::{ComplaintDraft, ComplaintStatus, Department};
use suvidha::storage::{ComplaintStore, COMPLAINTS_KEY};

fn store_with(complaints: &[suvidha::models::Complaint]) -> (ComplaintStore, InMemoryStore) {
    let backend = InMemoryStore::new();
    let store = ComplaintStore::new(backend.clone());
    for c in complaints {
        store.save_complaint(c).unwrap();
    }
    (store, backend)
}

#[test]
fn test_advance_walks_full_lifecycle() {
    let (store, _backend) = store_with(&[sample_complaint("REQ-100001", "CIT-A", ComplaintStatus::Submitted)]);

    let mut seen = Vec::new();
    for _ in 0..3 {
        let outcome = lifecycle::advance(&store, "REQ-100001").unwrap();
        assert!(outcome.changed());
        seen.push(outcome.status());
    }
    assert_eq!(
        seen,
        vec![
            ComplaintStatus::UnderReview,
            ComplaintStatus::Assigned,
            ComplaintStatus::Resolved
        ]
    );
}

#[test]
fn test_resolved_is_terminal_without_write() {
    let (store, backend) = store_with(&[sample_complaint("REQ-100002", "CIT-A", ComplaintStatus::Resolved)]);
    let writes = backend.write_count();

    let outcome = lifecycle::advance(&store, "REQ-100002").unwrap();
    assert!(matches!(outcome, Advance::AlreadyResolved { .. }));
    assert_eq!(outcome.status(), ComplaintStatus::Resolved);
    assert_eq!(backend.write_count(), writes);
}

#[test]
fn test_update_then_get_changes_only_target() {
    let (store, _backend) = store_with(&[
        sample_complaint("REQ-100003", "CIT-A", ComplaintStatus::Submitted),
        sample_complaint("REQ-100004", "CIT-B", ComplaintStatus::Submitted),
    ]);

    assert!(store
        .update_complaint_status("REQ-100004", ComplaintStatus::Assigned)
        .unwrap());
    let all = store.get_complaints().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].status, ComplaintStatus::Submitted);
    assert_eq!(all[1].status, ComplaintStatus::Assigned);
    assert_eq!(all[1].description, "No water since Monday");
}

#[test]
fn test_update_unknown_id_leaves_collection() {
    let (store, backend) = store_with(&[sample_complaint("REQ-100005", "CIT-A", ComplaintStatus::Submitted)]);
    let before = backend.raw(COMPLAINTS_KEY);
    let writes = backend.write_count();

    assert!(!store
        .update_complaint_status("REQ-999999", ComplaintStatus::Resolved)
        .unwrap());
    assert_eq!(backend.raw(COMPLAINTS_KEY), before);
    assert_eq!(backend.write_count(), writes);
    assert_eq!(
        lifecycle::advance(&store, "REQ-999999").unwrap_err(),
        KioskError::not_found("REQ-999999")
    );
}

#[test]
fn test_filter_by_user_keeps_submission_order() {
    let (store, _backend) = store_with(&[
        sample_complaint("REQ-100006", "CIT-U", ComplaintStatus::Submitted),
        sample_complaint("REQ-100007", "CIT-V", ComplaintStatus::Submitted),
        sample_complaint("REQ-100008", "CIT-U", ComplaintStatus::Assigned),
    ]);
    let mine: Vec<String> = store
        .complaints_for_user("CIT-U")
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(mine, vec!["REQ-100006", "REQ-100008"]);
}

#[test]
fn test_created_complaints_have_unique_ids() {
    let (store, _backend) = store_with(&[]);
    let mut ids = RequestIdGenerator::new();
    for i in 0..50 {
        let draft = ComplaintDraft::new(Department::Gas, "Name Change", format!("Request {i}"));
        let complaint = lifecycle::create_complaint(draft, "CIT-A", &mut ids).unwrap();
        store.save_complaint(&complaint).unwrap();
    }

    let mut all: Vec<String> = store.get_complaints().unwrap().into_iter().map(|c| c.id).collect();
    assert!(all.iter().all(|id| id.starts_with("REQ-") && id.len() == 10));
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 50);
}

#[test]
fn test_corrupt_collection_is_reported() {
    let backend = InMemoryStore::with_value(COMPLAINTS_KEY, "{not json");
    let store = ComplaintStore::new(backend);
    assert!(matches!(
        store.get_complaints(),
        Err(StorageError::Corrupt { .. })
    ));
}
