//! Common test utilities for integration tests.
//!
//! Builds kiosk apps over an in-memory or temp-dir file store, and files
//! complaints through the same actions a citizen would use.

#![allow(dead_code)]

use std::path::Path;

use suvidha::adapters::mock::InMemoryStore;
use suvidha::adapters::FileKeyValueStore;
use suvidha::app::App;
use suvidha::config::KioskConfig;
use suvidha::models::{Complaint, ComplaintStatus, Department};
use suvidha::storage::ComplaintStore;
use tempfile::TempDir;

pub const MOBILE: &str = "9876543210";
pub const OTHER_MOBILE: &str = "9123456780";

/// Config with data and exports under `dir`.
pub fn test_config(dir: &Path) -> KioskConfig {
    KioskConfig::default()
        .with_data_dir(dir.join("data"))
        .with_export_dir(dir.join("receipts"))
}

/// A fresh app over a shared in-memory store.
///
/// The returned store handle observes every write the app makes.
pub fn memory_app() -> (App, InMemoryStore, TempDir) {
    let temp = TempDir::new().unwrap();
    let backend = InMemoryStore::new();
    let app = App::new(ComplaintStore::new(backend.clone()), &test_config(temp.path()));
    (app, backend, temp)
}

/// An app over the file store in `dir`, as if the kiosk was (re)started.
pub fn file_app(dir: &Path) -> App {
    let config = test_config(dir);
    let backend = FileKeyValueStore::open(&config.data_dir).unwrap();
    App::new(ComplaintStore::new(backend), &config)
}

/// File a complaint the way the form does.
pub fn file_complaint(app: &mut App, department: Department, service: &str, description: &str) -> Complaint {
    app.select_department(department);
    app.select_service(service).unwrap();
    app.submit_complaint(description).unwrap()
}

pub fn sample_complaint(id: &str, user_id: &str, status: ComplaintStatus) -> Complaint {
    Complaint {
        id: id.to_string(),
        department: Department::Municipal,
        service_type: "Water Supply".to_string(),
        description: "No water since Monday".to_string(),
        status,
        timestamp: "05/01/2025, 09:30:00".to_string(),
        user_id: user_id.to_string(),
        attachment_name: None,
    }
}
