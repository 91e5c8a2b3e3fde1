#![cfg(not(feature = "csr"))]

use super::*;
use crate::session::profile::{LoginFields, UserProfile};

fn sample_profile() -> UserProfile {
    UserProfile::template().merged_with(&LoginFields {
        mobile: "9876501234".to_owned(),
    })
}

#[test]
fn memory_storage_round_trips_a_profile() {
    let storage = MemorySessionStorage::new();
    assert!(storage.load().unwrap().is_none());

    let profile = sample_profile();
    storage.save(&profile).unwrap();
    assert_eq!(storage.load().unwrap(), Some(profile));
}

#[test]
fn memory_storage_reports_corrupt_payloads() {
    let storage = MemorySessionStorage::with_raw("{not json");
    assert!(matches!(storage.load(), Err(StorageError::Corrupt(_))));
}

#[test]
fn memory_storage_reports_wrong_shape_as_corrupt() {
    let storage = MemorySessionStorage::with_raw(r#"{"id": 42}"#);
    assert!(matches!(storage.load(), Err(StorageError::Corrupt(_))));
}

#[test]
fn memory_storage_clear_removes_the_record() {
    let storage = MemorySessionStorage::new();
    storage.save(&sample_profile()).unwrap();
    storage.clear();
    assert!(storage.raw().is_none());
    assert!(storage.load().unwrap().is_none());

    // Clearing an empty store is fine.
    storage.clear();
}

#[test]
fn local_storage_is_empty_and_unwritable_off_browser() {
    let storage = LocalSessionStorage::new();
    assert!(storage.load().unwrap().is_none());
    assert!(matches!(
        storage.save(&sample_profile()),
        Err(StorageError::Unavailable)
    ));
    storage.clear();
}
