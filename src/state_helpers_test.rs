use super::*;
use crate::services::contact::{Contact, MemoryContactStore};

/// Create a test `AppState` backed by an empty in-memory store.
#[must_use]
pub fn test_app_state() -> AppState {
    AppState::new(Arc::new(MemoryContactStore::new()))
}

/// Create a test `AppState` holding exactly these contacts.
#[must_use]
pub fn test_app_state_with(contacts: Vec<Contact>) -> AppState {
    AppState::new(Arc::new(MemoryContactStore::with_contacts(contacts)))
}

/// Create a fully populated contact for testing.
#[must_use]
pub fn dummy_contact() -> Contact {
    Contact {
        id: "jdoe".into(),
        first: Some("Jane".into()),
        last: Some("Doe".into()),
        avatar: Some("https://placekitten.com/200/200".into()),
        twitter: Some("@jdoe".into()),
        notes: Some("Met at the conference".into()),
        favorite: false,
        created_at: 1_700_000_000_000,
    }
}
