//! Contact service: record type, store trait, store backends.
//!
//! DESIGN
//! ======
//! Route handlers only talk to `dyn ContactStore`. `PgContactStore` backs
//! production deployments; `MemoryContactStore` backs local runs without a
//! database and every router test. Both share the same ordering and search
//! rules so pages render identically whichever store is wired in.
//!
//! ERROR HANDLING
//! ==============
//! A blank identifier and an unknown identifier are distinct errors here but
//! both surface to clients as "not found". Database failures pass through
//! untouched for the route layer to log.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("missing contact id")]
    MissingId,
    #[error("contact not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A single contact. Mirrors the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub first: Option<String>,
    pub last: Option<String>,
    pub avatar: Option<String>,
    pub twitter: Option<String>,
    pub notes: Option<String>,
    pub favorite: bool,
    pub created_at: i64,
}

impl Contact {
    /// Fresh record with a generated id and no display fields.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            first: None,
            last: None,
            avatar: None,
            twitter: None,
            notes: None,
            favorite: false,
            created_at: now_ms(),
        }
    }

    #[must_use]
    pub fn has_name(&self) -> bool {
        self.first.is_some() || self.last.is_some()
    }

    /// `"{first} {last}"`, trimmed so a single name part has no stray space.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first.as_deref().unwrap_or_default(), self.last.as_deref().unwrap_or_default())
            .trim()
            .to_owned()
    }

    #[must_use]
    pub fn avatar_alt(&self) -> String {
        format!(
            "{} {} avatar",
            self.first.as_deref().unwrap_or_default(),
            self.last.as_deref().unwrap_or_default()
        )
    }

    #[must_use]
    pub fn twitter_url(&self) -> Option<String> {
        self.twitter.as_deref().map(|handle| format!("https://twitter.com/{handle}"))
    }

    fn apply(&mut self, update: ContactUpdate) {
        self.first = update.first;
        self.last = update.last;
        self.avatar = update.avatar;
        self.twitter = update.twitter;
        self.notes = update.notes;
    }

    fn matches(&self, needle: &str) -> bool {
        [self.first.as_deref(), self.last.as_deref()]
            .into_iter()
            .flatten()
            .any(|part| part.to_lowercase().contains(needle))
    }
}

/// Replacement values for the editable fields. `favorite` is toggled
/// separately and never touched by an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactUpdate {
    pub first: Option<String>,
    pub last: Option<String>,
    pub avatar: Option<String>,
    pub twitter: Option<String>,
    pub notes: Option<String>,
}

impl ContactUpdate {
    /// Blank form values become `None`; everything else is trimmed.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            first: normalize_field(self.first),
            last: normalize_field(self.last),
            avatar: normalize_field(self.avatar),
            twitter: normalize_field(self.twitter),
            notes: normalize_field(self.notes),
        }
    }
}

#[must_use]
pub fn normalize_field(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn normalize_query(query: Option<&str>) -> Option<String> {
    query.map(str::trim).filter(|q| !q.is_empty()).map(str::to_lowercase)
}

fn now_ms() -> i64 {
    i64::try_from(time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000).unwrap_or(i64::MAX)
}

/// Lowercased last name, then creation time, then id. Matches the
/// `ORDER BY` in `PgContactStore::list`, which compares under `COLLATE "C"`.
fn sort_contacts(contacts: &mut [Contact]) {
    contacts.sort_by_cached_key(|c| {
        (c.last.as_deref().unwrap_or_default().to_lowercase(), c.created_at, c.id.clone())
    });
}

// =============================================================================
// STORE TRAIT
// =============================================================================

/// Backend-neutral contact storage. Enables in-memory stores in tests.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// List contacts sorted by last name then creation time, optionally
    /// filtered by a case-insensitive match on first or last name.
    async fn list(&self, query: Option<&str>) -> Result<Vec<Contact>, ContactError>;

    async fn get(&self, id: &str) -> Result<Option<Contact>, ContactError>;

    async fn create_empty(&self) -> Result<Contact, ContactError>;

    /// # Errors
    ///
    /// Returns [`ContactError::NotFound`] if no contact has this id.
    async fn update(&self, id: &str, update: ContactUpdate) -> Result<Contact, ContactError>;

    /// # Errors
    ///
    /// Returns [`ContactError::NotFound`] if no contact has this id.
    async fn set_favorite(&self, id: &str, favorite: bool) -> Result<Contact, ContactError>;

    /// # Errors
    ///
    /// Returns [`ContactError::NotFound`] if no contact has this id.
    async fn delete(&self, id: &str) -> Result<(), ContactError>;
}

/// Resolve a route parameter to a contact.
///
/// # Errors
///
/// Returns [`ContactError::MissingId`] for a blank id and
/// [`ContactError::NotFound`] when no record has exactly this id.
pub async fn load_contact(store: &dyn ContactStore, id: &str) -> Result<Contact, ContactError> {
    if id.trim().is_empty() {
        return Err(ContactError::MissingId);
    }
    store
        .get(id)
        .await?
        .ok_or_else(|| ContactError::NotFound(id.to_owned()))
}

// =============================================================================
// POSTGRES
// =============================================================================

type ContactRow = (String, Option<String>, Option<String>, Option<String>, Option<String>, Option<String>, bool, i64);

const CONTACT_COLUMNS: &str = "id, first, last, avatar, twitter, notes, favorite, created_at";

fn from_row(row: ContactRow) -> Contact {
    let (id, first, last, avatar, twitter, notes, favorite, created_at) = row;
    Contact { id, first, last, avatar, twitter, notes, favorite, created_at }
}

pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn list(&self, query: Option<&str>) -> Result<Vec<Contact>, ContactError> {
        let rows = sqlx::query_as::<_, ContactRow>(&format!(
            r#"SELECT {CONTACT_COLUMNS}
             FROM contacts
             WHERE $1::text IS NULL
                OR strpos(lower(coalesce(first, '')), $1) > 0
                OR strpos(lower(coalesce(last, '')), $1) > 0
             ORDER BY lower(coalesce(last, '')) COLLATE "C" ASC, created_at ASC, id COLLATE "C" ASC"#
        ))
        .bind(normalize_query(query))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(from_row).collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>, ContactError> {
        let row = sqlx::query_as::<_, ContactRow>(&format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(from_row))
    }

    async fn create_empty(&self) -> Result<Contact, ContactError> {
        let contact = Contact::empty();
        sqlx::query("INSERT INTO contacts (id, favorite, created_at) VALUES ($1, $2, $3)")
            .bind(&contact.id)
            .bind(contact.favorite)
            .bind(contact.created_at)
            .execute(&self.pool)
            .await?;
        Ok(contact)
    }

    async fn update(&self, id: &str, update: ContactUpdate) -> Result<Contact, ContactError> {
        let row = sqlx::query_as::<_, ContactRow>(&format!(
            "UPDATE contacts
             SET first = $2, last = $3, avatar = $4, twitter = $5, notes = $6
             WHERE id = $1
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(id)
        .bind(update.first)
        .bind(update.last)
        .bind(update.avatar)
        .bind(update.twitter)
        .bind(update.notes)
        .fetch_optional(&self.pool)
        .await?;

        row.map(from_row).ok_or_else(|| ContactError::NotFound(id.to_owned()))
    }

    async fn set_favorite(&self, id: &str, favorite: bool) -> Result<Contact, ContactError> {
        let row = sqlx::query_as::<_, ContactRow>(&format!(
            "UPDATE contacts SET favorite = $2 WHERE id = $1 RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(id)
        .bind(favorite)
        .fetch_optional(&self.pool)
        .await?;

        row.map(from_row).ok_or_else(|| ContactError::NotFound(id.to_owned()))
    }

    async fn delete(&self, id: &str) -> Result<(), ContactError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ContactError::NotFound(id.to_owned()));
        }
        Ok(())
    }
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryContactStore {
    contacts: RwLock<HashMap<String, Contact>>,
}

impl MemoryContactStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_contacts(contacts: impl IntoIterator<Item = Contact>) -> Self {
        let map = contacts.into_iter().map(|c| (c.id.clone(), c)).collect();
        Self { contacts: RwLock::new(map) }
    }

    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn list(&self, query: Option<&str>) -> Result<Vec<Contact>, ContactError> {
        let needle = normalize_query(query);
        let contacts = self.contacts.read().await;
        let mut out: Vec<Contact> = contacts
            .values()
            .filter(|c| needle.as_deref().is_none_or(|n| c.matches(n)))
            .cloned()
            .collect();
        sort_contacts(&mut out);
        Ok(out)
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>, ContactError> {
        Ok(self.contacts.read().await.get(id).cloned())
    }

    async fn create_empty(&self) -> Result<Contact, ContactError> {
        let contact = Contact::empty();
        self.contacts
            .write()
            .await
            .insert(contact.id.clone(), contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: &str, update: ContactUpdate) -> Result<Contact, ContactError> {
        let mut contacts = self.contacts.write().await;
        let contact = contacts
            .get_mut(id)
            .ok_or_else(|| ContactError::NotFound(id.to_owned()))?;
        contact.apply(update);
        Ok(contact.clone())
    }

    async fn set_favorite(&self, id: &str, favorite: bool) -> Result<Contact, ContactError> {
        let mut contacts = self.contacts.write().await;
        let contact = contacts
            .get_mut(id)
            .ok_or_else(|| ContactError::NotFound(id.to_owned()))?;
        contact.favorite = favorite;
        Ok(contact.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ContactError> {
        self.contacts
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ContactError::NotFound(id.to_owned()))
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
