//! The contact directory.
//!
//! This module owns the authoritative mapping from email address to
//! [`Contact`] and keeps the persisted copy consistent with the in-memory
//! copy after every mutation. Persistence is a full JSON snapshot of the
//! whole mapping written under a single storage key; there is no incremental
//! update path.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::contact::Contact;
use crate::error::Result;
use crate::storage::Storage;

/// Storage key under which the directory snapshot is persisted.
pub const STORAGE_KEY: &str = "users";

/// Outcome of an upsert: whether the email was new or already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A new entry was created under the email.
    Inserted,
    /// An existing entry's fields were replaced.
    Updated,
}

/// The authoritative email → contact mapping.
///
/// A `Directory` owns the [`Storage`] handle it persists into, so every
/// mutation anywhere in the program goes through the same store and the
/// persisted copy can never diverge from the in-memory one. Insertion order
/// is preserved by the mapping and defines display order.
///
/// Mutations rewrite the full snapshot synchronously before returning. When
/// a removal empties the mapping, and on [`clear`](Self::clear), the
/// persisted key is deleted entirely rather than set to an empty object.
#[derive(Debug)]
pub struct Directory {
    store: Storage,
    contacts: IndexMap<String, Contact>,
}

impl Directory {
    /// Load the directory from the given store.
    ///
    /// An absent key yields an empty directory; that is the normal first-run
    /// state, not an error. A present but unparseable snapshot also yields an
    /// empty directory, with a warning logged; corrupt data is discarded
    /// rather than propagated.
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage read itself fails.
    pub fn load(store: Storage) -> Result<Self> {
        let contacts = match store.get(STORAGE_KEY)? {
            None => {
                debug!("no stored directory; starting empty");
                IndexMap::new()
            }
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(contacts) => contacts,
                Err(err) => {
                    warn!("stored directory snapshot is not valid JSON, starting empty: {err}");
                    IndexMap::new()
                }
            },
        };

        Ok(Self { store, contacts })
    }

    /// Insert a contact, or replace the entry already stored under its email.
    ///
    /// Callers are expected to submit only complete records (all four fields
    /// non-empty); the directory does not re-validate. Replacing an entry
    /// keeps its position in display order. The full snapshot is rewritten
    /// before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be encoded or written.
    pub fn upsert(&mut self, contact: Contact) -> Result<Upsert> {
        let outcome = if self.contacts.contains_key(&contact.email) {
            Upsert::Updated
        } else {
            Upsert::Inserted
        };

        self.contacts.insert(contact.email.clone(), contact);
        self.persist()?;
        Ok(outcome)
    }

    /// Remove the entry stored under `email`.
    ///
    /// Returns `false` without touching storage when the email is unknown.
    /// When the removal empties the mapping the persisted key is deleted
    /// entirely; otherwise the remaining snapshot is rewritten.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub fn remove(&mut self, email: &str) -> Result<bool> {
        if self.contacts.shift_remove(email).is_none() {
            return Ok(false);
        }

        if self.contacts.is_empty() {
            self.store.remove(STORAGE_KEY)?;
        } else {
            self.persist()?;
        }
        Ok(true)
    }

    /// Discard every contact and delete the persisted key unconditionally.
    ///
    /// Callers re-render their projection afterwards; no reload is involved.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear(&mut self) -> Result<()> {
        self.contacts.clear();
        self.store.remove(STORAGE_KEY)?;
        Ok(())
    }

    /// Look up a contact by email.
    #[must_use]
    pub fn get(&self, email: &str) -> Option<&Contact> {
        self.contacts.get(email)
    }

    /// Check whether an entry exists under `email`.
    #[must_use]
    pub fn contains(&self, email: &str) -> bool {
        self.contacts.contains_key(email)
    }

    /// Number of stored contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Check whether the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterate over contacts in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    /// The full mapping, in display order.
    #[must_use]
    pub fn contacts(&self) -> &IndexMap<String, Contact> {
        &self.contacts
    }

    /// Give the storage handle back, discarding the in-memory mapping.
    ///
    /// Used by tests to simulate a restart against the same store.
    #[must_use]
    pub fn into_storage(self) -> Storage {
        self.store
    }

    fn persist(&self) -> Result<()> {
        let snapshot = serde_json::to_string(&self.contacts)?;
        self.store.set(STORAGE_KEY, &snapshot)
    }
}
