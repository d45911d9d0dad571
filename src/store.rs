use std::sync::Arc;

use crate::domain::{normalize_email, Preferences};
use crate::storage::{Storage, StorageError};

/// The simulated newsletter backend: a list of normalized email addresses
/// persisted under a single storage key. Every mutation rewrites the whole
/// list; the expected cardinality is tiny and the storage is client-local.
#[derive(Clone)]
pub struct SubscriberStore {
    storage: Arc<dyn Storage>,
    key: String,
}

impl SubscriberStore {
    pub fn new(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Membership check under normalization. Absent or unreadable storage
    /// counts as an empty list.
    pub fn contains(&self, email: &str) -> bool {
        let needle = normalize_email(email);
        self.read().iter().any(|entry| entry == &needle)
    }

    /// Append the normalized address if it is not already present.
    /// Adding a member twice leaves the list unchanged.
    pub fn add(&self, email: &str) -> Result<(), StorageError> {
        let normalized = normalize_email(email);
        let mut subscribers = self.read();
        if subscribers.iter().any(|entry| entry == &normalized) {
            return Ok(());
        }
        subscribers.push(normalized);
        self.write(&subscribers)
    }

    /// Filter the normalized address out. Removing a non-member is a no-op.
    pub fn remove(&self, email: &str) -> Result<(), StorageError> {
        let normalized = normalize_email(email);
        let mut subscribers = self.read();
        subscribers.retain(|entry| entry != &normalized);
        self.write(&subscribers)
    }

    pub fn count(&self) -> usize {
        self.read().len()
    }

    fn read(&self) -> Vec<String> {
        match self.storage.get(&self.key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(
                    error.message = %e,
                    "Subscriber list is not valid JSON; treating it as empty."
                );
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(
                    error.message = %e,
                    "Failed to read the subscriber list; treating it as empty."
                );
                Vec::new()
            }
        }
    }

    fn write(&self, subscribers: &[String]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(subscribers)?;
        self.storage.put(&self.key, &raw)
    }
}

/// Preference records are saved wholesale and read back with defaults when
/// absent or corrupt.
#[derive(Clone)]
pub struct PreferenceStore {
    storage: Arc<dyn Storage>,
    key: String,
}

impl PreferenceStore {
    pub fn new(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn load(&self) -> Preferences {
        match self.storage.get(&self.key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Preferences::default(),
        }
    }

    pub fn save(&self, preferences: &Preferences) -> Result<(), StorageError> {
        let raw = serde_json::to_string(preferences)?;
        self.storage.put(&self.key, &raw)
    }
}
