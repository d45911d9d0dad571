use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Abstraction over the browser's `localStorage`: a flat string-to-string
/// map with whole-value reads and writes. An absent key is `Ok(None)`,
/// never an error.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("Failed to read the persisted state.")]
    Read(#[source] std::io::Error),
    #[error("Failed to write the persisted state.")]
    Write(#[source] std::io::Error),
    #[error("Failed to serialize the persisted state.")]
    Serialization(#[from] serde_json::Error),
}

/// In-memory storage, used as the injected test double and by short-lived
/// demo sessions.
#[derive(Default)]
pub struct InMemoryStorage {
    inner: Mutex<BTreeMap<String, String>>,
}

impl Storage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.inner.lock().expect("storage lock poisoned");
        Ok(inner.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().expect("storage lock poisoned");
        inner.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().expect("storage lock poisoned");
        inner.remove(key);
        Ok(())
    }
}

/// File-backed storage: a single JSON object rewritten in full on every
/// mutation. Mirrors `localStorage` semantics, including surviving page
/// loads and degrading to an empty map when the backing file is missing
/// or unreadable as JSON.
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StorageError::Read(e)),
        };
        match serde_json::from_str(&raw) {
            Ok(map) => Ok(map),
            Err(e) => {
                tracing::warn!(
                    error.message = %e,
                    path = %self.path.display(),
                    "Persisted state is not valid JSON; treating it as empty."
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn save(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let raw = serde_json::to_string(map)?;
        std::fs::write(&self.path, raw).map_err(StorageError::Write)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().expect("storage lock poisoned");
        Ok(self.load()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().expect("storage lock poisoned");
        let mut map = self.load()?;
        map.insert(key.to_string(), value.to_string());
        self.save(&map)
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().expect("storage lock poisoned");
        let mut map = self.load()?;
        map.remove(key);
        self.save(&map)
    }
}
