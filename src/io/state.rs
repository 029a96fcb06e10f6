use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the persisted key-value state inside the state directory
pub const STATE_FILE: &str = "state.json";

/// Error type for state persistence
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize state: {0}")]
    SerializeError(#[from] serde_json::Error),
    #[error("could not replace {path}: {source}")]
    PersistError {
        path: PathBuf,
        source: tempfile::PersistError,
    },
    #[error("state store is read-only")]
    ReadOnly,
}

/// Durable string key-value storage
pub trait KeyValueStore {
    /// Value stored under `key`; unreadable state counts as absent
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StateError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StateError> {
        (**self).set(key, value)
    }
}

/// Key-value state kept as a flat JSON object in `<dir>/state.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileStore { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(STATE_FILE)
    }

    fn read_all(&self) -> Option<BTreeMap<String, String>> {
        read_state(&self.dir)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all()?.remove(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StateError> {
        let mut all = self.read_all().unwrap_or_default();
        all.insert(key.to_string(), value.to_string());
        write_state(&self.dir, &all)
    }
}

/// Read `state.json` from the state directory
pub fn read_state(dir: &Path) -> Option<BTreeMap<String, String>> {
    let content = fs::read_to_string(dir.join(STATE_FILE)).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write `state.json` atomically (temp file in the same directory, then rename)
pub fn write_state(dir: &Path, state: &BTreeMap<String, String>) -> Result<(), StateError> {
    let path = dir.join(STATE_FILE);
    let write_err = |source| StateError::WriteError {
        path: path.clone(),
        source,
    };
    fs::create_dir_all(dir).map_err(write_err)?;
    let content = serde_json::to_string_pretty(state)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.persist(&path)
        .map_err(|source| StateError::PersistError {
            path: path.clone(),
            source,
        })?;
    Ok(())
}

/// In-memory store, optionally refusing writes
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// A store whose writes always fail
    pub fn read_only() -> Self {
        MemoryStore {
            values: HashMap::new(),
            read_only: true,
        }
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StateError> {
        if self.read_only {
            return Err(StateError::ReadOnly);
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
