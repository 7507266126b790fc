//! Persisting [`CalculatorState`] in a key-value store.
//!
//! Storage problems never reach the caller: saving logs and carries on, and loading treats
//! anything it cannot use as "nothing saved".

use crate::state::{CalculatorState, HistoryItem, Theme};
use anyhow::{bail, Context, Result};
use log::{error, warn};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The key the calculator state is stored under.
pub const STORAGE_KEY: &str = "calc_app_v1";

const REQUIRED_FIELDS: [&str; 5] = ["expression", "currentNumber", "result", "history", "theme"];

/// A string-to-string store.
pub trait StateStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Keeps every key in its own `<key>.json` file inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    pub fn new(directory: impl Into<PathBuf>) -> FileStore {
        FileStore {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_of(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{}.json", key))
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_of(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => {
                Err(error).with_context(|| format!("Could not read {}", path.display()))
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.directory)
            .with_context(|| format!("Could not create {}", self.directory.display()))?;
        let path = self.path_of(key);
        fs::write(&path, value).with_context(|| format!("Could not write {}", path.display()))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_of(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => {
                Err(error).with_context(|| format!("Could not remove {}", path.display()))
            }
        }
    }
}

/// Saves and loads the calculator state under [`STORAGE_KEY`].
pub struct StorageService<S: StateStore> {
    store: S,
}

impl<S: StateStore> StorageService<S> {
    pub fn new(store: S) -> StorageService<S> {
        StorageService { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save_state(&mut self, state: &CalculatorState) {
        if let Err(error) = self.try_save_state(state) {
            error!("Failed to save calculator state: {:#}", error);
        }
    }

    /// The saved state, or `None` if nothing usable is stored.
    pub fn load_state(&self) -> Option<CalculatorState> {
        match self.try_load_state() {
            Ok(state) => state,
            Err(error) => {
                warn!("Ignoring stored calculator state: {:#}", error);
                None
            }
        }
    }

    pub fn clear_state(&mut self) {
        if let Err(error) = self.store.remove(STORAGE_KEY) {
            error!("Failed to clear calculator state: {:#}", error);
        }
    }

    fn try_save_state(&mut self, state: &CalculatorState) -> Result<()> {
        let serialized = serde_json::to_string(state).context("Could not serialize state")?;
        self.store.set(STORAGE_KEY, &serialized)
    }

    fn try_load_state(&self) -> Result<Option<CalculatorState>> {
        let serialized = match self.store.get(STORAGE_KEY)? {
            Some(serialized) if !serialized.is_empty() => serialized,
            _ => return Ok(None),
        };
        let mut parsed: Value =
            serde_json::from_str(&serialized).context("Stored state is not JSON")?;
        validate_state(&parsed)?;
        let history = std::mem::replace(&mut parsed["history"], Value::Array(Vec::new()));
        let mut state: CalculatorState =
            serde_json::from_value(parsed).context("Stored state has malformed fields")?;
        state.history = read_history(history);
        Ok(Some(state))
    }
}

/// The usable entries of a stored history; malformed entries are skipped.
fn read_history(history: Value) -> Vec<HistoryItem> {
    let items = match history {
        Value::Array(items) => items,
        _ => return Vec::new(),
    };
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(item) => Some(item),
            Err(error) => {
                warn!("Skipping malformed history entry: {}", error);
                None
            }
        })
        .collect()
}

/// Checks that a stored record has every required field with the right type.
fn validate_state(data: &Value) -> Result<()> {
    let record = match data.as_object() {
        Some(record) => record,
        None => bail!("Stored state is not an object"),
    };
    if let Some(missing) = REQUIRED_FIELDS
        .iter()
        .find(|field| !record.contains_key(**field))
    {
        bail!("Stored state is missing '{}'", missing);
    }

    if !record["expression"].is_string() {
        bail!("'expression' is not a string");
    }
    if !record["currentNumber"].is_string() {
        bail!("'currentNumber' is not a string");
    }
    if !(record["result"].is_null() || record["result"].is_string()) {
        bail!("'result' is neither a string nor null");
    }
    if !record["history"].is_array() {
        bail!("'history' is not an array");
    }
    let theme = record["theme"].as_str().unwrap_or_default();
    if !Theme::ALL.iter().any(|known| known.name() == theme) {
        bail!("Unknown theme {}", record["theme"]);
    }
    Ok(())
}
