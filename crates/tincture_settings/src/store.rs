//! # Settings Store
//!
//! TOML-backed settings source with live reload.
//!
//! Keys are dotted paths into the document: `"hud.accent"` is the `accent`
//! entry of the `[hud]` table.
//!
//! ```toml
//! accent = 0xFF0000FF
//!
//! [hud]
//! background = [0, 0, 0, 200]
//! highlight = [0.2, 0.4, 0.6, 0.8]
//! ```
//!
//! Listeners run on the thread that called [`SettingsStore::set_value`] or
//! [`SettingsStore::reload_from_str`], after the document lock is released.
//! Writes and their notifications are serialized, so listeners see changes
//! in the order they were written. A listener must not write to the store
//! or register new listeners on it.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use parking_lot::{Mutex, RwLock};
use toml::{Table, Value};

use crate::error::{SettingsError, SettingsResult};
use crate::source::{ChangeListener, ListenerShape, SettingsSource};

/// A settings document plus the listeners watching its keys.
pub struct SettingsStore {
    /// Callback shape this store accepts; `None` never notifies.
    shape: Option<ListenerShape>,
    /// Current document.
    document: RwLock<Table>,
    /// Listeners by key.
    listeners: Mutex<HashMap<String, Vec<ChangeListener>>>,
    /// Held from a write until its listeners have run.
    write_order: Mutex<()>,
}

impl SettingsStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(shape: Option<ListenerShape>) -> Self {
        Self::with_document(Table::new(), shape)
    }

    /// Parses a store from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] if `text` is not valid TOML.
    pub fn from_toml_str(text: &str, shape: Option<ListenerShape>) -> SettingsResult<Self> {
        let document: Table = toml::from_str(text)?;
        Ok(Self::with_document(document, shape))
    }

    /// Loads a store from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] if the file cannot be read and
    /// [`SettingsError::Parse`] if it is not valid TOML.
    pub fn load(path: impl AsRef<Path>, shape: Option<ListenerShape>) -> SettingsResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text, shape)
    }

    fn with_document(document: Table, shape: Option<ListenerShape>) -> Self {
        Self {
            shape,
            document: RwLock::new(document),
            listeners: Mutex::new(HashMap::new()),
            write_order: Mutex::new(()),
        }
    }

    /// Returns a copy of the value at `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<Value> {
        lookup(&self.document.read(), key).cloned()
    }

    /// Sets `key`, creating intermediate tables as needed.
    ///
    /// Listeners of `key` are notified with `(old, new)` only if the value
    /// actually changed. Returns whether it changed.
    pub fn set_value(&self, key: &str, value: impl Into<Value>) -> bool {
        let new = value.into();
        let _order = self.write_order.lock();
        let old = {
            let mut document = self.document.write();
            let old = lookup(&document, key).cloned();
            if old.as_ref() == Some(&new) {
                return false;
            }
            insert(&mut document, key, new.clone());
            old
        };
        self.notify(key, old.as_ref(), &new);
        true
    }

    /// Replaces the whole document with `text`.
    ///
    /// Every watched key whose value changed is notified. Keys that were
    /// removed are not. Returns the number of keys notified.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] if `text` is not valid TOML; the
    /// current document is kept.
    pub fn reload_from_str(&self, text: &str) -> SettingsResult<usize> {
        let fresh: Table = toml::from_str(text)?;
        let _order = self.write_order.lock();
        let previous = std::mem::replace(&mut *self.document.write(), fresh);

        let watched: Vec<String> = self.listeners.lock().keys().cloned().collect();
        let changes: Vec<(String, Option<Value>, Value)> = {
            let document = self.document.read();
            watched
                .into_iter()
                .filter_map(|key| {
                    let new = lookup(&document, &key)?;
                    let old = lookup(&previous, &key);
                    (old != Some(new)).then(|| (key, old.cloned(), new.clone()))
                })
                .collect()
        };

        for (key, old, new) in &changes {
            self.notify(key, old.as_ref(), new);
        }

        tracing::info!(notified = changes.len(), "settings reloaded");
        Ok(changes.len())
    }

    /// Reloads the document from a TOML file. See [`reload_from_str`](Self::reload_from_str).
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] or [`SettingsError::Parse`]; the current
    /// document is kept.
    pub fn reload(&self, path: impl AsRef<Path>) -> SettingsResult<usize> {
        let text = fs::read_to_string(path)?;
        self.reload_from_str(&text)
    }

    /// Total number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().values().map(Vec::len).sum()
    }

    fn notify(&self, key: &str, old: Option<&Value>, new: &Value) {
        if let Some(listeners) = self.listeners.lock().get_mut(key) {
            for listener in listeners {
                listener.notify(old, new);
            }
        }
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("shape", &self.shape)
            .field("keys", &self.document.read().len())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl SettingsSource for SettingsStore {
    fn current_value(&self, key: &str) -> Option<Value> {
        self.value(key)
    }

    fn listener_shape(&self) -> Option<ListenerShape> {
        self.shape
    }

    fn register_listener(&self, key: &str, listener: ChangeListener) -> SettingsResult<()> {
        if self.shape != Some(listener.shape()) {
            return Err(SettingsError::UnsupportedListener { key: key.to_string() });
        }
        self.listeners
            .lock()
            .entry(key.to_string())
            .or_default()
            .push(listener);
        Ok(())
    }
}

/// Follows a dotted key through nested tables.
fn lookup<'a>(table: &'a Table, key: &str) -> Option<&'a Value> {
    let mut segments = key.split('.');
    let first = table.get(segments.next()?)?;
    segments.try_fold(first, |value, segment| value.get(segment))
}

/// Writes a dotted key, replacing any non-table value on the way.
fn insert(table: &mut Table, key: &str, value: Value) {
    let mut segments: Vec<&str> = key.split('.').collect();
    let Some(last) = segments.pop() else {
        return;
    };

    let mut current = table;
    for segment in segments {
        let entry = current
            .entry(segment.to_string())
            .or_insert(Value::Table(Table::new()));
        if !entry.is_table() {
            *entry = Value::Table(Table::new());
        }
        let Some(next) = entry.as_table_mut() else {
            return;
        };
        current = next;
    }
    current.insert(last.to_string(), value);
}
