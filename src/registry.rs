//! The class registry: explicit ownership of per-class caches.
//!
//! Classes are registered once, up front, and are immutable afterwards.
//! Property tables and member tests are computed lazily on first query and
//! memoized for the lifetime of the registry. Fills go through a
//! once-per-key compute-and-swap under a write lock; every later query takes
//! the read path only.

use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::dispatch::event::is_event_name;
use crate::error::{MagusError, Result};
use crate::metadata::class::ClassMetadata;
use crate::property::descriptor::PropertyTable;
use crate::property::resolver::resolve;

/// Registry of class metadata and the caches derived from it.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: RwLock<AHashMap<String, Arc<ClassMetadata>>>,
    tables: RwLock<AHashMap<String, Arc<PropertyTable>>>,
    field_tests: RwLock<AHashMap<(String, String), bool>>,
    event_tests: RwLock<AHashMap<(String, String), bool>>,
}

impl ClassRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class. Registration is the only mutation the registry
    /// supports; registering the same name twice is an error.
    pub fn register(&self, class: ClassMetadata) -> Result<()> {
        let mut classes = self.classes.write();
        if classes.contains_key(class.name()) {
            return Err(MagusError::metadata(format!(
                "Class '{}' is already registered",
                class.name()
            )));
        }
        classes.insert(class.name().to_string(), Arc::new(class));
        Ok(())
    }

    /// Look up a registered class.
    pub fn class(&self, name: &str) -> Result<Arc<ClassMetadata>> {
        self.classes
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| MagusError::unknown_class(name))
    }

    /// Registered class names, sorted.
    pub fn class_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.classes.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Get the virtual-property table of a class, resolving it on first use.
    ///
    /// Repeated calls return the identical cached table.
    pub fn properties(&self, class_name: &str) -> Result<Arc<PropertyTable>> {
        if let Some(table) = self.tables.read().get(class_name) {
            return Ok(table.clone());
        }

        let class = self.class(class_name)?;
        let table = Arc::new(resolve(&class));

        // Another thread may have filled the slot in the meantime; the first
        // writer wins and everyone shares its table.
        let mut tables = self.tables.write();
        Ok(tables
            .entry(class_name.to_string())
            .or_insert(table)
            .clone())
    }

    /// Check for a declared public non-static instance field.
    pub fn has_field(&self, class_name: &str, name: &str) -> Result<bool> {
        let key = (class_name.to_string(), name.to_string());
        if let Some(&known) = self.field_tests.read().get(&key) {
            return Ok(known);
        }

        let class = self.class(class_name)?;
        let has = class.has_public_field(name);
        self.field_tests.write().entry(key).or_insert(has);
        Ok(has)
    }

    /// Check whether a name is an event property of a class: a declared
    /// public non-static field with an event-shaped name (`onSave`).
    pub fn is_event_property(&self, class_name: &str, name: &str) -> Result<bool> {
        let key = (class_name.to_string(), name.to_string());
        if let Some(&known) = self.event_tests.read().get(&key) {
            return Ok(known);
        }

        let class = self.class(class_name)?;
        let is_event = class.has_public_field(name) && is_event_name(name);
        self.event_tests.write().entry(key).or_insert(is_event);
        Ok(is_event)
    }
}
