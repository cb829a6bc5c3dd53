//! Namespace registry: the table components register themselves into.
//!
//! Units are registered at startup as builders keyed by their full namespace
//! path and built lazily the first time they are loaded. Every later load of
//! the same path returns the same cached `Arc`.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use thiserror::Error;

use crate::error::{Error, Result};
use crate::namespace::unit::NamespaceUnit;

/// Failure reported by a namespace loader.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Nothing is registered at the requested path
    #[error("No namespace registered at '{0}'")]
    NotRegistered(String),
}

/// Source of namespace units, keyed by full namespace path.
///
/// Implementations must be idempotent: loading the same path twice returns
/// the same unit. A loaded unit with no symbols is a success, not a failure.
pub trait NamespaceLoader<T> {
    fn load(&self, full_path: &str) -> std::result::Result<Arc<NamespaceUnit<T>>, LoadError>;
}

type Builder<T> = Box<dyn FnOnce() -> NamespaceUnit<T> + Send>;

struct Slot<T> {
    /// Taken on first build so captured state is released afterwards
    builder: Mutex<Option<Builder<T>>>,
    unit: OnceLock<Arc<NamespaceUnit<T>>>,
}

impl<T> Slot<T> {
    fn get_or_build(&self, path: &str) -> &Arc<NamespaceUnit<T>> {
        self.unit.get_or_init(|| {
            let builder = self
                .builder
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take();
            let mut unit = match builder {
                Some(builder) => builder(),
                None => {
                    log::warn!("Builder for namespace '{}' already ran without producing a unit", path);
                    NamespaceUnit::new(path)
                }
            };
            // The registered key is authoritative
            if unit.path() != path {
                log::warn!(
                    "Namespace registered at '{}' built a unit named '{}'",
                    path,
                    unit.path()
                );
                unit.set_path(path);
            }
            log::debug!("Loaded namespace '{}' ({} symbols)", path, unit.len());
            Arc::new(unit)
        })
    }
}

/// Registry of namespace units.
pub struct NamespaceRegistry<T> {
    slots: HashMap<String, Slot<T>>,
}

impl<T> NamespaceRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Register a lazily built unit at `path`.
    ///
    /// `builder` runs at most once, on the first `load` of `path`, and is
    /// dropped right after. The unit is addressed by `path` even if the
    /// builder names it differently.
    pub fn register<F>(&mut self, path: impl Into<String>, builder: F) -> Result<()>
    where
        F: FnOnce() -> NamespaceUnit<T> + Send + 'static,
    {
        let path = path.into();
        if self.slots.contains_key(&path) {
            return Err(Error::DuplicateNamespace(path));
        }

        self.slots.insert(
            path,
            Slot {
                builder: Mutex::new(Some(Box::new(builder))),
                unit: OnceLock::new(),
            },
        );
        Ok(())
    }

    /// Register an already built unit under its own path.
    pub fn register_unit(&mut self, unit: NamespaceUnit<T>) -> Result<()> {
        let path = unit.path().to_string();
        if self.slots.contains_key(&path) {
            return Err(Error::DuplicateNamespace(path));
        }

        self.slots.insert(
            path,
            Slot {
                builder: Mutex::new(None),
                unit: OnceLock::from(Arc::new(unit)),
            },
        );
        Ok(())
    }

    /// Whether a unit is registered at `path`, built or not.
    pub fn contains(&self, path: &str) -> bool {
        self.slots.contains_key(path)
    }

    /// Whether the unit at `path` has been built.
    pub fn is_loaded(&self, path: &str) -> bool {
        self.slots
            .get(path)
            .is_some_and(|slot| slot.unit.get().is_some())
    }

    /// Sorted list of registered namespace paths.
    pub fn namespaces(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.slots.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T> NamespaceLoader<T> for NamespaceRegistry<T> {
    fn load(&self, full_path: &str) -> std::result::Result<Arc<NamespaceUnit<T>>, LoadError> {
        self.slots
            .get(full_path)
            .map(|slot| Arc::clone(slot.get_or_build(full_path)))
            .ok_or_else(|| LoadError::NotRegistered(full_path.to_string()))
    }
}

impl<T> Default for NamespaceRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for NamespaceRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamespaceRegistry")
            .field("namespaces", &self.namespaces())
            .finish()
    }
}
