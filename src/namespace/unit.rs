//! Namespace units: the symbol tables components register into.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Prefix marking a symbol as implementation-private.
pub const PRIVATE_PREFIX: char = '_';

/// Absolute path of the source file the macro is invoked from.
///
/// Intended for `NamespaceUnit::with_origin` so a component records where it
/// was defined.
#[macro_export]
macro_rules! source_origin {
    () => {
        $crate::namespace::unit::locate_source(
            ::std::path::Path::new(env!("CARGO_MANIFEST_DIR")),
            file!(),
        )
    };
}

/// Absolute path of a `file!()` value compiled from the package at `manifest_dir`.
///
/// Inside a workspace `file!()` is relative to the workspace root rather than
/// the package, so the first ancestor of `manifest_dir` under which the file
/// exists is used. Falls back to joining onto `manifest_dir`.
pub fn locate_source(manifest_dir: &Path, file: &str) -> PathBuf {
    let file = Path::new(file);
    if file.is_absolute() {
        return file.to_path_buf();
    }

    manifest_dir
        .ancestors()
        .map(|dir| dir.join(file))
        .find(|candidate| candidate.is_file())
        .unwrap_or_else(|| manifest_dir.join(file))
}

/// A unit of components addressed by a full namespace path.
///
/// Symbols are stored behind `Arc` so lookups hand out the shared handle
/// rather than a copy.
pub struct NamespaceUnit<T> {
    path: String,
    origin: Option<PathBuf>,
    symbols: HashMap<String, Arc<T>>,
}

impl<T> NamespaceUnit<T> {
    /// Create an empty unit with no origin file.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            origin: None,
            symbols: HashMap::new(),
        }
    }

    /// Record the file this unit was defined in.
    pub fn with_origin(mut self, origin: impl Into<PathBuf>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Add a symbol, taking ownership of its value.
    pub fn with_symbol(self, name: impl Into<String>, value: T) -> Self {
        self.with_shared_symbol(name, Arc::new(value))
    }

    /// Add a symbol whose handle is already shared elsewhere (re-exports).
    pub fn with_shared_symbol(mut self, name: impl Into<String>, value: Arc<T>) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind `name` to `value`, returning the previous binding if any.
    pub fn insert(&mut self, name: impl Into<String>, value: Arc<T>) -> Option<Arc<T>> {
        self.symbols.insert(name.into(), value)
    }

    pub(crate) fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains_key(symbol)
    }

    pub fn get(&self, symbol: &str) -> Option<&Arc<T>> {
        self.symbols.get(symbol)
    }

    /// Sorted names not starting with `_`.
    pub fn public_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .symbols
            .keys()
            .map(String::as_str)
            .filter(|name| !name.starts_with(PRIVATE_PREFIX))
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<T> fmt::Debug for NamespaceUnit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamespaceUnit")
            .field("path", &self.path)
            .field("origin", &self.origin)
            .field("symbols", &self.public_names())
            .finish()
    }
}
