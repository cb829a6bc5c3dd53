//! Component name resolution.
//!
//! Turns a qualified name such as `losses@ACTLossHead` into the handle
//! registered for it:
//! 1. Parse the name into a namespace path and symbol
//! 2. Prepend the prefix to get the full namespace path
//! 3. Load the unit at that path
//! 4. Look the symbol up in the unit

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ResolverConfig;
use crate::error::{Error, Result};
use crate::name::QualifiedName;
use crate::namespace::registry::NamespaceLoader;

/// Where the unit providing a component was defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// Unit found, defined in this (absolute) file
    File(PathBuf),
    /// Unit found but it has no origin file
    Synthetic,
    /// No unit at the computed path
    Absent,
}

impl SourceLocation {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Synthetic | Self::Absent => None,
        }
    }

    pub fn into_path(self) -> Option<PathBuf> {
        match self {
            Self::File(path) => Some(path),
            Self::Synthetic | Self::Absent => None,
        }
    }

    /// Whether a unit exists at the computed path.
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// Resolves qualified names against a namespace loader.
///
/// Holds no state besides its configuration; every call parses and loads
/// independently.
pub struct Resolver<'a, L: ?Sized> {
    loader: &'a L,
    config: ResolverConfig,
}

impl<'a, L: ?Sized> Resolver<'a, L> {
    /// Create a resolver using the `models.` root prefix.
    pub fn new(loader: &'a L) -> Self {
        Self::with_config(loader, ResolverConfig::default())
    }

    pub fn with_config(loader: &'a L, config: ResolverConfig) -> Self {
        Self { loader, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `name` under the configured default prefix.
    pub fn resolve_type<T>(&self, name: &str) -> Result<Arc<T>>
    where
        L: NamespaceLoader<T>,
    {
        self.resolve_type_with_prefix(name, &self.config.default_prefix)
    }

    /// Resolve `name` under `prefix` (`""` uses the path as-is).
    ///
    /// # Arguments
    /// * `name` - `path@Symbol`, or a bare `Symbol` whose path is its lowercase
    /// * `prefix` - prepended verbatim, so include the trailing `.`
    pub fn resolve_type_with_prefix<T>(&self, name: &str, prefix: &str) -> Result<Arc<T>>
    where
        L: NamespaceLoader<T>,
    {
        let qualified = QualifiedName::parse(name);
        let full_path = qualified.full_path(prefix);

        let unit = self
            .loader
            .load(&full_path)
            .map_err(|source| Error::NamespaceNotFound {
                name: name.to_string(),
                prefix: prefix.to_string(),
                full_path: full_path.clone(),
                symbol: qualified.symbol.clone(),
                source,
            })?;

        match unit.get(&qualified.symbol) {
            Some(symbol) => {
                log::debug!("Resolved '{}' to '{}@{}'", name, full_path, qualified.symbol);
                Ok(Arc::clone(symbol))
            }
            None => Err(Error::SymbolNotFound {
                available: unit.public_names().into_iter().map(String::from).collect(),
                full_path,
                symbol: qualified.symbol,
            }),
        }
    }

    /// Origin of the unit `name` resolves to, under the default prefix.
    pub fn resolve_source_location<T>(&self, name: &str) -> SourceLocation
    where
        L: NamespaceLoader<T>,
    {
        self.resolve_source_location_with_prefix(name, &self.config.default_prefix)
    }

    /// Origin of the unit `name` resolves to, under `prefix`.
    ///
    /// Never fails: a missing namespace is reported as `SourceLocation::Absent`.
    /// The symbol itself is not looked up.
    pub fn resolve_source_location_with_prefix<T>(&self, name: &str, prefix: &str) -> SourceLocation
    where
        L: NamespaceLoader<T>,
    {
        let full_path = QualifiedName::parse(name).full_path(prefix);

        let unit = match self.loader.load(&full_path) {
            Ok(unit) => unit,
            Err(e) => {
                log::debug!("No source location for '{}': {}", name, e);
                return SourceLocation::Absent;
            }
        };

        let Some(origin) = unit.origin() else {
            return SourceLocation::Synthetic;
        };

        match self.config.absolutize(origin) {
            Ok(path) => SourceLocation::File(path),
            Err(e) => {
                log::warn!(
                    "Could not make origin {:?} of '{}' absolute: {}",
                    origin,
                    full_path,
                    e
                );
                SourceLocation::Synthetic
            }
        }
    }
}
