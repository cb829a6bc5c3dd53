//! Component resolver - map configuration names like `urm.urm@URM` to the
//! component implementations registered under predictable namespaces.

mod defaults;
pub mod config;
pub mod error;

pub mod name;
pub mod namespace;

pub use error::{Error, Result};

pub use config::ResolverConfig;
pub use defaults::{DEFAULT_PREFIX, EVALUATORS_PREFIX, MODELS_PREFIX};
pub use name::QualifiedName;
pub use namespace::registry::{LoadError, NamespaceLoader, NamespaceRegistry};
pub use namespace::resolver::{Resolver, SourceLocation};
pub use namespace::unit::NamespaceUnit;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
