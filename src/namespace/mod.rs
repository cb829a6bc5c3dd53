//! Namespace units, their registry, and name resolution.

pub mod registry;
pub mod resolver;
pub mod unit;

pub use registry::{LoadError, NamespaceLoader, NamespaceRegistry};
pub use resolver::{Resolver, SourceLocation};
pub use unit::NamespaceUnit;
