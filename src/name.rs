//! Qualified component names.
//!
//! A qualified name is either `path@Symbol` or a bare `Symbol`:
//! - `urm.urm@URM` -> path `urm.urm`, symbol `URM`
//! - `a@b@C` -> path `a@b`, symbol `C` (split on the last `@`)
//! - `ARC` -> path `arc`, symbol `ARC`

use std::fmt;

/// Separator between namespace path and symbol.
pub const SYMBOL_SEPARATOR: char = '@';

/// A parsed `(namespace path, symbol)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub path: String,
    pub symbol: String,
}

impl QualifiedName {
    /// Parse a qualified name. Parsing never fails.
    pub fn parse(name: &str) -> Self {
        match name.rsplit_once(SYMBOL_SEPARATOR) {
            Some((path, symbol)) => Self {
                path: path.to_string(),
                symbol: symbol.to_string(),
            },
            None => Self {
                path: name.to_lowercase(),
                symbol: name.to_string(),
            },
        }
    }

    /// Build the full namespace path by prepending `prefix` verbatim.
    ///
    /// No separator is inserted; an empty prefix leaves the path unchanged.
    pub fn full_path(&self, prefix: &str) -> String {
        if prefix.is_empty() {
            self.path.clone()
        } else {
            format!("{}{}", prefix, self.path)
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.path, SYMBOL_SEPARATOR, self.symbol)
    }
}
