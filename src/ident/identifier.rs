//! The `Identifier` key type and its normalization rules.
//!
//! Rules enforced here:
//! - ASCII only, lowercase alphanumerics plus `_`, `-`, `.` in the
//!   namespace; the same set plus `/` in the path
//! - input is trimmed before parsing; empty input is rejected
//! - a missing namespace defaults to [`DEFAULT_NAMESPACE`]
//! - the input splits on the FIRST `:`; any further `:` lands in the
//!   path, which rejects it as an illegal character (so `a:b:c` never
//!   parses)

use std::fmt;

/// Namespace used when the raw input carries none.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A validated `namespace:path` block identifier.
///
/// Construction goes through [`Identifier::normalize`], so every live
/// value satisfies the character rules above. Listing order is defined
/// on the canonical string form, not on this struct, so no `Ord` here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    /// Parses and normalizes a raw user string into an identifier.
    ///
    /// Returns `None` when the trimmed input is empty or contains a
    /// character outside the allowed set. An empty namespace before the
    /// colon (`:stone`) also falls back to [`DEFAULT_NAMESPACE`].
    pub fn normalize(raw: &str) -> Option<Identifier> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (namespace, path) = match trimmed.split_once(':') {
            Some((ns, path)) if ns.is_empty() => (DEFAULT_NAMESPACE, path),
            Some((ns, path)) => (ns, path),
            None => (DEFAULT_NAMESPACE, trimmed),
        };

        if !namespace.chars().all(is_namespace_char) {
            return None;
        }
        if !path.chars().all(is_path_char) {
            return None;
        }

        Some(Identifier {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Returns the namespace component.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the path component.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.')
}

fn is_path_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.' | '/')
}
