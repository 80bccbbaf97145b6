//! Declaration-tree parsing — policy, scope context, and the per-module
//! extraction entry point.

pub mod comment;
pub mod doc;
pub mod module;

pub use module::parse_module;

use glob::Pattern;

/// Documentation policy: which tags are mandatory, and which modules are
/// skipped outright. Read-only for the whole run.
#[derive(Debug, Clone)]
pub struct Policy {
    /// Require a `@since` tag on every documented entity
    pub enforce_version: bool,
    /// Require a free-text description on every documented entity
    pub enforce_descriptions: bool,
    /// Require at least one `@example` on every non-module entity
    pub enforce_examples: bool,
    /// Module paths matching any of these globs are dropped before traversal
    pub exclude: Vec<Pattern>,
}

impl Default for Policy {
    fn default() -> Self {
        Policy {
            enforce_version: true,
            enforce_descriptions: false,
            enforce_examples: false,
            exclude: Vec::new(),
        }
    }
}

/// Read-only context threaded through the extraction recursion: the module
/// path being walked plus the active policy. No ambient state — every call
/// is a pure function of its subtree and this context.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    pub path: &'a [String],
    pub policy: &'a Policy,
}

impl Source<'_> {
    /// Scope name used in error messages: the file stem of the last path
    /// segment ("src/string.ts" → "string").
    pub fn scope(&self) -> &str {
        let last = self.path.last().map(String::as_str).unwrap_or("");
        last.split_once('.').map(|(stem, _)| stem).unwrap_or(last)
    }

    /// `/`-joined module path, used in module-level error messages.
    pub fn joined_path(&self) -> String {
        self.path.join("/")
    }
}
