//! Documentation entity model — format-agnostic, renderer-facing.
//!
//! Every entity is built once from a scope's declarations and a resolved
//! [`Doc`], then never mutated. Each parent owns its children directly:
//! a `Module` owns its top-level entities, a `Class` its members, a
//! `Namespace` its subtree.

use serde::Serialize;

/// Resolved documentation fields for one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Doc {
    pub description: Option<String>,
    /// First `@since` value, e.g. "1.0.0"
    pub since: Option<String>,
    /// True iff the `@deprecated` tag is present
    pub deprecated: bool,
    /// `@example` values in tag order, empty entries dropped
    pub examples: Vec<String>,
    /// First `@category` value
    pub category: Option<String>,
}

/// One documented source module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    pub name: String,
    pub doc: Doc,
    /// File path segments, e.g. ["src", "string.ts"]
    pub path: Vec<String>,
    pub classes: Vec<Class>,
    pub interfaces: Vec<Interface>,
    pub functions: Vec<Function>,
    pub type_aliases: Vec<TypeAlias>,
    pub constants: Vec<Constant>,
    pub exports: Vec<Export>,
    pub namespaces: Vec<Namespace>,
}

impl Module {
    /// `/`-joined path, the form used for sorting and error messages.
    pub fn joined_path(&self) -> String {
        self.path.join("/")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Class {
    pub name: String,
    pub doc: Doc,
    pub signature: String,
    pub methods: Vec<Method>,
    pub static_methods: Vec<Method>,
    pub properties: Vec<Property>,
}

/// Instance or static method. `signatures` holds one entry per overload,
/// in declaration order; never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    pub name: String,
    pub doc: Doc,
    pub signatures: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub name: String,
    pub doc: Doc,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    pub name: String,
    pub doc: Doc,
    pub signature: String,
}

/// Free function. Like [`Method`], `signatures` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    pub name: String,
    pub doc: Doc,
    pub signatures: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeAlias {
    pub name: String,
    pub doc: Doc,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constant {
    pub name: String,
    pub doc: Doc,
    pub signature: String,
}

/// Manual or wildcard re-export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Export {
    pub name: String,
    pub doc: Doc,
    pub signature: String,
}

/// Namespace scope. Nesting is unbounded in the model; the markdown
/// renderer clamps heading depth instead of rejecting deep trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Namespace {
    pub name: String,
    pub doc: Doc,
    pub interfaces: Vec<Interface>,
    pub type_aliases: Vec<TypeAlias>,
    pub namespaces: Vec<Namespace>,
}
