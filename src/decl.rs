//! Declaration-tree input model.
//!
//! The AST provider runs before this tool and serializes each source module
//! as a JSON declaration tree: one [`ModuleTree`] per file, with raw
//! documentation-comment text attached to every declaration. Signature text
//! arrives pre-rendered by the provider; the extractor only strips trailing
//! bodies and inline `import("...")` qualifiers.

use serde::Deserialize;

fn yes() -> bool {
    true
}

/// One source module as reported by the declaration provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleTree {
    /// File path segments, e.g. ["src", "string.ts"]
    pub path: Vec<String>,
    /// Raw leading file comment, if any
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

/// A top-level declaration, discriminated by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Declaration {
    Class(ClassDecl),
    Interface(InterfaceDecl),
    Function(FunctionDecl),
    TypeAlias(TypeAliasDecl),
    Constant(ConstantDecl),
    Export(ExportDecl),
    #[serde(alias = "moduleDeclaration")]
    Namespace(NamespaceDecl),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDecl {
    pub name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default = "yes")]
    pub exported: bool,
    /// Header text without the class body, e.g. "export declare class Buffer"
    pub text: String,
    #[serde(default)]
    pub constructors: Vec<SignatureDecl>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
    #[serde(default)]
    pub static_methods: Vec<MethodDecl>,
    #[serde(default)]
    pub properties: Vec<PropertyDecl>,
}

/// One signature of a callable: the rendered text plus its own leading
/// comment. Overloads each carry one; so does the implementation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureDecl {
    pub text: String,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDecl {
    pub name: Option<String>,
    #[serde(default)]
    pub overloads: Vec<SignatureDecl>,
    pub implementation: SignatureDecl,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDecl {
    pub name: Option<String>,
    #[serde(default = "yes")]
    pub exported: bool,
    #[serde(default)]
    pub overloads: Vec<SignatureDecl>,
    pub implementation: SignatureDecl,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDecl {
    pub name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    /// Declared or inferred type text
    #[serde(rename = "type")]
    pub type_text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceDecl {
    pub name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default = "yes")]
    pub exported: bool,
    /// Full signature text, braces included
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAliasDecl {
    pub name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default = "yes")]
    pub exported: bool,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstantDecl {
    pub name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default = "yes")]
    pub exported: bool,
    #[serde(rename = "type")]
    pub type_text: String,
}

/// Manual re-export. Either named (`name` + `signature`) or a wildcard
/// (`star` set, signature synthesized by the extractor).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDecl {
    pub name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default = "yes")]
    pub exported: bool,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub star: Option<StarExportDecl>,
}

/// `export * [as alias] from "module"`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarExportDecl {
    pub module: String,
    #[serde(default)]
    pub alias: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceDecl {
    pub name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default = "yes")]
    pub exported: bool,
    #[serde(default)]
    pub interfaces: Vec<InterfaceDecl>,
    #[serde(default)]
    pub type_aliases: Vec<TypeAliasDecl>,
    #[serde(default)]
    pub namespaces: Vec<NamespaceDecl>,
}
