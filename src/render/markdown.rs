//! GitHub-flavored markdown renderer.
//!
//! One document per module: header block, index of top-level entities,
//! then one section per entity kind. Namespace sections nest headings one
//! level per depth, clamped at h6 — deep trees still render, just without
//! further visual nesting.

use crate::model::{Class, Doc, Module, Namespace};
use crate::render::Renderer;
use crate::toc;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, module: &Module) -> String {
        let mut out = String::new();

        out.push_str(&heading(1, &module.name));
        push_doc_block(&mut out, &module.doc);
        push_index(&mut out, module);

        if !module.classes.is_empty() {
            out.push_str(&heading(2, "Classes"));
            for class in &module.classes {
                push_class(&mut out, class);
            }
        }
        if !module.interfaces.is_empty() {
            out.push_str(&heading(2, "Interfaces"));
            for interface in &module.interfaces {
                out.push_str(&heading(3, &interface.name));
                push_doc_block(&mut out, &interface.doc);
                push_signature(&mut out, &interface.signature);
            }
        }
        if !module.functions.is_empty() {
            out.push_str(&heading(2, "Functions"));
            for function in &module.functions {
                out.push_str(&heading(3, &function.name));
                push_doc_block(&mut out, &function.doc);
                push_signatures(&mut out, &function.signatures);
            }
        }
        if !module.type_aliases.is_empty() {
            out.push_str(&heading(2, "Type aliases"));
            for alias in &module.type_aliases {
                out.push_str(&heading(3, &alias.name));
                push_doc_block(&mut out, &alias.doc);
                push_signature(&mut out, &alias.signature);
            }
        }
        if !module.constants.is_empty() {
            out.push_str(&heading(2, "Constants"));
            for constant in &module.constants {
                out.push_str(&heading(3, &constant.name));
                push_doc_block(&mut out, &constant.doc);
                push_signature(&mut out, &constant.signature);
            }
        }
        if !module.exports.is_empty() {
            out.push_str(&heading(2, "Exports"));
            for export in &module.exports {
                out.push_str(&heading(3, &export.name));
                push_doc_block(&mut out, &export.doc);
                push_signature(&mut out, &export.signature);
            }
        }
        if !module.namespaces.is_empty() {
            out.push_str(&heading(2, "Namespaces"));
            for namespace in &module.namespaces {
                push_namespace(&mut out, namespace, 3);
            }
        }

        out
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Heading clamped at h6.
fn heading(level: usize, text: &str) -> String {
    format!("{} {}\n\n", "#".repeat(level.min(6)), text)
}

fn push_index(out: &mut String, module: &Module) {
    let mut items: Vec<String> = Vec::new();
    for class in &module.classes {
        items.push(toc::index_item(&class.name, "class"));
    }
    for interface in &module.interfaces {
        items.push(toc::index_item(&interface.name, "interface"));
    }
    for function in &module.functions {
        items.push(toc::index_item(&function.name, "function"));
    }
    for alias in &module.type_aliases {
        items.push(toc::index_item(&alias.name, "type alias"));
    }
    for constant in &module.constants {
        items.push(toc::index_item(&constant.name, "constant"));
    }
    for export in &module.exports {
        items.push(toc::index_item(&export.name, "export"));
    }
    for namespace in &module.namespaces {
        items.push(toc::index_item(&namespace.name, "namespace"));
    }
    if items.is_empty() {
        return;
    }
    out.push_str(&heading(2, "Index"));
    for item in items {
        out.push_str(&item);
        out.push('\n');
    }
    out.push('\n');
}

/// Deprecation notice, description, examples, and the since/category line.
fn push_doc_block(out: &mut String, doc: &Doc) {
    if doc.deprecated {
        out.push_str("**Deprecated**\n\n");
    }
    if let Some(description) = &doc.description {
        out.push_str(description);
        out.push_str("\n\n");
    }
    for example in &doc.examples {
        out.push_str("**Example**\n\n```ts\n");
        out.push_str(example);
        out.push_str("\n```\n\n");
    }
    let mut meta: Vec<String> = Vec::new();
    if let Some(since) = &doc.since {
        meta.push(format!("Added in v{since}"));
    }
    if let Some(category) = &doc.category {
        meta.push(format!("Category: `{category}`"));
    }
    if !meta.is_empty() {
        out.push_str(&meta.join(" · "));
        out.push_str("\n\n");
    }
}

fn push_signature(out: &mut String, signature: &str) {
    if signature.is_empty() {
        return;
    }
    out.push_str("**Signature**\n\n```ts\n");
    out.push_str(signature);
    out.push_str("\n```\n\n");
}

/// One fence containing every overload, in declaration order.
fn push_signatures(out: &mut String, signatures: &[String]) {
    out.push_str("**Signature**\n\n```ts\n");
    out.push_str(&signatures.join("\n"));
    out.push_str("\n```\n\n");
}

fn push_class(out: &mut String, class: &Class) {
    out.push_str(&heading(3, &class.name));
    push_doc_block(out, &class.doc);
    push_signature(out, &class.signature);

    if !class.methods.is_empty() {
        out.push_str(&heading(4, "Methods"));
        for method in &class.methods {
            out.push_str(&heading(5, &method.name));
            push_doc_block(out, &method.doc);
            push_signatures(out, &method.signatures);
        }
    }
    if !class.static_methods.is_empty() {
        out.push_str(&heading(4, "Static methods"));
        for method in &class.static_methods {
            out.push_str(&heading(5, &method.name));
            push_doc_block(out, &method.doc);
            push_signatures(out, &method.signatures);
        }
    }
    if !class.properties.is_empty() {
        out.push_str(&heading(4, "Properties"));
        for property in &class.properties {
            out.push_str(&heading(5, &property.name));
            push_doc_block(out, &property.doc);
            push_signature(out, &property.signature);
        }
    }
}

fn push_namespace(out: &mut String, namespace: &Namespace, level: usize) {
    out.push_str(&heading(level, &namespace.name));
    push_doc_block(out, &namespace.doc);

    if !namespace.interfaces.is_empty() {
        out.push_str(&heading(level + 1, "Interfaces"));
        for interface in &namespace.interfaces {
            out.push_str(&heading(level + 2, &interface.name));
            push_doc_block(out, &interface.doc);
            push_signature(out, &interface.signature);
        }
    }
    if !namespace.type_aliases.is_empty() {
        out.push_str(&heading(level + 1, "Type aliases"));
        for alias in &namespace.type_aliases {
            out.push_str(&heading(level + 2, &alias.name));
            push_doc_block(out, &alias.doc);
            push_signature(out, &alias.signature);
        }
    }
    if !namespace.namespaces.is_empty() {
        out.push_str(&heading(level + 1, "Namespaces"));
        for nested in &namespace.namespaces {
            push_namespace(out, nested, level + 2);
        }
    }
}
