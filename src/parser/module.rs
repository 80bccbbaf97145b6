//! Entity extraction — one scope's declarations to entity lists.
//!
//! Every "parse N declarations" step accumulates: each declaration is
//! validated independently and all failure messages are concatenated in
//! declaration order before the step fails. Namespaces recurse with the
//! same strategy, so one call against a module reports every violation in
//! its whole subtree.

use crate::decl::{
    ClassDecl, ConstantDecl, Declaration, ExportDecl, FunctionDecl, InterfaceDecl, MethodDecl,
    ModuleTree, NamespaceDecl, PropertyDecl, SignatureDecl, TypeAliasDecl,
};
use crate::model::{
    Class, Constant, Doc, Export, Function, Interface, Method, Module, Namespace, Property,
    TypeAlias,
};
use crate::parser::comment::{self, Comment};
use crate::parser::doc::resolve_doc;
use crate::parser::{Policy, Source};
use crate::validate::{all_of, collect, fail, Validated};
use regex::Regex;
use std::sync::LazyLock;

/// Inline imported-type qualifiers, e.g. `import("src/buffer").Buffer` → `Buffer`.
static RE_IMPORT_QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"import\((?:"[^"]*"|'[^']*')\)\."#).unwrap());

/// Parse one module's declaration tree into a [`Module`], or every
/// validation failure found in it.
pub fn parse_module(tree: &ModuleTree, policy: &Policy) -> Validated<Module> {
    let src = Source {
        path: &tree.path,
        policy,
    };
    let name = src.scope().to_string();

    let mut class_results = Vec::new();
    let mut interface_results = Vec::new();
    let mut function_results = Vec::new();
    let mut type_alias_results = Vec::new();
    let mut constant_results = Vec::new();
    let mut export_results = Vec::new();
    let mut namespace_results = Vec::new();

    for declaration in &tree.declarations {
        match declaration {
            Declaration::Class(d) => class_results.extend(parse_class(&src, d)),
            Declaration::Interface(d) => interface_results.extend(parse_interface(&src, d)),
            Declaration::Function(d) => function_results.extend(parse_function(&src, d)),
            Declaration::TypeAlias(d) => type_alias_results.extend(parse_type_alias(&src, d)),
            Declaration::Constant(d) => constant_results.extend(parse_constant(&src, d)),
            Declaration::Export(d) => export_results.extend(parse_export(&src, d)),
            Declaration::Namespace(d) => namespace_results.extend(parse_namespace(&src, d)),
        }
    }

    let mut errors = Vec::new();
    let doc = collect(module_doc(&src, &name, tree.comment.as_deref()), &mut errors);
    let classes = collect(all_of(class_results), &mut errors);
    let interfaces = collect(all_of(interface_results), &mut errors);
    let functions = collect(all_of(function_results), &mut errors);
    let type_aliases = collect(all_of(type_alias_results), &mut errors);
    let constants = collect(all_of(constant_results), &mut errors);
    let exports = collect(all_of(export_results), &mut errors);
    let namespaces = collect(all_of(namespace_results), &mut errors);

    match (
        doc, classes, interfaces, functions, type_aliases, constants, exports, namespaces,
    ) {
        (
            Some(doc),
            Some(mut classes),
            Some(mut interfaces),
            Some(functions),
            Some(mut type_aliases),
            Some(constants),
            Some(exports),
            Some(mut namespaces),
        ) => {
            classes.sort_by(|a, b| a.name.cmp(&b.name));
            interfaces.sort_by(|a, b| a.name.cmp(&b.name));
            type_aliases.sort_by(|a, b| a.name.cmp(&b.name));
            namespaces.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(Module {
                name,
                doc,
                path: tree.path.clone(),
                classes,
                interfaces,
                functions,
                type_aliases,
                constants,
                exports,
                namespaces,
            })
        }
        _ => Err(errors),
    }
}

/// Module-level documentation, with the fallback for files that carry no
/// leading comment: an error when the policy requires documentation, an
/// empty [`Doc`] otherwise.
fn module_doc(src: &Source, name: &str, raw: Option<&str>) -> Validated<Doc> {
    match raw {
        Some(text) => resolve_doc(src, name, &comment::parse(text), true),
        None if src.policy.enforce_version || src.policy.enforce_descriptions => fail(format!(
            "Missing documentation in {} module",
            src.joined_path()
        )),
        None => Ok(Doc::default()),
    }
}

// -- Declaration filtering ----------------------------------------------------

/// `@internal`/`@ignore` declarations are silently omitted, before any
/// policy check runs.
fn is_ignored(comment: &Comment) -> bool {
    comment.has("internal") || comment.has("ignore")
}

fn parse_raw_comment(raw: Option<&str>) -> Comment {
    raw.map(comment::parse).unwrap_or_default()
}

/// The documentation comment of a callable: the first overload's when
/// overloads exist, the implementation's otherwise.
fn callable_comment(overloads: &[SignatureDecl], implementation: &SignatureDecl) -> Comment {
    let raw = match overloads.first() {
        Some(first) => first.comment.as_deref(),
        None => implementation.comment.as_deref(),
    };
    parse_raw_comment(raw)
}

// -- Signature text -----------------------------------------------------------

/// Cut a callable's text at the start of its body.
fn strip_body(text: &str) -> String {
    match text.find('{') {
        Some(index) => text[..index].trim().to_string(),
        None => text.trim().to_string(),
    }
}

/// One signature per overload, or the implementation's when there are none.
/// The implementation's own text never appears alongside overloads.
fn callable_signatures(overloads: &[SignatureDecl], implementation: &SignatureDecl) -> Vec<String> {
    if overloads.is_empty() {
        vec![strip_body(&implementation.text)]
    } else {
        overloads.iter().map(|o| strip_body(&o.text)).collect()
    }
}

/// Display canonicalization only — no type resolution happens here.
fn strip_import_qualifier(type_text: &str) -> String {
    RE_IMPORT_QUALIFIER
        .replace_all(type_text, "")
        .trim()
        .to_string()
}

/// Class header plus its body-stripped constructor signatures.
fn class_signature(decl: &ClassDecl) -> String {
    if decl.constructors.is_empty() {
        return decl.text.trim().to_string();
    }
    let constructors: Vec<String> = decl
        .constructors
        .iter()
        .map(|c| format!("  {}", strip_body(&c.text)))
        .collect();
    format!("{} {{\n{}\n}}", decl.text.trim(), constructors.join("\n"))
}

// -- Per-kind extraction ------------------------------------------------------

fn parse_class(src: &Source, decl: &ClassDecl) -> Option<Validated<Class>> {
    if !decl.exported {
        return None;
    }
    let parsed = parse_raw_comment(decl.comment.as_deref());
    if is_ignored(&parsed) {
        return None;
    }
    let Some(name) = decl.name.clone() else {
        return Some(fail(format!(
            "Missing class name in module {}",
            src.scope()
        )));
    };

    let mut errors = Vec::new();
    let doc = collect(resolve_doc(src, &name, &parsed, false), &mut errors);
    let methods = collect(
        all_of(decl.methods.iter().filter_map(|m| parse_method(src, m))),
        &mut errors,
    );
    let static_methods = collect(
        all_of(
            decl.static_methods
                .iter()
                .filter_map(|m| parse_method(src, m)),
        ),
        &mut errors,
    );
    let properties = collect(
        all_of(decl.properties.iter().filter_map(|p| parse_property(src, p))),
        &mut errors,
    );

    Some(match (doc, methods, static_methods, properties) {
        (Some(doc), Some(methods), Some(static_methods), Some(properties)) => Ok(Class {
            name,
            doc,
            signature: class_signature(decl),
            methods,
            static_methods,
            properties,
        }),
        _ => Err(errors),
    })
}

fn parse_method(src: &Source, decl: &MethodDecl) -> Option<Validated<Method>> {
    let parsed = callable_comment(&decl.overloads, &decl.implementation);
    if is_ignored(&parsed) {
        return None;
    }
    let Some(name) = decl.name.clone() else {
        return Some(fail(format!(
            "Missing method name in module {}",
            src.scope()
        )));
    };
    Some(resolve_doc(src, &name, &parsed, false).map(|doc| Method {
        name,
        doc,
        signatures: callable_signatures(&decl.overloads, &decl.implementation),
    }))
}

fn parse_property(src: &Source, decl: &PropertyDecl) -> Option<Validated<Property>> {
    let parsed = parse_raw_comment(decl.comment.as_deref());
    if is_ignored(&parsed) {
        return None;
    }
    let Some(name) = decl.name.clone() else {
        return Some(fail(format!(
            "Missing property name in module {}",
            src.scope()
        )));
    };
    Some(resolve_doc(src, &name, &parsed, false).map(|doc| {
        let signature = format!("{}: {}", name, strip_import_qualifier(&decl.type_text));
        Property {
            name,
            doc,
            signature,
        }
    }))
}

fn parse_function(src: &Source, decl: &FunctionDecl) -> Option<Validated<Function>> {
    if !decl.exported {
        return None;
    }
    let parsed = callable_comment(&decl.overloads, &decl.implementation);
    if is_ignored(&parsed) {
        return None;
    }
    let Some(name) = decl.name.clone() else {
        return Some(fail(format!(
            "Missing function name in module {}",
            src.scope()
        )));
    };
    Some(resolve_doc(src, &name, &parsed, false).map(|doc| Function {
        name,
        doc,
        signatures: callable_signatures(&decl.overloads, &decl.implementation),
    }))
}

fn parse_interface(src: &Source, decl: &InterfaceDecl) -> Option<Validated<Interface>> {
    if !decl.exported {
        return None;
    }
    let parsed = parse_raw_comment(decl.comment.as_deref());
    if is_ignored(&parsed) {
        return None;
    }
    let Some(name) = decl.name.clone() else {
        return Some(fail(format!(
            "Missing interface name in module {}",
            src.scope()
        )));
    };
    Some(resolve_doc(src, &name, &parsed, false).map(|doc| Interface {
        name,
        doc,
        signature: decl.text.trim().to_string(),
    }))
}

fn parse_type_alias(src: &Source, decl: &TypeAliasDecl) -> Option<Validated<TypeAlias>> {
    if !decl.exported {
        return None;
    }
    let parsed = parse_raw_comment(decl.comment.as_deref());
    if is_ignored(&parsed) {
        return None;
    }
    let Some(name) = decl.name.clone() else {
        return Some(fail(format!(
            "Missing type alias name in module {}",
            src.scope()
        )));
    };
    Some(resolve_doc(src, &name, &parsed, false).map(|doc| TypeAlias {
        name,
        doc,
        signature: decl.text.trim().to_string(),
    }))
}

fn parse_constant(src: &Source, decl: &ConstantDecl) -> Option<Validated<Constant>> {
    if !decl.exported {
        return None;
    }
    let parsed = parse_raw_comment(decl.comment.as_deref());
    if is_ignored(&parsed) {
        return None;
    }
    let Some(name) = decl.name.clone() else {
        return Some(fail(format!(
            "Missing constant name in module {}",
            src.scope()
        )));
    };
    Some(resolve_doc(src, &name, &parsed, false).map(|doc| {
        let signature = format!(
            "export declare const {}: {}",
            name,
            strip_import_qualifier(&decl.type_text)
        );
        Constant {
            name,
            doc,
            signature,
        }
    }))
}

fn parse_export(src: &Source, decl: &ExportDecl) -> Option<Validated<Export>> {
    if !decl.exported {
        return None;
    }
    match &decl.star {
        Some(star) => {
            let signature = match &star.alias {
                Some(alias) => format!("export * as {} from \"{}\"", alias, star.module),
                None => format!("export * from \"{}\"", star.module),
            };
            let Some(raw) = decl.comment.as_deref() else {
                // No leading comment; the generated signature names the offender
                return Some(fail(format!(
                    "Missing {} documentation in {}",
                    signature,
                    src.scope()
                )));
            };
            let mut parsed = comment::parse(raw);
            if is_ignored(&parsed) {
                return None;
            }
            let name = star.alias.clone().unwrap_or_else(|| star.module.clone());
            if parsed.description.is_none() {
                parsed.description = Some(match &star.alias {
                    Some(alias) => format!(
                        "Re-exports all named exports from the `{}` module as `{}`.",
                        star.module, alias
                    ),
                    None => format!(
                        "Re-exports all named exports from the `{}` module.",
                        star.module
                    ),
                });
            }
            Some(resolve_doc(src, &name, &parsed, false).map(|mut doc| {
                if doc.category.is_none() {
                    doc.category = Some("exports".to_string());
                }
                Export {
                    name,
                    doc,
                    signature,
                }
            }))
        }
        None => {
            let parsed = parse_raw_comment(decl.comment.as_deref());
            if is_ignored(&parsed) {
                return None;
            }
            let Some(name) = decl.name.clone() else {
                return Some(fail(format!(
                    "Missing export name in module {}",
                    src.scope()
                )));
            };
            if decl.comment.is_none() {
                return Some(fail(format!(
                    "Missing {} documentation in {}",
                    name,
                    src.scope()
                )));
            }
            Some(resolve_doc(src, &name, &parsed, false).map(|doc| Export {
                name,
                doc,
                signature: decl.signature.clone().unwrap_or_default(),
            }))
        }
    }
}

/// Recursive namespace walk. A namespace's own documentation failure, its
/// interfaces', its type aliases', and its nested namespaces' (already
/// flattened) failures are concatenated, in that order.
fn parse_namespace(src: &Source, decl: &NamespaceDecl) -> Option<Validated<Namespace>> {
    if !decl.exported {
        return None;
    }
    let parsed = parse_raw_comment(decl.comment.as_deref());
    if is_ignored(&parsed) {
        return None;
    }
    let Some(name) = decl.name.clone() else {
        return Some(fail(format!(
            "Missing namespace name in module {}",
            src.scope()
        )));
    };

    let mut errors = Vec::new();
    let doc = collect(resolve_doc(src, &name, &parsed, false), &mut errors);
    let interfaces = collect(
        all_of(decl.interfaces.iter().filter_map(|i| parse_interface(src, i))),
        &mut errors,
    );
    let type_aliases = collect(
        all_of(
            decl.type_aliases
                .iter()
                .filter_map(|t| parse_type_alias(src, t)),
        ),
        &mut errors,
    );
    let namespaces = collect(
        all_of(
            decl.namespaces
                .iter()
                .filter_map(|n| parse_namespace(src, n)),
        ),
        &mut errors,
    );

    Some(match (doc, interfaces, type_aliases, namespaces) {
        (Some(doc), Some(mut interfaces), Some(mut type_aliases), Some(mut namespaces)) => {
            interfaces.sort_by(|a, b| a.name.cmp(&b.name));
            type_aliases.sort_by(|a, b| a.name.cmp(&b.name));
            namespaces.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(Namespace {
                name,
                doc,
                interfaces,
                type_aliases,
                namespaces,
            })
        }
        _ => Err(errors),
    })
}
