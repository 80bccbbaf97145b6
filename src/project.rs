//! Project assembly — exclusion filtering, per-module extraction,
//! deprecation drop, deterministic ordering.

use crate::decl::ModuleTree;
use crate::model::Module;
use crate::parser::{parse_module, Policy};

/// A module whose extraction failed validation.
#[derive(Debug)]
pub struct ModuleFailure {
    /// `/`-joined module path
    pub path: String,
    /// All violation messages for the module's subtree, declaration order
    pub errors: Vec<String>,
}

/// Outcome of assembling a project. One module's failure never blocks
/// another's extraction; the caller decides whether any failure fails the
/// whole run.
#[derive(Debug, Default)]
pub struct Assembly {
    pub modules: Vec<Module>,
    pub failures: Vec<ModuleFailure>,
}

/// Extract every module tree under the given policy.
///
/// Excluded paths are dropped before traversal. Modules whose own
/// documentation is deprecated are fully parsed and validated, then dropped
/// from the result. Survivors are sorted by lower-cased path.
pub fn assemble(trees: &[ModuleTree], policy: &Policy) -> Assembly {
    let mut assembly = Assembly::default();

    for tree in trees {
        let path = tree.path.join("/");
        if policy.exclude.iter().any(|pattern| pattern.matches(&path)) {
            continue;
        }
        match parse_module(tree, policy) {
            Ok(module) => {
                if !module.doc.deprecated {
                    assembly.modules.push(module);
                }
            }
            Err(errors) => assembly.failures.push(ModuleFailure { path, errors }),
        }
    }

    assembly
        .modules
        .sort_by_key(|module| module.joined_path().to_lowercase());
    assembly
}
