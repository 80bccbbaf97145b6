//! Tag policy enforcement — derive a [`Doc`] from a parsed comment.

use crate::model::Doc;
use crate::parser::comment::Comment;
use crate::parser::Source;
use crate::validate::Validated;

/// Resolve the documentation fields for one entity under the active policy.
///
/// Every rule is evaluated independently so one pass surfaces all of the
/// entity's violations:
///
/// - `@since`: present with a value → kept; present empty → always an
///   error; absent → error only under `enforce_version`.
/// - `@category`: present empty → always an error; absent → no category.
/// - description: absent → error only under `enforce_descriptions`.
/// - `@example`: empty values dropped; none left → error under
///   `enforce_examples`, except for module-level documentation.
/// - `@deprecated`: presence alone sets the flag.
pub fn resolve_doc(src: &Source, name: &str, comment: &Comment, is_module: bool) -> Validated<Doc> {
    let scope = src.scope();
    let mut errors: Vec<String> = Vec::new();

    let since = match comment.first("since") {
        Some(Some(value)) => Some(value.clone()),
        Some(None) => {
            errors.push(format!(
                "Missing @since tag in {scope}#{name} documentation"
            ));
            None
        }
        None if src.policy.enforce_version => {
            errors.push(format!(
                "Missing @since tag in {scope}#{name} documentation"
            ));
            None
        }
        None => None,
    };

    let category = match comment.first("category") {
        Some(Some(value)) => Some(value.clone()),
        Some(None) => {
            errors.push(format!(
                "Missing @category tag in {scope}#{name} documentation"
            ));
            None
        }
        None => None,
    };

    let description = match &comment.description {
        Some(text) => Some(text.clone()),
        None if src.policy.enforce_descriptions => {
            errors.push(format!(
                "Missing description in {scope}#{name} documentation"
            ));
            None
        }
        None => None,
    };

    let examples = comment.values("example");
    if examples.is_empty() && src.policy.enforce_examples && !is_module {
        errors.push(format!(
            "Missing @example tag in {scope}#{name} documentation"
        ));
    }

    let deprecated = comment.has("deprecated");

    if errors.is_empty() {
        Ok(Doc {
            description,
            since,
            deprecated,
            examples,
            category,
        })
    } else {
        Err(errors)
    }
}
