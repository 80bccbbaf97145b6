//! Documentation comment parser — raw `/** ... */` text to description + tags.
//!
//! Pure and total: malformed comments degrade to an empty [`Comment`]
//! rather than failing.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@(\w+)[ \t]*(.*)$").unwrap());

/// Parsed documentation comment.
///
/// `tags` maps tag name to its values in source order; a `@tag` line with
/// no text (or only whitespace) contributes `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    pub description: Option<String>,
    pub tags: HashMap<String, Vec<Option<String>>>,
}

impl Comment {
    /// First value of a tag, if the tag occurs at all.
    ///
    /// The outer `Option` distinguishes "tag absent" from "tag present with
    /// no value" — the policy rules treat those differently.
    pub fn first(&self, tag: &str) -> Option<&Option<String>> {
        self.tags.get(tag).and_then(|values| values.first())
    }

    /// All non-empty values of a tag, in source order.
    pub fn values(&self, tag: &str) -> Vec<String> {
        self.tags
            .get(tag)
            .map(|values| values.iter().filter_map(|v| v.clone()).collect())
            .unwrap_or_default()
    }

    pub fn has(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }
}

/// Parse raw comment text.
///
/// Leading `*` markers and whitespace are stripped per line. The free-text
/// body before the first `@tag` line becomes the description; each tag
/// collects the rest of its line plus any following non-tag lines as its
/// value (multi-line `@example` blocks stay intact). Empty-after-trim
/// values become `None`.
pub fn parse(text: &str) -> Comment {
    let mut description_lines: Vec<String> = Vec::new();
    let mut tags: HashMap<String, Vec<Option<String>>> = HashMap::new();
    // (tag name, value lines) of the tag currently being accumulated
    let mut current: Option<(String, Vec<String>)> = None;

    for line in text.lines() {
        let content = strip_markers(line);
        if let Some(caps) = RE_TAG.captures(content) {
            flush_tag(&mut tags, current.take());
            current = Some((caps[1].to_string(), vec![caps[2].to_string()]));
        } else if let Some((_, ref mut lines)) = current {
            lines.push(content.to_string());
        } else {
            description_lines.push(content.to_string());
        }
    }
    flush_tag(&mut tags, current.take());

    let description = non_empty(description_lines.join("\n"));
    Comment { description, tags }
}

/// Close out an accumulated tag, normalizing its value.
fn flush_tag(tags: &mut HashMap<String, Vec<Option<String>>>, current: Option<(String, Vec<String>)>) {
    if let Some((name, lines)) = current {
        tags.entry(name).or_default().push(non_empty(lines.join("\n")));
    }
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Strip comment delimiters and the leading `*` marker from one line.
fn strip_markers(line: &str) -> &str {
    let mut s = line.trim();
    if let Some(rest) = s.strip_prefix("/**") {
        s = rest.trim_start();
    } else if let Some(rest) = s.strip_prefix("/*") {
        s = rest.trim_start();
    }
    if let Some(rest) = s.strip_suffix("*/") {
        s = rest.trim_end();
    }
    if let Some(rest) = s.strip_prefix('*') {
        s = rest.strip_prefix(' ').unwrap_or(rest);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_and_since() {
        let comment = parse("/** a description...\n * @since 1.0.0\n */");
        assert_eq!(comment.description.as_deref(), Some("a description..."));
        assert_eq!(
            comment.first("since"),
            Some(&Some("1.0.0".to_string()))
        );
    }

    #[test]
    fn multi_line_description() {
        let comment = parse("/**\n * First line.\n * Second line.\n */");
        assert_eq!(
            comment.description.as_deref(),
            Some("First line.\nSecond line.")
        );
    }

    #[test]
    fn repeated_tags_accumulate_in_order() {
        let comment = parse("/**\n * @example one\n * @example two\n */");
        assert_eq!(
            comment.values("example"),
            vec!["one".to_string(), "two".to_string()]
        );
    }

    #[test]
    fn valueless_tag_is_none() {
        let comment = parse("/**\n * @deprecated\n * @category\n */");
        assert_eq!(comment.first("deprecated"), Some(&None));
        assert_eq!(comment.first("category"), Some(&None));
    }

    #[test]
    fn whitespace_value_is_none() {
        let comment = parse("/**\n * @since   \n */");
        assert_eq!(comment.first("since"), Some(&None));
    }

    #[test]
    fn multi_line_example_block() {
        let comment = parse(
            "/**\n * @example\n * import { trim } from 'string'\n *\n * trim('  a  ')\n */",
        );
        assert_eq!(
            comment.values("example"),
            vec!["import { trim } from 'string'\n\ntrim('  a  ')".to_string()]
        );
    }

    #[test]
    fn empty_description_is_absent() {
        let comment = parse("/**\n * @since 1.0.0\n */");
        assert_eq!(comment.description, None);
    }

    #[test]
    fn malformed_input_degrades() {
        let comment = parse("");
        assert_eq!(comment, Comment::default());
        let comment = parse("not a comment at all");
        assert_eq!(comment.description.as_deref(), Some("not a comment at all"));
        assert!(comment.tags.is_empty());
    }

    #[test]
    fn single_line_comment() {
        let comment = parse("/** just a description */");
        assert_eq!(comment.description.as_deref(), Some("just a description"));
    }
}
