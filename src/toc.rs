//! GitHub-flavored markdown anchor/slug generation for module indexes.

/// Generate an index link for an entity heading.
pub fn anchor_link(text: &str) -> String {
    format!("[{}](#{})", text, github_slug(text))
}

/// Generate an index list item, annotated with the entity kind.
pub fn index_item(name: &str, kind: &str) -> String {
    format!("* {} ({})", anchor_link(name), kind)
}

/// GitHub heading anchor slug:
/// - lowercase
/// - drop all chars that aren't alphanumeric, space, or hyphen
/// - replace spaces with hyphens
fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_simple() {
        assert_eq!(github_slug("Buffer"), "buffer");
    }

    #[test]
    fn slug_drops_punctuation() {
        assert_eq!(github_slug("Option.Some"), "optionsome");
        assert_eq!(github_slug("export * from \"./string\""), "export--from-string");
    }

    #[test]
    fn anchor_link_format() {
        assert_eq!(anchor_link("Buffer"), "[Buffer](#buffer)");
    }

    #[test]
    fn index_item_format() {
        assert_eq!(index_item("trim", "function"), "* [trim](#trim) (function)");
    }
}
