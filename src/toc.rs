//! GitHub-flavored markdown anchor/slug generation.

use std::collections::HashSet;

/// Hands out unique anchors, one per rendered record.
///
/// Anchors are GitHub slugs of the record path. Repeats get a `-N` suffix the
/// way GitHub disambiguates headings; paths that slug to nothing (`$`, `$$`)
/// fall back to `record`.
#[derive(Debug, Default)]
pub struct Anchors {
    used: HashSet<String>,
}

impl Anchors {
    pub fn assign(&mut self, path: &str) -> String {
        let mut base = github_slug(path);
        if base.is_empty() {
            base = "record".to_string();
        }
        let mut anchor = base.clone();
        let mut n = 0;
        while self.used.contains(&anchor) {
            n += 1;
            anchor = format!("{}-{}", base, n);
        }
        self.used.insert(anchor.clone());
        anchor
    }
}

/// Generate a table-of-contents link to an anchor.
pub fn render_toc_link(text: &str, anchor: &str) -> String {
    format!("[{}](#{})", escape_brackets(text), anchor)
}

/// Generate a TOC list item.
pub fn render_toc_item(text: &str, anchor: &str) -> String {
    format!("* {}", render_toc_link(text, anchor))
}

/// GitHub heading anchor slug generation.
///
/// - lowercase
/// - remove all chars that aren't alphanumeric, space, or hyphen
/// - replace spaces with hyphens
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
        // All other chars (including '.', '#', '$', '_') are stripped
    }
    slug.replace(' ', "-")
}

fn escape_brackets(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}
