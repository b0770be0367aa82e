//! Markdown rendering of the documentation tree.
//!
//! An index of nested bullets followed by one block per record. Every block
//! carries an explicit anchor derived from the record's output path, so the
//! index links resolve whatever heading slugs the viewer generates.

use crate::error::Result;
use crate::model::{Documentation, Record};
use crate::render::Renderer;
use crate::toc::{self, Anchors};

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Documentation) -> Result<String> {
        let mut output = String::new();
        let entries = doc.walk();
        if entries.is_empty() {
            return Ok(output);
        }

        let mut anchors = Anchors::default();
        let anchored: Vec<(usize, &Record, String)> = entries
            .into_iter()
            .map(|(depth, n)| {
                let record = doc.record(n);
                (depth, record, anchors.assign(&record.path))
            })
            .collect();

        output.push_str("## Index\n\n");
        for (depth, record, anchor) in &anchored {
            output.push_str(&"  ".repeat(*depth));
            output.push_str(&toc::render_toc_item(title(record), anchor));
            output.push_str(&format!(" _{}_\n", record.kind));
        }

        for (_, record, anchor) in &anchored {
            output.push('\n');
            output.push_str(&render_record(record, anchor));
        }
        Ok(output)
    }
}

fn title(record: &Record) -> &str {
    if record.is_section() {
        &record.name
    } else {
        &record.id
    }
}

/// Render a single record's block: anchor, heading, summary and links.
fn render_record(record: &Record, anchor: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("<a id=\"{}\"></a>\n", anchor));
    let level = if record.is_section() { "##" } else { "###" };
    lines.push(format!("{} {}\n", level, title(record)));

    if !record.is_section() {
        lines.push(format!("_{}_\n", record.kind));
    }
    if let Some(ref text) = record.short_description {
        lines.push(format!("{}\n", text));
    }
    if let Some(ref text) = record.description {
        if record.short_description.as_deref() != Some(text.as_str()) {
            lines.push(format!("{}\n", text));
        }
    }
    if !record.aliases.is_empty() {
        lines.push(format!("Aliases: {}\n", record.aliases.join(", ")));
    }
    if let Some(subclasses) = record.subclasses.as_ref().filter(|s| !s.is_empty()) {
        lines.push(format!("Subclasses: {}\n", subclasses.join(", ")));
    }
    if let Some(ref href) = record.href {
        lines.push(format!("[source]({})\n", href));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordType;

    #[test]
    fn record_block_has_anchor_and_heading() {
        let mut record = Record::root();
        record.id = "Foo#bar".to_string();
        record.kind = RecordType::InstanceMethod;
        record.short_description = Some("Does bar.".to_string());
        record.href = Some("https://example.com/foo.js#L3".to_string());
        assert_eq!(
            render_record(&record, "fooprototypebar"),
            "<a id=\"fooprototypebar\"></a>\n\n### Foo#bar\n\n_instance method_\n\nDoes bar.\n\n[source](https://example.com/foo.js#L3)\n"
        );
    }

    #[test]
    fn sections_use_their_display_name() {
        let mut record = Record::root();
        record.id = "utilities".to_string();
        record.name = "Utilities".to_string();
        assert!(render_record(&record, "utilities").contains("## Utilities\n"));
    }
}
