//! Documentation tree assembly.
//!
//! Runs records through five stages, each consuming the previous stage's
//! output:
//!
//! 1. **Ingest** — merge per-file record sets into one flat list keyed by qualified id
//! 2. **Sections** — borrow a section for section-less records from a sibling
//! 3. **Order** — sort qualified ids case-insensitively
//! 4. **Tree** — attach every record to its longest existing id prefix
//! 5. **Finalize** — final ids and paths, re-typing, alias and subclass links

pub mod finalize;
pub mod ingest;
pub mod order;
pub mod sections;
pub mod tree;

use crate::model::{Documentation, Record, RecordSet};
use indexmap::IndexMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Records keyed by qualified id (`section.id`). Stages 1–4 work on this.
pub type FlatList = IndexMap<String, Record>;

/// Builds an `href` from a source file and line.
pub type LinkFormatter = Box<dyn Fn(&Path, usize) -> String>;

/// Pipeline configuration.
#[derive(Default)]
pub struct Options {
    /// When set, every record gets `href = format_link(file, line)`.
    pub format_link: Option<LinkFormatter>,
}

impl Options {
    pub fn with_link_formatter(f: impl Fn(&Path, usize) -> String + 'static) -> Self {
        Options {
            format_link: Some(Box::new(f)),
        }
    }

    /// Formatter from a template with `${file}` and `${line}` placeholders,
    /// e.g. `https://github.com/org/repo/blob/main/${file}#L${line}`.
    pub fn with_link_template(template: &str) -> Self {
        let template = template.to_string();
        Self::with_link_formatter(move |file, line| {
            template
                .replace("${file}", &file.to_string_lossy())
                .replace("${line}", &line.to_string())
        })
    }

    pub(crate) fn href(&self, file: &Path, line: usize) -> Option<String> {
        self.format_link.as_ref().map(|f| f(file, line))
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("format_link", &self.format_link.is_some())
            .finish()
    }
}

/// Parsed records of one input file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub records: RecordSet,
}

/// Assemble parsed files into documentation. Files are merged in the order given.
pub fn assemble(files: Vec<SourceFile>, options: &Options) -> Documentation {
    let list = ingest::merge(files, options);
    debug!(records = list.len() - 1, "ingested");

    let list = sections::resolve(list);
    let keys = order::canonical(&list);
    let forest = tree::assemble(list, &keys);
    debug!(top_level = forest.roots.len(), "tree assembled");

    let doc = finalize::finalize(forest);
    debug!(
        records = doc.len(),
        top_level = doc.top_level().len(),
        "documentation finalized"
    );
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_template_substitutes_file_and_line() {
        let options = Options::with_link_template("https://example.com/${file}#L${line}");
        assert_eq!(
            options.href(Path::new("src/ajax.js"), 42).as_deref(),
            Some("https://example.com/src/ajax.js#L42")
        );
    }

    #[test]
    fn no_formatter_no_href() {
        assert_eq!(Options::default().href(Path::new("a.js"), 1), None);
    }
}
