//! Pluggable documentation parsers, looked up by name.

use crate::error::{Error, Result};
use crate::model::Documentation;
use crate::parser::{CommentParser, JsonRecords};
use crate::pipeline::{self, Options, SourceFile};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Turns source texts into documentation.
pub trait DocParser {
    /// Parse already-read sources, each paired with the path it came from.
    fn parse_texts(&self, texts: Vec<(PathBuf, String)>, options: &Options) -> Result<Documentation>;

    /// Read `files` and parse them. Every file is read before any is parsed,
    /// so a missing file fails ahead of a malformed one.
    fn parse(&self, files: &[PathBuf], options: &Options) -> Result<Documentation> {
        let texts = files
            .iter()
            .map(|path| {
                fs::read_to_string(path)
                    .map(|text| (path.clone(), text))
                    .map_err(|source| Error::Read {
                        path: path.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        self.parse_texts(texts, options)
    }
}

/// The `ndoc` parser: comment records assembled into a section tree.
#[derive(Debug, Default, Clone)]
pub struct NdocParser<P = JsonRecords> {
    comments: P,
}

impl<P: CommentParser> NdocParser<P> {
    pub fn new(comments: P) -> Self {
        NdocParser { comments }
    }
}

impl<P: CommentParser> DocParser for NdocParser<P> {
    fn parse_texts(&self, texts: Vec<(PathBuf, String)>, options: &Options) -> Result<Documentation> {
        let mut sources = Vec::with_capacity(texts.len());
        for (path, text) in texts {
            let records = self.comments.parse(&text).map_err(|e| Error::Parse {
                path: path.clone(),
                source: Box::new(e),
            })?;
            debug!(file = %path.display(), records = records.len(), "parsed");
            sources.push(SourceFile { path, records });
        }

        Ok(pipeline::assemble(sources, options))
    }
}

/// Named parsers available to the host.
#[derive(Default)]
pub struct Registry {
    parsers: HashMap<String, Box<dyn DocParser>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in `ndoc` parser.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("ndoc", NdocParser::new(JsonRecords));
        registry
    }

    /// Register a parser, returning the one previously stored under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        parser: impl DocParser + 'static,
    ) -> Option<Box<dyn DocParser>> {
        self.parsers.insert(name.into(), Box::new(parser))
    }

    pub fn invoke(&self, name: &str, files: &[PathBuf], options: &Options) -> Result<Documentation> {
        self.get(name)?.parse(files, options)
    }

    /// Like [`Registry::invoke`], for sources that are already in memory.
    pub fn invoke_texts(
        &self,
        name: &str,
        texts: Vec<(PathBuf, String)>,
        options: &Options,
    ) -> Result<Documentation> {
        self.get(name)?.parse_texts(texts, options)
    }

    fn get(&self, name: &str) -> Result<&dyn DocParser> {
        self.parsers
            .get(name)
            .map(|parser| parser.as_ref())
            .ok_or_else(|| Error::UnknownParser(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Empty;

    impl DocParser for Empty {
        fn parse_texts(&self, _texts: Vec<(PathBuf, String)>, _options: &Options) -> Result<Documentation> {
            Ok(pipeline::assemble(Vec::new(), &Options::default()))
        }
    }

    fn text(path: &str, json: &str) -> Vec<(PathBuf, String)> {
        vec![(PathBuf::from(path), json.to_string())]
    }

    #[test]
    fn defaults_include_ndoc() {
        let doc = Registry::with_defaults()
            .invoke_texts("ndoc", text("a.json", r#"{"Foo": {"type": "class"}}"#), &Options::default())
            .unwrap();
        assert_eq!(doc.get("Foo").unwrap().id, "Foo");
    }

    #[test]
    fn register_replaces_and_returns_previous() {
        let mut registry = Registry::with_defaults();
        assert!(registry.register("ndoc", Empty).is_some());
        assert!(registry.register("other", Empty).is_none());

        // The replacement is what runs now.
        let doc = registry
            .invoke_texts("ndoc", text("a.json", r#"{"Foo": {"type": "class"}}"#), &Options::default())
            .unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn in_memory_sources_need_a_registered_parser() {
        let err = Registry::with_defaults()
            .invoke_texts("bogus", text("stdin", "{}"), &Options::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownParser(ref name) if name == "bogus"));
    }

    #[test]
    fn in_memory_parse_error_names_source() {
        let err = Registry::with_defaults()
            .invoke_texts("ndoc", text("stdin", "{ nope"), &Options::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "failed to parse records from stdin");
    }

    #[test]
    fn unknown_parser_is_an_error() {
        let err = Registry::new()
            .invoke("pdoc", &[], &Options::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownParser(ref name) if name == "pdoc"));
    }

    #[test]
    fn missing_file_fails_before_parsing() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        let missing = dir.path().join("missing.json");

        // The malformed file comes first but the read error wins.
        let err = Registry::with_defaults()
            .invoke("ndoc", &[bad, missing.clone()], &Options::default())
            .unwrap_err();
        match err {
            Error::Read { path, .. } => assert_eq!(path, missing),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "[1, 2]").unwrap();
        let err = Registry::with_defaults()
            .invoke("ndoc", &[bad.clone()], &Options::default())
            .unwrap_err();
        assert!(matches!(err, Error::Parse { ref path, .. } if *path == bad));
    }
}
