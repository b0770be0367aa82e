//! ndoc — assemble parsed documentation comments into a navigable tree.
//!
//! Flat per-symbol records (`Ajax.Updater`, `Element#hide`, `document@dom:loaded`)
//! are merged across files, given a section when they lack one, nested by
//! their qualified ids and cross-linked through aliases and subclasses.
//!
//! ```no_run
//! use ndoc::{Options, Registry};
//! use std::path::PathBuf;
//!
//! let registry = Registry::with_defaults();
//! let files = vec![PathBuf::from("doc/ajax.json")];
//! let doc = registry.invoke("ndoc", &files, &Options::default())?;
//! for &section in doc.top_level() {
//!     println!("{}", doc.record(section).id);
//! }
//! # Ok::<(), ndoc::Error>(())
//! ```

pub mod error;
pub mod ident;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod registry;
pub mod render;
mod toc;

pub use error::{Error, Result};
pub use model::{Documentation, Node, NodeId, RawRecord, Record, RecordSet, RecordType};
pub use parser::{CommentParser, JsonRecords};
pub use pipeline::{assemble, LinkFormatter, Options, SourceFile};
pub use registry::{DocParser, NdocParser, Registry};
