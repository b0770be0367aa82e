//! Comment parser seam.
//!
//! Turning raw doc comments into records happens upstream. This crate only
//! needs something that yields a [`RecordSet`] per file; [`JsonRecords`]
//! reads record sets that were serialized as JSON.

pub mod json;

pub use json::JsonRecords;

use crate::model::RecordSet;

/// Produces the flat record set for one source file.
pub trait CommentParser {
    type Error: std::error::Error + Send + Sync + 'static;

    fn parse(&self, text: &str) -> Result<RecordSet, Self::Error>;
}
