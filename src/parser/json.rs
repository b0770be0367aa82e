//! JSON record sets: one object per file, keyed by unqualified id.
//!
//! ```json
//! {
//!   "Ajax": { "id": "Ajax", "type": "namespace", "section": "Utilities", "line": 3 },
//!   "Ajax.Updater": { "id": "Ajax.Updater", "type": "class", "line": 40 }
//! }
//! ```

use crate::model::RecordSet;
use crate::parser::CommentParser;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRecords;

impl CommentParser for JsonRecords {
    type Error = serde_json::Error;

    fn parse(&self, text: &str) -> Result<RecordSet, Self::Error> {
        let mut records: RecordSet = serde_json::from_str(text)?;
        for (key, record) in records.iter_mut() {
            if record.id.is_empty() {
                record.id = key.clone();
            }
        }
        Ok(records)
    }
}
