//! Stage 2: section inference.
//!
//! Records parsed without a section are keyed `.Foo.bar`. They borrow the
//! section of the first record whose second segment matches, so
//! `.Ajax.Updater` joins `Utilities` when `Utilities.Ajax` exists.

use crate::ident;
use crate::pipeline::FlatList;
use tracing::{debug, trace};

struct Entry {
    key: String,
    segments: Vec<String>,
}

impl Entry {
    fn section(&self) -> &str {
        &self.segments[0]
    }

    fn head(&self) -> Option<&str> {
        self.segments.get(1).map(String::as_str)
    }
}

/// Resolve missing sections in one pass. Matches are taken from a snapshot of
/// the list, so a record resolved here never serves as a match for another.
pub fn resolve(mut list: FlatList) -> FlatList {
    let table: Vec<Entry> = list
        .keys()
        .filter(|key| !key.is_empty())
        .map(|key| Entry {
            key: key.clone(),
            segments: ident::segments(key).into_iter().map(str::to_string).collect(),
        })
        .collect();

    let mut unresolved = 0usize;
    for entry in table.iter().filter(|e| e.section().is_empty()) {
        let found = table
            .iter()
            .find(|other| !other.section().is_empty() && other.head() == entry.head());

        let Some(found) = found else {
            trace!(id = %entry.key, "no section found");
            unresolved += 1;
            continue;
        };

        let key = format!("{}{}", found.section(), entry.key);
        if let Some(mut record) = list.shift_remove(&entry.key) {
            trace!(id = %entry.key, section = found.section(), "section inferred");
            record.id = key.clone();
            list.insert(key, record);
        }
    }

    debug!(unresolved, "sections resolved");
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Record, RecordType};

    fn list(keys: &[&str]) -> FlatList {
        let mut list = FlatList::new();
        list.insert(String::new(), Record::root());
        for key in keys {
            let mut record = Record::root();
            record.id = key.to_string();
            record.kind = RecordType::Class;
            list.insert(key.to_string(), record);
        }
        list
    }

    #[test]
    fn borrows_section_from_sibling() {
        let out = resolve(list(&["Utilities", "Utilities.Ajax", ".Ajax.Updater"]));
        assert!(out.contains_key("Utilities.Ajax.Updater"));
        assert!(!out.contains_key(".Ajax.Updater"));
        assert_eq!(out["Utilities.Ajax.Updater"].id, "Utilities.Ajax.Updater");
    }

    #[test]
    fn matches_on_second_segment_across_separators() {
        let out = resolve(list(&["DOM.Element", ".Element#hide", ".Element@ready"]));
        assert!(out.contains_key("DOM.Element#hide"));
        assert!(out.contains_key("DOM.Element@ready"));
    }

    #[test]
    fn unmatched_records_stay_sectionless() {
        let out = resolve(list(&["DOM.Element", ".Form.Methods"]));
        assert!(out.contains_key(".Form.Methods"));
    }

    #[test]
    fn first_match_wins() {
        let out = resolve(list(&["A.Foo", "B.Foo", ".Foo.bar"]));
        assert!(out.contains_key("A.Foo.bar"));
        assert!(!out.contains_key("B.Foo.bar"));
    }

    #[test]
    fn sections_never_match() {
        // "Foo" the section has no second segment to compare.
        let out = resolve(list(&["Foo", ".Foo.bar"]));
        assert!(out.contains_key(".Foo.bar"));
    }

    #[test]
    fn root_is_left_alone() {
        let out = resolve(list(&["Sec.Foo", ".Foo.bar"]));
        assert_eq!(out.get_index(0).map(|(k, _)| k.as_str()), Some(""));
        assert!(out.contains_key("Sec.Foo.bar"));
    }
}
