//! Stage 1: merge per-file record sets into one flat list.

use crate::ident;
use crate::model::{RawRecord, Record, RecordType};
use crate::pipeline::{FlatList, Options, SourceFile};
use std::path::Path;
use tracing::trace;

/// Merge files in order. Later files overwrite earlier records with the same
/// qualified id. The list starts with the synthetic root section `""`.
pub fn merge(files: Vec<SourceFile>, options: &Options) -> FlatList {
    let mut list = FlatList::new();
    list.insert(String::new(), Record::root());

    for file in files {
        for (_, raw) in file.records {
            merge_record(&mut list, &file.path, raw, options);
        }
    }

    list
}

fn merge_record(list: &mut FlatList, file: &Path, raw: RawRecord, options: &Options) {
    let href = options.href(file, raw.line);
    let bound = raw.bound;
    let mut record = Record::from_raw(raw, href);

    // Sections are keyed by their own id and never prefixed.
    if record.is_section() {
        insert(list, record.id.clone(), record);
        return;
    }

    let section = record.section.clone();
    let clone = if bound && record.kind == RecordType::Method {
        bound_counterpart(&mut record)
    } else {
        None
    };

    let key = ident::qualify(section.as_deref(), &record.id);
    record.id = key.clone();
    insert(list, key, record);

    if let Some(mut clone) = clone {
        let key = ident::qualify(section.as_deref(), &clone.id);
        clone.id = key.clone();
        insert(list, key, clone);
    }
}

/// Clone a bound class method into its instance counterpart and link the
/// two through `bound`. Ids are still unqualified here, so the links hold
/// the final ids.
fn bound_counterpart(record: &mut Record) -> Option<Record> {
    let instance_id = ident::instance_member(&record.id)?;
    let mut clone = record.clone();
    clone.id = instance_id;
    clone.bound = Some(record.id.clone());
    record.bound = Some(clone.id.clone());
    trace!(class = %record.id, instance = %clone.id, "cloned bound method");
    Some(clone)
}

fn insert(list: &mut FlatList, key: String, record: Record) {
    if let Some(previous) = list.insert(key, record) {
        trace!(id = %previous.id, "record overwritten by later definition");
    }
}
