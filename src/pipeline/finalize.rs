//! Stage 5: enrichment and finalization.

use crate::ident;
use crate::model::{Documentation, NodeId, Record, RecordType, Scope};
use crate::pipeline::tree::Forest;
use indexmap::IndexMap;
use tracing::trace;

pub fn finalize(forest: Forest) -> Documentation {
    let Forest { mut nodes, roots } = forest;

    // The synthetic root is replaced by its children.
    let mut top_level = Vec::with_capacity(roots.len());
    for root in roots {
        let node = &nodes[root.0];
        if node.record.is_section() && node.record.id.is_empty() {
            top_level.extend(node.children.iter().copied());
        } else {
            top_level.push(root);
        }
    }

    let mut visit = Vec::with_capacity(nodes.len());
    let mut stack: Vec<NodeId> = top_level.iter().rev().copied().collect();
    while let Some(n) = stack.pop() {
        visit.push(n);
        stack.extend(nodes[n.0].children.iter().rev().copied());
    }

    let mut list: IndexMap<String, NodeId> = IndexMap::new();
    for &n in &visit {
        let node = &mut nodes[n.0];
        enrich(&mut node.record);
        node.key = node.record.id.clone();
        if !node.record.is_section() {
            list.insert(node.key.clone(), n);
        }
    }

    let mut doc = Documentation {
        nodes,
        list,
        top_level,
    };
    link_aliases(&mut doc);
    link_subclasses(&mut doc);

    for n in visit {
        retype(&mut doc.nodes[n.0].record);
    }
    doc
}

/// Final id, name and path. Sections live in a lowercase namespace of
/// their own so `Ajax` the section never collides with `Ajax` the class.
fn enrich(record: &mut Record) {
    let id = ident::strip_section(&record.id).to_string();
    record.name = ident::local_name(&id).to_string();
    record.id = if record.is_section() {
        id.to_lowercase()
    } else {
        id
    };
    record.path = ident::output_path(&record.id);
    record.section = None;
}

fn link_aliases(doc: &mut Documentation) {
    let links: Vec<(NodeId, String)> = doc
        .list
        .iter()
        .filter_map(|(id, &n)| {
            let target = doc.record(n).alias_of.as_deref()?;
            match doc.list.get(target) {
                Some(&t) => Some((t, id.clone())),
                None => {
                    trace!(%id, alias_of = target, "alias target not found");
                    None
                }
            }
        })
        .collect();

    for (target, id) in links {
        doc.nodes[target.0].record.aliases.push(id);
    }
}

fn link_subclasses(doc: &mut Documentation) {
    let links: Vec<(NodeId, String)> = doc
        .list
        .iter()
        .filter_map(|(id, &n)| {
            let record = doc.record(n);
            if record.kind != RecordType::Class {
                return None;
            }
            let superclass = record.superclass.as_deref()?;
            match doc.list.get(superclass) {
                Some(&t) if doc.record(t).kind == RecordType::Class => Some((t, id.clone())),
                _ => {
                    trace!(%id, superclass, "superclass not found");
                    None
                }
            }
        })
        .collect();

    for (target, id) in links {
        if let Some(subclasses) = doc.nodes[target.0].record.subclasses.as_mut() {
            subclasses.push(id);
        }
    }
}

/// Constructor display ids, and member kinds refined by id shape.
fn retype(record: &mut Record) {
    if record.kind == RecordType::Constructor {
        record.id = ident::constructor_id(&record.id);
        return;
    }
    if !record.kind.is_member() {
        return;
    }

    let id = record.id.as_str();
    record.kind = if id.starts_with('$') {
        RecordType::Utility
    } else if id.contains('@') {
        RecordType::Event
    } else if id.contains('#') {
        record.kind.scoped(Scope::Instance)
    } else if id.contains('.') {
        record.kind.scoped(Scope::Class)
    } else {
        record.kind
    };
}
