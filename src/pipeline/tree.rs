//! Stage 4: tree assembly.
//!
//! Walks the canonical order backwards and attaches each record to the
//! record whose id is the part before its parent boundary. A parent always
//! sorts before its children, so by the time a record is attached its own
//! children have already been collected under it.

use crate::ident;
use crate::model::{Node, NodeId};
use crate::pipeline::FlatList;
use std::collections::HashMap;
use tracing::trace;

/// Records linked into a forest. Node indices follow the canonical order.
#[derive(Debug)]
pub struct Forest {
    pub nodes: Vec<Node>,
    /// Unattached records (sections, the synthetic root, orphans) in canonical order.
    pub roots: Vec<NodeId>,
}

pub fn assemble(mut list: FlatList, order: &[String]) -> Forest {
    let index: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(i, key)| (key.as_str(), i))
        .collect();

    let mut parent: Vec<Option<usize>> = vec![None; order.len()];
    let mut children: Vec<Vec<NodeId>> = vec![Vec::new(); order.len()];

    for (i, key) in order.iter().enumerate().rev() {
        let Some(prefix) = ident::parent_key(key) else {
            continue;
        };
        // Only records still at the top level can adopt.
        match index.get(prefix) {
            Some(&p) if p != i && parent[p].is_none() => {
                parent[i] = Some(p);
                children[p].push(NodeId(i));
            }
            _ => trace!(id = %key, "no parent record"),
        }
    }

    let nodes = order
        .iter()
        .zip(children)
        .filter_map(|(key, mut children)| {
            children.reverse();
            let record = list.swap_remove(key)?;
            Some(Node {
                record,
                children,
                key: key.clone(),
            })
        })
        .collect::<Vec<_>>();
    debug_assert_eq!(nodes.len(), order.len());

    let roots = (0..order.len())
        .filter(|&i| parent[i].is_none())
        .map(NodeId)
        .collect();

    Forest { nodes, roots }
}
