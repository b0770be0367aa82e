//! Stage 3: canonical ordering of qualified ids.
//!
//! Tree assembly relies on this order: a parent id is a strict prefix of its
//! children's ids and therefore always sorts before them.

use crate::pipeline::FlatList;

/// All keys sorted case-insensitively. Keys that only differ in case are
/// ordered by their exact text so the result never depends on input order.
pub fn canonical(list: &FlatList) -> Vec<String> {
    let mut keys: Vec<String> = list.keys().cloned().collect();
    keys.sort_by_cached_key(|key| (key.to_lowercase(), key.clone()));
    keys
}
