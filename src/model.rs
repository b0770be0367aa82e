//! Data model for documentation records — format-agnostic.

use indexmap::IndexMap;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Kind of a documented symbol.
///
/// Parsers emit the coarse kinds; `Method` and `Prototype` are refined into
/// their scoped variants (or `Event`/`Utility`) once the final id is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Section,
    Namespace,
    Class,
    Mixin,
    Constructor,
    Method,
    #[serde(alias = "property")]
    Prototype,
    Constant,
    Event,
    Utility,
    #[serde(rename = "class method")]
    ClassMethod,
    #[serde(rename = "instance method")]
    InstanceMethod,
    #[serde(rename = "class prototype")]
    ClassPrototype,
    #[serde(rename = "instance prototype")]
    InstancePrototype,
    #[serde(other)]
    Unknown,
}

/// Which side of a type a member lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Class,
    Instance,
}

impl RecordType {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordType::Section => "section",
            RecordType::Namespace => "namespace",
            RecordType::Class => "class",
            RecordType::Mixin => "mixin",
            RecordType::Constructor => "constructor",
            RecordType::Method => "method",
            RecordType::Prototype => "prototype",
            RecordType::Constant => "constant",
            RecordType::Event => "event",
            RecordType::Utility => "utility",
            RecordType::ClassMethod => "class method",
            RecordType::InstanceMethod => "instance method",
            RecordType::ClassPrototype => "class prototype",
            RecordType::InstancePrototype => "instance prototype",
            RecordType::Unknown => "unknown",
        }
    }

    /// Whether this kind still awaits classification by id shape.
    pub fn is_member(self) -> bool {
        matches!(self, RecordType::Method | RecordType::Prototype)
    }

    /// The scoped variant of a member kind. Other kinds are returned as is.
    pub fn scoped(self, scope: Scope) -> Self {
        match (self, scope) {
            (RecordType::Method, Scope::Class) => RecordType::ClassMethod,
            (RecordType::Method, Scope::Instance) => RecordType::InstanceMethod,
            (RecordType::Prototype, Scope::Class) => RecordType::ClassPrototype,
            (RecordType::Prototype, Scope::Instance) => RecordType::InstancePrototype,
            (other, _) => other,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record exactly as the comment parser hands it over.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    /// Unqualified id. Falls back to the record set key when empty.
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecordType,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub line: usize,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub alias_of: Option<String>,
    #[serde(default)]
    pub superclass: Option<String>,
    /// Declared as `Type.method(@self, ...)`.
    #[serde(default)]
    pub bound: bool,
    /// Type-specific fields (signatures, arguments, ...) passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Records of one source file keyed by unqualified id, in parser order.
pub type RecordSet = IndexMap<String, RawRecord>;

/// A record as it moves through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecordType,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub path: String,
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superclass: Option<String>,
    pub aliases: Vec<String>,
    /// Present on classes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subclasses: Option<Vec<String>>,
    /// Final id of the bound/instance counterpart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    pub fn from_raw(raw: RawRecord, href: Option<String>) -> Self {
        let subclasses = (raw.kind == RecordType::Class).then(Vec::new);
        Record {
            id: raw.id,
            kind: raw.kind,
            name: String::new(),
            section: raw.section.filter(|s| !s.is_empty()),
            path: String::new(),
            line: raw.line,
            href,
            description: raw.description,
            short_description: raw.short_description,
            alias_of: raw.alias_of,
            superclass: raw.superclass,
            aliases: Vec::new(),
            subclasses,
            bound: None,
            extra: raw.extra,
        }
    }

    /// The synthetic section collecting records whose section never resolved.
    pub fn root() -> Self {
        Record {
            id: String::new(),
            kind: RecordType::Section,
            name: String::new(),
            section: None,
            path: String::new(),
            line: 0,
            href: None,
            description: None,
            short_description: None,
            alias_of: None,
            superclass: None,
            aliases: Vec::new(),
            subclasses: None,
            bound: None,
            extra: Map::new(),
        }
    }

    pub fn is_section(&self) -> bool {
        self.kind == RecordType::Section
    }
}

/// Index of a record in a [`Documentation`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// A record plus the records nested under it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub record: Record,
    pub children: Vec<NodeId>,
    /// Key under which the record is listed. Differs from `record.id` for
    /// constructors, whose display id is `new Foo`.
    pub key: String,
}

/// The assembled documentation handed to a renderer.
///
/// Records live in an arena; `list` indexes every non-section record by its
/// final id, and the top-level sequence holds sections plus any records
/// whose section could not be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Documentation {
    pub(crate) nodes: Vec<Node>,
    pub(crate) list: IndexMap<String, NodeId>,
    pub(crate) top_level: Vec<NodeId>,
}

impl Documentation {
    pub fn record(&self, id: NodeId) -> &Record {
        &self.nodes[id.0].record
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Look up a non-section record by its final id.
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.list.get(id).map(|&n| self.record(n))
    }

    pub fn lookup(&self, id: &str) -> Option<NodeId> {
        self.list.get(id).copied()
    }

    /// Non-section records keyed by final id.
    pub fn list(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.list.iter().map(|(k, &n)| (k.as_str(), self.record(n)))
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Top-level entries in canonical order.
    pub fn top_level(&self) -> &[NodeId] {
        &self.top_level
    }

    /// Top-level section with the given (case-insensitive) id.
    pub fn section(&self, id: &str) -> Option<NodeId> {
        let id = id.to_lowercase();
        self.top_level
            .iter()
            .copied()
            .find(|&n| self.record(n).is_section() && self.record(n).id == id)
    }

    /// Walk the tree depth-first, parents before children.
    pub fn walk(&self) -> Vec<(usize, NodeId)> {
        let mut out = Vec::new();
        let mut stack: Vec<(usize, NodeId)> =
            self.top_level.iter().rev().map(|&n| (0, n)).collect();
        while let Some((depth, n)) = stack.pop() {
            out.push((depth, n));
            stack.extend(self.children(n).iter().rev().map(|&c| (depth + 1, c)));
        }
        out
    }
}

/// Serializes as `{ "list": { id: record }, "tree": { "children": [...] } }`.
///
/// Records in `tree` carry their nested children; records in `list` refer
/// to their children by `list` key.
impl Serialize for Documentation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let list: IndexMap<&str, NodeView<'_>> = self
            .list
            .iter()
            .map(|(k, &n)| (k.as_str(), NodeView::new(self, n, false)))
            .collect();
        let mut state = serializer.serialize_struct("Documentation", 2)?;
        state.serialize_field("list", &list)?;
        state.serialize_field(
            "tree",
            &TreeView {
                children: Children {
                    doc: self,
                    ids: &self.top_level,
                    nested: true,
                },
            },
        )?;
        state.end()
    }
}

#[derive(Serialize)]
struct TreeView<'a> {
    children: Children<'a>,
}

#[derive(Serialize)]
struct NodeView<'a> {
    #[serde(flatten)]
    record: &'a Record,
    children: Children<'a>,
}

impl<'a> NodeView<'a> {
    fn new(doc: &'a Documentation, id: NodeId, nested: bool) -> Self {
        NodeView {
            record: doc.record(id),
            children: Children {
                doc,
                ids: doc.children(id),
                nested,
            },
        }
    }
}

struct Children<'a> {
    doc: &'a Documentation,
    ids: &'a [NodeId],
    nested: bool,
}

impl Serialize for Children<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.nested {
            serializer.collect_seq(self.ids.iter().map(|&n| NodeView::new(self.doc, n, true)))
        } else {
            serializer.collect_seq(self.ids.iter().map(|&n| self.doc.nodes[n.0].key.as_str()))
        }
    }
}
