#![allow(dead_code)]

use rtscope_api::NodeKind;
use std::collections::HashMap;
use std::ops::Range;
use std::path::PathBuf;

pub type NodeId = usize;

pub const ROOT: NodeId = 0;

struct NodeSpec {
    kind: NodeKind,
    name: String,
    location: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Writes index files in the on-disk layout for tests.
pub struct IndexBuilder {
    nodes: Vec<NodeSpec>,
    extra_entries: Vec<(String, NodeId)>,
    dictionary: Vec<(String, Vec<String>)>,
    stride: Option<usize>,
    fold_case: bool,
}

pub struct BuiltIndex {
    pub bytes: Vec<u8>,
    pub offsets: Vec<usize>,
    pub dictionary: Range<usize>,
}

impl BuiltIndex {
    pub fn offset(&self, id: NodeId) -> usize {
        self.offsets[id]
    }

    pub fn write(&self, dir: &std::path::Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, &self.bytes).unwrap();
        path
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeSpec {
                kind: NodeKind::Root,
                name: String::new(),
                location: None,
                parent: None,
                children: Vec::new(),
            }],
            extra_entries: Vec::new(),
            dictionary: Vec::new(),
            stride: None,
            fold_case: false,
        }
    }

    /// Append a node as the last child of `parent`.
    pub fn node(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        name: &str,
        location: Option<&str>,
    ) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(NodeSpec {
            kind,
            name: name.to_string(),
            location: location.map(str::to_string),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    pub fn symbol(&mut self, name: &str, locations: &[&str]) -> &mut Self {
        self.dictionary.push((
            name.to_string(),
            locations.iter().map(|l| l.to_string()).collect(),
        ));
        self
    }

    /// Add a lookup entry whose key duplicates `location`, pointing at `node`.
    pub fn duplicate_entry(&mut self, location: &str, node: NodeId) -> &mut Self {
        self.extra_entries.push((location.to_string(), node));
        self
    }

    /// Entry width including the 4-byte node offset.
    pub fn stride(&mut self, stride: usize) -> &mut Self {
        self.stride = Some(stride);
        self
    }

    /// Sort the lookup table ignoring ASCII case.
    pub fn fold_case(&mut self) -> &mut Self {
        self.fold_case = true;
        self
    }

    pub fn build(&self) -> BuiltIndex {
        let mut entries: Vec<(String, NodeId)> = self
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(id, n)| n.location.clone().map(|l| (l, id)))
            .chain(self.extra_entries.iter().cloned())
            .collect();
        let fold = self.fold_case;
        entries.sort_by(|a, b| {
            if fold {
                a.0.to_ascii_lowercase().cmp(&b.0.to_ascii_lowercase())
            } else {
                a.0.cmp(&b.0)
            }
        });
        assert!(!entries.is_empty(), "an index needs at least one located node");

        let stride = self.stride.unwrap_or_else(|| {
            4 + entries.iter().map(|(l, _)| l.len() + 1).max().unwrap_or(4)
        });

        let header_len = 20;
        let table_len = entries.len() * stride;

        // Node records follow the table, root first.
        let mut offsets = Vec::with_capacity(self.nodes.len());
        let mut pos = header_len + table_len;
        for node in &self.nodes {
            offsets.push(pos);
            pos += 20 + node.name.len() + 1;
        }

        // String pool for every location used by nodes or the dictionary.
        let mut pool: Vec<String> = Vec::new();
        let mut pool_offsets: HashMap<String, usize> = HashMap::new();
        let located = self.nodes.iter().filter_map(|n| n.location.as_ref());
        let listed = self.dictionary.iter().flat_map(|(_, locs)| locs.iter());
        for location in located.chain(listed) {
            if !pool_offsets.contains_key(location) {
                pool_offsets.insert(location.clone(), pos);
                pos += location.len() + 1;
                pool.push(location.clone());
            }
        }

        let dictionary_start = pos;

        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"Rt\0\0");
        push_i32(&mut bytes, entries.len());
        push_i32(&mut bytes, stride);
        push_i32(&mut bytes, dictionary_start);
        push_i32(&mut bytes, self.dictionary.len());

        for (location, id) in &entries {
            push_i32(&mut bytes, offsets[*id]);
            let mut key = location.as_bytes().to_vec();
            key.resize(stride - 4, 0);
            bytes.extend_from_slice(&key);
        }

        for (id, node) in self.nodes.iter().enumerate() {
            let next_sibling = node.parent.and_then(|p| {
                let siblings = &self.nodes[p].children;
                let me = siblings.iter().position(|&c| c == id).unwrap();
                siblings.get(me + 1).map(|&s| offsets[s])
            });
            bytes.extend_from_slice(&node.kind.code().to_le_bytes());
            push_i32(&mut bytes, node.location.as_ref().map_or(0, |l| pool_offsets[l]));
            push_i32(&mut bytes, node.parent.map_or(0, |p| offsets[p]));
            push_i32(&mut bytes, node.children.first().map_or(0, |&c| offsets[c]));
            push_i32(&mut bytes, next_sibling.unwrap_or(0));
            bytes.extend_from_slice(node.name.as_bytes());
            bytes.push(0);
        }

        for location in &pool {
            bytes.extend_from_slice(location.as_bytes());
            bytes.push(0);
        }
        assert_eq!(bytes.len(), dictionary_start);

        for (name, locations) in &self.dictionary {
            bytes.extend_from_slice(name.as_bytes());
            bytes.push(0);
            for location in locations {
                push_i32(&mut bytes, pool_offsets[location]);
            }
            push_i32(&mut bytes, 0);
        }
        let dictionary = dictionary_start..bytes.len();

        BuiltIndex {
            bytes,
            offsets,
            dictionary,
        }
    }
}

fn push_i32(bytes: &mut Vec<u8>, value: usize) {
    bytes.extend_from_slice(&(value as i32).to_le_bytes());
}

pub struct Sample {
    pub index: BuiltIndex,
    pub runner: NodeId,
    pub declaration: NodeId,
    pub field: NodeId,
    pub definition: NodeId,
    pub color: NodeId,
    pub red: NodeId,
    pub widget: NodeId,
}

/// A small project: one namespace holding a class with a declared/defined method,
/// a field, an enum, and references to the class from another file.
pub fn sample() -> Sample {
    let mut b = IndexBuilder::new();
    let app = b.node(ROOT, NodeKind::Namespace, "app", Some("a.c:1:1"));
    let runner = b.node(app, NodeKind::Class, "Runner", Some("a.c:2:1"));
    let declaration = b.node(runner, NodeKind::MethodDeclaration, "run", Some("a.c:3:5"));
    let field = b.node(runner, NodeKind::Field, "x", Some("a.c:4:5"));
    let definition = b.node(runner, NodeKind::MethodDefinition, "run", Some("a.c:9:1"));
    let color = b.node(runner, NodeKind::Enum, "Color", Some("a.c:12:1"));
    let red = b.node(color, NodeKind::EnumValue, "Red", Some("a.c:12:14"));
    b.node(runner, NodeKind::Reference, "Runner", Some("b.c:5:3"));
    b.node(runner, NodeKind::Reference, "Runner", Some("b.c:7:9"));
    let widget = b.node(app, NodeKind::Class, "Widget", Some("b.c:1:1"));

    b.symbol("Runner", &["a.c:2:1", "b.c:5:3", "b.c:7:9"])
        .symbol("run", &["a.c:3:5", "a.c:9:1"])
        .symbol("x", &["a.c:4:5"])
        .symbol("Color", &["a.c:12:1"])
        .symbol("Red", &["a.c:12:14"])
        .symbol("Widget", &["b.c:1:1"]);

    Sample {
        index: b.build(),
        runner,
        declaration,
        field,
        definition,
        color,
        red,
        widget,
    }
}
