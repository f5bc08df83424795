//! Core structural diff algorithm.
//!
//! Two mappings are compared key by key over the sorted union of their keys,
//! producing a [`DiffTree`] whose nodes are sorted by key at every level. When
//! both sides of a key hold mappings the comparison recurses and the node is
//! tagged `unchanged` with the nested result as its children; the changes live
//! in the subtree. A mapping present on only one side is [`flatten`]ed into an
//! all-unchanged projection of its shape.
//!
//! # Examples
//!
//! ```
//! use gendiff::{compare, parse_json, Status};
//!
//! let old = parse_json(r#"{"host": "hexlet.io", "timeout": 50}"#).unwrap();
//! let new = parse_json(r#"{"host": "hexlet.io", "timeout": 20}"#).unwrap();
//!
//! let tree = compare(&old, &new).unwrap();
//! assert_eq!(tree.len(), 2);
//! assert!(matches!(tree.nodes()[1].status, Status::Updated { .. }));
//! ```

use crate::error::DiffError;
use crate::tree::{Document, Mapping, Scalar};
use std::collections::BTreeSet;
use tracing::debug;

/// One side of a node: a scalar leaf or a nested tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Scalar(Scalar),
    Children(DiffTree),
}

/// What happened to a key.
///
/// `Updated` never carries children on both sides: two mappings at the same
/// key are always compared recursively into an `Unchanged` node instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    /// Key exists in new but not old
    Added(Payload),
    /// Key exists in old but not new
    Removed(Payload),
    /// Key holds equal scalars, or mappings on both sides
    Unchanged(Payload),
    /// Key exists in both with values that cannot be compared as one subtree
    Updated { from: Payload, to: Payload },
}

/// A single entry of a diff tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffNode {
    pub key: String,
    pub status: Status,
}

/// An ordered sequence of nodes, sorted by key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffTree {
    nodes: Vec<DiffNode>,
}

/// Leaf-level counts over a whole tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl DiffStats {
    /// Returns the total number of changes (excluding unchanged).
    pub fn total_changes(&self) -> usize {
        self.added + self.removed + self.updated
    }

    /// Returns true if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.total_changes() == 0
    }
}

impl DiffNode {
    pub fn new(key: impl Into<String>, status: Status) -> Self {
        Self {
            key: key.into(),
            status,
        }
    }
}

impl DiffTree {
    pub fn new(nodes: Vec<DiffNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[DiffNode] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up the node for `key` at this level.
    pub fn get(&self, key: &str) -> Option<&DiffNode> {
        self.nodes
            .binary_search_by(|node| node.key.as_str().cmp(key))
            .ok()
            .map(|idx| &self.nodes[idx])
    }

    /// Counts added, removed and updated nodes plus unchanged leaves.
    ///
    /// Unchanged nodes with children are descended into rather than counted.
    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats::default();
        self.collect_stats(&mut stats);
        stats
    }

    fn collect_stats(&self, stats: &mut DiffStats) {
        for node in &self.nodes {
            match &node.status {
                Status::Added(_) => stats.added += 1,
                Status::Removed(_) => stats.removed += 1,
                Status::Updated { .. } => stats.updated += 1,
                Status::Unchanged(Payload::Children(children)) => children.collect_stats(stats),
                Status::Unchanged(Payload::Scalar(_)) => stats.unchanged += 1,
            }
        }
    }

    /// Returns true if any node at any depth is added, removed or updated.
    pub fn has_changes(&self) -> bool {
        self.nodes.iter().any(|node| match &node.status {
            Status::Unchanged(Payload::Children(children)) => children.has_changes(),
            Status::Unchanged(Payload::Scalar(_)) => false,
            _ => true,
        })
    }
}

impl<'a> IntoIterator for &'a DiffTree {
    type Item = &'a DiffNode;
    type IntoIter = std::slice::Iter<'a, DiffNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Compares two documents, both of which must be mappings.
///
/// # Errors
///
/// Returns `DiffError::InvalidInputKind` if either document is a bare scalar.
pub fn compare(old: &Document, new: &Document) -> Result<DiffTree, DiffError> {
    let old_map = expect_mapping(old, "old")?;
    let new_map = expect_mapping(new, "new")?;

    let tree = compare_mappings(old_map, new_map);
    debug!(
        old_keys = old_map.len(),
        new_keys = new_map.len(),
        nodes = tree.len(),
        "compared documents"
    );
    Ok(tree)
}

fn expect_mapping<'a>(doc: &'a Document, side: &'static str) -> Result<&'a Mapping, DiffError> {
    doc.as_mapping().ok_or(DiffError::InvalidInputKind {
        side,
        found: doc.type_name(),
    })
}

/// Compares two mappings over the sorted union of their keys.
pub fn compare_mappings(old: &Mapping, new: &Mapping) -> DiffTree {
    let keys: BTreeSet<&String> = old.keys().chain(new.keys()).collect();

    let mut nodes = Vec::with_capacity(keys.len());
    for key in keys {
        let status = match (old.get(key), new.get(key)) {
            (None, Some(added)) => Status::Added(project(added)),
            (Some(removed), None) => Status::Removed(project(removed)),
            (Some(a), Some(b)) => compare_values(a, b),
            (None, None) => continue,
        };
        nodes.push(DiffNode::new(key.clone(), status));
    }

    DiffTree::new(nodes)
}

fn compare_values(old: &Document, new: &Document) -> Status {
    match (old, new) {
        (Document::Mapping(a), Document::Mapping(b)) => {
            Status::Unchanged(Payload::Children(compare_mappings(a, b)))
        }
        (Document::Scalar(a), Document::Scalar(b)) if a == b => {
            Status::Unchanged(Payload::Scalar(a.clone()))
        }
        _ => Status::Updated {
            from: project(old),
            to: project(new),
        },
    }
}

/// Expresses one side of a node: scalars as-is, mappings flattened.
fn project(doc: &Document) -> Payload {
    match doc {
        Document::Scalar(scalar) => Payload::Scalar(scalar.clone()),
        Document::Mapping(map) => Payload::Children(flatten(map)),
    }
}

/// Projects a mapping into a tree where every node is `unchanged`.
pub fn flatten(map: &Mapping) -> DiffTree {
    let nodes = map
        .iter()
        .map(|(key, value)| DiffNode::new(key.clone(), Status::Unchanged(project(value))))
        .collect();
    DiffTree::new(nodes)
}
