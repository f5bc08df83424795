//! Sentence-per-change rendering.

use crate::diff::{DiffTree, Payload, Status};
use crate::tree::Scalar;

pub(super) fn render(tree: &DiffTree) -> String {
    let mut lines = Vec::new();
    let mut path = Vec::new();
    render_tree(tree, &mut path, &mut lines);
    lines.join("\n")
}

fn render_tree<'a>(tree: &'a DiffTree, path: &mut Vec<&'a str>, lines: &mut Vec<String>) {
    for node in tree {
        path.push(&node.key);
        let property = path.join(".");
        match &node.status {
            Status::Added(payload) => lines.push(format!(
                "Property '{}' was added with value: {}",
                property,
                format_value(payload)
            )),
            Status::Removed(_) => lines.push(format!("Property '{}' was removed", property)),
            Status::Updated { from, to } => lines.push(format!(
                "Property '{}' was updated. From {} to {}",
                property,
                format_value(from),
                format_value(to)
            )),
            Status::Unchanged(Payload::Children(children)) => render_tree(children, path, lines),
            Status::Unchanged(Payload::Scalar(_)) => {}
        }
        path.pop();
    }
}

/// Strings are single-quoted, nested values collapse to `[complex value]`.
fn format_value(payload: &Payload) -> String {
    match payload {
        Payload::Scalar(Scalar::String(s)) => format!("'{}'", s),
        Payload::Scalar(other) => other.to_string(),
        Payload::Children(_) => "[complex value]".to_string(),
    }
}
