//! Nested-brace rendering.
//!
//! Every depth indents by four spaces; the last two columns before a key hold
//! the sign (`+ `, `- ` or two spaces). Closing braces are never signed.

use crate::diff::{DiffTree, Payload, Status};

const INDENT: &str = "    ";

pub(super) fn render(tree: &DiffTree) -> String {
    let mut lines = vec!["{".to_string()];
    render_tree(tree, 1, &mut lines);
    lines.push("}".to_string());
    lines.join("\n")
}

fn render_tree(tree: &DiffTree, depth: usize, lines: &mut Vec<String>) {
    for node in tree {
        match &node.status {
            Status::Added(payload) => render_item(&node.key, payload, depth, '+', lines),
            Status::Removed(payload) => render_item(&node.key, payload, depth, '-', lines),
            Status::Unchanged(payload) => render_item(&node.key, payload, depth, ' ', lines),
            Status::Updated { from, to } => {
                render_item(&node.key, from, depth, '-', lines);
                render_item(&node.key, to, depth, '+', lines);
            }
        }
    }
}

fn render_item(key: &str, payload: &Payload, depth: usize, sign: char, lines: &mut Vec<String>) {
    let prefix = format!("{}  {} ", INDENT.repeat(depth - 1), sign);
    match payload {
        Payload::Scalar(value) => lines.push(format!("{}{}: {}", prefix, key, value)),
        Payload::Children(children) => {
            lines.push(format!("{}{}: {{", prefix, key));
            render_tree(children, depth + 1, lines);
            lines.push(format!("{}}}", INDENT.repeat(depth)));
        }
    }
}
