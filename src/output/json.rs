//! Machine-readable rendering.
//!
//! The whole tree is encoded as pretty-printed JSON together with its leaf
//! statistics. Each node carries `key` and `status`; scalar sides use `value`,
//! `from` and `to`, nested sides use `children`, `fromChildren` and `toChildren`.

use crate::diff::{DiffTree, Payload, Status};
use crate::error::OutputError;
use crate::tree::Scalar;
use serde_json::{json, Map, Value};

/// Largest integer a double represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

pub(super) fn render(tree: &DiffTree) -> Result<String, OutputError> {
    let stats = tree.stats();
    let output = json!({
        "diff": tree_to_json(tree),
        "stats": {
            "added": stats.added,
            "removed": stats.removed,
            "updated": stats.updated,
            "unchanged": stats.unchanged,
        }
    });

    serde_json::to_string_pretty(&output)
        .map_err(|e| OutputError::JsonSerializationError { source: e })
}

fn tree_to_json(tree: &DiffTree) -> Value {
    Value::Array(
        tree.iter()
            .map(|node| {
                let mut object = Map::new();
                object.insert("key".to_string(), json!(node.key));
                match &node.status {
                    Status::Added(payload) => {
                        object.insert("status".to_string(), json!("added"));
                        insert_payload(&mut object, "value", "children", payload);
                    }
                    Status::Removed(payload) => {
                        object.insert("status".to_string(), json!("removed"));
                        insert_payload(&mut object, "value", "children", payload);
                    }
                    Status::Unchanged(payload) => {
                        object.insert("status".to_string(), json!("unchanged"));
                        insert_payload(&mut object, "value", "children", payload);
                    }
                    Status::Updated { from, to } => {
                        object.insert("status".to_string(), json!("updated"));
                        insert_payload(&mut object, "from", "fromChildren", from);
                        insert_payload(&mut object, "to", "toChildren", to);
                    }
                }
                Value::Object(object)
            })
            .collect(),
    )
}

fn insert_payload(object: &mut Map<String, Value>, scalar_field: &str, tree_field: &str, payload: &Payload) {
    match payload {
        Payload::Scalar(scalar) => object.insert(scalar_field.to_string(), scalar_to_json(scalar)),
        Payload::Children(children) => object.insert(tree_field.to_string(), tree_to_json(children)),
    };
}

/// Integral numbers are written as JSON integers so `50` stays `50`.
fn scalar_to_json(scalar: &Scalar) -> Value {
    match scalar {
        Scalar::Null => Value::Null,
        Scalar::Bool(b) => json!(b),
        Scalar::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => json!(*n as i64),
        Scalar::Number(n) => json!(n),
        Scalar::String(s) => json!(s),
    }
}
