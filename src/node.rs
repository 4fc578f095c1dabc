use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Type alias for node identifiers (integers taken verbatim from the dataset)
pub type NodeId = i64;

/// One entity of a rooted forest.
///
/// `parent` is `None` for roots. Every field besides `id`, `name` and
/// `parent` is kept in `attrs` in document order and is never interpreted by
/// the filter engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub parent: Option<NodeId>,
    #[serde(flatten)]
    pub attrs: serde_json::Map<String, serde_json::Value>,
}

impl Node {
    pub fn new(id: NodeId, name: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            id,
            name: name.into(),
            parent,
            attrs: serde_json::Map::new(),
        }
    }

    /// Builder-style helper for attaching a display attribute.
    pub fn with_attr(mut self, key: &str, value: serde_json::Value) -> Self {
        self.attrs.insert(key.to_string(), value);
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Display label: the `label` attribute when it is a string, otherwise the name.
    pub fn label(&self) -> &str {
        self.attrs
            .get("label")
            .and_then(|v| v.as_str())
            .unwrap_or(&self.name)
    }

    /// Explicit position carried by the record (`x` and `y` attributes), if both are numeric.
    pub fn position(&self) -> Option<(f64, f64)> {
        let x = self.attrs.get("x")?.as_f64()?;
        let y = self.attrs.get("y")?.as_f64()?;
        Some((x, y))
    }
}

/// The full node list of one session.
///
/// Nodes are stored behind an `Arc` so the dataset can be shared between the
/// loader thread and the UI without copying. It is never mutated: every
/// transformation starts from [`Dataset::snapshot`] or clones individual nodes.
#[derive(Debug, Clone)]
pub struct Dataset {
    nodes: Arc<[Node]>,
}

impl Dataset {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes: nodes.into() }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deep copy of every node, in dataset order.
    pub fn snapshot(&self) -> Vec<Node> {
        self.nodes.to_vec()
    }

    /// Finds the first node with the given id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn root_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_root()).count()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<Node>> for Dataset {
    fn from(nodes: Vec<Node>) -> Self {
        Self::new(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_null_and_missing_parent() {
        let with_null: Node = serde_json::from_value(json!({"id": 1, "name": "a", "parent": null})).unwrap();
        let missing: Node = serde_json::from_value(json!({"id": 2, "name": "b"})).unwrap();
        assert_eq!(with_null.parent, None);
        assert_eq!(missing.parent, None);
        assert!(missing.attrs.is_empty());
    }

    #[test]
    fn test_extra_attributes_pass_through_in_order() {
        let node: Node = serde_json::from_value(json!({
            "id": 3, "name": "leaf", "parent": 1,
            "label": "Leaf", "y": 2.5, "x": 1.0, "color": "red"
        }))
        .unwrap();

        let keys: Vec<&str> = node.attrs.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["label", "y", "x", "color"]);
        assert_eq!(node.label(), "Leaf");
        assert_eq!(node.position(), Some((1.0, 2.5)));

        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back["color"], "red");
        assert_eq!(back["parent"], 1);
    }

    #[test]
    fn test_label_falls_back_to_name() {
        let node = Node::new(1, "root", None).with_attr("label", json!(42));
        assert_eq!(node.label(), "root");
        assert_eq!(node.position(), None);
    }

    #[test]
    fn test_snapshot_is_a_deep_copy() {
        let dataset = Dataset::new(vec![Node::new(1, "root", None)]);
        let mut copy = dataset.snapshot();
        copy[0].name.push_str("-changed");
        assert_eq!(dataset.nodes()[0].name, "root");
        assert_eq!(dataset.root_count(), 1);
        assert!(dataset.get(1).is_some());
        assert!(dataset.get(2).is_none());
    }
}
