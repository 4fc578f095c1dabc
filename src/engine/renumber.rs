//! Dense renumbering of a filtered node sequence.

use crate::node::{Node, NodeId};
use std::collections::HashMap;

/// Output of [`renumber_detailed`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Renumbered {
    /// Nodes with `id == position` and remapped parents.
    pub nodes: Vec<Node>,
    /// Original id of each node, by position.
    pub original_ids: Vec<NodeId>,
    /// Position of each node's parent when the parent was part of the input.
    ///
    /// `None` for roots and for parents that passed through unchanged, which
    /// keeps edge construction independent of any accidental id collision.
    pub parent_index: Vec<Option<usize>>,
}

/// Sorts nodes by ascending original id (stable for equal ids).
pub fn sort_by_original_id(mut nodes: Vec<Node>) -> Vec<Node> {
    nodes.sort_by_key(|n| n.id);
    nodes
}

/// Assigns `id = position` and rewrites parent references to the new ids.
///
/// Parents that do not refer to a node of the sequence are left as they are.
pub fn renumber(nodes: &[Node]) -> Vec<Node> {
    renumber_detailed(nodes).nodes
}

/// Same as [`renumber`] but also reports original ids and parent positions.
pub fn renumber_detailed(nodes: &[Node]) -> Renumbered {
    let mut positions: HashMap<NodeId, usize> = HashMap::with_capacity(nodes.len());
    for (position, node) in nodes.iter().enumerate() {
        // First occurrence wins when an id repeats
        positions.entry(node.id).or_insert(position);
    }

    let mut out = Renumbered {
        nodes: Vec::with_capacity(nodes.len()),
        original_ids: Vec::with_capacity(nodes.len()),
        parent_index: Vec::with_capacity(nodes.len()),
    };

    for (position, node) in nodes.iter().enumerate() {
        let parent_position = node.parent.and_then(|p| positions.get(&p).copied());

        let mut renumbered = node.clone();
        renumbered.id = position as NodeId;
        if let Some(parent_position) = parent_position {
            renumbered.parent = Some(parent_position as NodeId);
        }

        out.original_ids.push(node.id);
        out.parent_index.push(parent_position);
        out.nodes.push(renumbered);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ids_are_dense_and_ordered() {
        let nodes = vec![
            Node::new(10, "a", None),
            Node::new(40, "b", Some(10)),
            Node::new(25, "c", Some(40)),
        ];
        let out = renumber(&nodes);
        let ids: Vec<NodeId> = out.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(out[0].parent, None);
        assert_eq!(out[1].parent, Some(0));
        assert_eq!(out[2].parent, Some(1));
    }

    #[test]
    fn test_unknown_parent_passes_through() {
        let nodes = vec![Node::new(7, "orphan", Some(1234))];
        let detailed = renumber_detailed(&nodes);
        assert_eq!(detailed.nodes[0].id, 0);
        assert_eq!(detailed.nodes[0].parent, Some(1234));
        assert_eq!(detailed.parent_index, vec![None]);
        assert_eq!(detailed.original_ids, vec![7]);
    }

    #[test]
    fn test_attributes_are_copied_unchanged() {
        let nodes = vec![Node::new(3, "x", None).with_attr("label", json!("X")).with_attr("x", json!(4.0))];
        let out = renumber(&nodes);
        assert_eq!(out[0].name, "x");
        assert_eq!(out[0].attrs, nodes[0].attrs);
    }

    #[test]
    fn test_sort_by_original_id() {
        let nodes = vec![Node::new(3, "c", None), Node::new(1, "a", None), Node::new(2, "b", None)];
        let ids: Vec<NodeId> = sort_by_original_id(nodes).iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_structure_is_preserved() {
        let nodes = vec![
            Node::new(100, "r", None),
            Node::new(101, "a", Some(100)),
            Node::new(102, "b", Some(100)),
            Node::new(103, "c", Some(102)),
        ];
        let detailed = renumber_detailed(&nodes);
        for (i, node) in nodes.iter().enumerate() {
            if let Some(parent) = node.parent {
                let j = nodes.iter().position(|n| n.id == parent).unwrap();
                assert_eq!(detailed.nodes[i].parent, Some(j as NodeId));
                assert_eq!(detailed.parent_index[i], Some(j));
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(renumber(&[]).is_empty());
    }
}
