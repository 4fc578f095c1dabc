//! Tree filter engine.
//!
//! Pure, synchronous transformations from a full dataset to the node list a
//! renderer displays:
//! - `predicate` - case-insensitive name matching
//! - `closure` - direct matches plus ancestor closure
//! - `renumber` - dense id remapping that preserves parent links
//!
//! [`refresh`] composes them and is what callers use whenever the filter
//! text changes.

pub mod closure;
pub mod predicate;
pub mod renumber;

pub use closure::{ancestor_closure, filter_by_predicate, FilteredSet};
pub use predicate::NamePredicate;
pub use renumber::{renumber, renumber_detailed, sort_by_original_id, Renumbered};

use crate::error::FilterError;
use crate::node::Node;

/// Filters, sorts by original id and renumbers.
///
/// # Arguments
/// * `dataset` - The full node list
/// * `predicate` - Filter text (case-insensitive substring of `name`)
///
/// # Returns
/// The renderable node list; empty when nothing matches.
pub fn refresh(dataset: &[Node], predicate: &NamePredicate) -> Result<Vec<Node>, FilterError> {
    let filtered = filter_by_predicate(dataset, predicate)?;
    Ok(renumber(&sort_by_original_id(filtered.into_nodes())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeId;

    fn sample() -> Vec<Node> {
        vec![
            Node::new(1, "root", None),
            Node::new(2, "child-a", Some(1)),
            Node::new(3, "child-b", Some(1)),
            Node::new(4, "grandchild", Some(3)),
        ]
    }

    #[test]
    fn test_refresh_worked_example() {
        let out = refresh(&sample(), &NamePredicate::new("grand")).unwrap();
        let pairs: Vec<(NodeId, Option<NodeId>)> = out.iter().map(|n| (n.id, n.parent)).collect();
        assert_eq!(pairs, vec![(0, None), (1, Some(0)), (2, Some(1))]);
        let names: Vec<&str> = out.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["root", "child-b", "grandchild"]);
    }

    #[test]
    fn test_refresh_empty_predicate_keeps_all() {
        let out = refresh(&sample(), &NamePredicate::new("")).unwrap();
        assert_eq!(out.len(), 4);
        let ids: Vec<NodeId> = out.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_refresh_nothing_matches() {
        assert!(refresh(&sample(), &NamePredicate::new("nope")).unwrap().is_empty());
    }

    #[test]
    fn test_refresh_sorts_by_original_id() {
        let mut data = sample();
        data.reverse();
        let out = refresh(&data, &NamePredicate::new("child")).unwrap();
        let names: Vec<&str> = out.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["root", "child-a", "child-b", "grandchild"]);
    }
}
