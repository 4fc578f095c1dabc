//! Name filtering with ancestor closure.
//!
//! The filtered set is built in two steps:
//! - direct matches: every node whose name satisfies the predicate
//! - ancestor closure: fixed-point passes over the full dataset that add the
//!   parents of current members until a pass adds nothing
//!
//! The closure is bounded by the dataset size and parent cycles among the
//! result are reported instead of being walked forever.

use crate::engine::predicate::NamePredicate;
use crate::error::FilterError;
use crate::node::{Node, NodeId};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Duplicate-free (by id) set of deep-copied nodes.
///
/// Iteration order is insertion order: direct matches in dataset order,
/// followed by the ancestors added by each closure pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredSet {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    direct: HashSet<NodeId>,
}

impl FilteredSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn ids(&self) -> HashSet<NodeId> {
        self.index.keys().copied().collect()
    }

    /// Returns true if the node was selected by the predicate itself rather
    /// than pulled in as an ancestor.
    pub fn is_direct_match(&self, id: NodeId) -> bool {
        self.direct.contains(&id)
    }

    pub fn direct_match_count(&self) -> usize {
        self.direct.len()
    }

    /// Ids of the nodes selected by the predicate.
    pub fn direct_matches(&self) -> &HashSet<NodeId> {
        &self.direct
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Inserts a copy of the node unless its id is already present.
    ///
    /// # Returns
    /// `true` if the node was added.
    fn insert(&mut self, node: &Node) -> bool {
        if self.index.contains_key(&node.id) {
            return false;
        }
        self.index.insert(node.id, self.nodes.len());
        self.nodes.push(node.clone());
        true
    }

    fn insert_direct(&mut self, node: &Node) -> bool {
        let added = self.insert(node);
        if added {
            self.direct.insert(node.id);
        }
        added
    }

    /// Parent ids referenced by members but not yet present.
    fn missing_parents(&self) -> HashSet<NodeId> {
        self.nodes
            .iter()
            .filter_map(|n| n.parent)
            .filter(|p| !self.contains(*p))
            .collect()
    }
}

/// Selects the nodes whose name matches and closes the result over ancestors.
///
/// # Arguments
/// * `dataset` - The full node list (source of truth, not modified)
/// * `predicate` - Name predicate; the empty predicate selects every node
///
/// # Returns
/// The union of the direct matches and all of their ancestors, or an error
/// if the ancestor chains contain a cycle.
pub fn filter_by_predicate(
    dataset: &[Node],
    predicate: &NamePredicate,
) -> Result<FilteredSet, FilterError> {
    let mut set = FilteredSet::new();
    for node in dataset {
        if predicate.matches(&node.name) {
            set.insert_direct(node);
        }
    }
    debug!(
        predicate = predicate.as_str(),
        direct_matches = set.len(),
        "selected direct matches"
    );

    close_over_ancestors(dataset, &mut set)?;
    Ok(set)
}

/// Extends a filtered set with every ancestor found in the dataset.
///
/// Applying this to the output of [`filter_by_predicate`] returns the same set.
pub fn ancestor_closure(dataset: &[Node], mut set: FilteredSet) -> Result<FilteredSet, FilterError> {
    close_over_ancestors(dataset, &mut set)?;
    Ok(set)
}

fn close_over_ancestors(dataset: &[Node], set: &mut FilteredSet) -> Result<(), FilterError> {
    // Every productive pass adds at least one dataset node.
    let max_passes = dataset.len() + 1;
    let mut passes = 0;

    loop {
        let wanted = set.missing_parents();
        if wanted.is_empty() {
            break;
        }

        let mut added = 0;
        for node in dataset {
            if wanted.contains(&node.id) && set.insert(node) {
                added += 1;
            }
        }

        if added == 0 {
            // Remaining parents are dangling references.
            trace!(dangling = wanted.len(), "ancestor closure stopped on dangling parents");
            break;
        }

        passes += 1;
        trace!(pass = passes, added, "ancestor closure pass");
        if passes > max_passes {
            return Err(FilterError::ClosureDidNotConverge { passes });
        }
    }

    check_acyclic(set)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// Walks each member's parent chain inside the set and fails on the first loop.
fn check_acyclic(set: &FilteredSet) -> Result<(), FilterError> {
    let mut marks: HashMap<NodeId, Visit> = HashMap::with_capacity(set.len());

    for start in set.iter() {
        if marks.contains_key(&start.id) {
            continue;
        }

        let mut path = vec![start.id];
        marks.insert(start.id, Visit::InProgress);
        let mut current = start;

        while let Some(parent_id) = current.parent {
            match marks.get(&parent_id) {
                Some(Visit::Done) => break,
                Some(Visit::InProgress) => {
                    return Err(FilterError::ParentCycle { id: parent_id });
                }
                None => {}
            }
            let Some(parent) = set.get(parent_id) else {
                break;
            };
            marks.insert(parent_id, Visit::InProgress);
            path.push(parent_id);
            current = parent;
        }

        for id in path {
            marks.insert(id, Visit::Done);
        }
    }

    Ok(())
}
