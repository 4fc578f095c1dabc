use crate::node::{Dataset, Node, NodeId};
use crate::reader::DatasetReader;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

const DEFAULT_MAX_DEPTH: usize = 4;
const DEFAULT_MAX_CHILDREN: usize = 5;
pub const DEFAULT_SEED: u64 = 42;

// Category per depth; deeper levels reuse the last entry
const LEVELS: &[&str] = &["division", "department", "team", "squad", "member"];

const WORDS: &[&str] = &[
    "alpha", "bravo", "cedar", "delta", "ember", "falcon", "granite", "harbor",
    "indigo", "juniper", "kestrel", "lumen", "maple", "nimbus", "onyx", "pioneer",
    "quartz", "raven", "summit", "tundra", "umber", "vertex", "willow", "zephyr",
];

/// Generates a deterministic random forest for demos and tests.
///
/// The same configuration always yields the same dataset. Ids are assigned
/// depth-first starting at 1, names look like `team-cedar-17`, and every
/// node carries a `label` and a `kind` attribute.
pub struct VirtualDatasetReader {
    max_depth: usize,
    max_children: usize,
    seed: u64,
}

impl VirtualDatasetReader {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_children: DEFAULT_MAX_CHILDREN,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_config(max_depth: usize, max_children: usize, seed: u64) -> Self {
        Self {
            max_depth,
            max_children,
            seed,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::new()
        }
    }

    /// Builds the dataset without going through the reader interface.
    pub fn generate(&self) -> Dataset {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut nodes = Vec::new();
        let mut next_id: NodeId = 1;

        let num_roots = rng.gen_range(1..=3);
        for _ in 0..num_roots {
            self.generate_subtree(&mut rng, None, 0, &mut next_id, &mut nodes);
        }

        Dataset::new(nodes)
    }

    fn generate_subtree(
        &self,
        rng: &mut StdRng,
        parent: Option<NodeId>,
        depth: usize,
        next_id: &mut NodeId,
        out: &mut Vec<Node>,
    ) {
        let id = *next_id;
        *next_id += 1;

        let kind = LEVELS[depth.min(LEVELS.len() - 1)];
        let word = WORDS[rng.gen_range(0..WORDS.len())];
        let name = format!("{}-{}-{}", kind, word, id);
        let label = format!("{} {}", capitalize(word), capitalize(kind));

        out.push(
            Node::new(id, name, parent)
                .with_attr("label", json!(label))
                .with_attr("kind", json!(kind)),
        );

        if depth + 1 >= self.max_depth || self.max_children == 0 {
            return;
        }

        // Roots always get children so the demo is never a bare list
        let min_children = if depth == 0 { 1 } else { 0 };
        let num_children = rng.gen_range(min_children..=self.max_children);
        for _ in 0..num_children {
            self.generate_subtree(rng, Some(id), depth + 1, next_id, out);
        }
    }
}

impl Default for VirtualDatasetReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetReader for VirtualDatasetReader {
    fn read(&self, _source: &str) -> anyhow::Result<Dataset> {
        Ok(self.generate())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generation_is_deterministic() {
        let a = VirtualDatasetReader::with_seed(7).generate();
        let b = VirtualDatasetReader::with_seed(7).generate();
        assert_eq!(a.nodes(), b.nodes());
    }

    #[test]
    fn test_generated_forest_is_consistent() {
        let dataset = VirtualDatasetReader::with_config(5, 4, 123).generate();
        let ids: HashSet<NodeId> = dataset.nodes().iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), dataset.len(), "ids must be unique");
        assert!(dataset.root_count() >= 1);
        for node in dataset.nodes() {
            if let Some(parent) = node.parent {
                assert!(ids.contains(&parent));
                assert!(parent < node.id, "parents are generated before children");
            }
        }
    }

    #[test]
    fn test_depth_one_yields_only_roots() {
        let dataset = VirtualDatasetReader::with_config(1, 10, 1).generate();
        assert_eq!(dataset.root_count(), dataset.len());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("cedar"), "Cedar");
        assert_eq!(capitalize(""), "");
    }
}
