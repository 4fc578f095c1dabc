use crate::node::{Dataset, Node, NodeId};
use anyhow::{Context, Result};
use brotli::Decompressor;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use tracing::{debug, warn};

/// Trait for loading a dataset from a source location
pub trait DatasetReader {
    /// Reads the dataset identified by `source`
    fn read(&self, source: &str) -> Result<Dataset>;
}

/// Edge record of a graph document (`{source, target}`)
#[derive(Debug, Clone, Deserialize)]
struct Link {
    source: NodeId,
    target: NodeId,
}

/// Accepted top-level JSON shapes
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DatasetDocument {
    Nodes(Vec<Node>),
    Graph {
        nodes: Vec<Node>,
        #[serde(default)]
        links: Vec<Link>,
    },
}

impl DatasetDocument {
    fn into_nodes(self) -> Vec<Node> {
        match self {
            DatasetDocument::Nodes(nodes) => nodes,
            DatasetDocument::Graph { mut nodes, links } => {
                apply_links(&mut nodes, &links);
                nodes
            }
        }
    }
}

/// Fills in `parent` from the first link targeting a node that has none.
fn apply_links(nodes: &mut [Node], links: &[Link]) {
    let mut parent_by_target: HashMap<NodeId, NodeId> = HashMap::with_capacity(links.len());
    for link in links {
        parent_by_target.entry(link.target).or_insert(link.source);
    }

    for node in nodes.iter_mut().filter(|n| n.parent.is_none()) {
        if let Some(&source) = parent_by_target.get(&node.id) {
            node.parent = Some(source);
        }
    }
}

/// Reads JSON datasets from the filesystem.
///
/// Files ending in `.br` are Brotli-decompressed on the fly.
pub struct JsonDatasetReader;

impl JsonDatasetReader {
    pub fn new() -> Self {
        JsonDatasetReader
    }
}

impl Default for JsonDatasetReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetReader for JsonDatasetReader {
    fn read(&self, source: &str) -> Result<Dataset> {
        parse_dataset(source)
    }
}

/// Parses a dataset file (plain JSON or `.br` compressed JSON).
///
/// # Examples
///
/// ```no_run
/// # use rtreefilter::parse_dataset;
/// # fn main() -> anyhow::Result<()> {
/// let dataset = parse_dataset("data.json")?;
/// let compressed = parse_dataset("data.json.br")?;
/// # Ok(())
/// # }
/// ```
pub fn parse_dataset(file_path: &str) -> Result<Dataset> {
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open file: {}", file_path))?;

    let mut reader: Box<dyn Read> = if file_path.ends_with(".br") {
        Box::new(BufReader::new(Decompressor::new(file, 4096)))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .with_context(|| format!("Failed to read file: {}", file_path))?;

    let dataset = parse_dataset_str(&text)
        .with_context(|| format!("Failed to parse dataset: {}", file_path))?;
    debug!(path = file_path, nodes = dataset.len(), "parsed dataset file");
    Ok(dataset)
}

/// Parses a dataset from JSON text.
pub fn parse_dataset_str(text: &str) -> Result<Dataset> {
    let document: DatasetDocument =
        serde_json::from_str(text).context("Expected a node array or a {nodes, links} document")?;
    let nodes = document.into_nodes();

    let duplicates = count_duplicate_ids(&nodes);
    if duplicates > 0 {
        warn!(duplicates, "dataset contains duplicate node ids; first occurrence wins");
    }

    Ok(Dataset::new(nodes))
}

fn count_duplicate_ids(nodes: &[Node]) -> usize {
    let mut seen = HashSet::with_capacity(nodes.len());
    nodes.iter().filter(|n| !seen.insert(n.id)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_node_array() {
        let dataset = parse_dataset_str(
            r#"[{"id": 1, "name": "root", "parent": null}, {"id": 2, "name": "leaf", "parent": 1, "label": "Leaf"}]"#,
        )
        .unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.nodes()[1].parent, Some(1));
        assert_eq!(dataset.nodes()[1].label(), "Leaf");
    }

    #[test]
    fn test_parse_graph_document_uses_links() {
        let dataset = parse_dataset_str(
            r#"{
                "nodes": [{"id": 1, "name": "root"}, {"id": 2, "name": "a"}, {"id": 3, "name": "b", "parent": 1}],
                "links": [{"source": 1, "target": 2}, {"source": 2, "target": 3}]
            }"#,
        )
        .unwrap();
        assert_eq!(dataset.nodes()[0].parent, None);
        assert_eq!(dataset.nodes()[1].parent, Some(1));
        // Explicit parent beats links
        assert_eq!(dataset.nodes()[2].parent, Some(1));
    }

    #[test]
    fn test_parse_graph_document_without_links() {
        let dataset = parse_dataset_str(r#"{"nodes": [{"id": 1, "name": "root"}]}"#).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(parse_dataset_str("{not json").is_err());
        assert!(parse_dataset_str(r#"[{"id": "one", "name": "x"}]"#).is_err());
        assert!(parse_dataset_str(r#"{"items": []}"#).is_err());
    }

    #[test]
    fn test_duplicate_ids_are_tolerated() {
        let dataset = parse_dataset_str(r#"[{"id": 1, "name": "a"}, {"id": 1, "name": "b"}]"#).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(count_duplicate_ids(dataset.nodes()), 1);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = parse_dataset("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
