use rtreefilter::{parse_dataset, refresh, DatasetCache, DatasetReader, DatasetWriter, JsonDatasetReader};
use rtreefilter::{Dataset, FilterError, FilterSession, DatasetContext, NamePredicate, Node, NodeId};
use rtreefilter::{RenderFrame, RenderSink, VirtualDatasetReader};
use anyhow::Result;
use std::collections::HashMap;
use std::env;
use std::fs;

fn sample_nodes() -> Vec<Node> {
    vec![
        Node::new(1, "root", None).with_attr("label", serde_json::json!("Root")),
        Node::new(2, "child-a", Some(1)),
        Node::new(3, "child-b", Some(1)),
        Node::new(4, "grandchild", Some(3)),
    ]
}

fn parents(nodes: &[Node]) -> Vec<(NodeId, Option<NodeId>)> {
    nodes.iter().map(|n| (n.id, n.parent)).collect()
}

#[test]
fn test_write_and_read_json_dataset() -> Result<()> {
    let test_file = env::temp_dir().join("rtreefilter_test_dataset.json");
    let test_file = test_file.to_str().unwrap();
    let _ = fs::remove_file(test_file);

    {
        let mut writer = DatasetWriter::new(test_file)?;
        writer.write_dataset(&Dataset::new(sample_nodes()))?;
    }

    let dataset = parse_dataset(test_file)?;
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.nodes(), &sample_nodes()[..]);
    assert_eq!(dataset.get(1).map(|n| n.label()), Some("Root"));

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_write_and_read_compressed_dataset() -> Result<()> {
    let test_file = env::temp_dir().join("rtreefilter_test_dataset.json.br");
    let test_file = test_file.to_str().unwrap();
    let _ = fs::remove_file(test_file);

    let generated = VirtualDatasetReader::with_seed(11).generate();
    {
        let mut writer = DatasetWriter::new(test_file)?;
        writer.write_dataset(&generated)?;
    }

    let dataset = JsonDatasetReader::new().read(test_file)?;
    assert_eq!(dataset.nodes(), generated.nodes());

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_read_graph_document_with_links() -> Result<()> {
    let test_file = env::temp_dir().join("rtreefilter_test_graph.json");
    fs::write(
        &test_file,
        r#"{
            "nodes": [
                {"id": 10, "name": "Top", "label": "top node"},
                {"id": 11, "name": "Left"},
                {"id": 12, "name": "Right", "parent": 10}
            ],
            "links": [
                {"source": 10, "target": 11},
                {"source": 11, "target": 12}
            ]
        }"#,
    )?;

    let dataset = parse_dataset(test_file.to_str().unwrap())?;
    assert_eq!(parents(dataset.nodes()), vec![(10, None), (11, Some(10)), (12, Some(10))]);
    assert_eq!(dataset.get(10).map(|n| n.label()), Some("top node"));

    fs::remove_file(&test_file)?;
    Ok(())
}

#[test]
fn test_missing_file_reports_path() {
    let missing = env::temp_dir().join("rtreefilter_no_such_dataset.json");
    let _ = fs::remove_file(&missing);

    let err = parse_dataset(missing.to_str().unwrap()).unwrap_err();
    assert!(format!("{:#}", err).contains("rtreefilter_no_such_dataset.json"));
}

#[test]
fn test_refresh_worked_example() -> Result<()> {
    let result = refresh(&sample_nodes(), &NamePredicate::new("grand"))?;
    assert_eq!(parents(&result), vec![(0, None), (1, Some(0)), (2, Some(1))]);
    let names: Vec<&str> = result.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["root", "child-b", "grandchild"]);
    // Display attributes travel with the node
    assert_eq!(result[0].label(), "Root");
    Ok(())
}

#[test]
fn test_refresh_is_case_insensitive_and_empty_keeps_all() -> Result<()> {
    assert_eq!(refresh(&sample_nodes(), &NamePredicate::new("CHILD-B"))?.len(), 2);
    assert_eq!(refresh(&sample_nodes(), &NamePredicate::new(""))?.len(), 4);
    assert!(refresh(&sample_nodes(), &NamePredicate::new("zzz"))?.is_empty());
    Ok(())
}

#[test]
fn test_refresh_rejects_cycles() {
    let nodes = vec![
        Node::new(1, "a", Some(2)),
        Node::new(2, "b", Some(1)),
    ];
    let err = refresh(&nodes, &NamePredicate::new("a")).unwrap_err();
    assert!(matches!(err, FilterError::ParentCycle { .. }));
}

#[test]
fn test_generated_dataset_properties() -> Result<()> {
    let dataset = VirtualDatasetReader::with_config(5, 4, 3).generate();
    assert_eq!(dataset.nodes(), VirtualDatasetReader::with_config(5, 4, 3).generate().nodes());

    let by_id: HashMap<NodeId, &Node> = dataset.nodes().iter().map(|n| (n.id, n)).collect();
    for predicate in ["", "a", "node", "xyz-not-there"] {
        let predicate = NamePredicate::new(predicate);
        let result = refresh(dataset.nodes(), &predicate)?;

        // Ids are exactly 0..len
        for (position, node) in result.iter().enumerate() {
            assert_eq!(node.id, position as NodeId);
        }

        // Every non-root parent points inside the result
        for node in &result {
            if let Some(parent) = node.parent {
                assert!((parent as usize) < result.len());
            }
        }

        // Every direct match in the dataset survives
        let direct = dataset.nodes().iter().filter(|n| predicate.matches(&n.name)).count();
        let surviving = result.iter().filter(|n| predicate.matches(&n.name)).count();
        assert_eq!(direct, surviving);
    }

    assert_eq!(refresh(dataset.nodes(), &NamePredicate::new(""))?.len(), by_id.len());
    Ok(())
}

#[test]
fn test_dataset_cache_loads_once() -> Result<()> {
    let test_file = env::temp_dir().join("rtreefilter_test_cache.json");
    fs::write(&test_file, serde_json::to_string(&sample_nodes())?)?;

    let cache = DatasetCache::new(JsonDatasetReader::new(), test_file.to_str().unwrap());
    assert!(!cache.is_loaded());
    let first = cache.get_or_load()?.loaded_at();

    // Later reads use the cached copy even if the file goes away
    fs::remove_file(&test_file)?;
    let context = cache.get_or_load()?;
    assert_eq!(context.loaded_at(), first);
    assert_eq!(context.dataset().len(), 4);
    Ok(())
}

struct CollectingSink {
    frames: Vec<RenderFrame>,
}

impl RenderSink for CollectingSink {
    fn render(&mut self, frame: &RenderFrame) {
        self.frames.push(frame.clone());
    }
}

#[test]
fn test_click_to_filter_session() {
    let mut session = FilterSession::new(DatasetContext::new(Dataset::new(sample_nodes()), "sample"));
    let mut sink = CollectingSink { frames: Vec::new() };
    session.render_to(&mut sink);
    assert_eq!(sink.frames[0].len(), 4);

    let index = sink.frames[0]
        .nodes
        .iter()
        .position(|n| n.name == "child-a")
        .unwrap();
    assert_eq!(session.select(index).as_deref(), Some("child-a"));
    session.render_to(&mut sink);

    let frame = &sink.frames[1];
    assert_eq!(session.predicate(), "child-a");
    assert_eq!(frame.direct_match_count(), 1);
    assert_eq!(frame.labels, vec!["Root".to_string(), "child-a".to_string()]);
    assert_eq!(frame.edges, vec![(0, 1)]);
    assert_eq!(frame.original_ids, vec![1, 2]);
}
