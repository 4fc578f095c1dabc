//! Session state around the filter engine.
//!
//! - [`DatasetContext`] owns the loaded dataset for the session
//! - [`DatasetCache`] loads it lazily, once, on first use
//! - [`FilterSession`] tracks the current predicate and the frame handed to
//!   the renderer, including click-to-filter

use crate::engine::{self, NamePredicate};
use crate::error::FilterError;
use crate::node::{Dataset, Node, NodeId};
use crate::reader::DatasetReader;
use once_cell::sync::OnceCell;
use std::time::Instant;
use tracing::{debug, info, warn};

/// The dataset of one session together with where it came from.
///
/// Created after the first successful load and kept for the whole session.
#[derive(Debug, Clone)]
pub struct DatasetContext {
    dataset: Dataset,
    source: String,
    loaded_at: Instant,
}

impl DatasetContext {
    pub fn new(dataset: Dataset, source: impl Into<String>) -> Self {
        Self {
            dataset,
            source: source.into(),
            loaded_at: Instant::now(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Human-readable origin (file path or a description of a generated dataset).
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn loaded_at(&self) -> Instant {
        self.loaded_at
    }
}

/// Loads a dataset on first access and keeps it.
///
/// A failed load leaves the cache empty so a later call tries again.
pub struct DatasetCache<R: DatasetReader> {
    reader: R,
    source: String,
    cell: OnceCell<DatasetContext>,
}

impl<R: DatasetReader> DatasetCache<R> {
    pub fn new(reader: R, source: impl Into<String>) -> Self {
        Self {
            reader,
            source: source.into(),
            cell: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get_or_load(&self) -> anyhow::Result<&DatasetContext> {
        self.cell.get_or_try_init(|| {
            let dataset = self.reader.read(&self.source)?;
            info!(source = %self.source, nodes = dataset.len(), "dataset loaded");
            Ok(DatasetContext::new(dataset, self.source.clone()))
        })
    }
}

/// Everything a renderer needs for one filter result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFrame {
    /// Renumbered nodes (`id` equals position)
    pub nodes: Vec<Node>,
    /// Display label per node
    pub labels: Vec<String>,
    /// Id each node had in the dataset
    pub original_ids: Vec<NodeId>,
    /// Whether each node matched the predicate itself (vs. kept as an ancestor)
    pub direct_match: Vec<bool>,
    /// Position of each node's parent within the frame
    pub parent_index: Vec<Option<usize>>,
    /// `(parent, child)` position pairs
    pub edges: Vec<(usize, usize)>,
}

impl RenderFrame {
    /// Runs the engine and derives labels and edges.
    pub fn build(dataset: &[Node], predicate: &NamePredicate) -> Result<Self, FilterError> {
        let filtered = engine::filter_by_predicate(dataset, predicate)?;
        let direct = filtered.direct_matches().clone();
        let sorted = engine::sort_by_original_id(filtered.into_nodes());
        let renumbered = engine::renumber_detailed(&sorted);

        let labels = renumbered.nodes.iter().map(|n| n.label().to_string()).collect();
        let direct_match = renumbered
            .original_ids
            .iter()
            .map(|id| direct.contains(id))
            .collect();
        let edges = renumbered
            .parent_index
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| parent.map(|p| (p, child)))
            .collect();

        Ok(Self {
            nodes: renumbered.nodes,
            labels,
            original_ids: renumbered.original_ids,
            direct_match,
            parent_index: renumbered.parent_index,
            edges,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn direct_match_count(&self) -> usize {
        self.direct_match.iter().filter(|&&m| m).count()
    }

    /// Name of the node at a rendered position (what a click filters on).
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.nodes.get(index).map(|n| n.name.as_str())
    }
}

/// Consumer of render frames (the chart).
pub trait RenderSink {
    fn render(&mut self, frame: &RenderFrame);
}

/// Current filter state for one dataset.
pub struct FilterSession {
    context: DatasetContext,
    predicate: NamePredicate,
    frame: RenderFrame,
    last_error: Option<FilterError>,
    refresh_count: u64,
}

impl FilterSession {
    /// Starts a session with the empty predicate (everything visible).
    pub fn new(context: DatasetContext) -> Self {
        let mut session = Self {
            context,
            predicate: NamePredicate::default(),
            frame: RenderFrame::default(),
            last_error: None,
            refresh_count: 0,
        };
        session.refresh();
        session
    }

    pub fn context(&self) -> &DatasetContext {
        &self.context
    }

    pub fn predicate(&self) -> &str {
        self.predicate.as_str()
    }

    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    pub fn last_error(&self) -> Option<&FilterError> {
        self.last_error.as_ref()
    }

    /// Number of refreshes run so far (including the initial one).
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    /// Applies a new predicate and refreshes the frame.
    ///
    /// On error the previous frame stays in place and the error is kept in
    /// [`FilterSession::last_error`].
    pub fn set_predicate(&mut self, text: &str) -> Result<&RenderFrame, FilterError> {
        self.predicate = NamePredicate::new(text);
        match self.refresh() {
            Some(err) => Err(err),
            None => Ok(&self.frame),
        }
    }

    /// Resets the predicate to the empty string.
    pub fn clear(&mut self) -> Result<&RenderFrame, FilterError> {
        self.set_predicate("")
    }

    /// Click-to-filter: uses the name of the node at `index` as the predicate.
    ///
    /// # Returns
    /// The new predicate, or `None` when the index is outside the frame.
    pub fn select(&mut self, index: usize) -> Option<String> {
        let name = self.frame.name_at(index)?.to_string();
        debug!(index, name = %name, "node selected");
        // Refresh errors are recorded in last_error
        let _ = self.set_predicate(&name);
        Some(name)
    }

    /// Hands the current frame to a renderer.
    pub fn render_to<S: RenderSink>(&self, sink: &mut S) {
        sink.render(&self.frame);
    }

    fn refresh(&mut self) -> Option<FilterError> {
        self.refresh_count += 1;
        match RenderFrame::build(self.context.dataset.nodes(), &self.predicate) {
            Ok(frame) => {
                debug!(
                    predicate = self.predicate.as_str(),
                    visible = frame.len(),
                    direct = frame.direct_match_count(),
                    "refreshed"
                );
                self.frame = frame;
                self.last_error = None;
                None
            }
            Err(err) => {
                warn!(predicate = self.predicate.as_str(), error = %err, "refresh failed");
                self.last_error = Some(err.clone());
                Some(err)
            }
        }
    }
}
