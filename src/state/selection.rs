//! Hover state shared by the node list and the graph.

/// Index (within the current render frame) of the node under the pointer.
///
/// Panels report hovers while drawing; the value becomes visible to both
/// panels on the next frame via [`SelectionState::finish_frame`]. Indices are
/// only meaningful for the frame they were taken from, so the state is
/// cleared whenever the frame changes.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    hovered_index: Option<usize>,
    reported_hover: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.hovered_index = None;
        self.reported_hover = None;
    }

    /// Node hovered during the previous frame.
    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered_index
    }

    /// Reports the node under the pointer for the frame being drawn.
    pub fn report_hover(&mut self, index: usize) {
        self.reported_hover = Some(index);
    }

    /// Publishes the hover reported during this frame (or none).
    pub fn finish_frame(&mut self) {
        self.hovered_index = self.reported_hover.take();
    }
}
