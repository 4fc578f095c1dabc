//! Node list panel UI rendering
//!
//! Lists the nodes of the current render frame, indented by depth. Rows are
//! virtualized with `show_rows` so large datasets stay cheap to draw.

use egui::{RichText, ScrollArea};
use rtreefilter::{RenderFrame, ThemeColors};

use crate::app::AppState;
use crate::presentation::color_mapping;

const ROW_HEIGHT: f32 = 18.0;
const INDENT: f32 = 12.0;

/// Result of node list interactions
pub enum NodeListInteraction {
    /// A row was clicked (index within the render frame)
    NodeClicked(usize),
}

/// Depth of every node of a frame (roots are 0).
///
/// Parent links inside a frame are acyclic, the step cap only guards
/// against malformed frames.
pub fn frame_depths(frame: &RenderFrame) -> Vec<usize> {
    let mut depths: Vec<Option<usize>> = vec![None; frame.len()];
    for start in 0..frame.len() {
        let mut chain = Vec::new();
        let mut current = Some(start);
        let mut base = 0;
        while let Some(index) = current {
            if let Some(depth) = depths[index] {
                base = depth + 1;
                break;
            }
            if chain.len() > frame.len() {
                break;
            }
            chain.push(index);
            current = frame.parent_index[index];
        }
        for (offset, &index) in chain.iter().rev().enumerate() {
            depths[index] = Some(base + offset);
        }
    }
    depths.into_iter().map(|d| d.unwrap_or(0)).collect()
}

/// Renders the node list.
pub fn render_node_list_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) -> Option<NodeListInteraction> {
    let Some(session) = state.session.as_ref() else {
        ui.label("No dataset loaded");
        return None;
    };

    let frame = session.frame();
    if frame.is_empty() {
        ui.label(format!("No nodes match \"{}\"", session.predicate()));
        return None;
    }

    let depths = frame_depths(frame);
    let hovered = state.selection.hovered_index();
    let mut hovered_row = None;
    let mut interaction = None;

    ScrollArea::vertical()
        .id_salt("node_list_scroll_area")
        .auto_shrink([false, false])
        .show_rows(ui, ROW_HEIGHT, frame.len(), |ui, row_range| {
            for index in row_range {
                let direct = frame.direct_match[index];
                let text = RichText::new(format!("{}  #{}", frame.labels[index], frame.original_ids[index]))
                    .color(color_mapping::list_label_color(direct, theme_colors));
                let text = if direct { text.strong() } else { text };

                let response = ui
                    .horizontal(|ui| {
                        ui.add_space(depths[index] as f32 * INDENT);
                        ui.selectable_label(hovered == Some(index), text)
                    })
                    .inner;

                if response.hovered() {
                    hovered_row = Some(index);
                }
                if response.clicked() {
                    interaction = Some(NodeListInteraction::NodeClicked(index));
                }
            }
        });

    if let Some(index) = hovered_row {
        state.selection.report_hover(index);
    }

    interaction
}
