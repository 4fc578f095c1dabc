//! Graph rendering for render frames.
//!
//! [`GraphRenderer`] is the GUI's [`RenderSink`]: the session hands it the
//! current frame and it paints edges first, then nodes and labels on top.

use eframe::egui;
use egui::{Color32, Pos2, Stroke};
use rtreefilter::{LayoutPoint, RenderFrame, RenderSink, ThemeColors};

use crate::presentation::color_mapping;
use crate::state::GraphView;

/// Node radius at zoom 1.0, in pixels
pub const NODE_RADIUS: f32 = 7.0;

/// Labels are hidden below this zoom level
const LABEL_MIN_ZOOM: f32 = 0.45;

/// Screen positions of all nodes of a frame.
pub fn screen_positions(layout: &[LayoutPoint], view: &GraphView, canvas: egui::Rect) -> Vec<Pos2> {
    layout.iter().map(|p| view.to_screen(*p, canvas)).collect()
}

/// Node radius for a zoom level (never smaller than 2px).
pub fn node_radius(zoom: f32) -> f32 {
    (NODE_RADIUS * zoom).max(2.0)
}

/// Finds the node under `pointer`.
///
/// # Returns
/// * Index of the closest node within `radius`, or `None`
pub fn hit_test(positions: &[Pos2], pointer: Pos2, radius: f32) -> Option<usize> {
    positions
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.distance_sq(pointer)))
        .filter(|(_, d)| *d <= radius * radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Paints a render frame onto a canvas.
pub struct GraphRenderer<'a> {
    pub painter: &'a egui::Painter,
    pub positions: &'a [Pos2],
    pub zoom: f32,
    pub hovered: Option<usize>,
    pub colors: &'a ThemeColors,
}

impl GraphRenderer<'_> {
    fn draw_edges(&self, frame: &RenderFrame) {
        for &(parent, child) in &frame.edges {
            let (Some(&from), Some(&to)) = (self.positions.get(parent), self.positions.get(child)) else {
                continue;
            };
            let direct = frame.direct_match.get(child).copied().unwrap_or(false);
            let stroke = Stroke::new(1.5, color_mapping::edge_color(direct, self.colors));
            self.painter.line_segment([from, to], stroke);
        }
    }

    fn draw_nodes(&self, frame: &RenderFrame) {
        let radius = node_radius(self.zoom);
        let clip = self.painter.clip_rect().expand(radius * 4.0);
        let font = egui::FontId::proportional((11.0 * self.zoom.sqrt()).clamp(8.0, 18.0));
        let show_labels = self.zoom >= LABEL_MIN_ZOOM;

        for (index, &center) in self.positions.iter().enumerate().take(frame.len()) {
            if !clip.contains(center) {
                continue;
            }

            let direct = frame.direct_match[index];
            let hovered = self.hovered == Some(index);
            let fill = color_mapping::node_fill(direct, hovered, self.colors);
            self.painter.circle_filled(center, radius, fill);
            if direct || hovered {
                self.painter
                    .circle_stroke(center, radius, Stroke::new(1.0, self.colors.node_outline));
            }

            if show_labels || hovered {
                let text_color = if direct { self.colors.text } else { self.colors.text_dim };
                self.painter.text(
                    center + egui::vec2(0.0, radius + 2.0),
                    egui::Align2::CENTER_TOP,
                    &frame.labels[index],
                    font.clone(),
                    text_color,
                );
            }
        }
    }
}

impl RenderSink for GraphRenderer<'_> {
    fn render(&mut self, frame: &RenderFrame) {
        self.draw_edges(frame);
        self.draw_nodes(frame);
    }
}

/// Background fill of the graph canvas.
pub fn paint_background(painter: &egui::Painter, rect: egui::Rect, color: Color32) {
    painter.rect_filled(rect, 0.0, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_picks_closest_node() {
        let positions = vec![egui::pos2(0.0, 0.0), egui::pos2(10.0, 0.0), egui::pos2(100.0, 0.0)];
        assert_eq!(hit_test(&positions, egui::pos2(7.0, 1.0), 8.0), Some(1));
        assert_eq!(hit_test(&positions, egui::pos2(2.0, 0.0), 8.0), Some(0));
        assert_eq!(hit_test(&positions, egui::pos2(50.0, 0.0), 8.0), None);
        assert_eq!(hit_test(&[], egui::pos2(0.0, 0.0), 8.0), None);
    }

    #[test]
    fn test_node_radius_has_floor() {
        assert_eq!(node_radius(1.0), NODE_RADIUS);
        assert_eq!(node_radius(0.01), 2.0);
    }
}
