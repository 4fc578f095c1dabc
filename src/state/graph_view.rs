//! Graph pan and zoom state.
//!
//! Maps layout units (see `rtreefilter::layout`) to screen pixels.

use rtreefilter::LayoutPoint;

/// Horizontal distance between adjacent leaves at zoom 1.0, in pixels
pub const COLUMN_SPACING: f32 = 90.0;
/// Vertical distance between tree levels at zoom 1.0, in pixels
pub const ROW_SPACING: f32 = 70.0;
/// Margin between the canvas border and the layout origin
pub const CANVAS_MARGIN: f32 = 40.0;

const MIN_ZOOM: f32 = 0.1;
const MAX_ZOOM: f32 = 8.0;

/// Pan offset and zoom level of the graph canvas.
///
/// Responsibilities:
/// - Converting layout coordinates to screen positions
/// - Zooming around a fixed screen point
/// - Panning by drag deltas
#[derive(Debug, Clone)]
pub struct GraphView {
    zoom: f32,
    pan: egui::Vec2,
}

impl Default for GraphView {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphView {
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan: egui::Vec2::ZERO,
        }
    }

    /// Returns to zoom 1.0 with the layout origin in the top-left corner.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = egui::Vec2::ZERO;
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Screen position of a layout point inside the canvas rectangle.
    pub fn to_screen(&self, point: LayoutPoint, canvas: egui::Rect) -> egui::Pos2 {
        let origin = canvas.min + egui::vec2(CANVAS_MARGIN, CANVAS_MARGIN) + self.pan;
        origin + egui::vec2(point.x * COLUMN_SPACING, point.y * ROW_SPACING) * self.zoom
    }

    pub fn pan_by(&mut self, delta: egui::Vec2) {
        self.pan += delta;
    }

    /// Multiplies the zoom while keeping `pivot` at the same screen position.
    ///
    /// # Arguments
    /// * `factor` - Multiplicative zoom factor (>1 zooms in)
    /// * `pivot` - Screen position that stays fixed
    /// * `canvas` - Canvas rectangle the view draws into
    pub fn zoom_around(&mut self, factor: f32, pivot: egui::Pos2, canvas: egui::Rect) {
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let applied = new_zoom / self.zoom;

        let origin = canvas.min + egui::vec2(CANVAS_MARGIN, CANVAS_MARGIN) + self.pan;
        let new_origin = pivot + (origin - pivot) * applied;
        self.pan = new_origin - (canvas.min + egui::vec2(CANVAS_MARGIN, CANVAS_MARGIN));
        self.zoom = new_zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn test_to_screen_at_default_zoom() {
        let view = GraphView::new();
        let p = view.to_screen(LayoutPoint { x: 1.0, y: 2.0 }, canvas());
        assert_eq!(p, egui::pos2(CANVAS_MARGIN + COLUMN_SPACING, CANVAS_MARGIN + 2.0 * ROW_SPACING));
    }

    #[test]
    fn test_zoom_keeps_pivot_fixed() {
        let mut view = GraphView::new();
        let point = LayoutPoint { x: 3.0, y: 1.0 };
        let before = view.to_screen(point, canvas());

        view.zoom_around(2.0, before, canvas());
        let after = view.to_screen(point, canvas());

        assert_eq!(view.zoom(), 2.0);
        assert!((after - before).length() < 1e-3);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut view = GraphView::new();
        view.zoom_around(1000.0, egui::pos2(10.0, 10.0), canvas());
        assert_eq!(view.zoom(), MAX_ZOOM);
        view.zoom_around(0.0001, egui::pos2(10.0, 10.0), canvas());
        assert_eq!(view.zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_pan_and_reset() {
        let mut view = GraphView::new();
        view.pan_by(egui::vec2(5.0, -5.0));
        let p = view.to_screen(LayoutPoint { x: 0.0, y: 0.0 }, canvas());
        assert_eq!(p, egui::pos2(CANVAS_MARGIN + 5.0, CANVAS_MARGIN - 5.0));
        view.reset();
        assert_eq!(view.zoom(), 1.0);
    }
}
