//! Node placement for the graph view.
//!
//! Positions are in abstract layout units: one unit per tree level
//! vertically and one unit per leaf horizontally. The renderer scales them.

use crate::session::RenderFrame;

/// Position of one node in layout units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPoint {
    pub x: f32,
    pub y: f32,
}

/// Computes a position for every node of the frame.
///
/// When every node carries numeric `x`/`y` attributes those are used as-is.
/// Otherwise a tidy tree layout is computed: `y` is the depth, leaves are
/// spaced one unit apart in depth-first order and each parent is centred
/// over its first and last child.
pub fn compute_layout(frame: &RenderFrame) -> Vec<LayoutPoint> {
    if frame.is_empty() {
        return Vec::new();
    }

    let explicit: Option<Vec<LayoutPoint>> = frame
        .nodes
        .iter()
        .map(|n| n.position().map(|(x, y)| LayoutPoint { x: x as f32, y: y as f32 }))
        .collect();
    if let Some(points) = explicit {
        return points;
    }

    tree_layout(&frame.parent_index)
}

fn tree_layout(parent_index: &[Option<usize>]) -> Vec<LayoutPoint> {
    let n = parent_index.len();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut roots = Vec::new();
    for (child, parent) in parent_index.iter().enumerate() {
        match parent {
            Some(p) if *p < n && *p != child => children[*p].push(child),
            _ => roots.push(child),
        }
    }

    let mut points = vec![LayoutPoint { x: 0.0, y: 0.0 }; n];
    let mut visited = vec![false; n];
    let mut next_leaf = 0.0_f32;

    for root in roots {
        // (node, depth, index of next child to visit)
        let mut stack: Vec<(usize, usize, usize)> = vec![(root, 0, 0)];
        visited[root] = true;

        while let Some(top) = stack.last_mut() {
            let (node, depth) = (top.0, top.1);
            if let Some(&child) = children[node].get(top.2) {
                top.2 += 1;
                if !visited[child] {
                    visited[child] = true;
                    stack.push((child, depth + 1, 0));
                }
                continue;
            }

            stack.pop();
            let placed: Vec<usize> = children[node].iter().copied().filter(|&c| visited[c]).collect();
            let x = match (placed.first(), placed.last()) {
                (Some(&first), Some(&last)) if !children[node].is_empty() => {
                    (points[first].x + points[last].x) / 2.0
                }
                _ => {
                    let x = next_leaf;
                    next_leaf += 1.0;
                    x
                }
            };
            points[node] = LayoutPoint { x, y: depth as f32 };
        }
    }

    points
}
