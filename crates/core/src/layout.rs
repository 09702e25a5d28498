//! Node placement along a wave across a fixed logical canvas.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Canvas geometry used for layout. All values are logical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub node_radius: f64,
    /// Horizontal inset of the first and last node.
    pub padding: f64,
    /// Extra vertical clearance kept beyond the node radius.
    pub edge_margin: f64,
    /// Wave amplitude as a fraction of `height`.
    pub wave_ratio: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            node_radius: 32.0,
            padding: 80.0,
            edge_margin: 20.0,
            wave_ratio: 0.3,
        }
    }
}

/// Segment between two consecutive nodes; `from_index` is the earlier node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from_index: usize,
    pub from: Point,
    pub to: Point,
}

impl Canvas {
    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }

    #[must_use]
    pub fn wave_height(&self) -> f64 {
        self.height * self.wave_ratio
    }

    /// Lowest and highest y a node center may take.
    #[must_use]
    pub fn y_bounds(&self) -> (f64, f64) {
        let min = self.node_radius + self.edge_margin;
        let max = self.height - self.node_radius - self.edge_margin;
        (min, max.max(min))
    }

    /// Position of node `index` out of `total`.
    ///
    /// A single node sits at the center. Otherwise nodes spread linearly from
    /// left to right while y follows `sin(progress * 1.5π)`, clamped so the
    /// node stays clear of the top and bottom edges.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn node_position(&self, index: usize, total: usize) -> Point {
        if total <= 1 {
            return self.center();
        }

        let progress = index as f64 / (total - 1) as f64;
        let x = self.padding + progress * (self.width - self.padding * 2.0);

        let wave_offset = (progress * PI * 1.5).sin() * self.wave_height();
        let (min_y, max_y) = self.y_bounds();
        let y = (self.center().y + wave_offset).clamp(min_y, max_y);

        Point { x, y }
    }

    #[must_use]
    pub fn positions(&self, total: usize) -> Vec<Point> {
        (0..total).map(|i| self.node_position(i, total)).collect()
    }

    #[must_use]
    pub fn connections(&self, total: usize) -> Vec<Connection> {
        let points = self.positions(total);
        points
            .windows(2)
            .enumerate()
            .map(|(from_index, pair)| Connection {
                from_index,
                from: pair[0],
                to: pair[1],
            })
            .collect()
    }
}
