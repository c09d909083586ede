//! Gridline layout and axis-origin snapping.

use super::draw::{DrawCommand, StrokeKind, SurfaceSize};
use super::mapper::PixelPos;

/// Gridline positions for one scale, plus the snapped axis origins.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// Pixel x of every vertical gridline, ascending.
    pub vertical: Vec<f64>,
    /// Pixel y of every horizontal gridline, ascending.
    pub horizontal: Vec<f64>,
    pub axis_origin_x: f64,
    pub axis_origin_y: f64,
}

impl GridLayout {
    /// Sweep gridlines `scale` pixels apart from 0 across the surface.
    ///
    /// The axis origin of each dimension is the last swept line lying less
    /// than `scale` past the surface midpoint. That is the first line at or
    /// after the midpoint, not necessarily the nearest one.
    pub fn compute(size: SurfaceSize, scale: f64) -> Self {
        let (vertical, axis_origin_x) = sweep(size.width, scale);
        let (horizontal, axis_origin_y) = sweep(size.height, scale);
        Self {
            vertical,
            horizontal,
            axis_origin_x,
            axis_origin_y,
        }
    }

    /// Gridlines first (vertical, then horizontal), then both axes.
    pub fn draw_commands(&self, size: SurfaceSize, stroke_width: u32) -> Vec<DrawCommand> {
        let line = |from: PixelPos, to: PixelPos, kind: StrokeKind| DrawCommand::Line {
            from,
            to,
            kind,
            width: stroke_width,
        };
        let mut commands = Vec::with_capacity(self.vertical.len() + self.horizontal.len() + 2);
        for &x in &self.vertical {
            commands.push(line(
                PixelPos::new(x, 0.0),
                PixelPos::new(x, size.height),
                StrokeKind::Grid,
            ));
        }
        for &y in &self.horizontal {
            commands.push(line(
                PixelPos::new(0.0, y),
                PixelPos::new(size.width, y),
                StrokeKind::Grid,
            ));
        }
        commands.push(line(
            PixelPos::new(self.axis_origin_x, 0.0),
            PixelPos::new(self.axis_origin_x, size.height),
            StrokeKind::Axis,
        ));
        commands.push(line(
            PixelPos::new(0.0, self.axis_origin_y),
            PixelPos::new(size.width, self.axis_origin_y),
            StrokeKind::Axis,
        ));
        commands
    }
}

fn sweep(extent: f64, scale: f64) -> (Vec<f64>, f64) {
    let mid = extent / 2.0;
    let mut lines = Vec::new();
    let mut axis = 0.0;
    if scale.is_nan() || scale <= 0.0 {
        return (lines, mid);
    }
    let mut pos = 0.0;
    while pos < extent {
        if pos - mid < scale {
            axis = pos;
        }
        lines.push(pos);
        pos += scale;
    }
    (lines, axis)
}
