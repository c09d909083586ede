//! Retained drawing surface on top of egui's immediate-mode painter.
//!
//! egui repaints every frame from scratch, so the canvas keeps every draw
//! command issued since the last `Clear` and replays them in order.

use eframe::egui;

use crate::color_scheme::SketchPalette;
use crate::data::draw::{DrawCommand, Surface, SurfaceSize};
use crate::data::mapper::PixelPos;

pub struct RetainedCanvas {
    size: SurfaceSize,
    commands: Vec<DrawCommand>,
}

impl RetainedCanvas {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn desired_size(&self) -> egui::Vec2 {
        egui::vec2(self.size.width as f32, self.size.height as f32)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Paint the retained commands into `rect`, whose top-left is pixel (0, 0).
    pub fn paint(&self, painter: &egui::Painter, rect: egui::Rect, palette: &SketchPalette) {
        let painter = painter.with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, palette.background);
        let to_screen = |p: PixelPos| rect.min + egui::vec2(p.x as f32, p.y as f32);
        for command in &self.commands {
            match *command {
                DrawCommand::Clear => {}
                DrawCommand::Line {
                    from,
                    to,
                    kind,
                    width,
                } => {
                    painter.line_segment(
                        [to_screen(from), to_screen(to)],
                        egui::Stroke::new(width as f32, palette.color(kind)),
                    );
                }
                DrawCommand::FillRect {
                    min,
                    width,
                    height,
                    kind,
                } => {
                    let r = egui::Rect::from_min_size(
                        to_screen(min),
                        egui::vec2(width as f32, height as f32),
                    );
                    painter.rect_filled(r, 0.0, palette.color(kind));
                }
            }
        }
    }
}

impl Surface for RetainedCanvas {
    fn apply(&mut self, command: &DrawCommand) {
        if matches!(command, DrawCommand::Clear) {
            self.commands.clear();
        } else {
            self.commands.push(*command);
        }
    }
}
