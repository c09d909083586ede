//! Color schemes: egui visuals plus the colours of every stroke kind.

use eframe::egui::{Color32, Context, Visuals};
use serde::{Deserialize, Serialize};

use crate::data::draw::StrokeKind;

/// Visual theme for the sketch UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    /// Dark background, white axes.
    #[default]
    Dark,
    /// Light background, dark axes.
    Light,
}

/// Colours used when painting the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SketchPalette {
    pub background: Color32,
    pub pen: Color32,
    pub derivative: Color32,
    pub integral: Color32,
    pub grid: Color32,
    pub axis: Color32,
}

impl SketchPalette {
    pub fn color(&self, kind: StrokeKind) -> Color32 {
        match kind {
            StrokeKind::Pen => self.pen,
            StrokeKind::Derivative => self.derivative,
            StrokeKind::Integral => self.integral,
            StrokeKind::Grid => self.grid,
            StrokeKind::Axis => self.axis,
        }
    }
}

impl ColorScheme {
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Dark, ColorScheme::Light]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
        }
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        match self {
            ColorScheme::Dark => ctx.set_visuals(Visuals::dark()),
            ColorScheme::Light => ctx.set_visuals(Visuals::light()),
        }
    }

    pub fn palette(&self) -> SketchPalette {
        let pen = Color32::from_rgb(0x13, 0xba, 0x2c);
        let derivative = Color32::from_rgb(0xf0, 0x3e, 0x82);
        let grid = Color32::from_rgb(0x64, 0x6c, 0xff);
        match self {
            ColorScheme::Dark => SketchPalette {
                background: Color32::from_rgb(0x24, 0x24, 0x24),
                pen,
                derivative,
                integral: Color32::from_rgb(0xf0, 0xd8, 0x3e),
                grid,
                axis: Color32::WHITE,
            },
            ColorScheme::Light => SketchPalette {
                background: Color32::from_rgb(0xf8, 0xf8, 0xf8),
                pen,
                derivative,
                // The dark-scheme yellow disappears on white.
                integral: Color32::from_rgb(0xc9, 0x9a, 0x06),
                grid: grid.gamma_multiply(0.5),
                axis: Color32::from_rgb(0x20, 0x20, 0x20),
            },
        }
    }
}
