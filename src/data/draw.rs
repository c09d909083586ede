//! Draw instructions and readout updates produced by the sketch session.
//!
//! The session never touches a real drawing surface. Every step returns an
//! [`Output`] describing what should be drawn and which readouts changed; the
//! host applies it to whatever [`Surface`] it renders with.

use super::mapper::PixelPos;

/// Readouts are truncated (towards negative infinity) to this many decimals.
const READOUT_DECIMALS: i32 = 7;

/// Fixed pixel extent of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// What a stroke represents. The host maps each kind to a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeKind {
    Pen,
    Derivative,
    Integral,
    Grid,
    Axis,
}

/// A single pixel-space drawing primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole surface.
    Clear,
    Line {
        from: PixelPos,
        to: PixelPos,
        kind: StrokeKind,
        width: u32,
    },
    FillRect {
        min: PixelPos,
        width: f64,
        height: f64,
        kind: StrokeKind,
    },
}

/// A value to show in one of the on-screen readouts. Numbers are already rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Readout {
    Derivative(f64),
    Integral(f64),
    Cursor { x: f64, y: f64 },
    Scale { pixels_per_unit: f64, stroke_width: u32 },
}

/// Receiver of draw commands.
pub trait Surface {
    fn apply(&mut self, command: &DrawCommand);
}

/// Everything a single session step asks the host to do, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Output {
    pub commands: Vec<DrawCommand>,
    pub readouts: Vec<Readout>,
}

impl Output {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.readouts.is_empty()
    }

    pub fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn readout(&mut self, readout: Readout) {
        self.readouts.push(readout);
    }

    pub fn extend(&mut self, other: Output) {
        self.commands.extend(other.commands);
        self.readouts.extend(other.readouts);
    }

    /// Replay the draw commands onto `surface`.
    pub fn apply_to<S: Surface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            surface.apply(command);
        }
    }

    /// Iterate only the line commands of the given kind.
    pub fn lines_of(&self, kind: StrokeKind) -> impl Iterator<Item = (PixelPos, PixelPos)> + '_ {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::Line {
                from, to, kind: k, ..
            } if *k == kind => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn last_derivative(&self) -> Option<f64> {
        self.readouts.iter().rev().find_map(|r| match r {
            Readout::Derivative(v) => Some(*v),
            _ => None,
        })
    }

    pub fn last_integral(&self) -> Option<f64> {
        self.readouts.iter().rev().find_map(|r| match r {
            Readout::Integral(v) => Some(*v),
            _ => None,
        })
    }
}

/// Truncate a value for display, e.g. `0.123456789` → `0.1234567`.
pub fn round_readout(value: f64) -> f64 {
    let factor = 10f64.powi(READOUT_DECIMALS);
    (value * factor).floor() / factor
}
