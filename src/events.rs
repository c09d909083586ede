//! Input vocabulary of the sketch session.
//!
//! Hosts translate their native pointer, wheel, keyboard and widget events
//! into [`SketchEvent`]s and feed them to
//! [`Session::handle`](crate::data::session::Session::handle) one at a time.

use crate::data::mapper::PixelPos;

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    /// The pointer left the drawing surface.
    Leave,
}

/// A pointer event at a position relative to the surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub pos: PixelPos,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            pos: PixelPos::new(x, y),
        }
    }

    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Down, x, y)
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Move, x, y)
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Up, x, y)
    }

    pub fn leave(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Leave, x, y)
    }
}

/// Discrete commands, usually bound to hotkeys or buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Erase the drawing and all estimator state.
    Clear,
    /// Return to the default scale (no-op when already there).
    ResetScale,
    ToggleDerivative,
    ToggleIntegral,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::Clear,
        Action::ResetScale,
        Action::ToggleDerivative,
        Action::ToggleIntegral,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::Clear => "Clear",
            Action::ResetScale => "Reset scale",
            Action::ToggleDerivative => "Derivative",
            Action::ToggleIntegral => "Integral",
        }
    }
}

/// Everything the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SketchEvent {
    Pointer(PointerEvent),
    /// Wheel movement in browser `deltaY` convention: positive zooms in.
    Wheel { delta: f64 },
    /// Jump straight to a scale (clamped).
    Zoom { scale: f64 },
    Action(Action),
    SetDerivativeVisible(bool),
    SetIntegralVisible(bool),
}

impl From<PointerEvent> for SketchEvent {
    fn from(ev: PointerEvent) -> Self {
        SketchEvent::Pointer(ev)
    }
}

impl From<Action> for SketchEvent {
    fn from(action: Action) -> Self {
        SketchEvent::Action(action)
    }
}
