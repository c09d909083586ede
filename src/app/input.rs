//! Translation of raw egui input into session events.

use eframe::egui;

use crate::events::{PointerEvent, PointerKind, SketchEvent};

/// Tracks whether the pointer is over the canvas so leaving it can be reported.
#[derive(Debug, Default)]
pub struct PointerTracker {
    inside: bool,
    last: Option<egui::Pos2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert one frame of input into session events.
    ///
    /// `canvas` is the screen rectangle of the drawing surface; emitted
    /// positions are relative to its top-left corner. `scroll_y` is egui's raw
    /// vertical scroll delta, which is positive when scrolling up, so it is
    /// negated into the wheel-down-is-positive convention.
    pub fn translate(
        &mut self,
        events: &[egui::Event],
        scroll_y: f32,
        canvas: egui::Rect,
        wheel_sensitivity: f64,
    ) -> Vec<SketchEvent> {
        let mut out = Vec::new();
        let relative = |kind: PointerKind, pos: egui::Pos2| {
            let p = pos - canvas.min;
            SketchEvent::Pointer(PointerEvent::new(kind, f64::from(p.x), f64::from(p.y)))
        };

        for ev in events {
            match ev {
                egui::Event::PointerMoved(pos) => {
                    if canvas.contains(*pos) {
                        self.inside = true;
                        out.push(relative(PointerKind::Move, *pos));
                    } else if self.inside {
                        self.inside = false;
                        out.push(relative(PointerKind::Leave, *pos));
                    }
                    self.last = Some(*pos);
                }
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    if *pressed {
                        if canvas.contains(*pos) {
                            self.inside = true;
                            out.push(relative(PointerKind::Down, *pos));
                        }
                    } else {
                        out.push(relative(PointerKind::Up, *pos));
                    }
                    self.last = Some(*pos);
                }
                egui::Event::PointerGone => {
                    if self.inside {
                        self.inside = false;
                        let pos = self.last.unwrap_or(canvas.min);
                        out.push(relative(PointerKind::Leave, pos));
                    }
                }
                _ => {}
            }
        }

        if scroll_y != 0.0 && self.inside {
            out.push(SketchEvent::Wheel {
                delta: -f64::from(scroll_y) * wheel_sensitivity,
            });
        }
        out
    }
}
