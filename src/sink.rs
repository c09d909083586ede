//! Channel for feeding sketch events from outside the UI thread.
//!
//! Create a pair with [`channel`], pass the receiver to
//! [`run_sketch`](crate::run_sketch), and drive the session through the
//! [`SketchSink`] (scripted demos, replaying recorded strokes, tests). Events
//! are applied in order at the start of each frame, before UI input.

use std::sync::mpsc::{Receiver, SendError, Sender};

use crate::data::mapper::PixelPos;
use crate::events::{Action, PointerEvent, SketchEvent};

/// Convenience sender for sketch events.
#[derive(Clone)]
pub struct SketchSink {
    tx: Sender<SketchEvent>,
}

pub fn channel() -> (SketchSink, Receiver<SketchEvent>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (SketchSink { tx }, rx)
}

impl SketchSink {
    pub fn send(&self, event: SketchEvent) -> Result<(), SendError<SketchEvent>> {
        self.tx.send(event)
    }

    pub fn action(&self, action: Action) -> Result<(), SendError<SketchEvent>> {
        self.send(SketchEvent::Action(action))
    }

    pub fn zoom(&self, scale: f64) -> Result<(), SendError<SketchEvent>> {
        self.send(SketchEvent::Zoom { scale })
    }

    /// Send a whole stroke: down at the first position, a move for each
    /// following one, then up at the last. An empty slice sends nothing.
    pub fn stroke(&self, path: &[PixelPos]) -> Result<(), SendError<SketchEvent>> {
        let Some((first, rest)) = path.split_first() else {
            return Ok(());
        };
        self.send(PointerEvent::down(first.x, first.y).into())?;
        for p in rest {
            self.send(PointerEvent::moved(p.x, p.y).into())?;
        }
        let last = rest.last().unwrap_or(first);
        self.send(PointerEvent::up(last.x, last.y).into())
    }
}
