//! Controllers for observing the sketch from external code.
//!
//! A [`ReadoutController`] mirrors the on-screen readouts (derivative,
//! running integral, cursor position, scale) and lets non-UI code subscribe
//! to every change.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::data::draw::Readout;
use crate::data::mapper::{ScaleState, DEFAULT_SCALE};

/// Snapshot of all readout values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadoutInfo {
    pub derivative: f64,
    pub integral: f64,
    /// Last pointer position in grid space, if the pointer has been seen.
    pub cursor: Option<[f64; 2]>,
    pub scale: f64,
    pub stroke_width: u32,
}

impl Default for ReadoutInfo {
    fn default() -> Self {
        Self {
            derivative: 0.0,
            integral: 0.0,
            cursor: None,
            scale: DEFAULT_SCALE,
            stroke_width: ScaleState::stroke_width_for(DEFAULT_SCALE),
        }
    }
}

impl ReadoutInfo {
    pub fn apply(&mut self, readout: &Readout) {
        match *readout {
            Readout::Derivative(v) => self.derivative = v,
            Readout::Integral(v) => self.integral = v,
            Readout::Cursor { x, y } => self.cursor = Some([x, y]),
            Readout::Scale {
                pixels_per_unit,
                stroke_width,
            } => {
                self.scale = pixels_per_unit;
                self.stroke_width = stroke_width;
            }
        }
    }
}

/// Shared handle publishing [`ReadoutInfo`] snapshots to subscribers.
#[derive(Clone, Default)]
pub struct ReadoutController {
    pub(crate) inner: Arc<Mutex<ReadoutCtrlInner>>,
}

#[derive(Default)]
pub(crate) struct ReadoutCtrlInner {
    pub(crate) current: ReadoutInfo,
    pub(crate) listeners: Vec<Sender<ReadoutInfo>>,
}

impl ReadoutController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest published readouts.
    pub fn current(&self) -> ReadoutInfo {
        self.inner
            .lock()
            .map(|inner| inner.current)
            .unwrap_or_default()
    }

    /// Subscribe to readout updates. The receiver gets one snapshot per publish.
    pub fn subscribe(&self) -> Receiver<ReadoutInfo> {
        let (tx, rx) = std::sync::mpsc::channel();
        match self.inner.lock() {
            Ok(mut inner) => inner.listeners.push(tx),
            Err(_) => warn!("readout controller poisoned; subscriber will receive nothing"),
        }
        rx
    }

    /// Store `info` and forward it to every live subscriber; dropped receivers are pruned.
    pub(crate) fn publish(&self, info: ReadoutInfo) {
        match self.inner.lock() {
            Ok(mut inner) => {
                inner.current = info;
                inner.listeners.retain(|tx| tx.send(info).is_ok());
            }
            Err(_) => warn!("readout controller poisoned; update dropped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_reaches_subscribers_and_updates_current() {
        let ctrl = ReadoutController::new();
        let rx = ctrl.subscribe();
        let mut info = ReadoutInfo::default();
        info.apply(&Readout::Integral(4.0));
        ctrl.publish(info);

        assert_eq!(rx.try_recv().unwrap().integral, 4.0);
        assert_eq!(ctrl.current().integral, 4.0);
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let ctrl = ReadoutController::new();
        drop(ctrl.subscribe());
        let kept = ctrl.subscribe();
        ctrl.publish(ReadoutInfo::default());
        assert!(kept.try_recv().is_ok());
        assert_eq!(ctrl.inner.lock().unwrap().listeners.len(), 1);
    }

    #[test]
    fn apply_tracks_each_readout_kind() {
        let mut info = ReadoutInfo::default();
        info.apply(&Readout::Derivative(-1.5));
        info.apply(&Readout::Cursor { x: 2.0, y: 3.0 });
        info.apply(&Readout::Scale {
            pixels_per_unit: 12.0,
            stroke_width: 1,
        });
        assert_eq!(info.derivative, -1.5);
        assert_eq!(info.cursor, Some([2.0, 3.0]));
        assert_eq!(info.scale, 12.0);
        assert_eq!(info.stroke_width, 1);
    }

    #[test]
    fn poisoned_controller_drops_updates_without_panicking() {
        let ctrl = ReadoutController::new();
        let rx = ctrl.subscribe();
        let inner = ctrl.inner.clone();
        let _ = std::thread::spawn(move || {
            let _guard = inner.lock().unwrap();
            panic!("poison");
        })
        .join();

        ctrl.publish(ReadoutInfo::default());
        assert!(rx.try_recv().is_err());
        let late = ctrl.subscribe();
        assert!(late.try_recv().is_err());
        assert_eq!(ctrl.current(), ReadoutInfo::default());
    }
}
