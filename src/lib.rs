//! Curve Sketch crate root: re-exports and module wiring.
//!
//! Draw a curve freehand on a grid and watch a numeric derivative and a
//! running integral of it being estimated as you go.
//!
//! - `data`: the host-independent core (coordinate mapping, grid layout,
//!   both estimators, the [`Session`] aggregate, hotkeys)
//! - `events`: plain-value input vocabulary of the session
//! - `sink`: channel for injecting events from other threads
//! - `controllers`: subscription handle for readout updates
//! - `config`: settings and YAML persistence
//! - `app`: the egui/eframe host

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod controllers;
pub mod data;
pub mod error;
pub mod events;
pub mod sink;

pub use app::{run_sketch, SketchApp};
pub use color_scheme::{ColorScheme, SketchPalette};
pub use config::{SketchConfig, SketchSettings};
pub use controllers::{ReadoutController, ReadoutInfo};
pub use data::draw::{DrawCommand, Output, Readout, StrokeKind, Surface, SurfaceSize};
pub use data::mapper::{CoordinateMapper, GridPoint, PixelPos, ScaleState};
pub use data::session::{Session, SessionOptions, StrokeState};
pub use error::{HotkeyParseError, SketchError};
pub use events::{Action, PointerEvent, PointerKind, SketchEvent};
pub use sink::{channel, SketchSink};
