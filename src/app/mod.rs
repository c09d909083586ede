//! eframe application hosting a sketch [`Session`](crate::data::session::Session).
//!
//! | Sub-module       | Responsibility |
//! | ---------------- | -------------- |
//! | [`canvas`]       | Retained display list replayed through `egui::Painter` |
//! | [`input`]        | Raw egui pointer/wheel events → [`SketchEvent`](crate::events::SketchEvent)s |
//! | `controls`       | Clear / reset buttons, toggles and readouts |
//! | `sketch_app`     | [`SketchApp`], the [`eframe::App`] implementation |
//! | `run`            | [`run_sketch()`] entry point and icon loading |

pub mod canvas;
mod controls;
pub mod input;
mod run;
mod sketch_app;

pub use run::run_sketch;
pub use sketch_app::SketchApp;
