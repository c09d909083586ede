//! Top-level entry point for running the sketch as a native window.

use std::sync::mpsc::Receiver;

use eframe::egui;

use crate::config::SketchConfig;
use crate::events::SketchEvent;

use super::sketch_app::SketchApp;

/// Room around the canvas for the control strip and panel margins.
const CHROME_SIZE: [f32; 2] = [32.0, 72.0];

/// Launch the sketch application in a native window.
///
/// `rx` optionally carries events injected through a
/// [`SketchSink`](crate::sink::SketchSink). The call blocks until the window
/// is closed.
pub fn run_sketch(
    mut cfg: SketchConfig,
    rx: Option<Receiver<SketchEvent>>,
) -> eframe::Result<()> {
    let app = SketchApp::new(&cfg, rx);

    let title = cfg.settings.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    // Size the window around the fixed canvas unless the caller chose a size.
    if opts.viewport.inner_size.is_none() {
        let [w, h] = cfg.settings.surface_size;
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(w + CHROME_SIZE[0], h + CHROME_SIZE[1]));
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Render the bundled `icon.svg` into an [`egui::IconData`].
///
/// Returns `None` if the file is missing or cannot be rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size.width(),
        height: size.height(),
    })
}
