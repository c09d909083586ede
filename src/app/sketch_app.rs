//! Standalone application wrapper implementing [`eframe::App`].

use std::sync::mpsc::Receiver;
use std::time::Duration;

use eframe::egui;
use tracing::{info, trace};

use crate::color_scheme::ColorScheme;
use crate::config::SketchConfig;
use crate::controllers::{ReadoutController, ReadoutInfo};
use crate::data::draw::Output;
use crate::data::hotkeys::{self, Hotkeys};
use crate::data::session::Session;
use crate::events::SketchEvent;

use super::canvas::RetainedCanvas;
use super::controls::{show_controls, ControlState};
use super::input::PointerTracker;

/// The sketch application: one session, its retained canvas and the UI around it.
pub struct SketchApp {
    pub session: Session,
    canvas: RetainedCanvas,
    readouts: ReadoutInfo,
    hotkeys: Hotkeys,
    color_scheme: ColorScheme,
    color_scheme_applied: bool,
    wheel_sensitivity: f64,
    pointer: PointerTracker,
    /// Externally injected events (see [`crate::sink`]).
    rx: Option<Receiver<SketchEvent>>,
    readout_ctrl: Option<ReadoutController>,
}

impl SketchApp {
    pub fn new(cfg: &SketchConfig, rx: Option<Receiver<SketchEvent>>) -> Self {
        let settings = &cfg.settings;
        let size = settings.surface();
        info!(width = size.width, height = size.height, "starting sketch session");
        let mut app = Self {
            session: Session::with_options(size, settings.session_options()),
            canvas: RetainedCanvas::new(size),
            readouts: ReadoutInfo::default(),
            hotkeys: settings.hotkeys.clone(),
            color_scheme: settings.color_scheme,
            color_scheme_applied: false,
            wheel_sensitivity: settings.wheel_sensitivity,
            pointer: PointerTracker::new(),
            rx,
            readout_ctrl: cfg.readout_controller.clone(),
        };
        let initial = app.session.start();
        app.apply(initial);
        app
    }

    /// Run one event through the session and apply the result.
    pub fn dispatch(&mut self, event: SketchEvent) {
        let out = self.session.handle(event);
        self.apply(out);
    }

    fn apply(&mut self, out: Output) {
        if out.is_empty() {
            return;
        }
        out.apply_to(&mut self.canvas);
        trace!(retained = self.canvas.len(), "canvas updated");
        for readout in &out.readouts {
            self.readouts.apply(readout);
        }
        if let Some(ctrl) = &self.readout_ctrl {
            ctrl.publish(self.readouts);
        }
    }

    fn drain_external(&mut self) {
        let pending: Vec<SketchEvent> = match &self.rx {
            Some(rx) => rx.try_iter().collect(),
            None => return,
        };
        for event in pending {
            self.dispatch(event);
        }
    }

    fn control_state(&self) -> ControlState {
        ControlState {
            show_derivative: self.session.show_derivative(),
            show_integral: self.session.show_integral(),
            at_default_scale: self.session.scale().pixels_per_unit
                == self.session.default_scale(),
        }
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.color_scheme_applied {
            self.color_scheme.apply(ctx);
            self.color_scheme_applied = true;
        }

        self.drain_external();

        for action in hotkeys::detect_actions(&self.hotkeys, ctx) {
            self.dispatch(SketchEvent::Action(action));
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            let state = self.control_state();
            let mut scheme = self.color_scheme;
            for event in show_controls(ui, &state, &self.readouts, &self.hotkeys, &mut scheme) {
                self.dispatch(event);
            }
            if scheme != self.color_scheme {
                info!(scheme = scheme.label(), "color scheme changed");
                self.color_scheme = scheme;
                scheme.apply(ctx);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(self.canvas.desired_size(), egui::Sense::click_and_drag());
            let rect = response.rect;

            let (events, scroll_y) = ctx.input(|i| (i.events.clone(), i.raw_scroll_delta.y));
            for event in self
                .pointer
                .translate(&events, scroll_y, rect, self.wheel_sensitivity)
            {
                self.dispatch(event);
            }

            self.canvas
                .paint(&painter, rect, &self.color_scheme.palette());
        });

        if self.rx.is_some() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}
