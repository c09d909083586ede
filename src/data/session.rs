//! The sketch session: one aggregate owning all drawing and estimation state.
//!
//! A [`Session`] turns [`SketchEvent`]s into [`Output`]s. It owns the scale
//! state, both estimator windows, the running integral, the visibility flags
//! and the stroke capture state. Nothing here blocks or fails; undefined
//! numeric steps (vertical windows) are skipped silently.
//!
//! Estimator state lives for one *epoch*: it survives pointer-up and
//! pointer-leave, so separate strokes keep feeding the same windows, and is
//! discarded wholesale by a clear or any scale change.

use tracing::{debug, trace};

use super::derivative::{DerivativeEstimator, SlopeStep};
use super::draw::{round_readout, DrawCommand, Output, Readout, StrokeKind, SurfaceSize};
use super::grid::GridLayout;
use super::integral::{AreaStep, IntegralEstimator};
use super::mapper::{CoordinateMapper, GridPoint, PixelPos, ScaleState, DEFAULT_SCALE};
use crate::events::{Action, PointerEvent, PointerKind, SketchEvent};

/// Side length, in pixels, of the dot drawn where a stroke starts.
const STROKE_DOT_SIZE: f64 = 2.0;
/// Wheel deltas are divided by this before exponentiation.
const WHEEL_ZOOM_DIVISOR: f64 = 1000.0;

/// Start-up settings for a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    /// Scale used initially and restored by [`Action::ResetScale`].
    pub default_scale: f64,
    pub show_derivative: bool,
    pub show_integral: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            default_scale: DEFAULT_SCALE,
            show_derivative: true,
            show_integral: true,
        }
    }
}

/// Whether pointer motion is currently being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeState {
    Idle,
    Active,
}

#[derive(Debug, Clone)]
pub struct Session {
    size: SurfaceSize,
    default_scale: f64,
    scale: ScaleState,
    grid: GridLayout,
    derivative: DerivativeEstimator,
    integral: IntegralEstimator,
    show_derivative: bool,
    show_integral: bool,
    stroke: StrokeState,
    /// Last pixel position of the pen; the next stroke segment starts here.
    pen: PixelPos,
    points_sampled: u64,
}

impl Session {
    pub fn new(size: SurfaceSize) -> Self {
        Self::with_options(size, SessionOptions::default())
    }

    pub fn with_options(size: SurfaceSize, options: SessionOptions) -> Self {
        let default_scale = ScaleState::clamp_scale(options.default_scale);
        let grid = GridLayout::compute(size, default_scale);
        let scale = ScaleState::new(default_scale, grid.axis_origin_x, grid.axis_origin_y);
        Self {
            size,
            default_scale,
            scale,
            grid,
            derivative: DerivativeEstimator::new(),
            integral: IntegralEstimator::new(),
            show_derivative: options.show_derivative,
            show_integral: options.show_integral,
            stroke: StrokeState::Idle,
            pen: PixelPos::default(),
            points_sampled: 0,
        }
    }

    /// Initial paint of an empty surface.
    pub fn start(&mut self) -> Output {
        self.erase()
    }

    pub fn handle(&mut self, event: SketchEvent) -> Output {
        match event {
            SketchEvent::Pointer(ev) => self.pointer(ev),
            SketchEvent::Wheel { delta } => self.wheel(delta),
            SketchEvent::Zoom { scale } => self.zoom(scale),
            SketchEvent::Action(action) => self.action(action),
            SketchEvent::SetDerivativeVisible(visible) => {
                self.show_derivative = visible;
                Output::default()
            }
            SketchEvent::SetIntegralVisible(visible) => {
                self.show_integral = visible;
                Output::default()
            }
        }
    }

    pub fn action(&mut self, action: Action) -> Output {
        match action {
            Action::Clear => self.erase(),
            Action::ResetScale => self.reset_scale(),
            Action::ToggleDerivative => {
                self.show_derivative = !self.show_derivative;
                Output::default()
            }
            Action::ToggleIntegral => {
                self.show_integral = !self.show_integral;
                Output::default()
            }
        }
    }

    pub fn pointer(&mut self, ev: PointerEvent) -> Output {
        let point = self.mapper().to_grid(ev.pos);
        let mut out = Output::default();
        out.readout(Readout::Cursor {
            x: round_readout(point.x),
            y: round_readout(point.y),
        });

        match ev.kind {
            PointerKind::Down => {
                self.stroke = StrokeState::Active;
                self.pen = ev.pos;
                out.draw(DrawCommand::FillRect {
                    min: ev.pos,
                    width: STROKE_DOT_SIZE,
                    height: STROKE_DOT_SIZE,
                    kind: StrokeKind::Pen,
                });
                self.record_sample(point, &mut out);
            }
            PointerKind::Move => {
                if self.stroke == StrokeState::Active {
                    out.draw(self.line(self.pen, ev.pos, StrokeKind::Pen));
                    self.pen = ev.pos;
                    self.record_sample(point, &mut out);
                }
            }
            PointerKind::Up | PointerKind::Leave => {
                self.stroke = StrokeState::Idle;
            }
        }
        out
    }

    /// Exponential zoom: a positive delta zooms in.
    pub fn wheel(&mut self, delta: f64) -> Output {
        let requested = self.scale.pixels_per_unit * (delta / WHEEL_ZOOM_DIVISOR).exp();
        self.zoom(requested)
    }

    /// Change the scale (clamped), re-snap the axes and erase everything.
    pub fn zoom(&mut self, requested: f64) -> Output {
        let scale = ScaleState::clamp_scale(requested);
        self.grid = GridLayout::compute(self.size, scale);
        self.scale = ScaleState::new(scale, self.grid.axis_origin_x, self.grid.axis_origin_y);
        debug!(
            requested,
            scale,
            stroke_width = self.scale.stroke_width,
            axis_x = self.scale.axis_origin_x,
            axis_y = self.scale.axis_origin_y,
            "zoom"
        );
        self.erase()
    }

    pub fn reset_scale(&mut self) -> Output {
        if self.scale.pixels_per_unit == self.default_scale {
            return Output::default();
        }
        self.zoom(self.default_scale)
    }

    /// Discard every per-epoch state and repaint the bare grid.
    pub fn erase(&mut self) -> Output {
        self.derivative.reset();
        self.integral.reset();
        self.points_sampled = 0;
        debug!(scale = self.scale.pixels_per_unit, "erase");

        let mut out = Output::default();
        out.draw(DrawCommand::Clear);
        out.commands
            .extend(self.grid.draw_commands(self.size, self.scale.stroke_width));
        out.readout(Readout::Derivative(0.0));
        out.readout(Readout::Integral(0.0));
        out.readout(Readout::Scale {
            pixels_per_unit: self.scale.pixels_per_unit,
            stroke_width: self.scale.stroke_width,
        });
        out
    }

    fn record_sample(&mut self, point: GridPoint, out: &mut Output) {
        self.points_sampled += 1;
        trace!(x = point.x, y = point.y, count = self.points_sampled, "sample");

        match self.derivative.push(point) {
            SlopeStep::Pending => {}
            SlopeStep::Vertical { first, last } => {
                debug!(?first, ?last, "vertical derivative batch skipped");
            }
            SlopeStep::First { slope } => {
                debug!(slope, "first derivative of epoch");
            }
            SlopeStep::Segment { from, to, slope } => {
                debug!(x0 = from.x, x1 = to.x, slope, "derivative");
                if self.show_derivative {
                    out.draw(self.grid_line(from, to, StrokeKind::Derivative));
                    out.readout(Readout::Derivative(round_readout(slope)));
                }
            }
        }

        match self.integral.push(point) {
            AreaStep::Pending => {}
            AreaStep::Vertical { first, second } => {
                debug!(?first, ?second, "vertical integral pair skipped");
            }
            AreaStep::Increment { from, to, area } => {
                debug!(x0 = from.x, x1 = to.x, area, total = to.y, "integral");
                if self.show_integral {
                    out.draw(self.grid_line(from, to, StrokeKind::Integral));
                    out.readout(Readout::Integral(round_readout(to.y)));
                }
            }
        }
    }

    fn line(&self, from: PixelPos, to: PixelPos, kind: StrokeKind) -> DrawCommand {
        DrawCommand::Line {
            from,
            to,
            kind,
            width: self.scale.stroke_width,
        }
    }

    fn grid_line(&self, from: GridPoint, to: GridPoint, kind: StrokeKind) -> DrawCommand {
        let mapper = self.mapper();
        self.line(mapper.to_pixel(from), mapper.to_pixel(to), kind)
    }

    pub fn mapper(&self) -> CoordinateMapper {
        self.scale.mapper()
    }

    pub fn scale(&self) -> &ScaleState {
        &self.scale
    }

    pub fn default_scale(&self) -> f64 {
        self.default_scale
    }

    pub fn stroke_state(&self) -> StrokeState {
        self.stroke
    }

    pub fn show_derivative(&self) -> bool {
        self.show_derivative
    }

    pub fn show_integral(&self) -> bool {
        self.show_integral
    }

    pub fn running_integral(&self) -> f64 {
        self.integral.total()
    }

    pub fn prev_derivative(&self) -> Option<f64> {
        self.derivative.prev_slope()
    }

    /// Points waiting in the derivative window.
    pub fn derivative_pending(&self) -> usize {
        self.derivative.pending()
    }

    /// Points waiting in the integral window.
    pub fn integral_pending(&self) -> usize {
        self.integral.pending()
    }

    /// Samples recorded since the last erase.
    pub fn points_sampled(&self) -> u64 {
        self.points_sampled
    }
}
