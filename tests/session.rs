use curvesketch::data::draw::{DrawCommand, Output, Readout, StrokeKind, SurfaceSize};
use curvesketch::data::mapper::{GridPoint, PixelPos};
use curvesketch::data::session::{Session, SessionOptions, StrokeState};
use curvesketch::events::{Action, PointerEvent, SketchEvent};

// 1000x700 at scale 20 snaps the axes to (500, 360).
fn session() -> Session {
    let mut s = Session::new(SurfaceSize::new(1000.0, 700.0));
    s.start();
    s
}

fn px(gx: f64, gy: f64) -> (f64, f64) {
    (500.0 + 20.0 * gx, 360.0 - 20.0 * gy)
}

fn down(s: &mut Session, gx: f64, gy: f64) -> Output {
    let (x, y) = px(gx, gy);
    s.handle(PointerEvent::down(x, y).into())
}

fn move_to(s: &mut Session, gx: f64, gy: f64) -> Output {
    let (x, y) = px(gx, gy);
    s.handle(PointerEvent::moved(x, y).into())
}

/// Down at the first point, move through the rest.
fn stroke(s: &mut Session, pts: &[(f64, f64)]) -> Vec<Output> {
    let mut outs = Vec::new();
    if let Some((&(x, y), rest)) = pts.split_first() {
        outs.push(down(s, x, y));
        for &(x, y) in rest {
            outs.push(move_to(s, x, y));
        }
    }
    outs
}

#[test]
fn start_clears_draws_grid_and_zeroes_readouts() {
    let mut s = Session::new(SurfaceSize::new(1000.0, 700.0));
    let out = s.start();
    assert_eq!(out.commands[0], DrawCommand::Clear);
    assert_eq!(out.lines_of(StrokeKind::Axis).count(), 2);
    assert_eq!(out.lines_of(StrokeKind::Grid).count(), 50 + 35);
    assert_eq!(out.last_derivative(), Some(0.0));
    assert_eq!(out.last_integral(), Some(0.0));
    assert_eq!(s.scale().axis_origin_x, 500.0);
    assert_eq!(s.scale().axis_origin_y, 360.0);
}

#[test]
fn pointer_down_draws_dot_and_records_one_sample() {
    let mut s = session();
    let out = down(&mut s, 1.0, 1.0);
    assert_eq!(s.stroke_state(), StrokeState::Active);
    assert_eq!(
        out.commands,
        vec![DrawCommand::FillRect {
            min: PixelPos::new(520.0, 340.0),
            width: 2.0,
            height: 2.0,
            kind: StrokeKind::Pen,
        }]
    );
    assert_eq!(s.points_sampled(), 1);
    assert_eq!(s.derivative_pending(), 1);
    assert_eq!(s.integral_pending(), 1);
    assert!(out
        .readouts
        .contains(&Readout::Cursor { x: 1.0, y: 1.0 }));
}

#[test]
fn move_draws_pen_segment_from_previous_position() {
    let mut s = session();
    down(&mut s, 0.0, 0.0);
    let out = move_to(&mut s, 1.0, 2.0);
    let pen: Vec<_> = out.lines_of(StrokeKind::Pen).collect();
    assert_eq!(
        pen,
        vec![(PixelPos::new(500.0, 360.0), PixelPos::new(520.0, 320.0))]
    );
    let next = move_to(&mut s, 3.0, 2.0);
    let pen: Vec<_> = next.lines_of(StrokeKind::Pen).collect();
    assert_eq!(
        pen,
        vec![(PixelPos::new(520.0, 320.0), PixelPos::new(560.0, 320.0))]
    );
    // Pen segment comes first in the step.
    assert!(matches!(
        next.commands[0],
        DrawCommand::Line {
            kind: StrokeKind::Pen,
            ..
        }
    ));
}

#[test]
fn integral_example_sequence() {
    let mut s = session();
    let outs = stroke(&mut s, &[(0.0, 0.0), (1.0, 2.0), (3.0, 2.0)]);

    assert_eq!(outs[0].lines_of(StrokeKind::Integral).count(), 0);

    let first: Vec<_> = outs[1].lines_of(StrokeKind::Integral).collect();
    assert_eq!(
        first,
        vec![(PixelPos::new(500.0, 360.0), PixelPos::new(520.0, 360.0))]
    );
    assert_eq!(outs[1].last_integral(), Some(0.0));

    let second: Vec<_> = outs[2].lines_of(StrokeKind::Integral).collect();
    assert_eq!(
        second,
        vec![(PixelPos::new(520.0, 360.0), PixelPos::new(560.0, 280.0))]
    );
    assert_eq!(outs[2].last_integral(), Some(4.0));
    assert_eq!(s.running_integral(), 4.0);
}

#[test]
fn derivative_segment_drawn_from_second_slope_on() {
    let mut s = session();
    let pts: Vec<(f64, f64)> = (0..11).map(|i| (i as f64, 2.0 * i as f64)).collect();
    let outs = stroke(&mut s, &pts);

    for out in &outs[..10] {
        assert_eq!(out.lines_of(StrokeKind::Derivative).count(), 0);
        assert_eq!(out.last_derivative(), None);
    }
    assert_eq!(s.prev_derivative(), Some(2.0));

    let segs: Vec<_> = outs[10].lines_of(StrokeKind::Derivative).collect();
    let mapper = s.mapper();
    assert_eq!(
        segs,
        vec![(
            mapper.to_pixel(GridPoint::new(5.0, 2.0)),
            mapper.to_pixel(GridPoint::new(9.0, 2.0))
        )]
    );
    assert_eq!(outs[10].last_derivative(), Some(2.0));
}

#[test]
fn release_and_leave_stop_capture_but_keep_state() {
    let mut s = session();
    stroke(&mut s, &[(0.0, 1.0), (1.0, 1.0), (2.0, 1.0)]);
    let total = s.running_integral();
    let (x, y) = px(2.0, 1.0);
    s.handle(PointerEvent::up(x, y).into());
    assert_eq!(s.stroke_state(), StrokeState::Idle);

    let idle_move = move_to(&mut s, 5.0, 5.0);
    assert!(idle_move.commands.is_empty());
    assert_eq!(idle_move.readouts, vec![Readout::Cursor { x: 5.0, y: 5.0 }]);
    assert_eq!(s.points_sampled(), 3);

    // A second stroke continues the same epoch.
    down(&mut s, 4.0, 1.0);
    assert_eq!(s.points_sampled(), 4);
    assert_eq!(s.running_integral(), total + 1.0 * (4.0 - 2.0));
    s.handle(PointerEvent::leave(0.0, 0.0).into());
    assert_eq!(s.stroke_state(), StrokeState::Idle);
    assert_eq!(s.derivative_pending(), 4);
}

#[test]
fn hiding_estimators_suppresses_drawing_only() {
    let pts: Vec<(f64, f64)> = (0..16)
        .map(|i| {
            let x = i as f64 * 0.5;
            (x, (x * 1.3).sin() * 3.0)
        })
        .collect();

    let mut always = session();
    let mut toggled = session();
    down(&mut always, pts[0].0, pts[0].1);
    down(&mut toggled, pts[0].0, pts[0].1);

    for (i, &(x, y)) in pts.iter().enumerate().skip(1) {
        if i == 3 {
            toggled.handle(Action::ToggleIntegral.into());
            toggled.handle(Action::ToggleDerivative.into());
        }
        if i == 12 {
            toggled.handle(SketchEvent::SetIntegralVisible(true));
            toggled.handle(SketchEvent::SetDerivativeVisible(true));
        }
        move_to(&mut always, x, y);
        let out = move_to(&mut toggled, x, y);
        if (3..12).contains(&i) {
            assert_eq!(out.lines_of(StrokeKind::Integral).count(), 0);
            assert_eq!(out.lines_of(StrokeKind::Derivative).count(), 0);
            assert_eq!(out.last_integral(), None);
            assert_eq!(out.last_derivative(), None);
            assert_eq!(out.lines_of(StrokeKind::Pen).count(), 1);
        }
        assert_eq!(always.running_integral(), toggled.running_integral());
        assert_eq!(always.prev_derivative(), toggled.prev_derivative());
        assert_eq!(always.derivative_pending(), toggled.derivative_pending());
    }
    assert!(toggled.show_integral());
    assert!(toggled.show_derivative());
}

#[test]
fn clear_resets_everything_but_scale() {
    let mut s = session();
    s.zoom(30.0);
    let pts: Vec<(f64, f64)> = (0..9).map(|i| (i as f64, 1.0 + i as f64)).collect();
    stroke(&mut s, &pts);
    assert!(s.running_integral() != 0.0);
    assert!(s.prev_derivative().is_some());

    let out = s.handle(Action::Clear.into());
    assert_eq!(out.commands[0], DrawCommand::Clear);
    assert_eq!(out.last_derivative(), Some(0.0));
    assert_eq!(out.last_integral(), Some(0.0));
    assert_eq!(s.running_integral(), 0.0);
    assert_eq!(s.derivative_pending(), 0);
    assert_eq!(s.integral_pending(), 0);
    assert_eq!(s.prev_derivative(), None);
    assert_eq!(s.points_sampled(), 0);
    assert_eq!(s.scale().pixels_per_unit, 30.0);
}

#[test]
fn zoom_clamps_and_discards_epoch() {
    let mut s = session();
    let pts: Vec<(f64, f64)> = (0..8).map(|i| (i as f64, 1.0)).collect();
    stroke(&mut s, &pts);
    assert_eq!(s.prev_derivative(), Some(0.0));
    assert_eq!(s.derivative_pending(), 3);

    let out = s.zoom(5.0);
    assert_eq!(s.scale().pixels_per_unit, 8.0);
    assert_eq!(s.scale().stroke_width, 1);
    assert_eq!(s.running_integral(), 0.0);
    assert_eq!(s.integral_pending(), 0);
    assert_eq!(s.prev_derivative(), None);
    assert_eq!(s.derivative_pending(), 0);
    assert_eq!(out.commands[0], DrawCommand::Clear);
    assert!(out.readouts.contains(&Readout::Scale {
        pixels_per_unit: 8.0,
        stroke_width: 1,
    }));
    for cmd in &out.commands[1..] {
        assert!(matches!(cmd, DrawCommand::Line { width: 1, .. }));
    }

    s.zoom(1000.0);
    assert_eq!(s.scale().pixels_per_unit, 70.0);
    assert_eq!(s.scale().stroke_width, 4);
}

#[test]
fn zoom_resnaps_axis_origin() {
    let mut s = session();
    s.zoom(40.0);
    // Lines at multiples of 40: last below 540 is 520; last below 390 is 360.
    assert_eq!(s.scale().axis_origin_x, 520.0);
    assert_eq!(s.scale().axis_origin_y, 360.0);
    let origin = s.mapper().to_pixel(GridPoint::new(0.0, 0.0));
    assert_eq!(origin, PixelPos::new(520.0, 360.0));
}

#[test]
fn wheel_zoom_is_exponential() {
    let mut s = session();
    s.handle(SketchEvent::Wheel { delta: 1000.0 });
    assert!((s.scale().pixels_per_unit - 20.0 * std::f64::consts::E).abs() < 1e-9);

    s.handle(SketchEvent::Wheel { delta: -1000.0 });
    assert!((s.scale().pixels_per_unit - 20.0).abs() < 1e-9);

    s.handle(SketchEvent::Wheel { delta: -5000.0 });
    assert_eq!(s.scale().pixels_per_unit, 8.0);
}

#[test]
fn reset_scale_only_acts_when_scale_differs() {
    let mut s = session();
    assert!(s.handle(Action::ResetScale.into()).is_empty());

    s.zoom(12.0);
    stroke(&mut s, &[(0.0, 1.0), (1.0, 1.0)]);
    let out = s.handle(Action::ResetScale.into());
    assert_eq!(out.commands[0], DrawCommand::Clear);
    assert_eq!(s.scale().pixels_per_unit, 20.0);
    assert_eq!(s.running_integral(), 0.0);
}

#[test]
fn zoom_keeps_capture_state() {
    let mut s = session();
    down(&mut s, 0.0, 0.0);
    s.zoom(30.0);
    assert_eq!(s.stroke_state(), StrokeState::Active);
    assert_eq!(s.points_sampled(), 0);
    move_to(&mut s, 1.0, 1.0);
    assert_eq!(s.points_sampled(), 1);
}

#[test]
fn options_set_initial_toggles_and_default_scale() {
    let opts = SessionOptions {
        default_scale: 100.0,
        show_derivative: false,
        show_integral: true,
    };
    let mut s = Session::with_options(SurfaceSize::new(400.0, 300.0), opts);
    assert_eq!(s.default_scale(), 70.0);
    assert_eq!(s.scale().pixels_per_unit, 70.0);
    assert!(!s.show_derivative());
    assert!(s.handle(Action::ResetScale.into()).is_empty());
}

#[test]
fn cursor_readout_is_truncated() {
    let mut s = session();
    // Grid x = 1/3 of a unit: 0.3333333...
    let out = s.handle(PointerEvent::moved(500.0 + 20.0 / 3.0, 360.0).into());
    match out.readouts[0] {
        Readout::Cursor { x, y } => {
            assert!((x - 0.3333333).abs() < 1e-12);
            assert_eq!(y, 0.0);
        }
        other => panic!("unexpected readout {other:?}"),
    }
}
