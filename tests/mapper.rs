use curvesketch::data::mapper::*;

const EPS: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn to_grid_inverts_the_y_axis() {
    let m = CoordinateMapper::new(20.0, 500.0, 360.0);
    let above = m.to_grid(PixelPos::new(500.0, 320.0));
    assert!(close(above.x, 0.0));
    assert!(close(above.y, 2.0));
    let right_below = m.to_grid(PixelPos::new(540.0, 380.0));
    assert!(close(right_below.x, 2.0));
    assert!(close(right_below.y, -1.0));
}

#[test]
fn to_pixel_matches_formula() {
    let m = CoordinateMapper::new(8.0, 100.0, 50.0);
    let p = m.to_pixel(GridPoint::new(1.5, -2.0));
    assert!(close(p.x, 112.0));
    assert!(close(p.y, 66.0));
}

#[test]
fn pixel_grid_round_trip_holds_for_all_scales() {
    let scales = [MIN_SCALE, 13.37, DEFAULT_SCALE, 54.3656365691809, MAX_SCALE];
    let origins = [(0.0, 0.0), (500.0, 360.0), (512.25, 347.5)];
    for &scale in &scales {
        for &(ox, oy) in &origins {
            let state = ScaleState::new(scale, ox, oy);
            let m = state.mapper();
            for px in [-250.0, 0.0, 1.0, 333.3, 999.9] {
                for py in [-10.0, 0.0, 0.5, 360.0, 699.0] {
                    let back = m.to_pixel(m.to_grid(PixelPos::new(px, py)));
                    assert!(close(back.x, px), "x {px} -> {}", back.x);
                    assert!(close(back.y, py), "y {py} -> {}", back.y);
                }
            }
        }
    }
}

#[test]
fn scale_is_clamped_to_bounds() {
    assert_eq!(ScaleState::clamp_scale(5.0), 8.0);
    assert_eq!(ScaleState::clamp_scale(1000.0), 70.0);
    assert_eq!(ScaleState::clamp_scale(33.0), 33.0);
    assert_eq!(ScaleState::clamp_scale(f64::NAN), MIN_SCALE);
    assert_eq!(ScaleState::new(2.0, 0.0, 0.0).pixels_per_unit, 8.0);
}

#[test]
fn stroke_width_switches_above_fifteen() {
    assert_eq!(ScaleState::stroke_width_for(15.0), 1);
    assert_eq!(ScaleState::stroke_width_for(16.0), 4);
    assert_eq!(ScaleState::stroke_width_for(15.0001), 4);
    assert_eq!(ScaleState::new(DEFAULT_SCALE, 0.0, 0.0).stroke_width, 4);
    assert_eq!(ScaleState::new(MIN_SCALE, 0.0, 0.0).stroke_width, 1);
}
