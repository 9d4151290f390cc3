use quickcheck::{quickcheck, TestResult};
use scatterview::{Bounds, CanvasGeometry, CoordinateMapper, OriginMode, PixelPos, Point};

fn bounds(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Bounds {
    Bounds {
        min_x,
        max_x,
        min_y,
        max_y,
    }
}

fn mapper(b: Bounds, origin: OriginMode) -> CoordinateMapper {
    CoordinateMapper::new(b, CanvasGeometry::default(), origin)
}

#[test]
fn bounds_round_outward_to_tick_step() {
    let pts = vec![
        Point::new(-3.0, 2.0, "a"),
        Point::new(27.0, 14.0, "b"),
        Point::new(5.0, 20.0, "c"),
    ];
    let b = Bounds::from_points(&pts, 10.0).unwrap();
    assert_eq!(b, bounds(-10.0, 30.0, 0.0, 20.0));
}

#[test]
fn bounds_of_empty_dataset_is_none() {
    assert!(Bounds::from_points(&[], 10.0).is_none());
}

#[test]
fn corners_map_to_plot_area_edges() {
    let m = mapper(bounds(-10.0, 30.0, 0.0, 20.0), OriginMode::Corner);
    assert_eq!(m.to_pixel_x(-10.0), 50.0);
    assert_eq!(m.to_pixel_x(30.0), 750.0);
    // data y grows upward, pixel y downward
    assert_eq!(m.to_pixel_y(0.0), 550.0);
    assert_eq!(m.to_pixel_y(20.0), 50.0);
}

#[test]
fn data_zero_origin_crosses_at_data_origin() {
    let m = mapper(bounds(-10.0, 30.0, -10.0, 10.0), OriginMode::DataZero);
    assert_eq!(m.origin_pixel(), PixelPos::new(225.0, 300.0));
}

#[test]
fn corner_origin_is_bottom_left_of_plot_area() {
    let m = mapper(bounds(-10.0, 30.0, -10.0, 10.0), OriginMode::Corner);
    assert_eq!(m.origin_pixel(), PixelPos::new(50.0, 550.0));
    assert_eq!(m.left(), 50.0);
    assert_eq!(m.right(), 750.0);
    assert_eq!(m.top(), 50.0);
    assert_eq!(m.bottom(), 550.0);
}

#[test]
fn degenerate_axis_maps_to_centre() {
    // a single point on a tick multiple has zero-width bounds
    let b = Bounds::from_points(&[Point::new(10.0, 10.0, "a")], 10.0).unwrap();
    assert_eq!(b.x_span(), 0.0);
    let m = mapper(b, OriginMode::Corner);
    let px = m.to_pixel(&Point::new(10.0, 10.0, "a"));
    assert!(px.x.is_finite() && px.y.is_finite());
    assert_eq!(px, PixelPos::new(400.0, 300.0));
    assert_eq!(m.to_data_x(123.0), 10.0);
    assert_eq!(m.to_data_y(456.0), 10.0);
}

quickcheck! {
    fn pixel_round_trip_is_stable(x0: i16, x1: i16, y0: i16, y1: i16, tx: u8, ty: u8) -> TestResult {
        let pts = [
            Point::new(x0 as f64, y0 as f64, ""),
            Point::new(x1 as f64, y1 as f64, ""),
        ];
        let Some(b) = Bounds::from_points(&pts, 10.0) else {
            return TestResult::discard();
        };
        if b.x_span() == 0.0 || b.y_span() == 0.0 {
            return TestResult::discard();
        }
        let m = mapper(b, OriginMode::Corner);
        let x = b.min_x + b.x_span() * (tx as f64 / 255.0);
        let y = b.min_y + b.y_span() * (ty as f64 / 255.0);
        let back_x = m.to_data_x(m.to_pixel_x(x));
        let back_y = m.to_data_y(m.to_pixel_y(y));
        let eps = 1e-9 * (1.0 + b.x_span().max(b.y_span()));
        TestResult::from_bool((back_x - x).abs() < eps && (back_y - y).abs() < eps)
    }
}
