use scatterview::{pick, Bounds, CanvasGeometry, CoordinateMapper, OriginMode, PixelPos, Point};

fn setup() -> (Vec<Point>, CoordinateMapper) {
    let pts = vec![
        Point::new(0.0, 0.0, "a"),
        Point::new(10.0, 10.0, "b"),
        Point::new(-10.0, 10.0, "c"),
    ];
    let b = Bounds::from_points(&pts, 10.0).unwrap();
    let m = CoordinateMapper::new(b, CanvasGeometry::default(), OriginMode::DataZero);
    (pts, m)
}

#[test]
fn hit_within_tolerance() {
    let (pts, m) = setup();
    let at = m.to_pixel(&pts[1]);
    assert_eq!(pick(PixelPos::new(at.x + 9.0, at.y - 9.0), &pts, &m, 10.0), Some(1));
}

#[test]
fn tolerance_boundary_is_exclusive() {
    let (pts, m) = setup();
    let at = m.to_pixel(&pts[1]);
    assert_eq!(pick(PixelPos::new(at.x + 10.0, at.y), &pts, &m, 10.0), None);
}

#[test]
fn window_is_square_not_circular() {
    let (pts, m) = setup();
    let at = m.to_pixel(&pts[2]);
    // distance ~12.7 px, but within 10 px on each axis
    assert_eq!(pick(PixelPos::new(at.x + 9.0, at.y + 9.0), &pts, &m, 10.0), Some(2));
}

#[test]
fn miss_returns_none() {
    let (pts, m) = setup();
    assert_eq!(pick(PixelPos::new(0.0, 0.0), &pts, &m, 10.0), None);
    assert_eq!(pick(PixelPos::new(400.0, 300.0), &[], &m, 10.0), None);
}

#[test]
fn first_match_in_dataset_order_wins() {
    let pts = vec![
        Point::new(0.0, 0.0, "far"),
        Point::new(1.0, 0.0, "near"),
        Point::new(100.0, 100.0, "x"),
    ];
    let b = Bounds::from_points(&pts, 10.0).unwrap();
    let m = CoordinateMapper::new(b, CanvasGeometry::default(), OriginMode::Corner);
    let near = m.to_pixel(&pts[1]);
    // both 0 and 1 are inside the window; 1 is closer but 0 comes first
    assert_eq!(pick(near, &pts, &m, 10.0), Some(0));
}
