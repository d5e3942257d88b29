use orthoview_core::{table_rows, Layout, Relation, POINTS};

#[test]
fn on_views_have_zero_offset_and_on_xy_text() {
    let layout = Layout::default();
    for point in &POINTS {
        for view in [&point.front, &point.top] {
            if view.relation == Relation::On {
                assert_eq!(layout.offset(view), 0.0, "point {}", point.id);
                assert_eq!(view.to_string(), "On XY", "point {}", point.id);
            }
        }
    }
}

#[test]
fn offsets_scale_by_four_pixels_per_millimetre() {
    let layout = Layout::default();
    for point in &POINTS {
        for view in [&point.front, &point.top] {
            let expected = match view.relation {
                Relation::Above => -4.0 * view.distance,
                Relation::Below => 4.0 * view.distance,
                Relation::On => 0.0,
            };
            assert_eq!(layout.offset(view), expected, "point {}", point.id);
        }
    }
}

#[test]
fn coincidence_matches_row_distance() {
    let layout = Layout::default();
    for projected in layout.project_all(&POINTS) {
        let expected = (projected.front.y - projected.top.y).abs() < 0.1;
        assert_eq!(projected.coincident, expected, "point {}", projected.point.id);
    }

    let projected = layout.project_all(&POINTS);
    assert!(!projected[0].coincident, "A must not be coincident");
    assert!(projected[8].coincident, "I must be coincident");
}

#[test]
fn columns_strictly_increase() {
    let projected = Layout::default().project_all(&POINTS);
    for (i, p) in projected.iter().enumerate() {
        assert_eq!(p.x(), 90.0 + 85.0 * i as f32);
        assert_eq!(p.front.x, p.top.x);
    }
    assert!(projected.windows(2).all(|w| w[0].x() < w[1].x()));
}

#[test]
fn table_has_row_per_point_in_order() {
    let rows = table_rows(&POINTS);
    assert_eq!(rows.len(), POINTS.len());

    let a = &rows[0];
    assert_eq!(a.front, "25 mm above XY");
    assert_eq!(a.top, "45 mm below XY");

    let g = &rows[6];
    assert_eq!(g.front, "On XY");
    assert_eq!(g.top, "35 mm below XY");
}

#[test]
fn projection_is_deterministic() {
    let layout = Layout::default();
    assert_eq!(layout.project_all(&POINTS), layout.project_all(&POINTS));
}
