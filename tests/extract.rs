use trackviz_rs::pipeline::extract::{round5, semicircles_to_degrees};
use trackviz_rs::pipeline::filter::display_points;
use trackviz_rs::types::activity::TrackPoint;

#[test]
fn semicircle_conversion_matches_formula() {
    for s in [0, 1, -1, 100_000_000, -100_000_000, 2_147_483_647, -2_147_483_648] {
        let expected = (s as f64) * 180.0 / 2_f64.powi(31);
        assert!((semicircles_to_degrees(s) - expected).abs() < 1e-12);
    }
}

#[test]
fn rounded_conversion_stays_within_half_unit_of_last_place() {
    for s in [1, 12_345_678, 100_000_000, 716_666_667, 2_147_483_647] {
        let exact = semicircles_to_degrees(s);
        let rounded = round5(exact);
        assert!((rounded - exact).abs() <= 0.000_005);
    }
}

#[test]
fn round5_keeps_five_decimal_places() {
    assert_eq!(round5(8.381903171539307), 8.38190);
    assert_eq!(round5(-8.381907), -8.38191);
    assert_eq!(round5(10.0), 10.0);
}

#[test]
fn adjacent_semicircle_points_collapse_in_display_list() {
    // One semicircle unit is ~8.4e-8 degrees, far below the display
    // threshold, so the rounded coordinates come out identical.
    let first = TrackPoint {
        lat: round5(semicircles_to_degrees(100_000_000)),
        lon: round5(semicircles_to_degrees(200_000_000)),
        time: None,
    };
    let second = TrackPoint {
        lat: round5(semicircles_to_degrees(100_000_001)),
        lon: round5(semicircles_to_degrees(200_000_001)),
        time: None,
    };

    let full = vec![first.clone(), second];
    assert_eq!(full.len(), 2);

    let display = display_points(&full);
    assert_eq!(display, vec![first]);
}
