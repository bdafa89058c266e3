//! Tests for overlap module

use track_overlap::overlap::*;
use track_overlap::projection::project;
use track_overlap::GeoPoint;

fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Pairs around a fixed point at various bearings and distances.
fn sample_pairs() -> Vec<(GeoPoint, GeoPoint)> {
    let origin = GeoPoint::new(45.0, 7.0);
    let mut pairs = Vec::new();
    for step in 0..12 {
        let bearing = step as f64 * 30.0_f64.to_radians();
        for reach_deg in [0.001, 0.005, 0.01, 0.015, 0.03] {
            let other = GeoPoint::new(
                origin.latitude + reach_deg * bearing.cos(),
                origin.longitude + reach_deg * bearing.sin(),
            );
            pairs.push((origin, other));
        }
    }
    pairs
}

#[test]
fn test_kansas_fixture() {
    let p1 = GeoPoint::new(38.5655527, -98.5169269);
    let p2 = GeoPoint::new(38.5655023, -98.4984944);

    let pair = project(&p1, &p2);
    assert!(approx_eq(pair.distance, 1.6, 0.01));

    let (first, second) = find_overlaps(&p1, &p2, 1.0, 0.05).unwrap();
    assert_ne!(first, second);
    for r in [first, second] {
        let located = pair.locate(&r);
        assert!(approx_eq(located.distance_to(&pair.a), 1.0, 1e-6));
        assert!(approx_eq(located.distance_to(&pair.b), 1.0, 1e-6));
    }
}

#[test]
fn test_overlap_equidistance() {
    let rad = 1.0;
    for (p1, p2) in sample_pairs() {
        let pair = project(&p1, &p2);
        if let Some((first, second)) = find_overlaps(&p1, &p2, rad, 0.05) {
            for r in [first, second] {
                let located = pair.locate(&r);
                assert!(approx_eq(located.distance_to(&pair.a) / rad, 1.0, 1e-6));
                assert!(approx_eq(located.distance_to(&pair.b) / rad, 1.0, 1e-6));
            }
        }
    }
}

#[test]
fn test_overlap_present_exactly_when_circles_cross() {
    let rad = 1.0;
    let e = 0.05;
    for (p1, p2) in sample_pairs() {
        let dist = project(&p1, &p2).distance;
        let result = find_overlaps(&p1, &p2, rad, e);
        if dist < e || dist > 2.0 * rad {
            assert!(result.is_none());
        } else {
            assert!(result.is_some());
        }
    }
}

#[test]
fn test_identical_point_null() {
    let p = GeoPoint::new(45.0, 7.0);
    for rad in [0.01, 1.0, 10.0] {
        for e in [1e-9, 0.05, 1.0] {
            assert!(find_overlaps(&p, &p, rad, e).is_none());
        }
    }
}

#[test]
fn test_symmetry() {
    for (p1, p2) in sample_pairs() {
        let forward = find_overlaps(&p1, &p2, 1.0, 0.05);
        let backward = find_overlaps(&p2, &p1, 1.0, 0.05);
        match (forward, backward) {
            (Some((a1, a2)), Some((b1, b2))) => {
                assert!(approx_eq(a1.latitude, b2.latitude, 1e-12));
                assert!(approx_eq(a1.longitude, b2.longitude, 1e-12));
                assert!(approx_eq(a2.latitude, b1.latitude, 1e-12));
                assert!(approx_eq(a2.longitude, b1.longitude, 1e-12));
            }
            (None, None) => {}
            _ => panic!("overlap found in one direction only"),
        }
    }
}

#[test]
fn test_with_config_matches_explicit() {
    let p1 = GeoPoint::new(38.5655527, -98.5169269);
    let p2 = GeoPoint::new(38.5655023, -98.4984944);
    assert_eq!(
        find_overlaps_with_config(&p1, &p2, &OverlapConfig::default()),
        find_overlaps(&p1, &p2, 1.0, 0.05)
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let point = GeoPoint::new(51.5, -0.125);
    let json = serde_json::to_string(&point).unwrap();
    assert_eq!(json, r#"{"latitude":51.5,"longitude":-0.125}"#);
    assert_eq!(serde_json::from_str::<GeoPoint>(&json).unwrap(), point);

    let config = OverlapConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(serde_json::from_str::<OverlapConfig>(&json).unwrap(), config);

    let overlap = TrackOverlap {
        index_a: 3,
        index_b: 7,
        points: (GeoPoint::new(38.5, -98.5), GeoPoint::new(38.25, -98.75)),
    };
    let json = serde_json::to_string(&overlap).unwrap();
    assert_eq!(serde_json::from_str::<TrackOverlap>(&json).unwrap(), overlap);
}
