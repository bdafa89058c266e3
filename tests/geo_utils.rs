//! Tests for geo_utils module

use track_overlap::geo_utils::*;
use track_overlap::{GeoPoint, DEFAULT_PROXIMITY_KM};

#[test]
fn test_points_close_symmetric() {
    let points = [
        GeoPoint::new(51.5074, -0.1278),
        GeoPoint::new(51.5076, -0.1279),
        GeoPoint::new(51.5100, -0.1300),
        GeoPoint::new(48.8566, 2.3522),
    ];
    for p1 in &points {
        for p2 in &points {
            for d in [0.01, DEFAULT_PROXIMITY_KM, 2.05, 500.0] {
                assert_eq!(points_close(p1, p2, d), points_close(p2, p1, d));
            }
        }
    }
}

#[test]
fn test_point_close_to_itself() {
    let p = GeoPoint::new(-33.8688, 151.2093);
    for d in [1e-6, 0.05, 2.05] {
        assert!(points_close(&p, &p, d));
    }
}

#[test]
fn test_default_proximity() {
    let a = GeoPoint::new(51.5074, -0.1278);
    let near = GeoPoint::new(51.5077, -0.1278); // ~33 m
    let far = GeoPoint::new(51.5084, -0.1278); // ~111 m
    assert!(points_close(&a, &near, DEFAULT_PROXIMITY_KM));
    assert!(!points_close(&a, &far, DEFAULT_PROXIMITY_KM));
}

#[test]
fn test_distance_models_differ_but_agree_closely() {
    let a = GeoPoint::new(60.0, 10.0);
    let b = GeoPoint::new(60.01, 10.03);
    let gc = DistanceModel::GreatCircle.distance_km(&a, &b);
    let planar = DistanceModel::Planar.distance_km(&a, &b);
    assert!((gc - planar).abs() < 0.001);
    assert_eq!(DistanceModel::default(), DistanceModel::GreatCircle);
}
