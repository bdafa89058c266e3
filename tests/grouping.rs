//! Tests for grouping module

use track_overlap::geo_utils::haversine_distance_km;
use track_overlap::grouping::*;
use track_overlap::GeoPoint;

/// A deterministic scatter of distinct points, a few km across.
fn scatter(count: usize) -> Vec<GeoPoint> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            GeoPoint::new(
                38.56 + 0.03 * (t * 0.71).sin() + 0.0001 * t,
                -98.51 + 0.04 * (t * 1.37).cos(),
            )
        })
        .collect()
}

fn count_of(points: &[GeoPoint], target: &GeoPoint) -> usize {
    points.iter().filter(|p| *p == target).count()
}

#[test]
fn test_partition_property() {
    for radius in [0.5, 2.05, 5.0] {
        let input = scatter(120);
        let groups: Vec<PointGroup> = group_points(input.clone(), radius).collect();
        let output: Vec<GeoPoint> = groups.iter().flat_map(|g| g.points().to_vec()).collect();

        assert_eq!(output.len(), input.len());
        for p in &input {
            assert_eq!(count_of(&output, p), 1);
        }
    }
}

#[test]
fn test_members_close_to_seed() {
    let radius = 2.05;
    let groups: Vec<PointGroup> = group_points(scatter(120), radius).collect();

    for group in &groups {
        let seed = group.seed();
        for member in &group.points()[1..] {
            assert!(haversine_distance_km(seed, member) < radius);
        }
    }
}

#[test]
fn test_seeds_are_mutually_far_in_order() {
    // A later seed was not close to any earlier seed, or it would have been taken.
    let radius = 2.05;
    let groups: Vec<PointGroup> = group_points(scatter(120), radius).collect();

    for (i, later) in groups.iter().enumerate() {
        for earlier in &groups[..i] {
            assert!(haversine_distance_km(earlier.seed(), later.seed()) >= radius);
        }
    }
}

#[test]
fn test_single_point_one_group() {
    let p = GeoPoint::new(38.5655527, -98.5169269);
    let groups: Vec<PointGroup> = group_points(vec![p], 2.05).collect();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].points(), &[p]);
}

#[test]
fn test_two_points_3km_apart() {
    // 0.027 degrees of latitude is ~3 km
    let p1 = GeoPoint::new(38.5600, -98.5100);
    let p2 = GeoPoint::new(38.5870, -98.5100);
    assert!((haversine_distance_km(&p1, &p2) - 3.0).abs() < 0.01);

    let groups: Vec<PointGroup> = group_points(vec![p1, p2], 2.05).collect();
    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|g| g.len() == 1));
}

#[test]
fn test_identical_points_share_group() {
    let p = GeoPoint::new(51.5074, -0.1278);
    let groups: Vec<PointGroup> = group_points(vec![p, p, p], 0.05).collect();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 3);
}

#[test]
fn test_larger_radius_never_more_groups_for_clusters() {
    // Three tight clusters 20 km apart
    let mut points = Vec::new();
    for c in 0..3 {
        for i in 0..5 {
            points.push(GeoPoint::new(51.0 + c as f64 * 0.2 + i as f64 * 0.001, 0.0));
        }
    }

    let groups: Vec<PointGroup> = group_points(points, 2.05).collect();
    assert_eq!(groups.len(), 3);
    assert!(groups.iter().all(|g| g.len() == 5));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_shapes() {
    use track_overlap::DistanceModel;

    let config = GroupingConfig {
        radius_km: 2.05,
        distance_model: DistanceModel::Planar,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"radius_km":2.05,"distance_model":"Planar"}"#);
    assert_eq!(serde_json::from_str::<GroupingConfig>(&json).unwrap(), config);

    let a = GeoPoint::new(51.5, 0.5);
    let b = GeoPoint::new(51.5, 0.5);
    let group = group_points(vec![a, b], 2.05).next().unwrap();

    let value = serde_json::to_value(&group).unwrap();
    assert_eq!(value["points"].as_array().unwrap().len(), 2);
    assert_eq!(value["points"][0]["latitude"], 51.5);
    assert_eq!(value["points"][0]["longitude"], 0.5);

    let summary = group.summary();
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["seed"]["latitude"], 51.5);
    assert_eq!(value["center"]["longitude"], 0.5);
    assert_eq!(serde_json::from_value::<GroupSummary>(value).unwrap(), summary);
}
