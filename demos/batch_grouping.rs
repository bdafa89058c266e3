//! Example of grouping many independent point sets.
//!
//! Run with: cargo run --example batch_grouping --features parallel

use std::time::Instant;
use track_overlap::{group_point_sets_parallel, GeoPoint, GroupingConfig};

fn main() {
    println!("Batch Point Grouping Example\n");

    let centers = [
        GeoPoint::new(51.5074, -0.1278), // London
        GeoPoint::new(48.8566, 2.3522),  // Paris
        GeoPoint::new(40.7128, -74.0060), // NYC
    ];

    // Each set: a cloud around each center, plus a ring ~5 km out
    let sets: Vec<Vec<GeoPoint>> = (0..50)
        .map(|set| {
            centers
                .iter()
                .flat_map(|c| {
                    (0..40).map(move |i| {
                        let angle = (i as f64 + set as f64) * 0.37;
                        let reach = if i % 4 == 0 { 0.045 } else { 0.005 };
                        GeoPoint::new(
                            c.latitude + reach * angle.sin(),
                            c.longitude + reach * angle.cos(),
                        )
                    })
                })
                .collect()
        })
        .collect();

    let total: usize = sets.iter().map(|s| s.len()).sum();
    println!("Created {} sets, {} points\n", sets.len(), total);

    let config = GroupingConfig::default();
    let start = Instant::now();
    let grouped = group_point_sets_parallel(sets, &config);
    let elapsed = start.elapsed();

    println!("Grouping completed in {:?}\n", elapsed);

    let group_counts: Vec<usize> = grouped.iter().map(|g| g.len()).collect();
    let largest = grouped
        .iter()
        .flat_map(|groups| groups.iter().map(|g| g.len()))
        .max()
        .unwrap_or(0);

    println!("Stats:");
    println!("  Groups per set: {:?}", &group_counts[..5.min(group_counts.len())]);
    println!("  Largest group: {} points", largest);
    println!("  Radius: {} km", config.radius_km);
}
