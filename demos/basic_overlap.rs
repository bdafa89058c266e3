//! Basic example of finding where two proximity circles cross.
//!
//! Run with: cargo run --example basic_overlap

use track_overlap::{
    find_overlaps, haversine_distance_km, points_close, GeoPoint, DEFAULT_PROXIMITY_KM,
};

fn main() {
    // Two samples ~1.6 km apart (Kansas)
    let p1 = GeoPoint::new(38.5655527, -98.5169269);
    let p2 = GeoPoint::new(38.5655023, -98.4984944);

    println!("Proximity Circle Overlap Example\n");
    println!("p1: ({:.7}, {:.7})", p1.latitude, p1.longitude);
    println!("p2: ({:.7}, {:.7})", p2.latitude, p2.longitude);
    println!("Great-circle distance: {:.3} km\n", haversine_distance_km(&p1, &p2));

    for radius in [0.5, 0.8, 1.0, 2.0] {
        println!("Radius {:.1} km:", radius);
        match find_overlaps(&p1, &p2, radius, 0.05) {
            Some((first, second)) => {
                println!("   Crossing 1: ({:.7}, {:.7})", first.latitude, first.longitude);
                println!("   Crossing 2: ({:.7}, {:.7})", second.latitude, second.longitude);
                println!(
                    "   Distances: {:.3} / {:.3} km\n",
                    haversine_distance_km(&first, &p1),
                    haversine_distance_km(&first, &p2)
                );
            }
            None => println!("   Circles do not cross\n"),
        }
    }

    // Identical points never overlap
    println!("p1 vs p1: {:?}", find_overlaps(&p1, &p1, 1.0, 0.05));
    println!(
        "p1 close to p2 at {} km? {}",
        DEFAULT_PROXIMITY_KM,
        points_close(&p1, &p2, DEFAULT_PROXIMITY_KM)
    );
}
