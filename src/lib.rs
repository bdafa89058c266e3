//! # Track Overlap
//!
//! Geometric analysis of GPS points sampled from movement tracks.
//!
//! This library provides:
//! - Proximity-circle intersection: where could two tracks have met?
//! - Seed-relative point grouping: which points are the same place?
//! - A great-circle proximity test and a local planar projection
//!
//! ## Features
//!
//! - **`parallel`** - Group independent point sets in parallel with rayon
//! - **`serde`** - Derive `Serialize`/`Deserialize` on the public data types
//! - **`cli`** - Build the `track-overlap` command line tool
//! - **`full`** - Enable all features
//!
//! ## Quick Start
//!
//! ```rust
//! use track_overlap::{GeoPoint, find_overlaps, group_points};
//!
//! let p1 = GeoPoint::new(38.5655527, -98.5169269);
//! let p2 = GeoPoint::new(38.5655023, -98.4984944);
//!
//! // ~1.6 km apart, so two 1 km circles cross twice
//! let (a, b) = find_overlaps(&p1, &p2, 1.0, 0.05).unwrap();
//! assert_ne!(a, b);
//!
//! // Both points fall inside one 2.05 km group
//! let groups: Vec<_> = group_points(vec![p1, p2], 2.05).collect();
//! assert_eq!(groups.len(), 1);
//! ```
//!
//! ## Distance models
//!
//! Two distance models coexist and are deliberately kept apart:
//! [`points_close`] and the grouper use great-circle distance, while
//! [`find_overlaps`] works in a planar frame anchored at the pair's mean
//! latitude. See [`geo_utils::DistanceModel`].

pub mod error;
pub mod geo_utils;
pub mod grouping;
#[cfg(feature = "gpx")]
pub mod gpx_input;
pub mod overlap;
pub mod projection;

pub use error::{ConfigError, Result};
pub use geo_utils::{haversine_distance_km, points_close, points_close_with, DistanceModel};
pub use grouping::{
    group_points, group_points_with_config, GroupSummary, GroupingConfig, PointGroup, PointGroups,
};
pub use overlap::{
    find_overlaps, find_overlaps_with_config, find_track_overlaps, OverlapConfig, TrackOverlap,
};
pub use projection::{project, unproject, PlanarPair, PlanarPoint};

#[cfg(feature = "parallel")]
pub use grouping::group_point_sets_parallel;

use log::debug;

// ============================================================================
// Constants
// ============================================================================

/// Mean Earth radius in kilometres, shared by the great-circle and planar models.
///
/// Matches the radius the `geo` crate uses for its haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Default threshold for [`points_close`] (50 m).
pub const DEFAULT_PROXIMITY_KM: f64 = 0.05;

/// Default grouping radius for [`group_points`].
///
/// Historically described as "2 km"; the literal value is kept as-is.
pub const DEFAULT_GROUPING_RADIUS_KM: f64 = 2.05;

/// Default proximity circle radius for [`find_overlaps`].
pub const DEFAULT_OVERLAP_RADIUS_KM: f64 = 1.0;

/// Default distance below which two points count as identical in [`find_overlaps`].
pub const DEFAULT_IDENTICAL_EPSILON_KM: f64 = 0.05;

// ============================================================================
// Core Types
// ============================================================================

/// A GPS coordinate with latitude and longitude in degrees.
///
/// # Example
/// ```
/// use track_overlap::GeoPoint;
/// let point = GeoPoint::new(38.5655527, -98.5169269); // Kansas
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new GPS point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

impl From<[f64; 2]> for GeoPoint {
    /// Build from a `[lat, lng]` pair, the layout activity streams use.
    fn from(latlng: [f64; 2]) -> Self {
        Self::new(latlng[0], latlng[1])
    }
}

/// Convert a raw `[lat, lng]` stream into points the analysis can use.
///
/// Activity streams contain gaps (`None`) where the device had no fix, and
/// occasionally garbage coordinates. Both are dropped here, because every
/// function in this crate assumes well-formed input.
///
/// # Example
/// ```
/// use track_overlap::points_from_latlngs;
///
/// let raw = vec![Some([51.5074, -0.1278]), None, Some([f64::NAN, 0.0])];
/// let points = points_from_latlngs(&raw);
/// assert_eq!(points.len(), 1);
/// ```
pub fn points_from_latlngs(latlngs: &[Option<[f64; 2]>]) -> Vec<GeoPoint> {
    let points: Vec<GeoPoint> = latlngs
        .iter()
        .flatten()
        .map(|&latlng| GeoPoint::from(latlng))
        .filter(GeoPoint::is_valid)
        .collect();

    let dropped = latlngs.len() - points.len();
    if dropped > 0 {
        debug!(
            "[points_from_latlngs] Dropped {} of {} samples (missing or invalid)",
            dropped,
            latlngs.len()
        );
    }

    points
}

// ============================================================================
// Tests
// ============================================================================
