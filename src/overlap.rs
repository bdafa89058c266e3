//! # Proximity Circle Overlaps
//!
//! Finds where two tracks could have met: each GPS point is the center of a
//! proximity circle, and two circles that cross give two candidate meeting
//! locations.
//!
//! ## Algorithm
//! 1. Project both points into a planar frame anchored at their mean latitude
//! 2. Coincident points (closer than `e`) have no distinct overlap
//! 3. Circles further apart than twice the radius do not cross
//! 4. Otherwise offset the midpoint by `h = sqrt(rad² - (dist/2)²)` along the
//!    perpendicular, in both directions
//! 5. Map both crossings back to GPS coordinates
//!
//! Tangent circles (`dist == 2·rad`) are a valid result: both crossings are
//! the midpoint.
//!
//! For whole tracks, [`find_track_overlaps`] uses an R-tree to skip point
//! pairs whose circles cannot reach each other.

use log::debug;
use rstar::{RTree, RTreeObject, AABB};

use crate::error::{ensure_positive_km, Result};
use crate::geo_utils::km_to_degrees;
use crate::projection::{project, unproject, PlanarPoint};
use crate::{GeoPoint, DEFAULT_IDENTICAL_EPSILON_KM, DEFAULT_OVERLAP_RADIUS_KM};

/// Widens the R-tree search box so the degree approximation never drops a pair
/// the planar check would accept.
const SEARCH_PADDING: f64 = 1.1;

/// Configuration for overlap detection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlapConfig {
    /// Radius of each proximity circle in kilometres.
    /// Default: 1.0 km
    pub radius_km: f64,

    /// Planar distance below which two points are treated as the same point.
    /// Default: 0.05 km
    pub identical_epsilon_km: f64,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            radius_km: DEFAULT_OVERLAP_RADIUS_KM,
            identical_epsilon_km: DEFAULT_IDENTICAL_EPSILON_KM,
        }
    }
}

impl OverlapConfig {
    /// Check that both distances are positive and finite.
    pub fn validate(&self) -> Result<()> {
        ensure_positive_km("radius_km", self.radius_km)?;
        ensure_positive_km("identical_epsilon_km", self.identical_epsilon_km)
    }
}

/// An overlap between one point of track A and one point of track B.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackOverlap {
    /// Index of the point in track A
    pub index_a: usize,
    /// Index of the point in track B
    pub index_b: usize,
    /// The two crossings of the proximity circles
    pub points: (GeoPoint, GeoPoint),
}

// =============================================================================
// Pairwise Overlap
// =============================================================================

/// Find the two locations where the proximity circles of `p1` and `p2` cross.
///
/// `rad` is the circle radius and `e` the identical-point tolerance, both in
/// kilometres. Returns `None` when the points are closer than `e` or when the
/// circles do not meet.
///
/// Swapping `p1` and `p2` yields the same two locations in reversed order.
///
/// # Example
///
/// ```rust
/// use track_overlap::{GeoPoint, find_overlaps};
///
/// let p1 = GeoPoint::new(38.5655527, -98.5169269);
/// let p2 = GeoPoint::new(38.5655023, -98.4984944);
///
/// let (north, south) = find_overlaps(&p1, &p2, 1.0, 0.05).unwrap();
/// assert!(north.latitude > south.latitude);
///
/// // Same point: nothing to intersect
/// assert!(find_overlaps(&p1, &p1, 1.0, 0.05).is_none());
/// ```
pub fn find_overlaps(
    p1: &GeoPoint,
    p2: &GeoPoint,
    rad: f64,
    e: f64,
) -> Option<(GeoPoint, GeoPoint)> {
    let pair = project(p1, p2);

    // Must run before anything divides by the distance
    if pair.distance < e || pair.distance == 0.0 {
        return None;
    }

    let (first, second) = circle_intersections(&pair.a, &pair.b, pair.distance, rad)?;
    Some(unproject(&first, &second))
}

/// [`find_overlaps`] with radius and tolerance taken from `config`.
#[inline]
pub fn find_overlaps_with_config(
    p1: &GeoPoint,
    p2: &GeoPoint,
    config: &OverlapConfig,
) -> Option<(GeoPoint, GeoPoint)> {
    find_overlaps(p1, p2, config.radius_km, config.identical_epsilon_km)
}

/// Crossings of two circles of radius `rad` centered at `a` and `b`.
///
/// `dist` is the (non-zero) distance between the centers. The first crossing
/// lies to the left of the `a → b` direction.
fn circle_intersections(
    a: &PlanarPoint,
    b: &PlanarPoint,
    dist: f64,
    rad: f64,
) -> Option<(PlanarPoint, PlanarPoint)> {
    let half = dist / 2.0;
    if half > rad {
        return None;
    }

    let h = (rad * rad - half * half).max(0.0).sqrt();
    let mid = PlanarPoint::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);

    // Perpendicular to a → b, scaled to length h
    let offset_x = -(b.y - a.y) * h / dist;
    let offset_y = (b.x - a.x) * h / dist;

    Some((
        PlanarPoint::new(mid.x + offset_x, mid.y + offset_y),
        PlanarPoint::new(mid.x - offset_x, mid.y - offset_y),
    ))
}

// =============================================================================
// Track Overlaps
// =============================================================================

/// A track point with its index for R-tree queries
#[derive(Debug, Clone, Copy)]
struct IndexedPoint {
    idx: usize,
    point: GeoPoint,
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.point.longitude, self.point.latitude])
    }
}

/// Run [`find_overlaps`] on every point pair of two tracks whose circles can meet.
///
/// Track B is indexed in an R-tree; each point of track A only visits the
/// points of B inside a box of twice the radius. Results are ordered by
/// `(index_a, index_b)`.
///
/// # Example
///
/// ```rust
/// use track_overlap::{GeoPoint, OverlapConfig, find_track_overlaps};
///
/// let track_a = vec![GeoPoint::new(51.5000, -0.1300), GeoPoint::new(51.5050, -0.1300)];
/// let track_b = vec![GeoPoint::new(51.5000, -0.1100)];
///
/// let overlaps = find_track_overlaps(&track_a, &track_b, &OverlapConfig::default());
/// assert!(!overlaps.is_empty());
/// ```
pub fn find_track_overlaps(
    track_a: &[GeoPoint],
    track_b: &[GeoPoint],
    config: &OverlapConfig,
) -> Vec<TrackOverlap> {
    if track_a.is_empty() || track_b.is_empty() {
        return vec![];
    }

    let indexed: Vec<IndexedPoint> = track_b
        .iter()
        .enumerate()
        .map(|(idx, &point)| IndexedPoint { idx, point })
        .collect();
    let rtree = RTree::bulk_load(indexed);

    let reach_km = 2.0 * config.radius_km * SEARCH_PADDING;
    let mut overlaps = Vec::new();
    let mut pairs_checked = 0usize;

    for (index_a, p) in track_a.iter().enumerate() {
        let span = km_to_degrees(reach_km, p.latitude);
        let search_bounds = AABB::from_corners(
            [p.longitude - span, p.latitude - span],
            [p.longitude + span, p.latitude + span],
        );

        let mut candidates: Vec<usize> = rtree
            .locate_in_envelope_intersecting(&search_bounds)
            .map(|c| c.idx)
            .collect();
        candidates.sort_unstable();
        pairs_checked += candidates.len();

        for index_b in candidates {
            if let Some(points) = find_overlaps_with_config(p, &track_b[index_b], config) {
                overlaps.push(TrackOverlap { index_a, index_b, points });
            }
        }
    }

    debug!(
        "[find_track_overlaps] {}x{} points, {} candidate pairs, {} overlaps",
        track_a.len(),
        track_b.len(),
        pairs_checked,
        overlaps.len()
    );

    overlaps
}
