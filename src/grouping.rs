//! # Point Grouping
//!
//! Partitions a set of GPS points into spatial groups so that nearby points can
//! be treated as a single location.
//!
//! ## Algorithm
//!
//! Greedy and seed-relative, one group per pass over the working list:
//!
//! 1. The first point not yet consumed becomes the seed of a new group
//! 2. Every later unconsumed point within `radius_km` of the *seed* joins it
//! 3. Joined points are marked consumed (their positions stay put)
//! 4. The group is emitted and the next pass starts
//!
//! The result depends on input order, and membership is not transitive: two
//! members of a group are each close to the seed, not necessarily to each
//! other. Worst case is O(n²) distance checks.
//!
//! ## Example
//!
//! ```rust
//! use track_overlap::{GeoPoint, group_points};
//!
//! let points = vec![
//!     GeoPoint::new(51.5000, -0.1300),
//!     GeoPoint::new(51.5100, -0.1300), // ~1.1 km north
//!     GeoPoint::new(51.6000, -0.1300), // ~11 km north
//! ];
//!
//! let groups: Vec<_> = group_points(points, 2.05).collect();
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0].len(), 2);
//! ```

use std::iter::FusedIterator;

use log::{debug, trace};

use crate::error::{ensure_positive_km, Result};
use crate::geo_utils::{compute_center, points_close_with, DistanceModel};
use crate::{GeoPoint, DEFAULT_GROUPING_RADIUS_KM};

/// Configuration for point grouping.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupingConfig {
    /// Maximum distance from the seed for a point to join its group.
    /// Default: 2.05 km
    pub radius_km: f64,

    /// How distance to the seed is measured.
    /// Default: great-circle
    pub distance_model: DistanceModel,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            radius_km: DEFAULT_GROUPING_RADIUS_KM,
            distance_model: DistanceModel::GreatCircle,
        }
    }
}

impl GroupingConfig {
    /// Create a great-circle configuration with the given radius.
    pub fn with_radius(radius_km: f64) -> Self {
        Self {
            radius_km,
            ..Self::default()
        }
    }

    /// Check that the radius is positive and finite.
    pub fn validate(&self) -> Result<()> {
        ensure_positive_km("radius_km", self.radius_km)
    }
}

/// A group of points that share a location.
///
/// The first point is the seed; every other member was close to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PointGroup {
    points: Vec<GeoPoint>,
}

impl PointGroup {
    /// The point the group was built around.
    pub fn seed(&self) -> &GeoPoint {
        &self.points[0]
    }

    /// All members in input order, seed first.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a group holds at least its seed.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Centroid of the members.
    pub fn center(&self) -> GeoPoint {
        compute_center(&self.points).unwrap_or(self.points[0])
    }

    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    /// Consume the group into its seed, centroid and members.
    pub fn summary(self) -> GroupSummary {
        GroupSummary {
            seed: self.points[0],
            center: self.center(),
            points: self.points,
        }
    }
}

/// A group flattened for reporting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupSummary {
    pub seed: GeoPoint,
    pub center: GeoPoint,
    pub points: Vec<GeoPoint>,
}

/// Lazy sequence of [`PointGroup`]s produced by [`group_points`].
///
/// Owns the points it groups and marks them consumed as it goes. It is a
/// single pass: once exhausted it keeps returning `None`, and the input cannot
/// be recovered from it.
#[derive(Debug)]
pub struct PointGroups {
    points: Vec<GeoPoint>,
    consumed: Vec<bool>,
    /// Every position before this one is consumed
    first_live: usize,
    remaining: usize,
    groups_emitted: usize,
    config: GroupingConfig,
}

impl PointGroups {
    fn new(points: Vec<GeoPoint>, config: GroupingConfig) -> Self {
        let remaining = points.len();
        Self {
            consumed: vec![false; points.len()],
            points,
            first_live: 0,
            remaining,
            groups_emitted: 0,
            config,
        }
    }

    /// Number of points not yet assigned to a group.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Run one pass: claim a seed and everything close to it.
    fn next_pass(&mut self) -> Option<PointGroup> {
        let seed_idx = (self.first_live..self.points.len()).find(|&i| !self.consumed[i])?;
        self.first_live = seed_idx + 1;

        let seed = self.points[seed_idx];
        self.consumed[seed_idx] = true;
        let mut members = vec![seed];
        let mut left_behind = 0usize;

        for idx in self.first_live..self.points.len() {
            if self.consumed[idx] {
                continue;
            }

            let candidate = self.points[idx];
            if points_close_with(
                self.config.distance_model,
                &seed,
                &candidate,
                self.config.radius_km,
            ) {
                self.consumed[idx] = true;
                members.push(candidate);
            } else {
                left_behind += 1;
            }
        }

        self.remaining -= members.len();
        self.groups_emitted += 1;
        trace!(
            "[group_points] Pass {}: seed #{} took {} points, {} left for later passes",
            self.groups_emitted,
            seed_idx,
            members.len(),
            left_behind
        );

        if self.remaining == 0 {
            debug!(
                "[group_points] Grouped {} points into {} groups (radius {} km)",
                self.points.len(),
                self.groups_emitted,
                self.config.radius_km
            );
        }

        Some(PointGroup { points: members })
    }
}

impl Iterator for PointGroups {
    type Item = PointGroup;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_pass()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower = usize::from(self.remaining > 0);
        (lower, Some(self.remaining))
    }
}

impl FusedIterator for PointGroups {}

/// Group points around seeds, using great-circle distance.
///
/// Takes ownership of `points`: the returned iterator consumes them as it
/// emits groups. Every input point ends up in exactly one group.
pub fn group_points(points: Vec<GeoPoint>, radius_km: f64) -> PointGroups {
    PointGroups::new(points, GroupingConfig::with_radius(radius_km))
}

/// Group points around seeds using the radius and distance model in `config`.
pub fn group_points_with_config(points: Vec<GeoPoint>, config: &GroupingConfig) -> PointGroups {
    PointGroups::new(points, config.clone())
}

/// Group several independent point sets in parallel.
///
/// The sets share nothing, so each runs its own [`group_points_with_config`].
/// Output order matches input order.
#[cfg(feature = "parallel")]
pub fn group_point_sets_parallel(
    sets: Vec<Vec<GeoPoint>>,
    config: &GroupingConfig,
) -> Vec<Vec<PointGroup>> {
    use rayon::prelude::*;

    sets.into_par_iter()
        .map(|points| group_points_with_config(points, config).collect())
        .collect()
}
