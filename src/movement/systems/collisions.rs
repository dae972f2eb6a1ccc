//! Movement domain: ground probe against the ground layer.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MotionTuning};

/// Overlap test of a circle at `origin + ground_offset` against ground
/// colliders.
pub(crate) fn probe_ground(
    spatial_query: &SpatialQuery,
    origin: Vec2,
    tuning: &MotionTuning,
) -> bool {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let probe_shape = Collider::circle(tuning.collision_radius);

    !spatial_query
        .shape_intersections(
            &probe_shape,
            origin + tuning.ground_offset,
            0.0,
            &ground_filter,
        )
        .is_empty()
}
