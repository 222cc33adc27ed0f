//! Movement domain: avian2d adapters for the motion core seams.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::ports::{GroundProbe, PhysicsBody};

impl PhysicsBody for LinearVelocity {
    fn velocity(&self) -> Vec2 {
        self.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.0 = velocity;
    }
}

/// Ground overlap backed by an avian2d spatial query.
pub(crate) struct SpatialGroundProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    check_point: Option<Vec2>,
}

impl<'a, 'w, 's> SpatialGroundProbe<'a, 'w, 's> {
    pub(crate) fn new(spatial_query: &'a SpatialQuery<'w, 's>, check_point: Option<Vec2>) -> Self {
        Self {
            spatial_query,
            check_point,
        }
    }
}

impl GroundProbe for SpatialGroundProbe<'_, '_, '_> {
    fn check_point(&self) -> Option<Vec2> {
        self.check_point
    }

    fn overlaps_ground(&self, point: Vec2, radius: f32, layer_mask: u32) -> bool {
        // Filter to only hit Ground layer entities (not the player itself)
        let ground_filter = SpatialQueryFilter::from_mask(LayerMask(layer_mask));

        !self
            .spatial_query
            .shape_intersections(&Collider::circle(radius), point, 0.0, &ground_filter)
            .is_empty()
    }
}
