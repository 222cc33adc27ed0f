//! Config domain: tuning values for the character motion core.

use avian2d::prelude::PhysicsLayer;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

/// A single out-of-range tuning value.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "motion config field '{}' is {} but must be {}",
            self.field, self.value, self.expected
        )
    }
}

/// Immutable tuning for one character, supplied when the controller is built.
///
/// Distances are world units, speeds are units per second and durations are
/// seconds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionConfig {
    pub move_speed: f32,
    pub acceleration: f32,
    /// Fraction of `acceleration` available while airborne, in (0, 1].
    pub air_control: f32,
    /// Vertical velocity set on jump.
    pub jump_force: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    /// Horizontal speed forced on dash entry.
    pub dash_force: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    /// Radius of the ground overlap circle.
    pub check_radius: f32,
    /// Collision layer bits counted as ground.
    pub ground_layer_mask: u32,
    pub squash_amount: f32,
    pub squash_speed: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            acceleration: 15.0,
            air_control: 0.5,
            jump_force: 15.0,
            coyote_time: 0.15,
            jump_buffer_time: 0.15,
            dash_force: 20.0,
            dash_duration: 0.12,
            dash_cooldown: 0.3,
            check_radius: 0.1,
            ground_layer_mask: GameLayer::Ground.to_bits(),
            squash_amount: 0.25,
            squash_speed: 12.0,
        }
    }
}

/// Pushes a `ConfigError` when a field is non-finite or fails its range check.
macro_rules! check_range {
    ($errors:expr, $config:expr, $field:ident, $valid:expr, $expected:expr) => {
        let value = $config.$field;
        if !value.is_finite() || !($valid)(value) {
            $errors.push(ConfigError {
                field: stringify!($field),
                value,
                expected: $expected,
            });
        }
    };
}

impl MotionConfig {
    /// Check every documented range.
    /// Returns all violations, not just the first one.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        check_range!(errors, self, move_speed, |v: f32| v >= 0.0, ">= 0");
        check_range!(errors, self, acceleration, |v: f32| v >= 0.0, ">= 0");
        check_range!(
            errors,
            self,
            air_control,
            |v: f32| v > 0.0 && v <= 1.0,
            "in (0, 1]"
        );
        check_range!(errors, self, jump_force, |v: f32| v >= 0.0, ">= 0");
        check_range!(errors, self, coyote_time, |v: f32| v >= 0.0, ">= 0");
        check_range!(errors, self, jump_buffer_time, |v: f32| v >= 0.0, ">= 0");
        check_range!(errors, self, dash_force, |v: f32| v >= 0.0, ">= 0");
        // A zero-length dash would never leave the dashing state cleanly.
        check_range!(errors, self, dash_duration, |v: f32| v > 0.0, "> 0");
        check_range!(errors, self, dash_cooldown, |v: f32| v >= 0.0, ">= 0");
        check_range!(errors, self, check_radius, |v: f32| v > 0.0, "> 0");
        check_range!(
            errors,
            self,
            squash_amount,
            |v: f32| (0.0..1.0).contains(&v),
            "in [0, 1)"
        );
        check_range!(errors, self, squash_speed, |v: f32| v > 0.0, "> 0");

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
