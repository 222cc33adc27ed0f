//! Movement domain: the character motion core.
//!
//! One `CharacterMotionController` per character owns all mutable motion
//! state. Two tick entry points drive it:
//!
//! - [`CharacterMotionController::on_variable_tick`] once per rendered frame:
//!   input sampling, ground sampling, jump and dash arbitration, deformation.
//! - [`CharacterMotionController::on_fixed_tick`] on every physics step:
//!   horizontal velocity blending.
//!
//! Fixed ticks may run zero or several times between two variable ticks.
//! They read the grounded value sampled by the latest variable tick instead
//! of querying again.

use bevy::prelude::*;

use crate::config::{ConfigError, MotionConfig};
use crate::movement::ports::{GroundProbe, InputSource, PhysicsBody};
use crate::movement::{Countdown, Facing};

/// Unscaled pose the deformation always returns to.
pub const BASELINE_SCALE: Vec3 = Vec3::ONE;

/// `|axis|` above this counts as walking.
const WALK_THRESHOLD: f32 = 0.1;

/// Distance at which a deformation pose counts as reached.
const SPRING_BACK_THRESHOLD: f32 = 0.05;

/// Mutable motion state. Created with every timer expired and no dash active.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    pub coyote: Countdown,
    pub jump_buffer: Countdown,
    pub dash: Countdown,
    pub dash_cooldown: Countdown,
    pub is_dashing: bool,
    pub facing: Facing,
    /// Axis value from the latest variable tick, reused by fixed ticks.
    pub axis: f32,
    /// Ground overlap from the latest variable tick.
    pub grounded: bool,
    pub current_scale: Vec3,
    pub target_scale: Vec3,
    /// The scale has left the baseline neighbourhood since the last pose request.
    pub pose_departed: bool,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            coyote: Countdown::default(),
            jump_buffer: Countdown::default(),
            dash: Countdown::default(),
            dash_cooldown: Countdown::default(),
            is_dashing: false,
            facing: Facing::default(),
            axis: 0.0,
            grounded: false,
            current_scale: BASELINE_SCALE,
            target_scale: BASELINE_SCALE,
            pose_departed: false,
        }
    }
}

/// Transitions that happened during one variable tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub jumped: bool,
    pub dash_started: bool,
    pub dash_ended: bool,
}

#[derive(Component, Debug, Clone)]
pub struct CharacterMotionController {
    config: MotionConfig,
    state: MotionState,
}

impl CharacterMotionController {
    /// Build a controller for a freshly spawned character.
    /// Rejects configs with out-of-range values.
    pub fn new(config: MotionConfig) -> Result<Self, Vec<ConfigError>> {
        config.validate()?;
        Ok(Self {
            config,
            state: MotionState::default(),
        })
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn is_walking(&self) -> bool {
        self.state.axis.abs() > WALK_THRESHOLD
    }

    /// Ground overlap as of the latest variable tick.
    pub fn is_grounded(&self) -> bool {
        self.state.grounded
    }

    pub fn is_dashing(&self) -> bool {
        self.state.is_dashing
    }

    pub fn facing_direction(&self) -> Facing {
        self.state.facing
    }

    /// Deformation relative to the character's base scale.
    pub fn current_scale(&self) -> Vec3 {
        self.state.current_scale
    }

    /// Variable-rate update. `dt` is the frame time in seconds.
    pub fn on_variable_tick(
        &mut self,
        dt: f32,
        input: &impl InputSource,
        ground: &impl GroundProbe,
        body: &mut impl PhysicsBody,
    ) -> TickOutcome {
        self.sample_input(input);
        self.sample_ground(ground);

        let jumped = self.update_jump(dt, input.jump_just_pressed(), body);
        let (dash_started, dash_ended) = self.update_dash(dt, input.dash_just_pressed(), body);
        self.animate_deformation(dt);

        TickOutcome {
            jumped,
            dash_started,
            dash_ended,
        }
    }

    /// Fixed-rate update. Blends horizontal velocity toward the input target
    /// and does nothing at all while a dash is active.
    pub fn on_fixed_tick(&mut self, fixed_dt: f32, body: &mut impl PhysicsBody) {
        if self.state.is_dashing {
            return;
        }

        let control = if self.state.grounded {
            1.0
        } else {
            self.config.air_control
        };
        let target_speed = self.state.axis * self.config.move_speed;
        let t = (self.config.acceleration * control * fixed_dt).clamp(0.0, 1.0);

        let velocity = body.velocity();
        let vx = velocity.x + (target_speed - velocity.x) * t;
        body.set_velocity(Vec2::new(vx, velocity.y));

        // Coyote time is left to the variable clock. Re-arming it here from the
        // grounded snapshot would undo a jump's consume and allow a second,
        // mid-air jump while the body is still leaving the ground.
    }

    fn sample_input(&mut self, input: &impl InputSource) {
        self.state.axis = input.axis_value();
        if let Some(facing) = Facing::from_axis(self.state.axis) {
            self.state.facing = facing;
        }
    }

    fn sample_ground(&mut self, ground: &impl GroundProbe) {
        self.state.grounded = match ground.check_point() {
            Some(point) => {
                ground.overlaps_ground(point, self.config.check_radius, self.config.ground_layer_mask)
            }
            None => false,
        };
    }

    fn update_jump(&mut self, dt: f32, jump_pressed: bool, body: &mut impl PhysicsBody) -> bool {
        let state = &mut self.state;

        if state.grounded {
            state.coyote.arm(self.config.coyote_time);
        } else {
            state.coyote.tick(dt);
        }

        if jump_pressed {
            state.jump_buffer.arm(self.config.jump_buffer_time);
        } else {
            state.jump_buffer.tick(dt);
        }

        if !(state.jump_buffer.is_running() && state.coyote.is_running()) {
            return false;
        }

        let velocity = body.velocity();
        body.set_velocity(Vec2::new(velocity.x, self.config.jump_force));
        state.jump_buffer.clear();
        state.coyote.clear();
        self.request_pose(self.squash_pose());
        true
    }

    fn update_dash(
        &mut self,
        dt: f32,
        dash_pressed: bool,
        body: &mut impl PhysicsBody,
    ) -> (bool, bool) {
        self.state.dash_cooldown.tick(dt);

        let mut started = false;
        if dash_pressed && !self.state.is_dashing && !self.state.dash_cooldown.is_running() {
            self.state.is_dashing = true;
            self.state.dash.arm(self.config.dash_duration);
            self.state.dash_cooldown.arm(self.config.dash_cooldown);
            body.set_velocity(Vec2::new(
                self.state.facing.sign() * self.config.dash_force,
                0.0,
            ));
            self.request_pose(self.squash_pose());
            started = true;
        }

        let mut ended = false;
        if self.state.is_dashing {
            self.state.dash.tick(dt);
            if !self.state.dash.is_running() {
                self.state.is_dashing = false;
                self.state.target_scale = BASELINE_SCALE;
                ended = true;
            }
        }

        (started, ended)
    }

    fn squash_pose(&self) -> Vec3 {
        let amount = self.config.squash_amount;
        Vec3::new(1.0 + amount, 1.0 - amount, 1.0)
    }

    fn request_pose(&mut self, pose: Vec3) {
        self.state.target_scale = pose;
        self.state.pose_departed = false;
    }

    fn animate_deformation(&mut self, dt: f32) {
        let t = (self.config.squash_speed * dt).clamp(0.0, 1.0);
        let state = &mut self.state;
        state.current_scale = state.current_scale.lerp(state.target_scale, t);

        let from_baseline = state.current_scale.distance(BASELINE_SCALE);
        if from_baseline >= SPRING_BACK_THRESHOLD {
            state.pose_departed = true;
        }

        let pose_reached = state.current_scale.distance(state.target_scale) < SPRING_BACK_THRESHOLD;
        let settled = state.pose_departed && from_baseline < SPRING_BACK_THRESHOLD;
        if pose_reached || settled {
            state.target_scale = BASELINE_SCALE;
        }
        if settled {
            state.pose_departed = false;
        }
    }
}
