//! Movement domain: systems driving the motion core on both clocks.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::systems::backend::SpatialGroundProbe;
use crate::movement::{
    CharacterMotionController, DashEndedEvent, DashStartedEvent, GroundCheck, JumpedEvent,
    MovementInput, Player,
};

pub(crate) fn run_variable_tick(
    time: Res<Time>,
    input: Res<MovementInput>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &Transform,
            Option<&GroundCheck>,
            &mut CharacterMotionController,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    mut jumped_events: MessageWriter<JumpedEvent>,
    mut dash_started_events: MessageWriter<DashStartedEvent>,
    mut dash_ended_events: MessageWriter<DashEndedEvent>,
) {
    let dt = time.delta_secs();

    for (entity, transform, ground_check, mut controller, mut velocity) in &mut query {
        if ground_check.is_none() {
            warn_once!("Player {:?} has no GroundCheck; it will never be grounded", entity);
        }

        let probe =
            SpatialGroundProbe::new(&spatial_query, ground_check.map(|check| check.point(transform)));
        let outcome = controller.on_variable_tick(dt, &*input, &probe, &mut *velocity);

        if outcome.jumped {
            jumped_events.write(JumpedEvent { entity });
        }
        if outcome.dash_started {
            dash_started_events.write(DashStartedEvent {
                entity,
                facing: controller.facing_direction(),
            });
        }
        if outcome.dash_ended {
            dash_ended_events.write(DashEndedEvent { entity });
        }
    }
}

pub(crate) fn run_fixed_tick(
    time: Res<Time>,
    mut query: Query<(&mut CharacterMotionController, &mut LinearVelocity), With<Player>>,
) {
    let fixed_dt = time.delta_secs();

    for (mut controller, mut velocity) in &mut query {
        controller.on_fixed_tick(fixed_dt, &mut *velocity);
    }
}

pub(crate) fn log_motion_events(
    mut jumped_events: MessageReader<JumpedEvent>,
    mut dash_started_events: MessageReader<DashStartedEvent>,
    mut dash_ended_events: MessageReader<DashEndedEvent>,
) {
    for event in jumped_events.read() {
        debug!("Jump: entity={:?}", event.entity);
    }
    for event in dash_started_events.read() {
        debug!("Dash started: entity={:?}, facing={:?}", event.entity, event.facing);
    }
    for event in dash_ended_events.read() {
        debug!("Dash ended: entity={:?}", event.entity);
    }
}
