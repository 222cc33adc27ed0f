//! Movement domain: motion transition events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::Facing;

/// Event emitted when a buffered jump fires
#[derive(Debug)]
pub struct JumpedEvent {
    pub entity: Entity,
}

impl Message for JumpedEvent {}

#[derive(Debug)]
pub struct DashStartedEvent {
    pub entity: Entity,
    pub facing: Facing,
}

impl Message for DashStartedEvent {}

#[derive(Debug)]
pub struct DashEndedEvent {
    pub entity: Entity,
}

impl Message for DashEndedEvent {}
