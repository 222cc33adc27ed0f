//! Movement domain: system modules for locomotion updates.

pub(crate) mod backend;
pub(crate) mod input;
pub(crate) mod motion;

pub(crate) use input::read_input;
pub(crate) use motion::{log_motion_events, run_fixed_tick, run_variable_tick};
