mod config;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod movement;
mod visuals;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Platformer Motion".to_string(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        config::ConfigPlugin::default(),
        level::LevelPlugin,
        movement::MovementPlugin,
        visuals::VisualsPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
