use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
    window::WindowResolution,
};
use conway_gol_grid::{
    board::BoardPlugin, camera::CamPlugin, controls::ControlsPlugin, life::LifePlugin,
    prelude::WINDOW_SIZE, state::SimState,
};

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Conway's Game of Life".into(),
                        resizable: true,
                        focused: true,
                        mode: bevy::window::WindowMode::Windowed,
                        resolution: WindowResolution::new(WINDOW_SIZE.x, WINDOW_SIZE.y),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(MeshPickingPlugin)
        .add_plugins((FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin::default()))
        .init_state::<SimState>()
        .add_plugins((CamPlugin, LifePlugin, BoardPlugin, ControlsPlugin))
        .run();
}
