use bevy::{
    prelude::*,
    window::{PresentMode, WindowResolution},
};
use std::env;

use ballroll::{
    plugins::{PhysicsPlugin, SceneRenderPlugin},
    resources::SimulationConfig,
};

fn main() -> AppExit {
    // Optional single argument: path to a YAML or JSON config file.
    let config = match env::args().nth(1) {
        Some(path) => match SimulationConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path, e);
                return AppExit::error();
            }
        },
        None => SimulationConfig::default(),
    };

    let render = &config.render;
    let window = Window {
        title: render.title.clone(),
        resolution: WindowResolution::new(render.screen_width as f32, render.screen_height as f32),
        resizable: false,
        present_mode: PresentMode::AutoVsync,
        ..default()
    };

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(PhysicsPlugin::with_config(config.clone()))
        .add_plugins(SceneRenderPlugin::new(
            render.screen_width,
            render.screen_height,
        ))
        .run();

    if let AppExit::Error(code) = exit {
        error!("Simulation exited with error code {}", code);
    }
    exit
}
