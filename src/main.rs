// src/main.rs
use nannou::prelude::*;

use boxbreak::{config::Config, draw::NannouSurface, views::Scene};

struct Model {
    scene: Scene,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config, the built-in defaults keep the display running without one
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config.toml ({}), using defaults", e);
        Config::default()
    });

    app.new_window()
        .title("boxbreak")
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .key_pressed(key_pressed)
        .resized(resized)
        .build()
        .expect("Failed to build window");

    Model {
        scene: Scene::new(&config),
    }
}

fn mouse_pressed(_app: &App, model: &mut Model, _button: MouseButton) {
    model.scene.handle_tap();
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if key == Key::Space {
        model.scene.handle_tap();
    }
}

fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.scene.resize(size.x, size.y);
}

fn update(_app: &App, model: &mut Model, update: Update) {
    model.scene.update(update.since_last.as_secs_f32());
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let mut surface = NannouSurface::new(&draw);
    model.scene.render(&mut surface);

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("Failed to render frame: {:?}", e);
    }
}
