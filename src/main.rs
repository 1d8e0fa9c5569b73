// src/main.rs
use log::{error, info};
use nannou::prelude::*;

use hvbpath::{
    config::{Config, ConfigSource},
    draw::Canvas,
    render::Renderer,
};

struct Model {
    renderer: Renderer,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let (config, source) = Config::load().unwrap_or_else(|err| {
        error!("{:#}", err);
        std::process::exit(1)
    });
    if source == ConfigSource::Defaults {
        info!("Running with default config");
    }

    let renderer = Renderer::from_config(&config).unwrap_or_else(|err| {
        error!("{:#}", err);
        std::process::exit(1)
    });

    info!(
        "Starting hvbpath: {}x{} window",
        config.window.width, config.window.height
    );

    app.new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .build()
        .expect("Failed to create window");

    Model { renderer }
}

fn mouse_pressed(_app: &App, model: &mut Model, _button: MouseButton) {
    model.renderer.handle_tap();
}

fn update(_app: &App, model: &mut Model, update: Update) {
    model.renderer.update(update.since_last);
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    model
        .renderer
        .render(&draw, Canvas::from_rect(app.window_rect()));

    if draw.to_frame(app, &frame).is_err() {
        error!("Failed to render frame");
    }
}
