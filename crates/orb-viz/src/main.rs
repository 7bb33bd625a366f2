mod demo;
mod orb;
mod utils;

use demo::{Scene, TelemetryScript};
use nannou::prelude::*;
use orb::OrbRenderer;
use orb_core::OrbParameters;
use utils::Config;

fn main() {
    nannou::app(model).update(update).run();
}

struct Model {
    config: Config,
    script: TelemetryScript,
    /// The single live parameter snapshot; rewritten whole every frame
    params: OrbParameters,
    orb: OrbRenderer,
}

fn model(app: &App) -> Model {
    let config = Config::load();

    let mut win = app
        .new_window()
        .view(view)
        .key_pressed(key_pressed)
        .title("orb-viz")
        .size(config.width(), config.height());

    if config.fullscreen() {
        win = win.fullscreen();
    }

    win.build().unwrap();

    let scene = Scene::from_name(config.start_scene()).unwrap_or(Scene::Idle);
    println!("Starting scene: {}", scene.label());

    Model {
        script: TelemetryScript::new(scene),
        params: OrbParameters::default(),
        orb: OrbRenderer::new(&config),
        config,
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    let mut telemetry = model.script.tick();
    if model.config.clamp_telemetry() {
        telemetry = telemetry.clamped();
    }

    model.params.update(&telemetry);
    model.orb.update(&model.params);
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    model.orb.draw(&draw, app.window_rect());
    draw.to_frame(app, &frame).unwrap();
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    // Exit app with Q only
    if key == Key::Q {
        app.quit();
        return;
    }

    // Space cycles demo scenes
    if key == Key::Space {
        let scene = model.script.cycle_next();
        model.orb.show_notification(format!("Scene: {}", scene.label()));
        return;
    }

    // Number keys select a scene directly
    let index = match key {
        Key::Key1 => Some(0),
        Key::Key2 => Some(1),
        Key::Key3 => Some(2),
        Key::Key4 => Some(3),
        _ => None,
    };
    if let Some(idx) = index {
        let scene = Scene::ALL[idx];
        model.script.set_scene(scene);
        model.orb.show_notification(format!("Scene: {}", scene.label()));
        return;
    }

    // Layer toggles, persisted to the config file
    match key {
        Key::B => {
            let on = model.orb.toggle_background();
            model.config.show_background = Some(on);
            model.config.save();
            model.orb.show_notification(format!("Background: {}", label(on)));
        }
        Key::G => {
            let on = model.orb.toggle_glow_effects();
            model.config.show_glow_effects = Some(on);
            model.config.save();
            model.orb.show_notification(format!("Glow: {}", label(on)));
        }
        Key::S => {
            let on = model.orb.toggle_shadow();
            model.config.show_shadow = Some(on);
            model.config.save();
            model.orb.show_notification(format!("Shadow: {}", label(on)));
        }
        _ => {}
    }
}

fn label(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}
