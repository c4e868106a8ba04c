//! Headless entry point: loads the config, replays a short session and logs
//! each rendered frame.

use kurbo::Point;
use shapepad_app::{App, AppConfig, UiAction, palette};
use shapepad_core::input::RawPointerEvent;
use shapepad_core::shapes::ShapeKind;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match AppConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => AppConfig::default(),
    };

    let mut app = App::with_config(config);
    let mut frame = 0;
    let mut present = |app: &mut App| match app.render() {
        Ok(Some(list)) => {
            frame += 1;
            log::info!(
                "Frame {}: {} fills, {} strokes",
                frame,
                list.fill_count(),
                list.stroke_count()
            );
            true
        }
        Ok(None) => true,
        Err(e) => {
            log::error!("Render failed: {}", e);
            false
        }
    };

    if !present(&mut app) {
        return ExitCode::FAILURE;
    }

    for entry in palette() {
        app.apply_action(entry.action());
    }
    app.drop_shape(ShapeKind::Rectangle, Point::new(100.0, 100.0));
    present(&mut app);

    let script = [
        RawPointerEvent::Down { position: Point::new(100.0, 100.0) },
        RawPointerEvent::Move { position: Point::new(180.0, 140.0) },
        RawPointerEvent::Up { position: Point::new(180.0, 140.0) },
        RawPointerEvent::Down { position: Point::new(220.0, 220.0) },
        RawPointerEvent::Move { position: Point::new(260.0, 250.0) },
        RawPointerEvent::Up { position: Point::new(260.0, 250.0) },
    ];
    for event in script {
        app.handle_raw_pointer(event);
        present(&mut app);
    }

    app.apply_action(UiAction::DeleteSelected);
    present(&mut app);

    log::info!("Session finished with {} shapes", app.canvas().len());
    ExitCode::SUCCESS
}
