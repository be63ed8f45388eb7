//! Toggle Face Clock
//!
//! An analog dial that turns into a digital readout when clicked or tapped.
//! A background ticker wakes the event loop once a second to redraw.

mod drawing;
mod face;
mod geometry;
mod ticker;

use nannou::event::TouchEvent;
use nannou::prelude::*;
use nannou::winit::event::TouchPhase;
use shared::{DigitStyle, LoggingConfig, Settings};

use crate::drawing::{colors, NannouCanvas};
use crate::face::ClockFace;
use crate::ticker::{TickReceiver, Ticker, TICK_PERIOD};

const CLOCK_NAME: &str = "toggle_face";

fn main() {
    nannou::app(model).update(update).exit(exit).run();
}

/// Application state
struct Model {
    /// The clock widget
    face: ClockFace,
    /// Background tick source
    ticker: Ticker,
    /// Ticks waiting to be handled on this thread
    ticks: TickReceiver,
}

fn model(app: &App) -> Model {
    // Settings come first since they carry the log filter
    let (settings, settings_error) = match shared::load_settings(CLOCK_NAME) {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    shared::init_logging(LoggingConfig {
        env_filter: settings.log_filter.clone(),
        ..LoggingConfig::default()
    });
    if let Some(e) = settings_error {
        log::warn!("Failed to load settings, using defaults: {}", e);
    }

    // Redraws are driven by ticks and input, not by a frame timer
    app.set_loop_mode(LoopMode::Wait);

    app.new_window()
        .title("Clock")
        .size(settings.window_width, settings.window_height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .touch(touch)
        .build()
        .expect("failed to create window");

    let (ticker, ticks) =
        Ticker::spawn(TICK_PERIOD, app.create_proxy()).expect("failed to start ticker thread");

    Model {
        face: ClockFace::new(settings.padding, DigitStyle::system()),
        ticker,
        ticks,
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    if model.ticks.drain() > 0 {
        model.face.on_time_advanced();
    }

    if model.face.take_repaint() {
        app.main_window().winit_window().request_redraw();
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    draw.background().color(colors::BACKGROUND);

    // Square face centered in the window
    let side = model.face.measure(window_rect.w(), window_rect.h());
    let face_rect = Rect::from_x_y_w_h(window_rect.x(), window_rect.y(), side, side);

    let mut canvas = NannouCanvas::new(&draw, face_rect);
    model.face.render_now(&mut canvas, side);

    draw.to_frame(app, &frame).unwrap();
}

fn mouse_pressed(_app: &App, model: &mut Model, _button: MouseButton) {
    model.face.toggle();
}

fn touch(_app: &App, model: &mut Model, touch: TouchEvent) {
    if touch.phase == TouchPhase::Started {
        model.face.toggle();
    }
}

fn exit(_app: &App, mut model: Model) {
    if model.ticker.is_running() {
        model.ticker.shutdown();
    }
    let dropped = model.ticks.drain();
    log::info!("clock closed, {} pending tick(s) discarded", dropped);
}
