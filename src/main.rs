mod app;
mod config;
mod display;
mod error;
mod font;
mod input;
mod language;
mod menu;
mod render;
mod screens;
mod skin;
#[cfg(test)]
mod testing;
mod texture;
mod theme;

use app::{App, AppAction};
use config::{ConfigManager, MouseMode, VideoMode};
use error::CriticalError;
use input::InputSystem;
use render::sdl::SdlBackend;
use sdl2::messagebox::{show_simple_message_box, MessageBoxFlag};
use std::time::{Duration, Instant};

const WINDOW_TITLE: &str = "UltraStar Menu";
const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Milliseconds since `start`, the clock every menu timer runs on
fn millis_since(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

fn run() -> Result<(), CriticalError> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG | sdl2::image::InitFlag::JPG)?;

    let config_manager = ConfigManager::default_location();
    log::info!("Using config {}", config_manager.path().display());
    let mode: VideoMode = config_manager.load_or_default().video_mode();

    let mut window_builder = video_subsystem.window(WINDOW_TITLE, mode.width * mode.screens, mode.height);
    window_builder.position_centered();
    if mode.fullscreen {
        window_builder.fullscreen_desktop();
    }
    let window = window_builder.build().map_err(|e| e.to_string())?;
    let canvas = window.into_canvas().accelerated().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;
    let mut input = InputSystem::new();

    let start = Instant::now();
    let backend = SdlBackend::new(canvas, &texture_creator, mode.screens);
    let mut app = App::new(backend, config_manager, millis_since(start))?;
    sdl_context.mouse().show_cursor(app.config.mouse == MouseMode::Hardware);
    video_subsystem.text_input().start();

    'running: loop {
        let frame_start = Instant::now();

        for event in input.poll_events(&mut event_pump) {
            match app.handle_event(event, millis_since(start)) {
                AppAction::Continue => {}
                AppAction::Quit => break 'running,
                AppAction::ApplyVideoMode(mode) => {
                    if let Err(e) = app
                        .backend_mut()
                        .apply_video_mode(mode.width, mode.height, mode.fullscreen, mode.screens)
                    {
                        log::error!("Could not change video mode: {}", e);
                    }
                    sdl_context.mouse().show_cursor(app.config.mouse == MouseMode::Hardware);
                }
            }
        }

        match app.draw(millis_since(start)) {
            Ok(true) => {}
            Ok(false) => break 'running,
            Err(e) => log::error!("Draw failed: {}", e),
        }
        app.backend_mut().present();

        if let Some(rest) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    log::info!("Bye");
    Ok(())
}

fn main() {
    let filters = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned());
    pretty_env_logger::formatted_builder().parse_filters(&filters).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        if let Err(box_error) = show_simple_message_box(MessageBoxFlag::ERROR, WINDOW_TITLE, &e.to_string(), None) {
            log::error!("Could not show message box: {:?}", box_error);
        }
        std::process::exit(1);
    }
}
