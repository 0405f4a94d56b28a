//! Window demo application
//!
//! Opens a centered window and runs an empty frame loop until Escape is
//! pressed or the window is closed. The title shows the measured frame rate.
//!
//! Usage: `window_demo [window.toml|window.ron]`

use gl_window::foundation::logging;
use gl_window::prelude::*;
use std::time::{Duration, Instant};

const TITLE_REFRESH: Duration = Duration::from_secs(1);

fn load_config() -> Result<WindowConfig, ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading window config from {}", path);
            WindowConfig::load_from_file(&path)?
        }
        None => WindowConfig::default().with_title("gl_window demo"),
    };

    config.validate()?;
    Ok(config)
}

fn run(window: &mut Window, base_title: &str) {
    let mut frames: u32 = 0;
    let mut last_refresh = Instant::now();

    while !window.is_closing() {
        window.update();
        frames += 1;

        let elapsed = last_refresh.elapsed();
        if elapsed >= TITLE_REFRESH {
            let fps = f64::from(frames) / elapsed.as_secs_f64();
            let vsync = if window.is_vsync_enabled() { "vsync" } else { "no vsync" };
            window.set_title(&format!("{base_title} | {fps:.0} FPS ({vsync})"));

            frames = 0;
            last_refresh = Instant::now();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(log::LevelFilter::Info);

    log::info!("Starting window demo");

    let config = load_config()?;
    let mut window = Window::from_config(&config)?;

    run(&mut window, &config.title);

    window.destroy();
    log::info!("Window demo finished");
    Ok(())
}
