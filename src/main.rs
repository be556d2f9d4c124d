//! Lunar Lander entry point
//!
//! Native builds run a headless session: an autopilot holds the keys, a
//! recording renderer stands in for the window, and frames are paced at
//! roughly 60 Hz against the monotonic clock. Settings come from `lunar_lander.json` (or the file named
//! by `LUNAR_LANDER_SETTINGS`) when present.

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use lunar_lander::platform::{Key, KeyboardState, MonotonicClock};
use lunar_lander::renderer::{RecordingRenderer, TextureCache};
use lunar_lander::sim::GamePhase;
use lunar_lander::{App, AppStatus, Settings};

const DEFAULT_SETTINGS_PATH: &str = "lunar_lander.json";
const FRAME_PACE: Duration = Duration::from_millis(16);
/// Give up after about two minutes
const MAX_FRAMES: u64 = 60 * 120;

/// Scripted pilot: always pushes right, pulses the thruster
#[derive(Debug, Default)]
struct Autopilot {
    frame: u64,
}

impl KeyboardState for Autopilot {
    fn poll(&mut self) {
        self.frame += 1;
    }

    fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Right => true,
            Key::Thrust => self.frame % 3 != 0,
            Key::Left | Key::Quit => false,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Lunar Lander (headless) starting...");

    let path = std::env::var("LUNAR_LANDER_SETTINGS")
        .unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string());
    let settings = match Settings::load(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut app = match App::new(
        settings,
        &mut TextureCache::new(),
        MonotonicClock::new(),
        Autopilot::default(),
        RecordingRenderer::new(),
    ) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    while app.status == AppStatus::Running && app.frames() < MAX_FRAMES {
        thread::sleep(FRAME_PACE);
        app.frame();
        if app.state.is_terminal() {
            // Show the end screen once more, then stop
            thread::sleep(FRAME_PACE);
            app.frame();
            break;
        }
    }

    let outcome = match app.state.phase {
        GamePhase::Won => "landed past the goal",
        GamePhase::Lost => "crashed into an asteroid",
        GamePhase::Running => "ran out of time",
    };
    log::info!(
        "Session over after {} frames: {} (fuel {:.1}, {} draws last frame)",
        app.frames(),
        outcome,
        app.state.craft.fuel(),
        app.renderer().commands.len()
    );
    println!("{outcome}");

    ExitCode::SUCCESS
}
