//! Window Mode Demo
//!
//! Opens a window from `display.toml` and walks it through every window mode:
//! - Each mode is held for a few seconds before switching to the next
//! - Every resize notification is logged with its new size
//! - The derived mode is checked against the requested one after each switch
//! - Power state is logged once per mode
//!
//! Close the window to exit early.

use std::time::{Duration, Instant};

use nano_display::prelude::*;
use thiserror::Error;

const CONFIG_PATH: &str = "display.toml";
const MODE_HOLD: Duration = Duration::from_secs(3);
const FRAME_SLEEP: Duration = Duration::from_millis(16);

const MODE_CYCLE: [WindowMode; 4] = [
    WindowMode::FullscreenWindowed,
    WindowMode::Fullscreen,
    WindowMode::FullscreenWindowed,
    WindowMode::Windowed,
];

#[derive(Error, Debug)]
enum DemoError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("display: {0}")]
    Display(#[from] DisplayError),
}

struct ModeDemoApp {
    window: Window,
    displays: GlfwDisplays,
    power: SysfsPowerSource,
    /// Configured window rectangle, restored when the cycle reaches windowed
    windowed_geometry: WindowGeometry,
    next_mode: usize,
    mode_started: Instant,
}

impl ModeDemoApp {
    fn new(config: &DisplaySystemConfig) -> Result<Self, DemoError> {
        let (mut window, mut displays) = GlfwWindow::open(&config.window)?;

        for display in displays.displays() {
            log::info!(
                "display {} '{}': usable {}x{} at {:?}",
                display.index,
                display.name,
                display.size.0,
                display.size.1,
                display.position
            );
        }
        log::info!("VR compositor timing mode: {:?} (native {})", config.vr_timing_mode, config.vr_timing_mode.to_native());

        window.on_resize().connect(|(width, height)| {
            log::info!("resize notification: {}x{}", width, height);
        });

        if let Some(handle) = window.driver_handle() {
            log::debug!("native handle: {:?}", handle);
        }

        Ok(Self {
            window,
            displays,
            power: config.power_source(),
            windowed_geometry: WindowGeometry::new(config.window.position, config.window.size),
            next_mode: 0,
            mode_started: Instant::now(),
        })
    }

    fn switch_mode(&mut self) -> Result<(), DemoError> {
        let requested = MODE_CYCLE[self.next_mode];
        self.window.set_mode(&mut self.displays, requested, None)?;
        if requested == WindowMode::Windowed {
            // Leaving fullscreen-windowed keeps the inset rectangle; move off it
            let WindowGeometry { position, size } = self.windowed_geometry;
            self.window.set_size(size.0, size.1)?;
            self.window.set_position(position.0, position.1)?;
        }

        let observed = self.window.mode(&mut self.displays);
        if observed == requested {
            log::info!("now {:?}", observed);
        } else {
            log::warn!("requested {:?} but window reads as {:?}", requested, observed);
        }

        let power = self.power.query();
        log::info!(
            "power: {:?}, {} left, {} charge",
            power.state,
            power.seconds.map_or_else(|| "unknown".to_string(), |s| format!("{s}s")),
            power.percentage.map_or_else(|| "unknown".to_string(), |p| format!("{:.0}%", p * 100.0))
        );

        self.next_mode += 1;
        self.mode_started = Instant::now();
        Ok(())
    }

    fn run(mut self) -> Result<(), DemoError> {
        self.switch_mode()?;

        while !self.window.should_close() {
            for event in self.window.poll_events() {
                if event == WindowEvent::CloseRequested {
                    self.window.set_should_close(true);
                }
            }

            if self.mode_started.elapsed() >= MODE_HOLD {
                if self.next_mode == MODE_CYCLE.len() {
                    break;
                }
                self.switch_mode()?;
            }

            std::thread::sleep(FRAME_SLEEP);
        }

        log::info!("demo finished");
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DisplaySystemConfig::load_or_default(CONFIG_PATH)?;
    nano_display::foundation::logging::init_with_level(&config.log_level);
    config.validate()?;

    println!("=== Window Mode Demo ===");
    println!("Cycling through {} window modes, {}s each.", MODE_CYCLE.len(), MODE_HOLD.as_secs());
    println!("Close the window to exit early.");
    println!();

    let app = ModeDemoApp::new(&config)?;
    app.run()?;
    Ok(())
}
