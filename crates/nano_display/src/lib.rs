//! # Nano Display
//!
//! Owning window and display wrappers over GLFW, plus the small amount of
//! policy that is derived rather than forwarded.
//!
//! ## Features
//!
//! - **Window Wrapper**: `Window` owns a backend and a resize subscription list
//! - **Mode Policy**: windowed, exclusive fullscreen and fullscreen-windowed placement
//! - **Display Queries**: usable desktop area and video mode per display
//! - **Power State**: battery state, seconds remaining and charge percentage
//! - **VR Timing**: compositor timing-mode enumeration with native code mapping
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nano_display::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     nano_display::foundation::logging::init();
//!
//!     let config = WindowConfig::new("Nano Display");
//!     let (backend, mut displays) = GlfwWindow::create(&config)?;
//!     let mut window = Window::new(Box::new(backend));
//!
//!     window.on_resize().connect(|(width, height)| {
//!         println!("viewport is now {}x{}", width, height);
//!     });
//!
//!     window.set_mode(&mut displays, WindowMode::FullscreenWindowed, None)?;
//!     assert_eq!(window.mode(&mut displays), WindowMode::FullscreenWindowed);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod display;
pub mod foundation;
pub mod power;
pub mod vr;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, DisplaySystemConfig, WindowConfig},
        display::{
            DisplayError, DisplayInfo, DisplayMode, DisplayQuery, DisplayResult, DriverHandle,
            GlfwDisplays, GlfwWindow, IconImage, ResizeSignal, SubscriptionId, Window,
            WindowBackend, WindowEvent, WindowGeometry, WindowMode,
        },
        power::{PowerInfo, PowerSource, PowerState, SysfsPowerSource},
        vr::TimingMode,
    };
}
