//! Window and display subsystem
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application Code            │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!         ┌─────▼─────┐
//!         │  Window   │ ← Public API + resize observers (handle.rs)
//!         └─────┬─────┘
//!               │ Delegates mode logic to
//!         ┌─────▼─────┐
//!         │  policy   │ ← Fullscreen-windowed placement, mode inference
//!         └─────┬─────┘
//!               │ Uses
//!   ┌───────────▼────────────────┐
//!   │ WindowBackend, DisplayQuery │ ← Collaborator traits (backend.rs)
//!   └───────────┬────────────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ GlfwWindow            │
//!   │ GlfwDisplays          │ ← GLFW backend (glfw_backend.rs)
//!   └───────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - **`handle`**: `Window`, the application-facing wrapper
//! - **`policy`**: the derived mode behavior
//! - **`backend`**: collaborator traits
//! - **`glfw_backend`**: the GLFW implementation
//! - **`signal`**: ordered resize subscription list
//! - **`types`**, **`driver`**, **`error`**: value types

pub mod backend;
pub mod driver;
pub mod error;
pub mod glfw_backend;
pub mod handle;
pub mod policy;
pub mod signal;
pub mod types;

#[cfg(test)]
mod mock;

pub use backend::{DisplayQuery, WindowBackend};
pub use driver::DriverHandle;
pub use error::{DisplayError, DisplayResult};
pub use glfw_backend::{GlfwDisplays, GlfwWindow};
pub use handle::Window;
pub use signal::{ResizeSignal, SubscriptionId};
pub use types::{BorderSize, DisplayInfo, DisplayMode, IconImage, WindowEvent, WindowGeometry, WindowMode};
