//! Fullscreen-windowed placement and window-mode inference
//!
//! This is the only place where window behavior is derived rather than
//! forwarded. The functions here mutate a backend but never notify resize
//! observers; `Window` owns the observer list and emits exactly once per
//! public operation.
//!
//! Fullscreen-windowed means: position `(0, 0)` and size one pixel smaller
//! than the display's usable area in each dimension. Some window managers
//! promote a borderless window that exactly covers a monitor to true
//! fullscreen; the inset keeps it a normal window.

use super::backend::{DisplayQuery, WindowBackend};
use super::error::DisplayResult;
use super::types::{WindowGeometry, WindowMode};

/// Pixels removed from each dimension of a display's usable size
pub const FULLSCREEN_WINDOWED_INSET: u32 = 1;

/// Geometry a fullscreen-windowed window has on a display of the given usable size
pub const fn fullscreen_windowed_geometry(usable_size: (u32, u32)) -> WindowGeometry {
    WindowGeometry::new(
        (0, 0),
        (
            usable_size.0.saturating_sub(FULLSCREEN_WINDOWED_INSET),
            usable_size.1.saturating_sub(FULLSCREEN_WINDOWED_INSET),
        ),
    )
}

/// Pick the display an operation targets
///
/// An explicit index is returned as-is (validated later by the query that uses
/// it). Otherwise the display hosting the window, falling back to display 0.
pub fn resolve_display<D>(
    backend: &dyn WindowBackend,
    displays: &mut D,
    requested: Option<usize>,
) -> usize
where
    D: DisplayQuery + ?Sized,
{
    requested
        .or_else(|| displays.display_index_of(backend.geometry()))
        .unwrap_or(0)
}

/// Move and resize the backend to cover a display, without notifying anyone
///
/// The display's usable size is read before any mutation, so an unknown
/// display index leaves the window untouched. Returns the display index used.
pub fn place_fullscreen_windowed<D>(
    backend: &mut dyn WindowBackend,
    displays: &mut D,
    requested: Option<usize>,
) -> DisplayResult<usize>
where
    D: DisplayQuery + ?Sized,
{
    let index = resolve_display(backend, displays, requested);
    let target = fullscreen_windowed_geometry(displays.usable_size(index)?);
    apply_geometry(backend, target)?;
    Ok(index)
}

/// Apply a mode transition to the backend, without notifying anyone
pub fn apply_mode<D>(
    backend: &mut dyn WindowBackend,
    displays: &mut D,
    mode: WindowMode,
    requested: Option<usize>,
) -> DisplayResult<()>
where
    D: DisplayQuery + ?Sized,
{
    let index = resolve_display(backend, displays, requested);
    match mode {
        WindowMode::Windowed => {
            backend.set_exclusive_fullscreen(false, index)?;
        }
        WindowMode::Fullscreen => {
            displays.usable_size(index)?;
            backend.set_exclusive_fullscreen(true, index)?;
        }
        WindowMode::FullscreenWindowed => {
            let target = fullscreen_windowed_geometry(displays.usable_size(index)?);
            backend.set_exclusive_fullscreen(false, index)?;
            apply_geometry(backend, target)?;
        }
    }
    log::info!("window mode set to {:?} on display {}", mode, index);
    Ok(())
}

/// Classify the backend's current presentation
///
/// Advisory only: never fails. The exclusive flag wins; otherwise the window is
/// fullscreen-windowed when its geometry is exactly the inset rectangle of any
/// connected display. Matching every display rather than the one hosting the
/// window center matters because placement always uses the absolute origin:
/// a window covering a smaller secondary display sits on the primary one.
///
/// An ordinary window that happens to sit exactly on one of those rectangles
/// is reported as fullscreen-windowed. With no displays at all the window is
/// reported as windowed.
pub fn infer_mode<D>(backend: &dyn WindowBackend, displays: &mut D) -> WindowMode
where
    D: DisplayQuery + ?Sized,
{
    if backend.is_exclusive_fullscreen() {
        return WindowMode::Fullscreen;
    }

    let geometry = backend.geometry();
    let connected = displays.displays();
    if connected.is_empty() {
        log::warn!("no displays connected; assuming window at {:?} is windowed", geometry);
        return WindowMode::Windowed;
    }

    if connected
        .iter()
        .any(|display| fullscreen_windowed_geometry(display.size) == geometry)
    {
        WindowMode::FullscreenWindowed
    } else {
        WindowMode::Windowed
    }
}

fn apply_geometry(backend: &mut dyn WindowBackend, target: WindowGeometry) -> DisplayResult<()> {
    log::debug!(
        "placing window at {:?} with size {}x{}",
        target.position,
        target.size.0,
        target.size.1
    );
    backend.set_position(target.position.0, target.position.1)?;
    backend.set_size(target.size.0, target.size.1)
}
