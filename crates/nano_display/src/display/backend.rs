//! Backend-agnostic window and display traits
//!
//! These are the two collaborators the mode policy consumes. `Window` wraps a
//! boxed [`WindowBackend`]; the policy additionally takes a [`DisplayQuery`] so
//! a window never holds a back-reference to the display system that created it.

use super::driver::DriverHandle;
use super::error::{DisplayError, DisplayResult};
use super::types::{BorderSize, DisplayInfo, DisplayMode, IconImage, WindowEvent, WindowGeometry};

/// Window state collaborator
///
/// Covers the geometry and fullscreen flag the mode policy needs, plus the
/// plain pass-through operations `Window` forwards. Setters report OS
/// rejection as [`DisplayError::WindowOperationFailed`].
///
/// # Design Philosophy
/// - **No Policy**: implementations forward to the OS and translate units;
///   mode decisions live in the policy module
/// - **No Notifications**: backends never call resize observers, `Window` does
/// - **Observable State**: geometry and the fullscreen flag can always be read
///   back, so the mode is derived instead of remembered
///
/// # Coordinates
/// Positions are in desktop coordinates and may be negative for displays left
/// of or above the primary one. Sizes are client-area pixels, excluding
/// decorations.
///
/// # Thread Safety
/// Not `Send`: native window handles must stay on the thread that created them
/// (GLFW requires the main thread).
pub trait WindowBackend {
    /// Current position of the window's top-left corner
    fn get_position(&self) -> (i32, i32);

    /// Move the window's top-left corner
    ///
    /// Backends that cannot move a window in their current state (for example
    /// while it owns a monitor exclusively) return an error instead of
    /// ignoring the request.
    fn set_position(&mut self, x: i32, y: i32) -> DisplayResult<()>;

    /// Current client area size in pixels
    fn get_size(&self) -> (u32, u32);

    /// Resize the client area
    ///
    /// The OS may clamp the result to size limits or display bounds; read
    /// [`get_size`](Self::get_size) afterwards for the size actually applied.
    fn set_size(&mut self, width: u32, height: u32) -> DisplayResult<()>;

    /// Whether the OS exclusive / borderless-desktop fullscreen flag is set
    fn is_exclusive_fullscreen(&self) -> bool;

    /// Set or clear the exclusive fullscreen flag
    ///
    /// `display` picks the monitor to go fullscreen on; it is ignored when clearing.
    /// Clearing a flag that is not set is a no-op, and the position and size
    /// seen through the getters are whatever the OS reports afterwards.
    fn set_exclusive_fullscreen(&mut self, fullscreen: bool, display: usize) -> DisplayResult<()>;

    /// Position and size together
    fn geometry(&self) -> WindowGeometry {
        WindowGeometry::new(self.get_position(), self.get_size())
    }

    /// Current window title
    fn get_title(&self) -> String;

    /// Replace the window title
    fn set_title(&mut self, title: &str);

    /// Whether the window is shown
    fn is_visible(&self) -> bool;

    /// Show or hide the window
    fn set_visible(&mut self, visible: bool);

    /// Whether the user can resize the window
    fn is_resizable(&self) -> bool;

    /// Allow or forbid user resizing
    fn set_resizable(&mut self, resizable: bool);

    /// Whether the window has OS decorations
    fn is_bordered(&self) -> bool;

    /// Add or remove OS decorations
    fn set_bordered(&mut self, bordered: bool);

    /// Whole-window opacity in `0.0..=1.0`
    fn get_opacity(&self) -> f32;

    /// Set whole-window opacity; callers clamp to `0.0..=1.0`
    fn set_opacity(&mut self, opacity: f32);

    /// Frame thickness around the client area
    fn border_size(&self) -> BorderSize;

    /// Lower and upper bounds on the client size; `None` leaves a bound open
    fn set_size_limits(&mut self, minimum: Option<(u32, u32)>, maximum: Option<(u32, u32)>);

    /// Current `(minimum, maximum)` size bounds
    fn size_limits(&self) -> (Option<(u32, u32)>, Option<(u32, u32)>);

    /// Replace the window icon
    fn set_icon(&mut self, icon: &IconImage) -> DisplayResult<()>;

    /// Whether the cursor is confined to the window
    fn is_input_grabbed(&self) -> bool;

    /// Confine the cursor to the window and hide it, or release it
    ///
    /// While grabbed the application receives unbounded relative motion, which
    /// is what mouse-look cameras want. Releasing restores the normal cursor.
    fn set_input_grab(&mut self, grabbed: bool);

    /// Video mode requested for exclusive fullscreen
    ///
    /// `None` until one is set, meaning the display's current mode is used.
    fn fullscreen_display_mode(&self) -> Option<DisplayMode>;

    /// Request a video mode for exclusive fullscreen
    ///
    /// Applied immediately when the window is already exclusive, otherwise the
    /// next time it becomes exclusive. The OS may pick the closest mode it
    /// supports rather than the exact one asked for.
    fn set_fullscreen_display_mode(&mut self, mode: DisplayMode) -> DisplayResult<()>;

    /// Give the window input focus
    fn focus(&mut self);

    /// Whether the window has input focus
    fn has_input_focus(&self) -> bool;

    /// Whether the cursor is over the window
    fn has_mouse_focus(&self) -> bool;

    /// Bring the window above other windows
    fn raise(&mut self);

    /// Minimize (iconify) the window
    fn minimize(&mut self);

    /// Maximize the window
    fn maximize(&mut self);

    /// Restore from minimized or maximized state
    fn restore(&mut self);

    /// Whether the window is minimized
    fn is_minimized(&self) -> bool;

    /// Whether the window is maximized
    fn is_maximized(&self) -> bool;

    /// Whether the user asked to close the window
    fn should_close(&self) -> bool;

    /// Request or cancel closing
    fn set_should_close(&mut self, should_close: bool);

    /// Process pending OS events and return the window-level ones
    ///
    /// Should be called once per frame. Events the wrapper has no use for
    /// (input, refresh, content scale) are dropped here.
    fn poll_events(&mut self) -> Vec<WindowEvent>;

    /// Platform window handle, if the window system is one `DriverHandle` knows
    fn driver_handle(&self) -> Option<DriverHandle>;
}

/// Display query collaborator
///
/// Read-only view of the connected displays. Indices are positions in the
/// current enumeration and can shift when monitors are plugged or unplugged,
/// so implementations re-enumerate on every call instead of caching.
///
/// Only [`display_count`](Self::display_count),
/// [`displays`](Self::displays) and [`display_mode`](Self::display_mode) are
/// required; the rest is derived from the snapshot.
pub trait DisplayQuery {
    /// Number of connected displays
    fn display_count(&mut self) -> usize;

    /// Usable-area snapshot for every connected display, in index order
    fn displays(&mut self) -> Vec<DisplayInfo>;

    /// Current video mode of a display
    fn display_mode(&mut self, index: usize) -> DisplayResult<DisplayMode>;

    /// Usable size of a display, excluding OS-reserved chrome
    ///
    /// Taskbars, docks and panels are subtracted. Fails with
    /// [`DisplayError::DisplayUnavailable`] for an index past the end.
    fn usable_size(&mut self, index: usize) -> DisplayResult<(u32, u32)> {
        self.display_info(index).map(|info| info.size)
    }

    /// Usable-area snapshot of one display
    fn display_info(&mut self, index: usize) -> DisplayResult<DisplayInfo> {
        let mut displays = self.displays();
        let count = displays.len();
        if index < count {
            Ok(displays.swap_remove(index))
        } else {
            Err(DisplayError::DisplayUnavailable { index, count })
        }
    }

    /// Best-effort display currently hosting a window with the given geometry
    ///
    /// Picks the display whose usable area contains the window's center.
    /// `None` when the center is off every display, e.g. a window dragged
    /// mostly off-screen.
    fn display_index_of(&mut self, geometry: WindowGeometry) -> Option<usize> {
        let center = geometry.center();
        self.displays()
            .iter()
            .find(|display| display.contains(center))
            .map(|display| display.index)
    }
}
