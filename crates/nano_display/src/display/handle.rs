//! Owning window wrapper
//!
//! `Window` owns a boxed [`WindowBackend`] and the list of resize observers.
//! Most methods forward straight to the backend; the ones that can change the
//! client size (`set_size`, size limits, mode changes, polled OS resizes)
//! notify observers once the change has been applied.
//!
//! The window holds no reference to the display system. Mode operations take
//! the [`DisplayQuery`] they need as an argument, and the current mode is
//! always derived from the backend rather than remembered.

use super::backend::{DisplayQuery, WindowBackend};
use super::driver::DriverHandle;
use super::error::{DisplayError, DisplayResult};
use super::policy;
use super::signal::ResizeSignal;
use super::types::{BorderSize, DisplayMode, IconImage, WindowEvent, WindowGeometry, WindowMode};

/// Application-facing window
pub struct Window {
    backend: Box<dyn WindowBackend>,
    on_resize: ResizeSignal,
}

impl Window {
    /// Wrap an already-created backend
    pub fn new(backend: Box<dyn WindowBackend>) -> Self {
        Self {
            backend,
            on_resize: ResizeSignal::new(),
        }
    }

    /// Resize observers; connect here to hear about every size change
    pub fn on_resize(&mut self) -> &mut ResizeSignal {
        &mut self.on_resize
    }

    fn notify_resize(&mut self) {
        let size = self.backend.get_size();
        self.on_resize.emit(size);
    }

    // ---- mode policy ----

    /// Place the window to cover a display, minus the one-pixel inset
    ///
    /// `display` defaults to the display hosting the window, or display 0.
    /// Emits one resize notification after the size change.
    pub fn enter_fullscreen_windowed<D>(&mut self, displays: &mut D, display: Option<usize>) -> DisplayResult<()>
    where
        D: DisplayQuery + ?Sized,
    {
        policy::place_fullscreen_windowed(self.backend.as_mut(), displays, display)?;
        self.notify_resize();
        Ok(())
    }

    /// Switch presentation mode
    ///
    /// Emits exactly one resize notification whichever mode is chosen, even
    /// when the size did not change, so consumers can recompute viewports.
    pub fn set_mode<D>(&mut self, displays: &mut D, mode: WindowMode, display: Option<usize>) -> DisplayResult<()>
    where
        D: DisplayQuery + ?Sized,
    {
        policy::apply_mode(self.backend.as_mut(), displays, mode, display)?;
        self.notify_resize();
        Ok(())
    }

    /// Current presentation mode, derived from the OS flag and geometry
    pub fn mode<D>(&self, displays: &mut D) -> WindowMode
    where
        D: DisplayQuery + ?Sized,
    {
        policy::infer_mode(self.backend.as_ref(), displays)
    }

    /// Index of the display hosting the window, or 0 when none does
    pub fn display_index<D>(&self, displays: &mut D) -> usize
    where
        D: DisplayQuery + ?Sized,
    {
        policy::resolve_display(self.backend.as_ref(), displays, None)
    }

    /// Video mode of the display hosting the window
    pub fn display_mode<D>(&self, displays: &mut D) -> DisplayResult<DisplayMode>
    where
        D: DisplayQuery + ?Sized,
    {
        let index = self.display_index(displays);
        displays.display_mode(index)
    }

    /// Video mode requested for exclusive fullscreen, if any
    pub fn fullscreen_display_mode(&self) -> Option<DisplayMode> {
        self.backend.fullscreen_display_mode()
    }

    /// Choose the video mode used while in exclusive fullscreen
    ///
    /// When the window is already exclusive the mode switches at once and
    /// observers are notified of the new size. Otherwise the mode is kept for
    /// the next switch to [`WindowMode::Fullscreen`] and nobody is notified.
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> DisplayResult<()> {
        if mode.width == 0 || mode.height == 0 {
            return Err(DisplayError::WindowOperationFailed(format!(
                "display mode {}x{} has no area",
                mode.width, mode.height
            )));
        }
        self.backend.set_fullscreen_display_mode(mode)?;
        if self.backend.is_exclusive_fullscreen() {
            self.notify_resize();
        }
        Ok(())
    }

    // ---- geometry ----

    /// Window position on screen
    pub fn position(&self) -> (i32, i32) {
        self.backend.get_position()
    }

    /// Move the window
    pub fn set_position(&mut self, x: i32, y: i32) -> DisplayResult<()> {
        self.backend.set_position(x, y)
    }

    /// Client area size in pixels
    pub fn size(&self) -> (u32, u32) {
        self.backend.get_size()
    }

    /// Resize the client area and notify observers
    pub fn set_size(&mut self, width: u32, height: u32) -> DisplayResult<()> {
        self.backend.set_size(width, height)?;
        self.notify_resize();
        Ok(())
    }

    /// Position and size together
    pub fn geometry(&self) -> WindowGeometry {
        self.backend.geometry()
    }

    /// Smallest size the user may resize to
    pub fn minimum_size(&self) -> Option<(u32, u32)> {
        self.backend.size_limits().0
    }

    /// Set the smallest allowed size and notify observers
    pub fn set_minimum_size(&mut self, width: u32, height: u32) {
        let (_, maximum) = self.backend.size_limits();
        self.backend.set_size_limits(Some((width, height)), maximum);
        self.notify_resize();
    }

    /// Largest size the user may resize to
    pub fn maximum_size(&self) -> Option<(u32, u32)> {
        self.backend.size_limits().1
    }

    /// Set the largest allowed size and notify observers
    pub fn set_maximum_size(&mut self, width: u32, height: u32) {
        let (minimum, _) = self.backend.size_limits();
        self.backend.set_size_limits(minimum, Some((width, height)));
        self.notify_resize();
    }

    /// Frame thickness (top, left, bottom, right)
    pub fn border_size(&self) -> BorderSize {
        self.backend.border_size()
    }

    // ---- appearance ----

    /// Window title
    pub fn title(&self) -> String {
        self.backend.get_title()
    }

    /// Replace the window title
    pub fn set_title(&mut self, title: &str) {
        self.backend.set_title(title);
    }

    /// Whether the window is shown
    pub fn visible(&self) -> bool {
        self.backend.is_visible()
    }

    /// Show or hide the window
    pub fn set_visible(&mut self, visible: bool) {
        self.backend.set_visible(visible);
    }

    /// Whether the user can resize the window
    pub fn resizable(&self) -> bool {
        self.backend.is_resizable()
    }

    /// Allow or forbid user resizing
    pub fn set_resizable(&mut self, resizable: bool) {
        self.backend.set_resizable(resizable);
    }

    /// Whether the window has OS decorations
    pub fn bordered(&self) -> bool {
        self.backend.is_bordered()
    }

    /// Add or remove OS decorations
    pub fn set_bordered(&mut self, bordered: bool) {
        self.backend.set_bordered(bordered);
    }

    /// Whole-window opacity
    pub fn opacity(&self) -> f32 {
        self.backend.get_opacity()
    }

    /// Set whole-window opacity, clamped to `0.0..=1.0`
    pub fn set_opacity(&mut self, opacity: f32) {
        self.backend.set_opacity(opacity.clamp(0.0, 1.0));
    }

    /// Replace the window icon
    pub fn set_icon(&mut self, icon: &IconImage) -> DisplayResult<()> {
        self.backend.set_icon(icon)
    }

    // ---- focus and state ----

    /// Whether the cursor is confined to the window
    pub fn input_grab(&self) -> bool {
        self.backend.is_input_grabbed()
    }

    /// Confine the cursor to the window, or release it
    pub fn set_input_grab(&mut self, grabbed: bool) {
        self.backend.set_input_grab(grabbed);
    }

    /// Give the window input focus
    pub fn set_focus(&mut self) {
        self.backend.focus();
    }

    /// Bring the window above other windows
    pub fn bring_to_front(&mut self) {
        self.backend.raise();
    }

    /// Whether the window has input focus
    pub fn input_focus(&self) -> bool {
        self.backend.has_input_focus()
    }

    /// Whether the cursor is over the window
    pub fn mouse_focus(&self) -> bool {
        self.backend.has_mouse_focus()
    }

    /// Minimize the window
    pub fn minimize(&mut self) {
        self.backend.minimize();
    }

    /// Maximize the window
    pub fn maximize(&mut self) {
        self.backend.maximize();
    }

    /// Restore from minimized or maximized state
    pub fn restore(&mut self) {
        self.backend.restore();
    }

    /// Whether the window is minimized
    pub fn is_minimized(&self) -> bool {
        self.backend.is_minimized()
    }

    /// Whether the window is maximized
    pub fn is_maximized(&self) -> bool {
        self.backend.is_maximized()
    }

    /// Whether the user asked to close the window
    pub fn should_close(&self) -> bool {
        self.backend.should_close()
    }

    /// Request or cancel closing
    pub fn set_should_close(&mut self, should_close: bool) {
        self.backend.set_should_close(should_close);
    }

    // ---- events and native access ----

    /// Process pending OS events
    ///
    /// OS-originated resizes are forwarded to the resize observers before the
    /// events are returned.
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        let events = self.backend.poll_events();
        for event in &events {
            if let WindowEvent::Resized(width, height) = *event {
                self.on_resize.emit((width, height));
            }
        }
        events
    }

    /// Platform window handle
    pub fn driver_handle(&self) -> Option<DriverHandle> {
        self.backend.driver_handle()
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("geometry", &self.geometry())
            .field("exclusive_fullscreen", &self.backend.is_exclusive_fullscreen())
            .field("on_resize", &self.on_resize)
            .finish()
    }
}
