//! Window management using GLFW
//!
//! `GlfwWindow` implements [`WindowBackend`] over a GLFW window and
//! `GlfwDisplays` implements [`DisplayQuery`] over GLFW's monitor list. Both
//! must live on the main thread.

use raw_window_handle::HasWindowHandle;

use super::backend::{DisplayQuery, WindowBackend};
use super::driver::DriverHandle;
use super::error::{DisplayError, DisplayResult};
use super::handle::Window;
use super::types::{BorderSize, DisplayInfo, DisplayMode, IconImage, WindowEvent, WindowGeometry, WindowMode};
use crate::config::WindowConfig;

/// GLFW window wrapper with proper resource management
pub struct GlfwWindow {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    title: String,
    size_limits: (Option<(u32, u32)>, Option<(u32, u32)>),
    /// Where to put the window when it leaves exclusive fullscreen
    windowed_geometry: WindowGeometry,
    /// Monitor used by the last switch to exclusive fullscreen
    fullscreen_display: usize,
    fullscreen_mode: Option<DisplayMode>,
}

impl GlfwWindow {
    /// Initialise GLFW and create a window from `config`
    ///
    /// Returns the backend together with a display query sharing the same
    /// GLFW context. Any failure here is fatal: no window is left behind.
    pub fn create(config: &WindowConfig) -> DisplayResult<(Self, GlfwDisplays)> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| DisplayError::ConstructionFailed(format!("GLFW initialization failed: {e:?}")))?;

        // No client API: rendering is someone else's job
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        glfw.window_hint(glfw::WindowHint::Resizable(config.resizable));
        glfw.window_hint(glfw::WindowHint::Visible(config.visible));
        glfw.window_hint(glfw::WindowHint::ScaleToMonitor(true));

        let (width, height) = config.size;
        let (mut window, events) = glfw
            .create_window(width, height, &config.title, glfw::WindowMode::Windowed)
            .ok_or_else(|| {
                DisplayError::ConstructionFailed(format!(
                    "could not create {width}x{height} window '{}'",
                    config.title
                ))
            })?;

        window.set_pos(config.position.0, config.position.1);
        window.set_size_polling(true);
        window.set_pos_polling(true);
        window.set_focus_polling(true);
        window.set_close_polling(true);

        log::info!(
            "created window '{}' at {:?} with size {}x{}",
            config.title,
            config.position,
            width,
            height
        );

        let displays = GlfwDisplays::new(glfw.clone());
        let backend = Self {
            glfw,
            window,
            events,
            title: config.title.clone(),
            size_limits: (None, None),
            windowed_geometry: WindowGeometry::new(config.position, config.size),
            fullscreen_display: 0,
            fullscreen_mode: None,
        };
        Ok((backend, displays))
    }

    /// Create the window, wrap it and apply the configured initial mode
    pub fn open(config: &WindowConfig) -> DisplayResult<(Window, GlfwDisplays)> {
        let (backend, mut displays) = Self::create(config)?;
        let mut window = Window::new(Box::new(backend));
        if config.mode != WindowMode::Windowed {
            window.set_mode(&mut displays, config.mode, config.display_index)?;
        }
        Ok((window, displays))
    }

    /// Put the window in exclusive fullscreen on `display`
    ///
    /// Uses the requested fullscreen mode when there is one, otherwise the
    /// monitor's current video mode.
    fn enter_exclusive(&mut self, display: usize) -> DisplayResult<()> {
        let requested = self.fullscreen_mode;
        let window = &mut self.window;
        self.glfw.with_connected_monitors(|_, monitors| {
            let monitor = monitors.get(display).ok_or(DisplayError::DisplayUnavailable {
                index: display,
                count: monitors.len(),
            })?;
            let (width, height, refresh_rate) = match requested {
                Some(mode) => (mode.width, mode.height, mode.refresh_rate),
                None => {
                    let mode = monitor.get_video_mode().ok_or_else(|| {
                        DisplayError::WindowOperationFailed(format!("display {display} reports no video mode"))
                    })?;
                    (mode.width, mode.height, mode.refresh_rate)
                }
            };
            log::debug!("exclusive fullscreen on display {} at {}x{}@{}", display, width, height, refresh_rate);
            window.set_monitor(
                glfw::WindowMode::FullScreen(monitor),
                0,
                0,
                width,
                height,
                (refresh_rate > 0).then_some(refresh_rate),
            );
            Ok(())
        })
    }
}

fn to_native(value: u32, what: &str) -> DisplayResult<i32> {
    i32::try_from(value)
        .map_err(|_| DisplayError::WindowOperationFailed(format!("{what} {value} out of range")))
}

fn from_native(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

impl WindowBackend for GlfwWindow {
    fn get_position(&self) -> (i32, i32) {
        self.window.get_pos()
    }

    fn set_position(&mut self, x: i32, y: i32) -> DisplayResult<()> {
        if self.is_exclusive_fullscreen() {
            return Err(DisplayError::WindowOperationFailed(
                "cannot move a window in exclusive fullscreen".to_string(),
            ));
        }
        self.window.set_pos(x, y);
        Ok(())
    }

    fn get_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (from_native(width), from_native(height))
    }

    fn set_size(&mut self, width: u32, height: u32) -> DisplayResult<()> {
        let native = (to_native(width, "width")?, to_native(height, "height")?);
        self.window.set_size(native.0, native.1);
        Ok(())
    }

    fn is_exclusive_fullscreen(&self) -> bool {
        self.window
            .with_window_mode(|mode| matches!(mode, glfw::WindowMode::FullScreen(_)))
    }

    fn set_exclusive_fullscreen(&mut self, fullscreen: bool, display: usize) -> DisplayResult<()> {
        let currently = self.is_exclusive_fullscreen();
        if !fullscreen {
            if currently {
                let WindowGeometry { position, size } = self.windowed_geometry;
                self.window
                    .set_monitor(glfw::WindowMode::Windowed, position.0, position.1, size.0, size.1, None);
            }
            return Ok(());
        }

        if !currently {
            self.windowed_geometry = self.geometry();
        }
        self.enter_exclusive(display)?;
        self.fullscreen_display = display;
        Ok(())
    }

    fn get_title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
        self.title = title.to_string();
    }

    fn is_visible(&self) -> bool {
        self.window.is_visible()
    }

    fn set_visible(&mut self, visible: bool) {
        if visible {
            self.window.show();
        } else {
            self.window.hide();
        }
    }

    fn is_resizable(&self) -> bool {
        self.window.is_resizable()
    }

    fn set_resizable(&mut self, resizable: bool) {
        self.window.set_resizable(resizable);
    }

    fn is_bordered(&self) -> bool {
        self.window.is_decorated()
    }

    fn set_bordered(&mut self, bordered: bool) {
        self.window.set_decorated(bordered);
    }

    fn get_opacity(&self) -> f32 {
        self.window.get_opacity()
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.window.set_opacity(opacity);
    }

    fn border_size(&self) -> BorderSize {
        let (left, top, right, bottom) = self.window.get_frame_size();
        BorderSize {
            top: from_native(top),
            left: from_native(left),
            bottom: from_native(bottom),
            right: from_native(right),
        }
    }

    fn set_size_limits(&mut self, minimum: Option<(u32, u32)>, maximum: Option<(u32, u32)>) {
        self.size_limits = (minimum, maximum);
        self.window.set_size_limits(
            minimum.map(|(w, _)| w),
            minimum.map(|(_, h)| h),
            maximum.map(|(w, _)| w),
            maximum.map(|(_, h)| h),
        );
    }

    fn size_limits(&self) -> (Option<(u32, u32)>, Option<(u32, u32)>) {
        self.size_limits
    }

    fn set_icon(&mut self, icon: &IconImage) -> DisplayResult<()> {
        self.window.set_icon_from_pixels(vec![glfw::PixelImage {
            width: icon.width(),
            height: icon.height(),
            pixels: icon.packed_pixels(),
        }]);
        Ok(())
    }

    fn is_input_grabbed(&self) -> bool {
        matches!(self.window.get_cursor_mode(), glfw::CursorMode::Disabled)
    }

    fn set_input_grab(&mut self, grabbed: bool) {
        let mode = if grabbed {
            glfw::CursorMode::Disabled
        } else {
            glfw::CursorMode::Normal
        };
        self.window.set_cursor_mode(mode);
    }

    fn fullscreen_display_mode(&self) -> Option<DisplayMode> {
        self.fullscreen_mode
    }

    fn set_fullscreen_display_mode(&mut self, mode: DisplayMode) -> DisplayResult<()> {
        self.fullscreen_mode = Some(mode);
        if self.is_exclusive_fullscreen() {
            self.enter_exclusive(self.fullscreen_display)?;
        }
        Ok(())
    }

    fn focus(&mut self) {
        self.window.focus();
    }

    fn has_input_focus(&self) -> bool {
        self.window.is_focused()
    }

    fn has_mouse_focus(&self) -> bool {
        self.window.is_hovered()
    }

    fn raise(&mut self) {
        // GLFW raises as part of focusing
        self.window.show();
        self.window.focus();
    }

    fn minimize(&mut self) {
        self.window.iconify();
    }

    fn maximize(&mut self) {
        self.window.maximize();
    }

    fn restore(&mut self) {
        self.window.restore();
    }

    fn is_minimized(&self) -> bool {
        self.window.is_iconified()
    }

    fn is_maximized(&self) -> bool {
        self.window.is_maximized()
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn poll_events(&mut self) -> Vec<WindowEvent> {
        self.glfw.poll_events();
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| match event {
                glfw::WindowEvent::Size(width, height) => {
                    Some(WindowEvent::Resized(from_native(width), from_native(height)))
                }
                glfw::WindowEvent::Pos(x, y) => Some(WindowEvent::Moved(x, y)),
                glfw::WindowEvent::Focus(focused) => Some(WindowEvent::FocusChanged(focused)),
                glfw::WindowEvent::Close => Some(WindowEvent::CloseRequested),
                _ => None,
            })
            .collect()
    }

    fn driver_handle(&self) -> Option<DriverHandle> {
        match self.window.window_handle() {
            Ok(handle) => DriverHandle::from_raw(handle.as_raw()),
            Err(err) => {
                log::warn!("window handle unavailable: {}", err);
                None
            }
        }
    }
}

/// Display query over GLFW's connected monitors
///
/// Monitors are re-enumerated on every call; nothing is cached.
pub struct GlfwDisplays {
    glfw: glfw::Glfw,
}

impl GlfwDisplays {
    fn new(glfw: glfw::Glfw) -> Self {
        Self { glfw }
    }
}

impl DisplayQuery for GlfwDisplays {
    fn display_count(&mut self) -> usize {
        self.glfw.with_connected_monitors(|_, monitors| monitors.len())
    }

    fn displays(&mut self) -> Vec<DisplayInfo> {
        self.glfw.with_connected_monitors(|_, monitors| {
            monitors
                .iter()
                .enumerate()
                .map(|(index, monitor)| {
                    let (x, y, width, height) = monitor.get_workarea();
                    DisplayInfo {
                        index,
                        name: monitor.get_name().unwrap_or_default(),
                        position: (x, y),
                        size: (from_native(width), from_native(height)),
                    }
                })
                .collect()
        })
    }

    fn display_mode(&mut self, index: usize) -> DisplayResult<DisplayMode> {
        self.glfw.with_connected_monitors(|_, monitors| {
            let monitor = monitors.get(index).ok_or(DisplayError::DisplayUnavailable {
                index,
                count: monitors.len(),
            })?;
            let mode = monitor.get_video_mode().ok_or_else(|| {
                DisplayError::WindowOperationFailed(format!("display {index} reports no video mode"))
            })?;
            Ok(DisplayMode {
                width: mode.width,
                height: mode.height,
                refresh_rate: mode.refresh_rate,
                bits_per_pixel: mode.red_bits + mode.green_bits + mode.blue_bits,
            })
        })
    }
}
