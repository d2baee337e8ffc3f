//! In-memory backends for tests

use std::cell::RefCell;
use std::rc::Rc;

use super::backend::{DisplayQuery, WindowBackend};
use super::driver::DriverHandle;
use super::error::{DisplayError, DisplayResult};
use super::types::{BorderSize, DisplayInfo, DisplayMode, IconImage, WindowEvent};

/// Call log shared between a test and the backend it handed to a `Window`
pub type CallLog = Rc<RefCell<Vec<String>>>;

/// Window backend that stores state in fields and records every mutation
pub struct MockBackend {
    pub position: (i32, i32),
    pub size: (u32, u32),
    pub exclusive: Option<usize>,
    pub title: String,
    pub visible: bool,
    pub resizable: bool,
    pub bordered: bool,
    pub opacity: f32,
    pub limits: (Option<(u32, u32)>, Option<(u32, u32)>),
    pub icon: Option<IconImage>,
    pub grabbed: bool,
    pub fullscreen_mode: Option<DisplayMode>,
    pub focused: bool,
    pub minimized: bool,
    pub maximized: bool,
    pub close_requested: bool,
    pub pending_events: Vec<WindowEvent>,
    pub reject_geometry: bool,
    pub calls: CallLog,
}

impl MockBackend {
    pub fn new(position: (i32, i32), size: (u32, u32)) -> Self {
        Self {
            position,
            size,
            exclusive: None,
            title: "mock".to_string(),
            visible: true,
            resizable: true,
            bordered: true,
            opacity: 1.0,
            limits: (None, None),
            icon: None,
            grabbed: false,
            fullscreen_mode: None,
            focused: false,
            minimized: false,
            maximized: false,
            close_requested: false,
            pending_events: Vec::new(),
            reject_geometry: false,
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl WindowBackend for MockBackend {
    fn get_position(&self) -> (i32, i32) {
        self.position
    }

    fn set_position(&mut self, x: i32, y: i32) -> DisplayResult<()> {
        if self.reject_geometry {
            return Err(DisplayError::WindowOperationFailed("position rejected".to_string()));
        }
        self.record(format!("set_position({x}, {y})"));
        self.position = (x, y);
        Ok(())
    }

    fn get_size(&self) -> (u32, u32) {
        self.size
    }

    fn set_size(&mut self, width: u32, height: u32) -> DisplayResult<()> {
        if self.reject_geometry {
            return Err(DisplayError::WindowOperationFailed("size rejected".to_string()));
        }
        self.record(format!("set_size({width}, {height})"));
        self.size = (width, height);
        Ok(())
    }

    fn is_exclusive_fullscreen(&self) -> bool {
        self.exclusive.is_some()
    }

    fn set_exclusive_fullscreen(&mut self, fullscreen: bool, display: usize) -> DisplayResult<()> {
        self.record(format!("set_exclusive_fullscreen({fullscreen}, {display})"));
        self.exclusive = fullscreen.then_some(display);
        Ok(())
    }

    fn get_title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_resizable(&self) -> bool {
        self.resizable
    }

    fn set_resizable(&mut self, resizable: bool) {
        self.resizable = resizable;
    }

    fn is_bordered(&self) -> bool {
        self.bordered
    }

    fn set_bordered(&mut self, bordered: bool) {
        self.bordered = bordered;
    }

    fn get_opacity(&self) -> f32 {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    fn border_size(&self) -> BorderSize {
        if self.bordered {
            BorderSize { top: 30, left: 1, bottom: 1, right: 1 }
        } else {
            BorderSize::default()
        }
    }

    fn set_size_limits(&mut self, minimum: Option<(u32, u32)>, maximum: Option<(u32, u32)>) {
        self.limits = (minimum, maximum);
        if let Some((w, h)) = minimum {
            self.size = (self.size.0.max(w), self.size.1.max(h));
        }
        if let Some((w, h)) = maximum {
            self.size = (self.size.0.min(w), self.size.1.min(h));
        }
    }

    fn size_limits(&self) -> (Option<(u32, u32)>, Option<(u32, u32)>) {
        self.limits
    }

    fn set_icon(&mut self, icon: &IconImage) -> DisplayResult<()> {
        self.icon = Some(icon.clone());
        Ok(())
    }

    fn is_input_grabbed(&self) -> bool {
        self.grabbed
    }

    fn set_input_grab(&mut self, grabbed: bool) {
        self.grabbed = grabbed;
    }

    fn fullscreen_display_mode(&self) -> Option<DisplayMode> {
        self.fullscreen_mode
    }

    fn set_fullscreen_display_mode(&mut self, mode: DisplayMode) -> DisplayResult<()> {
        self.record(format!("set_fullscreen_display_mode({}x{})", mode.width, mode.height));
        self.fullscreen_mode = Some(mode);
        if self.exclusive.is_some() {
            self.size = (mode.width, mode.height);
        }
        Ok(())
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn has_input_focus(&self) -> bool {
        self.focused
    }

    fn has_mouse_focus(&self) -> bool {
        false
    }

    fn raise(&mut self) {
        self.record("raise".to_string());
    }

    fn minimize(&mut self) {
        self.minimized = true;
        self.maximized = false;
    }

    fn maximize(&mut self) {
        self.maximized = true;
        self.minimized = false;
    }

    fn restore(&mut self) {
        self.minimized = false;
        self.maximized = false;
    }

    fn is_minimized(&self) -> bool {
        self.minimized
    }

    fn is_maximized(&self) -> bool {
        self.maximized
    }

    fn should_close(&self) -> bool {
        self.close_requested
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.close_requested = should_close;
    }

    fn poll_events(&mut self) -> Vec<WindowEvent> {
        let events = std::mem::take(&mut self.pending_events);
        for event in &events {
            if let WindowEvent::Resized(width, height) = *event {
                self.size = (width, height);
            }
        }
        events
    }

    fn driver_handle(&self) -> Option<DriverHandle> {
        Some(DriverHandle::Xlib { window: 42 })
    }
}

/// Fixed set of displays laid out left to right
pub struct MockDisplays {
    pub displays: Vec<DisplayInfo>,
}

impl MockDisplays {
    pub fn new(sizes: &[(u32, u32)]) -> Self {
        let mut x = 0;
        let displays = sizes
            .iter()
            .enumerate()
            .map(|(index, &size)| {
                let info = DisplayInfo {
                    index,
                    name: format!("mock-{index}"),
                    position: (x, 0),
                    size,
                };
                x += size.0 as i32;
                info
            })
            .collect();
        Self { displays }
    }
}

impl DisplayQuery for MockDisplays {
    fn display_count(&mut self) -> usize {
        self.displays.len()
    }

    fn displays(&mut self) -> Vec<DisplayInfo> {
        self.displays.clone()
    }

    fn display_mode(&mut self, index: usize) -> DisplayResult<DisplayMode> {
        let info = self.display_info(index)?;
        Ok(DisplayMode {
            width: info.size.0,
            height: info.size.1,
            refresh_rate: 60,
            bits_per_pixel: 24,
        })
    }
}
