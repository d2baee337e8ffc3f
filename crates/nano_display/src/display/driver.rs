//! Platform window handles
//!
//! A single tagged union over the native handles the supported window systems
//! hand out. Which variant a backend returns is fixed by the platform it was
//! built for; callers match on the variant they know how to use.

use raw_window_handle::RawWindowHandle;

/// Native window handle, with pointers carried as plain integers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverHandle {
    /// X11 window through Xlib
    Xlib {
        /// X11 `Window` id
        window: u64,
    },
    /// X11 window through XCB
    Xcb {
        /// `xcb_window_t` id
        window: u32,
    },
    /// Wayland surface
    Wayland {
        /// `wl_surface*`
        surface: usize,
    },
    /// Win32 window
    Win32 {
        /// `HWND`
        hwnd: isize,
        /// `HINSTANCE` of the module that created the window, when known
        hinstance: Option<isize>,
    },
    /// macOS AppKit view
    AppKit {
        /// `NSView*`
        ns_view: usize,
    },
    /// Android native window
    AndroidNdk {
        /// `ANativeWindow*`
        native_window: usize,
    },
}

impl DriverHandle {
    /// Translate a raw-window-handle value; `None` for window systems not listed above
    pub fn from_raw(raw: RawWindowHandle) -> Option<Self> {
        let handle = match raw {
            RawWindowHandle::Xlib(h) => Self::Xlib {
                window: u64::from(h.window),
            },
            RawWindowHandle::Xcb(h) => Self::Xcb {
                window: h.window.get(),
            },
            RawWindowHandle::Wayland(h) => Self::Wayland {
                surface: h.surface.as_ptr() as usize,
            },
            RawWindowHandle::Win32(h) => Self::Win32 {
                hwnd: h.hwnd.get(),
                hinstance: h.hinstance.map(std::num::NonZeroIsize::get),
            },
            RawWindowHandle::AppKit(h) => Self::AppKit {
                ns_view: h.ns_view.as_ptr() as usize,
            },
            RawWindowHandle::AndroidNdk(h) => Self::AndroidNdk {
                native_window: h.a_native_window.as_ptr() as usize,
            },
            other => {
                log::debug!("unsupported window handle kind: {:?}", other);
                return None;
            }
        };
        Some(handle)
    }
}
