//! Value types shared by the window wrapper, its backends and the mode policy

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{DisplayError, DisplayResult};

/// How a window is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// Normal decorated window; geometry is whatever the user or app chose
    #[default]
    Windowed,
    /// Exclusive, OS-managed fullscreen on one display
    Fullscreen,
    /// Normal window placed to cover one display's usable area, minus the one-pixel inset
    FullscreenWindowed,
}

/// Position and size of a window
///
/// Position is signed because secondary displays may sit left of or above the
/// primary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowGeometry {
    /// Top-left corner in screen coordinates
    pub position: (i32, i32),
    /// Client area size in pixels
    pub size: (u32, u32),
}

impl WindowGeometry {
    /// Create a geometry from a position and size
    pub const fn new(position: (i32, i32), size: (u32, u32)) -> Self {
        Self { position, size }
    }

    /// Center point, used to decide which display hosts a window
    pub fn center(&self) -> (i64, i64) {
        (
            i64::from(self.position.0) + i64::from(self.size.0 / 2),
            i64::from(self.position.1) + i64::from(self.size.1 / 2),
        )
    }
}

/// Snapshot of one physical display's usable desktop area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayInfo {
    /// Index in the display query's enumeration order
    pub index: usize,
    /// Human-readable monitor name, empty when the OS reports none
    pub name: String,
    /// Top-left corner of the usable area in screen coordinates
    pub position: (i32, i32),
    /// Usable size in pixels, excluding OS chrome such as taskbars
    pub size: (u32, u32),
}

impl DisplayInfo {
    /// Whether a screen-space point falls inside this display's usable area
    pub fn contains(&self, point: (i64, i64)) -> bool {
        let (x, y) = (i64::from(self.position.0), i64::from(self.position.1));
        point.0 >= x
            && point.1 >= y
            && point.0 < x + i64::from(self.size.0)
            && point.1 < y + i64::from(self.size.1)
    }
}

/// Current video mode of a display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMode {
    /// Horizontal resolution in pixels
    pub width: u32,
    /// Vertical resolution in pixels
    pub height: u32,
    /// Refresh rate in Hz
    pub refresh_rate: u32,
    /// Sum of the red, green and blue channel depths
    pub bits_per_pixel: u32,
}

/// Window frame thickness on each side, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderSize {
    /// Title bar and top edge
    pub top: u32,
    /// Left edge
    pub left: u32,
    /// Bottom edge
    pub bottom: u32,
    /// Right edge
    pub right: u32,
}

/// Window-level notifications surfaced by a backend when polling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// Client area was resized by the OS or the user
    Resized(u32, u32),
    /// Window was moved
    Moved(i32, i32),
    /// Window gained (`true`) or lost input focus
    FocusChanged(bool),
    /// User asked to close the window
    CloseRequested,
}

/// Window icon in a fixed 8-bit RGBA layout
///
/// Pixels are row-major, four bytes per pixel in R, G, B, A order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl IconImage {
    /// Channel count of the fixed pixel layout
    pub const CHANNELS: usize = 4;

    /// Create an icon from raw RGBA bytes, checking the buffer length against the dimensions
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> DisplayResult<Self> {
        let expected = width as usize * height as usize * Self::CHANNELS;
        if rgba.len() != expected || expected == 0 {
            return Err(DisplayError::InvalidIcon {
                width,
                height,
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self { width, height, rgba })
    }

    /// Decode an icon from an image file (PNG)
    pub fn load(path: impl AsRef<Path>) -> DisplayResult<Self> {
        let image = image::open(path)?.into_rgba8();
        Ok(image.into())
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Pixels packed one per `u32`, with the bytes in memory in R, G, B, A order
    pub fn packed_pixels(&self) -> Vec<u32> {
        self.rgba
            .chunks_exact(Self::CHANNELS)
            .map(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]]))
            .collect()
    }
}

impl From<image::RgbaImage> for IconImage {
    fn from(image: image::RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            rgba: image.into_raw(),
        }
    }
}
