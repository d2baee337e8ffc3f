//! VR compositor settings
//!
//! Only the compositor timing mode is modeled. It is chosen once when the VR
//! session is configured and otherwise inert.

mod timing_mode;

pub use timing_mode::{TimingMode, TimingModeError};
