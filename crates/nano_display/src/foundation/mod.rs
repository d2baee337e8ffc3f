//! Foundation module - Core utilities shared by every subsystem
//!
//! Currently this is only the logging setup; window, power and VR code log
//! through the `log` facade re-exported here.

pub mod logging;
