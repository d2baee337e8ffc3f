//! Compositor timing mode

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Who hands a submitted frame to the compositor after present
///
/// Discriminants are the OpenVR `EVRCompositorTimingMode` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum TimingMode {
    /// Runtime decides; the default
    #[default]
    Implicit = 0,
    /// Runtime performs the post-present handoff
    RuntimePerformsPostPresentHandoff = 1,
    /// Application calls the post-present handoff itself
    ApplicationPerformsPostPresentHandoff = 2,
}

/// A native code that is not a known timing mode
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown compositor timing mode code {0}")]
pub struct TimingModeError(pub u32);

impl TimingMode {
    /// All modes, in native code order
    pub const ALL: [Self; 3] = [
        Self::Implicit,
        Self::RuntimePerformsPostPresentHandoff,
        Self::ApplicationPerformsPostPresentHandoff,
    ];

    /// Native code passed to the VR runtime
    pub const fn to_native(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for TimingMode {
    type Error = TimingModeError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.to_native() == code)
            .ok_or(TimingModeError(code))
    }
}

impl From<TimingMode> for u32 {
    fn from(mode: TimingMode) -> Self {
        mode.to_native()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_codes() {
        assert_eq!(TimingMode::Implicit.to_native(), 0);
        assert_eq!(TimingMode::RuntimePerformsPostPresentHandoff.to_native(), 1);
        assert_eq!(TimingMode::ApplicationPerformsPostPresentHandoff.to_native(), 2);
    }

    #[test]
    fn test_from_native() {
        assert_eq!(
            TimingMode::try_from(2),
            Ok(TimingMode::ApplicationPerformsPostPresentHandoff)
        );
        assert_eq!(TimingMode::try_from(3), Err(TimingModeError(3)));
        assert_eq!(TimingMode::try_from(u32::MAX), Err(TimingModeError(u32::MAX)));
    }

    #[test]
    fn test_default_is_implicit() {
        assert_eq!(TimingMode::default(), TimingMode::Implicit);
    }
}
