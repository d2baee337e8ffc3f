//! Power state queries
//!
//! A [`PowerInfo`] is a snapshot of the machine's battery state. Queries are
//! advisory and never fail: anything that cannot be read comes back as
//! unknown.

mod sysfs;

pub use sysfs::{SysfsPowerSource, DEFAULT_POWER_SUPPLY_ROOT};

/// Battery / supply state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PowerState {
    /// Cannot determine power status
    #[default]
    Unknown,
    /// Not plugged in, running on the battery
    OnBattery,
    /// Plugged in, no battery available
    NoBattery,
    /// Plugged in, charging battery
    Charging,
    /// Plugged in, battery charged
    Charged,
}

impl PowerState {
    /// Translate a native state code (0 = unknown .. 4 = charged)
    pub const fn from_native(code: i32) -> Self {
        match code {
            1 => Self::OnBattery,
            2 => Self::NoBattery,
            3 => Self::Charging,
            4 => Self::Charged,
            _ => Self::Unknown,
        }
    }

    /// Native state code
    pub const fn to_native(self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::OnBattery => 1,
            Self::NoBattery => 2,
            Self::Charging => 3,
            Self::Charged => 4,
        }
    }

    /// Whether external power is connected
    pub const fn is_plugged_in(self) -> bool {
        matches!(self, Self::NoBattery | Self::Charging | Self::Charged)
    }
}

/// Snapshot of the power supply
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PowerInfo {
    /// Supply state
    pub state: PowerState,
    /// Seconds of battery life left, when known
    pub seconds: Option<u64>,
    /// Charge left in `0.0..=1.0`, when known
    pub percentage: Option<f32>,
}

impl PowerInfo {
    /// Build from native values, where `-1` means "unknown" for seconds and percent
    pub fn from_native(state: i32, seconds: i32, percent: i32) -> Self {
        Self {
            state: PowerState::from_native(state),
            seconds: u64::try_from(seconds).ok(),
            percentage: (percent >= 0).then(|| percent.min(100) as f32 / 100.0),
        }
    }
}

/// Something that can report the current power state
pub trait PowerSource {
    /// Take a fresh snapshot
    fn query(&self) -> PowerInfo;
}
