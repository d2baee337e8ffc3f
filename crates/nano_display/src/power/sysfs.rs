//! Linux `/sys/class/power_supply` reader

use std::fs;
use std::path::{Path, PathBuf};

use super::{PowerInfo, PowerSource, PowerState};

/// Default location of the kernel's power supply class
pub const DEFAULT_POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

/// Power source backed by the kernel's power supply class directory
#[derive(Debug, Clone)]
pub struct SysfsPowerSource {
    root: PathBuf,
}

impl SysfsPowerSource {
    /// Read from a specific directory laid out like `/sys/class/power_supply`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory being read
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for SysfsPowerSource {
    fn default() -> Self {
        Self::new(DEFAULT_POWER_SUPPLY_ROOT)
    }
}

fn read_attr(supply: &Path, name: &str) -> Option<String> {
    fs::read_to_string(supply.join(name))
        .ok()
        .map(|value| value.trim().to_string())
}

fn read_number(supply: &Path, name: &str) -> Option<u64> {
    read_attr(supply, name)?.parse().ok()
}

/// Seconds left from energy (µWh / µW) or charge (µAh / µA) counters
fn seconds_remaining(supply: &Path) -> Option<u64> {
    let (left, rate) = match (read_number(supply, "energy_now"), read_number(supply, "power_now")) {
        (Some(energy), Some(power)) => (energy, power),
        _ => (read_number(supply, "charge_now")?, read_number(supply, "current_now")?),
    };
    (rate > 0).then(|| left * 3600 / rate)
}

fn battery_state(status: &str) -> PowerState {
    match status.to_ascii_lowercase().as_str() {
        "discharging" => PowerState::OnBattery,
        "charging" => PowerState::Charging,
        "full" | "not charging" => PowerState::Charged,
        _ => PowerState::Unknown,
    }
}

impl PowerSource for SysfsPowerSource {
    fn query(&self) -> PowerInfo {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("cannot read {}: {}", self.root.display(), err);
                return PowerInfo::default();
            }
        };

        let mut supplies: Vec<PathBuf> = entries.filter_map(Result::ok).map(|e| e.path()).collect();
        supplies.sort();

        let battery = supplies
            .iter()
            .filter(|supply| read_attr(supply, "type").as_deref() == Some("Battery"))
            .find(|supply| read_attr(supply, "present").as_deref() != Some("0"));

        let Some(battery) = battery else {
            log::debug!("no battery under {}", self.root.display());
            return PowerInfo {
                state: PowerState::NoBattery,
                ..PowerInfo::default()
            };
        };

        let state = read_attr(battery, "status").map_or(PowerState::Unknown, |s| battery_state(&s));
        let percentage = read_number(battery, "capacity").map(|pct| pct.min(100) as f32 / 100.0);
        let seconds = if state == PowerState::OnBattery {
            seconds_remaining(battery)
        } else {
            None
        };

        PowerInfo {
            state,
            seconds,
            percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::TempDir;

    struct FakeSysfs {
        root: TempDir,
    }

    impl FakeSysfs {
        fn new() -> Self {
            Self {
                root: tempfile::tempdir().unwrap(),
            }
        }

        fn supply(&self, name: &str, attrs: &[(&str, &str)]) {
            let dir = self.root.path().join(name);
            fs::create_dir_all(&dir).unwrap();
            for (attr, value) in attrs {
                fs::write(dir.join(attr), format!("{value}\n")).unwrap();
            }
        }

        fn query(&self) -> PowerInfo {
            SysfsPowerSource::new(self.root.path()).query()
        }
    }

    #[test]
    fn test_missing_root_is_unknown() {
        let source = SysfsPowerSource::new("/nonexistent/nano_display/power_supply");
        assert_eq!(source.query(), PowerInfo::default());
    }

    #[test]
    fn test_mains_only_is_no_battery() {
        let sysfs = FakeSysfs::new();
        sysfs.supply("AC", &[("type", "Mains"), ("online", "1")]);

        let info = sysfs.query();
        assert_eq!(info.state, PowerState::NoBattery);
        assert_eq!(info.seconds, None);
    }

    #[test]
    fn test_discharging_battery_from_energy() {
        let sysfs = FakeSysfs::new();
        sysfs.supply("AC", &[("type", "Mains"), ("online", "0")]);
        sysfs.supply(
            "BAT0",
            &[
                ("type", "Battery"),
                ("present", "1"),
                ("status", "Discharging"),
                ("capacity", "64"),
                ("energy_now", "30000000"),
                ("power_now", "15000000"),
            ],
        );

        let info = sysfs.query();
        assert_eq!(info.state, PowerState::OnBattery);
        assert_eq!(info.seconds, Some(7200));
        assert_relative_eq!(info.percentage.unwrap(), 0.64);
    }

    #[test]
    fn test_discharging_battery_from_charge() {
        let sysfs = FakeSysfs::new();
        sysfs.supply(
            "BAT1",
            &[
                ("type", "Battery"),
                ("status", "Discharging"),
                ("charge_now", "2000000"),
                ("current_now", "1000000"),
            ],
        );

        let info = sysfs.query();
        assert_eq!(info.seconds, Some(7200));
        assert_eq!(info.percentage, None);
    }

    #[test]
    fn test_charging_and_full() {
        let charging = FakeSysfs::new();
        charging.supply("BAT0", &[("type", "Battery"), ("status", "Charging"), ("capacity", "40")]);
        let info = charging.query();
        assert_eq!(info.state, PowerState::Charging);
        assert_eq!(info.seconds, None);

        let full = FakeSysfs::new();
        full.supply("BAT0", &[("type", "Battery"), ("status", "Full"), ("capacity", "100")]);
        assert_eq!(full.query().state, PowerState::Charged);
    }

    #[test]
    fn test_absent_battery_is_skipped() {
        let sysfs = FakeSysfs::new();
        sysfs.supply("BAT0", &[("type", "Battery"), ("present", "0"), ("status", "Unknown")]);

        assert_eq!(sysfs.query().state, PowerState::NoBattery);
    }

    #[test]
    fn test_zero_rate_has_no_estimate() {
        let sysfs = FakeSysfs::new();
        sysfs.supply(
            "BAT0",
            &[
                ("type", "Battery"),
                ("status", "Discharging"),
                ("energy_now", "30000000"),
                ("power_now", "0"),
            ],
        );

        assert_eq!(sysfs.query().seconds, None);
    }
}
