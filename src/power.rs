use crate::error::{Error, Result};

/// Marker that picks internal batteries out of `upower -e` device paths
/// (e.g. `/org/freedesktop/UPower/devices/battery_BAT0`).
const BATTERY_MARKER: &str = "battery_BAT";

/// List power device identifiers via `upower -e`.
pub fn enumerate_devices() -> Result<Vec<String>> {
    let output = std::process::Command::new("upower")
        .arg("-e")
        .output()
        .map_err(|source| Error::ToolSpawn {
            tool: "upower".to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(Error::ToolStatus {
            tool: "upower".to_string(),
            status: output.status,
        });
    }

    Ok(parse_device_list(&String::from_utf8_lossy(&output.stdout)))
}

fn parse_device_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// First enumerated device that is an internal battery, if any.
pub fn find_battery(devices: &[String]) -> Option<&str> {
    devices
        .iter()
        .find(|device| device.contains(BATTERY_MARKER))
        .map(String::as_str)
}

/// Detailed status for one device via `upower -i`. The raw stdout is
/// returned so it can be appended to the report untouched.
pub fn device_info(device: &str) -> Result<Vec<u8>> {
    let output = std::process::Command::new("upower")
        .args(["-i", device])
        .output()
        .map_err(|source| Error::ToolSpawn {
            tool: "upower".to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(Error::ToolStatus {
            tool: "upower".to_string(),
            status: output.status,
        });
    }

    Ok(output.stdout)
}
