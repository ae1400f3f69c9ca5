//! Monitoring device record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kinds of device the fleet contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceKind {
    #[serde(rename = "Heart Monitor")]
    HeartMonitor,
    #[serde(rename = "Temperature Sensor")]
    TemperatureSensor,
    #[serde(rename = "Motion Sensor")]
    MotionSensor,
    #[serde(rename = "Blood Pressure Monitor")]
    BloodPressureMonitor,
    #[serde(rename = "Wearable Device")]
    Wearable,
}

/// Device health as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceStatus {
    Online,
    Offline,
    Warning,
    Critical,
}

/// A monitoring device.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    pub status: DeviceStatus,
    /// Battery percentage, 0-100.
    pub battery_level: u8,
    /// Signal percentage, 0-100.
    pub signal_strength: u8,
    #[serde(default)]
    pub location: Option<String>,
    /// Patient id the device is assigned to, if any.
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub last_maintenance: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_maintenance: Option<DateTime<Utc>>,
}

impl Device {
    /// Whether the device needs attention.
    pub fn needs_attention(&self) -> bool {
        matches!(self.status, DeviceStatus::Warning | DeviceStatus::Critical)
            || self.battery_level < 20
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_device() {
        let device: Device = serde_json::from_str(
            r#"{
                "id": "dev-1",
                "type": "Heart Monitor",
                "status": "Online",
                "batteryLevel": 87,
                "signalStrength": 92,
                "location": "Room 12",
                "assignedTo": "patient-7"
            }"#,
        )
        .unwrap();
        assert_eq!(device.kind, DeviceKind::HeartMonitor);
        assert!(!device.needs_attention());
    }

    #[test]
    fn low_battery_needs_attention() {
        let device: Device = serde_json::from_str(
            r#"{
                "id": "dev-2",
                "type": "Wearable Device",
                "status": "Online",
                "batteryLevel": 8,
                "signalStrength": 70
            }"#,
        )
        .unwrap();
        assert!(device.needs_attention());
    }
}
