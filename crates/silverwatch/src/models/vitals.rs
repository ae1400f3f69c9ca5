//! Vital signs record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a measurement sits relative to its clinical range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementStatus {
    Normal,
    Warning,
    Critical,
}

/// One measured value with its unit and range status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: String,
    pub status: MeasurementStatus,
}

/// A vital-signs reading for a patient at one point in time.
///
/// Only the measurements a device actually reports are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSigns {
    pub id: String,
    pub patient_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub heart_rate: Option<Measurement>,
    #[serde(default)]
    pub temperature: Option<Measurement>,
    #[serde(default)]
    pub blood_oxygen: Option<Measurement>,
    #[serde(default)]
    pub respiratory_rate: Option<Measurement>,
}

impl VitalSigns {
    /// Whether any reported measurement is outside its normal range.
    pub fn has_abnormal_reading(&self) -> bool {
        [
            &self.heart_rate,
            &self.temperature,
            &self.blood_oxygen,
            &self.respiratory_rate,
        ]
        .into_iter()
        .flatten()
        .any(|m| m.status != MeasurementStatus::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_abnormal_readings() {
        let vitals: VitalSigns = serde_json::from_str(
            r#"{
                "id": "v1",
                "patientId": "p1",
                "timestamp": "2024-03-01T08:00:00Z",
                "heartRate": {"value": 112.0, "unit": "bpm", "status": "Warning"},
                "bloodOxygen": {"value": 98.0, "unit": "%", "status": "Normal"}
            }"#,
        )
        .unwrap();
        assert!(vitals.has_abnormal_reading());
        assert!(vitals.temperature.is_none());
    }
}
