//! Appointment record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How the appointment is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentKind {
    Virtual,
    #[serde(rename = "In-Person")]
    InPerson,
}

/// Scheduling state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    #[serde(rename = "No-Show")]
    NoShow,
}

/// An appointment between a patient and a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub provider_id: String,
    #[serde(rename = "type")]
    pub kind: AppointmentKind,
    pub status: AppointmentStatus,
    pub date: NaiveDate,
    /// Start time, `HH:MM`.
    pub time: String,
    /// Duration in minutes.
    pub duration: u32,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub meeting_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_appointment() {
        let appointment: Appointment = serde_json::from_str(
            r#"{
                "id": "ap-1",
                "patientId": "p1",
                "providerId": "c3",
                "type": "In-Person",
                "status": "Confirmed",
                "date": "2024-03-15",
                "time": "10:30",
                "duration": 30,
                "location": "Clinic A"
            }"#,
        )
        .unwrap();
        assert_eq!(appointment.kind, AppointmentKind::InPerson);
        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
    }
}
