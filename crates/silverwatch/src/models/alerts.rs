//! Alert record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity class of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    Emergency,
    Warning,
    Info,
}

/// What subsystem raised the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertCategory {
    Health,
    Device,
    System,
    Security,
}

/// Triage priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertPriority {
    High,
    Medium,
    Low,
}

/// Alert handling state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Active,
    Acknowledged,
    Resolved,
}

/// An alert raised for a patient, device or the system itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub category: AlertCategory,
    pub priority: AlertPriority,
    pub status: AlertStatus,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl Alert {
    /// Whether the alert still needs handling.
    pub fn is_open(&self) -> bool {
        self.status == AlertStatus::Active
    }
}
