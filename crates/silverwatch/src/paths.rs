//! Collection paths exposed by the backend.
//!
//! These follow the backend's URL layout: Django REST ViewSets mounted per
//! app, so the list endpoint is the path itself and items live at
//! `{path}{id}/`. Pass one of these to
//! [`Session::resource`](crate::Session::resource) via
//! [`ResourcePath::new`](crate::ResourcePath::new).

// User management
pub const USERS: &str = "/api/users/";
pub const PROFILES: &str = "/api/profiles/";
pub const EMERGENCY_CONTACTS: &str = "/api/contacts/";

// Device management
pub const DEVICES: &str = "/devices/devices/";
pub const DEVICE_SETTINGS: &str = "/devices/settings/";
pub const DEVICE_MAINTENANCE: &str = "/devices/maintenance/";
pub const DEVICE_READINGS: &str = "/devices/readings/";

// Vitals
pub const VITAL_SIGNS: &str = "/vitals/vital-signs/";
pub const HEALTH_METRICS: &str = "/vitals/health-metrics/";
pub const MEDICAL_HISTORY: &str = "/vitals/medical-history/";

// Alerts
pub const ALERTS: &str = "/alerts/alerts/";
pub const ALERT_RULES: &str = "/alerts/alert-rules/";
pub const NOTIFICATION_CHANNELS: &str = "/alerts/notification-channels/";

// Appointments
pub const APPOINTMENTS: &str = "/appointments/appointments/";
pub const REMINDERS: &str = "/appointments/reminders/";
pub const SCHEDULES: &str = "/appointments/schedules/";

// Messaging
pub const CONVERSATIONS: &str = "/chats/conversations/";
pub const MESSAGES: &str = "/chats/messages/";

// Reports
pub const HEALTH_REPORTS: &str = "/reports/health-reports/";
pub const DEVICE_REPORTS: &str = "/reports/device-reports/";

// Settings
pub const SYSTEM_SETTINGS: &str = "/settings/system-settings/";
pub const USER_PREFERENCES: &str = "/settings/user-preferences/";
pub const API_KEYS: &str = "/settings/api-keys/";

#[cfg(test)]
mod tests {
    use crate::types::ResourcePath;

    #[test]
    fn every_path_is_a_valid_resource_path() {
        for path in [
            super::USERS,
            super::PROFILES,
            super::EMERGENCY_CONTACTS,
            super::DEVICES,
            super::DEVICE_SETTINGS,
            super::DEVICE_MAINTENANCE,
            super::DEVICE_READINGS,
            super::VITAL_SIGNS,
            super::HEALTH_METRICS,
            super::MEDICAL_HISTORY,
            super::ALERTS,
            super::ALERT_RULES,
            super::NOTIFICATION_CHANNELS,
            super::APPOINTMENTS,
            super::REMINDERS,
            super::SCHEDULES,
            super::CONVERSATIONS,
            super::MESSAGES,
            super::HEALTH_REPORTS,
            super::DEVICE_REPORTS,
            super::SYSTEM_SETTINGS,
            super::USER_PREFERENCES,
            super::API_KEYS,
        ] {
            assert!(ResourcePath::new(path).is_ok(), "invalid path: {path}");
        }
    }
}
