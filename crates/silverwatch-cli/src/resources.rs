//! Friendly collection names.
//!
//! Commands accept either a short name from the table below or a full
//! collection path starting with `/`, so new backend collections are
//! reachable without a CLI release.

use anyhow::{Context, Result, bail};
use silverwatch::{ResourcePath, paths};

/// Resolve a collection argument to a backend path.
pub fn resolve(name: &str) -> Result<ResourcePath> {
    let path = match name {
        "users" => paths::USERS,
        "profiles" => paths::PROFILES,
        "contacts" => paths::EMERGENCY_CONTACTS,
        "devices" => paths::DEVICES,
        "device-settings" => paths::DEVICE_SETTINGS,
        "device-maintenance" => paths::DEVICE_MAINTENANCE,
        "device-readings" => paths::DEVICE_READINGS,
        "vitals" => paths::VITAL_SIGNS,
        "health-metrics" => paths::HEALTH_METRICS,
        "medical-history" => paths::MEDICAL_HISTORY,
        "alerts" => paths::ALERTS,
        "alert-rules" => paths::ALERT_RULES,
        "notification-channels" => paths::NOTIFICATION_CHANNELS,
        "appointments" => paths::APPOINTMENTS,
        "reminders" => paths::REMINDERS,
        "schedules" => paths::SCHEDULES,
        "conversations" => paths::CONVERSATIONS,
        "messages" => paths::MESSAGES,
        "health-reports" => paths::HEALTH_REPORTS,
        "device-reports" => paths::DEVICE_REPORTS,
        "system-settings" => paths::SYSTEM_SETTINGS,
        "user-preferences" => paths::USER_PREFERENCES,
        "api-keys" => paths::API_KEYS,
        other if other.starts_with('/') => other,
        other => bail!(
            "Unknown collection '{other}'. Use a known name (e.g. devices, alerts) \
             or a full path starting with '/'."
        ),
    };

    ResourcePath::new(path).context("Invalid collection path")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_short_names() {
        assert_eq!(resolve("devices").unwrap().as_str(), paths::DEVICES);
        assert_eq!(resolve("vitals").unwrap().as_str(), paths::VITAL_SIGNS);
    }

    #[test]
    fn accepts_raw_paths() {
        assert_eq!(resolve("/custom/things/").unwrap().as_str(), "/custom/things/");
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(resolve("gadgets").is_err());
    }

    #[test]
    fn rejects_malformed_raw_paths() {
        assert!(resolve("/no-trailing-slash").is_err());
    }
}
