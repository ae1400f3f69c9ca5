//! Portal role type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// The portal role a user account belongs to.
///
/// Roles scope which dashboard a user sees and which resources the backend
/// will let them touch; the client only carries the value opaquely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Caregiver,
    Technician,
    Patient,
}

impl Role {
    /// Returns the wire representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Caregiver => "caregiver",
            Role::Technician => "technician",
            Role::Patient => "patient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "caregiver" => Ok(Role::Caregiver),
            "technician" => Ok(Role::Technician),
            "patient" => Ok(Role::Patient),
            _ => Err(InvalidInputError::Role {
                value: s.to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        for role in [Role::Admin, Role::Caregiver, Role::Technician, Role::Patient] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Role::Caregiver).unwrap(),
            "\"caregiver\""
        );
    }

    #[test]
    fn rejects_unknown_role() {
        assert!("doctor".parse::<Role>().is_err());
    }
}
