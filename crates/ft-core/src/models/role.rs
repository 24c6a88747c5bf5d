use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// User category determining page access.
///
/// Integer ids match the backend database; the backend identifies roles by
/// these ids in JWT claims and user records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Stanar (id 1) - reports maintenance issues
    Tenant,
    /// Upravnik (id 2) - triages issues, views tenant rosters and surveys
    Manager,
    /// Izvođač (id 3) - handles assigned work
    Contractor,
    /// Administrator (id 4) - oversees the system
    Administrator,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Tenant,
        Role::Manager,
        Role::Contractor,
        Role::Administrator,
    ];

    /// Backend database id for this role
    pub fn id(&self) -> i64 {
        match self {
            Self::Tenant => 1,
            Self::Manager => 2,
            Self::Contractor => 3,
            Self::Administrator => 4,
        }
    }

    /// Resolve a backend role id
    #[track_caller]
    pub fn from_id(id: i64) -> CoreErrorResult<Self> {
        match id {
            1 => Ok(Self::Tenant),
            2 => Ok(Self::Manager),
            3 => Ok(Self::Contractor),
            4 => Ok(Self::Administrator),
            _ => Err(CoreError::InvalidRole {
                value: id,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tenant => "tenant",
            Self::Manager => "manager",
            Self::Contractor => "contractor",
            Self::Administrator => "administrator",
        }
    }

    /// User-facing role label, as the backend names roles
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Tenant => "Stanar",
            Self::Manager => "Upravnik",
            Self::Contractor => "Izvođač",
            Self::Administrator => "Administrator",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "tenant" => Ok(Self::Tenant),
            "manager" => Ok(Self::Manager),
            "contractor" => Ok(Self::Contractor),
            "administrator" => Ok(Self::Administrator),
            _ => Err(CoreError::InvalidRoleName {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
