use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Issue category a survey complaint refers to.
///
/// Survey records carry the category as a free string; this enum covers the
/// known set for display purposes. Unknown categories are shown raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueCategory {
    #[serde(rename = "voda")]
    Water,
    #[serde(rename = "struja")]
    Electricity,
    #[serde(rename = "grijanje")]
    Heating,
    #[serde(rename = "lift")]
    Elevator,
    #[serde(rename = "sigurnost")]
    Security,
    #[serde(rename = "čistoća")]
    Cleanliness,
    #[serde(rename = "komunikacija")]
    Communication,
    #[serde(rename = "ostalo")]
    Other,
}

impl IssueCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Water => "voda",
            Self::Electricity => "struja",
            Self::Heating => "grijanje",
            Self::Elevator => "lift",
            Self::Security => "sigurnost",
            Self::Cleanliness => "čistoća",
            Self::Communication => "komunikacija",
            Self::Other => "ostalo",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Water => "Voda",
            Self::Electricity => "Struja",
            Self::Heating => "Grijanje",
            Self::Elevator => "Lift",
            Self::Security => "Sigurnost",
            Self::Cleanliness => "Čistoća",
            Self::Communication => "Komunikacija",
            Self::Other => "Ostalo",
        }
    }

    /// Label for a backend category string, falling back to the raw value
    /// when the category is not one of the known set.
    pub fn label(raw: &str) -> String {
        raw.parse::<IssueCategory>()
            .map(|category| category.display_name().to_string())
            .unwrap_or_else(|_| raw.to_string())
    }
}

impl FromStr for IssueCategory {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "voda" => Ok(Self::Water),
            "struja" => Ok(Self::Electricity),
            "grijanje" => Ok(Self::Heating),
            "lift" => Ok(Self::Elevator),
            "sigurnost" => Ok(Self::Security),
            "čistoća" => Ok(Self::Cleanliness),
            "komunikacija" => Ok(Self::Communication),
            "ostalo" => Ok(Self::Other),
            _ => Err(CoreError::InvalidIssueCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
