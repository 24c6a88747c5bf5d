use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Dissatisfaction-survey answer scale, as the backend stores it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SatisfactionLevel {
    #[serde(rename = "vrlo_zadovoljan")]
    VerySatisfied,
    #[serde(rename = "zadovoljan")]
    Satisfied,
    #[serde(rename = "neutralan")]
    Neutral,
    #[serde(rename = "nezadovoljan")]
    Dissatisfied,
    #[serde(rename = "vrlo_nezadovoljan")]
    VeryDissatisfied,
}

impl SatisfactionLevel {
    pub const ALL: [SatisfactionLevel; 5] = [
        SatisfactionLevel::VerySatisfied,
        SatisfactionLevel::Satisfied,
        SatisfactionLevel::Neutral,
        SatisfactionLevel::Dissatisfied,
        SatisfactionLevel::VeryDissatisfied,
    ];

    /// Backend string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VerySatisfied => "vrlo_zadovoljan",
            Self::Satisfied => "zadovoljan",
            Self::Neutral => "neutralan",
            Self::Dissatisfied => "nezadovoljan",
            Self::VeryDissatisfied => "vrlo_nezadovoljan",
        }
    }

    /// User-facing label
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::VerySatisfied => "Vrlo zadovoljan",
            Self::Satisfied => "Zadovoljan",
            Self::Neutral => "Neutralan",
            Self::Dissatisfied => "Nezadovoljan",
            Self::VeryDissatisfied => "Vrlo nezadovoljan",
        }
    }
}

impl FromStr for SatisfactionLevel {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "vrlo_zadovoljan" => Ok(Self::VerySatisfied),
            "zadovoljan" => Ok(Self::Satisfied),
            "neutralan" => Ok(Self::Neutral),
            "nezadovoljan" => Ok(Self::Dissatisfied),
            "vrlo_nezadovoljan" => Ok(Self::VeryDissatisfied),
            _ => Err(CoreError::InvalidSatisfactionLevel {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SatisfactionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
