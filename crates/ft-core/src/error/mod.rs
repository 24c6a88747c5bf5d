use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown role id: {value} {location}")]
    InvalidRole { value: i64, location: ErrorLocation },

    #[error("Unknown role name: {value} {location}")]
    InvalidRoleName {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown page identifier: {value} {location}")]
    InvalidPage {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown satisfaction level: {value} {location}")]
    InvalidSatisfactionLevel {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown issue category: {value} {location}")]
    InvalidIssueCategory {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
