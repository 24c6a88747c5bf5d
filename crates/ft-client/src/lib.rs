pub mod client;
pub mod error;
pub mod manager;
pub mod profile;
pub mod surveys;

pub use client::ApiClient;
pub use error::{ClientError, Result};
pub use manager::search_tenants;
pub use profile::{FieldError, ProfileField, UpdateProfileRequest, classify_update_error};

#[cfg(test)]
mod tests;
