use crate::Result as ClientResult;
use crate::client::ApiClient;

use ft_core::UserProfile;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// Profile form fields, for keying validation and backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FullName,
    Email,
    Phone,
    CurrentPassword,
    NewPassword,
    ConfirmPassword,
}

impl ProfileField {
    /// Form field key, matching the wire names
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::CurrentPassword => "current_password",
            Self::NewPassword => "new_password",
            Self::ConfirmPassword => "confirm_password",
        }
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field-scoped validation failure with the user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ProfileField,
    pub message: String,
}

/// Payload for `PUT /auth/profile`. The password triple is optional; the
/// backend only attempts a password change when it is present.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProfileRequest {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}

impl UpdateProfileRequest {
    fn wants_password_change(&self) -> bool {
        [
            &self.current_password,
            &self.new_password,
            &self.confirm_password,
        ]
        .into_iter()
        .any(|field| field.as_deref().is_some_and(|s| !s.is_empty()))
    }

    /// Pre-flight validation mirroring the backend's profile rules.
    ///
    /// Messages are the user-facing ones the backend uses, so a caller can
    /// show them next to the offending field without another mapping step.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            errors.push(FieldError {
                field: ProfileField::FullName,
                message: "Ime i prezime je obavezno".to_string(),
            });
        } else if full_name.chars().count() < 2 {
            errors.push(FieldError {
                field: ProfileField::FullName,
                message: "Ime i prezime mora imati najmanje 2 karaktera".to_string(),
            });
        } else if full_name.chars().count() > 100 {
            errors.push(FieldError {
                field: ProfileField::FullName,
                message: "Ime i prezime ne može imati više od 100 karaktera".to_string(),
            });
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError {
                field: ProfileField::Email,
                message: "Email je obavezan".to_string(),
            });
        } else if !is_valid_email(email) {
            errors.push(FieldError {
                field: ProfileField::Email,
                message: "Email format nije valjan".to_string(),
            });
        } else if email.chars().count() > 100 {
            errors.push(FieldError {
                field: ProfileField::Email,
                message: "Email ne može imati više od 100 karaktera".to_string(),
            });
        }

        if let Some(phone) = &self.phone
            && phone.chars().count() > 20
        {
            errors.push(FieldError {
                field: ProfileField::Phone,
                message: "Telefon ne može imati više od 20 karaktera".to_string(),
            });
        }

        if self.wants_password_change() {
            if self.current_password.as_deref().unwrap_or("").is_empty() {
                errors.push(FieldError {
                    field: ProfileField::CurrentPassword,
                    message: "Trenutna lozinka je obavezna".to_string(),
                });
            }
            let new_password = self.new_password.as_deref().unwrap_or("");
            if new_password.is_empty() {
                errors.push(FieldError {
                    field: ProfileField::NewPassword,
                    message: "Nova lozinka je obavezna".to_string(),
                });
            } else if new_password.chars().count() < 6 {
                errors.push(FieldError {
                    field: ProfileField::NewPassword,
                    message: "Nova lozinka mora imati najmanje 6 karaktera".to_string(),
                });
            }
            if self.new_password != self.confirm_password {
                errors.push(FieldError {
                    field: ProfileField::ConfirmPassword,
                    message: "Lozinke se ne poklapaju".to_string(),
                });
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Attribute a backend profile-update failure to a form field.
///
/// Best-effort substring matching on the backend's message text, kept
/// isolated here: password wording goes to the current-password field, a
/// mismatch complaint to the confirmation, email wording to the email
/// field, anything else to the name field.
pub fn classify_update_error(message: &str) -> ProfileField {
    let lower = message.to_lowercase();
    if lower.contains("lozinka") || lower.contains("šifra") {
        ProfileField::CurrentPassword
    } else if lower.contains("poklapaju") {
        ProfileField::ConfirmPassword
    } else if lower.contains("email") {
        ProfileField::Email
    } else {
        ProfileField::FullName
    }
}

/// Shape check equivalent to the profile form's email pattern: one '@',
/// non-empty local part, dotted domain, no whitespace.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !local.chars().any(char::is_whitespace)
                && !domain.chars().any(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty())
        }
        _ => false,
    }
}

// =========================================================================
// Profile Operations
// =========================================================================

impl ApiClient {
    /// Fetch the authenticated user's profile
    pub async fn get_profile(&self) -> ClientResult<UserProfile> {
        let req = self.request(Method::GET, "/auth/profile");
        self.execute(req).await
    }

    /// Update the authenticated user's profile
    pub async fn update_profile(&self, update: &UpdateProfileRequest) -> ClientResult<Value> {
        let req = self.request(Method::PUT, "/auth/profile").json(update);
        self.execute(req).await
    }
}
