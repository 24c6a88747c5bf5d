use crate::{AuthError, Claims, Result as AuthErrorResult, decoder};

use ft_core::Role;

use std::panic::Location;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use error_location::ErrorLocation;

/// Explicit session context holding the two storage slots: the credential
/// string and its numeric expiry marker.
///
/// At most one credential is held at a time. The store is cheap to clone
/// (shared interior) so the route guard, the HTTP client and the expiry
/// watchdog all observe the same slots; every check re-reads them fresh
/// rather than caching a decision. The embedding application is the single
/// owner responsible for initializing the store at startup and clearing it
/// at logout.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    slots: Arc<Mutex<Slots>>,
}

#[derive(Debug, Default)]
struct Slots {
    credential: Option<String>,
    expiry: Option<i64>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Slots> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a freshly issued credential.
    ///
    /// The token is decoded to pull the expiry claim into the marker slot;
    /// a token without an `exp` claim is rejected outright, since it could
    /// never satisfy the session prober and the watchdog could never reap
    /// it.
    #[track_caller]
    pub fn login(&self, credential: &str) -> AuthErrorResult<Claims> {
        let claims = decoder::decode(credential)?;
        let exp = claims.exp.ok_or(AuthError::MissingClaim {
            claim: "exp",
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mut slots = self.lock();
        slots.credential = Some(credential.to_string());
        slots.expiry = Some(exp);

        Ok(claims)
    }

    /// Restore a previously persisted session without re-validating it.
    /// An expired or garbled credential is caught by the next probe.
    pub fn restore(&self, credential: String, expiry: Option<i64>) {
        let mut slots = self.lock();
        slots.credential = Some(credential);
        slots.expiry = expiry;
    }

    /// Empty both slots
    pub fn clear(&self) {
        let mut slots = self.lock();
        slots.credential = None;
        slots.expiry = None;
    }

    pub fn logout(&self) {
        self.clear();
    }

    pub fn credential(&self) -> Option<String> {
        self.lock().credential.clone()
    }

    /// Stored expiry marker (Unix seconds)
    pub fn expiry(&self) -> Option<i64> {
        self.lock().expiry
    }

    /// Decode the stored credential, fresh on every call
    pub fn claims(&self) -> Option<Claims> {
        let credential = self.credential()?;
        decoder::decode(&credential).ok()
    }

    /// Current role, re-derived from the credential on every call
    pub fn role(&self) -> Option<Role> {
        self.claims().and_then(|claims| claims.role())
    }

    /// Session prober: `true` iff a credential is present, decodes, and its
    /// expiry is strictly in the future. Read-only; an expired session is
    /// cleared by the watchdog or the guard's redirect path, never here.
    pub fn is_session_valid(&self) -> bool {
        self.is_session_valid_at(chrono::Utc::now().timestamp())
    }

    pub fn is_session_valid_at(&self, now: i64) -> bool {
        self.claims()
            .and_then(|claims| claims.exp)
            .is_some_and(|exp| now < exp)
    }
}
