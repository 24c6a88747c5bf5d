//! Session-file ownership.
//!
//! The CLI is the single owner of the persisted session: it loads
//! `session.json` into the in-memory store at startup and mirrors the
//! store back to disk after every command, so a login, a logout, a 401
//! from the backend, or a watchdog reap all end up reflected in the file.

use ft_auth::SessionStore;
use ft_config::{ConfigErrorResult, SessionFileInfo};

/// Load the persisted session slots into the store, if a session file
/// exists.
pub(crate) fn restore(store: &SessionStore) -> ConfigErrorResult<()> {
    if let Some(info) = SessionFileInfo::read()? {
        store.restore(info.credential, info.expiry);
    }
    Ok(())
}

/// Mirror the store back to disk: write when a credential is held, remove
/// the file otherwise.
pub(crate) fn persist(store: &SessionStore) -> ConfigErrorResult<()> {
    match store.credential() {
        Some(credential) => {
            SessionFileInfo::write(&credential, store.expiry())?;
            Ok(())
        }
        None => SessionFileInfo::remove(),
    }
}
