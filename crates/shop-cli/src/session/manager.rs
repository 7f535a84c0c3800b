//! The session state machine.
//!
//! Two states: Anonymous (no identity held, nothing persisted) and
//! Authenticated (identity decoded from a server-issued token, both
//! mirrored to disk). Register/login move Anonymous to Authenticated,
//! logout moves back, and startup replays whatever the store holds.

use crate::session::error::Result as SessionResult;
use crate::session::identity::SessionIdentity;
use crate::session::store::{PersistedSession, SessionStore};

use log::warn;

pub struct SessionManager {
    store: SessionStore,
    current: Option<PersistedSession>,
}

impl SessionManager {
    /// Start Anonymous, ignoring anything persisted.
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Start from the persisted session if there is a usable one,
    /// Anonymous otherwise.
    pub fn restore(store: SessionStore) -> Self {
        let current = store.load();
        Self { store, current }
    }

    /// Enter Authenticated from a freshly issued token.
    ///
    /// Returns `Ok(false)` and stays Anonymous when the token payload
    /// does not decode - a malformed token is not an error here, it is
    /// simply not a session.
    pub fn establish(&mut self, token: &str) -> SessionResult<bool> {
        let Some(identity) = SessionIdentity::from_token(token) else {
            warn!("Received a token whose payload does not decode; staying logged out");
            return Ok(false);
        };

        self.store.save(token, &identity)?;
        self.current = Some(PersistedSession {
            token: token.to_string(),
            identity,
        });

        Ok(true)
    }

    /// Re-point the held identity at fresh server data without
    /// touching the token. No-op when Anonymous.
    pub fn refresh(&mut self, identity: SessionIdentity) -> SessionResult<()> {
        if let Some(ref mut session) = self.current {
            session.identity = identity;
            self.store.save(&session.token, &session.identity)?;
        }
        Ok(())
    }

    /// Back to Anonymous; both persisted entries are removed.
    pub fn logout(&mut self) -> SessionResult<()> {
        self.current = None;
        self.store.clear()
    }

    pub fn identity(&self) -> Option<&SessionIdentity> {
        self.current.as_ref().map(|s| &s.identity)
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
