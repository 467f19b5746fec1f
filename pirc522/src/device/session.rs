// pirc522/src/device/session.rs
//! MIFARE Crypto1 session flag.

/// Whether a crypto session is open on the selected tag.
///
/// Owned by the device; it must be closed before presence detection restarts
/// and before GPIO teardown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthSession {
    authenticated: bool,
}

impl AuthSession {
    /// Whether a tag sector is authenticated.
    pub fn is_open(&self) -> bool {
        self.authenticated
    }

    /// Record that an authentication layer opened a session.
    pub fn mark_open(&mut self) {
        self.authenticated = true;
    }

    /// Forget the session.
    pub fn close(&mut self) {
        self.authenticated = false;
    }
}
