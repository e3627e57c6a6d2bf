//! Session record and the injected session capability.

use serde::{Deserialize, Serialize};

/// Role carried by the stored session ("type" on the wire).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserKind {
    Employee,
    Admin,
}

/// The locally persisted record identifying the current user.
///
/// Created at login and destroyed at logout, both outside this crate; the
/// router and containers only ever read it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    #[serde(rename = "type")]
    pub kind: UserKind,
    pub email: String,
}

/// Read-only session capability handed to the router and containers at
/// construction. No ambient globals.
pub trait SessionProvider {
    fn current(&self) -> Option<Session>;
}

/// Fixed in-memory session, used by tests and demo mode.
#[derive(Debug, Clone, Default)]
pub struct StaticSession(pub Option<Session>);

impl StaticSession {
    pub fn employee(email: impl Into<String>) -> Self {
        Self(Some(Session {
            kind: UserKind::Employee,
            email: email.into(),
        }))
    }

    pub fn admin(email: impl Into<String>) -> Self {
        Self(Some(Session {
            kind: UserKind::Admin,
            email: email.into(),
        }))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl SessionProvider for StaticSession {
    fn current(&self) -> Option<Session> {
        self.0.clone()
    }
}
