//! Account DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Field and variant names serialize to the camelCase / lowercase shapes
//! used on the wire. `SignUpRole` is a separate enum because self
//! registration is only open to doctors and patients.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role. Selects which login screen a user belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
    Patient,
}

impl Role {
    /// Human-readable role name used in headings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Doctor => "Doctor",
            Self::Patient => "Patient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Roles a visitor may pick when signing up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignUpRole {
    Doctor,
    Patient,
}

impl From<SignUpRole> for Role {
    fn from(role: SignUpRole) -> Self {
        match role {
            SignUpRole::Doctor => Self::Doctor,
            SignUpRole::Patient => Self::Patient,
        }
    }
}

/// A registered account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Username/password pair entered on a login screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Registration request. `confirm_password` is carried as entered; nothing
/// compares it against `password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpDetails {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub role: SignUpRole,
}
