use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// User profile as returned by `GET /users?email=...`.
/// The store carries more fields; only the ones the client reads are
/// deserialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "EmpId")]
    pub emp_id: String,
}

impl UserProfile {
    /// Composite identity key used to address attendance records,
    /// `Name(EmpId)`.
    pub fn identity_key(&self) -> String {
        format!("{}({})", self.name, self.emp_id)
    }
}

/// Role of the current user. Provided externally (configuration file);
/// gating on it is cosmetic client-side behavior, not authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Manager,
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Viewer => "viewer",
        }
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "viewer" => Ok(Role::Viewer),
            other => Err(AppError::InvalidRole(other.to_string())),
        }
    }
}
