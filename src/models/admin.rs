use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::company::{AccountStatus, CompanyId};
use super::same_name;

entity_id!(AdminId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdminRole {
    Admin,
    SuperAdmin,
}

/// Stored admin account. The password is kept in the clear and never leaves
/// the store; every outbound path converts to `AdminResponse`.
#[derive(Clone, PartialEq, Eq)]
pub struct Admin {
    pub id: AdminId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_id: CompanyId,
    pub role: AdminRole,
    pub status: AccountStatus,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    pub fn has_email(&self, email: &str) -> bool {
        same_name(&self.email, email)
    }
}

impl std::fmt::Debug for Admin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Admin")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("company_id", &self.company_id)
            .field("role", &self.role)
            .field("status", &self.status)
            .field("password", &"<redacted>")
            .finish()
    }
}
