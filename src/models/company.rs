use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::same_name;

entity_id!(
    /// Tenant identifier. The nil uuid is reserved for the global tenant that
    /// super admins belong to; it never has a row in the company collection.
    CompanyId
);

impl CompanyId {
    pub fn global() -> Self {
        Self(uuid::Uuid::nil())
    }

    pub fn is_global(&self) -> bool {
        self.0.is_nil()
    }
}

/// Shared by companies and admin accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Blocked,
}

impl AccountStatus {
    pub fn is_active(self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

impl Company {
    pub fn matches_name(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }
}
