use serde::{Deserialize, Serialize};

use crate::dto::admin_dto::AdminResponse;
use crate::models::admin::{AdminId, AdminRole};
use crate::models::company::CompanyId;

/// Who is acting. Session state lives with the caller; every operation
/// re-checks the principal against the store before applying any rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Principal {
    Anonymous,
    Admin {
        admin_id: AdminId,
        company_id: CompanyId,
    },
    SuperAdmin {
        admin_id: AdminId,
    },
}

impl Principal {
    pub fn admin_id(&self) -> Option<AdminId> {
        match self {
            Principal::Anonymous => None,
            Principal::Admin { admin_id, .. } | Principal::SuperAdmin { admin_id } => {
                Some(*admin_id)
            }
        }
    }

    pub fn company_id(&self) -> Option<CompanyId> {
        match self {
            Principal::Admin { company_id, .. } => Some(*company_id),
            _ => None,
        }
    }

    pub fn is_super_admin(&self) -> bool {
        matches!(self, Principal::SuperAdmin { .. })
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Principal::Anonymous)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Principal::Anonymous => "anonymous",
            Principal::Admin { .. } => "admin",
            Principal::SuperAdmin { .. } => "super_admin",
        }
    }
}

impl From<&AdminResponse> for Principal {
    fn from(admin: &AdminResponse) -> Self {
        match admin.role {
            AdminRole::SuperAdmin => Principal::SuperAdmin { admin_id: admin.id },
            AdminRole::Admin => Principal::Admin {
                admin_id: admin.id,
                company_id: admin.company_id,
            },
        }
    }
}
