use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::admin::{Admin, AdminId, AdminRole};
use crate::models::company::{AccountStatus, CompanyId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Self-service sign-up. `company` is matched by name, case-insensitively,
/// and created when no company carries that name yet.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterAdminPayload {
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub phone: String,
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub company: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAdminPayload {
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub phone: String,
    /// Required for `AdminRole::Admin`; ignored for super admins.
    pub company_id: Option<CompanyId>,
    pub role: AdminRole,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateAdminPayload {
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub phone: Option<String>,
    pub company_id: Option<CompanyId>,
    pub role: Option<AdminRole>,
    pub status: Option<AccountStatus>,
    /// Empty string means "leave unchanged".
    pub password: Option<String>,
}

/// Outbound admin record. Has no password field at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminResponse {
    pub id: AdminId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_id: CompanyId,
    pub company_name: Option<String>,
    pub role: AdminRole,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

impl AdminResponse {
    pub fn new(admin: Admin, company_name: Option<String>) -> Self {
        Self {
            id: admin.id,
            name: admin.name,
            email: admin.email,
            phone: admin.phone,
            company_id: admin.company_id,
            company_name,
            role: admin.role,
            status: admin.status,
            created_at: admin.created_at,
        }
    }
}
