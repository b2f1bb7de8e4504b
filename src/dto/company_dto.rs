use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::company::{AccountStatus, Company};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCompanyPayload {
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateCompanyPayload {
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub name: Option<String>,
    pub status: Option<AccountStatus>,
}

/// Result of a company update, including any cascade it triggered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyUpdateResponse {
    pub company: Company,
    pub admins_blocked: usize,
    pub vacancies_deactivated: usize,
}
