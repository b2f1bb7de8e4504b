use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::company::CompanyId;
use crate::models::vacancy::{EmploymentType, Vacancy, VacancyId, VacancyStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVacancyPayload {
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub title: String,
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub category: String,
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub description: String,
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validation::no_blank_items"))]
    pub requirements: Vec<String>,
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub location: String,
    pub employment_type: EmploymentType,
    pub status: Option<VacancyStatus>,
    /// Defaults to the caller's own company for tenant admins.
    pub company_id: Option<CompanyId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateVacancyPayload {
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub title: Option<String>,
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub category: Option<String>,
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub description: Option<String>,
    #[validate(custom(function = "crate::utils::validation::no_blank_items"))]
    pub requirements: Option<Vec<String>>,
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub status: Option<VacancyStatus>,
    pub company_id: Option<CompanyId>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VacancyListQuery {
    pub status: Option<VacancyStatus>,
    pub company_id: Option<CompanyId>,
    pub search: Option<String>,
}

impl VacancyListQuery {
    pub fn matches(&self, vacancy: &Vacancy) -> bool {
        self.status.map_or(true, |s| vacancy.status == s)
            && self.company_id.map_or(true, |c| vacancy.company_id == c)
            && self
                .search
                .as_deref()
                .map_or(true, |needle| vacancy.matches_search(needle))
    }
}

/// Vacancy as shown on the public board, with its company's display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyPublicSummary {
    pub id: VacancyId,
    pub title: String,
    pub category: String,
    pub company: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub description: String,
    pub requirements: Vec<String>,
}

impl VacancyPublicSummary {
    pub fn new(value: Vacancy, company: String) -> Self {
        Self {
            id: value.id,
            title: value.title,
            category: value.category,
            company,
            location: value.location,
            employment_type: value.employment_type,
            description: value.description.trim().to_string(),
            requirements: value.requirements,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyPublicListResponse {
    pub items: Vec<VacancyPublicSummary>,
}
