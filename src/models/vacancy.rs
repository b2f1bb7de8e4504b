use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::company::CompanyId;

entity_id!(VacancyId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VacancyStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: VacancyId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub location: String,
    pub employment_type: EmploymentType,
    pub status: VacancyStatus,
    pub company_id: CompanyId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vacancy {
    pub fn is_active(&self) -> bool {
        self.status == VacancyStatus::Active
    }

    /// Case-insensitive match on title, category or location.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.title, &self.category, &self.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
