use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::vacancy::VacancyId;

entity_id!(CandidateId);

/// An application to a single vacancy. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub job_id: VacancyId,
    pub full_name: String,
    pub professional_title: String,
    pub years_of_experience: u32,
    pub location: String,
    pub email: String,
    pub phone: String,
    /// Opaque handle to the uploaded CV; file contents are never stored here.
    pub cv_file_reference: String,
    pub cv_file_name: String,
    pub application_date: DateTime<Utc>,
}
