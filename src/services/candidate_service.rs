use std::collections::HashMap;

use crate::access::rules::{can_view_candidates, require};
use crate::access::{verify_principal, Principal};
use crate::dto::public_dto::ApplicationPayload;
use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use crate::models::vacancy::VacancyId;
use crate::services::vacancy_service::visible_to;
use crate::store::Store;
use crate::utils::time::now;
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct CandidateService {
    store: Store,
}

impl CandidateService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Applicants of one vacancy, newest first.
    pub async fn list_candidates(
        &self,
        principal: &Principal,
        job_id: VacancyId,
    ) -> Result<Vec<Candidate>> {
        let tables = self.store.read().await;
        verify_principal(&tables, principal)?;
        let vacancy = tables
            .vacancies
            .get(job_id)
            .ok_or_else(|| Error::NotFound(format!("vacancy {}", job_id)))?;
        require(can_view_candidates(principal, vacancy), "list candidates")?;

        let mut candidates = tables.candidates.filter(|c| c.job_id == job_id);
        candidates.sort_by(|a, b| b.application_date.cmp(&a.application_date));
        Ok(candidates)
    }

    /// Applicant count per vacancy the principal can manage.
    pub async fn candidate_counts(&self, principal: &Principal) -> Result<HashMap<VacancyId, usize>> {
        let tables = self.store.read().await;
        verify_principal(&tables, principal)?;
        require(!principal.is_anonymous(), "count candidates")?;

        let counts = tables
            .vacancies
            .iter()
            .filter(|v| can_view_candidates(principal, v))
            .map(|v| (v.id, tables.candidates.count_where(|c| c.job_id == v.id)))
            .collect();
        Ok(counts)
    }

    /// Public application. The CV must be present, non-empty and a document
    /// type; the vacancy must currently be on the public board.
    pub async fn submit_application(&self, payload: ApplicationPayload) -> Result<Candidate> {
        let cv = match payload.cv.as_ref() {
            Some(cv) if !cv.is_empty() => cv,
            _ => return Err(Error::MissingAttachment),
        };
        if !cv.has_allowed_type() {
            return Err(Error::UnsupportedFileType(cv.content_type.clone()));
        }
        validate(&payload)?;

        let mut tables = self.store.write().await;
        let vacancy = tables
            .vacancies
            .get(payload.job_id)
            .ok_or_else(|| Error::NotFound(format!("vacancy {}", payload.job_id)))?;
        if !visible_to(&tables, &Principal::Anonymous, vacancy) {
            return Err(Error::VacancyUnavailable);
        }

        let id = tables.next_candidate_id();
        let cv_file_name = cv.file_name.trim().to_string();
        let candidate = tables.candidates.insert(Candidate {
            id,
            job_id: payload.job_id,
            full_name: payload.full_name.trim().to_string(),
            professional_title: payload.professional_title.trim().to_string(),
            years_of_experience: payload.years_of_experience,
            location: payload.location.trim().to_string(),
            email: payload.email.trim().to_string(),
            phone: payload.phone.trim().to_string(),
            cv_file_reference: format!("cv/{}/{}", id, cv_file_name),
            cv_file_name,
            application_date: now(),
        });

        tracing::info!(candidate_id = %id, vacancy_id = %payload.job_id, "application submitted");
        Ok(candidate)
    }
}
