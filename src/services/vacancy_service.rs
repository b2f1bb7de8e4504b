use crate::access::rules::{can_mutate_vacancy, can_view_vacancy, require};
use crate::access::{verify_principal, Principal};
use crate::dto::vacancy_dto::{
    CreateVacancyPayload, UpdateVacancyPayload, VacancyListQuery, VacancyPublicSummary,
};
use crate::error::{Error, Result};
use crate::models::company::CompanyId;
use crate::models::vacancy::{Vacancy, VacancyId, VacancyStatus};
use crate::services::lifecycle;
use crate::store::{Store, Tables};
use crate::utils::time::now;
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct VacancyService {
    store: Store,
}

impl VacancyService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Active vacancies of active companies.
    pub async fn list_public_vacancies(&self) -> Result<Vec<VacancyPublicSummary>> {
        let tables = self.store.read().await;
        let items = tables
            .vacancies
            .filter(|v| visible_to(&tables, &Principal::Anonymous, v))
            .into_iter()
            .map(|v| {
                let company = tables.company_name(v.company_id).unwrap_or_default();
                VacancyPublicSummary::new(v, company)
            })
            .collect();
        Ok(items)
    }

    pub async fn list_vacancies(
        &self,
        principal: &Principal,
        query: VacancyListQuery,
    ) -> Result<Vec<Vacancy>> {
        let tables = self.store.read().await;
        verify_principal(&tables, principal)?;
        let items = tables
            .vacancies
            .filter(|v| visible_to(&tables, principal, v) && query.matches(v));
        tracing::debug!(principal = principal.label(), count = items.len(), "vacancies listed");
        Ok(items)
    }

    /// Vacancies the principal may not see are reported as absent.
    pub async fn get_vacancy(
        &self,
        principal: &Principal,
        vacancy_id: VacancyId,
    ) -> Result<Option<Vacancy>> {
        let tables = self.store.read().await;
        verify_principal(&tables, principal)?;
        Ok(tables
            .vacancies
            .get(vacancy_id)
            .filter(|v| visible_to(&tables, principal, v))
            .cloned())
    }

    pub async fn create_vacancy(
        &self,
        principal: &Principal,
        payload: CreateVacancyPayload,
    ) -> Result<Vacancy> {
        let mut tables = self.store.write().await;
        verify_principal(&tables, principal)?;

        let company_id = match payload.company_id.or_else(|| principal.company_id()) {
            Some(id) => id,
            None if principal.is_super_admin() => {
                return Err(Error::NotFound("company is required".to_string()))
            }
            None => return Err(Error::Forbidden("create vacancy".to_string())),
        };
        require(can_mutate_vacancy(principal, company_id), "create vacancy")?;
        validate(&payload)?;
        ensure_company_exists(&tables, company_id)?;

        let id = tables.next_vacancy_id();
        let created_at = now();
        let vacancy = tables.vacancies.insert(Vacancy {
            id,
            title: payload.title.trim().to_string(),
            category: payload.category.trim().to_string(),
            description: payload.description,
            requirements: trimmed(payload.requirements),
            location: payload.location.trim().to_string(),
            employment_type: payload.employment_type,
            status: payload.status.unwrap_or(VacancyStatus::Active),
            company_id,
            created_at,
            updated_at: created_at,
        });

        tracing::info!(vacancy_id = %id, company_id = %company_id, "vacancy created");
        Ok(vacancy)
    }

    /// `Ok(None)` when absent. Moving a vacancy requires rights on both the
    /// current and the target company.
    pub async fn update_vacancy(
        &self,
        principal: &Principal,
        vacancy_id: VacancyId,
        payload: UpdateVacancyPayload,
    ) -> Result<Option<Vacancy>> {
        let mut tables = self.store.write().await;
        verify_principal(&tables, principal)?;
        let Some(current_company) = tables.vacancies.get(vacancy_id).map(|v| v.company_id) else {
            return Ok(None);
        };
        require(can_mutate_vacancy(principal, current_company), "update vacancy")?;

        if let Some(target) = payload.company_id.filter(|c| *c != current_company) {
            require(can_mutate_vacancy(principal, target), "move vacancy")?;
            ensure_company_exists(&tables, target)?;
        }
        validate(&payload)?;

        let updated = tables.vacancies.update(vacancy_id, |v| {
            if let Some(title) = payload.title {
                v.title = title.trim().to_string();
            }
            if let Some(category) = payload.category {
                v.category = category.trim().to_string();
            }
            if let Some(description) = payload.description {
                v.description = description;
            }
            if let Some(requirements) = payload.requirements {
                v.requirements = trimmed(requirements);
            }
            if let Some(location) = payload.location {
                v.location = location.trim().to_string();
            }
            if let Some(employment_type) = payload.employment_type {
                v.employment_type = employment_type;
            }
            if let Some(status) = payload.status {
                v.status = status;
            }
            if let Some(company_id) = payload.company_id {
                v.company_id = company_id;
            }
            v.updated_at = now();
        });

        tracing::info!(vacancy_id = %vacancy_id, "vacancy updated");
        Ok(updated)
    }

    /// Removes the vacancy together with its candidates.
    pub async fn delete_vacancy(&self, principal: &Principal, vacancy_id: VacancyId) -> Result<bool> {
        let mut tables = self.store.write().await;
        verify_principal(&tables, principal)?;
        let Some(company_id) = tables.vacancies.get(vacancy_id).map(|v| v.company_id) else {
            return Ok(false);
        };
        require(can_mutate_vacancy(principal, company_id), "delete vacancy")?;

        Ok(lifecycle::delete_vacancy(&mut tables, vacancy_id).is_some())
    }
}

pub(crate) fn visible_to(tables: &Tables, principal: &Principal, vacancy: &Vacancy) -> bool {
    let company_status = tables.companies.get(vacancy.company_id).map(|c| c.status);
    can_view_vacancy(principal, vacancy, company_status)
}

fn ensure_company_exists(tables: &Tables, company_id: CompanyId) -> Result<()> {
    if !tables.companies.contains(company_id) {
        return Err(Error::NotFound(format!("company {}", company_id)));
    }
    Ok(())
}

fn trimmed(requirements: Vec<String>) -> Vec<String> {
    requirements
        .into_iter()
        .map(|r| r.trim().to_string())
        .collect()
}
