use crate::access::rules::{can_manage_companies, require};
use crate::access::{verify_principal, Principal};
use crate::dto::company_dto::{CompanyUpdateResponse, CreateCompanyPayload, UpdateCompanyPayload};
use crate::error::{Error, Result};
use crate::models::company::{AccountStatus, Company, CompanyId};
use crate::services::lifecycle;
use crate::store::{Store, Tables};
use crate::utils::time::now;
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct CompanyService {
    store: Store,
}

impl CompanyService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Super admins see every company, tenant admins only their own.
    pub async fn list_companies(&self, principal: &Principal) -> Result<Vec<Company>> {
        let tables = self.store.read().await;
        verify_principal(&tables, principal)?;
        match principal {
            Principal::SuperAdmin { .. } => Ok(tables.companies.all()),
            Principal::Admin { company_id, .. } => {
                Ok(tables.companies.filter(|c| c.id == *company_id))
            }
            Principal::Anonymous => Err(Error::Forbidden("list companies".to_string())),
        }
    }

    pub async fn create_company(
        &self,
        principal: &Principal,
        payload: CreateCompanyPayload,
    ) -> Result<Company> {
        let mut tables = self.store.write().await;
        verify_principal(&tables, principal)?;
        require(can_manage_companies(principal), "create company")?;
        validate(&payload)?;

        ensure_name_available(&tables, &payload.name, None)?;

        let id = tables.next_company_id();
        let company = tables.companies.insert(Company {
            id,
            name: payload.name.trim().to_string(),
            status: AccountStatus::Active,
            created_at: now(),
        });

        tracing::info!(company_id = %id, name = %company.name, "company created");
        Ok(company)
    }

    /// Renames and/or changes status. A status change goes through the
    /// lifecycle cascade under the same write guard as the rename.
    pub async fn update_company(
        &self,
        principal: &Principal,
        company_id: CompanyId,
        payload: UpdateCompanyPayload,
    ) -> Result<Option<CompanyUpdateResponse>> {
        let mut tables = self.store.write().await;
        verify_principal(&tables, principal)?;
        require(can_manage_companies(principal), "update company")?;
        validate(&payload)?;

        if !tables.companies.contains(company_id) {
            return Ok(None);
        }

        if let Some(name) = payload.name.as_deref() {
            ensure_name_available(&tables, name, Some(company_id))?;
        }

        let mut company = match payload.name {
            Some(name) => tables
                .companies
                .update(company_id, |c| c.name = name.trim().to_string()),
            None => tables.companies.get(company_id).cloned(),
        };

        let mut report = lifecycle::CascadeReport::default();
        if let Some(status) = payload.status {
            if let Some((updated, cascade)) =
                lifecycle::set_company_status(&mut tables, company_id, status)
            {
                company = Some(updated);
                report = cascade;
            }
        }

        Ok(company.map(|company| CompanyUpdateResponse {
            company,
            admins_blocked: report.admins_blocked,
            vacancies_deactivated: report.vacancies_deactivated,
        }))
    }

    /// `Ok(false)` when absent, `DependentsExist` while anything references it.
    pub async fn delete_company(&self, principal: &Principal, company_id: CompanyId) -> Result<bool> {
        let mut tables = self.store.write().await;
        verify_principal(&tables, principal)?;
        require(can_manage_companies(principal), "delete company")?;

        lifecycle::delete_company(&mut tables, company_id)
    }
}

fn ensure_name_available(tables: &Tables, name: &str, except: Option<CompanyId>) -> Result<()> {
    let taken = tables
        .companies
        .find(|c| c.matches_name(name) && Some(c.id) != except)
        .is_some();
    if taken {
        return Err(Error::CompanyNameTaken(name.trim().to_string()));
    }
    Ok(())
}
