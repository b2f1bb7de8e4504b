//! Company and vacancy lifecycle cascades.
//!
//! Every function takes `&mut Tables`, so callers run them under the single
//! store write guard and readers never see a partial cascade.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::company::{AccountStatus, Company, CompanyId};
use crate::models::vacancy::{VacancyId, VacancyStatus};
use crate::store::Tables;
use crate::utils::time::now;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CascadeReport {
    pub admins_blocked: usize,
    pub vacancies_deactivated: usize,
}

/// Blocking marks every admin of the company Blocked and every vacancy
/// Inactive. Unblocking only flips the company; dependents stay as they are.
pub fn set_company_status(
    tables: &mut Tables,
    company_id: CompanyId,
    status: AccountStatus,
) -> Option<(Company, CascadeReport)> {
    let company = tables.companies.update(company_id, |c| c.status = status)?;

    let mut report = CascadeReport::default();
    if status == AccountStatus::Blocked {
        for admin in tables
            .admins
            .iter_mut()
            .filter(|a| a.company_id == company_id)
        {
            if admin.status != AccountStatus::Blocked {
                admin.status = AccountStatus::Blocked;
                report.admins_blocked += 1;
            }
        }

        let touched = now();
        for vacancy in tables
            .vacancies
            .iter_mut()
            .filter(|v| v.company_id == company_id)
        {
            if vacancy.status != VacancyStatus::Inactive {
                vacancy.status = VacancyStatus::Inactive;
                vacancy.updated_at = touched;
                report.vacancies_deactivated += 1;
            }
        }
    }

    tracing::info!(
        company_id = %company_id,
        status = ?status,
        admins_blocked = report.admins_blocked,
        vacancies_deactivated = report.vacancies_deactivated,
        "company status changed"
    );
    Some((company, report))
}

/// `Ok(false)` when absent; `DependentsExist` while admins or vacancies
/// still reference the company.
pub fn delete_company(tables: &mut Tables, company_id: CompanyId) -> Result<bool> {
    if !tables.companies.contains(company_id) {
        return Ok(false);
    }

    let admins = tables.admins.count_where(|a| a.company_id == company_id);
    let vacancies = tables.vacancies.count_where(|v| v.company_id == company_id);
    if admins > 0 || vacancies > 0 {
        tracing::warn!(
            company_id = %company_id,
            admins,
            vacancies,
            "company deletion blocked by dependents"
        );
        return Err(Error::DependentsExist { admins, vacancies });
    }

    tables.companies.remove(company_id);
    tracing::info!(company_id = %company_id, "company deleted");
    Ok(true)
}

/// Removes the vacancy and its candidates. Returns how many candidates went
/// with it, or `None` when the vacancy does not exist.
pub fn delete_vacancy(tables: &mut Tables, vacancy_id: VacancyId) -> Option<usize> {
    tables.vacancies.remove(vacancy_id)?;
    let removed = tables.candidates.remove_where(|c| c.job_id == vacancy_id);
    tracing::info!(
        vacancy_id = %vacancy_id,
        candidates_removed = removed,
        "vacancy deleted"
    );
    Some(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    fn seeded() -> Tables {
        let mut tables = Tables::default();
        seed::demo_data(&mut tables);
        tables
    }

    fn company_named(tables: &Tables, name: &str) -> CompanyId {
        tables
            .companies
            .find(|c| c.name == name)
            .map(|c| c.id)
            .unwrap()
    }

    #[test]
    fn blocking_cascades_and_reports_only_changes() {
        let mut tables = seeded();
        let northwind = company_named(&tables, "Northwind Software");

        let (company, report) =
            set_company_status(&mut tables, northwind, AccountStatus::Blocked).unwrap();

        assert_eq!(company.status, AccountStatus::Blocked);
        // Charlie was already blocked, the product role already inactive.
        assert_eq!(
            report,
            CascadeReport {
                admins_blocked: 1,
                vacancies_deactivated: 1
            }
        );
    }

    #[test]
    fn unknown_company_is_absent() {
        let mut tables = seeded();
        assert!(set_company_status(&mut tables, CompanyId::new(), AccountStatus::Blocked).is_none());
        assert!(!delete_company(&mut tables, CompanyId::new()).unwrap());
    }

    #[test]
    fn deleting_vacancy_twice_is_absent_the_second_time() {
        let mut tables = seeded();
        let vacancy_id = tables.vacancies.iter().next().unwrap().id;
        assert_eq!(delete_vacancy(&mut tables, vacancy_id), Some(2));
        assert_eq!(delete_vacancy(&mut tables, vacancy_id), None);
    }
}
