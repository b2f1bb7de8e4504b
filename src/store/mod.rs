//! In-memory entity store.
//!
//! The store is a cheap cloneable handle around one lock. Façade services
//! take the write guard once per mutation, so a cascade is never observed
//! half-applied by a reader.

pub mod collection;
pub mod seed;

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::Config;
use crate::error::Result;
use crate::models::admin::{Admin, AdminId};
use crate::models::candidate::{Candidate, CandidateId};
use crate::models::company::{Company, CompanyId};
use crate::models::vacancy::{Vacancy, VacancyId};

pub use collection::{Collection, Record};

#[derive(Debug, Default)]
pub struct Tables {
    pub companies: Collection<Company>,
    pub admins: Collection<Admin>,
    pub vacancies: Collection<Vacancy>,
    pub candidates: Collection<Candidate>,
}

impl Tables {
    pub fn next_company_id(&self) -> CompanyId {
        loop {
            let id = CompanyId::new();
            if !id.is_global() && !self.companies.contains(id) {
                return id;
            }
        }
    }

    pub fn next_admin_id(&self) -> AdminId {
        loop {
            let id = AdminId::new();
            if !self.admins.contains(id) {
                return id;
            }
        }
    }

    pub fn next_vacancy_id(&self) -> VacancyId {
        loop {
            let id = VacancyId::new();
            if !self.vacancies.contains(id) {
                return id;
            }
        }
    }

    pub fn next_candidate_id(&self) -> CandidateId {
        loop {
            let id = CandidateId::new();
            if !self.candidates.contains(id) {
                return id;
            }
        }
    }

    pub fn company_name(&self, id: CompanyId) -> Option<String> {
        self.companies.get(id).map(|c| c.name.clone())
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            companies: self.companies.len(),
            admins: self.admins.len(),
            vacancies: self.vacancies.len(),
            candidates: self.candidates.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub companies: usize,
    pub admins: usize,
    pub vacancies: usize,
    pub candidates: usize,
}

#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Tables>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.inner.write().await
    }

    pub async fn stats(&self) -> StoreStats {
        self.read().await.stats()
    }
}

/// Builds the process store: always bootstraps the configured super admin,
/// and loads demo tenants when `SEED_DEMO_DATA` is on.
pub async fn create_store(config: &Config) -> Result<Store> {
    let store = Store::new();
    {
        let mut tables = store.write().await;
        seed::bootstrap_super_admin(&mut tables, config);
        if config.seed_demo_data {
            seed::demo_data(&mut tables);
        }
        tracing::info!(stats = ?tables.stats(), "store initialised");
    }
    Ok(store)
}
