pub mod access;
pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::services::{
    admin_service::AdminService,
    auth_service::AuthService,
    candidate_service::CandidateService,
    company_service::CompanyService,
    notification_service::{LogNotifier, ResetNotifier},
    vacancy_service::VacancyService,
};
use crate::store::Store;

/// The façade handed to the presentation layer. Every read and write goes
/// through one of these services; the store itself is never exposed.
#[derive(Clone)]
pub struct AppState {
    store: Store,
    pub auth_service: AuthService,
    pub admin_service: AdminService,
    pub company_service: CompanyService,
    pub vacancy_service: VacancyService,
    pub candidate_service: CandidateService,
}

impl AppState {
    pub fn new(store: Store, config: &Config) -> Self {
        Self::with_notifier(store, config, Arc::new(LogNotifier))
    }

    pub fn with_notifier(store: Store, config: &Config, notifier: Arc<dyn ResetNotifier>) -> Self {
        let auth_service = AuthService::new(store.clone(), notifier, config.reset_token_length);
        let admin_service = AdminService::new(store.clone(), config.default_reset_password.clone());
        let company_service = CompanyService::new(store.clone());
        let vacancy_service = VacancyService::new(store.clone());
        let candidate_service = CandidateService::new(store.clone());

        Self {
            store,
            auth_service,
            admin_service,
            company_service,
            vacancy_service,
            candidate_service,
        }
    }

    pub async fn stats(&self) -> store::StoreStats {
        self.store.stats().await
    }
}
