use std::sync::Arc;

use crate::dto::admin_dto::{AdminResponse, LoginPayload, RegisterAdminPayload};
use crate::error::{Error, Result};
use crate::models::admin::{Admin, AdminRole};
use crate::models::company::{AccountStatus, Company};
use crate::services::admin_service::{admin_response, ensure_email_available};
use crate::services::notification_service::ResetNotifier;
use crate::store::Store;
use crate::utils::time::now;
use crate::utils::token::generate_reset_token;
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct AuthService {
    store: Store,
    notifier: Arc<dyn ResetNotifier>,
    reset_token_length: usize,
}

impl AuthService {
    pub fn new(store: Store, notifier: Arc<dyn ResetNotifier>, reset_token_length: usize) -> Self {
        Self {
            store,
            notifier,
            reset_token_length,
        }
    }

    /// Checks credentials, then account status, then company status, in
    /// that order. A blocked admin of a blocked company gets `AccountBlocked`.
    pub async fn login(&self, payload: LoginPayload) -> Result<AdminResponse> {
        let tables = self.store.read().await;

        let Some(admin) = tables
            .admins
            .find(|a| a.has_email(&payload.email) && a.password == payload.password)
        else {
            tracing::warn!(email = %payload.email, "login rejected: invalid credentials");
            return Err(Error::InvalidCredentials);
        };

        if admin.status == AccountStatus::Blocked {
            tracing::warn!(admin_id = %admin.id, "login rejected: account blocked");
            return Err(Error::AccountBlocked);
        }

        if let Some(company) = tables.companies.get(admin.company_id) {
            if company.status == AccountStatus::Blocked {
                tracing::warn!(
                    admin_id = %admin.id,
                    company_id = %company.id,
                    "login rejected: company blocked"
                );
                return Err(Error::CompanyBlocked);
            }
        }

        tracing::info!(admin_id = %admin.id, role = ?admin.role, "admin logged in");
        Ok(admin_response(&tables, admin.clone()))
    }

    /// Self-registration: joins the company with the same name (ignoring
    /// case) or creates it, and always yields an active tenant admin.
    pub async fn register_admin(&self, payload: RegisterAdminPayload) -> Result<AdminResponse> {
        validate(&payload)?;

        let mut tables = self.store.write().await;
        ensure_email_available(&tables, &payload.email, None)?;

        let existing = tables
            .companies
            .find(|c| c.matches_name(&payload.company))
            .map(|c| c.id);
        let company_id = match existing {
            Some(id) => id,
            None => {
                let id = tables.next_company_id();
                tables.companies.insert(Company {
                    id,
                    name: payload.company.trim().to_string(),
                    status: AccountStatus::Active,
                    created_at: now(),
                });
                tracing::info!(company_id = %id, "company created by registration");
                id
            }
        };

        let id = tables.next_admin_id();
        let admin = tables.admins.insert(Admin {
            id,
            name: payload.name.trim().to_string(),
            email: payload.email.trim().to_string(),
            phone: payload.phone.trim().to_string(),
            company_id,
            role: AdminRole::Admin,
            status: AccountStatus::Active,
            password: payload.password,
            created_at: now(),
        });

        tracing::info!(admin_id = %id, company_id = %company_id, "admin registered");
        Ok(admin_response(&tables, admin))
    }

    /// Always succeeds for unknown addresses so callers cannot discover which
    /// emails are registered.
    pub async fn request_password_reset(&self, email: &str) -> Result<()> {
        let known = {
            let tables = self.store.read().await;
            tables.admins.find(|a| a.has_email(email)).is_some()
        };

        if !known {
            tracing::debug!(email = %email, "password reset requested for unknown email");
            return Ok(());
        }

        let token = generate_reset_token(self.reset_token_length);
        self.notifier.send_reset(email.trim(), &token)
    }
}
