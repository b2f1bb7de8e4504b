use crate::access::rules::{can_manage_admins, require, require_admin_management};
use crate::access::{verify_principal, Principal};
use crate::dto::admin_dto::{AdminResponse, CreateAdminPayload, UpdateAdminPayload};
use crate::error::{Error, Result};
use crate::models::admin::{Admin, AdminId, AdminRole};
use crate::models::company::{AccountStatus, CompanyId};
use crate::store::{Store, Tables};
use crate::utils::time::now;
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct AdminService {
    store: Store,
    default_reset_password: String,
}

impl AdminService {
    pub fn new(store: Store, default_reset_password: String) -> Self {
        Self {
            store,
            default_reset_password,
        }
    }

    /// Every admin except the caller.
    pub async fn list_admins(&self, principal: &Principal) -> Result<Vec<AdminResponse>> {
        let tables = self.store.read().await;
        verify_principal(&tables, principal)?;
        require(can_manage_admins(principal), "list admins")?;
        let caller = principal.admin_id();

        let admins = tables
            .admins
            .filter(|a| Some(a.id) != caller)
            .into_iter()
            .map(|a| admin_response(&tables, a))
            .collect();
        Ok(admins)
    }

    pub async fn create_admin(
        &self,
        principal: &Principal,
        payload: CreateAdminPayload,
    ) -> Result<AdminResponse> {
        let mut tables = self.store.write().await;
        verify_principal(&tables, principal)?;
        require(can_manage_admins(principal), "create admin")?;
        validate(&payload)?;

        ensure_email_available(&tables, &payload.email, None)?;
        let company_id = resolve_company(&tables, payload.role, payload.company_id)?;

        let id = tables.next_admin_id();
        let admin = tables.admins.insert(Admin {
            id,
            name: payload.name.trim().to_string(),
            email: payload.email.trim().to_string(),
            phone: payload.phone.trim().to_string(),
            company_id,
            role: payload.role,
            status: AccountStatus::Active,
            password: payload.password,
            created_at: now(),
        });

        tracing::info!(admin_id = %id, role = ?admin.role, company_id = %company_id, "admin created");
        Ok(admin_response(&tables, admin))
    }

    /// `Ok(None)` when the admin does not exist.
    pub async fn update_admin(
        &self,
        principal: &Principal,
        admin_id: AdminId,
        payload: UpdateAdminPayload,
    ) -> Result<Option<AdminResponse>> {
        let mut tables = self.store.write().await;
        verify_principal(&tables, principal)?;
        require_admin_management(principal, admin_id)?;
        validate(&payload)?;

        let Some(current) = tables.admins.get(admin_id).cloned() else {
            return Ok(None);
        };

        if let Some(email) = payload.email.as_deref() {
            ensure_email_available(&tables, email, Some(admin_id))?;
        }

        let role = payload.role.unwrap_or(current.role);
        let requested_company = payload.company_id.or(match role {
            AdminRole::Admin if !current.company_id.is_global() => Some(current.company_id),
            _ => None,
        });
        let company_id = resolve_company(&tables, role, requested_company)?;

        let updated = tables.admins.update(admin_id, |admin| {
            if let Some(name) = payload.name {
                admin.name = name.trim().to_string();
            }
            if let Some(email) = payload.email {
                admin.email = email.trim().to_string();
            }
            if let Some(phone) = payload.phone {
                admin.phone = phone.trim().to_string();
            }
            if let Some(status) = payload.status {
                admin.status = status;
            }
            if let Some(password) = payload.password.filter(|p| !p.is_empty()) {
                admin.password = password;
            }
            admin.role = role;
            admin.company_id = company_id;
        });

        tracing::info!(admin_id = %admin_id, "admin updated");
        Ok(updated.map(|admin| admin_response(&tables, admin)))
    }

    pub async fn delete_admin(&self, principal: &Principal, admin_id: AdminId) -> Result<bool> {
        let mut tables = self.store.write().await;
        verify_principal(&tables, principal)?;
        require_admin_management(principal, admin_id)?;

        let removed = tables.admins.remove(admin_id).is_some();
        if removed {
            tracing::info!(admin_id = %admin_id, "admin deleted");
        }
        Ok(removed)
    }

    /// Puts the account back on the configured default password.
    pub async fn reset_admin_password(
        &self,
        principal: &Principal,
        admin_id: AdminId,
    ) -> Result<bool> {
        let mut tables = self.store.write().await;
        verify_principal(&tables, principal)?;
        require_admin_management(principal, admin_id)?;

        let password = self.default_reset_password.clone();
        let reset = tables
            .admins
            .update(admin_id, |admin| admin.password = password)
            .is_some();
        if reset {
            tracing::info!(admin_id = %admin_id, "admin password reset to default");
        }
        Ok(reset)
    }
}

pub(crate) fn admin_response(tables: &Tables, admin: Admin) -> AdminResponse {
    let company_name = tables.company_name(admin.company_id);
    AdminResponse::new(admin, company_name)
}

/// Emails are unique across all admins, compared without case.
pub(crate) fn ensure_email_available(
    tables: &Tables,
    email: &str,
    except: Option<AdminId>,
) -> Result<()> {
    let taken = tables
        .admins
        .find(|a| a.has_email(email) && Some(a.id) != except)
        .is_some();
    if taken {
        return Err(Error::EmailTaken(email.trim().to_string()));
    }
    Ok(())
}

/// Tenant admins need an existing company; super admins always sit in the
/// global tenant.
fn resolve_company(
    tables: &Tables,
    role: AdminRole,
    company_id: Option<CompanyId>,
) -> Result<CompanyId> {
    match role {
        AdminRole::SuperAdmin => Ok(CompanyId::global()),
        AdminRole::Admin => {
            let company_id = company_id
                .ok_or_else(|| Error::NotFound("company is required for admins".to_string()))?;
            if !tables.companies.contains(company_id) {
                return Err(Error::NotFound(format!("company {}", company_id)));
            }
            Ok(company_id)
        }
    }
}
