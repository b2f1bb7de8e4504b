//! Store-backed check of a caller's principal.
//!
//! Services run this under the same guard as the operation itself, before
//! any rule is consulted, so a principal only counts while the account and
//! company behind it are still in good standing.

use super::principal::Principal;
use crate::error::{Error, Result};
use crate::models::admin::{AdminId, AdminRole};
use crate::models::company::{AccountStatus, CompanyId};
use crate::store::Tables;

pub fn verify_principal(tables: &Tables, principal: &Principal) -> Result<()> {
    match *principal {
        Principal::Anonymous => Ok(()),
        Principal::SuperAdmin { admin_id } => {
            verify_admin(tables, admin_id, AdminRole::SuperAdmin, CompanyId::global())
        }
        Principal::Admin {
            admin_id,
            company_id,
        } => verify_admin(tables, admin_id, AdminRole::Admin, company_id),
    }
}

fn verify_admin(
    tables: &Tables,
    admin_id: AdminId,
    role: AdminRole,
    company_id: CompanyId,
) -> Result<()> {
    let Some(admin) = tables.admins.get(admin_id) else {
        tracing::warn!(admin_id = %admin_id, "rejected principal for unknown admin");
        return Err(Error::Forbidden("unknown principal".to_string()));
    };

    if admin.role != role || admin.company_id != company_id {
        tracing::warn!(admin_id = %admin_id, "rejected principal with stale role or company");
        return Err(Error::Forbidden("principal does not match account".to_string()));
    }

    if admin.status == AccountStatus::Blocked {
        return Err(Error::AccountBlocked);
    }

    if role == AdminRole::Admin {
        let company_active = tables
            .companies
            .get(company_id)
            .is_some_and(|c| c.status.is_active());
        if !company_active {
            return Err(Error::CompanyBlocked);
        }
    }

    Ok(())
}
