//! Pure visibility and mutability decisions.
//!
//! No store access happens here; callers pass in whatever facts a rule
//! needs. Services must consult these before any write.

use super::principal::Principal;
use crate::error::{Error, Result};
use crate::models::admin::AdminId;
use crate::models::company::{AccountStatus, CompanyId};
use crate::models::vacancy::Vacancy;

/// Public callers see a vacancy only while it and its company are active.
pub fn can_view_vacancy(
    principal: &Principal,
    vacancy: &Vacancy,
    company_status: Option<AccountStatus>,
) -> bool {
    match principal {
        Principal::SuperAdmin { .. } => true,
        Principal::Admin { company_id, .. } => vacancy.company_id == *company_id,
        Principal::Anonymous => {
            vacancy.is_active() && company_status.is_some_and(AccountStatus::is_active)
        }
    }
}

pub fn can_mutate_vacancy(principal: &Principal, company_id: CompanyId) -> bool {
    match principal {
        Principal::SuperAdmin { .. } => true,
        Principal::Admin {
            company_id: own, ..
        } => *own == company_id,
        Principal::Anonymous => false,
    }
}

pub fn can_view_candidates(principal: &Principal, vacancy: &Vacancy) -> bool {
    can_mutate_vacancy(principal, vacancy.company_id)
}

pub fn can_manage_admins(principal: &Principal) -> bool {
    principal.is_super_admin()
}

pub fn can_manage_companies(principal: &Principal) -> bool {
    principal.is_super_admin()
}

/// Nobody edits, resets or deletes their own admin record.
pub fn can_edit_own_admin_record() -> bool {
    false
}

pub fn is_self(principal: &Principal, target: AdminId) -> bool {
    principal.admin_id() == Some(target)
}

/// Turns a denied rule into `Error::Forbidden`.
pub fn require(allowed: bool, action: &str) -> Result<()> {
    if allowed {
        Ok(())
    } else {
        Err(Error::Forbidden(action.to_string()))
    }
}

/// Combined admin-management guard used by every admin mutation.
pub fn require_admin_management(principal: &Principal, target: AdminId) -> Result<()> {
    require(can_manage_admins(principal), "manage admins")?;
    if is_self(principal, target) && !can_edit_own_admin_record() {
        return Err(Error::SelfModification);
    }
    Ok(())
}
