use chrono::Duration;

use super::Tables;
use crate::config::Config;
use crate::models::admin::{Admin, AdminRole};
use crate::models::candidate::Candidate;
use crate::models::company::{AccountStatus, Company, CompanyId};
use crate::models::vacancy::{EmploymentType, Vacancy, VacancyId, VacancyStatus};
use crate::utils::time::now;

pub fn bootstrap_super_admin(tables: &mut Tables, config: &Config) {
    if tables
        .admins
        .find(|a| a.has_email(&config.super_admin_email))
        .is_some()
    {
        return;
    }
    let id = tables.next_admin_id();
    tables.admins.insert(Admin {
        id,
        name: "Super Admin".to_string(),
        email: config.super_admin_email.clone(),
        phone: "777-888-9999".to_string(),
        company_id: CompanyId::global(),
        role: AdminRole::SuperAdmin,
        status: AccountStatus::Active,
        password: config.super_admin_password.clone(),
        created_at: now(),
    });
    tracing::debug!(admin_id = %id, "bootstrapped super admin");
}

/// Three tenants (one blocked) with admins, vacancies and a few applicants.
pub fn demo_data(tables: &mut Tables) {
    let northwind = add_company(tables, "Northwind Software", AccountStatus::Active);
    let bluepeak = add_company(tables, "Bluepeak Studio", AccountStatus::Active);
    let harbor = add_company(tables, "Harbor Logistics", AccountStatus::Blocked);

    add_admin(tables, "Alice Johnson", "alice@northwind.test", "111-222-3333", northwind, AccountStatus::Active);
    add_admin(tables, "Bob Williams", "bob@bluepeak.test", "444-555-6666", bluepeak, AccountStatus::Active);
    add_admin(tables, "Charlie Brown", "charlie@northwind.test", "111-222-4444", northwind, AccountStatus::Blocked);
    add_admin(tables, "Dana Reyes", "dana@harbor.test", "222-333-4444", harbor, AccountStatus::Blocked);

    let frontend = add_vacancy(
        tables,
        northwind,
        "Senior Software Engineer (React)",
        "Engineering",
        "Build and maintain complex, high-performance user interfaces with the frontend team.",
        &["5+ years with React", "TypeScript", "State management", "Unit testing"],
        "Remote",
        EmploymentType::FullTime,
        VacancyStatus::Active,
    );
    let designer = add_vacancy(
        tables,
        bluepeak,
        "UI/UX Designer",
        "Design",
        "Design intuitive interfaces for our web and mobile applications.",
        &["Strong design portfolio", "Figma", "User-centred design"],
        "Mexico City",
        EmploymentType::FullTime,
        VacancyStatus::Active,
    );
    add_vacancy(
        tables,
        northwind,
        "Product Manager",
        "Product",
        "Own the roadmap and strategy of one of our core products.",
        &["Prior product management experience", "Agile delivery"],
        "Remote",
        EmploymentType::Contract,
        VacancyStatus::Inactive,
    );
    add_vacancy(
        tables,
        harbor,
        "Digital Marketing Specialist",
        "Marketing",
        "Run the launch campaign for our new freight tracking service.",
        &["SEO", "SEM", "Social media"],
        "Remote",
        EmploymentType::PartTime,
        VacancyStatus::Inactive,
    );

    add_candidate(tables, frontend, "Ana Garcia", "Frontend Developer", 6, "Madrid, Spain", "ana.garcia@example.test", "Ana_Garcia_CV.pdf", 2);
    add_candidate(tables, frontend, "Carlos Rodriguez", "Software Engineer", 8, "Bogota, Colombia", "carlos.r@example.test", "Carlos_Rodriguez_CV.docx", 1);
    add_candidate(tables, designer, "Sofia Martinez", "UX Designer", 4, "Buenos Aires, Argentina", "sofia.m@example.test", "Sofia_Martinez_CV.pdf", 0);
}

fn add_company(tables: &mut Tables, name: &str, status: AccountStatus) -> CompanyId {
    let id = tables.next_company_id();
    tables.companies.insert(Company {
        id,
        name: name.to_string(),
        status,
        created_at: now(),
    });
    id
}

fn add_admin(
    tables: &mut Tables,
    name: &str,
    email: &str,
    phone: &str,
    company_id: CompanyId,
    status: AccountStatus,
) {
    let id = tables.next_admin_id();
    tables.admins.insert(Admin {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        company_id,
        role: AdminRole::Admin,
        status,
        password: "password123".to_string(),
        created_at: now(),
    });
}

#[allow(clippy::too_many_arguments)]
fn add_vacancy(
    tables: &mut Tables,
    company_id: CompanyId,
    title: &str,
    category: &str,
    description: &str,
    requirements: &[&str],
    location: &str,
    employment_type: EmploymentType,
    status: VacancyStatus,
) -> VacancyId {
    let id = tables.next_vacancy_id();
    let created_at = now();
    tables.vacancies.insert(Vacancy {
        id,
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
        location: location.to_string(),
        employment_type,
        status,
        company_id,
        created_at,
        updated_at: created_at,
    });
    id
}

#[allow(clippy::too_many_arguments)]
fn add_candidate(
    tables: &mut Tables,
    job_id: VacancyId,
    full_name: &str,
    professional_title: &str,
    years_of_experience: u32,
    location: &str,
    email: &str,
    cv_file_name: &str,
    days_ago: i64,
) {
    let id = tables.next_candidate_id();
    tables.candidates.insert(Candidate {
        id,
        job_id,
        full_name: full_name.to_string(),
        professional_title: professional_title.to_string(),
        years_of_experience,
        location: location.to_string(),
        email: email.to_string(),
        phone: "+00 000 000 000".to_string(),
        cv_file_reference: format!("cv/{}/{}", id, cv_file_name),
        cv_file_name: cv_file_name.to_string(),
        application_date: now() - Duration::days(days_ago),
    });
}
