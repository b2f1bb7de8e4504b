mod common;

use job_board::access::Principal;
use job_board::dto::vacancy_dto::{CreateVacancyPayload, UpdateVacancyPayload, VacancyListQuery};
use job_board::error::Error;
use job_board::models::company::{AccountStatus, CompanyId};
use job_board::models::vacancy::{EmploymentType, Vacancy, VacancyStatus};
use job_board::AppState;

use common::{company_id, login, setup_app, setup_empty_app, super_admin, TENANT_PASSWORD};

fn new_vacancy(title: &str, company_id: Option<CompanyId>) -> CreateVacancyPayload {
    CreateVacancyPayload {
        title: title.to_string(),
        category: "Engineering".to_string(),
        description: "Build and run services".to_string(),
        requirements: vec!["Rust".to_string(), " Tokio ".to_string()],
        location: "Remote".to_string(),
        employment_type: EmploymentType::FullTime,
        status: None,
        company_id,
    }
}

async fn all_vacancies(app: &AppState) -> Vec<Vacancy> {
    let root = super_admin(app).await;
    app.vacancy_service
        .list_vacancies(&root, VacancyListQuery::default())
        .await
        .unwrap()
}

#[tokio::test]
async fn public_board_shows_active_vacancies_of_active_companies() {
    let app = setup_app().await;
    let board = app.vacancy_service.list_public_vacancies().await.unwrap();

    let mut titles: Vec<_> = board.iter().map(|v| v.title.as_str()).collect();
    titles.sort_unstable();
    assert_eq!(titles, ["Senior Software Engineer (React)", "UI/UX Designer"]);

    let designer = board.iter().find(|v| v.title == "UI/UX Designer").unwrap();
    assert_eq!(designer.company, "Bluepeak Studio");
}

#[tokio::test]
async fn public_board_follows_company_status() {
    let app = setup_app().await;
    let root = super_admin(&app).await;
    let harbor = company_id(&app, "Harbor Logistics").await;

    // Reactivate one Harbor vacancy while the company is still blocked.
    let marketing = all_vacancies(&app)
        .await
        .into_iter()
        .find(|v| v.company_id == harbor)
        .unwrap();
    app.vacancy_service
        .update_vacancy(
            &root,
            marketing.id,
            UpdateVacancyPayload {
                status: Some(VacancyStatus::Active),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let board = app.vacancy_service.list_public_vacancies().await.unwrap();
    assert!(board.iter().all(|v| v.id != marketing.id));
    assert!(app
        .vacancy_service
        .get_vacancy(&Principal::Anonymous, marketing.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn empty_store_has_an_empty_board() {
    let app = setup_empty_app().await;
    assert!(app.vacancy_service.list_public_vacancies().await.unwrap().is_empty());
}

#[tokio::test]
async fn admin_cannot_create_vacancy_for_another_company() {
    let app = setup_app().await;
    let alice = login(&app, "alice@northwind.test", TENANT_PASSWORD).await;
    let bluepeak = company_id(&app, "Bluepeak Studio").await;
    let before = app.stats().await;

    let err = app
        .vacancy_service
        .create_vacancy(&alice, new_vacancy("Intruder", Some(bluepeak)))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Forbidden(_)));
    assert_eq!(app.stats().await, before);
}

#[tokio::test]
async fn admin_creates_vacancy_in_own_company_by_default() {
    let app = setup_app().await;
    let alice = login(&app, "alice@northwind.test", TENANT_PASSWORD).await;
    let northwind = company_id(&app, "Northwind Software").await;

    let created = app
        .vacancy_service
        .create_vacancy(&alice, new_vacancy("  Rust Engineer ", None))
        .await
        .unwrap();

    assert_eq!(created.company_id, northwind);
    assert_eq!(created.title, "Rust Engineer");
    assert_eq!(created.status, VacancyStatus::Active);
    assert_eq!(created.requirements, ["Rust", "Tokio"]);
    assert_eq!(created.created_at, created.updated_at);
}

#[tokio::test]
async fn anonymous_and_unknown_company_creation_fail() {
    let app = setup_app().await;
    let root = super_admin(&app).await;

    let err = app
        .vacancy_service
        .create_vacancy(&Principal::Anonymous, new_vacancy("Ghost", None))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Forbidden(_)));

    let err = app
        .vacancy_service
        .create_vacancy(&root, new_vacancy("Nowhere", Some(CompanyId::new())))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    let mut blank = new_vacancy("  ", None);
    blank.company_id = Some(company_id(&app, "Bluepeak Studio").await);
    let err = app
        .vacancy_service
        .create_vacancy(&root, blank)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn admin_listing_is_scoped_and_includes_inactive() {
    let app = setup_app().await;
    let alice = login(&app, "alice@northwind.test", TENANT_PASSWORD).await;
    let northwind = company_id(&app, "Northwind Software").await;

    let own = app
        .vacancy_service
        .list_vacancies(&alice, VacancyListQuery::default())
        .await
        .unwrap();
    assert_eq!(own.len(), 2);
    assert!(own.iter().all(|v| v.company_id == northwind));
    assert!(own.iter().any(|v| v.status == VacancyStatus::Inactive));

    let filtered = app
        .vacancy_service
        .list_vacancies(
            &alice,
            VacancyListQuery {
                search: Some("product".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Product Manager");
}

#[tokio::test]
async fn super_admin_sees_every_vacancy() {
    let app = setup_app().await;
    assert_eq!(all_vacancies(&app).await.len(), 4);

    let root = super_admin(&app).await;
    let inactive = app
        .vacancy_service
        .list_vacancies(
            &root,
            VacancyListQuery {
                status: Some(VacancyStatus::Inactive),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(inactive.len(), 2);
}

#[tokio::test]
async fn get_vacancy_hides_other_tenants() {
    let app = setup_app().await;
    let bob = login(&app, "bob@bluepeak.test", TENANT_PASSWORD).await;
    let northwind = company_id(&app, "Northwind Software").await;
    let theirs = all_vacancies(&app)
        .await
        .into_iter()
        .find(|v| v.company_id == northwind)
        .unwrap();

    assert!(app
        .vacancy_service
        .get_vacancy(&bob, theirs.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn moving_a_vacancy_needs_rights_on_both_companies() {
    let app = setup_app().await;
    let root = super_admin(&app).await;
    let alice = login(&app, "alice@northwind.test", TENANT_PASSWORD).await;
    let northwind = company_id(&app, "Northwind Software").await;
    let bluepeak = company_id(&app, "Bluepeak Studio").await;
    let own = all_vacancies(&app)
        .await
        .into_iter()
        .find(|v| v.company_id == northwind)
        .unwrap();

    let err = app
        .vacancy_service
        .update_vacancy(
            &alice,
            own.id,
            UpdateVacancyPayload {
                company_id: Some(bluepeak),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Forbidden(_)));

    let moved = app
        .vacancy_service
        .update_vacancy(
            &root,
            own.id,
            UpdateVacancyPayload {
                company_id: Some(bluepeak),
                title: Some("Frontend Engineer".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.company_id, bluepeak);
    assert_eq!(moved.title, "Frontend Engineer");
    assert!(moved.updated_at >= own.updated_at);

    // Alice lost it with the move.
    assert!(app
        .vacancy_service
        .get_vacancy(&alice, own.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn deleting_a_vacancy_removes_its_candidates() {
    let app = setup_app().await;
    let alice = login(&app, "alice@northwind.test", TENANT_PASSWORD).await;
    let before = app.stats().await;

    let with_applicants = app
        .vacancy_service
        .list_vacancies(&alice, VacancyListQuery::default())
        .await
        .unwrap()
        .into_iter()
        .find(|v| v.title == "Senior Software Engineer (React)")
        .unwrap();

    assert!(app
        .vacancy_service
        .delete_vacancy(&alice, with_applicants.id)
        .await
        .unwrap());
    assert!(!app
        .vacancy_service
        .delete_vacancy(&alice, with_applicants.id)
        .await
        .unwrap());

    let after = app.stats().await;
    assert_eq!(after.vacancies, before.vacancies - 1);
    assert_eq!(after.candidates, before.candidates - 2);

    let err = app
        .candidate_service
        .list_candidates(&alice, with_applicants.id)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn tenant_admin_cannot_delete_foreign_vacancy() {
    let app = setup_app().await;
    let bob = login(&app, "bob@bluepeak.test", TENANT_PASSWORD).await;
    let northwind = company_id(&app, "Northwind Software").await;
    let foreign = all_vacancies(&app)
        .await
        .into_iter()
        .find(|v| v.company_id == northwind)
        .unwrap();

    let err = app
        .vacancy_service
        .delete_vacancy(&bob, foreign.id)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Forbidden(_)));
    assert_eq!(all_vacancies(&app).await.len(), 4);
}

#[tokio::test]
async fn admin_of_blocked_company_loses_access() {
    let app = setup_app().await;
    let root = super_admin(&app).await;
    let alice = login(&app, "alice@northwind.test", TENANT_PASSWORD).await;
    let northwind = company_id(&app, "Northwind Software").await;
    let before = app.stats().await;

    app.company_service
        .update_company(
            &root,
            northwind,
            job_board::dto::company_dto::UpdateCompanyPayload {
                status: Some(AccountStatus::Blocked),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let err = app
        .vacancy_service
        .create_vacancy(&alice, new_vacancy("After The Block", None))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AccountBlocked));

    let err = app
        .vacancy_service
        .list_vacancies(&alice, VacancyListQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AccountBlocked));
    assert_eq!(app.stats().await, before);
}
