mod common;

use std::sync::Arc;

use job_board::access::Principal;
use job_board::config::Config;
use job_board::dto::admin_dto::{LoginPayload, RegisterAdminPayload, UpdateAdminPayload};
use job_board::dto::company_dto::UpdateCompanyPayload;
use job_board::error::Error;
use job_board::models::admin::AdminRole;
use job_board::models::company::AccountStatus;
use job_board::services::notification_service::ResetNotifier;
use job_board::store::create_store;
use job_board::AppState;
use mockall::mock;

use common::{company_id, setup_app, super_admin, TENANT_PASSWORD};

mock! {
    pub Notifier {}

    impl ResetNotifier for Notifier {
        fn send_reset(&self, email: &str, token: &str) -> job_board::error::Result<()>;
    }
}

fn credentials(email: &str, password: &str) -> LoginPayload {
    LoginPayload {
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn registration(email: &str, company: &str) -> RegisterAdminPayload {
    RegisterAdminPayload {
        name: "Grace Hopper".to_string(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
        company: company.to_string(),
        password: "s3cret".to_string(),
    }
}

#[tokio::test]
async fn register_with_new_company_then_login_without_password_field() {
    let app = setup_app().await;

    let registered = app
        .auth_service
        .register_admin(registration("grace@acme.test", "Acme"))
        .await
        .expect("register");
    assert_eq!(registered.role, AdminRole::Admin);
    assert_eq!(registered.status, AccountStatus::Active);
    assert_eq!(registered.company_name.as_deref(), Some("Acme"));

    let acme = common::company(&app, "Acme").await;
    assert_eq!(acme.status, AccountStatus::Active);
    assert_eq!(acme.id, registered.company_id);

    let logged_in = app
        .auth_service
        .login(credentials("GRACE@acme.test", "s3cret"))
        .await
        .expect("login");
    assert_eq!(logged_in.id, registered.id);

    let json = serde_json::to_value(&logged_in).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(
        Principal::from(&logged_in),
        Principal::Admin {
            admin_id: registered.id,
            company_id: acme.id
        }
    );
}

#[tokio::test]
async fn registration_joins_existing_company_ignoring_case() {
    let app = setup_app().await;
    let northwind = company_id(&app, "Northwind Software").await;

    let registered = app
        .auth_service
        .register_admin(registration("new@northwind.test", "  northwind SOFTWARE "))
        .await
        .unwrap();

    assert_eq!(registered.company_id, northwind);
    let root = super_admin(&app).await;
    let companies = app.company_service.list_companies(&root).await.unwrap();
    assert_eq!(companies.len(), 3);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let app = setup_app().await;
    let err = app
        .auth_service
        .register_admin(registration("Alice@Northwind.test", "Acme"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::EmailTaken(_)));

    // Nothing was created on the way to the rejection.
    let root = super_admin(&app).await;
    let companies = app.company_service.list_companies(&root).await.unwrap();
    assert!(companies.iter().all(|c| c.name != "Acme"));
}

#[tokio::test]
async fn invalid_registration_payload_is_a_validation_error() {
    let app = setup_app().await;
    let mut payload = registration("not-an-email", "Acme");
    payload.name = "   ".to_string();

    let err = app.auth_service.register_admin(payload).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn wrong_password_is_invalid_credentials() {
    let app = setup_app().await;
    let err = app
        .auth_service
        .login(credentials("alice@northwind.test", "nope"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidCredentials));
    assert_eq!(err.code(), "invalid_credentials");
}

#[tokio::test]
async fn blocked_admin_in_blocked_company_reports_account_blocked() {
    let app = setup_app().await;
    // Dana is blocked and belongs to the blocked Harbor tenant.
    let err = app
        .auth_service
        .login(credentials("dana@harbor.test", TENANT_PASSWORD))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AccountBlocked));
}

#[tokio::test]
async fn active_admin_in_blocked_company_reports_company_blocked() {
    let app = setup_app().await;
    let root = super_admin(&app).await;
    let bluepeak = company_id(&app, "Bluepeak Studio").await;

    app.company_service
        .update_company(
            &root,
            bluepeak,
            UpdateCompanyPayload {
                status: Some(AccountStatus::Blocked),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    // The cascade blocked Bob; reactivate only his account.
    let bob = app
        .admin_service
        .list_admins(&root)
        .await
        .unwrap()
        .into_iter()
        .find(|a| a.email == "bob@bluepeak.test")
        .unwrap();
    assert_eq!(bob.status, AccountStatus::Blocked);
    app.admin_service
        .update_admin(
            &root,
            bob.id,
            UpdateAdminPayload {
                status: Some(AccountStatus::Active),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let err = app
        .auth_service
        .login(credentials("bob@bluepeak.test", TENANT_PASSWORD))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::CompanyBlocked));
}

#[tokio::test]
async fn super_admin_login_ignores_global_company() {
    let app = setup_app().await;
    let root = super_admin(&app).await;
    assert!(root.is_super_admin());
    assert_eq!(root.company_id(), None);
}

#[tokio::test]
async fn password_reset_notifies_known_email_only() {
    let config = Config::default();
    let store = create_store(&config).await.unwrap();

    let mut notifier = MockNotifier::new();
    notifier
        .expect_send_reset()
        .withf(|email, token| email.eq_ignore_ascii_case("alice@northwind.test") && token.len() == 32)
        .times(1)
        .returning(|_, _| Ok(()));

    let app = AppState::with_notifier(store, &config, Arc::new(notifier));

    app.auth_service
        .request_password_reset("alice@northwind.test")
        .await
        .expect("known email");
    app.auth_service
        .request_password_reset("nobody@example.test")
        .await
        .expect("unknown email still succeeds");
}

#[tokio::test]
async fn password_reset_surfaces_delivery_failure() {
    let config = Config::default();
    let store = create_store(&config).await.unwrap();

    let mut notifier = MockNotifier::new();
    notifier
        .expect_send_reset()
        .returning(|_, _| Err(Error::Notification("smtp down".to_string())));

    let app = AppState::with_notifier(store, &config, Arc::new(notifier));
    let err = app
        .auth_service
        .request_password_reset("bob@bluepeak.test")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Notification(_)));
}
