#![allow(dead_code)]

use job_board::access::Principal;
use job_board::config::Config;
use job_board::dto::admin_dto::LoginPayload;
use job_board::models::company::{Company, CompanyId};
use job_board::store::create_store;
use job_board::AppState;

pub const SUPER_EMAIL: &str = "super@admin.com";
pub const SUPER_PASSWORD: &str = "superadmin";
pub const TENANT_PASSWORD: &str = "password123";

pub async fn setup_app() -> AppState {
    setup_with(Config::default()).await
}

pub async fn setup_empty_app() -> AppState {
    setup_with(Config {
        seed_demo_data: false,
        ..Config::default()
    })
    .await
}

async fn setup_with(config: Config) -> AppState {
    let store = create_store(&config).await.expect("store");
    AppState::new(store, &config)
}

pub async fn login(app: &AppState, email: &str, password: &str) -> Principal {
    let admin = app
        .auth_service
        .login(LoginPayload {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
        .expect("login");
    Principal::from(&admin)
}

pub async fn super_admin(app: &AppState) -> Principal {
    login(app, SUPER_EMAIL, SUPER_PASSWORD).await
}

pub async fn company(app: &AppState, name: &str) -> Company {
    let root = super_admin(app).await;
    app.company_service
        .list_companies(&root)
        .await
        .expect("companies")
        .into_iter()
        .find(|c| c.name == name)
        .expect("seeded company")
}

pub async fn company_id(app: &AppState, name: &str) -> CompanyId {
    company(app, name).await.id
}
