use job_board::dto::vacancy_dto::VacancyPublicListResponse;
use job_board::{
    config::{get_config, init_config},
    store::create_store,
    telemetry, AppState,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config()?;
    telemetry::init(config)?;

    let store = create_store(config).await?;
    let app_state = AppState::new(store, config);

    let stats = app_state.stats().await;
    info!(
        companies = stats.companies,
        admins = stats.admins,
        vacancies = stats.vacancies,
        candidates = stats.candidates,
        "job board ready"
    );

    let items = app_state.vacancy_service.list_public_vacancies().await?;
    info!(count = items.len(), "public vacancies");

    let board = VacancyPublicListResponse { items };
    println!("{}", serde_json::to_string_pretty(&board)?);

    Ok(())
}
