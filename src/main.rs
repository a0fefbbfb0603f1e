use std::sync::Arc;

use expensey::{app, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "expensey=debug,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = AppState::init()?;
    tracing::info!(
        base_url = %app_state.config.people.base_url,
        start_page = app_state.config.people.start_page,
        "people source configured"
    );

    // First read of the contacts list, like the page does when it opens.
    // Failures are logged by the pipeline and leave the list empty.
    let nutshells = Arc::clone(&app_state.nutshells);
    let start_page = app_state.config.people.start_page;
    tokio::spawn(async move {
        let _ = nutshells.load_all(start_page).await;
    });

    let config = Arc::clone(&app_state.config);
    app::serve(app::build_app(app_state), &config).await
}
