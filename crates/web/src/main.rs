use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod state;

use config::Config;
use features::leaderboard::hub::LeaderboardHub;
use middleware::auth::ApiKeys;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::colleges::handlers::list_colleges,
        features::colleges::handlers::create_college,
        features::colleges::handlers::delete_college,
        features::events::handlers::list_events,
        features::events::handlers::create_event,
        features::events::handlers::delete_event,
        features::results::handlers::list_results,
        features::results::handlers::submit_result,
        features::results::handlers::retract_result,
        features::users::handlers::list_users,
        features::users::handlers::create_user,
        features::users::handlers::delete_user,
        features::leaderboard::handlers::get_leaderboard,
    ),
    components(
        schemas(
            storage::dto::college::CreateCollegeRequest,
            storage::dto::college::CollegeResponse,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::EventResponse,
            storage::dto::score_record::SubmitResultRequest,
            storage::dto::user::CreateUserRequest,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::dto::leaderboard::LeaderboardSnapshot,
            storage::models::College,
            storage::models::Event,
            storage::models::ScoreRecord,
            storage::models::User,
        )
    ),
    tags(
        (name = "colleges", description = "College management"),
        (name = "events", description = "Event management"),
        (name = "results", description = "Score submission and retraction"),
        (name = "users", description = "Coordinator/admin account management"),
        (name = "leaderboard", description = "Public standings"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Fest Scoreboard API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let hub = Arc::new(LeaderboardHub::new());
    features::leaderboard::services::refresh_standings(&db, &hub)
        .await
        .context("Failed to compute initial standings")?;
    tracing::info!("Initial standings computed");

    let state = AppState::new(db, hub, ApiKeys::from_comma_separated(&config.api_keys));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/colleges", features::colleges::routes::routes(&state))
        .nest("/api/events", features::events::routes::routes(&state))
        .nest("/api/results", features::results::routes::routes(&state))
        .nest("/api/users", features::users::routes::routes(&state))
        .nest("/api/leaderboard", features::leaderboard::routes::routes())
        .merge(features::leaderboard::routes::ws_routes())
        .layer(cors)
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
