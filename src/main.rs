//! Interest Channels - HTTP server entrypoint
//!
//! Loads configuration, wires storage and the classifier into the axum
//! routers, and serves until Ctrl-C / SIGTERM.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interest_channels::adapters::classifier::{
    DisabledClassifier, HuggingFaceClassifier, HuggingFaceConfig,
};
use interest_channels::adapters::http::{api_router, LexiconAppState, SurveyAppState};
use interest_channels::adapters::memory::{
    InMemoryAuditLog, InMemoryChannelRepository, InMemoryLexiconRepository,
    InMemorySurveyAnalysisRepository, InMemoryUserRepository,
};
use interest_channels::adapters::postgres::{
    run_migrations, PostgresAuditLog, PostgresChannelRepository, PostgresLexiconRepository,
    PostgresSurveyAnalysisRepository, PostgresUserRepository,
};
use interest_channels::application::AnalyzeSurveyConfig;
use interest_channels::config::{AppConfig, ClassifierConfig, DatabaseConfig, ServerConfig};
use interest_channels::domain::interests::{CategoryMatcher, EditWindow};
use interest_channels::ports::{
    AuditLog, ChannelRepository, InterestClassifier, LexiconRepository, SurveyAnalysisRepository,
    UserRepository,
};

/// Storage ports, backed by either PostgreSQL or memory.
struct Storage {
    users: Arc<dyn UserRepository>,
    lexicon: Arc<dyn LexiconRepository>,
    analyses: Arc<dyn SurveyAnalysisRepository>,
    channels: Arc<dyn ChannelRepository>,
    audit_log: Arc<dyn AuditLog>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let storage = connect_storage(&config.database).await?;
    let classifier = build_classifier(&config.classifier)?;

    let survey_state = SurveyAppState {
        user_repository: storage.users,
        lexicon_repository: storage.lexicon.clone(),
        analysis_repository: storage.analyses,
        channel_repository: storage.channels,
        audit_log: storage.audit_log,
        classifier,
        config: AnalyzeSurveyConfig {
            edit_window: EditWindow::days(config.interests.edit_window_days),
            matcher: CategoryMatcher::new(config.interests.match_threshold),
            candidate_label_limit: config.classifier.candidate_label_limit,
            classifier_timeout: config.classifier.timeout(),
        },
    };
    let lexicon_state = LexiconAppState::new(storage.lexicon);

    let app = with_middleware(api_router(survey_state, lexicon_state), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .init();
    }
}

async fn connect_storage(database: &DatabaseConfig) -> Result<Storage, Box<dyn Error>> {
    if !database.is_configured() {
        tracing::warn!("No database URL configured, using in-memory storage");
        return Ok(Storage {
            users: Arc::new(InMemoryUserRepository::new()),
            lexicon: Arc::new(InMemoryLexiconRepository::new()),
            analyses: Arc::new(InMemorySurveyAnalysisRepository::new()),
            channels: Arc::new(InMemoryChannelRepository::new()),
            audit_log: Arc::new(InMemoryAuditLog::new()),
        });
    }

    let pool = PgPoolOptions::new()
        .min_connections(database.min_connections)
        .max_connections(database.max_connections)
        .acquire_timeout(database.acquire_timeout())
        .idle_timeout(database.idle_timeout())
        .max_lifetime(database.max_lifetime())
        .connect(&database.url)
        .await?;

    if database.run_migrations {
        run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(Storage {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        lexicon: Arc::new(PostgresLexiconRepository::new(pool.clone())),
        analyses: Arc::new(PostgresSurveyAnalysisRepository::new(pool.clone())),
        channels: Arc::new(PostgresChannelRepository::new(pool.clone())),
        audit_log: Arc::new(PostgresAuditLog::new(pool)),
    })
}

fn build_classifier(
    config: &ClassifierConfig,
) -> Result<Arc<dyn InterestClassifier>, Box<dyn Error>> {
    match (&config.api_key, config.enabled) {
        (Some(api_key), true) => {
            let hf = HuggingFaceConfig::from_secret(api_key.clone())
                .with_model(config.model.clone())
                .with_base_url(config.base_url.clone())
                .with_timeout(config.timeout());
            tracing::info!(model = %config.model, "External classifier enabled");
            Ok(Arc::new(HuggingFaceClassifier::new(hf)?))
        }
        _ => {
            tracing::info!("External classifier disabled, using fuzzy categories only");
            Ok(Arc::new(DisabledClassifier))
        }
    }
}

fn with_middleware(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if origins.is_empty() {
        if server.is_production() {
            return CorsLayer::new();
        }
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
