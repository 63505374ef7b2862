use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use suiteprompt_api::captcha::{TurnstileConfig, TurnstileVerifier};
use suiteprompt_api::config::ServerConfig;
use suiteprompt_api::router::build_app_router;
use suiteprompt_api::state::AppState;
use suiteprompt_catalog::Catalog;
use suiteprompt_core::taxonomy::Taxonomy;
use suiteprompt_github::{GithubClient, GithubConfig};
use suiteprompt_notify::{EmailConfig, EmailDelivery};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "suiteprompt_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Catalog snapshot ---
    let catalog = Catalog::from_file(&config.marketplace_data_path)
        .expect("Failed to load catalog snapshot");

    // --- Taxonomy ---
    let taxonomy =
        Taxonomy::from_file(&config.taxonomy_path).expect("Failed to load taxonomy configuration");
    tracing::info!(
        prompt_categories = taxonomy.submission_categories.prompts.len(),
        skill_categories = taxonomy.submission_categories.skills.len(),
        "Taxonomy loaded"
    );

    // --- External collaborators ---
    let github = GithubClient::new(GithubConfig::from_env());
    let captcha = TurnstileVerifier::new(TurnstileConfig::from_env());

    let mailer = match EmailConfig::from_env() {
        Some(email_config) => {
            tracing::info!(host = %email_config.smtp_host, "Email delivery configured");
            Some(Arc::new(EmailDelivery::new(email_config)))
        }
        None => {
            tracing::warn!("SMTP_HOST not set; submission confirmation emails disabled");
            None
        }
    };

    // --- App state ---
    let state = AppState {
        catalog: Arc::new(catalog),
        taxonomy: Arc::new(taxonomy),
        config: Arc::new(config.clone()),
        github: Arc::new(github),
        captcha: Arc::new(captcha),
        mailer,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
