mod config;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use vitrine_api::auth::{self, AdminCredential, AppStateInner, AuthConfig};

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrine=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    // Init database (idempotent schema setup happens inside open)
    let db = vitrine_db::Database::open(&PathBuf::from(&config.db_path))?;

    let admin = resolve_admin_credential(&config)?;
    let state = Arc::new(AppStateInner {
        db,
        auth: AuthConfig {
            admin,
            jwt_secret: config.jwt_secret.clone(),
        },
    });

    let cors = match &config.client_url {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        None => CorsLayer::permissive(),
    };

    let app = vitrine_api::routes(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Vitrine server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Prefer a pre-hashed credential; hash a plaintext one at startup if
/// that is all the deployment provides. A missing credential is allowed
/// at boot but turns every login attempt into a 500.
fn resolve_admin_credential(config: &Config) -> anyhow::Result<Option<AdminCredential>> {
    match (
        &config.admin_username,
        &config.admin_password_hash,
        &config.admin_password,
    ) {
        (Some(username), Some(hash), _) => Ok(Some(AdminCredential {
            username: username.clone(),
            password_hash: hash.clone(),
        })),
        (Some(username), None, Some(password)) => {
            warn!("ADMIN_PASSWORD is plaintext; hashing at startup. Prefer ADMIN_PASSWORD_HASH");
            Ok(Some(AdminCredential {
                username: username.clone(),
                password_hash: auth::hash_password(password)?,
            }))
        }
        _ => {
            warn!("Admin credentials not configured; /api/login will report a server error");
            Ok(None)
        }
    }
}
