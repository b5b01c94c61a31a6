use std::env;

use tracing::warn;

/// Everything read from the environment, once, at startup. Handed down
/// explicitly so nothing else in the process touches `env::var`.
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: String,
    pub jwt_secret: String,
    /// Exact origin allowed for CORS; permissive when unset.
    pub client_url: Option<String>,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub admin_password_hash: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port: u16 = env::var("VITRINE_PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()?;

        let jwt_secret = env::var("VITRINE_JWT_SECRET").unwrap_or_else(|_| {
            warn!("VITRINE_JWT_SECRET not set, using dev default");
            "dev-secret-change-me".into()
        });

        Ok(Self {
            host: env::var("VITRINE_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            db_path: env::var("VITRINE_DB_PATH").unwrap_or_else(|_| "inquiries.db".into()),
            jwt_secret,
            client_url: env::var("CLIENT_URL").ok(),
            admin_username: env::var("ADMIN_USERNAME").ok(),
            admin_password: env::var("ADMIN_PASSWORD").ok(),
            admin_password_hash: env::var("ADMIN_PASSWORD_HASH").ok(),
        })
    }
}
