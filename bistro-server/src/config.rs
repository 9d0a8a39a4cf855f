use tracing::warn;

use crate::response::ServerResult;

const DEFAULT_SECRET: &str = "change_me_in_prod";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongo_uri: String,
    pub mongo_db: String,
    pub token_secret: String,
    pub port: u16,
    /// Browser origins allowed to call the API with credentials. Empty means any
    /// origin, without credentials.
    pub cors_origins: Vec<String>,
    pub cookie_secure: bool,
}

impl AppConfig {
    pub fn from_env() -> ServerResult<Self> {
        // A missing .env file is fine, the process environment wins anyway.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> ServerResult<Self> {
        let mongo_uri = match var("MONGO_URI") {
            Some(uri) => uri,
            None => atlas_uri(var("DB_USER"), var("DB_PASS"), var("DB_CLUSTER")),
        };
        let mongo_db = var("MONGO_DB").unwrap_or_else(|| "BistroBoss".into());

        let token_secret = var("ACCESS_TOKEN_SECRET").unwrap_or_else(|| {
            warn!("ACCESS_TOKEN_SECRET not set, using an insecure default");
            DEFAULT_SECRET.into()
        });

        let port = var("PORT").unwrap_or_else(|| "5000".into()).parse::<u16>()?;

        let cors_origins = var("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let cookie_secure = var("COOKIE_SECURE").unwrap_or("0".to_string()) == "1";

        Ok(Self {
            mongo_uri,
            mongo_db,
            token_secret,
            port,
            cors_origins,
            cookie_secure,
        })
    }
}

fn atlas_uri(user: Option<String>, pass: Option<String>, cluster: Option<String>) -> String {
    match (user, pass) {
        (Some(user), Some(pass)) => {
            let cluster = cluster.unwrap_or_else(|| "cluster0.mongodb.net".into());
            format!("mongodb+srv://{user}:{pass}@{cluster}/?retryWrites=true&w=majority")
        }
        _ => "mongodb://localhost:27017".into(),
    }
}
