/*!
Runtime configuration, read from the environment (and `.env` via `dotenv`).
*/
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDb,
    Memory,
}

impl StoreBackend {
    fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StoreBackend::MongoDb),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!(
                "STORE_BACKEND must be \"mongodb\" or \"memory\", got {:?}",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store_backend: StoreBackend,
    /// Required when `store_backend` is MongoDB.
    pub database_url: Option<String>,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("Error parsing PORT {:?}: {}", raw, e))?,
            None => 8080,
        };

        let store_backend = match lookup("STORE_BACKEND") {
            Some(raw) => StoreBackend::parse(&raw)?,
            None => StoreBackend::MongoDb,
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if store_backend == StoreBackend::MongoDb && database_url.is_none() {
            return Err("DATABASE_URL must be set when STORE_BACKEND is mongodb".to_string());
        }

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            store_backend,
            database_url,
            cors_allowed_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
