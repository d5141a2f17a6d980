use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Server configuration, read from `FINTRACK_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub migrations_path: PathBuf,
    /// Origins allowed to call the API from a browser.
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: env::var("FINTRACK_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("FINTRACK_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            database_path: env::var("FINTRACK_DATABASE_URL")
                .map(|v| parse_database_url(&v))
                .unwrap_or_else(|_| PathBuf::from("data/fintrack.db")),
            migrations_path: env::var("FINTRACK_MIGRATIONS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("migrations")),
            allowed_origins: env::var("FINTRACK_ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_else(|_| vec![DEFAULT_ALLOWED_ORIGIN.to_string()]),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where the frontend tier finds the API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server root, without the `/api` suffix.
    pub base_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            base_url: env::var("FINTRACK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into()),
        }
    }
}

fn parse_database_url(v: &str) -> PathBuf {
    PathBuf::from(
        v.strip_prefix("sqlite://")
            .or_else(|| v.strip_prefix("sqlite:"))
            .unwrap_or(v),
    )
}

fn parse_origins(v: &str) -> Vec<String> {
    v.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
