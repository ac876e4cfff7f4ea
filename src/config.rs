use crate::error::{AppError, AppResult};
use std::env;

/// Origins allowed when `ALLOWED_ORIGINS` is unset: the deployed frontend,
/// the local Vite dev server, and the ngrok tunnel used during demos.
const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "https://billion-dollars-idea.vercel.app",
    "http://localhost:5173",
    "https://6c48-51-20-140-171.ngrok-free.app",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid SERVER_PORT".to_string()))?;

        let allowed_origins = match env::var("ALLOWED_ORIGINS") {
            Ok(raw) => parse_origins(&raw),
            Err(_) => DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        let config = Config {
            server: ServerConfig {
                host: server_host,
                port: server_port,
            },
            cors: CorsConfig { allowed_origins },
        };

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> AppResult<()> {
        if self.cors.allowed_origins.is_empty() {
            return Err(AppError::Configuration(
                "ALLOWED_ORIGINS must contain at least one origin".to_string(),
            ));
        }

        for origin in &self.cors.allowed_origins {
            // The policy is credentialed, and browsers ignore
            // `Access-Control-Allow-Origin: *` when credentials are enabled.
            if origin == "*" {
                return Err(AppError::Configuration(
                    "ALLOWED_ORIGINS cannot contain '*': credentialed CORS requires explicit origins"
                        .to_string(),
                ));
            }

            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(AppError::Configuration(format!(
                    "Invalid origin '{}': origins must start with http:// or https://",
                    origin
                )));
            }

            if origin.parse::<http::HeaderValue>().is_err() {
                return Err(AppError::Configuration(format!(
                    "Invalid origin '{}': not a valid header value",
                    origin
                )));
            }
        }

        Ok(())
    }
}

/// Split a comma-separated origin list, trimming whitespace around entries
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}
