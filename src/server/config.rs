use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first so values from a local `.env` file are visible.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parseable
    /// - `Err(AppError::ConfigErr)` - `DATABASE_URL` missing or `PORT` not a valid port
    pub fn from_vars<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let host = lookup("HOST")
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) if !value.is_empty() => {
                value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?
            }
            _ => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Address the HTTP listener binds to, in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
