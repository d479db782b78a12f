//! Configuration module
//!
//! All settings come from the environment (a `.env` file is honored), with
//! constant defaults for everything that can be defaulted. Mail credentials
//! cannot: the relay account and its OAuth2 access token are required.

use std::env;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_SMTP_PORT: u16 = 587;
const MAX_AUDIO_SIZE_MB: usize = 10;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    /// Loaded for compatibility with existing deployments; no database
    /// client is constructed from it.
    pub database_url: Option<String>,
    // Upload configuration
    pub upload_dir: String,
    pub max_audio_size_bytes: usize,
    // Mail relay configuration (OAuth2 credential set)
    pub smtp_host: String,
    pub smtp_port: u16,
    pub email_user: String,
    pub oauth_client_id: Option<String>,
    pub oauth_client_secret: Option<String>,
    pub oauth_refresh_token: Option<String>,
    pub oauth_access_token: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let max_audio_size_mb = env::var("MAX_AUDIO_SIZE_MB")
            .unwrap_or_else(|_| MAX_AUDIO_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_AUDIO_SIZE_MB);

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_origins,
            database_url: env::var("MONGODB_URI").ok(),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
            max_audio_size_bytes: max_audio_size_mb * 1024 * 1024,
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_port: env::var("SMTP_PORT")
                .unwrap_or_else(|_| DEFAULT_SMTP_PORT.to_string())
                .parse()
                .unwrap_or(DEFAULT_SMTP_PORT),
            email_user: env::var("EMAIL_USER")
                .map_err(|_| anyhow::anyhow!("EMAIL_USER must be set for mail delivery"))?,
            oauth_client_id: env::var("CLIENT_ID").ok(),
            oauth_client_secret: env::var("CLIENT_SECRET").ok(),
            oauth_refresh_token: env::var("REFRESH_TOKEN").ok(),
            oauth_access_token: env::var("ACCESS_TOKEN")
                .map_err(|_| anyhow::anyhow!("ACCESS_TOKEN must be set for mail delivery"))?,
        };

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server_port == 0 {
            return Err(anyhow::anyhow!("Server port cannot be 0"));
        }

        if self.max_audio_size_bytes == 0 {
            return Err(anyhow::anyhow!("Max audio size must be greater than 0"));
        }

        if self.upload_dir.trim().is_empty() {
            return Err(anyhow::anyhow!("Upload directory cannot be empty"));
        }

        if self.email_user.trim().is_empty() {
            return Err(anyhow::anyhow!("EMAIL_USER cannot be empty"));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            server_port: 4000,
            environment: "development".to_string(),
            cors_origins: vec!["*".to_string()],
            database_url: None,
            upload_dir: "uploads".to_string(),
            max_audio_size_bytes: 10 * 1024 * 1024,
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            email_user: "relay@example.com".to_string(),
            oauth_client_id: None,
            oauth_client_secret: None,
            oauth_refresh_token: None,
            oauth_access_token: "token".to_string(),
        }
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn port_zero_fails_validation() {
        let mut config = test_config();
        config.server_port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_upload_dir_fails_validation() {
        let mut config = test_config();
        config.upload_dir = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn is_production_matches_prod_aliases() {
        let mut config = test_config();
        assert!(!config.is_production());
        config.environment = "Production".to_string();
        assert!(config.is_production());
        config.environment = "prod".to_string();
        assert!(config.is_production());
    }
}
