use crate::constant::{DEVELOPMENT_ENVIRONMENT, PRODUCTION_ENVIRONMENT};
use crate::domain::EmailAddress;
use crate::email_client::SiteOwner;
use crate::error::BizErrorEnum;
use crate::rate_limit::ClientKeySource;
use config::{Config, File};
use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub rate_limit: RateLimitSettings,
    pub cors: CorsSettings,
    pub assets: AssetSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    #[serde(default)]
    pub environment: Environment,
}

#[derive(Deserialize, Clone)]
pub struct EmailClientSettings {
    pub smtp_host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: Secret<String>,
    pub sender_email: String,
    pub recipient_email: String,
    pub owner_name: String,
    pub owner_title: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<EmailAddress, BizErrorEnum> {
        parse_configured_email(&self.sender_email)
    }

    pub fn recipient(&self) -> Result<EmailAddress, BizErrorEnum> {
        parse_configured_email(&self.recipient_email)
    }

    pub fn owner(&self) -> SiteOwner {
        SiteOwner {
            name: self.owner_name.clone(),
            title: self.owner_title.clone(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

fn parse_configured_email(email: &str) -> Result<EmailAddress, BizErrorEnum> {
    EmailAddress::parse(email.to_string()).map_err(|e| {
        tracing::error!("Configured email address is invalid: {}", email);
        BizErrorEnum::InvalidConfiguredEmail(email.to_string(), e)
    })
}

#[derive(Deserialize, Clone)]
pub struct RateLimitSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub window_milliseconds: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_requests: u32,
    /// Key clients on `X-Forwarded-For` instead of the TCP peer.
    #[serde(default)]
    pub trust_forwarded_for: bool,
}

impl RateLimitSettings {
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_milliseconds)
    }

    pub fn client_key_source(&self) -> ClientKeySource {
        if self.trust_forwarded_for {
            ClientKeySource::ForwardedFor
        } else {
            ClientKeySource::PeerAddress
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct CorsSettings {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Deployed frontend, usually supplied through `APP_CORS__FRONTEND_URL`.
    #[serde(default)]
    pub frontend_url: Option<String>,
}

impl CorsSettings {
    /// Every origin allowed to call the API, the frontend URL included.
    pub fn origins(&self) -> Vec<&str> {
        self.frontend_url
            .iter()
            .chain(self.allowed_origins.iter())
            .map(String::as_str)
            .filter(|origin| !origin.is_empty())
            .collect()
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct AssetSettings {
    pub resume_path: PathBuf,
    pub resume_download_name: String,
    pub video_dir: PathBuf,
    pub frontend_dir: PathBuf,
}

pub fn get_configuration() -> Result<Settings, BizErrorEnum> {
    let base_path = std::env::current_dir().map_err(|e| {
        tracing::error!("Failed to get current dir.");
        BizErrorEnum::GetCurrentDirError(e)
    })?;
    let config_dir = base_path.join("configuration");
    // Detect the running environment.
    // Default to `development` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| DEVELOPMENT_ENVIRONMENT.into())
        .try_into()
        .map_err(|e| {
            tracing::error!("Failed to parse APP_ENVIRONMENT: {:?}", e);
            BizErrorEnum::ParseEnvironmentVariableError(e)
        })?;
    let environment_filename = format!("{}.yaml", environment.as_str());
    // Layer: base file, environment file, then `APP_`-prefixed variables
    // e.g. `APP_EMAIL_CLIENT__SMTP_PASSWORD=...` sets `email_client.smtp_password`
    let settings = Config::builder()
        .add_source(File::from(config_dir.join("base.yaml")))
        .add_source(File::from(config_dir.join(environment_filename)))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override("application.environment", environment.as_str())
        .and_then(|builder| builder.build())
        .map_err(|e| {
            tracing::error!("Failed to build config sources.");
            BizErrorEnum::BuildConfigSourcesError(e)
        })?;
    // Try to convert the configuration values it read into our Settings type
    settings.try_deserialize().map_err(|e| {
        tracing::error!("Failed to deserialize config file.");
        BizErrorEnum::DeserializeConfigurationFileError(e)
    })
}

/// The possible runtime environment for our application.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => DEVELOPMENT_ENVIRONMENT,
            Environment::Production => PRODUCTION_ENVIRONMENT,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            DEVELOPMENT_ENVIRONMENT => Ok(Self::Development),
            PRODUCTION_ENVIRONMENT => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either 'development' or 'production'.",
                other
            )),
        }
    }
}
