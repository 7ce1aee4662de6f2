use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Which of the two binaries is loading the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Gateway,
    Temperature,
}

impl ServiceKind {
    pub fn default_port(&self) -> u16 {
        match self {
            ServiceKind::Gateway => 8080,
            ServiceKind::Temperature => 8081,
        }
    }

    pub fn default_name(&self) -> &'static str {
        match self {
            ServiceKind::Gateway => "cep-gateway",
            ServiceKind::Temperature => "temperature-service",
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub viacep: ViaCepSettings,
    #[serde(default)]
    pub weather: WeatherSettings,
    #[serde(default)]
    pub gateway: GatewaySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub name: String,
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

fn default_host() -> String { "0.0.0.0".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct ViaCepSettings {
    #[serde(default = "default_viacep_url")]
    pub base_url: String,
    #[serde(default = "default_upstream_timeout")]
    pub timeout_secs: u64,
}

impl Default for ViaCepSettings {
    fn default() -> Self {
        Self {
            base_url: default_viacep_url(),
            timeout_secs: default_upstream_timeout(),
        }
    }
}

impl ViaCepSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherSettings {
    #[serde(default = "default_weather_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_upstream_timeout")]
    pub timeout_secs: u64,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            base_url: default_weather_url(),
            api_key: String::new(),
            timeout_secs: default_upstream_timeout(),
        }
    }
}

impl WeatherSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// First characters of the API key, safe to log
    pub fn masked_api_key(&self) -> String {
        let prefix: String = self.api_key.chars().take(8).collect();
        format!("{}...", prefix)
    }
}

/// How the gateway reaches the temperature lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForwardMode {
    /// Proxy to a separately deployed temperature service
    #[default]
    Http,
    /// Run the temperature lookup inside the gateway process
    Local,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySettings {
    #[serde(default = "default_service_b_url")]
    pub service_b_url: String,
    #[serde(default)]
    pub forward_mode: ForwardMode,
    #[serde(default = "default_forward_timeout")]
    pub timeout_secs: u64,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            service_b_url: default_service_b_url(),
            forward_mode: ForwardMode::default(),
            timeout_secs: default_forward_timeout(),
        }
    }
}

impl GatewaySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_viacep_url() -> String { "https://viacep.com.br/ws".to_string() }
fn default_weather_url() -> String { "http://api.weatherapi.com/v1".to_string() }
fn default_service_b_url() -> String { "http://localhost:8081".to_string() }
fn default_upstream_timeout() -> u64 { 10 }
fn default_forward_timeout() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

/// Plain environment variables used by existing deployments, and the keys they override
const LEGACY_ENV_VARS: [(&str, &str); 7] = [
    ("PORT", "server.port"),
    ("WEATHER_API_KEY", "weather.api_key"),
    ("VIACEP_URL", "viacep.base_url"),
    ("WEATHER_API_URL", "weather.base_url"),
    ("SERVICE_B_URL", "gateway.service_b_url"),
    ("LOG_LEVEL", "logging.level"),
    ("LOG_FORMAT", "logging.format"),
];

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Per-service defaults (port, service name)
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with CEP__), e.g. CEP__WEATHER__API_KEY
    /// 4. Plain variables such as PORT, WEATHER_API_KEY and SERVICE_B_URL
    pub fn load(kind: ServiceKind) -> Result<Self, ConfigError> {
        let settings = with_service_defaults(Config::builder(), kind)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(prefixed_environment())
            .build()?;

        let settings = substitute_env_vars(settings, |name| std::env::var(name).ok())?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate(kind)?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P, kind: ServiceKind) -> Result<Self, ConfigError> {
        let settings = with_service_defaults(Config::builder(), kind)?
            .add_source(File::from(path.as_ref()))
            .add_source(prefixed_environment())
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate(kind)?;
        Ok(settings)
    }

    /// Whether this process performs weather lookups itself
    pub fn needs_weather_api_key(&self, kind: ServiceKind) -> bool {
        match kind {
            ServiceKind::Temperature => true,
            ServiceKind::Gateway => self.gateway.forward_mode == ForwardMode::Local,
        }
    }

    /// Refuse to start a process that would query WeatherAPI without a key
    pub fn validate(&self, kind: ServiceKind) -> Result<(), ConfigError> {
        if self.needs_weather_api_key(kind) && self.weather.api_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "WEATHER_API_KEY is required (get one at https://www.weatherapi.com/)".to_string(),
            ));
        }
        Ok(())
    }
}

fn with_service_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    kind: ServiceKind,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    builder
        .set_default("server.port", i64::from(kind.default_port()))?
        .set_default("server.name", kind.default_name())
}

fn prefixed_environment() -> Environment {
    // e.g., CEP__SERVER__PORT -> server.port
    Environment::with_prefix("CEP")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply the plain environment variables on top of the layered config
///
/// Empty values are treated as unset.
fn substitute_env_vars<F>(settings: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Config::builder().add_source(settings);

    for (var, key) in LEGACY_ENV_VARS {
        if let Some(value) = lookup(var).filter(|v| !v.is_empty()) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}
