use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub requirements: RequirementsConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let raw_limit = env::var("CONFORMING_LOAN_LIMIT")
            .map_err(|_| ConfigError::MissingConformingLoanLimit)?;
        let conforming_loan_limit_cents = parse_amount_to_cents(&raw_limit)
            .ok_or(ConfigError::InvalidConformingLoanLimit { value: raw_limit })?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            requirements: RequirementsConfig {
                conforming_loan_limit_cents,
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Rule parameters sourced from the environment at startup.
///
/// The conforming loan limit has no default: deployments must state it
/// explicitly, and a missing value fails startup.
#[derive(Debug, Clone)]
pub struct RequirementsConfig {
    pub conforming_loan_limit_cents: u64,
}

/// Parse a dollar amount with up to two decimal places into integer cents.
pub fn parse_amount_to_cents(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let (dollars, fraction) = match trimmed.split_once('.') {
        Some((dollars, fraction)) => (dollars, fraction),
        None => (trimmed, ""),
    };

    if dollars.is_empty() && fraction.is_empty() {
        return None;
    }
    if fraction.len() > 2 || !fraction.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    let whole: u64 = if dollars.is_empty() {
        0
    } else {
        dollars.parse().ok()?
    };

    let cents = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u64>().ok()? * 10,
        _ => fraction.parse::<u64>().ok()?,
    };

    whole.checked_mul(100)?.checked_add(cents)
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    MissingConformingLoanLimit,
    InvalidConformingLoanLimit { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::MissingConformingLoanLimit => {
                write!(
                    f,
                    "CONFORMING_LOAN_LIMIT must be set to a dollar amount (e.g. 647200)"
                )
            }
            ConfigError::InvalidConformingLoanLimit { value } => {
                write!(
                    f,
                    "CONFORMING_LOAN_LIMIT '{value}' is not a valid dollar amount"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
