//! Configuration loading and merging.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::compat::{DigestPolicy, TzInfo};
use crate::shell::{Platform, SplitError};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid platform: {0}")]
    Platform(#[from] SplitError),

    #[error("unknown timezone '{0}' (expected \"local\" or \"utc\")")]
    Timezone(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Platform identifier used when a request names none.
    pub platform: Option<String>,

    /// Digest policy settings.
    #[serde(default)]
    pub digest: DigestConfig,

    /// Audit logging settings.
    #[serde(default)]
    pub audit: AuditConfig,
}

/// Digest policy configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DigestConfig {
    /// Treat MD5 as disabled regardless of the host.
    pub restricted: bool,
    /// Also honour the host's FIPS switch.
    pub detect: bool,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            restricted: false,
            detect: true,
        }
    }
}

/// Audit logging configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Enable audit logging.
    pub enabled: bool,
    /// Path to audit log file.
    pub path: Option<String>,
    /// Zone for audit timestamps ("local" or "utc").
    pub timezone: Option<String>,
}

/// Configuration with identifiers parsed and policies decided.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The raw config.
    pub raw: Config,
    /// Default dialect, if configured.
    pub platform: Option<Platform>,
    /// Policy handed to the digest factory.
    pub digest_policy: DigestPolicy,
    /// Zone for audit timestamps.
    pub timezone: TzInfo,
}

impl Config {
    /// Load configuration, merging user and project configs.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(user_config) = Self::load_user_config()? {
            config = user_config;
        }

        if let Some(cwd) = cwd
            && let Some(project_config) = Self::load_project_config(cwd)?
        {
            config.merge(project_config);
        }

        Ok(config)
    }

    /// Load user-level config from ~/.config/argsplit.toml
    fn load_user_config() -> Result<Option<Self>, ConfigError> {
        let path = Self::user_config_path();
        if let Some(path) = path
            && path.exists()
        {
            let content = fs::read_to_string(&path)?;
            return Ok(Some(toml::from_str(&content)?));
        }
        Ok(None)
    }

    /// Load project-level config from .argsplit.toml
    fn load_project_config(cwd: &Path) -> Result<Option<Self>, ConfigError> {
        let path = cwd.join(".argsplit.toml");
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            return Ok(Some(toml::from_str(&content)?));
        }
        Ok(None)
    }

    /// Get user config path.
    /// Respects ARGSPLIT_CONFIG env var for testing.
    fn user_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("ARGSPLIT_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join("argsplit.toml"))
    }

    /// Merge another config into this one (other takes precedence for scalars).
    fn merge(&mut self, other: Config) {
        if other.platform.is_some() {
            self.platform = other.platform;
        }
        if other.digest.restricted {
            self.digest.restricted = true;
        }
        if !other.digest.detect {
            self.digest.detect = false;
        }
        if other.audit.enabled {
            self.audit.enabled = true;
            if other.audit.path.is_some() {
                self.audit.path = other.audit.path;
            }
        }
        if other.audit.timezone.is_some() {
            self.audit.timezone = other.audit.timezone;
        }
    }

    /// Validate identifiers and settle policies.
    pub fn resolve(self) -> Result<ResolvedConfig, ConfigError> {
        let platform = self
            .platform
            .as_deref()
            .map(str::parse::<Platform>)
            .transpose()?;

        let restricted =
            self.digest.restricted || (self.digest.detect && DigestPolicy::detect().restricted);

        let timezone = match self.audit.timezone.as_deref() {
            None => TzInfo::Utc,
            Some(name) => {
                TzInfo::from_name(name).ok_or_else(|| ConfigError::Timezone(name.to_string()))?
            }
        };

        Ok(ResolvedConfig {
            raw: self,
            platform,
            digest_policy: DigestPolicy { restricted },
            timezone,
        })
    }
}

impl ResolvedConfig {
    /// Pick the dialect: explicit request, then config, then the host.
    pub fn platform_for(&self, requested: Option<&str>) -> Result<Platform, SplitError> {
        match requested {
            Some(ident) => ident.parse(),
            None => Ok(self.platform.unwrap_or_else(Platform::current)),
        }
    }
}
