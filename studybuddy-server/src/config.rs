use std::{fs::read_to_string, path::PathBuf};

use clap::Parser;
use geo::Point;
use serde::Deserialize;
use studybuddy_core::{CampusDataConfig, DEFAULT_WALKING_SPEED, routing::CAMPUS_CENTER};
use tracing::info;

use crate::error::ServerError;

/// Campus map service for Wits Study Buddy
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Address to bind, overrides the configuration file
    #[arg(long)]
    pub host: Option<String>,
    /// Port to listen on, overrides the configuration file
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub concurrency_limit: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout_secs: 10,
            concurrency_limit: 64,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CampusSettings {
    pub venues_path: Option<PathBuf>,
    pub pathways_path: Option<PathBuf>,
    pub center_lng: Option<f64>,
    pub center_lat: Option<f64>,
    pub walking_speed_mps: f64,
}

impl Default for CampusSettings {
    fn default() -> Self {
        Self {
            venues_path: None,
            pathways_path: None,
            center_lng: None,
            center_lat: None,
            walking_speed_mps: DEFAULT_WALKING_SPEED,
        }
    }
}

impl CampusSettings {
    /// Converts to the core loader configuration
    ///
    /// # Errors
    ///
    /// Returns an error if only one centre coordinate is set
    pub fn data_config(&self) -> Result<CampusDataConfig, ServerError> {
        let campus_center = match (self.center_lng, self.center_lat) {
            (Some(lng), Some(lat)) => Point::new(lng, lat),
            (None, None) => CAMPUS_CENTER,
            _ => {
                return Err(ServerError::Config(
                    "center_lng and center_lat must be set together".to_string(),
                ));
            }
        };

        Ok(CampusDataConfig {
            venues_path: self.venues_path.clone(),
            pathways_path: self.pathways_path.clone(),
            campus_center,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub campus: CampusSettings,
}

impl Settings {
    /// Reads the optional configuration file and applies CLI overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting settings are out of range
    pub fn load(args: &Args) -> Result<Self, ServerError> {
        let mut settings = match &args.config {
            Some(path) => {
                info!("Reading configuration from {}", path.display());
                let raw = read_to_string(path).map_err(|e| {
                    ServerError::Config(format!("Failed to read '{}': {e}", path.display()))
                })?;
                Self::from_toml(&raw)?
            }
            None => Self::default(),
        };

        if let Some(host) = &args.host {
            settings.server.host.clone_from(host);
        }
        if let Some(port) = args.port {
            settings.server.port = port;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ServerError> {
        toml::from_str(raw).map_err(|e| ServerError::Config(e.to_string()))
    }

    fn validate(&self) -> Result<(), ServerError> {
        let speed = self.campus.walking_speed_mps;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ServerError::Config(format!(
                "walking_speed_mps must be positive, got {speed}"
            )));
        }
        if self.server.concurrency_limit == 0 {
            return Err(ServerError::Config(
                "concurrency_limit must be at least 1".to_string(),
            ));
        }
        if self.server.request_timeout_secs == 0 {
            return Err(ServerError::Config(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let args = Args::parse_from(["studybuddy-server"]);
        let settings = Settings::load(&args).unwrap();

        assert_eq!(settings.address(), "127.0.0.1:3000");
        assert_eq!(settings.campus.walking_speed_mps, DEFAULT_WALKING_SPEED);
        assert_eq!(settings.campus.data_config().unwrap().campus_center, CAMPUS_CENTER);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml(
            r#"
            [server]
            port = 8080

            [campus]
            center_lng = 28.03
            center_lat = -26.19
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.concurrency_limit, 64);
        let data = settings.campus.data_config().unwrap();
        assert_eq!(data.campus_center, Point::new(28.03, -26.19));
        assert!(data.venues_path.is_none());
    }

    #[test]
    fn test_half_a_center_is_rejected() {
        let settings = Settings::from_toml("[campus]\ncenter_lng = 28.03\n").unwrap();
        assert!(matches!(
            settings.campus.data_config(),
            Err(ServerError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_values() {
        let settings = Settings::from_toml("[campus]\nwalking_speed_mps = 0.0\n").unwrap();
        assert!(settings.validate().is_err());

        let settings = Settings::from_toml("[server]\nconcurrency_limit = 0\n").unwrap();
        assert!(settings.validate().is_err());

        assert!(Settings::from_toml("[server]\nport = \"eighty\"\n").is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let args = Args::parse_from(["studybuddy-server", "--host", "0.0.0.0", "-p", "9000"]);
        let settings = Settings::load(&args).unwrap();
        assert_eq!(settings.address(), "0.0.0.0:9000");
    }
}
