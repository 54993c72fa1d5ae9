use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::render::Theme;
use crate::typing::{speed_from_millis, HERO_SPEED_MS};

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults serve the compiled-in profile on :8080.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON profile replacing the compiled-in one.
    pub profile_path: Option<PathBuf>,
    /// Directory served under `/assets`.
    pub assets_dir: PathBuf,
    pub theme: Theme,
    pub typing_speed_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => 8080,
        };

        let theme = match lookup("PORTFOLIO_THEME") {
            Some(raw) => Theme::from_str(&raw).map_err(|e| anyhow!(e))?,
            None => Theme::Dark,
        };

        let typing_speed_ms = match lookup("TYPING_SPEED_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("TYPING_SPEED_MS must be a whole number of milliseconds")?,
            None => HERO_SPEED_MS,
        };
        speed_from_millis(typing_speed_ms).map_err(|e| anyhow!(e))?;

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            profile_path: lookup("PROFILE_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            assets_dir: lookup("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public/assets")),
            theme,
            typing_speed_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.profile_path.is_none());
        assert_eq!(config.assets_dir, PathBuf::from("public/assets"));
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.typing_speed_ms, 80);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "3000"),
            ("PROFILE_PATH", "/etc/portfolio/me.json"),
            ("ASSETS_DIR", "static"),
            ("PORTFOLIO_THEME", "light"),
            ("TYPING_SPEED_MS", "120"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(
            config.profile_path,
            Some(PathBuf::from("/etc/portfolio/me.json"))
        );
        assert_eq!(config.assets_dir, PathBuf::from("static"));
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.typing_speed_ms, 120);
    }

    #[test]
    fn test_blank_profile_path_is_ignored() {
        let config = config_from(&[("PROFILE_PATH", "  ")]).unwrap();
        assert!(config.profile_path.is_none());
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
    }

    #[test]
    fn test_unknown_theme_rejected() {
        assert!(config_from(&[("PORTFOLIO_THEME", "sepia")]).is_err());
    }

    #[test]
    fn test_out_of_range_speed_rejected() {
        assert!(config_from(&[("TYPING_SPEED_MS", "0")]).is_err());
        assert!(config_from(&[("TYPING_SPEED_MS", "99999")]).is_err());
    }
}
