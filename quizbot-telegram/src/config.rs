//! Bot configuration loaded from the environment.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

use interaction_router::ScorePolicy;

pub const DEFAULT_LOG_FILE: &str = "logs/quizbot.log";
pub const DEFAULT_CONTACT_LOG_PATH: &str = "phone-numbers.txt";

/// Everything the runner needs: Telegram access, log destinations, scoring and content source.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub bot_token: String,
    /// Optional Bot API base URL (e.g. a mock server in tests).
    /// Environment: `TELEGRAM_API_URL` or `TELOXIDE_API_URL`.
    pub telegram_api_url: Option<String>,
    pub log_file: String,
    pub contact_log_path: PathBuf,
    /// When false the router runs without the score post-condition and bonuses are zero.
    pub score_tracking: bool,
    pub score_points: u64,
    /// JSON catalog replacing the built-in content.
    pub catalog_path: Option<PathBuf>,
}

impl BotConfig {
    /// Loads from the environment. `token` overrides `BOT_TOKEN`.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let contact_log_path = env::var("CONTACT_LOG_PATH")
            .unwrap_or_else(|_| DEFAULT_CONTACT_LOG_PATH.to_string())
            .into();
        let score_tracking = match env::var("SCORE_TRACKING") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid SCORE_TRACKING: {}", raw))?,
            Err(_) => true,
        };
        let score_points = match env::var("SCORE_POINTS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid SCORE_POINTS: {}", raw))?,
            Err(_) => ScorePolicy::DEFAULT_POINTS,
        };
        let catalog_path = env::var("CATALOG_PATH").ok().map(PathBuf::from);

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            contact_log_path,
            score_tracking,
            score_points,
            catalog_path,
        })
    }

    /// Rejects settings that would only fail later, at the first request.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            bail!("Bot token is empty");
        }
        if self.score_tracking && self.score_points == 0 {
            bail!("SCORE_POINTS must be positive when score tracking is enabled");
        }
        Ok(())
    }

    /// Score policy for the router, or `None` when score tracking is off.
    pub fn score_policy(&self) -> Option<ScorePolicy> {
        self.score_tracking
            .then(|| ScorePolicy::new(self.score_points, handlers::texts::SCORE_LABEL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 8] = [
        "BOT_TOKEN",
        "TELEGRAM_API_URL",
        "TELOXIDE_API_URL",
        "LOG_FILE",
        "CONTACT_LOG_PATH",
        "SCORE_TRACKING",
        "SCORE_POINTS",
        "CATALOG_PATH",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
        assert_eq!(config.contact_log_path, PathBuf::from(DEFAULT_CONTACT_LOG_PATH));
        assert!(config.score_tracking);
        assert_eq!(config.score_points, 25);
        assert!(config.catalog_path.is_none());
        config.validate().unwrap();

        clear_env();
    }

    #[test]
    #[serial]
    fn test_token_override_and_overrides() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");
        env::set_var("SCORE_TRACKING", "false");
        env::set_var("CATALOG_PATH", "content.json");

        let config = BotConfig::load(Some("cli_token".to_string())).unwrap();

        assert_eq!(config.bot_token, "cli_token");
        assert_eq!(
            config.telegram_api_url.as_deref(),
            Some("http://127.0.0.1:8081")
        );
        assert!(!config.score_tracking);
        assert!(config.score_policy().is_none());
        assert_eq!(config.catalog_path, Some(PathBuf::from("content.json")));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_token_is_error() {
        clear_env();
        assert!(BotConfig::load(None).is_err());
    }

    #[test]
    #[serial]
    fn test_invalid_points() {
        clear_env();
        env::set_var("SCORE_POINTS", "lots");
        assert!(BotConfig::load(Some("t".to_string())).is_err());

        env::set_var("SCORE_POINTS", "0");
        let config = BotConfig::load(Some("t".to_string())).unwrap();
        assert!(config.validate().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_score_policy_uses_points() {
        clear_env();
        env::set_var("SCORE_POINTS", "10");
        let config = BotConfig::load(Some("t".to_string())).unwrap();
        let policy = config.score_policy().unwrap();
        assert_eq!(policy.points, 10);
        assert_eq!(policy.label, handlers::texts::SCORE_LABEL);
        clear_env();
    }

    #[test]
    fn test_empty_token_rejected() {
        let config = BotConfig {
            bot_token: "  ".to_string(),
            telegram_api_url: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
            contact_log_path: DEFAULT_CONTACT_LOG_PATH.into(),
            score_tracking: true,
            score_points: 25,
            catalog_path: None,
        };
        assert!(config.validate().is_err());
    }
}
