use anyhow::Context;
use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub bot_token: String,
}

impl Settings {
    /// Reads `settings.*` if present, then `TELEGRAM_*` environment variables.
    pub fn new() -> anyhow::Result<Self> {
        let s = Config::builder()
            .add_source(File::with_name("settings").required(false))
            .add_source(config::Environment::with_prefix("TELEGRAM"))
            .build()?;

        Self::from_config(s)
    }

    fn from_config(s: Config) -> anyhow::Result<Self> {
        let settings: Self = s.try_deserialize().context("TELEGRAM_BOT_TOKEN is not set")?;
        anyhow::ensure!(
            !settings.bot_token.trim().is_empty(),
            "TELEGRAM_BOT_TOKEN is not set"
        );
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_token_from_source() {
        let s = Config::builder()
            .add_source(File::from_str("bot_token = \"123:abc\"", FileFormat::Toml))
            .build()
            .unwrap();

        let settings = Settings::from_config(s).unwrap();
        assert_eq!(settings.bot_token, "123:abc");
    }

    #[test]
    fn test_missing_token_fails() {
        let s = Config::builder().build().unwrap();
        let err = Settings::from_config(s).unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));
    }

    #[test]
    fn test_blank_token_fails() {
        for raw in ["bot_token = \"\"", "bot_token = \"   \""] {
            let s = Config::builder()
                .add_source(File::from_str(raw, FileFormat::Toml))
                .build()
                .unwrap();

            let err = Settings::from_config(s).unwrap_err();
            assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));
        }
    }
}
