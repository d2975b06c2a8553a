// src/config.rs
use crate::question::AnswerNumbering;
use crate::utils::error::AppError;

/// Environment fallback for `--answer-numbering`.
pub const ANSWER_NUMBERING_ENV: &str = "ANSWER_NUMBERING";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSettings {
    pub answer_numbering: AnswerNumbering,
}

impl RenderSettings {
    /// Command-line value wins, then the environment, then the default style.
    pub fn resolve(cli: Option<AnswerNumbering>, env: Option<&str>) -> Result<Self, AppError> {
        let answer_numbering = match (cli, env) {
            (Some(style), _) => {
                tracing::debug!("Using answer numbering '{}' from command-line argument", style);
                style
            }
            (None, Some(raw)) => {
                let style = raw
                    .parse::<AnswerNumbering>()
                    .map_err(|e| AppError::Config(format!("{}: {}", ANSWER_NUMBERING_ENV, e)))?;
                tracing::debug!("Using answer numbering '{}' from {}", style, ANSWER_NUMBERING_ENV);
                style
            }
            (None, None) => AnswerNumbering::default(),
        };

        Ok(Self { answer_numbering })
    }

    pub fn from_env(cli: Option<AnswerNumbering>) -> Result<Self, AppError> {
        let env = std::env::var(ANSWER_NUMBERING_ENV).ok();
        Self::resolve(cli, env.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_env() {
        let settings = RenderSettings::resolve(Some(AnswerNumbering::Decimal), Some("iii")).unwrap();
        assert_eq!(settings.answer_numbering, AnswerNumbering::Decimal);
    }

    #[test]
    fn test_env_fallback_and_default() {
        let settings = RenderSettings::resolve(None, Some("IIII")).unwrap();
        assert_eq!(settings.answer_numbering, AnswerNumbering::UpperRoman);
        assert_eq!(RenderSettings::resolve(None, None).unwrap(), RenderSettings::default());
    }

    #[test]
    fn test_invalid_env_value_is_config_error() {
        let err = RenderSettings::resolve(None, Some("roman")).unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.starts_with("ANSWER_NUMBERING")));
    }
}
