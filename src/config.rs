// config.rs

use std::env;

use crate::error::CalcError;

pub const DEFAULT_HISTORY_FILE: &str = "calc_history.csv";

/// Immutable runtime configuration, loaded once at startup and passed into
/// the calculator. Nothing else reads the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub history_file: String,
    pub autosave: bool,
}

impl Config {
    /// Read `HISTORY_FILE` and `AUTOSAVE` from the environment.
    pub fn from_env() -> Result<Self, CalcError> {
        Self::parse(
            env::var("HISTORY_FILE").ok().as_deref(),
            env::var("AUTOSAVE").ok().as_deref(),
        )
    }

    fn parse(history_file: Option<&str>, autosave: Option<&str>) -> Result<Self, CalcError> {
        let history_file = history_file.unwrap_or(DEFAULT_HISTORY_FILE).trim();
        if history_file.is_empty() {
            return Err(CalcError::Config("HISTORY_FILE cannot be empty.".into()));
        }

        let autosave = match autosave
            .unwrap_or("true")
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            _ => {
                return Err(CalcError::Config(
                    "AUTOSAVE must be a boolean-like value.".into(),
                ))
            }
        };

        Ok(Self {
            history_file: history_file.to_string(),
            autosave,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::parse(None, None).unwrap();
        assert_eq!(config.history_file, DEFAULT_HISTORY_FILE);
        assert!(config.autosave);
    }

    #[test]
    fn history_file_is_trimmed() {
        let config = Config::parse(Some("  session.csv  "), None).unwrap();
        assert_eq!(config.history_file, "session.csv");
    }

    #[test]
    fn blank_history_file_is_rejected() {
        let err = Config::parse(Some("   "), None).unwrap_err();
        assert_eq!(err.to_string(), "HISTORY_FILE cannot be empty.");
    }

    #[test]
    fn autosave_accepts_boolean_spellings() {
        for raw in ["true", "1", "yes", "TRUE", " Yes "] {
            assert!(Config::parse(None, Some(raw)).unwrap().autosave, "{raw}");
        }
        for raw in ["false", "0", "no", "FALSE", " No "] {
            assert!(!Config::parse(None, Some(raw)).unwrap().autosave, "{raw}");
        }
    }

    #[test]
    fn autosave_rejects_everything_else() {
        let err = Config::parse(None, Some("maybe")).unwrap_err();
        assert_eq!(err.to_string(), "AUTOSAVE must be a boolean-like value.");
    }
}
