use crate::error::{QuizError, QuizResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct QuizConfig {
    #[command(flatten)]
    pub session: SessionParams,
    #[command(flatten)]
    pub audit: AuditParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionParams {
    /// Pause before the result is shown (0 disables it)
    #[arg(long, default_value_t = 1500)]
    pub loading_delay_ms: u64,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            loading_delay_ms: 1500,
        }
    }
}

impl SessionParams {
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AuditParams {
    /// Answer spaces up to this size are enumerated exhaustively
    #[arg(long, default_value_t = 1_000_000)]
    pub audit_sample_limit: u64,
    /// Sequences drawn when the answer space is too large to enumerate
    #[arg(long, default_value_t = 100_000)]
    pub audit_samples: u64,
    #[arg(long, default_value_t = 42)]
    pub audit_seed: u64,
}

impl Default for AuditParams {
    fn default() -> Self {
        Self {
            audit_sample_limit: 1_000_000,
            audit_samples: 100_000,
            audit_seed: 42,
        }
    }
}

impl QuizConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> QuizResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            QuizError::Config(format!("failed to read '{}': {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> QuizResult<()> {
        if self.audit.audit_samples == 0 {
            return Err(QuizError::Config(
                "audit_samples must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Copies over every flag the user typed explicitly, leaving file values
    /// in place for flags that only carry their default.
    pub fn merge_from_cli(&mut self, cli: &QuizConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(session.loading_delay_ms);
        update_if_present!(audit.audit_sample_limit);
        update_if_present!(audit.audit_samples);
        update_if_present!(audit.audit_seed);
    }
}
