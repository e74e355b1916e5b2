use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Output format for log lines. Accepts the spellings Lambda uses for
/// `AWS_LAMBDA_LOG_FORMAT` (`Text` / `JSON`).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    #[serde(alias = "Text", alias = "TEXT")]
    Text,
    #[serde(alias = "JSON", alias = "Json")]
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl Configuration {
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Configuration::default()))
            // Lambda's advanced logging controls
            .merge(Env::prefixed("AWS_LAMBDA_").only(&["LOG_LEVEL", "LOG_FORMAT"]))
            .merge(Env::prefixed("APP_").only(&["LOG_LEVEL", "LOG_FORMAT"]))
    }
}
