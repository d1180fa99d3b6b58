use crate::llm::Provider;
use crate::types::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub llm: LlmConfig,
    pub research: ResearchConfig,
    pub delivery: DeliveryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Which provider to use: "openai" or "ollama".
    pub provider: String,
    pub openai_api_key: Option<String>,
    pub openai_api_base: String,
    pub openai_model: String,
    pub ollama_url: String,
    pub ollama_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResearchConfig {
    /// Lower plan-size bound; smaller plans warn but proceed.
    pub min_searches: usize,
    /// Upper plan-size bound, enforced only through the planning prompt.
    pub max_searches: usize,
    /// Per-task share of the batch's aggregate deadline.
    pub per_task_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryConfig {
    pub api_base: String,
    pub api_key: Option<String>,
    pub from_address: String,
    pub default_recipient: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            llm: LlmConfig {
                provider: env::var("LLM_PROVIDER").unwrap_or_else(|_| "openai".to_string()),
                openai_api_key: env::var("OPENAI_API_KEY").ok(),
                openai_api_base: env::var("OPENAI_API_BASE")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
                openai_model: env::var("OPENAI_MODEL")
                    .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
                ollama_url: env::var("OLLAMA_URL")
                    .unwrap_or_else(|_| "http://localhost:11434".to_string()),
                ollama_model: env::var("OLLAMA_MODEL")
                    .unwrap_or_else(|_| "llama3.2".to_string()),
            },
            research: ResearchConfig {
                min_searches: parse_env("MIN_SEARCHES", 3)?,
                max_searches: parse_env("MAX_SEARCHES", 5)?,
                per_task_timeout_secs: parse_env("SEARCH_TIMEOUT_SECS", 30)?,
            },
            delivery: DeliveryConfig {
                api_base: env::var("MAIL_API_BASE")
                    .unwrap_or_else(|_| "https://api.sendgrid.com".to_string()),
                api_key: env::var("MAIL_API_KEY").ok(),
                from_address: env::var("FROM_EMAIL")
                    .unwrap_or_else(|_| "research@example.com".to_string()),
                default_recipient: env::var("TO_EMAIL")
                    .unwrap_or_else(|_| "recipient@example.com".to_string()),
            },
        })
    }
}

impl LlmConfig {
    /// Resolve the configured provider.
    pub fn provider(&self) -> Result<Provider> {
        match self.provider.as_str() {
            "openai" => {
                let api_key = self.openai_api_key.clone().ok_or_else(|| {
                    AppError::Configuration(
                        "OPENAI_API_KEY is required when LLM_PROVIDER=openai".to_string(),
                    )
                })?;
                Ok(Provider::OpenAI {
                    api_key,
                    api_base: self.openai_api_base.clone(),
                    model: self.openai_model.clone(),
                })
            }
            "ollama" => Ok(Provider::Ollama {
                base_url: self.ollama_url.clone(),
                model: self.ollama_model.clone(),
            }),
            other => Err(AppError::Configuration(format!(
                "Unknown LLM provider '{}' (expected 'openai' or 'ollama')",
                other
            ))),
        }
    }
}

impl ResearchConfig {
    pub fn per_task_timeout(&self) -> Duration {
        Duration::from_secs(self.per_task_timeout_secs)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| {
            AppError::Configuration(format!("{} has an invalid value: '{}'", name, raw))
        }),
        Err(_) => Ok(default),
    }
}
