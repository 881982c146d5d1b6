use crate::config::{
    LLMConfig, DEFAULT_ANTHROPIC_MODEL, DEFAULT_MAX_TOKENS, DEFAULT_OLLAMA_MODEL,
    DEFAULT_OLLAMA_URL, DEFAULT_OPENAI_MODEL, DEFAULT_OPENAI_URL,
};
use super::{ClaudeClient, LLMError, OpenAIClient, LLM};

/// LLM Provider configuration.
#[derive(Debug, Clone)]
pub enum Provider {
    /// Anthropic Claude (default)
    Anthropic {
        api_key: Option<String>,
        model: Option<String>,
        base_url: Option<String>,
        max_tokens: u32,
    },
    /// OpenAI-compatible endpoint
    OpenAI {
        base_url: Option<String>,
        api_key: Option<String>,
        model: Option<String>,
        max_tokens: u32,
    },
    /// Local Ollama instance
    Ollama {
        base_url: Option<String>,
        model: String,
        max_tokens: u32,
    },
}

impl Default for Provider {
    fn default() -> Self {
        Provider::Anthropic {
            api_key: None,
            model: None,
            base_url: None,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl Provider {
    /// Creates a provider from LLMConfig.
    ///
    /// The API key is resolved through [`LLMConfig::api_key_or_env`], so a
    /// key passed on the command line wins over the environment.
    pub fn from_config(config: &LLMConfig) -> Result<Self, LLMError> {
        let provider = match config.provider.to_lowercase().as_str() {
            "anthropic" | "claude" => Provider::Anthropic {
                api_key: config.api_key_or_env(),
                model: config.model.clone(),
                base_url: config.base_url.clone(),
                max_tokens: config.max_tokens,
            },
            "openai" => Provider::OpenAI {
                base_url: config.base_url.clone(),
                api_key: config.api_key_or_env(),
                model: config.model.clone(),
                max_tokens: config.max_tokens,
            },
            "ollama" => Provider::Ollama {
                base_url: config.base_url.clone(),
                model: config
                    .model
                    .clone()
                    .unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string()),
                max_tokens: config.max_tokens,
            },
            other => return Err(LLMError::UnknownProvider(other.to_string())),
        };
        Ok(provider)
    }

    /// Creates an LLM client from the provider configuration.
    pub fn build(self) -> Result<Box<dyn LLM>, LLMError> {
        match self {
            Provider::Anthropic { api_key, model, base_url, max_tokens } => {
                let key = api_key.ok_or(LLMError::MissingApiKey)?;
                let mut client = ClaudeClient::new(key)
                    .with_model(model.unwrap_or_else(|| DEFAULT_ANTHROPIC_MODEL.to_string()))
                    .with_max_tokens(max_tokens);
                if let Some(url) = base_url {
                    client = client.with_api_url(url);
                }
                Ok(Box::new(client))
            }

            Provider::OpenAI { base_url, api_key, model, max_tokens } => {
                let key = api_key.ok_or(LLMError::MissingApiKey)?;
                let base = base_url.unwrap_or_else(|| DEFAULT_OPENAI_URL.to_string());
                let mdl = model.unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());
                Ok(Box::new(OpenAIClient::new(base, key, mdl).with_max_tokens(max_tokens)))
            }

            Provider::Ollama { base_url, model, max_tokens } => {
                let base = base_url
                    .or_else(|| {
                        std::env::var("OLLAMA_HOST")
                            .ok()
                            .map(|h| format!("{}/v1", h.trim_end_matches('/')))
                    })
                    .unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string());

                Ok(Box::new(OpenAIClient::new(base, "", model).with_max_tokens(max_tokens)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: &str) -> LLMConfig {
        LLMConfig {
            provider: provider.to_string(),
            api_key: Some("test".to_string()),
            ..LLMConfig::default()
        }
    }

    #[test]
    fn test_default_provider() {
        let provider = Provider::default();
        assert!(matches!(provider, Provider::Anthropic { .. }));
    }

    #[test]
    fn test_ollama_provider_build() {
        let provider = Provider::Ollama {
            base_url: Some("http://localhost:11434/v1".to_string()),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        };
        // Should succeed without API key
        assert!(provider.build().is_ok());
    }

    #[test]
    fn test_anthropic_requires_key() {
        let provider = Provider::Anthropic {
            api_key: None,
            model: None,
            base_url: None,
            max_tokens: DEFAULT_MAX_TOKENS,
        };
        assert!(matches!(provider.build(), Err(LLMError::MissingApiKey)));
    }

    #[test]
    fn test_from_config() {
        let mut cfg = config("ollama");
        cfg.model = Some("codellama".to_string());
        let provider = Provider::from_config(&cfg).unwrap();
        assert!(matches!(provider, Provider::Ollama { model, .. } if model == "codellama"));

        let provider = Provider::from_config(&config("Claude")).unwrap();
        assert!(matches!(provider, Provider::Anthropic { api_key: Some(k), .. } if k == "test"));
    }

    #[test]
    fn test_unknown_provider() {
        let result = Provider::from_config(&config("mystery"));
        assert!(matches!(result, Err(LLMError::UnknownProvider(p)) if p == "mystery"));
    }
}
