//! Parameters for chat-model client construction

use super::error::{ConfigError, Result};
use super::resolver::ResolvedConfig;
use super::{ConfigTree, MISSING};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// The closed set of options accepted by the chat-completion client constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientParam {
    Model,
    ApiKey,
    Organization,
    BaseUrl,
    Timeout,
    MaxRetries,
    FrequencyPenalty,
    LogitBias,
    MaxTokens,
    N,
    PresencePenalty,
    ResponseFormat,
    Seed,
    Stop,
    Temperature,
    TopP,
    User,
}

impl ClientParam {
    pub const ALL: [ClientParam; 17] = [
        ClientParam::Model,
        ClientParam::ApiKey,
        ClientParam::Organization,
        ClientParam::BaseUrl,
        ClientParam::Timeout,
        ClientParam::MaxRetries,
        ClientParam::FrequencyPenalty,
        ClientParam::LogitBias,
        ClientParam::MaxTokens,
        ClientParam::N,
        ClientParam::PresencePenalty,
        ClientParam::ResponseFormat,
        ClientParam::Seed,
        ClientParam::Stop,
        ClientParam::Temperature,
        ClientParam::TopP,
        ClientParam::User,
    ];

    /// Key used both in the provider subtree and by the client constructor.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientParam::Model => "model",
            ClientParam::ApiKey => "api_key",
            ClientParam::Organization => "organization",
            ClientParam::BaseUrl => "base_url",
            ClientParam::Timeout => "timeout",
            ClientParam::MaxRetries => "max_retries",
            ClientParam::FrequencyPenalty => "frequency_penalty",
            ClientParam::LogitBias => "logit_bias",
            ClientParam::MaxTokens => "max_tokens",
            ClientParam::N => "n",
            ClientParam::PresencePenalty => "presence_penalty",
            ClientParam::ResponseFormat => "response_format",
            ClientParam::Seed => "seed",
            ClientParam::Stop => "stop",
            ClientParam::Temperature => "temperature",
            ClientParam::TopP => "top_p",
            ClientParam::User => "user",
        }
    }
}

impl std::fmt::Display for ClientParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recognized, non-null options taken from one provider's resolved subtree.
///
/// Keys outside [`ClientParam`] are dropped, and so are null values: an
/// option is either present with a value or absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientParameterView {
    #[serde(skip)]
    provider: String,
    #[serde(flatten)]
    params: BTreeMap<ClientParam, Value>,
}

impl ClientParameterView {
    /// Build the view from `api_keys.<provider>`; an absent subtree gives an empty view.
    pub fn from_resolved(resolved: &ResolvedConfig, provider: &str) -> Self {
        let empty = ConfigTree::new();
        let section = resolved.provider(provider).unwrap_or(&empty);

        let params = ClientParam::ALL
            .iter()
            .filter_map(|param| match section.get(param.as_str()) {
                None | Some(Value::Null) => None,
                Some(value) => Some((*param, value.clone())),
            })
            .collect();

        Self { provider: provider.to_string(), params }
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn get(&self, param: ClientParam) -> Option<&Value> {
        self.params.get(&param)
    }

    pub fn contains(&self, param: ClientParam) -> bool {
        self.params.contains_key(&param)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClientParam, &Value)> {
        self.params.iter().map(|(param, value)| (*param, value))
    }

    pub fn model(&self) -> Option<&str> {
        self.get(ClientParam::Model).and_then(Value::as_str)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.get(ClientParam::ApiKey).and_then(Value::as_str)
    }

    /// The credential, or [`ConfigError::MissingSecret`] when it is absent or
    /// was left unresolved.
    pub fn require_api_key(&self) -> Result<&str> {
        match self.api_key() {
            Some(key) if key != MISSING => Ok(key),
            _ => Err(ConfigError::MissingSecret {
                provider: self.provider.clone(),
                key: ClientParam::ApiKey.as_str().to_string(),
            }),
        }
    }

    /// Keyword-style mapping for a client constructor.
    pub fn to_map(&self) -> ConfigTree {
        self.params
            .iter()
            .map(|(param, value)| (param.as_str().to_string(), value.clone()))
            .collect()
    }
}
