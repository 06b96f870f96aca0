use serde::{Deserialize, Serialize};

/// Token accounting returned with a `generateContent` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens consumed by the prompt.
    #[serde(default)]
    pub prompt_token_count: u64,

    /// Tokens produced across all candidates.
    #[serde(default)]
    pub candidates_token_count: u64,

    /// Total tokens for the request.
    #[serde(default)]
    pub total_token_count: u64,
}
