use serde::{Deserialize, Serialize};

use crate::types::{Content, GenerationConfig};

/// Request body for the `generateContent` endpoint.
///
/// Carries the full conversation so far; the remote endpoint is stateless
/// and the prior turns are replayed on every call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// The conversation turns, oldest first.
    pub contents: Vec<Content>,

    /// The system instruction shaping all responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,

    /// Sampling parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Create a new request with the given conversation turns.
    pub fn new(contents: Vec<Content>) -> Self {
        Self {
            contents,
            system_instruction: None,
            generation_config: None,
        }
    }

    /// Set the system instruction.
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(Content::system(instruction));
        self
    }

    /// Set the generation config.
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn request_serialization() {
        let request = GenerateContentRequest::new(vec![Content::user("What goes under the bed?")])
            .with_system_instruction("You are DeclutterAI.");
        let json = to_value(&request).unwrap();
        assert_eq!(
            json,
            json!({
                "contents": [
                    {"role": "user", "parts": [{"text": "What goes under the bed?"}]}
                ],
                "systemInstruction": {"parts": [{"text": "You are DeclutterAI."}]}
            })
        );
    }
}
