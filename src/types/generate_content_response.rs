use serde::{Deserialize, Serialize};

use crate::types::{Part, Role, UsageMetadata};

/// Response body from the `generateContent` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidate completions; the first candidate is the response.
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Token accounting for the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,

    /// The model version that produced the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

/// One candidate completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The candidate's content.
    ///
    /// Absent when generation was blocked before producing any parts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<CandidateContent>,

    /// Why generation stopped (e.g. "STOP", "MAX_TOKENS", "SAFETY").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// The content of a candidate completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateContent {
    /// The role of the content's author, always "model" in practice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// The ordered parts of the completion.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's text parts.
    ///
    /// Returns `None` when there is no candidate, the candidate carries no
    /// content, or the content contains no non-empty text.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(Part::as_text)
            .collect::<Vec<_>>()
            .join("");
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_from_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Here are 3 tips..."}]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 20}
        }))
        .unwrap();

        assert_eq!(response.text().as_deref(), Some("Here are 3 tips..."));
        assert_eq!(response.usage_metadata.unwrap().prompt_token_count, 10);
    }

    #[test]
    fn text_absent_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn text_absent_when_candidate_blocked() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))
        .unwrap();
        assert_eq!(response.text(), None);
    }
}
