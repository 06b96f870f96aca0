use serde::{Deserialize, Serialize};

use crate::types::Part;

/// One turn of a conversation: a role and an ordered list of parts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    /// The role of the turn's author.
    ///
    /// Omitted for the system instruction, which carries no role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// The ordered parts of the turn.
    pub parts: Vec<Part>,
}

/// Role type for a conversation turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User role.
    User,

    /// Model role.
    Model,
}

impl Content {
    /// Create a new `Content` with the given role and parts.
    pub fn new(role: Role, parts: Vec<Part>) -> Self {
        Self {
            role: Some(role),
            parts,
        }
    }

    /// Create a new user `Content` with a single text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![Part::text(text)])
    }

    /// Create a new model `Content` with a single text part.
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, vec![Part::text(text)])
    }

    /// Create a role-less `Content`, as used for system instructions.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }

    /// Concatenated text of all text parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(Part::as_text)
            .collect::<Vec<_>>()
            .join("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn user_content_serialization() {
        let content = Content::user("Analyze this room and give me organization tips.");
        let json = to_value(&content).unwrap();
        assert_eq!(
            json,
            json!({
                "role": "user",
                "parts": [{"text": "Analyze this room and give me organization tips."}]
            })
        );
    }

    #[test]
    fn system_content_omits_role() {
        let content = Content::system("You are DeclutterAI.");
        let json = to_value(&content).unwrap();
        assert_eq!(json, json!({"parts": [{"text": "You are DeclutterAI."}]}));
    }

    #[test]
    fn content_text_concatenation() {
        let content = Content::new(
            Role::Model,
            vec![Part::text("Start with "), Part::text("the closet.")],
        );
        assert_eq!(content.text(), "Start with the closet.");
    }

    #[test]
    fn role_deserialization() {
        let content: Content = serde_json::from_value(json!({
            "role": "model",
            "parts": [{"text": "Here are 3 tips..."}]
        }))
        .unwrap();
        assert_eq!(content.role, Some(Role::Model));
    }
}
