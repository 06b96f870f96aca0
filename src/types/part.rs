use serde::{Deserialize, Serialize};

use crate::types::{ImageMediaType, InlineData};

/// One component of a turn: plain text or inline binary data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Part {
    /// A text part.
    #[serde(rename = "text")]
    Text(String),

    /// An inline data part carrying an encoded image.
    #[serde(rename = "inlineData")]
    InlineData(InlineData),
}

impl Part {
    /// Create a new text part.
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text(text.into())
    }

    /// Create a new inline data part.
    pub fn inline_data(data: String, mime_type: ImageMediaType) -> Self {
        Part::InlineData(InlineData::new(data, mime_type))
    }

    /// Returns the text content if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text(text) => Some(text),
            Part::InlineData(_) => None,
        }
    }

    /// Returns true if this is an inline data part.
    pub fn is_inline_data(&self) -> bool {
        matches!(self, Part::InlineData(_))
    }
}

impl From<&str> for Part {
    fn from(text: &str) -> Self {
        Part::text(text)
    }
}

impl From<InlineData> for Part {
    fn from(inline: InlineData) -> Self {
        Part::InlineData(inline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn text_part_serialization() {
        let part = Part::text("Where should the bookshelf go?");
        let json = to_value(&part).unwrap();
        assert_eq!(json, json!({"text": "Where should the bookshelf go?"}));
    }

    #[test]
    fn inline_data_part_serialization() {
        let part = Part::inline_data("aGku".to_string(), ImageMediaType::Jpeg);
        let json = to_value(&part).unwrap();
        assert_eq!(
            json,
            json!({"inlineData": {"mimeType": "image/jpeg", "data": "aGku"}})
        );
    }

    #[test]
    fn part_deserialization() {
        let part: Part = serde_json::from_value(json!({"text": "tidy"})).unwrap();
        assert_eq!(part.as_text(), Some("tidy"));

        let part: Part =
            serde_json::from_value(json!({"inlineData": {"mimeType": "image/webp", "data": "aGku"}}))
                .unwrap();
        assert!(part.is_inline_data());
    }
}
