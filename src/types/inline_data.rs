use serde::{Deserialize, Serialize};

/// Inline binary data carried in a turn part.
///
/// The data is base64-encoded with no `data:` URI prefix and no line breaks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// The media type of the data.
    pub mime_type: ImageMediaType,

    /// The base64-encoded payload.
    pub data: String,
}

/// Supported image media types
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ImageMediaType {
    #[serde(rename = "image/jpeg")]
    Jpeg,

    #[serde(rename = "image/png")]
    Png,

    #[serde(rename = "image/gif")]
    Gif,

    #[serde(rename = "image/webp")]
    Webp,
}

impl InlineData {
    /// Create a new `InlineData` from a base64-encoded string.
    pub fn new(data: String, mime_type: ImageMediaType) -> Self {
        Self { mime_type, data }
    }
}
