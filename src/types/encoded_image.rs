use base64::Engine;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::inline_data::ImageMediaType;

/// A transport-ready encoded image: standard base64, no `data:` URI prefix,
/// no line breaks.
///
/// The encoder performs no validation of the bytes themselves; callers are
/// responsible for handing it image data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EncodedImage {
    /// The base64-encoded payload.
    pub data: String,

    /// The media type declared for the payload.
    pub media_type: ImageMediaType,
}

impl EncodedImage {
    /// Encode raw bytes with an explicit media type.
    pub fn from_bytes(bytes: &[u8], media_type: ImageMediaType) -> Self {
        let data = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self { data, media_type }
    }

    /// Encode raw JPEG bytes.
    ///
    /// This is the canonical upload path; the original front-end labels
    /// every upload `image/jpeg`.
    pub fn from_jpeg_bytes(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes, ImageMediaType::Jpeg)
    }

    /// Encode everything readable from `reader` with an explicit media type.
    ///
    /// Surfaces a read failure as `Error::Io`.
    pub fn from_reader<R: Read>(mut reader: R, media_type: ImageMediaType) -> Result<Self> {
        let mut buffer = Vec::new();
        reader
            .read_to_end(&mut buffer)
            .map_err(|e| Error::io("Failed to read image source".to_string(), e))?;
        Ok(Self::from_bytes(&buffer, media_type))
    }

    /// Encode an image file, inferring the media type from its extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let media_type = match path.extension().and_then(|ext| ext.to_str()) {
            Some("jpg") | Some("jpeg") => ImageMediaType::Jpeg,
            Some("png") => ImageMediaType::Png,
            Some("gif") => ImageMediaType::Gif,
            Some("webp") => ImageMediaType::Webp,
            _ => {
                return Err(Error::encoding(
                    format!(
                        "Unsupported file extension for {}. Must be jpeg, png, gif, or webp",
                        path.display()
                    ),
                    None,
                ));
            }
        };

        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
        Self::from_reader(file, media_type)
    }

    /// Decode the payload back to raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|e| Error::encoding(format!("Invalid base64 payload: {e}"), Some(Box::new(e))))
    }
}
