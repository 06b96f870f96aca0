// Public modules
pub mod content;
pub mod encoded_image;
pub mod generate_content_request;
pub mod generate_content_response;
pub mod generation_config;
pub mod inline_data;
pub mod model;
pub mod part;
pub mod usage_metadata;

// Re-exports
pub use content::{Content, Role};
pub use encoded_image::EncodedImage;
pub use generate_content_request::GenerateContentRequest;
pub use generate_content_response::{Candidate, CandidateContent, GenerateContentResponse};
pub use generation_config::GenerationConfig;
pub use inline_data::{ImageMediaType, InlineData};
pub use model::{KnownModel, Model};
pub use part::Part;
pub use usage_metadata::UsageMetadata;
