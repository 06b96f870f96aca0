//! Conversation session management.
//!
//! This module provides [`ChatSession`], the stateful wrapper around the
//! Gemini API that DeclutterAI converses through. A session owns at most one
//! [`ChatHandle`] at a time; the handle carries the conversational context
//! that is replayed to the remote endpoint on every turn.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::client::Gemini;
use crate::error::{Error, Result};
use crate::types::{
    Content, EncodedImage, GenerateContentRequest, GenerationConfig, KnownModel, Model, Part, Role,
};

/// The fixed persona and task rules bound to every session.
pub const SYSTEM_INSTRUCTION: &str = "You are DeclutterAI, a warm, professional, and highly practical home organization expert.
Your goal is to help users organize their spaces based on photos they upload.

When a user uploads a photo:
1. Analyze the room's current state (clutter level, style, potential storage usage).
2. Provide 3-5 specific, actionable steps to improve the space immediately.
3. Suggest storage solutions or layout changes if applicable.

Keep your tone encouraging and non-judgmental.
Format your responses with clear headings or bullet points using Markdown.";

/// The fixed model every session is bound to.
pub const DEFAULT_MODEL: KnownModel = KnownModel::Gemini3ProPreview;

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

/// The conversational context for one session with the remote model.
///
/// The `generateContent` endpoint is stateless, so the handle keeps the turn
/// history and replays it with every request. Dropping a handle abandons the
/// entire conversation; nothing survives outside it.
#[derive(Debug)]
pub struct ChatHandle {
    id: u64,
    history: Vec<Content>,
}

impl ChatHandle {
    fn new() -> Self {
        Self {
            id: NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed),
            history: Vec::new(),
        }
    }

    /// A process-unique identity for this handle.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The turns exchanged through this handle, oldest first.
    pub fn history(&self) -> &[Content] {
        &self.history
    }
}

/// A chat session bound to a fixed model and system instruction.
///
/// The session holds at most one [`ChatHandle`]; `send_message` creates one
/// lazily, and [`start_new_session`](ChatSession::start_new_session) replaces
/// it, abandoning all prior context. `send_message` takes `&mut self`, so
/// turns against a single session are serialized by construction.
pub struct ChatSession {
    client: Gemini,
    model: Model,
    system_instruction: String,
    generation_config: Option<GenerationConfig>,
    handle: Option<ChatHandle>,
}

impl ChatSession {
    /// Create a new session manager with the fixed DeclutterAI persona.
    ///
    /// No handle exists yet; the first `send_message` creates one.
    pub fn new(client: Gemini) -> Self {
        Self {
            client,
            model: Model::Known(DEFAULT_MODEL),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            generation_config: None,
            handle: None,
        }
    }

    /// Override the model for this session manager.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Override the generation config for this session manager.
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }

    /// The model this session manager is bound to.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The identity of the active handle, if one exists.
    pub fn handle_id(&self) -> Option<u64> {
        self.handle.as_ref().map(ChatHandle::id)
    }

    /// Discard any existing handle and start a fresh session.
    ///
    /// All prior conversational context is abandoned.
    pub fn start_new_session(&mut self) {
        self.handle = Some(ChatHandle::new());
    }

    /// Send one turn and await the whole response text.
    ///
    /// If no handle exists one is created first, so a fresh session manager
    /// is usable without explicit setup. With an image the turn carries
    /// exactly one inline-image part followed by one text part; without, a
    /// single text part.
    ///
    /// Fails with [`Error::EmptyResponse`] when the remote call succeeds but
    /// returns no text, and propagates transport and API errors unchanged.
    /// On any failure the handle's history is left untouched, so the session
    /// remains usable.
    pub async fn send_message(
        &mut self,
        text: &str,
        image: Option<EncodedImage>,
    ) -> Result<String> {
        if self.handle.is_none() {
            self.start_new_session();
        }
        let handle = self.handle.as_mut().expect("session was just initialized");

        let turn = build_user_turn(text, image);

        let mut contents = handle.history.clone();
        contents.push(turn.clone());

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content::system(self.system_instruction.clone())),
            generation_config: self.generation_config.clone(),
        };

        let response = self.client.generate(&self.model, &request).await?;

        let reply = response
            .text()
            .ok_or_else(|| Error::empty_response("No response from the model"))?;

        handle.history.push(turn);
        handle.history.push(Content::model(reply.clone()));

        Ok(reply)
    }
}

/// Build the outbound user turn for one `send_message` call.
fn build_user_turn(text: &str, image: Option<EncodedImage>) -> Content {
    match image {
        Some(image) => Content::new(
            Role::User,
            vec![
                Part::inline_data(image.data, image.media_type),
                Part::text(text),
            ],
        ),
        None => Content::user(text),
    }
}
