//! Shared types between frontend and backend
//!
//! These types are used by both:
//! - the axum server (native Rust)
//! - Dioxus components (WASM)
//!
//! Serializable with serde for JSON over HTTP. Field names are camelCase on
//! the wire because the persistence API predates the Rust services.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod prompt;

pub use prompt::{build_messages, GenerationPlan};

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a project (one conversation + its frames)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "../../pagesmith-ui/bindings/")]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a rendered frame inside a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "../../pagesmith-ui/bindings/")]
pub struct FrameId(pub String);

impl FrameId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FrameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Conversation
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../pagesmith-ui/bindings/")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One entry of the conversation sent to the generation backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../pagesmith-ui/bindings/")]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Body of `POST /api/ai-model`.
///
/// Either `messages` is supplied verbatim, or the server assembles them from
/// `userInput` / `existingCode` with [`prompt::build_messages`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../pagesmith-ui/bindings/")]
pub struct GenerationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_code: Option<String>,
    #[serde(default)]
    pub replace_mode: bool,
    /// Overrides the fresh-generation system template; `{userInput}` is substituted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

impl GenerationRequest {
    pub fn from_input(
        user_input: impl Into<String>,
        existing_code: Option<String>,
        replace_mode: bool,
    ) -> Self {
        Self {
            messages: None,
            user_input: Some(user_input.into()),
            existing_code,
            replace_mode,
            system: None,
        }
    }

    /// Resolve the conversation to forward upstream.
    ///
    /// Returns `None` when the request carries neither messages nor user input.
    pub fn into_plan(self) -> Option<GenerationPlan> {
        if let Some(messages) = self.messages.filter(|m| !m.is_empty()) {
            return Some(GenerationPlan {
                messages,
                replace_mode: self.replace_mode,
            });
        }

        let user_input = self.user_input.filter(|input| !input.trim().is_empty())?;
        Some(prompt::build_messages_with_template(
            &user_input,
            self.existing_code.as_deref(),
            self.replace_mode,
            self.system.as_deref(),
        ))
    }
}

// ============================================================================
// Persistence
// ============================================================================

/// Body of `PUT /api/frames`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../pagesmith-ui/bindings/")]
pub struct SaveFrameRequest {
    pub design_code: String,
    pub frame_id: FrameId,
    pub project_id: ProjectId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../pagesmith-ui/bindings/")]
pub struct SaveFrameResponse {
    pub success: bool,
    pub frame_id: FrameId,
}

/// A stored frame together with the chat that produced it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../pagesmith-ui/bindings/")]
pub struct FrameDetail {
    pub project_id: ProjectId,
    pub frame_id: FrameId,
    pub design_code: Option<String>,
    pub chat_messages: Vec<Message>,
}

/// Body of `POST /api/projects`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../pagesmith-ui/bindings/")]
pub struct CreateProjectRequest {
    pub project_id: ProjectId,
    pub frame_id: FrameId,
    pub messages: Vec<Message>,
}

/// Entry of `GET /api/get-all-projects`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../pagesmith-ui/bindings/")]
pub struct ProjectSummary {
    pub project_id: ProjectId,
    pub frame_id: FrameId,
    /// Preview of the first chat message, if the project has one
    pub first_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `PUT /api/chats`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../pagesmith-ui/bindings/")]
pub struct UpdateChatRequest {
    pub frame_id: FrameId,
    pub messages: Vec<Message>,
}

// ============================================================================
// Identity
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../pagesmith-ui/bindings/")]
pub struct UserDetail {
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// API Types
// ============================================================================

/// Generic acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ack {
    pub success: bool,
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

// ============================================================================
// Constants
// ============================================================================

/// Header carrying the identity provider's verified e-mail
pub const USER_EMAIL_HEADER: &str = "x-user-email";
/// Header carrying the identity provider's display name
pub const USER_NAME_HEADER: &str = "x-user-name";

// ============================================================================
// Tests
// ============================================================================
