//! SQLite persistence for projects, frames, chats and users.
//!
//! Frames are overwritten in place on save; concurrent saves of the same frame
//! resolve last-write-wins.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use shared_types::{
    CreateProjectRequest, FrameDetail, FrameId, Message, ProjectId, ProjectSummary,
    SaveFrameRequest, UserDetail,
};
use sqlx::SqlitePool;

use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct ProjectStore {
    pool: SqlitePool,
}

impl ProjectStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a project with its first frame and the opening chat.
    pub async fn create_project(
        &self,
        request: &CreateProjectRequest,
        created_by: Option<&str>,
    ) -> Result<ProjectSummary, ApiError> {
        let now = Utc::now();
        let messages = serde_json::to_string(&request.messages)?;

        let mut tx = self.pool.begin().await?;
        sqlx::query("INSERT INTO projects (project_id, created_by, created_at) VALUES (?, ?, ?)")
            .bind(request.project_id.as_str())
            .bind(created_by)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        sqlx::query(
            "INSERT INTO frames (frame_id, project_id, design_code, created_at, updated_at)
             VALUES (?, ?, NULL, ?, ?)",
        )
        .bind(request.frame_id.as_str())
        .bind(request.project_id.as_str())
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;
        sqlx::query("INSERT INTO chats (frame_id, messages, updated_at) VALUES (?, ?, ?)")
            .bind(request.frame_id.as_str())
            .bind(&messages)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(ProjectSummary {
            project_id: request.project_id.clone(),
            frame_id: request.frame_id.clone(),
            first_message: first_message_preview(&request.messages),
            created_at: now,
        })
    }

    /// All projects, newest first, each paired with its earliest frame.
    pub async fn list_projects(&self) -> Result<Vec<ProjectSummary>, ApiError> {
        let rows: Vec<(String, String, Option<String>, DateTime<Utc>)> = sqlx::query_as(
            "SELECT p.project_id, f.frame_id, c.messages, p.created_at
             FROM projects p
             JOIN frames f ON f.project_id = p.project_id
             LEFT JOIN chats c ON c.frame_id = f.frame_id
             ORDER BY p.created_at DESC, f.created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut seen = HashSet::new();
        let mut summaries: Vec<ProjectSummary> = Vec::with_capacity(rows.len());
        for (project_id, frame_id, messages, created_at) in rows {
            // Rows arrive earliest frame first within a project.
            if !seen.insert(project_id.clone()) {
                continue;
            }
            let first_message = match messages {
                Some(raw) => first_message_preview(&serde_json::from_str::<Vec<Message>>(&raw)?),
                None => None,
            };
            summaries.push(ProjectSummary {
                project_id: ProjectId(project_id),
                frame_id: FrameId(frame_id),
                first_message,
                created_at,
            });
        }

        Ok(summaries)
    }

    pub async fn get_frame(
        &self,
        frame_id: &FrameId,
        project_id: &ProjectId,
    ) -> Result<FrameDetail, ApiError> {
        let row: Option<(Option<String>, Option<String>)> = sqlx::query_as(
            "SELECT f.design_code, c.messages
             FROM frames f
             LEFT JOIN chats c ON c.frame_id = f.frame_id
             WHERE f.frame_id = ? AND f.project_id = ?",
        )
        .bind(frame_id.as_str())
        .bind(project_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        let (design_code, messages) = row.ok_or(ApiError::NotFound("frame"))?;
        let chat_messages = match messages {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };

        Ok(FrameDetail {
            project_id: project_id.clone(),
            frame_id: frame_id.clone(),
            design_code,
            chat_messages,
        })
    }

    pub async fn save_frame(&self, request: &SaveFrameRequest) -> Result<(), ApiError> {
        let result = sqlx::query(
            "UPDATE frames SET design_code = ?, updated_at = ?
             WHERE frame_id = ? AND project_id = ?",
        )
        .bind(&request.design_code)
        .bind(Utc::now())
        .bind(request.frame_id.as_str())
        .bind(request.project_id.as_str())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("frame"));
        }
        Ok(())
    }

    /// Replace the stored conversation of a frame.
    pub async fn update_chat(&self, frame_id: &FrameId, messages: &[Message]) -> Result<(), ApiError> {
        let exists: Option<(String,)> = sqlx::query_as("SELECT frame_id FROM frames WHERE frame_id = ?")
            .bind(frame_id.as_str())
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_none() {
            return Err(ApiError::NotFound("frame"));
        }

        sqlx::query(
            "INSERT INTO chats (frame_id, messages, updated_at) VALUES (?, ?, ?)
             ON CONFLICT (frame_id) DO UPDATE SET
                messages = excluded.messages,
                updated_at = excluded.updated_at",
        )
        .bind(frame_id.as_str())
        .bind(serde_json::to_string(messages)?)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Record a signed-in user, keeping the first-seen timestamp.
    pub async fn upsert_user(&self, email: &str, name: Option<&str>) -> Result<UserDetail, ApiError> {
        sqlx::query(
            "INSERT INTO users (email, name, created_at) VALUES (?, ?, ?)
             ON CONFLICT (email) DO UPDATE SET name = COALESCE(excluded.name, users.name)",
        )
        .bind(email)
        .bind(name)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        let (email, name, created_at): (String, Option<String>, DateTime<Utc>) =
            sqlx::query_as("SELECT email, name, created_at FROM users WHERE email = ?")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(UserDetail {
            email,
            name,
            created_at,
        })
    }
}

fn first_message_preview(messages: &[Message]) -> Option<String> {
    messages.first().map(|m| m.content.clone())
}
