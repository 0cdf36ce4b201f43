//! Idea CRUD. List and Get are public; Create, Update and Delete sit behind
//! the auth guard, and Update/Delete additionally require ownership.
//!
//! For the mutating operations on an existing idea the check order is fixed:
//! auth, then existence, then ownership, then field validation.

use serde::Deserialize;
use uuid::Uuid;

use crate::database::store::IdeaDraft;
use crate::error::ApiError;

pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod update;

pub use create::create;
pub use delete::delete;
pub use list::list;
pub use show::show;
pub use update::update;


/// Caller-supplied idea fields, shared by Create and Update (full
/// replacement - there is no partial variant).
#[derive(Debug, Deserialize)]
pub struct IdeaBody {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: TagsInput,
}

/// Tags arrive in whatever shape the client felt like sending: a single
/// comma-delimited string, a proper array of strings, or junk. The first two
/// normalize, everything else collapses to empty.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    Delimited(String),
    Sequence(Vec<String>),
    Other(serde_json::Value),
}

impl Default for TagsInput {
    fn default() -> Self {
        TagsInput::Other(serde_json::Value::Null)
    }
}

impl TagsInput {
    pub fn normalize(self) -> Vec<String> {
        match self {
            TagsInput::Delimited(s) => s
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
            TagsInput::Sequence(tags) => tags,
            TagsInput::Other(_) => Vec::new(),
        }
    }
}

impl IdeaBody {
    /// Fields are validated on their trimmed form but stored as submitted.
    pub fn into_draft(self) -> Result<IdeaDraft, ApiError> {
        let filled = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        match (
            filled(self.title),
            filled(self.summary),
            filled(self.description),
        ) {
            (Some(title), Some(summary), Some(description)) => Ok(IdeaDraft {
                title,
                summary,
                description,
                tags: self.tags.normalize(),
            }),
            _ => Err(ApiError::validation(
                "Title, summary and description are required",
            )),
        }
    }
}

/// A malformed id is deliberately reported as NotFound rather than a
/// validation error, so callers cannot tell "bad id" from "no such record".
fn parse_idea_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| idea_not_found())
}

fn idea_not_found() -> ApiError {
    ApiError::not_found("Idea not found")
}
