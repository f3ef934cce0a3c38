// Error types for content snapshots.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{record}: field `{field}` must not be empty")]
    EmptyField {
        record: String,
        field: &'static str,
    },

    #[error("{record}: `{value}` is not an absolute URI ({reason})")]
    InvalidUri {
        record: String,
        value: String,
        reason: String,
    },

    #[error("{record}: handle `{handle}` must start with '@'")]
    InvalidHandle { record: String, handle: String },

    #[error("duplicate id {id} in {list}")]
    DuplicateId { list: &'static str, id: u32 },

    #[error("no ids left in {list}")]
    IdSpaceExhausted { list: &'static str },

    #[error("duplicate handle {0} among suggested users")]
    DuplicateHandle(String),
}

pub type Result<T> = std::result::Result<T, ContentError>;
