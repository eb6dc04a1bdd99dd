use derive_more::{Display, From};
use std::path::{Path, PathBuf};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
    #[display("{_0}")]
    #[from]
    Custom(String),

    #[display("invalid video id: {_0}")]
    InvalidVideoId(String),

    #[display("transcript unavailable for {video_id}: {reason}")]
    TranscriptUnavailable { video_id: String, reason: String },

    #[display("completion failed: {reason}")]
    Completion { reason: String },

    #[display("cache storage error at {}: {reason}", path.display())]
    Storage { path: PathBuf, reason: String },
}

impl Error {
    pub fn custom(val: impl std::fmt::Display) -> Self {
        Self::Custom(val.to_string())
    }

    pub fn storage(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self::Storage {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn completion(reason: impl std::fmt::Display) -> Self {
        Self::Completion {
            reason: reason.to_string(),
        }
    }
}

impl From<async_openai::error::OpenAIError> for Error {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        Self::completion(err)
    }
}

impl std::error::Error for Error {}
