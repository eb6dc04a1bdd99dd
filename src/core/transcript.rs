use crate::error::{Error, Result};
use async_trait::async_trait;
use tracing::debug;
use yt_transcript_rs::{FetchedTranscript, api::YouTubeTranscriptApi};

/// Anything that can turn a video id into transcript text.
#[async_trait(?Send)]
pub trait TranscriptSource {
    async fn fetch(&self, video_id: &str) -> Result<String>;
}

#[derive(Clone)]
pub struct YouTubeTranscripts {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
}

impl YouTubeTranscripts {
    pub fn new(languages: Vec<String>) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| Error::custom(format!("Failed to initialise transcript client: {e}")))?;
        Ok(Self { api, languages })
    }

    pub fn plain_text(transcript: &FetchedTranscript) -> String {
        transcript
            .snippets
            .iter()
            .map(|snippet| snippet.text.trim())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait(?Send)]
impl TranscriptSource for YouTubeTranscripts {
    async fn fetch(&self, video_id: &str) -> Result<String> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();
        debug!(video_id, ?languages, "fetching transcript");

        let transcript = self
            .api
            .fetch_transcript(video_id, &languages, false)
            .await
            .map_err(|e| Error::TranscriptUnavailable {
                video_id: video_id.to_string(),
                reason: e.to_string(),
            })?;

        debug!(video_id, snippets = transcript.snippets.len(), "transcript fetched");
        Ok(Self::plain_text(&transcript))
    }
}

pub fn extract_video_id(url: &str) -> Option<String> {
    // Extract video ID from various YouTube URL formats
    let raw_id = if let Some(v_param) = url.split("v=").nth(1) {
        v_param.split('&').next().unwrap_or(v_param)
    } else if let Some(youtu_be) = url.split("youtu.be/").nth(1) {
        youtu_be.split('?').next().unwrap_or(youtu_be)
    } else {
        url
    };

    sanitize_video_id(raw_id).ok()
}

const MAX_VIDEO_ID_LEN: usize = 128;

/// Ensure a video identifier is safe to use as a cache key and API argument.
/// Only ASCII alphanumeric characters plus `_` and `-` are allowed.
pub fn sanitize_video_id(raw: &str) -> Result<String> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(Error::InvalidVideoId("video id cannot be empty".into()));
    }

    if trimmed.len() > MAX_VIDEO_ID_LEN {
        return Err(Error::InvalidVideoId("video id is unexpectedly long".into()));
    }

    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
    {
        return Err(Error::InvalidVideoId(format!(
            "{trimmed:?} contains unsupported characters; expected only letters, numbers, '-' or '_'"
        )));
    }

    Ok(trimmed.to_string())
}
