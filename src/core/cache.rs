use crate::core::parser::ParsedResponse;
use crate::error::{Error, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

pub const DEFAULT_CACHE_FILE: &str = "video_results.json";

// Local time, microsecond precision, no offset: `2025-06-01T12:34:56.123456`.
const PROCESSED_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Result of processing one video. Never rewritten once stored.
///
/// `processed_date` is kept as the ISO-8601 text it was written with, so entries
/// stamped with an offset or other precision load and display unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub processed_date: String,
    pub transcript_length: usize,
    pub title: String,
    pub tags: Vec<String>,
    pub summary: String,
    #[serde(rename = "raw_ai_response")]
    pub raw_model_response: String,
}

impl CacheEntry {
    pub fn new(transcript: &str, parsed: ParsedResponse, raw_model_response: String) -> Self {
        Self {
            processed_date: Local::now()
                .naive_local()
                .format(PROCESSED_DATE_FORMAT)
                .to_string(),
            transcript_length: transcript.chars().count(),
            title: parsed.title,
            tags: parsed.tags,
            summary: parsed.summary,
            raw_model_response,
        }
    }
}

/// Video id to entry, ordered by key so saves are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cache {
    entries: BTreeMap<String, CacheEntry>,
}

impl Cache {
    pub fn contains(&self, video_id: &str) -> bool {
        self.entries.contains_key(video_id)
    }

    pub fn get(&self, video_id: &str) -> Option<&CacheEntry> {
        self.entries.get(video_id)
    }

    /// Stores the entry unless the id is already present. Returns whether it was added.
    pub fn insert(&mut self, video_id: impl Into<String>, entry: CacheEntry) -> bool {
        match self.entries.entry(video_id.into()) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Single JSON file backing the cache. Writes are whole-file and not atomic.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Cache> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no cache file yet, starting empty");
                return Ok(Cache::default());
            }
            Err(e) => return Err(Error::storage(&self.path, e)),
        };

        let cache: Cache =
            serde_json::from_str(&content).map_err(|e| Error::storage(&self.path, e))?;
        debug!(path = %self.path.display(), entries = cache.len(), "cache loaded");
        Ok(cache)
    }

    pub async fn save(&self, cache: &Cache) -> Result<()> {
        let json = serde_json::to_string_pretty(cache).map_err(|e| Error::storage(&self.path, e))?;
        fs::write(&self.path, json)
            .await
            .map_err(|e| Error::storage(&self.path, e))?;
        debug!(path = %self.path.display(), entries = cache.len(), "cache saved");
        Ok(())
    }
}
