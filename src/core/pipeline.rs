use crate::core::cache::{CacheEntry, CacheStore};
use crate::core::parser::{LabeledFieldParser, ResponseParser};
use crate::core::summarizer::{CompletionClient, Summarizer};
use crate::core::transcript::TranscriptSource;
use crate::error::Result;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The video was already in the cache; nothing external was called.
    Cached(CacheEntry),
    /// The video was processed in this run and written to the cache.
    Processed(CacheEntry),
}

impl Outcome {
    pub fn entry(&self) -> &CacheEntry {
        match self {
            Outcome::Cached(entry) | Outcome::Processed(entry) => entry,
        }
    }
}

pub struct Pipeline<S, C, P = LabeledFieldParser> {
    store: CacheStore,
    transcripts: S,
    summarizer: Summarizer<C>,
    parser: P,
}

impl<S, C> Pipeline<S, C, LabeledFieldParser>
where
    S: TranscriptSource,
    C: CompletionClient,
{
    pub fn new(store: CacheStore, transcripts: S, completion: C) -> Self {
        Self::with_parser(store, transcripts, completion, LabeledFieldParser)
    }
}

impl<S, C, P> Pipeline<S, C, P>
where
    S: TranscriptSource,
    C: CompletionClient,
    P: ResponseParser,
{
    pub fn with_parser(store: CacheStore, transcripts: S, completion: C, parser: P) -> Self {
        Self {
            store,
            transcripts,
            summarizer: Summarizer::new(completion),
            parser,
        }
    }

    pub async fn run(&self, video_id: &str) -> Result<Outcome> {
        let mut cache = self.store.load().await?;
        debug!(
            video_id,
            hit = cache.contains(video_id),
            entries = cache.len(),
            "cache checked"
        );

        if let Some(cached) = cache.get(video_id) {
            println!("✓ Video {video_id} already processed. Loading from cache...");
            println!("Processed on: {}", cached.processed_date);
            println!("{}", render(&cached.title, &cached.tags, &cached.summary));
            return Ok(Outcome::Cached(cached.clone()));
        }

        println!("Processing new video: {video_id}");

        let transcript = self.transcripts.fetch(video_id).await?;
        info!(video_id, chars = transcript.chars().count(), "transcript ready");

        let raw = self.summarizer.summarize(&transcript).await?;
        let parsed = self.parser.parse(&raw);
        println!("{}", render(&parsed.title, &parsed.tags, &parsed.summary));

        let entry = CacheEntry::new(&transcript, parsed, raw);
        cache.insert(video_id, entry.clone());
        self.store.save(&cache).await?;
        println!("\n✓ Results saved to {}", self.store.path().display());

        Ok(Outcome::Processed(entry))
    }
}

/// Formats the three fields the way they are shown to the user.
pub fn render(title: &str, tags: &[String], summary: &str) -> String {
    let tags = tags
        .iter()
        .map(|tag| format!("'{tag}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Title: {title}\nTags: [{tags}]\nSummary: {summary}")
}
