use crate::error::Result;
use async_openai::{
    self,
    config::OpenAIConfig,
    types::responses::{
        CreateResponseArgs, EasyInputMessageArgs, InputItem, InputParam, OutputItem,
        OutputMessageContent, Role,
    },
};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Only this many characters of the transcript reach the model.
pub const TRANSCRIPT_CHAR_LIMIT: usize = 4000;

/// A language model that answers a prompt with free-form text.
#[async_trait(?Send)]
pub trait CompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

#[derive(Clone)]
pub struct OpenAiCompletion {
    client: async_openai::Client<OpenAIConfig>,
    model: String,
}

impl OpenAiCompletion {
    pub fn new(api_key: Option<&str>, model: impl Into<String>) -> Self {
        let config = match api_key {
            Some(key) => OpenAIConfig::new().with_api_key(key),
            None => OpenAIConfig::new(),
        };

        Self {
            client: async_openai::Client::with_config(config),
            model: model.into(),
        }
    }
}

#[async_trait(?Send)]
impl CompletionClient for OpenAiCompletion {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = CreateResponseArgs::default()
            .model(self.model.as_str())
            .input(InputParam::Items(vec![InputItem::EasyMessage(
                EasyInputMessageArgs::default()
                    .role(Role::User)
                    .content(prompt)
                    .build()?,
            )]))
            .build()?;

        debug!(model = %self.model, prompt_chars = prompt.chars().count(), "sending completion request");
        let response = self.client.responses().create(request).await?;

        let mut content = String::new();
        for output in response.output {
            if let OutputItem::Message(out) = output {
                for c in out.content {
                    match c {
                        OutputMessageContent::OutputText(text) => content.push_str(&text.text),
                        _ => {
                            warn!("Unexpected content type: {c:?}");
                            continue;
                        }
                    }
                }
            }
        }

        if content.trim().is_empty() {
            warn!(model = %self.model, "model returned no text");
        }

        Ok(content)
    }
}

/// Wraps a completion client with the fixed title/tags/summary prompt.
pub struct Summarizer<C> {
    client: C,
}

impl<C: CompletionClient> Summarizer<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn summarize(&self, transcript: &str) -> Result<String> {
        let prompt = build_prompt(transcript);
        self.client.complete(&prompt).await
    }
}

pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn build_prompt(transcript: &str) -> String {
    let excerpt = truncate_chars(transcript, TRANSCRIPT_CHAR_LIMIT);
    format!(
        r#"You are a YouTube SEO assistant. A user gave you the transcript of a video. Your job is to:

1. Suggest a **clickable title** (max 60 characters)
2. Suggest **5-10 SEO-friendly tags** (single words or short phrases)
3. Provide a **1-line TLDR summary**

Transcript:
"""
{excerpt}
"""

Output format:
Title: <...>
Tags: [tag1, tag2, ...]
Summary: <...>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder {
        prompts: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl CompletionClient for Recorder {
        async fn complete(&self, prompt: &str) -> Result<String> {
            self.prompts.borrow_mut().push(prompt.to_string());
            Ok("Title: ok".to_string())
        }
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "é".repeat(10);
        assert_eq!(truncate_chars(&text, 3), "ééé");
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn prompt_embeds_transcript_and_format() {
        let prompt = build_prompt("hello world");
        assert!(prompt.contains("\"\"\"\nhello world\n\"\"\""));
        assert!(prompt.contains("Tags: [tag1, tag2, ...]"));
        assert!(prompt.contains("max 60 characters"));
    }

    #[tokio::test]
    async fn characters_past_the_limit_never_reach_the_model() {
        let transcript = format!("{}{}", "a".repeat(TRANSCRIPT_CHAR_LIMIT), "ZZZ-TAIL");
        let summarizer = Summarizer::new(Recorder {
            prompts: RefCell::new(Vec::new()),
        });

        let reply = summarizer.summarize(&transcript).await.expect("reply");
        assert_eq!(reply, "Title: ok");

        let prompts = summarizer.client.prompts.borrow();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains(&"a".repeat(TRANSCRIPT_CHAR_LIMIT)));
        assert!(!prompts[0].contains("ZZZ"));
    }
}
