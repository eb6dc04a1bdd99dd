use crate::cli::Cli;
use crate::core::extract_video_id;
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Everything a single run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub video_id: String,
    pub cache_path: PathBuf,
    pub languages: Vec<String>,
    pub model: String,
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let video_id = extract_video_id(&cli.video)
            .ok_or_else(|| Error::InvalidVideoId(cli.video.clone()))?;

        let languages = parse_languages(&cli.languages);

        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            video_id,
            cache_path: cli.cache_path,
            languages,
            model: cli.model,
            api_key,
        })
    }
}

fn parse_languages(raw: &str) -> Vec<String> {
    let languages: Vec<String> = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if languages.is_empty() {
        vec!["en".to_string()]
    } else {
        languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(video: &str, languages: &str) -> Cli {
        Cli {
            video: video.to_string(),
            cache_path: PathBuf::from("video_results.json"),
            languages: languages.to_string(),
            model: "gpt-4".to_string(),
        }
    }

    #[test]
    fn resolves_video_id_from_url() {
        let config =
            Config::from_cli(cli("https://www.youtube.com/watch?v=H6gmux1z6Zk&t=42", "en"))
                .expect("valid config");
        assert_eq!(config.video_id, "H6gmux1z6Zk");
    }

    #[test]
    fn rejects_unusable_video_input() {
        let err = Config::from_cli(cli("../etc/passwd", "en")).unwrap_err();
        assert!(matches!(err, Error::InvalidVideoId(_)));
    }

    #[test]
    fn languages_are_trimmed_and_defaulted() {
        assert_eq!(parse_languages(" es , en ,"), vec!["es", "en"]);
        assert_eq!(parse_languages(" , "), vec!["en"]);
    }
}
