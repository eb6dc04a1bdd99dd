use crate::core::DEFAULT_CACHE_FILE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vidtag")]
#[command(about = "Suggest a title, tags and summary for a YouTube video from its transcript")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// YouTube video URL or video ID
    #[arg(env = "VIDTAG_VIDEO_ID")]
    pub video: String,

    /// JSON file holding previously processed videos
    #[arg(long, env = "VIDTAG_CACHE_PATH", default_value = DEFAULT_CACHE_FILE)]
    pub cache_path: PathBuf,

    /// Preferred transcript languages (comma-separated)
    #[arg(short, long, default_value = "en")]
    pub languages: String,

    /// Completion model used to generate the suggestions
    #[arg(long, default_value = "gpt-4")]
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn defaults_apply_when_only_video_given() {
        let cli = Cli::try_parse_from(["vidtag", "H6gmux1z6Zk"]).expect("parse");
        assert_eq!(cli.video, "H6gmux1z6Zk");
        assert_eq!(cli.languages, "en");
        assert_eq!(cli.model, "gpt-4");
    }

    #[test]
    fn overrides_are_honoured() {
        let cli = Cli::try_parse_from([
            "vidtag",
            "https://youtu.be/abc123",
            "--cache-path",
            "/tmp/cache.json",
            "-l",
            "es,en",
            "--model",
            "gpt-4o",
        ])
        .expect("parse");
        assert_eq!(cli.cache_path.to_str(), Some("/tmp/cache.json"));
        assert_eq!(cli.languages, "es,en");
        assert_eq!(cli.model, "gpt-4o");
    }
}
