use std::path::PathBuf;

use clap::Parser;

/// Largest request body `/predict` accepts by default (16 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Serve tweet sentiment predictions over HTTP.
///
/// Every option can also be set through the environment variable shown in
/// `--help`.
#[derive(Parser, Debug, Clone)]
#[command(name = "sentiment-server", version, long_about = None)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "SENTIMENT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "SENTIMENT_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Fitted TF-IDF vectorizer artifact
    #[arg(long, value_name = "PATH", env = "SENTIMENT_VECTORIZER_PATH", default_value = "Models/vectorizer.bin")]
    pub vectorizer: PathBuf,

    /// Fitted classifier artifact (`.onnx` selects the ONNX runtime)
    #[arg(long, value_name = "PATH", env = "SENTIMENT_MODEL_PATH", default_value = "Models/model.bin")]
    pub model: PathBuf,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "SENTIMENT_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// Number of HTTP worker threads (defaults to the number of cores)
    #[arg(long, env = "SENTIMENT_WORKERS")]
    pub workers: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["sentiment-server"]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.vectorizer, PathBuf::from("Models/vectorizer.bin"));
        assert_eq!(config.model, PathBuf::from("Models/model.bin"));
        assert_eq!(config.workers, None);
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn test_overrides() {
        let config = Config::try_parse_from([
            "sentiment-server",
            "--host",
            "127.0.0.1",
            "-p",
            "8080",
            "--model",
            "/srv/model.onnx",
            "--workers",
            "2",
            "--max-body-bytes",
            "1024",
        ])
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.model, PathBuf::from("/srv/model.onnx"));
        assert_eq!(config.workers, Some(2));
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Config::try_parse_from(["sentiment-server", "--port", "http"]).is_err());
    }

    #[test]
    fn test_command_is_consistent() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
