use anyhow::{Context, Result};
use clap::Parser;
use sentiment_inference::Predictor;
use sentiment_server::Config;
use tracing::info;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[actix_web::main]
async fn main() -> Result<()> {
    sentiment_server::init_tracing();
    let config = Config::parse();

    let predictor = Predictor::load(&config.vectorizer, &config.model).map_err(|e| {
        let reason = if e.is_artifact_error() {
            "Failed to load artifacts"
        } else {
            "Artifacts do not fit together"
        };
        anyhow::Error::new(e).context(format!(
            "{reason} (vectorizer: {}, model: {})",
            config.vectorizer.display(),
            config.model.display()
        ))
    })?;
    info!(?predictor, "Artifacts loaded");

    sentiment_server::run(config, predictor)
        .await
        .context("HTTP server failed")
}
