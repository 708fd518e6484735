//! HTTP front-end for tweet sentiment prediction.
//!
//! `GET /` answers a fixed liveness string and `POST /predict` classifies the
//! `text` field of a JSON body. The [`Predictor`] is loaded once and shared
//! read-only by every worker.

mod config;
mod error;
mod routes;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
pub use config::{Config, DEFAULT_MAX_BODY_BYTES};
pub use error::ApiError;
pub use routes::LIVENESS_MESSAGE;
use sentiment_inference::Predictor;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_DIRECTIVES: &str = "sentiment_server=info,sentiment_inference=info,actix_web=info";

/// Register both routes and the request body limit. Used by [`run`] and by tests.
pub fn configure(max_body_bytes: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::PayloadConfig::new(max_body_bytes))
            .route("/", web::get().to(routes::index))
            .route("/predict", web::post().to(routes::predict));
    }
}

/// Cross-origin requests are allowed from anywhere.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
}

/// Install the global `fmt` subscriber. `RUST_LOG` wins over the defaults.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub async fn run(config: Config, predictor: Predictor) -> std::io::Result<()> {
    let predictor = web::Data::new(predictor);
    let max_body_bytes = config.max_body_bytes;

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .app_data(predictor.clone())
            .configure(configure(max_body_bytes))
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    info!(host = %config.host, port = config.port, "Server listening");
    server.bind((config.host.as_str(), config.port))?.run().await
}
