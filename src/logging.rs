use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::env;
use std::time::Instant;
use tracing::{Level, error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logs every request with its matched route, status and latency.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let request_id = uuid::Uuid::new_v4();

    let response = next.run(req).await;
    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    match status {
        500..=599 => error!(%request_id, %method, %path, status, latency_ms, "Server error"),
        400..=499 => warn!(%request_id, %method, %path, status, latency_ms, "Client error"),
        _ => info!(%request_id, %method, %path, status, latency_ms, "Request completed"),
    }

    response
}

/// Console output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info,tower_http=warn,sqlx=warn",
            env!("CARGO_CRATE_NAME")
        ))
    })
}

/// Installs the global subscriber.
///
/// Console logs go to stdout in the `LOG_FORMAT` format. When `LOG_DIR` is
/// set, a daily-rotated JSON log is also written there.
pub fn init_tracing() {
    let format = LogFormat::parse(&env::var("LOG_FORMAT").unwrap_or_default());

    let console_layer = match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_filter(default_filter())
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .compact()
            .with_filter(default_filter())
            .boxed(),
    };

    let file_layer = env::var("LOG_DIR")
        .ok()
        .filter(|dir| !dir.is_empty())
        .and_then(|dir| match std::fs::create_dir_all(&dir) {
            Ok(()) => Some(dir),
            Err(e) => {
                eprintln!("Failed to create log directory {dir}: {e}");
                None
            }
        })
        .map(|dir| {
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "clickcrafters.json");
            fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_current_span(true)
                .with_filter(tracing_subscriber::filter::LevelFilter::from_level(
                    Level::INFO,
                ))
        });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    info!(log.format = ?format, "Tracing initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(""), LogFormat::Pretty);
    }
}
