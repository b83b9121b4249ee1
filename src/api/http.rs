//! HTTP-слой на axum
//!
//! Один обработчик на все пути и методы; заголовки CORS выставляются
//! на каждом ответе, включая отказы по размеру тела.

use super::service::{Reply, SentimentService};
use super::types::ErrorBody;
use crate::config::ServerSettings;
use crate::error::{Error, ErrorKind, Result};
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use futures::StreamExt;
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy)]
struct AppState {
    service: SentimentService,
    max_body_bytes: usize,
}

/// Собрать маршрутизатор сервиса
pub fn router(service: SentimentService, max_body_bytes: usize) -> Router {
    Router::new().fallback(dispatch).with_state(AppState {
        service,
        max_body_bytes,
    })
}

async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let path = parts.uri.path();
    debug!(method = %parts.method, path, "request");

    // OPTIONS и запрещённые методы отвечают без чтения тела
    if parts.method != Method::POST {
        return respond(state.service.handle(&parts.method, path, &[]));
    }

    let outcome = match read_body(&parts.headers, body, state.max_body_bytes).await {
        Ok(bytes) => state.service.handle(&parts.method, path, &bytes),
        Err(err) => Err(err),
    };
    respond(outcome)
}

fn respond(outcome: Result<Reply>) -> Response {
    match outcome {
        Ok(reply) => reply.into_response(),
        Err(err) => err.into_response(),
    }
}

/// Прочитать тело запроса целиком, не превышая `limit` байт
async fn read_body(headers: &HeaderMap, body: Body, limit: usize) -> Result<Vec<u8>> {
    let declared = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<usize>().ok());
    if declared.is_some_and(|len| len > limit) {
        return Err(Error::PayloadTooLarge { limit });
    }

    let mut buf = Vec::with_capacity(declared.unwrap_or(0));
    let mut stream = body.into_data_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if buf.len() + chunk.len() > limit {
            return Err(Error::PayloadTooLarge { limit });
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf)
}

fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    let mut response = (status, Json(payload)).into_response();
    response
        .headers_mut()
        .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Preflight => (
                StatusCode::OK,
                [
                    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
                    (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
                    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
                ],
            )
                .into_response(),
            Reply::Analysis(result) => json_response(StatusCode::OK, &result),
            Reply::Batch(report) => json_response(StatusCode::OK, &report),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self.kind() {
            ErrorKind::Internal => error!(error = %self, "request failed"),
            ErrorKind::Validation | ErrorKind::PayloadTooLarge => {
                warn!(error = %self, "request rejected")
            }
            ErrorKind::MethodNotAllowed => debug!("method not allowed"),
        }

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        json_response(status, &ErrorBody { error: self.public_message() })
    }
}

/// Запустить HTTP-сервер и работать до Ctrl-C
pub async fn serve(service: SentimentService, settings: &ServerSettings) -> Result<()> {
    let listener = TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, max_body_bytes = settings.max_body_bytes, "sentiment API listening");

    axum::serve(listener, router(service, settings.max_body_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("sentiment API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for Ctrl-C: {}", e);
    }
}
