//! HTTP-интерфейс
//!
//! - `service` - диспетчеризация запроса без привязки к фреймворку
//! - `http` - маршрутизатор axum и запуск сервера
//! - `types` - тела запросов и ответов

pub mod http;
pub mod service;
pub mod types;

pub use http::{router, serve};
pub use service::{Reply, SentimentService, BATCH_PATHS};
pub use types::{AnalyzeRequest, BatchRequest, ErrorBody};
