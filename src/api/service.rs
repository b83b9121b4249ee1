//! Диспетчер запросов
//!
//! Не зависит от HTTP-фреймворка: принимает метод, путь и тело, возвращает
//! `Reply` либо `Error`. Преобразование в HTTP-ответ делает `http` модуль.

use super::types::{AnalyzeRequest, BatchRequest};
use crate::error::{Error, Result};
use crate::messages;
use crate::sentiment::{strip_text, BatchReport, SentimentResult, SentimentScorer};
use axum::http::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Пути пакетного анализа
pub const BATCH_PATHS: &[&str] = &["/batch", "/analyze/batch"];

/// Успешный исход обработки запроса
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Ответ на CORS preflight
    Preflight,
    Analysis(SentimentResult),
    Batch(BatchReport),
}

/// Сервис анализа тональности
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentService {
    scorer: SentimentScorer,
}

impl SentimentService {
    pub fn new(scorer: SentimentScorer) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &SentimentScorer {
        &self.scorer
    }

    /// Обработать запрос
    pub fn handle(&self, method: &Method, path: &str, body: &[u8]) -> Result<Reply> {
        if *method == Method::OPTIONS {
            return Ok(Reply::Preflight);
        }
        if *method != Method::POST {
            return Err(Error::MethodNotAllowed);
        }

        if is_batch_path(path) {
            self.analyze_batch(body).map(Reply::Batch)
        } else {
            self.analyze(body).map(Reply::Analysis)
        }
    }

    /// Анализ одного текста из тела `{"text": ...}`
    pub fn analyze(&self, body: &[u8]) -> Result<SentimentResult> {
        let request: AnalyzeRequest = parse_body(body)?;
        let text = strip_text(&request.text);

        if text.is_empty() {
            return Err(Error::Validation(messages::EMPTY_TEXT.to_string()));
        }

        let result = self.scorer.score(text);
        debug!(
            chars = text.chars().count(),
            sentiment = %result.sentiment,
            confidence = result.confidence,
            "text analyzed"
        );
        Ok(result)
    }

    /// Анализ списка строк из тела `{"lines": [...]}`
    pub fn analyze_batch(&self, body: &[u8]) -> Result<BatchReport> {
        let request: BatchRequest = parse_body(body)?;
        let report = self.scorer.score_lines(&request.lines);

        if report.results.is_empty() {
            return Err(Error::Validation(messages::EMPTY_LINES.to_string()));
        }

        debug!(
            total = report.summary.total,
            positive = report.summary.positive,
            negative = report.summary.negative,
            neutral = report.summary.neutral,
            "batch analyzed"
        );
        Ok(report)
    }
}

fn is_batch_path(path: &str) -> bool {
    let path = path.trim_end_matches('/');
    BATCH_PATHS.contains(&path)
}

/// Разобрать тело запроса
///
/// Пустое тело и синтаксически некорректный JSON дают значение по
/// умолчанию. JSON, не являющийся объектом, и поле неверного типа
/// (включая `null`) возвращают внутреннюю ошибку.
fn parse_body<T>(body: &[u8]) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let value = match serde_json::from_slice::<Value>(body) {
        Ok(value) => value,
        Err(_) => return Ok(T::default()),
    };

    match value {
        Value::Object(_) => Ok(serde_json::from_value(value)?),
        Value::Null => Err(Error::NotAnObject("null")),
        Value::Bool(_) => Err(Error::NotAnObject("bool")),
        Value::Number(_) => Err(Error::NotAnObject("number")),
        Value::String(_) => Err(Error::NotAnObject("string")),
        Value::Array(_) => Err(Error::NotAnObject("array")),
    }
}
