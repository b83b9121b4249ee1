//! Типы запросов и ответов HTTP-интерфейса

use serde::{Deserialize, Serialize};

/// Тело запроса на анализ одного текста
///
/// Отсутствующее поле `text` читается как пустая строка; `null` или
/// значение другого типа дают ошибку разбора.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
}

/// Тело запроса на пакетный анализ
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub lines: Vec<String>,
}

/// Тело ответа с ошибкой
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
