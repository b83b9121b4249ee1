//! # Анализ тональности текста
//!
//! Классификация коротких текстов на "positive", "negative" и "neutral"
//! подсчётом маркеров из двух фиксированных словарей.
//!
//! ## Модули
//!
//! - `sentiment` - словари, оценщик и пакетный анализ
//! - `api` - HTTP-интерфейс (axum)
//! - `config` - конфигурация приложения
//! - `logging` - настройка tracing
//! - `error` - типы ошибок
//!
//! ## Пример
//!
//! ```rust
//! use text_sentiment::{Sentiment, SentimentScorer};
//!
//! let scorer = SentimentScorer::new();
//! let result = scorer.score("Всё отлично, я очень рад!");
//!
//! assert_eq!(result.sentiment, Sentiment::Positive);
//! assert_eq!(result.confidence, 0.95);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod sentiment;

pub use api::{router, serve, Reply, SentimentService};
pub use config::{load_config, AppConfig, ConfigError};
pub use error::{Error, ErrorKind, Result};
pub use sentiment::{
    split_lines, strip_text, BatchReport, BatchSummary, Lexicon, LineResult, MarkerBreakdown,
    Sentiment, SentimentResult, SentimentScorer,
};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Параметры формулы уверенности
pub mod defaults {
    /// Уверенность, когда маркеров нет
    pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

    /// Уверенность при равенстве позитивных и негативных маркеров
    pub const TIE_CONFIDENCE: f64 = 0.55;

    /// Нижняя граница уверенности для победившей полярности
    pub const BASE_CONFIDENCE: f64 = 0.6;

    /// Вклад доли победившей полярности
    pub const CONFIDENCE_SPAN: f64 = 0.4;

    pub const MAX_CONFIDENCE: f64 = 0.95;

    /// Больше этого числа серий "!" добавляет один позитивный маркер
    pub const EMPHASIS_RUN_THRESHOLD: usize = 2;
}

/// Сообщения для клиентов
pub mod messages {
    pub const EMPTY_TEXT: &str = "Текст не может быть пустым";
    pub const EMPTY_LINES: &str = "Список строк не может быть пустым";
    pub const INTERNAL_PREFIX: &str = "Ошибка обработки";
}
