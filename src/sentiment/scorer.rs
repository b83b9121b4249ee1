//! Оценщик тональности
//!
//! Подсчитывает маркеры из двух словарей, применяет усиление за
//! восклицательные знаки и выводит метку с уверенностью.

use super::lexicon::Lexicon;
use crate::defaults;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Серии из одного и более восклицательных знаков
static EXCLAMATION_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!+").unwrap());
/// Серии из одного и более вопросительных знаков
static QUESTION_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\?+").unwrap());

/// Метка тональности
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Результат анализа одного текста
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    /// Уверенность в диапазоне [0.5, 0.95]
    pub confidence: f64,
}

/// Детализация одного прохода оценки
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerBreakdown {
    /// Найденные позитивные маркеры
    pub positive_matches: Vec<&'static str>,
    /// Найденные негативные маркеры
    pub negative_matches: Vec<&'static str>,
    /// Число серий "!"
    pub exclamation_runs: usize,
    /// Число серий "?"; на классификацию не влияет
    pub question_runs: usize,
    /// Было ли добавлено усиление за восклицания
    pub emphasis_boost: bool,
    /// Итоговый позитивный счёт (с усилением)
    pub positive_count: usize,
    pub negative_count: usize,
}

/// Обрезать пробельные символы по краям
///
/// Помимо Unicode-пробелов срезает разделители `\x1c`..`\x1f`.
pub fn strip_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Привести текст к виду для поиска маркеров: обрезать пробелы и понизить регистр
pub fn normalize(text: &str) -> String {
    strip_text(text).to_lowercase()
}

/// Оценщик тональности на основе словарей
///
/// Не хранит изменяемого состояния, поэтому один экземпляр можно
/// использовать из любого числа потоков.
#[derive(Debug, Clone, Copy)]
pub struct SentimentScorer {
    positive: Lexicon,
    negative: Lexicon,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer {
    /// Создать оценщик со встроенными словарями
    pub const fn new() -> Self {
        Self {
            positive: Lexicon::positive(),
            negative: Lexicon::negative(),
        }
    }

    /// Оценить тональность текста
    ///
    /// Вызывающая сторона отвечает за отказ на пустом тексте; для пустой
    /// строки результат будет `neutral` с уверенностью 0.5.
    pub fn score(&self, text: &str) -> SentimentResult {
        self.explain(text).0
    }

    /// Оценить текст и вернуть детализацию подсчёта
    pub fn explain(&self, text: &str) -> (SentimentResult, MarkerBreakdown) {
        let normalized = normalize(text);

        let positive_matches = self.positive.matches(&normalized);
        let negative_matches = self.negative.matches(&normalized);

        let exclamation_runs = EXCLAMATION_RUNS.find_iter(&normalized).count();
        let question_runs = QUESTION_RUNS.find_iter(&normalized).count();

        let mut positive_count = positive_matches.len();
        let negative_count = negative_matches.len();

        // Усиление добавляется до подсчёта суммы и может перевесить негатив
        let emphasis_boost = exclamation_runs > defaults::EMPHASIS_RUN_THRESHOLD;
        if emphasis_boost {
            positive_count += 1;
        }

        let result = classify(positive_count, negative_count);

        let breakdown = MarkerBreakdown {
            positive_matches,
            negative_matches,
            exclamation_runs,
            question_runs,
            emphasis_boost,
            positive_count,
            negative_count,
        };

        (result, breakdown)
    }
}

/// Метка и уверенность по итоговым счётчикам маркеров
pub fn classify(positive_count: usize, negative_count: usize) -> SentimentResult {
    let total = positive_count + negative_count;

    if total == 0 {
        return SentimentResult {
            sentiment: Sentiment::Neutral,
            confidence: defaults::NEUTRAL_CONFIDENCE,
        };
    }

    let (sentiment, winner) = match positive_count.cmp(&negative_count) {
        std::cmp::Ordering::Greater => (Sentiment::Positive, positive_count),
        std::cmp::Ordering::Less => (Sentiment::Negative, negative_count),
        std::cmp::Ordering::Equal => {
            return SentimentResult {
                sentiment: Sentiment::Neutral,
                confidence: defaults::TIE_CONFIDENCE,
            }
        }
    };

    let share = winner as f64 / total.max(1) as f64;
    let confidence =
        (defaults::BASE_CONFIDENCE + share * defaults::CONFIDENCE_SPAN).min(defaults::MAX_CONFIDENCE);

    SentimentResult { sentiment, confidence }
}
