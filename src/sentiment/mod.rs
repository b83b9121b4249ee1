//! Анализ тональности
//!
//! - `lexicon` - словари маркеров
//! - `scorer` - оценка одного текста
//! - `batch` - построчная оценка со сводкой

pub mod batch;
pub mod lexicon;
pub mod scorer;

pub use batch::{split_lines, BatchReport, BatchSummary, LineResult};
pub use lexicon::{Lexicon, NEGATIVE_MARKERS, POSITIVE_MARKERS};
pub use scorer::{
    classify, normalize, strip_text, MarkerBreakdown, Sentiment, SentimentResult, SentimentScorer,
};
