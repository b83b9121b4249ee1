//! Пакетный анализ
//!
//! Построчная оценка загруженного файла и сводка по меткам.

use super::scorer::{strip_text, Sentiment, SentimentScorer};
use serde::{Deserialize, Serialize};

/// Результат для одной строки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineResult {
    pub line: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
}

/// Количество строк по меткам
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl BatchSummary {
    fn record(&mut self, sentiment: Sentiment) {
        self.total += 1;
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }
}

/// Результаты пакетного анализа
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub results: Vec<LineResult>,
    pub summary: BatchSummary,
}

/// Разбить текст на строки, обрезать пробелы и отбросить пустые
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(strip_text)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

impl SentimentScorer {
    /// Оценить каждую непустую строку по порядку
    ///
    /// Строки из одних пробелов пропускаются и в отчёт не попадают.
    pub fn score_lines<S: AsRef<str>>(&self, lines: &[S]) -> BatchReport {
        let mut report = BatchReport::default();

        for line in lines {
            let line = strip_text(line.as_ref());
            if line.is_empty() {
                continue;
            }

            let result = self.score(line);
            report.summary.record(result.sentiment);
            report.results.push(LineResult {
                line: line.to_string(),
                sentiment: result.sentiment,
                confidence: result.confidence,
            });
        }

        report
    }
}
