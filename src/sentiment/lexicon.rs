//! Словари маркеров тональности
//!
//! Содержит два фиксированных списка подстрок (слова, основы слов и эмодзи).
//! Все записи в нижнем регистре; текст перед поиском должен быть приведён
//! к нижнему регистру.

/// Позитивные маркеры
pub const POSITIVE_MARKERS: &[&str] = &[
    "хорошо", "отлично", "прекрасно", "замечательно", "великолепно",
    "супер", "класс", "круто", "нравится", "люблю", "радость",
    "счастье", "восторг", "благодарность", "спасибо", "молодец",
    "удачно", "успешно", "приятно", "рад", "довольн", "восхищ",
    "идеальн", "превосходн", "чудесн", "отличн", "👍", "😊", "❤️", "🔥",
];

/// Негативные маркеры
pub const NEGATIVE_MARKERS: &[&str] = &[
    "плохо", "ужасно", "отвратительно", "кошмар", "ужас",
    "не нравится", "ненавижу", "разочарование", "грусть", "печаль",
    "злость", "гнев", "проблема", "неудача", "провал", "жалоба",
    "претензия", "недовольн", "расстроен", "разочарован", "обман",
    "плохой", "худший", "ужасный", "неприятн", "👎", "😠", "😡", "💔",
];

/// Словарь одной полярности
///
/// Поиск идёт по подстрокам без границ слов: основа "довольн" находит
/// и "довольный", и "недовольна".
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    entries: &'static [&'static str],
}

impl Lexicon {
    /// Позитивный словарь
    pub const fn positive() -> Self {
        Self {
            entries: POSITIVE_MARKERS,
        }
    }

    /// Негативный словарь
    pub const fn negative() -> Self {
        Self {
            entries: NEGATIVE_MARKERS,
        }
    }

    /// Записи, встречающиеся в тексте хотя бы раз (в порядке словаря)
    ///
    /// `normalized` должен быть уже в нижнем регистре. Повторы одной
    /// записи дают одно совпадение.
    pub fn matches(&self, normalized: &str) -> Vec<&'static str> {
        self.entries
            .iter()
            .copied()
            .filter(|entry| normalized.contains(entry))
            .collect()
    }
}
