//! Типы ошибок

use crate::config::ConfigError;
use thiserror::Error;

/// Псевдоним результата для крейта
pub type Result<T> = std::result::Result<T, Error>;

/// Категория ошибки для внешнего интерфейса
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MethodNotAllowed,
    Validation,
    PayloadTooLarge,
    Internal,
}

/// Основной тип ошибки
#[derive(Error, Debug)]
pub enum Error {
    /// Метод запроса не поддерживается
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Некорректный ввод пользователя
    #[error("{0}")]
    Validation(String),

    /// Тело запроса больше допустимого размера
    #[error("Тело запроса превышает {limit} байт")]
    PayloadTooLarge { limit: usize },

    /// Ошибка разбора или сериализации JSON
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// Корректный JSON, но не объект
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// Ошибка чтения тела запроса
    #[error("{0}")]
    Body(#[from] axum::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MethodNotAllowed => ErrorKind::MethodNotAllowed,
            Error::Validation(_) => ErrorKind::Validation,
            Error::PayloadTooLarge { .. } => ErrorKind::PayloadTooLarge,
            Error::Json(_)
            | Error::NotAnObject(_)
            | Error::Body(_)
            | Error::Io(_)
            | Error::Config(_) => ErrorKind::Internal,
        }
    }

    /// HTTP-код ответа
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::MethodNotAllowed => 405,
            ErrorKind::Validation => 400,
            ErrorKind::PayloadTooLarge => 413,
            ErrorKind::Internal => 500,
        }
    }

    /// Сообщение для клиента
    ///
    /// Внутренние ошибки получают префикс и текст исходной причины.
    pub fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::Internal => format!("{}: {}", crate::messages::INTERNAL_PREFIX, self),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::MethodNotAllowed.status_code(), 405);
        assert_eq!(Error::Validation("x".into()).status_code(), 400);
        assert_eq!(Error::PayloadTooLarge { limit: 10 }.status_code(), 413);
        assert_eq!(Error::NotAnObject("array").status_code(), 500);

        let json_err = serde_json::from_str::<u32>("\"a\"").unwrap_err();
        assert_eq!(Error::from(json_err).status_code(), 500);
    }

    #[test]
    fn test_public_messages() {
        assert_eq!(Error::MethodNotAllowed.public_message(), "Method not allowed");
        assert_eq!(
            Error::Validation("Текст не может быть пустым".into()).public_message(),
            "Текст не может быть пустым"
        );

        let json_err = serde_json::from_str::<u32>("\"a\"").unwrap_err();
        let message = Error::from(json_err).public_message();
        assert!(message.starts_with("Ошибка обработки: "), "got {message}");
        assert!(message.contains("invalid type"));

        assert_eq!(
            Error::PayloadTooLarge { limit: 16 }.public_message(),
            "Тело запроса превышает 16 байт"
        );
        assert_eq!(
            Error::NotAnObject("array").public_message(),
            "Ошибка обработки: expected a JSON object, got array"
        );
    }
}
