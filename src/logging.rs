//! Настройка логирования

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Установить глобальный подписчик tracing
///
/// `RUST_LOG`, если задан, имеет приоритет над `level`.
pub fn setup_logging(level: &str, ansi: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_ansi(ansi))
        .with(filter)
        .try_init()?;

    Ok(())
}
