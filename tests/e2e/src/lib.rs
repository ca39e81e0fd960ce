//! # e2e-tests - End-to-end тесты CLI инструментов
//!
//! Этот крейт содержит e2e тесты для CLI инструментов воркспейса:
//! - `edi_split` — разбиение пакетных EDI-файлов на две половины
//!
//! ## Фикстуры
//!
//! Тестовые файлы расположены в `fixtures/`:
//! - `batch_example.txt` — корректный файл с пятью записями `D1`
//! - `single_detail.txt` — корректный файл с одной записью `D1`
//! - `noisy_batch.txt` — корректный файл с посторонними строками
//! - `missing_header.txt` — файл без строки `$$HDR`
//! - `no_details.txt` — файл без записей `D1`
//! - `short_footer.txt` — строка `$$EOF` короче поля счётчика

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Получить путь к директории фикстур.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Получить путь к фикстуре по имени файла.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Скопировать фикстуру в рабочую директорию теста.
///
/// `edi_split` ищет кандидатов в текущей директории и пишет выходные
/// файлы рядом со входным, поэтому тесты работают с копией фикстуры
/// в scratch-директории.
pub fn copy_fixture(name: &str, dir: &Path) -> Result<PathBuf> {
    let target = dir.join(name);
    std::fs::copy(fixture(name), &target)
        .with_context(|| format!("copy fixture '{name}' to {}", dir.display()))?;
    Ok(target)
}
