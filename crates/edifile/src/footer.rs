//! Завершающая запись `$$EOF` и пересчёт счётчика записей.

use crate::error::{SplitError, SplitResult};

/// Ширина поля счётчика записей в завершающей записи (символов).
pub const COUNT_WIDTH: usize = 7;

/// Количество фиксированных записей (`H1` и `H2`), входящих в счётчик
/// каждой половины помимо детальных записей. Строки-маркеры `$$HDR` и
/// `$$EOF` в счётчик не входят.
pub const COUNTED_HEADER_RECORDS: usize = 2;

/// Шаблон завершающей записи.
///
/// Исходная строка `$$EOF` без терминатора и без последних
/// [`COUNT_WIDTH`] символов счётчика. Один шаблон используется для
/// обеих половин с их собственными счётчиками.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterTemplate {
    base: String,
}

impl FooterTemplate {
    /// Извлекает шаблон из исходной строки `$$EOF`.
    ///
    /// Последние [`COUNT_WIDTH`] символов отбрасываются независимо от
    /// того, являются ли они цифрами. Если после удаления терминаторов
    /// в строке меньше [`COUNT_WIDTH`] символов, возвращается
    /// [`SplitError::FooterTooShort`].
    pub fn parse(footer_line: &str) -> SplitResult<Self> {
        let stripped = footer_line.trim_end_matches(['\n', '\r']);
        let cut = stripped
            .char_indices()
            .rev()
            .nth(COUNT_WIDTH - 1)
            .map(|(idx, _)| idx)
            .ok_or_else(|| SplitError::FooterTooShort { len: stripped.chars().count() })?;
        Ok(Self { base: stripped[..cut].to_owned() })
    }

    /// База шаблона — строка `$$EOF` без счётчика и терминатора.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Собирает завершающую запись с новым счётчиком.
    ///
    /// Счётчик дополняется нулями до [`COUNT_WIDTH`] цифр; запись всегда
    /// оканчивается одиночным `\n` независимо от исходного терминатора.
    #[must_use]
    pub fn render(&self, record_count: usize) -> String {
        format!("{}{:0width$}\n", self.base, record_count, width = COUNT_WIDTH)
    }

    /// Счётчик записей для половины с `detail_count` детальными
    /// записями.
    #[must_use]
    pub const fn record_count(detail_count: usize) -> usize {
        detail_count + COUNTED_HEADER_RECORDS
    }
}
