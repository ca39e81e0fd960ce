//! Модуль ошибок обработки EDI-файлов.

use thiserror::Error;

/// Главная ошибка обработки EDI-файла.
///
/// Объединяет I/O ошибки и ошибки валидации структуры файла. Любая из
/// ошибок валидации прерывает обработку файла до создания выходных
/// файлов.
#[derive(Debug, Error)]
pub enum SplitError {
    /// Ошибка ввода/вывода.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// В файле нет строки файлового заголовка `$$HDR`.
    #[error("$$HDR line not found in file")]
    MissingHeader,

    /// В файле нет строки `H1`.
    #[error("H1 line not found in file")]
    MissingH1,

    /// В файле нет строки `H2`.
    #[error("H2 line not found in file")]
    MissingH2,

    /// В файле нет завершающей строки `$$EOF`.
    #[error("$$EOF line not found in file")]
    MissingFooter,

    /// В файле нет ни одной детальной записи `D1`.
    #[error("no D1 detail lines found in file")]
    NoDetailRecords,

    /// Строка `$$EOF` короче поля счётчика записей.
    ///
    /// Без этой проверки усечение последних 7 символов испортило бы
    /// базу шаблона в обоих выходных файлах.
    #[error("$$EOF line is too short for the record count field: {len} character(s)")]
    FooterTooShort {
        /// Длина строки `$$EOF` в символах после удаления терминаторов.
        len: usize,
    },
}

/// Удобный alias для Result с SplitError.
pub type SplitResult<T> = Result<T, SplitError>;
