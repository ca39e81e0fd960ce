//! Основные типы записей EDI-файла.

/// Роль строки в EDI-файле, определяемая фиксированным префиксом.
///
/// Префиксы чувствительны к регистру и сравниваются с литеральным
/// началом строки без предварительной обрезки пробелов.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Файловый заголовок `$$HDR`.
    Header,
    /// Первая фиксированная строка заголовка `H1`.
    H1,
    /// Вторая фиксированная строка заголовка `H2`.
    H2,
    /// Детальная запись `D1`.
    Detail,
    /// Завершающая запись `$$EOF` со счётчиком записей.
    Footer,
}

impl RecordKind {
    /// Все роли в порядке появления в корректном файле.
    pub const ALL: [Self; 5] = [Self::Header, Self::H1, Self::H2, Self::Detail, Self::Footer];

    /// Возвращает префикс, по которому распознаётся запись.
    ///
    /// # Пример
    /// ```
    /// use edifile::batch::RecordKind;
    /// assert_eq!(RecordKind::Header.prefix(), "$$HDR");
    /// assert_eq!(RecordKind::Detail.prefix(), "D1");
    /// ```
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Header => "$$HDR",
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::Detail => "D1",
            Self::Footer => "$$EOF",
        }
    }

    /// Классифицирует строку по её началу.
    ///
    /// Строка, не подходящая ни под один префикс, считается посторонней:
    /// она не сохраняется и не попадает в выходные файлы.
    #[must_use]
    pub fn of(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| line.starts_with(kind.prefix()))
    }
}

/// Результат классификации EDI-файла.
///
/// Три строки заголовка, детальные записи в исходном порядке и
/// завершающая запись. Все строки хранятся дословно, включая исходные
/// терминаторы, чтобы запись выходных файлов воспроизводила вход байт
/// в байт.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFile {
    /// Строка файлового заголовка `$$HDR`.
    pub header: String,
    /// Строка `H1`.
    pub h1: String,
    /// Строка `H2`.
    pub h2: String,
    /// Детальные записи `D1` в исходном порядке.
    pub details: Vec<String>,
    /// Завершающая строка `$$EOF`.
    pub footer: String,
}

impl BatchFile {
    /// Количество детальных записей.
    #[must_use]
    pub fn detail_count(&self) -> usize {
        self.details.len()
    }
}
