//! Классификация строк и валидация структуры EDI-файла.

use std::{fs, path::Path};

use super::{BatchFile, RecordKind};
use crate::error::{SplitError, SplitResult};

/// Читает файл целиком и разбивает его на строки с сохранением
/// терминаторов.
///
/// Файл загружается в память полностью: формат не предполагает
/// потоковой обработки, а завершающая запись нужна до начала записи
/// выходных файлов. Последняя строка без `\n` сохраняется как есть.
pub fn read_lines(path: &Path) -> SplitResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.split_inclusive('\n').map(str::to_owned).collect())
}

impl BatchFile {
    /// Читает и классифицирует файл по пути.
    pub fn read(path: &Path) -> SplitResult<Self> {
        let lines = read_lines(path)?;
        Self::from_lines(&lines)
    }

    /// Раскладывает строки по ролям и проверяет структуру файла.
    ///
    /// Одиночные слоты (`$$HDR`, `H1`, `H2`, `$$EOF`) заполняются по
    /// принципу «последний выигрывает»: повторная строка с тем же
    /// префиксом молча заменяет предыдущую. Строки без известного
    /// префикса отбрасываются.
    ///
    /// Порядок проверок фиксирован: файловый заголовок, `H1`, `H2`,
    /// `$$EOF`, затем наличие хотя бы одной записи `D1`.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> SplitResult<Self> {
        let mut header = None;
        let mut h1 = None;
        let mut h2 = None;
        let mut footer = None;
        let mut details = Vec::new();

        for line in lines {
            let line = line.as_ref();
            match RecordKind::of(line) {
                Some(RecordKind::Header) => header = Some(line.to_owned()),
                Some(RecordKind::H1) => h1 = Some(line.to_owned()),
                Some(RecordKind::H2) => h2 = Some(line.to_owned()),
                Some(RecordKind::Detail) => details.push(line.to_owned()),
                Some(RecordKind::Footer) => footer = Some(line.to_owned()),
                None => {}
            }
        }

        let header = header.ok_or(SplitError::MissingHeader)?;
        let h1 = h1.ok_or(SplitError::MissingH1)?;
        let h2 = h2.ok_or(SplitError::MissingH2)?;
        let footer = footer.ok_or(SplitError::MissingFooter)?;
        if details.is_empty() {
            return Err(SplitError::NoDetailRecords);
        }

        Ok(Self { header, h1, h2, details, footer })
    }
}
