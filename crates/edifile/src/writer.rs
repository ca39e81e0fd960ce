//! Запись половин EDI-файла и вывод имён выходных файлов.

use std::{
    ffi::OsString,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{batch::BatchFile, footer::FooterTemplate};

/// Суффикс имени первого выходного файла.
pub const PART1_SUFFIX: &str = "_p1";

/// Суффикс имени второго выходного файла.
pub const PART2_SUFFIX: &str = "_p2";

/// Выводит пути обоих выходных файлов из пути входного.
///
/// Суффикс вставляется перед расширением с сохранением последнего;
/// у файла без расширения суффикс добавляется в конец имени.
///
/// # Пример
/// ```
/// use std::path::Path;
/// use edifile::writer::part_paths;
///
/// let (p1, p2) = part_paths(Path::new("orders.txt"));
/// assert_eq!(p1, Path::new("orders_p1.txt"));
/// assert_eq!(p2, Path::new("orders_p2.txt"));
/// ```
#[must_use]
pub fn part_paths(input: &Path) -> (PathBuf, PathBuf) {
    (path_with_suffix(input, PART1_SUFFIX), path_with_suffix(input, PART2_SUFFIX))
}

fn path_with_suffix(input: &Path, suffix: &str) -> PathBuf {
    let mut name = input.file_stem().map_or_else(OsString::new, OsString::from);
    name.push(suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Записывает одну половину файла.
///
/// Порядок записи фиксирован: файловый заголовок дословно, `H1`
/// дословно, `H2` дословно, детальные записи половины в исходном
/// порядке, затем пересчитанная завершающая запись.
///
/// Возвращает счётчик записей, помещённый в завершающую запись.
pub fn write_part<W: Write>(
    mut out: W,
    batch: &BatchFile,
    footer: &FooterTemplate,
    details: &[String],
) -> io::Result<usize> {
    out.write_all(batch.header.as_bytes())?;
    out.write_all(batch.h1.as_bytes())?;
    out.write_all(batch.h2.as_bytes())?;
    for line in details {
        out.write_all(line.as_bytes())?;
    }

    let count = FooterTemplate::record_count(details.len());
    out.write_all(footer.render(count).as_bytes())?;
    Ok(count)
}

/// Создаёт файл половины и записывает его через [`write_part`].
///
/// Запись не атомарна: при сбое посреди записи остаётся частичный файл.
pub fn write_part_file(
    path: &Path,
    batch: &BatchFile,
    footer: &FooterTemplate,
    details: &[String],
) -> io::Result<usize> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let count = write_part(&mut writer, batch, footer, details)?;
    writer.flush()?;
    Ok(count)
}

/// Читает первую строку записанного файла.
///
/// Используется для контрольного отчёта после записи; структура файла
/// при этом не проверяется.
pub fn first_line(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line)
}
