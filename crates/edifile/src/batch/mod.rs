//! Модель записей пакетного EDI-файла.
//!
//! Модуль определяет роли записей ([`RecordKind`]), результат
//! классификации ([`BatchFile`]) и чтение файла в память.

mod classify;
mod types;

pub use classify::read_lines;
pub use types::{BatchFile, RecordKind};
