//! Библиотека разбиения пакетных EDI-файлов.
//!
//! Крейт реализует одно линейное преобразование: пакетный EDI-файл
//! делится на два самостоятельных файла с общими строками заголовка и
//! пересчитанными счётчиками записей в завершающей записи.
//!
//! Файл состоит из записей пяти типов, распознаваемых по литеральному
//! префиксу строки:
//!
//! - `$$HDR` — файловый заголовок
//! - `H1`, `H2` — фиксированные строки заголовка, входящие в счётчик
//! - `D1` — детальные записи (именно они делятся пополам)
//! - `$$EOF` — завершающая запись с 7-значным счётчиком
//!
//! # Быстрый старт
//!
//! ```
//! use edifile::prelude::*;
//!
//! let lines = [
//!     "$$HDRxxx\n",
//!     "H1a\n",
//!     "H2b\n",
//!     "D1-1\n",
//!     "D1-2\n",
//!     "D1-3\n",
//!     "$$EOFAAAA0000005\n",
//! ];
//! let batch = BatchFile::from_lines(&lines)?;
//! let plan = SplitPlan::new(&batch.details);
//! assert_eq!(plan.part1.len(), 1);
//! assert_eq!(plan.part2.len(), 2);
//!
//! let footer = FooterTemplate::parse(&batch.footer)?;
//! assert_eq!(footer.render(3), "$$EOFAAAA0000003\n");
//! # Ok::<(), edifile::error::SplitError>(())
//! ```

pub mod batch;
pub mod error;
pub mod footer;
pub mod plan;
pub mod writer;

/// Наиболее используемые типы и функции крейта.
pub mod prelude {
    pub use crate::batch::{BatchFile, RecordKind, read_lines};
    pub use crate::error::{SplitError, SplitResult};
    pub use crate::footer::{COUNT_WIDTH, COUNTED_HEADER_RECORDS, FooterTemplate};
    pub use crate::plan::SplitPlan;
    pub use crate::writer::{
        PART1_SUFFIX, PART2_SUFFIX, first_line, part_paths, write_part, write_part_file,
    };
}
