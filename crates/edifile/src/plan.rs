//! Планирование точки разбиения детальных записей.

/// План разбиения: две смежные половины детальных записей.
///
/// `part1` получает первые `N / 2` записей (целочисленное деление),
/// `part2` — оставшиеся. При нечётном `N` лишняя запись уходит во
/// вторую половину; при `N == 1` первая половина пуста — это корректный
/// случай, а не ошибка. Относительный порядок записей сохраняется.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPlan<'a> {
    /// Первая половина: записи `[0, N / 2)`.
    pub part1: &'a [String],
    /// Вторая половина: записи `[N / 2, N)`.
    pub part2: &'a [String],
}

impl<'a> SplitPlan<'a> {
    /// Делит записи пополам по точке `N / 2`.
    #[must_use]
    pub fn new(details: &'a [String]) -> Self {
        let (part1, part2) = details.split_at(details.len() / 2);
        Self { part1, part2 }
    }
}
