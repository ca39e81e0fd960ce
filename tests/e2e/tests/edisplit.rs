//! E2E тесты для CLI инструмента `edi_split`.
//!
//! Проверяем полный цикл: обнаружение файлов в рабочей директории,
//! интерактивный выбор, разбиение и отчёт об ошибках валидации.

use std::fs;

use assert_cmd::Command;
use e2e_tests::copy_fixture;
use predicates::prelude::*;
use tempfile::tempdir;

/// Создать команду для запуска edi_split.
///
/// `cargo_bin` deprecated из-за edge case с custom build directories,
/// но это единственный способ для кросс-крейтовых бинарников.
#[expect(deprecated)]
fn edi_split() -> Command {
    Command::cargo_bin("edi_split").unwrap()
}

// ============================================================================
// Успешное разбиение
// ============================================================================

#[test]
fn test_single_candidate_is_processed_automatically() {
    let dir = tempdir().unwrap();
    copy_fixture("batch_example.txt", dir.path()).unwrap();

    edi_split()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 5 detail records to split"))
        .stdout(predicate::str::contains("Part 1: 2 records"))
        .stdout(predicate::str::contains("Part 2: 3 records"))
        .stdout(predicate::str::contains("Files created successfully"))
        .stdout(predicate::str::contains("Part 1 starts with: $$HDRACME"))
        .stdout(predicate::str::contains("Part 2 starts with: $$HDRACME"));

    let part1 = fs::read_to_string(dir.path().join("batch_example_p1.txt")).unwrap();
    let part2 = fs::read_to_string(dir.path().join("batch_example_p2.txt")).unwrap();

    // Каждая половина: заголовки + свои детали + свой счётчик
    assert_eq!(part1.lines().filter(|l| l.starts_with("D1")).count(), 2);
    assert_eq!(part2.lines().filter(|l| l.starts_with("D1")).count(), 3);
    assert!(part1.ends_with("0000004\n"));
    assert!(part2.ends_with("0000005\n"));
    assert!(part1.starts_with("$$HDRACME  0018244"));
}

#[test]
fn test_explicit_input_flag_skips_discovery() {
    let dir = tempdir().unwrap();
    let input = copy_fixture("batch_example.txt", dir.path()).unwrap();

    edi_split()
        .args(["--input", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 5 detail records to split"));

    assert!(dir.path().join("batch_example_p1.txt").exists());
    assert!(dir.path().join("batch_example_p2.txt").exists());
}

#[test]
fn test_single_detail_goes_to_part2() {
    let dir = tempdir().unwrap();
    copy_fixture("single_detail.txt", dir.path()).unwrap();

    edi_split()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 detail records to split"))
        .stdout(predicate::str::contains("Part 1: 0 records"))
        .stdout(predicate::str::contains("Part 2: 1 records"));

    let part1 = fs::read_to_string(dir.path().join("single_detail_p1.txt")).unwrap();
    let part2 = fs::read_to_string(dir.path().join("single_detail_p2.txt")).unwrap();

    // Пустая первая половина — корректный случай: заголовки + счётчик 2
    assert_eq!(part1.lines().filter(|l| l.starts_with("D1")).count(), 0);
    assert!(part1.ends_with("0000002\n"));
    assert_eq!(part2.lines().filter(|l| l.starts_with("D1")).count(), 1);
    assert!(part2.ends_with("0000003\n"));
}

#[test]
fn test_unrecognized_lines_do_not_reach_output() {
    let dir = tempdir().unwrap();
    copy_fixture("noisy_batch.txt", dir.path()).unwrap();

    edi_split()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 4 detail records to split"));

    let part1 = fs::read_to_string(dir.path().join("noisy_batch_p1.txt")).unwrap();
    let part2 = fs::read_to_string(dir.path().join("noisy_batch_p2.txt")).unwrap();

    for content in [&part1, &part2] {
        assert!(!content.contains("X9"));
        assert!(!content.contains("REM"));
        assert!(content.lines().all(|l| !l.is_empty()));
    }
}

#[test]
fn test_output_halves_reparse_cleanly() {
    let dir = tempdir().unwrap();
    copy_fixture("batch_example.txt", dir.path()).unwrap();

    edi_split().current_dir(dir.path()).assert().success();

    // Половина — снова корректный EDI-файл: её можно разбить ещё раз
    let part2 = dir.path().join("batch_example_p2.txt");
    edi_split()
        .args(["--input", part2.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 detail records to split"));

    let nested1 = fs::read_to_string(dir.path().join("batch_example_p2_p1.txt")).unwrap();
    let nested2 = fs::read_to_string(dir.path().join("batch_example_p2_p2.txt")).unwrap();
    assert!(nested1.ends_with("0000003\n"));
    assert!(nested2.ends_with("0000004\n"));
}

// ============================================================================
// Обнаружение файлов и меню выбора
// ============================================================================

#[test]
fn test_empty_directory_reports_and_exits() {
    let dir = tempdir().unwrap();

    edi_split()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No .txt files found in current directory."));
}

#[test]
fn test_menu_selection_processes_chosen_file() {
    let dir = tempdir().unwrap();
    copy_fixture("batch_example.txt", dir.path()).unwrap();
    copy_fixture("single_detail.txt", dir.path()).unwrap();

    // Кандидаты отсортированы: 1. batch_example.txt, 2. single_detail.txt
    edi_split()
        .current_dir(dir.path())
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Select a file to process"))
        .stdout(predicate::str::contains("Found 1 detail records to split"));

    assert!(dir.path().join("single_detail_p1.txt").exists());
    assert!(!dir.path().join("batch_example_p1.txt").exists());
}

#[test]
fn test_menu_out_of_range_selection() {
    let dir = tempdir().unwrap();
    copy_fixture("batch_example.txt", dir.path()).unwrap();
    copy_fixture("single_detail.txt", dir.path()).unwrap();

    edi_split()
        .current_dir(dir.path())
        .write_stdin("9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid selection."));

    assert!(!dir.path().join("batch_example_p1.txt").exists());
    assert!(!dir.path().join("single_detail_p1.txt").exists());
}

#[test]
fn test_menu_non_numeric_input() {
    let dir = tempdir().unwrap();
    copy_fixture("batch_example.txt", dir.path()).unwrap();
    copy_fixture("single_detail.txt", dir.path()).unwrap();

    edi_split()
        .current_dir(dir.path())
        .write_stdin("two\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Please enter a number."));

    assert!(!dir.path().join("batch_example_p1.txt").exists());
}

#[test]
fn test_menu_closed_stdin_is_cancellation() {
    let dir = tempdir().unwrap();
    copy_fixture("batch_example.txt", dir.path()).unwrap();
    copy_fixture("single_detail.txt", dir.path()).unwrap();

    // stdin закрыт сразу — эквивалент прерывания на приглашении
    edi_split()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    assert!(!dir.path().join("batch_example_p1.txt").exists());
}

// ============================================================================
// Ошибки валидации: отчёт на stdout, выходные файлы не создаются
// ============================================================================

#[test]
fn test_missing_header_writes_nothing() {
    let dir = tempdir().unwrap();
    copy_fixture("missing_header.txt", dir.path()).unwrap();

    edi_split()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("$$HDR line not found"));

    assert!(!dir.path().join("missing_header_p1.txt").exists());
    assert!(!dir.path().join("missing_header_p2.txt").exists());
}

#[test]
fn test_no_detail_records_writes_nothing() {
    let dir = tempdir().unwrap();
    copy_fixture("no_details.txt", dir.path()).unwrap();

    edi_split()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no D1 detail lines found"));

    assert!(!dir.path().join("no_details_p1.txt").exists());
}

#[test]
fn test_short_footer_writes_nothing() {
    let dir = tempdir().unwrap();
    copy_fixture("short_footer.txt", dir.path()).unwrap();

    edi_split()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("too short for the record count field"));

    assert!(!dir.path().join("short_footer_p1.txt").exists());
}

#[test]
fn test_missing_input_file_is_reported() {
    edi_split()
        .args(["--input", "/nonexistent/path/to/batch.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error processing file"));
}
