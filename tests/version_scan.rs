use hwgrab::error::Error;
use hwgrab::version;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Drop empty files with the given names into a directory, simulating the
/// bench working directory a run scans.
fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), "").unwrap();
    }
}

#[test]
fn test_empty_directory_starts_at_001() {
    let tmp = TempDir::new().unwrap();

    let highest = version::scan_highest(tmp.path(), "t480").unwrap();
    assert_eq!(highest, None);

    let next = version::next_version("t480", highest).unwrap();
    assert_eq!(version::format_filename("t480", next), "T480-001");
}

#[test]
fn test_unrelated_files_do_not_count() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), &["E7470-001", "notes.txt", "x250-003"]);

    assert_eq!(version::scan_highest(tmp.path(), "t480").unwrap(), None);
}

#[test]
fn test_mixed_case_and_nonconforming_names() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), &["X-001", "x-002", "X-BETA-5"]);

    let highest = version::scan_highest(tmp.path(), "x").unwrap();
    assert_eq!(highest, Some(2));

    let next = version::next_version("x", highest).unwrap();
    assert_eq!(version::format_filename("x", next), "X-003");
}

#[test]
fn test_model_substring_without_counter_yields_001() {
    // Seen-but-never-numbered models still start at 001.
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), &["T480-inventory.txt", "old-t480-notes"]);

    let highest = version::scan_highest(tmp.path(), "t480").unwrap();
    assert_eq!(highest, Some(0));
    assert_eq!(version::next_version("t480", highest).unwrap(), 1);
}

#[test]
fn test_highest_counter_wins_with_gaps() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), &["T480-001", "T480-007", "T480-004"]);

    assert_eq!(version::scan_highest(tmp.path(), "t480").unwrap(), Some(7));
}

#[test]
fn test_leading_zeros_parse_numerically() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), &["T480-009"]);

    let highest = version::scan_highest(tmp.path(), "t480").unwrap();
    let next = version::next_version("t480", highest).unwrap();
    assert_eq!(version::format_filename("t480", next), "T480-010");
}

#[test]
fn test_four_digit_run_contributes_first_three() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), &["X-1234"]);

    assert_eq!(version::scan_highest(tmp.path(), "x").unwrap(), Some(123));
}

#[test]
fn test_only_first_counter_per_name_counts() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), &["m-001-m-999"]);

    assert_eq!(version::scan_highest(tmp.path(), "m").unwrap(), Some(1));
}

#[test]
fn test_directories_count_like_files() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("T480-010")).unwrap();

    assert_eq!(version::scan_highest(tmp.path(), "t480").unwrap(), Some(10));
}

#[test]
fn test_model_with_regex_metacharacters() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), &["C++-007"]);

    assert_eq!(version::scan_highest(tmp.path(), "c++").unwrap(), Some(7));
}

#[test]
fn test_counter_exhausted_at_999() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), &["T480-999"]);

    let highest = version::scan_highest(tmp.path(), "t480").unwrap();
    assert_eq!(highest, Some(999));

    let err = version::next_version("t480", highest).unwrap_err();
    assert!(matches!(err, Error::VersionExhausted(ref m) if m == "t480"));
    assert_eq!(
        err.to_string(),
        "maximum report number (999) reached for model 't480'"
    );
}

#[test]
fn test_missing_directory_is_a_scan_error() {
    let tmp = TempDir::new().unwrap();
    let gone = tmp.path().join("gone");

    let err = version::scan_highest(&gone, "t480").unwrap_err();
    assert!(matches!(err, Error::DirScan { ref path, .. } if *path == gone));
}
