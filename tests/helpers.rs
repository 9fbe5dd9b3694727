//! Flat-API checks for the file, naming and text helpers.

use std::fs;
use tempfile::TempDir;
use universal_utils::number::{max, min, round};
use universal_utils::nullable::{alter, is_same};
use universal_utils::strings::{concat, extract_numbers};
use universal_utils::{
    absolute_url, clear_directory, create_directory, file_exists, find_file, find_files,
    format_number, format_regex, get_extension, get_filename, get_subdirectories, is_directory,
    normalize_path, numbered_file, relative_url, sanitize_common, sanitize_raw, slugify,
};

#[test]
fn directory_lifecycle() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("testdir");

    create_directory(root.join("1/2")).unwrap();
    fs::write(root.join("testfile.txt"), "content").unwrap();

    assert!(is_directory(&root).unwrap());
    assert!(file_exists(root.join("testfile.txt")).unwrap());
    assert_eq!(get_subdirectories(&root).unwrap(), vec!["1"]);

    clear_directory(&root).unwrap();
    clear_directory(&root).unwrap();
    assert!(is_directory(&root).unwrap());
    assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
}

#[test]
fn lookups_and_numbering() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::write(dir.join("testfile.txt"), "TEST").unwrap();

    assert_eq!(
        find_file(dir, "testfile.txt").unwrap(),
        Some(dir.join("testfile.txt"))
    );
    assert_eq!(numbered_file(dir, "testfile.txt").unwrap(), "testfile-1.txt");

    fs::write(dir.join("testfile-1.txt"), "TEST").unwrap();
    assert_eq!(numbered_file(dir, "testfile.txt").unwrap(), "testfile-2.txt");

    let found = find_files(dir, r"^testfile.*\.txt$").unwrap();
    assert_eq!(found.len(), 2);
}

#[test]
fn path_and_name_helpers() {
    assert_eq!(normalize_path(["/a", "b", "c"]), "/a/b/c");
    assert_eq!(get_extension("testfile.txt"), "txt");
    assert_eq!(get_filename("testfile.txt"), "testfile");
    assert_eq!(relative_url("g:/mekramy", ["g:/mekramy/utils"]), "utils");
    assert_eq!(absolute_url("g:/mekramy", ["g:/mekramy"]), "/");
}

#[test]
fn text_helpers() {
    assert_eq!(extract_numbers("abc123def456"), "123456");
    assert_eq!(slugify(["Hello-- ", "  World!"]), "hello-world");
    assert_eq!(slugify([slugify(["Hello-- ", "  World!"])]), "hello-world");
    assert_eq!(concat(" ", ["Hello", "", "      ", "World"]), "Hello World");
    assert_eq!(format_number("%d Dollars", 100000), "100,000 Dollars");
    assert_eq!(
        format_regex("123456", r"(\d{3})(\d{2})(\d{1})", "($1) $2-$3").unwrap(),
        "(123) 45-6"
    );
    assert_eq!(sanitize_common("<b>bold</b>", true), "<b>bold</b>");
    assert_eq!(sanitize_raw("<b>bold</b>", true), "bold");
}

#[test]
fn numeric_and_nullable_helpers() {
    assert_eq!(round::<i64>(-5.5), -6);
    assert_eq!(min(&[5, 3, 9]), 3);
    assert_eq!(max::<u8>(&[]), 0);
    assert_eq!(alter(Some(&0), 42), 42);
    assert!(is_same::<String>(None, None));
}
