/*!
 * Tests for file system utilities
 */

use cineplan::errors::SourceError;
use cineplan::file_utils::FileManager;

use crate::common;

/// Test directory creation and file existence checks
#[test]
fn test_fileManager_ensureDir_withNestedPath_shouldCreateAllParents() {
    let temp_dir = common::create_temp_dir().unwrap();
    let nested = temp_dir.path().join("a/b/c");

    FileManager::ensure_dir(&nested).unwrap();

    assert!(nested.is_dir());
    assert!(!FileManager::file_exists(&nested));
}

/// Test writing creates parents and reading round-trips content
#[test]
fn test_fileManager_writeToFile_withMissingParent_shouldCreateAndRoundTrip() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("out/story.txt");

    FileManager::write_to_file(&path, "Scene text here.").unwrap();

    assert_eq!(
        FileManager::read_to_string(&path).unwrap(),
        "Scene text here."
    );
}

/// Test novel loading accepts every supported text extension
#[test]
fn test_fileManager_loadNovelText_withSupportedExtensions_shouldLoad() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();

    for name in ["a.txt", "b.md", "c.text", "d.markdown", "e.TXT"] {
        let path = common::create_test_file(&dir, name, "content").unwrap();
        assert!(FileManager::load_novel_text(&path).is_ok(), "{name}");
    }
}

/// Test novel loading rejects binary-looking extensions
#[test]
fn test_fileManager_loadNovelText_withUnsupportedExtension_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let path = common::create_test_file(&dir, "novel.epub", "content").unwrap();

    assert!(matches!(
        FileManager::load_novel_text(&path),
        Err(SourceError::UnsupportedFormat(ext)) if ext == "epub"
    ));
}
