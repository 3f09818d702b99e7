use std::path::PathBuf;

use shiori::config::{self, SETTINGS_FILE};
use shiori::prelude::*;
use shiori::types::NavigateOptionsBuilder;
use shiori::Error;

mod common;
use common::{chapter, sample_chapters, scanlated};

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("shiori-tests")
            .join(format!("{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_chapter_struct() {
        let chapter = scanlated("chapter-1", 1.5, 15, "Group A");

        assert_eq!(chapter.id, "chapter-1");
        assert_eq!(chapter.number, 1.5);
        assert_eq!(chapter.source_order, 15);
        assert_eq!(chapter.scanlator.as_deref(), Some("Group A"));
        assert_eq!(chapter.manga_id, "test-manga");
        assert!(chapter.same_record(&chapter.clone()));
    }

    #[test]
    fn test_chapter_json() {
        let json = r#"{
            "id": "42",
            "sourceOrder": 7,
            "chapterNumber": 5.5,
            "scanlator": "Group B",
            "uploadDate": "2024-03-01T10:00:00Z"
        }"#;

        let chapter: Chapter = serde_json::from_str(json).unwrap();
        assert_eq!(chapter.id, "42");
        assert_eq!(chapter.source_order, 7);
        assert_eq!(chapter.number, 5.5);
        assert!(chapter.name.is_empty());
        assert_eq!(chapter.upload_date.to_rfc3339(), "2024-03-01T10:00:00+00:00");

        let value = serde_json::to_value(&chapter).unwrap();
        assert_eq!(value["sourceOrder"].as_i64(), Some(7));
        assert_eq!(value["number"].as_f64(), Some(5.5));
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::Next.offset(), -1);
        assert_eq!(Direction::Previous.offset(), 1);
        assert_eq!(Direction::Next.reverse(), Direction::Previous);
        assert_eq!(Direction::Previous.reverse().reverse(), Direction::Previous);
    }

    #[test]
    fn test_navigate_options_builder() {
        let options = NavigateOptionsBuilder::default()
            .direction(Direction::Next)
            .build()
            .unwrap();

        assert_eq!(options, NavigateOptions::new(Direction::Next));
        assert!(!options.skip_duplicates);

        let missing_direction = NavigateOptionsBuilder::default().build();
        assert!(missing_direction.is_err());
    }

    #[test]
    fn test_navigate_options_skip() {
        let reference = chapter("1", 1.0, 1);
        let options = NavigateOptions::new(Direction::Previous).skip_duplicates(Some(&reference));

        assert!(options.skip_duplicates);
        assert_eq!(options.duplicate_reference, Some(reference));
    }

    #[test]
    fn test_error_handling() {
        let error = Error::not_found("Test not found error");
        assert!(format!("{}", error).contains("Test not found error"));

        let error = Error::invalid_chapter_list("unordered");
        assert!(error.to_string().contains("Invalid chapter list"));

        let error = Error::hotkey_conflict("m", ReaderHotkey::ToggleMenu);
        assert!(error.to_string().contains("ToggleMenu"));
    }

    #[test]
    fn test_invalid_list_detected() {
        let mut chapters = sample_chapters();
        chapters.swap(0, 4);

        match chapters.ensure_descending() {
            Err(Error::InvalidChapterList(msg)) => assert!(msg.contains("index 1")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_hotkey_tables() {
        assert_eq!(ReaderHotkey::ALL.len(), 16);
        assert_eq!(ReaderHotkey::ExitReader.title_key(), "reader.button.exit");
        assert_eq!(
            ReaderHotkey::NextChapter.title_key(),
            "reader.settings.hotkey.next_chapter"
        );
        assert!(ReaderHotkey::ALL.iter().all(|h| !h.default_keys().is_empty()));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = ReaderSettings::default();

        assert!(settings.skip_dup_chapters);
        assert_eq!(settings.keys(ReaderHotkey::PreviousPage), ["ArrowLeft", "a"]);
        assert_eq!(settings.hotkey_for("."), Some(ReaderHotkey::NextChapter));
        assert_eq!(settings.hotkey_for("x"), None);
    }

    #[test]
    fn test_add_keys() {
        let mut settings = ReaderSettings::default();

        settings.add_keys(ReaderHotkey::NextChapter, ["n", " ctrl+n "]).unwrap();
        assert_eq!(settings.keys(ReaderHotkey::NextChapter), [".", "n", "ctrl+n"]);
        assert!(settings.existing_keys().contains(&"ctrl+n"));
    }

    #[test]
    fn test_add_keys_rejects_conflicts() {
        let mut settings = ReaderSettings::default();
        let before = settings.clone();

        let result = settings.add_keys(ReaderHotkey::ExitReader, ["q", "m"]);
        assert!(matches!(
            result,
            Err(Error::HotkeyConflict { hotkey: ReaderHotkey::ToggleMenu, .. })
        ));

        let result = settings.add_keys(ReaderHotkey::ExitReader, ["q", "q"]);
        assert!(matches!(result, Err(Error::HotkeyConflict { .. })));

        let result = settings.add_keys(ReaderHotkey::ExitReader, ["   "]);
        assert!(matches!(result, Err(Error::InvalidHotkey(_))));

        assert_eq!(settings, before);
    }

    #[test]
    fn test_remove_and_reset() {
        let mut settings = ReaderSettings::default();

        assert!(settings.remove_key(ReaderHotkey::PreviousPage, "a"));
        assert!(!settings.remove_key(ReaderHotkey::PreviousPage, "a"));
        assert_eq!(settings.keys(ReaderHotkey::PreviousPage), ["ArrowLeft"]);

        settings.reset_hotkey(ReaderHotkey::PreviousPage);
        assert_eq!(settings, ReaderSettings::default());
    }

    #[test]
    fn test_settings_navigate_options() {
        let mut settings = ReaderSettings::default();
        let reference = chapter("1", 1.0, 1);

        let options = settings.navigate_options(Direction::Next, Some(&reference));
        assert!(options.skip_duplicates);
        assert_eq!(options.duplicate_reference.as_ref(), Some(&reference));

        settings.set_skip_dup_chapters(false);
        assert!(!settings.navigate_options(Direction::Next, None).skip_duplicates);
    }

    #[test]
    fn test_settings_partial_json() {
        let settings: ReaderSettings =
            serde_json::from_str(r#"{ "skip_dup_chapters": false }"#).unwrap();

        assert!(!settings.skip_dup_chapters);
        assert_eq!(settings.hotkeys, ReaderSettings::default().hotkeys);
    }

    #[test]
    fn test_settings_file_roundtrip() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("nested").join(SETTINGS_FILE);

        let mut settings = ReaderSettings::default();
        settings.set_skip_dup_chapters(false);
        settings.add_keys(ReaderHotkey::ToggleAutoScroll, ["p"]).unwrap();

        config::save_settings(&path, &settings).unwrap();
        let loaded = config::load_settings(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_settings_file() {
        let dir = scratch_dir("missing");
        let loaded = config::load_settings(&dir.join(SETTINGS_FILE)).unwrap();
        assert_eq!(loaded, ReaderSettings::default());
    }

    #[test]
    fn test_malformed_settings_file() {
        let dir = scratch_dir("malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(SETTINGS_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(config::load_settings(&path), Err(Error::Json(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
