//! Chapter state of an open reader.
//!
//! The reader opens a chapter by its source order and needs to know which
//! chapter is current, which chapters the next and previous controls lead
//! to, and which chapters to list. [`ReaderChapters::resolve`] derives all
//! of that from the chapter list and the reader settings in one pass, so a
//! state container can recompute it whenever one of its inputs changes.
//!
//! Tracking visible chapters, preloading and scrolling is left to the
//! caller.
//!
//! # Examples
//!
//! ```rust
//! use shiori::prelude::*;
//! # use chrono::Utc;
//! # fn chapter(id: &str, number: f64, source_order: i64) -> Chapter {
//! #     Chapter {
//! #         id: id.to_string(),
//! #         source_order,
//! #         number,
//! #         name: String::new(),
//! #         scanlator: None,
//! #         upload_date: Utc::now(),
//! #         manga_id: String::new(),
//! #     }
//! # }
//!
//! let chapters = vec![chapter("3", 2.0, 3), chapter("2", 1.0, 2), chapter("1", 1.0, 1)];
//! let settings = ReaderSettings::default();
//!
//! let state = ReaderChapters::resolve(&ReaderInput::loaded(&chapters, 2).settings(&settings));
//!
//! assert_eq!(state.current_chapter.as_ref().map(|c| c.id.as_str()), Some("2"));
//! assert_eq!(state.next_chapter.as_ref().map(|c| c.id.as_str()), Some("3"));
//! assert!(state.previous_chapter.is_none());
//! assert_eq!(state.chapters.len(), 2);
//! ```

use log::debug;

use crate::{
    sequence::{ChapterListExt, next_chapter, remove_duplicates},
    settings::ReaderSettings,
    types::{Chapter, Direction, NavigateOptions},
};

/// Inputs of a reader state derivation.
///
/// Built fluently from the chapter list and the source order of the
/// chapter being opened.
#[derive(Debug, Clone, Copy)]
pub struct ReaderInput<'a> {
    /// Chapter list of the manga, `None` while it is still loading
    pub chapters: Option<&'a [Chapter]>,
    /// Source order of the chapter to open
    pub source_order: i64,
    /// Chapter the reader was opened with, from an earlier derivation
    pub initial_chapter: Option<&'a Chapter>,
    /// Navigation asked for the initial chapter to be derived again
    pub update_initial_chapter: bool,
    /// Chapter whose duplicates are skipped, from an earlier derivation
    pub chapter_for_duplicates_handling: Option<&'a Chapter>,
    pub skip_dup_chapters: bool,
}

impl<'a> ReaderInput<'a> {
    pub fn new(chapters: Option<&'a [Chapter]>, source_order: i64) -> Self {
        Self {
            chapters,
            source_order,
            initial_chapter: None,
            update_initial_chapter: false,
            chapter_for_duplicates_handling: None,
            skip_dup_chapters: false,
        }
    }

    /// Input for an already delivered chapter list.
    pub fn loaded(chapters: &'a [Chapter], source_order: i64) -> Self {
        Self::new(Some(chapters), source_order)
    }

    pub fn initial_chapter(mut self, chapter: Option<&'a Chapter>) -> Self {
        self.initial_chapter = chapter;
        self
    }

    pub fn update_initial_chapter(mut self, update: bool) -> Self {
        self.update_initial_chapter = update;
        self
    }

    pub fn chapter_for_duplicates_handling(mut self, chapter: Option<&'a Chapter>) -> Self {
        self.chapter_for_duplicates_handling = chapter;
        self
    }

    pub fn skip_dup_chapters(mut self, skip: bool) -> Self {
        self.skip_dup_chapters = skip;
        self
    }

    /// Takes the duplicate setting from `settings`.
    pub fn settings(self, settings: &ReaderSettings) -> Self {
        self.skip_dup_chapters(settings.skip_dup_chapters)
    }
}

/// Chapter related state of the reader.
///
/// # Fields
///
/// * `manga_chapters` - The full chapter list, empty while loading
/// * `chapters` - The list shown to the user, without duplicates of the
///   reference chapter when skipping is enabled
/// * `initial_chapter` - Chapter the reader was opened with
/// * `chapter_for_duplicates_handling` - Reference chapter for duplicate skipping
/// * `current_chapter` - Chapter matching the requested source order
/// * `next_chapter` / `previous_chapter` - Targets of the navigation controls
/// * `initial_chapter_changed` - The initial chapter was (re)derived in this pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReaderChapters {
    pub manga_chapters: Vec<Chapter>,
    pub chapters: Vec<Chapter>,
    pub initial_chapter: Option<Chapter>,
    pub chapter_for_duplicates_handling: Option<Chapter>,
    pub current_chapter: Option<Chapter>,
    pub next_chapter: Option<Chapter>,
    pub previous_chapter: Option<Chapter>,
    pub initial_chapter_changed: bool,
}

impl ReaderChapters {
    /// Derives the reader's chapter state from `input`.
    pub fn resolve(input: &ReaderInput<'_>) -> Self {
        let kept_initial = if input.update_initial_chapter {
            None
        } else {
            input.initial_chapter
        };

        let Some(manga_chapters) = input.chapters else {
            debug!("chapter list not loaded yet");
            return Self {
                initial_chapter: kept_initial.cloned(),
                chapter_for_duplicates_handling: input.chapter_for_duplicates_handling.cloned(),
                ..Self::default()
            };
        };

        let current = manga_chapters.find_by_source_order(input.source_order);
        if current.is_none() {
            debug!(
                "no chapter with source order {} among {} chapters",
                input.source_order,
                manga_chapters.len()
            );
        }

        let initial = kept_initial.or(current);
        let reference = input.chapter_for_duplicates_handling.or(current);

        let neighbour = |direction: Direction| {
            let current = current?;
            let options = NavigateOptions {
                direction,
                skip_duplicates: input.skip_dup_chapters,
                duplicate_reference: reference.cloned(),
            };
            next_chapter(current, manga_chapters, &options).cloned()
        };

        let chapters = match reference {
            None => Vec::new(),
            Some(reference) if input.skip_dup_chapters => {
                remove_duplicates(Some(reference), manga_chapters)
            }
            Some(_) => manga_chapters.to_vec(),
        };

        let initial_chapter_changed = match (initial, kept_initial) {
            (Some(new), Some(old)) => !new.same_record(old),
            (Some(_), None) => true,
            (None, _) => false,
        };

        Self {
            manga_chapters: manga_chapters.to_vec(),
            chapters,
            initial_chapter: initial.cloned(),
            chapter_for_duplicates_handling: reference.cloned(),
            current_chapter: current.cloned(),
            next_chapter: neighbour(Direction::Next),
            previous_chapter: neighbour(Direction::Previous),
            initial_chapter_changed,
        }
    }

    /// Whether the current chapter differs from the one in `previous`.
    ///
    /// A changed chapter has to be loaded before the reader can show it.
    pub fn current_changed(&self, previous: &ReaderChapters) -> bool {
        match (&self.current_chapter, &previous.current_chapter) {
            (Some(current), Some(before)) => !current.same_record(before),
            (None, None) => false,
            _ => true,
        }
    }
}
