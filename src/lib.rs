//! # Shiori - Chapter navigation for manga readers
//!
//! Shiori resolves where a reader goes from the chapter it is showing. Given
//! a chapter list as delivered by a library service, newest chapter first,
//! it finds the next and previous chapter and builds the chapter listing,
//! optionally treating alternate uploads of the current chapter as a single
//! chapter.
//!
//! ## Features
//!
//! - **Pure Navigation**: Next and previous chapter lookups with no hidden state
//! - **Duplicate Handling**: Skip alternate scanlations and re-uploads of a chapter
//! - **Reader State Derivation**: Current, initial, next and previous chapter in one pass
//! - **Hotkey Settings**: Conflict checked key bindings for every reader action
//! - **Persistent Settings**: JSON settings file with sensible defaults
//!
//! ## Quick Start
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
//! let chapters = vec![
//!     chapter("5", 10.0, 50),
//!     chapter("4", 9.0, 40),
//!     chapter("3", 9.0, 39),
//!     chapter("2", 8.0, 20),
//!     chapter("1", 7.0, 10),
//! ];
//! let current = &chapters[1];
//!
//! let next = next_chapter(
//!     current,
//!     &chapters,
//!     &NavigateOptions::new(Direction::Next).skip_duplicates(Some(current)),
//! );
//! let previous = next_chapter(
//!     current,
//!     &chapters,
//!     &NavigateOptions::new(Direction::Previous).skip_duplicates(Some(current)),
//! );
//!
//! assert_eq!(next.map(|c| c.id.as_str()), Some("5"));
//! assert_eq!(previous.map(|c| c.id.as_str()), Some("2"));
//!
//! let listed = remove_duplicates(Some(current), &chapters);
//! let ids: Vec<&str> = listed.iter().map(|c| c.id.as_str()).collect();
//! assert_eq!(ids, ["5", "4", "2", "1"]);
//! ```
//!
//! ## Architecture
//!
//! - [`sequence`]: Next/previous resolution and duplicate removal
//! - [`reader`]: Reader chapter state derived from a list and settings
//! - [`types`]: Chapters and navigation options
//! - [`settings`]: Reader settings and hotkeys
//! - [`config`]: Settings file location and persistence
//! - [`error`]: Error handling

pub mod config;
pub mod error;
pub mod reader;
pub mod sequence;
pub mod settings;
pub mod types;

/// Prelude module for convenient imports.
///
/// ```rust
/// use shiori::prelude::*;
///
/// // Now you have access to:
/// // - next_chapter, remove_duplicates, is_duplicate, ChapterListExt
/// // - ReaderChapters, ReaderInput
/// // - Chapter, Direction, NavigateOptions
/// // - ReaderSettings, ReaderHotkey
/// ```
pub mod prelude {
    pub use crate::{
        reader::{ReaderChapters, ReaderInput},
        sequence::{ChapterListExt, is_duplicate, next_chapter, remove_duplicates},
        settings::{ReaderHotkey, ReaderSettings},
        types::{Chapter, Direction, NavigateOptions},
    };
}

// Re-export main types at crate root for direct access
pub use error::{Error, Result};
pub use reader::{ReaderChapters, ReaderInput};
pub use sequence::{ChapterListExt, is_duplicate, next_chapter, remove_duplicates};
pub use settings::{ReaderHotkey, ReaderSettings};
pub use types::{Chapter, Direction, NavigateOptions};
