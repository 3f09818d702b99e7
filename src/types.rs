//! Core data types for chapters and navigation requests.
//!
//! - [`Chapter`] - A single chapter as delivered by the library service
//! - [`Direction`] - Which way to move through a chapter list
//! - [`NavigateOptions`] - Parameters for resolving the next or previous chapter
//!
//! Chapter lists are plain slices ordered by descending
//! [`source_order`](Chapter::source_order): index 0 holds the latest chapter.
//!
//! # Examples
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use shiori::types::*;
//!
//! let chapter = Chapter {
//!     id: "4".to_string(),
//!     source_order: 40,
//!     number: 9.0,
//!     name: "Chapter 9".to_string(),
//!     scanlator: Some("Group A".to_string()),
//!     upload_date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
//!     manga_id: "one-piece".to_string(),
//! };
//!
//! let options = NavigateOptions::new(Direction::Next).skip_duplicates(Some(&chapter));
//! assert!(options.skip_duplicates);
//! ```

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Represents a single chapter of a manga.
///
/// The chapter number can be decimal to support special chapters like
/// "Chapter 5.5", and it is not unique: re-uploads and alternate
/// scanlations of the same story chapter share a number. Such chapters are
/// duplicates of one another, see [`is_duplicate`](crate::sequence::is_duplicate).
///
/// # Fields
///
/// * `id` - Unique identifier of this record
/// * `source_order` - Position assigned by the origin source, higher is newer
/// * `number` - Chapter number (supports decimals for special chapters)
/// * `name` - Chapter title
/// * `scanlator` - Uploader or scanlation group, if the source reports one
/// * `upload_date` - When the chapter was published by the source
/// * `manga_id` - ID of the manga this chapter belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Unique identifier
    pub id: String,

    /// Position assigned by the origin source
    pub source_order: i64,

    /// Chapter number (can be decimal for .5 chapters)
    #[serde(alias = "chapterNumber")]
    pub number: f64,

    /// Chapter title
    #[serde(default)]
    pub name: String,

    /// Scanlation group or uploader
    #[serde(default)]
    pub scanlator: Option<String>,

    /// Publication timestamp
    pub upload_date: DateTime<Utc>,

    /// Associated manga ID
    #[serde(default)]
    pub manga_id: String,
}

impl Chapter {
    /// Returns `true` if both values describe the same chapter record.
    ///
    /// Only the identifier is compared; two snapshots of one chapter taken
    /// from different query results are the same chapter.
    pub fn same_record(&self, other: &Chapter) -> bool {
        self.id == other.id
    }
}

/// Direction of travel through a chapter list.
///
/// Lists are delivered newest first, so [`Next`](Direction::Next) walks
/// toward index 0 and [`Previous`](Direction::Previous) toward the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Index step taken by one move in this direction.
    pub fn offset(self) -> isize {
        match self {
            Direction::Next => -1,
            Direction::Previous => 1,
        }
    }

    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Next => Direction::Previous,
            Direction::Previous => Direction::Next,
        }
    }
}

/// Parameters for resolving an adjacent chapter.
///
/// The `derive_builder` crate generates a `NavigateOptionsBuilder`:
///
/// ```rust
/// use shiori::types::{Direction, NavigateOptionsBuilder};
///
/// let options = NavigateOptionsBuilder::default()
///     .direction(Direction::Previous)
///     .skip_duplicates(true)
///     .build()
///     .unwrap();
///
/// assert!(options.duplicate_reference.is_none());
/// ```
///
/// # Fields
///
/// * `direction` - Which neighbour to resolve
/// * `skip_duplicates` - Whether duplicates of the reference chapter are stepped over
/// * `duplicate_reference` - Chapter whose duplicates are skipped; the current
///   chapter is used when unset
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(setter(into))]
pub struct NavigateOptions {
    pub direction: Direction,
    #[builder(default)]
    pub skip_duplicates: bool,
    #[builder(default)]
    pub duplicate_reference: Option<Chapter>,
}

impl NavigateOptions {
    /// Plain navigation in `direction` without duplicate handling.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            skip_duplicates: false,
            duplicate_reference: None,
        }
    }

    /// Enables duplicate skipping relative to `reference`.
    ///
    /// Passing `None` skips duplicates of whichever chapter is current.
    pub fn skip_duplicates(mut self, reference: Option<&Chapter>) -> Self {
        self.skip_duplicates = true;
        self.duplicate_reference = reference.cloned();
        self
    }
}

impl From<Direction> for NavigateOptions {
    fn from(direction: Direction) -> Self {
        NavigateOptions::new(direction)
    }
}
