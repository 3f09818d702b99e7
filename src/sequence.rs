//! Chapter sequence resolution with duplicate handling.
//!
//! Everything in this module is a pure function over an already delivered
//! chapter list. Nothing is cached between calls; callers re-run the
//! functions whenever the list, the current chapter or the skip setting
//! changes.
//!
//! # Duplicates
//!
//! A chapter is a duplicate of a reference chapter when it carries the same
//! chapter number under a different identifier, typically an alternate
//! scanlation or a re-upload. Duplicates are always judged relative to a
//! single reference chapter, never across the whole list.
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
//! let chapters = vec![
//!     chapter("5", 10.0, 50),
//!     chapter("4", 9.0, 40),
//!     chapter("3", 9.0, 39),
//!     chapter("2", 8.0, 20),
//! ];
//! let current = &chapters[1];
//!
//! let options = NavigateOptions::new(Direction::Previous).skip_duplicates(Some(current));
//! let previous = next_chapter(current, &chapters, &options);
//! assert_eq!(previous.map(|c| c.id.as_str()), Some("2"));
//!
//! let listed = chapters.without_duplicates_of(current);
//! assert_eq!(listed.len(), 3);
//! ```

use std::collections::HashSet;

use log::{debug, trace};

use crate::{
    error::{Error, Result},
    types::{Chapter, Direction, NavigateOptions},
};

/// Returns `true` if `candidate` is a duplicate of `reference`.
///
/// Same chapter number, different record. A chapter is never a duplicate of
/// itself.
pub fn is_duplicate(candidate: &Chapter, reference: &Chapter) -> bool {
    candidate.number == reference.number && !candidate.same_record(reference)
}

/// Resolves the chapter adjacent to `current` in `options.direction`.
///
/// `Direction::Next` walks toward index 0 and `Direction::Previous` toward
/// the end of the list. With duplicate skipping enabled every duplicate of
/// the reference chapter (`options.duplicate_reference`, falling back to
/// `current`) is stepped over.
///
/// Returns `None` when `current` is not part of `chapters`, when it already
/// sits at the boundary, or when only duplicates remain in that direction.
/// Callers that must tell these cases apart check membership with
/// [`ChapterListExt::position_of`] first.
pub fn next_chapter<'a>(
    current: &Chapter,
    chapters: &'a [Chapter],
    options: &NavigateOptions,
) -> Option<&'a Chapter> {
    let Some(index) = chapters.position_of(current) else {
        debug!(
            "chapter {} is not part of the chapter list ({} chapters)",
            current.id,
            chapters.len()
        );
        return None;
    };

    let reference = options.duplicate_reference.as_ref().unwrap_or(current);
    let accept = |candidate: &&Chapter| {
        let skip = options.skip_duplicates && is_duplicate(candidate, reference);
        if skip {
            trace!(
                "skipping chapter {} (duplicate of {} at number {})",
                candidate.id, reference.id, reference.number
            );
        }
        !skip
    };

    let resolved = match options.direction {
        Direction::Next => chapters[..index].iter().rev().find(accept),
        Direction::Previous => chapters[index + 1..].iter().find(accept),
    };

    match resolved {
        Some(chapter) => debug!(
            "{:?} chapter of {} is {}",
            options.direction, current.id, chapter.id
        ),
        None => debug!(
            "no {:?} chapter for {} (index {index} of {})",
            options.direction,
            current.id,
            chapters.len()
        ),
    }

    resolved
}

/// Drops every duplicate of `reference` from `chapters`.
///
/// The relative order of the remaining chapters is kept and `reference`
/// itself stays in the list. Chapters sharing some other number are left
/// alone. Without a reference the list is returned as is.
pub fn remove_duplicates(reference: Option<&Chapter>, chapters: &[Chapter]) -> Vec<Chapter> {
    let Some(reference) = reference else {
        return chapters.to_vec();
    };

    let retained: Vec<Chapter> = chapters
        .iter()
        .filter(|chapter| !is_duplicate(chapter, reference))
        .cloned()
        .collect();

    trace!(
        "removed {} duplicates of chapter {}",
        chapters.len() - retained.len(),
        reference.id
    );

    retained
}

/// Extension trait with lookup and navigation helpers for chapter lists.
///
/// Implemented for `[Chapter]`, so it is available on slices and vectors
/// alike.
///
/// # Examples
///
/// ```rust
/// use shiori::prelude::*;
///
/// # fn example(chapters: Vec<Chapter>) -> shiori::Result<()> {
/// chapters.ensure_descending()?;
///
/// if let Some(current) = chapters.find_by_source_order(12) {
///     let next = chapters.next_of(current, None);
///     let previous = chapters.previous_of(current, None);
///     println!("{:?} / {:?}", next.map(|c| &c.id), previous.map(|c| &c.id));
/// }
/// # Ok(())
/// # }
/// ```
pub trait ChapterListExt {
    /// Index of the chapter with the same identifier as `chapter`.
    fn position_of(&self, chapter: &Chapter) -> Option<usize>;

    /// Chapter carrying exactly `source_order`.
    fn find_by_source_order(&self, source_order: i64) -> Option<&Chapter>;

    /// Checks the delivery invariant: strictly decreasing source order and
    /// unique identifiers.
    fn ensure_descending(&self) -> Result<()>;

    /// Next chapter of `current`. `skip_duplicates_of` enables duplicate
    /// skipping relative to the given chapter.
    fn next_of(&self, current: &Chapter, skip_duplicates_of: Option<&Chapter>) -> Option<&Chapter>;

    /// Previous chapter of `current`, see [`next_of`](ChapterListExt::next_of).
    fn previous_of(
        &self,
        current: &Chapter,
        skip_duplicates_of: Option<&Chapter>,
    ) -> Option<&Chapter>;

    /// The list without duplicates of `reference`.
    fn without_duplicates_of(&self, reference: &Chapter) -> Vec<Chapter>;
}

impl ChapterListExt for [Chapter] {
    fn position_of(&self, chapter: &Chapter) -> Option<usize> {
        self.iter().position(|candidate| candidate.same_record(chapter))
    }

    fn find_by_source_order(&self, source_order: i64) -> Option<&Chapter> {
        self.iter()
            .find(|chapter| chapter.source_order == source_order)
    }

    fn ensure_descending(&self) -> Result<()> {
        for (index, pair) in self.windows(2).enumerate() {
            if pair[0].source_order <= pair[1].source_order {
                return Err(Error::invalid_chapter_list(format!(
                    "source order {} at index {} does not decrease from {} at index {}",
                    pair[1].source_order,
                    index + 1,
                    pair[0].source_order,
                    index
                )));
            }
        }

        let mut seen = HashSet::with_capacity(self.len());
        for (index, chapter) in self.iter().enumerate() {
            if !seen.insert(chapter.id.as_str()) {
                return Err(Error::invalid_chapter_list(format!(
                    "chapter id '{}' repeats at index {}",
                    chapter.id, index
                )));
            }
        }

        Ok(())
    }

    fn next_of(&self, current: &Chapter, skip_duplicates_of: Option<&Chapter>) -> Option<&Chapter> {
        next_chapter(current, self, &options_for(Direction::Next, skip_duplicates_of))
    }

    fn previous_of(
        &self,
        current: &Chapter,
        skip_duplicates_of: Option<&Chapter>,
    ) -> Option<&Chapter> {
        next_chapter(
            current,
            self,
            &options_for(Direction::Previous, skip_duplicates_of),
        )
    }

    fn without_duplicates_of(&self, reference: &Chapter) -> Vec<Chapter> {
        remove_duplicates(Some(reference), self)
    }
}

fn options_for(direction: Direction, skip_duplicates_of: Option<&Chapter>) -> NavigateOptions {
    match skip_duplicates_of {
        Some(reference) => NavigateOptions::new(direction).skip_duplicates(Some(reference)),
        None => NavigateOptions::new(direction),
    }
}
