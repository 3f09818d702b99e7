//! Common test utilities and fixtures
//!
//! Shared chapter lists used across all test modules.

use chrono::{Duration, TimeZone, Utc};
use shiori::Chapter;

/// Builds a chapter with the fields navigation cares about.
#[allow(dead_code)]
pub fn chapter(id: &str, number: f64, source_order: i64) -> Chapter {
    Chapter {
        id: id.to_string(),
        source_order,
        number,
        name: format!("Chapter {number}"),
        scanlator: None,
        upload_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + Duration::days(source_order),
        manga_id: "test-manga".to_string(),
    }
}

/// Builds a chapter uploaded by `scanlator`.
#[allow(dead_code)]
pub fn scanlated(id: &str, number: f64, source_order: i64, scanlator: &str) -> Chapter {
    Chapter {
        scanlator: Some(scanlator.to_string()),
        ..chapter(id, number, source_order)
    }
}

/// Five chapters where ids 4 and 3 are two uploads of chapter 9.
#[allow(dead_code)]
pub fn sample_chapters() -> Vec<Chapter> {
    vec![
        chapter("5", 10.0, 50),
        scanlated("4", 9.0, 40, "Group A"),
        scanlated("3", 9.0, 39, "Group B"),
        chapter("2", 8.0, 20),
        chapter("1", 7.0, 10),
    ]
}

/// Chapters 1 to `count` with contiguous source orders, newest first, where
/// every third chapter number is uploaded twice.
#[allow(dead_code)]
pub fn generated_chapters(count: i64) -> Vec<Chapter> {
    let mut chapters = Vec::new();
    let mut source_order = 0;
    for number in 1..=count {
        source_order += 1;
        chapters.push(chapter(&format!("c{source_order}"), number as f64, source_order));
        if number % 3 == 0 {
            source_order += 1;
            chapters.push(chapter(&format!("c{source_order}"), number as f64, source_order));
        }
    }
    chapters.reverse();
    chapters
}

/// Identifiers of `chapters`, in order.
#[allow(dead_code)]
pub fn ids(chapters: &[Chapter]) -> Vec<&str> {
    chapters.iter().map(|chapter| chapter.id.as_str()).collect()
}

/// Identifier of an optional chapter.
#[allow(dead_code)]
pub fn id_of(chapter: Option<&Chapter>) -> Option<&str> {
    chapter.map(|chapter| chapter.id.as_str())
}
