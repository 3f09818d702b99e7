//! Error types and result handling for Shiori operations.
//!
//! Chapter navigation itself never fails: a missing current chapter or an
//! exhausted walk is reported as `None`. The error type here covers the
//! surfaces around it that can go wrong:
//!
//! - **Invalid chapter lists**: lists that break the descending source order
//! - **Hotkey edits**: empty keys or keys already bound to another action
//! - **Not Found**: lookups the caller asked to be strict about
//! - **IO Errors**: reading or writing the settings file
//! - **JSON Errors**: malformed settings or chapter list files
//!
//! # Examples
//!
//! ```rust
//! use shiori::settings::{ReaderHotkey, ReaderSettings};
//! use shiori::Error;
//!
//! let mut settings = ReaderSettings::default();
//!
//! match settings.add_keys(ReaderHotkey::ExitReader, ["ArrowRight"]) {
//!     Ok(()) => println!("bound"),
//!     Err(Error::HotkeyConflict { key, hotkey }) => {
//!         println!("{key} is already used by {hotkey:?}")
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::settings::ReaderHotkey;

/// Type alias for Results with Shiori errors.
///
/// ```rust
/// use shiori::{Result, Error};
///
/// fn example_with_error() -> Result<()> {
///     Err(Error::invalid_chapter_list("source order 3 follows 2"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all fallible Shiori operations.
///
/// # Variants
///
/// * [`NotFound`](Error::NotFound) - Missing chapters or settings entries
/// * [`InvalidChapterList`](Error::InvalidChapterList) - Broken ordering invariant
/// * [`InvalidHotkey`](Error::InvalidHotkey) - Unusable key binding
/// * [`HotkeyConflict`](Error::HotkeyConflict) - Key already bound
/// * [`Io`](Error::Io) - File system errors
/// * [`Json`](Error::Json) - JSON serialization errors
/// * [`Other`](Error::Other) - Generic error messages
#[derive(Error, Debug)]
pub enum Error {
    /// A requested chapter or entry does not exist.
    ///
    /// ```rust
    /// use shiori::Error;
    ///
    /// let error = Error::not_found("Chapter with source order 12");
    /// ```
    #[error("Not found: {0}")]
    NotFound(String),

    /// The chapter list does not follow the delivery order.
    ///
    /// Chapter lists must be sorted by strictly decreasing source order,
    /// which also makes every source order unique.
    #[error("Invalid chapter list: {0}")]
    InvalidChapterList(String),

    /// A key binding that can never match a key press, such as an empty string.
    #[error("Invalid hotkey: {0}")]
    InvalidHotkey(String),

    /// A key is already bound to a reader action.
    ///
    /// # Fields
    ///
    /// * `key` - The key that was being bound
    /// * `hotkey` - The action that already owns it
    #[error("Key '{key}' is already bound to {hotkey:?}")]
    HotkeyConflict { key: String, hotkey: ReaderHotkey },

    /// File system and IO operation errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization and deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error messages.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates a not found error with the given message.
    ///
    /// ```rust
    /// use shiori::Error;
    ///
    /// let error = Error::not_found("Chapter 'abc123'");
    /// assert!(error.to_string().contains("abc123"));
    /// ```
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    /// Creates an invalid chapter list error with the given message.
    pub fn invalid_chapter_list(msg: impl Into<String>) -> Self {
        Error::InvalidChapterList(msg.into())
    }

    /// Creates an invalid hotkey error with the given message.
    pub fn invalid_hotkey(msg: impl Into<String>) -> Self {
        Error::InvalidHotkey(msg.into())
    }

    /// Creates a conflict error for `key`, which is already bound to `hotkey`.
    pub fn hotkey_conflict(key: impl Into<String>, hotkey: ReaderHotkey) -> Self {
        Error::HotkeyConflict {
            key: key.into(),
            hotkey,
        }
    }
}
