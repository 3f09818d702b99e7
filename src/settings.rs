//! Reader settings: duplicate skipping and hotkey bindings.
//!
//! [`ReaderSettings`] is plain data that (de)serializes with serde. Loading
//! and saving it lives in [`config`](crate::config).
//!
//! # Examples
//!
//! ```rust
//! use shiori::settings::{ReaderHotkey, ReaderSettings};
//!
//! let mut settings = ReaderSettings::default();
//! assert!(settings.skip_dup_chapters);
//!
//! settings.add_keys(ReaderHotkey::NextChapter, ["n"])?;
//! assert_eq!(settings.hotkey_for("n"), Some(ReaderHotkey::NextChapter));
//!
//! settings.reset_hotkey(ReaderHotkey::NextChapter);
//! assert_eq!(settings.hotkey_for("n"), None);
//! # Ok::<(), shiori::Error>(())
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    types::{Chapter, Direction, NavigateOptions},
};

/// Actions of the reader that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReaderHotkey {
    PreviousPage,
    NextPage,
    ScrollBackward,
    ScrollForward,
    PreviousChapter,
    NextChapter,
    ToggleMenu,
    CycleScaleType,
    StretchImage,
    OffsetSpreadPages,
    CycleReadingMode,
    CycleReadingDirection,
    ToggleAutoScroll,
    AutoScrollSpeedIncrease,
    AutoScrollSpeedDecrease,
    ExitReader,
}

impl ReaderHotkey {
    /// Every action, in settings display order.
    pub const ALL: [ReaderHotkey; 16] = [
        ReaderHotkey::PreviousPage,
        ReaderHotkey::NextPage,
        ReaderHotkey::ScrollBackward,
        ReaderHotkey::ScrollForward,
        ReaderHotkey::PreviousChapter,
        ReaderHotkey::NextChapter,
        ReaderHotkey::ToggleMenu,
        ReaderHotkey::CycleScaleType,
        ReaderHotkey::StretchImage,
        ReaderHotkey::OffsetSpreadPages,
        ReaderHotkey::CycleReadingMode,
        ReaderHotkey::CycleReadingDirection,
        ReaderHotkey::ToggleAutoScroll,
        ReaderHotkey::AutoScrollSpeedIncrease,
        ReaderHotkey::AutoScrollSpeedDecrease,
        ReaderHotkey::ExitReader,
    ];

    /// Translation key of the action's title.
    pub fn title_key(self) -> &'static str {
        match self {
            ReaderHotkey::PreviousPage => "reader.settings.hotkey.previous_page",
            ReaderHotkey::NextPage => "reader.settings.hotkey.next_page",
            ReaderHotkey::ScrollBackward => "reader.settings.hotkey.scroll_backward",
            ReaderHotkey::ScrollForward => "reader.settings.hotkey.scroll_forward",
            ReaderHotkey::PreviousChapter => "reader.settings.hotkey.previous_chapter",
            ReaderHotkey::NextChapter => "reader.settings.hotkey.next_chapter",
            ReaderHotkey::ToggleMenu => "reader.settings.hotkey.menu",
            ReaderHotkey::CycleScaleType => "reader.settings.hotkey.scale_type",
            ReaderHotkey::StretchImage => "reader.settings.hotkey.stretch_image",
            ReaderHotkey::OffsetSpreadPages => "reader.settings.hotkey.offset_spread_pages",
            ReaderHotkey::CycleReadingMode => "reader.settings.hotkey.reading_mode",
            ReaderHotkey::CycleReadingDirection => "reader.settings.hotkey.reading_direction",
            ReaderHotkey::ToggleAutoScroll => "reader.settings.hotkey.auto_scroll",
            ReaderHotkey::AutoScrollSpeedIncrease => {
                "reader.settings.hotkey.auto_scroll_speed_increase"
            }
            ReaderHotkey::AutoScrollSpeedDecrease => {
                "reader.settings.hotkey.auto_scroll_speed_decrease"
            }
            ReaderHotkey::ExitReader => "reader.button.exit",
        }
    }

    /// Keys bound to the action out of the box.
    pub fn default_keys(self) -> &'static [&'static str] {
        match self {
            ReaderHotkey::PreviousPage => &["ArrowLeft", "a"],
            ReaderHotkey::NextPage => &["ArrowRight", "d"],
            ReaderHotkey::ScrollBackward => &["shift+space"],
            ReaderHotkey::ScrollForward => &["space"],
            ReaderHotkey::PreviousChapter => &[","],
            ReaderHotkey::NextChapter => &["."],
            ReaderHotkey::ToggleMenu => &["m"],
            ReaderHotkey::CycleScaleType => &["c"],
            ReaderHotkey::StretchImage => &["f"],
            ReaderHotkey::OffsetSpreadPages => &["o"],
            ReaderHotkey::CycleReadingMode => &["r"],
            ReaderHotkey::CycleReadingDirection => &["t"],
            ReaderHotkey::ToggleAutoScroll => &["s"],
            ReaderHotkey::AutoScrollSpeedIncrease => &["ArrowUp"],
            ReaderHotkey::AutoScrollSpeedDecrease => &["ArrowDown"],
            ReaderHotkey::ExitReader => &["Escape"],
        }
    }
}

/// User configurable reader settings.
///
/// # Fields
///
/// * `skip_dup_chapters` - Treat duplicates of the chapter being read as one
///   chapter when navigating and listing
/// * `hotkeys` - Keys bound to each reader action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderSettings {
    pub skip_dup_chapters: bool,
    pub hotkeys: BTreeMap<ReaderHotkey, Vec<String>>,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            skip_dup_chapters: true,
            hotkeys: default_hotkeys(),
        }
    }
}

fn default_hotkeys() -> BTreeMap<ReaderHotkey, Vec<String>> {
    ReaderHotkey::ALL
        .iter()
        .map(|hotkey| {
            let keys = hotkey.default_keys().iter().map(|key| key.to_string()).collect();
            (*hotkey, keys)
        })
        .collect()
}

impl ReaderSettings {
    /// Keys currently bound to `hotkey`.
    pub fn keys(&self, hotkey: ReaderHotkey) -> &[String] {
        self.hotkeys.get(&hotkey).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every bound key across all actions.
    pub fn existing_keys(&self) -> Vec<&str> {
        self.hotkeys
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// The action `key` triggers, if any.
    pub fn hotkey_for(&self, key: &str) -> Option<ReaderHotkey> {
        self.hotkeys
            .iter()
            .find(|(_, keys)| keys.iter().any(|bound| bound == key))
            .map(|(hotkey, _)| *hotkey)
    }

    /// Binds additional keys to `hotkey`.
    ///
    /// Fails without changing anything if a key is empty, repeats within
    /// `keys`, or is already bound to any action (including `hotkey`).
    pub fn add_keys<I, K>(&mut self, hotkey: ReaderHotkey, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut recorded: Vec<String> = Vec::new();
        for key in keys {
            let key = key.into();
            let trimmed = key.trim();
            if trimmed.is_empty() {
                return Err(Error::invalid_hotkey("key must not be empty"));
            }
            if let Some(owner) = self.hotkey_for(trimmed) {
                return Err(Error::hotkey_conflict(trimmed, owner));
            }
            if recorded.iter().any(|existing| existing == trimmed) {
                return Err(Error::hotkey_conflict(trimmed, hotkey));
            }
            recorded.push(trimmed.to_string());
        }

        log::debug!("binding {:?} to {:?}", recorded, hotkey);
        self.hotkeys
            .entry(hotkey)
            .or_default()
            .extend(recorded);
        Ok(())
    }

    /// Unbinds `key` from `hotkey`. Returns `false` if it was not bound.
    pub fn remove_key(&mut self, hotkey: ReaderHotkey, key: &str) -> bool {
        let Some(keys) = self.hotkeys.get_mut(&hotkey) else {
            return false;
        };
        let before = keys.len();
        keys.retain(|bound| bound != key);
        before != keys.len()
    }

    /// Restores the default bindings of `hotkey`.
    ///
    /// Default keys that were rebound to another action in the meantime are
    /// released from that action first, so a key never triggers two actions.
    pub fn reset_hotkey(&mut self, hotkey: ReaderHotkey) {
        let defaults: Vec<String> = hotkey
            .default_keys()
            .iter()
            .map(|key| key.to_string())
            .collect();

        for (other, keys) in self.hotkeys.iter_mut() {
            if *other != hotkey {
                keys.retain(|bound| !defaults.contains(bound));
            }
        }
        self.hotkeys.insert(hotkey, defaults);
    }

    pub fn set_skip_dup_chapters(&mut self, enabled: bool) {
        self.skip_dup_chapters = enabled;
    }

    /// Navigation options reflecting the duplicate setting.
    pub fn navigate_options(
        &self,
        direction: Direction,
        duplicate_reference: Option<&Chapter>,
    ) -> NavigateOptions {
        NavigateOptions {
            direction,
            skip_duplicates: self.skip_dup_chapters,
            duplicate_reference: duplicate_reference.cloned(),
        }
    }
}
