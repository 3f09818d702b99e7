//! Shiori CLI - inspect chapter navigation and edit reader settings
//!
//! Chapter lists are read from JSON files holding an array of chapters,
//! newest first, as returned by the library service.

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use shiori::{config, prelude::*};

#[derive(Parser)]
#[clap(version, about = "Chapter navigation for manga readers")]
struct Opts {
    /// Settings file, defaults to $SHIORI_HOME/reader.json
    #[clap(long, global = true)]
    settings: Option<PathBuf>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the current, next and previous chapter
    Navigate {
        chapters: PathBuf,
        #[clap(short, long)]
        source_order: i64,
        /// Skip duplicates regardless of the settings
        #[clap(long, conflicts_with = "keep_dupes")]
        skip_dupes: bool,
        /// Keep duplicates regardless of the settings
        #[clap(long)]
        keep_dupes: bool,
    },
    /// List chapters without duplicates of the chapter at a source order
    Dedupe {
        chapters: PathBuf,
        #[clap(short, long)]
        source_order: i64,
    },
    /// List hotkey bindings
    Hotkeys,
    /// Bind keys to a reader action
    Bind { action: String, keys: Vec<String> },
    /// Unbind a key from a reader action
    Unbind { action: String, key: String },
    /// Restore the default keys of a reader action
    Reset { action: String },
    /// Turn duplicate skipping on or off
    SkipDupes {
        #[clap(value_parser = ["on", "off"])]
        state: String,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let opts = Opts::parse();
    let settings_path = match opts.settings {
        Some(path) => path,
        None => config::settings_path()?,
    };
    let mut settings = config::load_settings(&settings_path)?;

    match opts.command {
        Command::Navigate {
            chapters,
            source_order,
            skip_dupes,
            keep_dupes,
        } => {
            let chapters = read_chapters(&chapters)?;
            let skip = match (skip_dupes, keep_dupes) {
                (true, _) => true,
                (_, true) => false,
                _ => settings.skip_dup_chapters,
            };
            let state = ReaderChapters::resolve(
                &ReaderInput::loaded(&chapters, source_order).skip_dup_chapters(skip),
            );
            let current = state
                .current_chapter
                .as_ref()
                .ok_or_else(|| eyre!("no chapter with source order {source_order}"))?;

            println!("current:  {}", describe(Some(current)));
            println!("next:     {}", describe(state.next_chapter.as_ref()));
            println!("previous: {}", describe(state.previous_chapter.as_ref()));
        }
        Command::Dedupe {
            chapters,
            source_order,
        } => {
            let chapters = read_chapters(&chapters)?;
            let reference = chapters
                .find_by_source_order(source_order)
                .ok_or_else(|| eyre!("no chapter with source order {source_order}"))?;

            for chapter in chapters.without_duplicates_of(reference) {
                println!("{}", describe(Some(&chapter)));
            }
        }
        Command::Hotkeys => {
            println!(
                "skip duplicate chapters: {}",
                if settings.skip_dup_chapters { "on" } else { "off" }
            );
            for hotkey in ReaderHotkey::ALL {
                println!("{:<28} {}", action_name(hotkey), settings.keys(hotkey).join(", "));
            }
        }
        Command::Bind { action, keys } => {
            settings.add_keys(parse_action(&action)?, keys)?;
            config::save_settings(&settings_path, &settings)?;
        }
        Command::Unbind { action, key } => {
            if !settings.remove_key(parse_action(&action)?, &key) {
                return Err(eyre!("'{key}' is not bound to {action}"));
            }
            config::save_settings(&settings_path, &settings)?;
        }
        Command::Reset { action } => {
            settings.reset_hotkey(parse_action(&action)?);
            config::save_settings(&settings_path, &settings)?;
        }
        Command::SkipDupes { state } => {
            settings.set_skip_dup_chapters(state == "on");
            config::save_settings(&settings_path, &settings)?;
        }
    }

    Ok(())
}

fn read_chapters(path: &Path) -> Result<Vec<Chapter>> {
    let content =
        fs::read_to_string(path).wrap_err_with(|| format!("reading {}", path.display()))?;
    let chapters: Vec<Chapter> = serde_json::from_str(&content)
        .wrap_err_with(|| format!("parsing chapters from {}", path.display()))?;
    chapters.ensure_descending()?;
    Ok(chapters)
}

fn describe(chapter: Option<&Chapter>) -> String {
    match chapter {
        Some(chapter) => format!(
            "#{} {} [{}] {}{}",
            chapter.source_order,
            chapter.number,
            chapter.id,
            chapter.name,
            chapter
                .scanlator
                .as_deref()
                .map(|group| format!(" ({group})"))
                .unwrap_or_default()
        ),
        None => "-".to_string(),
    }
}

fn action_name(hotkey: ReaderHotkey) -> String {
    serde_json::to_value(hotkey)
        .ok()
        .and_then(|value| value.as_str().map(str::to_string))
        .unwrap_or_else(|| format!("{hotkey:?}"))
}

fn parse_action(action: &str) -> Result<ReaderHotkey> {
    serde_json::from_value(serde_json::Value::String(action.to_string()))
        .map_err(|_| eyre!("unknown reader action '{action}', see `shiori hotkeys`"))
}
