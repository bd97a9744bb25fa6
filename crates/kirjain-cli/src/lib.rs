// kirjain-cli: shared utilities for the command-line tools.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Args;
use kirjain_game::dictionary::Dictionary;
use kirjain_game::wordlist::{WordListOptions, load_file};
use tracing::Level;

/// Environment variable naming the word list file.
pub const WORDS_ENV: &str = "KIRJAIN_WORDS";

/// Word list file name looked up in the search directories.
const WORDS_FILE: &str = "sanat.txt";

/// Options shared by every tool.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Word list file, one word per line
    #[arg(short = 'w', long = "words", value_name = "PATH")]
    pub words: Option<PathBuf>,

    /// Ignore capitalised entries such as place names
    #[arg(long)]
    pub skip_proper_nouns: bool,

    /// Log more to stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    pub fn word_list_options(&self) -> WordListOptions {
        WordListOptions {
            skip_proper_nouns: self.skip_proper_nouns,
            ..WordListOptions::default()
        }
    }
}

/// Install a stderr log subscriber. Warnings only by default.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Find the word list and build a dictionary from it.
///
/// Search order:
/// 1. `--words` argument (if provided)
/// 2. `KIRJAIN_WORDS` environment variable
/// 3. `~/.kirjain/sanat.txt`
/// 4. `/usr/share/kirjain/sanat.txt`
/// 5. `sanat.txt` in the current working directory
pub fn load_dictionary(args: &CommonArgs) -> anyhow::Result<Dictionary> {
    let path = find_word_list(args.words.as_deref())?;
    let list = load_file(&path, &args.word_list_options())
        .with_context(|| format!("failed to read {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        words = list.len(),
        skipped = list.skipped(),
        "loaded word list"
    );
    Dictionary::from_word_list(&list).with_context(|| format!("no dictionary in {}", path.display()))
}

/// Resolve the word list path. An explicit path must exist; the other
/// candidates are tried in order.
pub fn find_word_list(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        bail!("word list {} does not exist", path.display());
    }

    let candidates = search_paths();
    for path in &candidates {
        if path.is_file() {
            return Ok(path.clone());
        }
        tracing::debug!(path = %path.display(), "no word list");
    }

    bail!(
        "could not find a word list in any of the search paths:\n{}",
        candidates
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    )
}

/// Candidate word list files when no `--words` is given.
fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(WORDS_ENV) {
        let env_path = PathBuf::from(env_path);
        // The variable may name the file or a directory holding it
        paths.push(env_path.join(WORDS_FILE));
        paths.push(env_path);
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".kirjain").join(WORDS_FILE));
    }

    paths.push(PathBuf::from("/usr/share/kirjain").join(WORDS_FILE));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDS_FILE));
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
