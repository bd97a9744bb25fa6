// kirjain-play: Play the letter game from stdin.
//
// Every non-whitespace character read from stdin is one key press. For
// each press the utterances are printed in speaking order:
//   SAY t
//   SAY to + 1x2
// and the final score is printed at the end. With --json each press is
// printed as one JSON object per line instead.
//
// Usage:
//   kirjain-play [-w WORDS] [--json] [--lenient] [--keys]

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use kirjain_cli::CommonArgs;
use kirjain_core::keyboard::KEY_ROWS;
use kirjain_game::GameError;
use kirjain_game::session::{GameOptions, GameSession};
use kirjain_game::speech::Utterance;

/// Play the letter game from stdin.
#[derive(Parser, Debug)]
#[command(name = "kirjain-play", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Print one JSON object per key press
    #[arg(long)]
    json: bool,

    /// Accept letters that are not on the on-screen keyboard
    #[arg(long)]
    lenient: bool,

    /// Keep at most this many typed characters
    #[arg(long, value_name = "N", default_value_t = GameOptions::default().max_buffer_len)]
    max_buffer: usize,

    /// Print the keyboard layout and exit
    #[arg(long)]
    keys: bool,
}

fn print_utterance(out: &mut impl Write, utterance: &Utterance) -> io::Result<()> {
    match &utterance.award {
        Some(award) => writeln!(out, "SAY {} {award}", utterance.text),
        None => writeln!(out, "SAY {}", utterance.text),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    kirjain_cli::init_logging(cli.common.verbose);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.keys {
        for row in KEY_ROWS {
            let keys: Vec<String> = row.chars().map(String::from).collect();
            writeln!(out, "{}", keys.join(" "))?;
        }
        out.flush()?;
        return Ok(());
    }

    let dictionary = kirjain_cli::load_dictionary(&cli.common)?;
    let options = GameOptions {
        max_buffer_len: cli.max_buffer,
        strict_keyboard: !cli.lenient,
        ..GameOptions::default()
    };
    let mut session = GameSession::new(dictionary.into(), options);

    let mut write_error: Option<io::Error> = None;
    for line in io::stdin().lock().lines() {
        let line = line.context("error reading stdin")?;
        for c in line.chars().filter(|c| !c.is_whitespace()) {
            let result = if cli.json {
                session.press(c)
            } else {
                let mut speaker = |u: &Utterance| {
                    if write_error.is_none() {
                        write_error = print_utterance(&mut out, u).err();
                    }
                };
                session.play(c, &mut speaker)
            };
            if let Some(e) = write_error.take() {
                return Err(e.into());
            }
            let turn = match result {
                Ok(turn) => turn,
                Err(GameError::UnknownKey(c)) => {
                    tracing::warn!("no key for {c:?}, ignored");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            if cli.json {
                serde_json::to_writer(&mut out, &turn)?;
                writeln!(out)?;
            }
        }
    }

    if !cli.json {
        writeln!(out, "SCORE {}", session.score())?;
    }
    out.flush()?;
    Ok(())
}
