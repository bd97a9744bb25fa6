// kirjain-suffix: List the dictionary words each buffer ends with.
//
// Buffers come from the command line, or from stdin (one per line) when
// none are given. Output, one line per buffer, shortest word first:
//   TALOAUTO: to auto
//   XYZ: -
//
// Usage:
//   kirjain-suffix [-w WORDS] [BUFFER...]

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use kirjain_cli::CommonArgs;
use kirjain_game::dictionary::Dictionary;

/// List the dictionary words each buffer ends with.
#[derive(Parser, Debug)]
#[command(name = "kirjain-suffix", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Buffers to look up; read from stdin when omitted
    #[arg(value_name = "BUFFER")]
    buffers: Vec<String>,
}

fn write_matches(out: &mut impl Write, dictionary: &Dictionary, buffer: &str) -> io::Result<()> {
    let words: Vec<String> = dictionary
        .matches(buffer)
        .into_iter()
        .map(|m| m.word)
        .collect();
    if words.is_empty() {
        writeln!(out, "{buffer}: -")
    } else {
        writeln!(out, "{buffer}: {}", words.join(" "))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    kirjain_cli::init_logging(cli.common.verbose);

    let dictionary = kirjain_cli::load_dictionary(&cli.common)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.buffers.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("error reading stdin")?;
            let buffer = line.trim();
            if buffer.is_empty() {
                continue;
            }
            write_matches(&mut out, &dictionary, buffer)?;
        }
    } else {
        for buffer in &cli.buffers {
            write_matches(&mut out, &dictionary, buffer)?;
        }
    }

    out.flush()?;
    Ok(())
}
