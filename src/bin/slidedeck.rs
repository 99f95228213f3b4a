use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use slidedeck::{DisplayConfig, PresentationDriver as _, TerminalDriver};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "slidedeck", version)]
struct Cli {
    /// Display configuration JSON (width, height, frame_rate, draw_frame_rate).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print an outline of every slide and exit.
    #[arg(long)]
    outline: bool,

    /// Write the assembled slide set as JSON and exit.
    #[arg(long)]
    dump_json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => DisplayConfig::from_path(path)
            .with_context(|| format!("load display config '{}'", path.display()))?,
        None => DisplayConfig::default(),
    };

    let deck = slidedeck::talk::build(config.canvas()?).context("assemble talk")?;
    println!("Total slides {}", deck.len());

    if let Some(out) = &cli.dump_json {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(out, deck.to_json_pretty()?)
            .with_context(|| format!("write json '{}'", out.display()))?;
        eprintln!("wrote {}", out.display());
        return Ok(());
    }

    if cli.outline {
        let mut stdout = std::io::stdout().lock();
        for line in slidedeck::outline(&deck) {
            writeln!(stdout, "{line}")?;
        }
        return Ok(());
    }

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    TerminalDriver::new(stdin, stdout).start(&deck, &config)?;
    Ok(())
}
