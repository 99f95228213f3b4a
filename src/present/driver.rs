use std::io::{BufRead, Write};

use crate::{
    content::element::Element,
    deck::assemble::SlideSet,
    foundation::error::{DeckError, DeckResult},
    present::{config::DisplayConfig, cursor::SlideCursor},
};

/// Displays a finished [`SlideSet`].
///
/// Drivers only read the deck; assembly is complete before `start` runs.
pub trait PresentationDriver {
    /// Present `deck` until the user quits.
    fn start(&mut self, deck: &SlideSet, config: &DisplayConfig) -> DeckResult<()>;
}

/// Text outline of every slide, one line per element, indented under a
/// `[n/total] section` heading.
pub fn outline(deck: &SlideSet) -> Vec<String> {
    let mut lines = Vec::new();
    for index in 0..deck.len() {
        lines.extend(slide_lines(deck, index));
    }
    lines
}

fn slide_lines(deck: &SlideSet, index: usize) -> Vec<String> {
    let section = deck.section_of(index).map_or("?", |s| s.name.as_str());
    let mut lines = vec![format!("[{}/{}] {section}", index + 1, deck.len())];
    if let Some(slide) = deck.get(index) {
        for el in slide.elements() {
            push_element(&mut lines, el, 1);
        }
    }
    lines
}

fn push_element(lines: &mut Vec<String>, el: &Element, depth: usize) {
    lines.push(format!("{}{}", "  ".repeat(depth), el.describe()));
    if let Element::Group(items) = el {
        for item in items {
            push_element(lines, item, depth + 1);
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Next,
    Prev,
    Jump(usize),
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    match line.trim() {
        "" | "n" | "next" => Command::Next,
        "p" | "prev" => Command::Prev,
        "q" | "quit" => Command::Quit,
        other => other.parse().map_or(Command::Unknown, Command::Jump),
    }
}

/// Line-oriented interactive driver.
///
/// Shows the current slide as an outline, then reads one command per line:
/// empty or `n` advances, `p` goes back, a number jumps to that slide, `q`
/// (or end of input) quits.
pub struct TerminalDriver<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalDriver<R, W> {
    /// Driver reading commands from `input` and writing slides to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Recover the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn show(&mut self, deck: &SlideSet, index: usize) -> DeckResult<()> {
        for line in slide_lines(deck, index) {
            writeln!(self.output, "{line}").map_err(io_err)?;
        }
        self.output.flush().map_err(io_err)
    }
}

impl<R: BufRead, W: Write> PresentationDriver for TerminalDriver<R, W> {
    fn start(&mut self, deck: &SlideSet, config: &DisplayConfig) -> DeckResult<()> {
        config.validate()?;
        let mut cursor = SlideCursor::new(deck.len());
        let Some(first) = cursor.current() else {
            writeln!(self.output, "(no slides)").map_err(io_err)?;
            return Ok(());
        };
        tracing::debug!(
            slides = deck.len(),
            width = config.width,
            height = config.height,
            "starting terminal presentation"
        );
        self.show(deck, first)?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line).map_err(io_err)? == 0 {
                return Ok(());
            }
            let moved = match parse_command(&line) {
                Command::Quit => return Ok(()),
                Command::Next => cursor.next(),
                Command::Prev => cursor.prev(),
                Command::Jump(n) => match cursor.jump_to_number(n) {
                    Ok(()) => true,
                    Err(e) => {
                        writeln!(self.output, "{e}").map_err(io_err)?;
                        false
                    }
                },
                Command::Unknown => {
                    writeln!(
                        self.output,
                        "commands: <enter>/n next, p prev, <number> jump, q quit"
                    )
                    .map_err(io_err)?;
                    false
                }
            };
            if moved && let Some(index) = cursor.current() {
                self.show(deck, index)?;
            }
        }
    }
}

fn io_err(e: std::io::Error) -> DeckError {
    DeckError::Other(anyhow::Error::new(e).context("terminal presenter i/o"))
}

#[cfg(test)]
#[path = "../../tests/unit/present/driver.rs"]
mod tests;
