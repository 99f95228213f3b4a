use std::io::Cursor;

use super::*;
use crate::{
    content::place::{header, title},
    deck::{assemble::assemble, section::Section},
    style::registry::talk_styles,
};

fn deck() -> SlideSet {
    let styles = talk_styles().unwrap();
    let sections = [
        Section::from_fn("intro", 2, |slides, styles| {
            slides.append(0, title(styles, "Welcome"))?;
            slides.append(1, header(styles, "Agenda"))?;
            Ok(())
        })
        .unwrap(),
        Section::from_fn("outro", 1, |slides, styles| {
            slides.append(0, title(styles, "Questions"))
        })
        .unwrap(),
    ];
    assemble(&sections, &styles, None).unwrap()
}

fn run(input: &str, deck: &SlideSet) -> String {
    let mut driver = TerminalDriver::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    driver.start(deck, &DisplayConfig::default()).unwrap();
    String::from_utf8(driver.into_output()).unwrap()
}

fn headings(out: &str) -> Vec<&str> {
    out.lines().filter(|l| l.starts_with('[')).collect()
}

#[test]
fn commands_parse() {
    assert_eq!(parse_command("\n"), Command::Next);
    assert_eq!(parse_command("p\n"), Command::Prev);
    assert_eq!(parse_command(" 12 "), Command::Jump(12));
    assert_eq!(parse_command("q"), Command::Quit);
    assert_eq!(parse_command("-1"), Command::Unknown);
}

#[test]
fn navigation_shows_slides_in_order() {
    let deck = deck();
    let out = run("\nn\nn\np\n1\nq\n", &deck);
    assert_eq!(
        headings(&out),
        [
            "[1/3] intro",
            "[2/3] intro",
            "[3/3] outro",
            "[2/3] intro",
            "[1/3] intro",
        ]
    );
    assert!(out.contains("\"Questions\""));
}

#[test]
fn bad_commands_do_not_move() {
    let deck = deck();
    let out = run("9\nwhat\n", &deck);
    assert_eq!(headings(&out), ["[1/3] intro"]);
    assert!(out.contains("outside 1..=3"));
    assert!(out.contains("commands:"));
}

#[test]
fn end_of_input_quits_and_empty_deck_is_reported() {
    let empty = assemble(&[], &talk_styles().unwrap(), None).unwrap();
    assert_eq!(run("", &empty), "(no slides)\n");

    let deck = deck();
    assert_eq!(headings(&run("", &deck)), ["[1/3] intro"]);
}

#[test]
fn outline_lists_every_slide_and_nested_groups() {
    let styles = talk_styles().unwrap();
    let bg = crate::content::shape::talk_background(crate::Canvas::new(64, 64).unwrap()).unwrap();
    let sections = [Section::from_fn("bg", 1, move |slides, _| {
        slides.append(0, bg.clone())
    })
    .unwrap()];
    let deck = assemble(&sections, &styles, None).unwrap();
    let lines = outline(&deck);
    assert_eq!(lines[0], "[1/1] bg");
    assert_eq!(lines[1], "  group of 5");
    assert!(lines[2].starts_with("    fill 64x64"));
    assert_eq!(lines.len(), 7);
}

#[test]
fn invalid_display_config_is_rejected_before_showing() {
    let deck = deck();
    let mut driver = TerminalDriver::new(Cursor::new(Vec::new()), Vec::new());
    let cfg = DisplayConfig {
        width: 0,
        ..DisplayConfig::default()
    };
    assert!(driver.start(&deck, &cfg).is_err());
    assert!(driver.into_output().is_empty());
}
