//! Integration tests for the greeter session
//!
//! These tests drive the whole loop through in-memory input and output.

use hello_greeter::session::{FAREWELL, PROMPT, USAGE, WELCOME};
use hello_greeter::{run, Session};
use std::io::Cursor;

fn greeted_lines(input: &str) -> Vec<String> {
    let mut output = Vec::new();
    run(Cursor::new(input), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .skip(2)
        .map(|line| line.replace(PROMPT, ""))
        .filter(|line| !line.is_empty())
        .collect()
}

#[test]
fn test_session_starts_with_welcome_and_usage() {
    let mut output = Vec::new();
    run(Cursor::new(""), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();
    let mut lines = output.lines();
    assert_eq!(lines.next(), Some(WELCOME));
    assert_eq!(lines.next(), Some(USAGE));
}

#[test]
fn test_every_exit_keyword_says_goodbye_without_greeting() {
    for keyword in ["exit", "QUIT", "q", "退出", "Exit", "  quit  "] {
        let lines = greeted_lines(&format!("{keyword}\n"));
        assert_eq!(lines, vec![FAREWELL], "Failed for keyword: {}", keyword);
    }
}

#[test]
fn test_greets_each_name_until_keyword() {
    let lines = greeted_lines("Alice\n Bob \n\n退出\nEve\n");
    assert_eq!(
        lines,
        vec!["Hello, Alice!", "Hello, Bob!", "Hello, World!", FAREWELL]
    );
}

#[test]
fn test_end_of_input_ends_quietly() {
    let lines = greeted_lines("Alice\n");
    assert_eq!(lines, vec!["Hello, Alice!"]);
}

#[test]
fn test_session_can_run_on_borrowed_buffers() {
    let mut output = Vec::new();
    Session::new(Cursor::new("Zoe\nq\n"), &mut output)
        .run()
        .unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.ends_with(&format!("{PROMPT}Hello, Zoe!\n{PROMPT}{FAREWELL}\n")));
}
