//! # Greeter session
//!
//! Reads names line by line, greets each one and stops on an exit keyword
//! or when the input ends.
//!
//! # Exit keywords:
//!
//! - **exit**, **quit**, **q** (any letter case)
//! - **退出**

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::error::GreeterError;
use crate::greeting::{build_greeting, normalize};

pub const WELCOME: &str = "欢迎使用问候程序！";
pub const USAGE: &str =
    "输入你的名字获得问候，直接回车使用默认值；输入 exit、quit、q 或 退出 结束程序。";
pub const PROMPT: &str = "请输入你的名字（直接回车使用默认值）: ";
pub const FAREWELL: &str = "再见！";

const EXIT_KEYWORDS_EN: [&str; 3] = ["exit", "quit", "q"];
const EXIT_KEYWORDS_CN: [&str; 1] = ["退出"];

/// Result of processing one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Greeted(String),
    Exit,
}

/// Checks an already trimmed input against the exit keywords.
pub fn is_exit_keyword(input: &str) -> bool {
    EXIT_KEYWORDS_EN
        .iter()
        .any(|keyword| input.eq_ignore_ascii_case(keyword))
        || EXIT_KEYWORDS_CN.contains(&input)
}

pub fn process_line(line: &str) -> Outcome {
    let input = normalize(line);
    if is_exit_keyword(input) {
        Outcome::Exit
    } else {
        Outcome::Greeted(build_greeting(input))
    }
}

pub struct Session<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W) -> Session<R, W> {
        Session { reader, writer }
    }

    /// Runs the greeting loop.
    ///
    /// Prints the welcome message and the usage hint, then prompts for a
    /// name until an exit keyword is entered or the input ends. The
    /// farewell is printed only for an exit keyword.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the reader or writing to the
    /// writer fails.
    pub fn run(&mut self) -> Result<(), GreeterError> {
        info!("Greeter session started.");
        writeln!(self.writer, "{WELCOME}").map_err(GreeterError::Write)?;
        writeln!(self.writer, "{USAGE}").map_err(GreeterError::Write)?;

        loop {
            self.prompt()?;
            let Some(line) = self.read_line()? else {
                // Keep the shell prompt off our prompt line.
                writeln!(self.writer).map_err(GreeterError::Write)?;
                info!("Input ended, leaving greeter.");
                break;
            };

            let outcome = process_line(&line);
            debug!("Input {:?} processed as {:?}.", normalize(&line), outcome);
            match outcome {
                Outcome::Exit => {
                    writeln!(self.writer, "{FAREWELL}").map_err(GreeterError::Write)?;
                    info!("Exit keyword entered, leaving greeter.");
                    break;
                }
                Outcome::Greeted(greeting) => {
                    writeln!(self.writer, "{greeting}").map_err(GreeterError::Write)?
                }
            }
        }
        self.writer.flush().map_err(GreeterError::Write)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn prompt(&mut self) -> Result<(), GreeterError> {
        write!(self.writer, "{PROMPT}").map_err(GreeterError::Write)?;
        self.writer.flush().map_err(GreeterError::Write)
    }

    /// Returns `None` at the end of input.
    fn read_line(&mut self) -> Result<Option<String>, GreeterError> {
        let mut input = String::new();
        let read = self
            .reader
            .read_line(&mut input)
            .map_err(GreeterError::Read)?;
        Ok((read > 0).then_some(input))
    }
}

/// Runs a greeter session on the given reader and writer.
pub fn run<R: BufRead, W: Write>(reader: R, writer: W) -> Result<(), GreeterError> {
    Session::new(reader, writer).run()
}
