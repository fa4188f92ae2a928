#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// A location in a source file. Lines and columns start at 1, columns count
/// code points rather than bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn at(position: Position) -> Self {
        Span {
            start: position.clone(),
            end: position,
        }
    }
}

/// Returns the text of a 1-based line, without its line terminator.
///
/// `\r\n`, lone `\r` and lone `\n` all end a line, matching the tokenizer.
pub fn get_line(source: &str, line: u32) -> Option<String> {
    if line == 0 {
        return None;
    }

    let mut current = 1;
    let mut text = String::new();
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' || c == '\r' {
            if c == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }

            if current == line {
                return Some(text);
            }

            current += 1;
            text.clear();
            continue;
        }

        if current == line {
            text.push(c);
        }
    }

    if current == line {
        Some(text)
    } else {
        None
    }
}


/// Renders an error in the form
///
/// ```text
/// Error: UnexpectedToken (unexpected } expecting ')' -> Factor)
/// -> main.ah:20:9
///    |
/// 20 | var a = }
///    | --------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!(
        "-> {}:{}:{}\n",
        position.file, position.line, position.column
    ));

    let Some(line_text) = get_line(source, position.line) else {
        return out;
    };

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

/// Prints an error with the offending source line to stdout.
pub fn display_error(error: &Error, source: &str) {
    print!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
