#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A location in the source buffer: byte offset plus 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
}

impl Position {
    pub fn null() -> Self {
        Position { offset: 0, line: 1 }
    }
}

/// A byte range into the original source. Spans never copy the backing
/// bytes; resolve them with [`Span::slice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn slice<'src>(&self, source: &'src str) -> &'src str {
        &source[self.start as usize..self.end as usize]
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds the line containing a byte offset. Returns the 1-based line
/// number, the line's text, and the offset's column within that line.
///
/// Offsets at or past the end of the source resolve to one past the end of
/// the last line, since errors such as a truncated expression point there.
pub fn get_line_at_offset(source: &str, offset: u32) -> (usize, String, usize) {
    let pos = (offset as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    let last = source.split_inclusive('\n').last().unwrap_or("");
    let line_count = source.split_inclusive('\n').count().max(1);
    (line_count, last.to_string(), pos - (source.len() - last.len()))
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    /*
        Error: message
        -> final.let
           |
        20 | let a = #;
           | --------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_offset(source, position.offset);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
