// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! List-literal notation for credited names.
//!
//! The `Performer Names` and `Actors` columns hold a bracketed list of quoted
//! strings, e.g. `['Freddie', 'Brian']`:
//!
//! ```text
//! list   := '[' ( quoted ( ',' quoted )* ','? )? ']'
//! quoted := "'" chars "'" | '"' chars '"'
//! ```
//!
//! Whitespace is allowed around brackets, commas and items. Inside a quoted
//! item a backslash escapes the next character, which is only ever needed for
//! a quote or another backslash. An empty (or all-whitespace) cell is an empty
//! list. Nothing here evaluates its input, anything outside this grammar is
//! rejected.

use std::{iter::Peekable, str::CharIndices};

/// Parses a list literal into its names, in order.
///
/// The error describes the first offending character and its byte offset.
pub fn parse_names(input: &str) -> Result<Vec<String>, String> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut parser = Parser {
        input,
        chars: input.char_indices().peekable(),
    };
    parser.list()
}

/// Formats names as a list literal that [`parse_names`] reads back.
///
/// Items are single quoted unless they contain a single quote and no double
/// quote, in which case they are double quoted. Remaining quotes and
/// backslashes are escaped.
pub fn format_names(names: &[String]) -> String {
    let items: Vec<String> = names.iter().map(|name| quote(name)).collect();
    format!("[{}]", items.join(", "))
}

fn quote(name: &str) -> String {
    let delim = if name.contains('\'') && !name.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(name.len() + 2);
    out.push(delim);
    for c in name.chars() {
        if c == delim || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(delim);
    out
}

struct Parser<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl Parser<'_> {
    fn list(&mut self) -> Result<Vec<String>, String> {
        let mut names = Vec::new();

        self.skip_whitespace();
        self.expect('[')?;

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(']') => {
                    self.chars.next();
                    break;
                }
                Some('\'') | Some('"') => names.push(self.quoted()?),
                _ => return Err(self.unexpected("a quoted name or ']'")),
            }

            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.chars.next();
                }
                Some(']') => {
                    self.chars.next();
                    break;
                }
                _ => return Err(self.unexpected("',' or ']'")),
            }
        }

        self.skip_whitespace();
        match self.chars.next() {
            None => Ok(names),
            Some((offset, c)) => Err(format!("unexpected '{c}' after list at offset {offset}")),
        }
    }

    fn quoted(&mut self) -> Result<String, String> {
        let (start, delim) = self
            .chars
            .next()
            .ok_or_else(|| self.unexpected("a quote"))?;

        let mut value = String::new();
        loop {
            match self.chars.next() {
                Some((_, '\\')) => match self.chars.next() {
                    Some((_, c)) => value.push(c),
                    None => break,
                },
                Some((_, c)) if c == delim => return Ok(value),
                Some((_, c)) => value.push(c),
                None => break,
            }
        }

        Err(format!("unterminated name starting at offset {start}"))
    }

    fn expect(&mut self, wanted: char) -> Result<(), String> {
        match self.peek() {
            Some(c) if c == wanted => {
                self.chars.next();
                Ok(())
            }
            _ => Err(self.unexpected(&format!("'{wanted}'"))),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.chars.next();
        }
    }

    fn unexpected(&mut self, wanted: &str) -> String {
        match self.chars.peek() {
            Some(&(offset, c)) => format!("expected {wanted} at offset {offset}, found '{c}'"),
            None => format!("expected {wanted} at offset {}, found end of input", self.input.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_single_and_double_quoted_items() {
        assert_eq!(
            parse_names("['Freddie','Brian']").unwrap(),
            names(&["Freddie", "Brian"])
        );
        assert_eq!(
            parse_names(r#" [ "Leo" , 'Tom Hardy' ] "#).unwrap(),
            names(&["Leo", "Tom Hardy"])
        );
    }

    #[test]
    fn empty_cell_and_empty_list_are_both_empty() {
        assert!(parse_names("").unwrap().is_empty());
        assert!(parse_names("   ").unwrap().is_empty());
        assert!(parse_names("[]").unwrap().is_empty());
        assert!(parse_names("[ ]").unwrap().is_empty());
    }

    #[test]
    fn accepts_trailing_comma() {
        assert_eq!(parse_names("['a',]").unwrap(), names(&["a"]));
    }

    #[test]
    fn unescapes_quotes_and_backslashes() {
        assert_eq!(
            parse_names(r#"["Sinéad O'Connor", 'say \'hi\' \\ "x"']"#).unwrap(),
            names(&["Sinéad O'Connor", r#"say 'hi' \ "x""#])
        );
    }

    #[test]
    fn rejects_input_outside_the_grammar() {
        for bad in [
            "Freddie",
            "['Freddie'",
            "['Freddie' 'Brian']",
            "[Freddie]",
            "['unterminated]",
            "['a'] extra",
            "[,]",
            "__import__('os')",
        ] {
            assert!(parse_names(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn formatted_names_parse_back() {
        let original = names(&["Freddie", "O'Brien", r#"both ' and ""#, r"back\slash", ""]);
        let text = format_names(&original);
        assert_eq!(parse_names(&text).unwrap(), original);
    }

    #[test]
    fn formats_like_a_python_list() {
        assert_eq!(format_names(&names(&["Leo", "Tom"])), "['Leo', 'Tom']");
        assert_eq!(format_names(&names(&["O'Brien"])), r#"["O'Brien"]"#);
        assert_eq!(format_names(&[]), "[]");
    }
}
