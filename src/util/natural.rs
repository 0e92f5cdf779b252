//! Natural-order string comparison.
//!
//! Digit runs compare by numeric value (`User 9` < `User 10`), letters compare
//! case-insensitively first. Remaining ties are broken by case (lower case
//! first) and finally by plain byte order, so the result is a total order.

use std::cmp::Ordering;

/// Compares two strings in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    compare_chunks(a, b)
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Char(char),
}

/// Splits a string into single characters and maximal ASCII digit runs.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        let c = self.rest.chars().next()?;
        if c.is_ascii_digit() {
            let end = self
                .rest
                .find(|ch: char| !ch.is_ascii_digit())
                .unwrap_or(self.rest.len());
            let (digits, rest) = self.rest.split_at(end);
            self.rest = rest;
            Some(Chunk::Digits(digits))
        } else {
            self.rest = &self.rest[c.len_utf8()..];
            Some(Chunk::Char(c))
        }
    }
}

fn compare_chunks(a: &str, b: &str) -> Ordering {
    let mut left = Chunks { rest: a };
    let mut right = Chunks { rest: b };
    loop {
        let ord = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => compare_chunk(x, y),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

fn compare_chunk(a: Chunk<'_>, b: Chunk<'_>) -> Ordering {
    match (a, b) {
        (Chunk::Digits(x), Chunk::Digits(y)) => compare_digit_runs(x, y),
        // A digit run sorts where '0'..'9' sit among characters.
        (Chunk::Digits(_), Chunk::Char(c)) => '0'.cmp(&fold(c)),
        (Chunk::Char(c), Chunk::Digits(_)) => fold(c).cmp(&'0'),
        (Chunk::Char(x), Chunk::Char(y)) => fold(x).cmp(&fold(y)),
    }
}

/// Compares two ASCII digit runs by value without parsing (no overflow).
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
