// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/query/processor/stream/function/tokens.rs

//! Lazy regex split.
//!
//! Splitting follows the usual `split` contract of CEP query languages:
//!
//! * a match at the very start with positive width yields a leading empty token;
//! * a zero-width match at the very start yields nothing;
//! * consecutive matches yield empty tokens between them;
//! * an empty match may start where a non-empty match ended, so patterns
//!   such as `x*` delimit an empty token there;
//! * trailing empty tokens are dropped;
//! * when the pattern never matches, the whole input is the only token, even
//!   when it is empty.

use regex::{Match, Regex};
use std::collections::HashSet;
use std::iter::FusedIterator;

enum Piece<'h> {
    /// No delimiter matched: the input itself, returned even when empty.
    Whole(&'h str),
    Token(&'h str),
}

/// Iterator over the tokens of `haystack` split by `regex`.
///
/// ```
/// use eventflux_string::core::query::processor::stream::Tokens;
/// use regex::Regex;
///
/// let comma = Regex::new(",").unwrap();
/// let tokens: Vec<&str> = Tokens::new(&comma, "a,,b,").collect();
/// assert_eq!(tokens, vec!["a", "", "b"]);
///
/// let tokens: Vec<&str> = Tokens::new(&comma, "a,b,a").distinct().collect();
/// assert_eq!(tokens, vec!["a", "b"]);
/// ```
pub struct Tokens<'r, 'h> {
    regex: &'r Regex,
    haystack: &'h str,
    // next search offset, `None` once the input is searched out
    search_at: Option<usize>,
    last: usize,
    consumed: bool,
    exhausted: bool,
    // empties seen but not yet known to be interior
    pending_empty: usize,
    held: Option<&'h str>,
    seen: Option<HashSet<&'h str>>,
}

impl<'r, 'h> Tokens<'r, 'h> {
    pub fn new(regex: &'r Regex, haystack: &'h str) -> Self {
        Self {
            regex,
            haystack,
            search_at: Some(0),
            last: 0,
            consumed: false,
            exhausted: false,
            pending_empty: 0,
            held: None,
            seen: None,
        }
    }

    /// Keep only the first occurrence of each token.
    pub fn distinct(mut self) -> Self {
        self.seen = Some(HashSet::new());
        self
    }

    /// Next match, resuming at the end of the previous one. Unlike
    /// `Regex::find_iter` an empty match directly after a non-empty one is
    /// reported; after an empty match the search moves one char forward.
    fn next_match(&mut self) -> Option<Match<'h>> {
        let start = self.search_at?;
        let m = self.regex.find_at(self.haystack, start);
        self.search_at = match m {
            Some(m) if m.is_empty() => self.haystack[m.end()..]
                .chars()
                .next()
                .map(|c| m.end() + c.len_utf8()),
            Some(m) => Some(m.end()),
            None => None,
        };
        m
    }

    fn next_piece(&mut self) -> Option<Piece<'h>> {
        if self.exhausted {
            return None;
        }
        while let Some(m) = self.next_match() {
            if m.end() == 0 {
                continue;
            }
            let piece = &self.haystack[self.last..m.start()];
            self.last = m.end();
            self.consumed = true;
            return Some(Piece::Token(piece));
        }
        self.exhausted = true;
        if self.consumed {
            Some(Piece::Token(&self.haystack[self.last..]))
        } else {
            Some(Piece::Whole(self.haystack))
        }
    }

    fn next_split(&mut self) -> Option<&'h str> {
        if self.pending_empty > 0 && self.held.is_some() {
            self.pending_empty -= 1;
            return Some("");
        }
        if let Some(token) = self.held.take() {
            return Some(token);
        }
        loop {
            match self.next_piece()? {
                Piece::Whole(whole) => return Some(whole),
                Piece::Token("") => self.pending_empty += 1,
                Piece::Token(token) if self.pending_empty > 0 => {
                    self.pending_empty -= 1;
                    self.held = Some(token);
                    return Some("");
                }
                Piece::Token(token) => return Some(token),
            }
        }
    }
}

impl<'h> Iterator for Tokens<'_, 'h> {
    type Item = &'h str;

    fn next(&mut self) -> Option<&'h str> {
        loop {
            let token = self.next_split()?;
            if let Some(seen) = self.seen.as_mut() {
                if !seen.insert(token) {
                    continue;
                }
            }
            return Some(token);
        }
    }
}

impl FusedIterator for Tokens<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(pattern: &str, input: &str) -> Vec<String> {
        let regex = Regex::new(pattern).unwrap();
        Tokens::new(&regex, input).map(str::to_string).collect()
    }

    fn split_distinct(pattern: &str, input: &str) -> Vec<String> {
        let regex = Regex::new(pattern).unwrap();
        Tokens::new(&regex, input)
            .distinct()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_simple_split() {
        assert_eq!(
            split(",", "Android,Windows8,iOS"),
            vec!["Android", "Windows8", "iOS"]
        );
    }

    #[test]
    fn test_interior_empty_preserved() {
        assert_eq!(split(",", "a,,b"), vec!["a", "", "b"]);
        assert_eq!(split(",", ",,a,,b,,"), vec!["", "", "a", "", "b"]);
    }

    #[test]
    fn test_leading_empty_kept_trailing_dropped() {
        assert_eq!(split(",", ",a"), vec!["", "a"]);
        assert_eq!(split(",", "a,"), vec!["a"]);
        assert_eq!(split(",", "a,,,"), vec!["a"]);
    }

    #[test]
    fn test_only_delimiters_yields_nothing() {
        assert!(split(",", ",").is_empty());
        assert!(split(",", ",,,").is_empty());
        assert!(split("\\s+", "   ").is_empty());
    }

    #[test]
    fn test_no_match_returns_whole_input() {
        assert_eq!(split(",", ""), vec![""]);
        assert_eq!(split(",", "abc"), vec!["abc"]);
    }

    #[test]
    fn test_zero_width_match_at_start_skipped() {
        assert_eq!(split("", "abc"), vec!["a", "b", "c"]);
        assert_eq!(split("\\b", "ab cd"), vec!["ab", " ", "cd"]);
    }

    #[test]
    fn test_empty_match_after_delimiter_yields_empty_token() {
        assert_eq!(split("x*", "axb"), vec!["a", "", "b"]);
        assert_eq!(split("a*", "baaab"), vec!["b", "", "b"]);
        assert_eq!(split("\\d*", "a1b22c"), vec!["a", "", "b", "", "c"]);
        // the empty match at the end only produces trailing empties
        assert_eq!(split("x*", "ax"), vec!["a"]);
    }

    #[test]
    fn test_empty_matches_step_over_multibyte_chars() {
        assert_eq!(split("", "é€"), vec!["é", "€"]);
        assert_eq!(split("x*", "éxü"), vec!["é", "", "ü"]);
    }

    #[test]
    fn test_multichar_delimiter() {
        assert_eq!(split("\\s+", "  hello   world"), vec!["", "hello", "world"]);
        assert_eq!(split("::", "ns::name::"), vec!["ns", "name"]);
    }

    #[test]
    fn test_distinct_keeps_first_occurrence_order() {
        assert_eq!(split_distinct(",", "a,b,a"), vec!["a", "b"]);
        assert_eq!(split_distinct(",", "b,a,b,c,a"), vec!["b", "a", "c"]);
        assert_eq!(split_distinct(",", "a,,b,,a"), vec!["a", "", "b"]);
        assert_eq!(split_distinct(",", ""), vec![""]);
    }

    #[test]
    fn test_exhausted_iterator_stays_exhausted() {
        let regex = Regex::new(",").unwrap();
        let mut tokens = Tokens::new(&regex, "a,");
        assert_eq!(tokens.next(), Some("a"));
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.next(), None);
    }
}
