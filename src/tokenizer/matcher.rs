//! # Token Matchers
//!
//! A [`TokenMatcher`] recognizes one [`TokenKind`] at the very start of the
//! remaining input. The tokenizer asks its matchers in registration order and
//! the first one that answers wins.
//!
//! ## Built-in Matchers
//!
//! * [`SymbolMatcher`]: a fixed single-symbol string (`#`, `*`, `-`, space)
//! * [`NewlineMatcher`]: any line break (`\r\n`, `\n` or a lone `\r`)
//!
//! Both are thin `nom` parsers. Callers adding new syntax usually reach for
//! [`PatternMatcher`], which anchors a regular expression at the scan offset.
//!
//! [`TokenKind::Text`] is never produced by a matcher: it is the tokenizer's
//! fallback for characters nobody claims. Registering a matcher for it fails
//! with [`RegistrationError::FallbackKind`].

use std::fmt;

use nom::{branch::alt, bytes::complete::tag, IResult};
use regex::Regex;
use thiserror::Error;

use super::token::TokenKind;

/// Recognizes one token kind anchored at the start of the input.
pub trait TokenMatcher: fmt::Debug + Send + Sync {
    /// Kind of the tokens this matcher emits.
    fn kind(&self) -> TokenKind;

    /// Byte length of the match at the start of `input`, if any.
    ///
    /// A returned length is always non-zero and falls on a char boundary.
    fn match_len(&self, input: &str) -> Option<usize>;
}

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Text is the fallback token kind and cannot be registered as a matcher")]
    FallbackKind,
    #[error("Empty pattern for token kind {kind}")]
    EmptyPattern { kind: TokenKind },
    #[error("Invalid pattern `{pattern}` for token kind {kind}: {source}")]
    InvalidPattern {
        kind: TokenKind,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type RegistrationResult<T> = Result<T, RegistrationError>;

type MatchResult<'a> = IResult<&'a str, &'a str>;

/// Matches one fixed symbol string.
#[derive(Debug, Clone)]
pub struct SymbolMatcher {
    kind: TokenKind,
    symbol: &'static str,
}

impl SymbolMatcher {
    /// Creates a matcher for an arbitrary kind and symbol.
    pub fn new(kind: TokenKind, symbol: &'static str) -> Self {
        Self { kind, symbol }
    }

    pub fn hash() -> Self {
        Self::new(TokenKind::Hash, "#")
    }

    pub fn asterisk() -> Self {
        Self::new(TokenKind::Asterisk, "*")
    }

    pub fn hyphen() -> Self {
        Self::new(TokenKind::Hyphen, "-")
    }

    pub fn space() -> Self {
        Self::new(TokenKind::Space, " ")
    }
}

impl TokenMatcher for SymbolMatcher {
    fn kind(&self) -> TokenKind {
        self.kind
    }

    fn match_len(&self, input: &str) -> Option<usize> {
        if self.symbol.is_empty() {
            return None;
        }
        let result: MatchResult = tag(self.symbol)(input);
        result.ok().map(|(_, matched)| matched.len())
    }
}

/// Matches a line break, preferring `\r\n` over its single-character parts.
#[derive(Debug, Clone, Default)]
pub struct NewlineMatcher;

impl NewlineMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl TokenMatcher for NewlineMatcher {
    fn kind(&self) -> TokenKind {
        TokenKind::Newline
    }

    fn match_len(&self, input: &str) -> Option<usize> {
        let result: MatchResult = alt((tag("\r\n"), tag("\n"), tag("\r")))(input);
        result.ok().map(|(_, matched)| matched.len())
    }
}

/// Matches a regular expression anchored at the scan offset.
///
/// The pattern is wrapped as `\A(?:pattern)`, so it only ever matches at the
/// start of the remaining input. Empty matches count as no match.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    kind: TokenKind,
    regex: Regex,
}

impl PatternMatcher {
    pub fn new(kind: TokenKind, pattern: &str) -> RegistrationResult<Self> {
        if kind == TokenKind::Text {
            return Err(RegistrationError::FallbackKind);
        }
        if pattern.is_empty() {
            return Err(RegistrationError::EmptyPattern { kind });
        }
        let regex = Regex::new(&format!(r"\A(?:{pattern})")).map_err(|source| {
            RegistrationError::InvalidPattern {
                kind,
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self { kind, regex })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl TokenMatcher for PatternMatcher {
    fn kind(&self) -> TokenKind {
        self.kind
    }

    fn match_len(&self, input: &str) -> Option<usize> {
        self.regex
            .find(input)
            .map(|found| found.end())
            .filter(|&len| len > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_matchers() {
        let test_cases = [
            (SymbolMatcher::hash(), "# Title", TokenKind::Hash),
            (SymbolMatcher::asterisk(), "*bold", TokenKind::Asterisk),
            (SymbolMatcher::hyphen(), "- item", TokenKind::Hyphen),
            (SymbolMatcher::space(), " x", TokenKind::Space),
        ];

        for (matcher, input, kind) in test_cases.iter() {
            assert_eq!(matcher.kind(), *kind);
            assert_eq!(matcher.match_len(input), Some(1));
        }
    }

    #[test]
    fn test_symbol_matcher_is_anchored() {
        assert_eq!(SymbolMatcher::hash().match_len("a#"), None);
        assert_eq!(SymbolMatcher::space().match_len(""), None);
    }

    #[test]
    fn test_newline_matcher() {
        let matcher = NewlineMatcher::new();
        assert_eq!(matcher.match_len("\nrest"), Some(1));
        assert_eq!(matcher.match_len("\r\nrest"), Some(2));
        assert_eq!(matcher.match_len("\rrest"), Some(1));
        assert_eq!(matcher.match_len("rest\n"), None);
    }

    #[test]
    fn test_pattern_matcher_anchors_pattern() {
        let matcher = PatternMatcher::new(TokenKind::Custom("Tilde"), "~").unwrap();
        assert_eq!(matcher.match_len("~~x"), Some(1));
        assert_eq!(matcher.match_len("x~"), None);
        assert_eq!(matcher.pattern(), r"\A(?:~)");
    }

    #[test]
    fn test_pattern_matcher_ignores_empty_match() {
        let matcher = PatternMatcher::new(TokenKind::Custom("Digits"), "[0-9]*").unwrap();
        assert_eq!(matcher.match_len("123a"), Some(3));
        assert_eq!(matcher.match_len("abc"), None);
    }

    #[test]
    fn test_pattern_matcher_rejects_bad_registrations() {
        assert!(matches!(
            PatternMatcher::new(TokenKind::Text, "x"),
            Err(RegistrationError::FallbackKind)
        ));
        assert!(matches!(
            PatternMatcher::new(TokenKind::Custom("Nothing"), ""),
            Err(RegistrationError::EmptyPattern { .. })
        ));
        assert!(matches!(
            PatternMatcher::new(TokenKind::Custom("Broken"), "(unclosed"),
            Err(RegistrationError::InvalidPattern { .. })
        ));
    }
}
