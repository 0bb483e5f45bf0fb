//! # Token Types
//!
//! A [`Token`] is a classified lexical unit: a [`TokenKind`] plus the exact
//! substring of the source it was matched from. Tokens are created once by the
//! [`Tokenizer`](super::tokenizer::Tokenizer) and never mutated afterwards.
//!
//! Symbolic kinds (`#`, `*`, `-`, space, newline) always carry exactly one
//! match. Only [`TokenKind::Text`] accumulates a run of otherwise unmatched
//! characters.

use std::fmt;

use strum_macros::{AsRefStr, EnumIter};

/// Classification of a [`Token`].
///
/// The built-in kinds cover the reference markup constructs. Extensions add
/// their own kinds through [`TokenKind::Custom`], naming them with a static
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
pub enum TokenKind {
    /// `#`
    Hash,
    /// `*`
    Asterisk,
    /// `-`
    Hyphen,
    /// A single ASCII space.
    Space,
    /// `\n`, `\r\n` or a lone `\r`.
    Newline,
    /// A run of characters no matcher claimed.
    Text,
    /// A caller-defined kind.
    Custom(&'static str),
}

impl TokenKind {
    /// Canonical source text of single-symbol kinds.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            TokenKind::Hash => Some("#"),
            TokenKind::Asterisk => Some("*"),
            TokenKind::Hyphen => Some("-"),
            TokenKind::Space => Some(" "),
            TokenKind::Newline => Some("\n"),
            TokenKind::Text | TokenKind::Custom(_) => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TokenKind::Hash => "hash (#) symbol",
            TokenKind::Asterisk => "asterisk (*) symbol",
            TokenKind::Hyphen => "hyphen (-) symbol",
            TokenKind::Space => "single space",
            TokenKind::Newline => "line break (\\n, \\r\\n or \\r)",
            TokenKind::Text => "text not matched by any other token",
            TokenKind::Custom(_) => "caller-defined token",
        }
    }

    /// Name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Custom(name) => name,
            TokenKind::Hash => "Hash",
            TokenKind::Asterisk => "Asterisk",
            TokenKind::Hyphen => "Hyphen",
            TokenKind::Space => "Space",
            TokenKind::Newline => "Newline",
            TokenKind::Text => "Text",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexical unit with its exact source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Builds a token of a single-symbol kind using its canonical text.
    ///
    /// Kinds without a canonical symbol get an empty value.
    pub fn symbol(kind: TokenKind) -> Self {
        Self::new(kind, kind.symbol().unwrap_or_default())
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Text, value)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}
