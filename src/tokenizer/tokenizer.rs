use tracing::debug;

use super::{
    matcher::{NewlineMatcher, RegistrationError, RegistrationResult, SymbolMatcher, TokenMatcher},
    token::{Token, TokenKind},
};

/// Converts raw text into an ordered sequence of [`Token`]s.
///
/// Matchers are tried in registration order and the **first** one that matches
/// at the current offset wins; this is first-match, not longest-match, so the
/// order in which overlapping matchers are registered is significant.
/// Characters no matcher claims accumulate into a single [`TokenKind::Text`]
/// token that is flushed before the next matched token or at end of input.
///
/// Tokenizing is lossless: concatenating every token value reproduces the
/// input exactly.
#[derive(Debug, Default)]
pub struct Tokenizer {
    matchers: Vec<Box<dyn TokenMatcher>>,
}

impl Tokenizer {
    /// Creates a tokenizer with no matchers; everything tokenizes as text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tokenizer with the matchers used by the reference markdown
    /// constructs: `#`, space, newline, `*` and `-`.
    pub fn markdown() -> Self {
        let mut tokenizer = Self::new();
        tokenizer.matchers = vec![
            Box::new(SymbolMatcher::hash()),
            Box::new(SymbolMatcher::space()),
            Box::new(NewlineMatcher::new()),
            Box::new(SymbolMatcher::asterisk()),
            Box::new(SymbolMatcher::hyphen()),
        ];
        tokenizer
    }

    /// Appends a matcher; it is tried after every matcher registered before it.
    pub fn register<M>(&mut self, matcher: M) -> RegistrationResult<()>
    where
        M: TokenMatcher + 'static,
    {
        self.register_boxed(Box::new(matcher))
    }

    pub fn register_boxed(&mut self, matcher: Box<dyn TokenMatcher>) -> RegistrationResult<()> {
        if matcher.kind() == TokenKind::Text {
            return Err(RegistrationError::FallbackKind);
        }
        debug!(
            kind = %matcher.kind(),
            order = self.matchers.len(),
            "registered token matcher"
        );
        self.matchers.push(matcher);
        Ok(())
    }

    /// Registers matchers in iteration order, stopping at the first rejection.
    pub fn register_all<I>(&mut self, matchers: I) -> RegistrationResult<()>
    where
        I: IntoIterator<Item = Box<dyn TokenMatcher>>,
    {
        for matcher in matchers {
            self.register_boxed(matcher)?;
        }
        Ok(())
    }

    /// Kinds of the registered matchers, in match order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.matchers.iter().map(|matcher| matcher.kind()).collect()
    }

    #[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut text_start: Option<usize> = None;
        let mut offset = 0;

        while offset < input.len() {
            let remaining = &input[offset..];

            match self.match_at(remaining) {
                Some((kind, len)) => {
                    if let Some(start) = text_start.take() {
                        tokens.push(Token::text(&input[start..offset]));
                    }
                    tokens.push(Token::new(kind, &remaining[..len]));
                    offset += len;
                }
                None => {
                    text_start.get_or_insert(offset);
                    // Advance by one whole character so multi-byte text stays intact.
                    offset += remaining.chars().next().map_or(1, char::len_utf8);
                }
            }
        }

        if let Some(start) = text_start {
            tokens.push(Token::text(&input[start..]));
        }

        debug!(count = tokens.len(), "tokenized input");
        tokens
    }

    fn match_at(&self, remaining: &str) -> Option<(TokenKind, usize)> {
        self.matchers.iter().find_map(|matcher| {
            matcher
                .match_len(remaining)
                .filter(|&len| len > 0 && remaining.is_char_boundary(len))
                .map(|len| (matcher.kind(), len))
        })
    }
}
