//! # Tokenizer Component
//!
//! The tokenizer is the first phase of the markup pipeline. It turns raw text
//! into a flat sequence of [`Token`]s that the
//! [`analyzer`](crate::analyzer) later interprets.
//!
//! ## Component Structure
//!
//! * [`token`]: [`TokenKind`] and [`Token`]
//! * [`matcher`]: the [`TokenMatcher`] trait and the built-in matchers
//! * [`tokenizer`]: the [`Tokenizer`] scan loop
//!
//! ## Scanning
//!
//! At each offset the registered matchers are tried in registration order.
//! The first match is emitted as its own token; unmatched characters collect
//! into a text token. Nothing is ever dropped, so joining the token values
//! gives back the input.
//!
//! ## Extending
//!
//! New syntax registers extra matchers, typically a [`PatternMatcher`] for a
//! [`TokenKind::Custom`] kind. Registration order doubles as match priority.

pub mod matcher;
pub mod token;
#[allow(clippy::module_inception)]
pub mod tokenizer;

pub use matcher::{
    NewlineMatcher, PatternMatcher, RegistrationError, RegistrationResult, SymbolMatcher,
    TokenMatcher,
};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
