//! Token stream, interpreter chain and parser.

pub mod core;
pub mod interpreters;
pub mod parser;
pub mod stream;

pub use core::{Interpreter, ParseError, ParseResult};
pub use interpreters::{BoldInterpreter, HeadingInterpreter, ListInterpreter, TextInterpreter};
pub use parser::{Parser, ParsingContext};
pub use stream::TokenStream;
